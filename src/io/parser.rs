// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Block structure parser for brush actors
//!
//! Walks `Begin`/`End` lines with an explicit stack of in-progress frames,
//! one per nesting level: actor, brush, polygon list, polygon. Each
//! completed actor is emitted as a [`BrushRecord`] holding the raw property
//! tree and polygon records, which [`super::builder`] turns into typed
//! brushes.

use super::builder::{build_brush, flags_from_integer};
use super::extractor::brush_blocks;
use super::property::{
    parse_actor_property, parse_polygon_property, PolygonProperty, PropertyMap,
};
use crate::error::{T3dError, T3dResult};
use crate::model::{Brush, Vec3};
use log::{debug, trace};
use std::collections::HashMap;

/// File name reported in errors for text that did not come from a file
pub const MEMORY_SOURCE: &str = "<memory>";

/// Nesting level of the structural parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Root,
    Actor,
    Brush,
    PolyList,
    Polygon,
}

impl Level {
    fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            0 => Some(Level::Root),
            1 => Some(Level::Actor),
            2 => Some(Level::Brush),
            3 => Some(Level::PolyList),
            4 => Some(Level::Polygon),
            _ => None,
        }
    }

    /// Block name following `Begin`/`End` at this level
    pub fn block_name(self) -> &'static str {
        match self {
            Level::Root => "root",
            Level::Actor => "actor",
            Level::Brush => "brush",
            Level::PolyList => "polylist",
            Level::Polygon => "polygon",
        }
    }
}

/// Raw attributes of one polygon as read
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonRecord {
    pub texture: Option<String>,
    pub flags: Option<u32>,
    pub vertices: Vec<Vec3>,
    pub origin: Option<Vec3>,
    pub normal: Option<Vec3>,
    pub pan: Option<(i32, i32)>,
    pub u: Option<Vec3>,
    pub v: Option<Vec3>,
}

impl PolygonRecord {
    fn apply(&mut self, property: PolygonProperty) {
        match property {
            PolygonProperty::Pan(u, v) => self.pan = Some((u, v)),
            PolygonProperty::Origin(o) => self.origin = Some(o),
            PolygonProperty::Normal(n) => self.normal = Some(n),
            PolygonProperty::TextureU(u) => self.u = Some(u),
            PolygonProperty::TextureV(v) => self.v = Some(v),
            PolygonProperty::Vertex(v) => self.vertices.push(v),
        }
    }
}

/// Raw content of one brush actor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrushRecord {
    /// `Name=` from the `Begin Actor` line
    pub actor_name: Option<String>,
    /// `Name=` from the `Begin Brush` line
    pub brush_name: Option<String>,
    /// Actor level properties, keyed by lowercase name
    pub properties: PropertyMap,
    pub polygons: Vec<PolygonRecord>,
}

#[derive(Debug)]
enum Frame {
    Actor(BrushRecord),
    Brush,
    PolyList(Vec<PolygonRecord>),
    Polygon(PolygonRecord),
}

/// Line driven state machine over brush actor text
#[derive(Debug)]
pub struct StructureParser {
    file: String,
    stack: Vec<Frame>,
    records: Vec<BrushRecord>,
    last_line: usize,
    last_text: String,
}

impl StructureParser {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            stack: Vec::new(),
            records: Vec::new(),
            last_line: 0,
            last_text: String::new(),
        }
    }

    /// Current nesting level
    pub fn level(&self) -> Level {
        // The stack never grows past the polygon level.
        Level::from_depth(self.stack.len()).unwrap_or(Level::Polygon)
    }

    /// Process one source line. `line_number` is 1-based and only used for
    /// error reporting.
    pub fn feed_line(&mut self, line_number: usize, raw: &str) -> T3dResult<()> {
        let line = raw.trim();
        if line.is_empty() {
            return Ok(());
        }
        self.last_line = line_number;
        self.last_text.clear();
        self.last_text.push_str(line);

        let words: Vec<&str> = line.split_whitespace().collect();
        if words[0].eq_ignore_ascii_case("begin") {
            self.begin(line_number, line, &words)
        } else if words[0].eq_ignore_ascii_case("end") {
            self.end(line_number, line, &words)
        } else {
            self.property(line_number, line)
        }
    }

    /// Finish parsing. Fails when input ended inside a block.
    pub fn finish(self) -> T3dResult<Vec<BrushRecord>> {
        if !self.stack.is_empty() {
            let level = self.level();
            return Err(T3dError::Structure {
                file: self.file,
                line: self.last_line,
                text: self.last_text,
                message: format!(
                    "Input ended inside a '{}' block instead of at root level",
                    level.block_name()
                ),
            });
        }
        Ok(self.records)
    }

    fn begin(&mut self, line_number: usize, line: &str, words: &[&str]) -> T3dResult<()> {
        let next = Level::from_depth(self.stack.len() + 1).ok_or_else(|| {
            self.structure_error(line_number, line, "Unexpected Begin block inside a polygon")
        })?;
        let block = words.get(1).ok_or_else(|| {
            self.structure_error(line_number, line, "Begin line without a block name")
        })?;
        if !block.eq_ignore_ascii_case(next.block_name()) {
            return Err(self.structure_error(
                line_number,
                line,
                &format!(
                    "Unexpected Begin block '{}', expected '{}'",
                    block,
                    next.block_name()
                ),
            ));
        }

        let mut attributes = name_values(&words[2..]);
        match next {
            Level::Actor => {
                let actor_name = attributes.remove("name");
                debug!("Begin brush actor {:?} at line {}", actor_name, line_number);
                self.stack.push(Frame::Actor(BrushRecord {
                    actor_name,
                    ..Default::default()
                }));
            }
            Level::Brush => {
                if let Some(Frame::Actor(record)) = self.stack.first_mut() {
                    record.brush_name = attributes.remove("name");
                }
                self.stack.push(Frame::Brush);
            }
            Level::PolyList => self.stack.push(Frame::PolyList(Vec::new())),
            Level::Polygon => {
                let flags = match attributes.remove("flags") {
                    Some(flags) => Some(
                        flags
                            .parse::<i64>()
                            .ok()
                            .and_then(flags_from_integer)
                            .ok_or_else(|| T3dError::InvalidPolygonProperty {
                                file: self.file.clone(),
                                line: line_number,
                                text: line.to_string(),
                                message: format!("Invalid polygon flags '{}'", flags),
                            })?,
                    ),
                    None => None,
                };
                self.stack.push(Frame::Polygon(PolygonRecord {
                    texture: attributes.remove("texture"),
                    flags,
                    ..Default::default()
                }));
            }
            Level::Root => unreachable!("Begin always enters a deeper level"),
        }
        Ok(())
    }

    fn end(&mut self, line_number: usize, line: &str, words: &[&str]) -> T3dResult<()> {
        let current = self.level();
        if current == Level::Root {
            return Err(self.structure_error(line_number, line, "Unexpected End block at root level"));
        }
        let block = words.get(1).ok_or_else(|| {
            self.structure_error(line_number, line, "End line without a block name")
        })?;
        if !block.eq_ignore_ascii_case(current.block_name()) {
            return Err(self.structure_error(
                line_number,
                line,
                &format!(
                    "Unexpected End block '{}', expected '{}'",
                    block,
                    current.block_name()
                ),
            ));
        }

        match self.stack.pop() {
            Some(Frame::Polygon(polygon)) => {
                if let Some(Frame::PolyList(list)) = self.stack.last_mut() {
                    list.push(polygon);
                }
            }
            Some(Frame::PolyList(list)) => {
                if let Some(Frame::Actor(record)) = self.stack.first_mut() {
                    record.polygons = list;
                }
            }
            Some(Frame::Actor(record)) => {
                debug!(
                    "End brush actor {:?}: {} polygons, {} properties",
                    record.actor_name,
                    record.polygons.len(),
                    record.properties.len()
                );
                self.records.push(record);
            }
            Some(Frame::Brush) | None => {}
        }
        Ok(())
    }

    fn property(&mut self, line_number: usize, line: &str) -> T3dResult<()> {
        match self.stack.last_mut() {
            Some(Frame::Actor(record)) => match parse_actor_property(line) {
                Some((key, value)) => {
                    record.properties.insert(key, value);
                }
                None => trace!("Ignoring actor line {}: {}", line_number, line),
            },
            Some(Frame::Polygon(polygon)) => match parse_polygon_property(line) {
                Ok(property) => polygon.apply(property),
                Err(e) => {
                    return Err(T3dError::InvalidPolygonProperty {
                        file: self.file.clone(),
                        line: line_number,
                        text: line.to_string(),
                        message: e.to_string(),
                    })
                }
            },
            _ => {}
        }
        Ok(())
    }

    fn structure_error(&self, line_number: usize, line: &str, message: &str) -> T3dError {
        T3dError::Structure {
            file: self.file.clone(),
            line: line_number,
            text: line.to_string(),
            message: message.to_string(),
        }
    }
}

/// `key=value` words to a map with lowercase keys. Words without `=` are
/// skipped.
fn name_values(words: &[&str]) -> HashMap<String, String> {
    words
        .iter()
        .filter_map(|w| w.split_once('='))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect()
}

/// Parse text that contains only brush actors into raw records. Line
/// numbers in errors count from the start of `text`.
pub fn parse_brush_records(text: &str, file: &str) -> T3dResult<Vec<BrushRecord>> {
    let mut parser = StructureParser::new(file);
    for (i, line) in text.lines().enumerate() {
        parser.feed_line(i + 1, line)?;
    }
    parser.finish()
}

/// Parse a whole T3D document into brushes. Non-brush actors are ignored.
pub fn parse_t3d(text: &str) -> T3dResult<Vec<Brush>> {
    parse_t3d_named(text, MEMORY_SOURCE)
}

/// Like [`parse_t3d`], naming the source in errors. Error line numbers
/// refer to lines of `text`.
pub fn parse_t3d_named(text: &str, file: &str) -> T3dResult<Vec<Brush>> {
    let mut parser = StructureParser::new(file);
    for block in brush_blocks(text) {
        for (i, line) in block.text.lines().enumerate() {
            parser.feed_line(block.first_line + i, line)?;
        }
    }
    Ok(parser.finish()?.into_iter().map(build_brush).collect())
}
