// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Per-file brush statistics for the `stats` command

use crate::model::{Brush, CsgOper};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Texture coordinate extent in texture tiles
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UvRange {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl UvRange {
    fn include(range: Option<Self>, u: f64, v: f64) -> Self {
        match range {
            None => Self {
                min: [u, v],
                max: [u, v],
            },
            Some(r) => Self {
                min: [r.min[0].min(u), r.min[1].min(v)],
                max: [r.max[0].max(u), r.max[1].max(v)],
            },
        }
    }
}

/// Summary of the brushes read from one file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileStats {
    pub brushes: usize,
    pub polygons: usize,
    pub vertices: usize,
    /// Polygons with fewer than three vertices
    pub degenerate_polygons: usize,
    pub csg: BTreeMap<String, usize>,
    pub textures: BTreeSet<String>,
    pub uv_range: Option<UvRange>,
}

impl FileStats {
    /// Collect statistics. UVs are divided by `texture_size` so the range is
    /// expressed in texture repeats.
    pub fn collect(brushes: &[Brush], texture_size: f64) -> Self {
        let mut stats = Self {
            brushes: brushes.len(),
            ..Default::default()
        };

        for brush in brushes {
            *stats.csg.entry(csg_label(brush.csg).to_string()).or_default() += 1;
            stats.polygons += brush.polygon_count();
            stats.vertices += brush.vertex_count();

            for polygon in &brush.polygons {
                if !polygon.is_valid() {
                    stats.degenerate_polygons += 1;
                }
                if !polygon.texture.is_empty() {
                    stats.textures.insert(polygon.texture.clone());
                }
                for vertex in &polygon.vertices {
                    let uv = polygon.uv(vertex) / texture_size;
                    stats.uv_range = Some(UvRange::include(stats.uv_range, uv.x, uv.y));
                }
            }
        }

        stats
    }
}

fn csg_label(csg: CsgOper) -> &'static str {
    match csg {
        CsgOper::None => "none",
        CsgOper::CsgAdd => "add",
        CsgOper::CsgSubtract => "subtract",
    }
}
