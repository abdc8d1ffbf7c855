// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! T3D writer for brushes
//!
//! Optional clauses are written only when they carry a non-default value.
//! Floats use the fixed `+00001.000000` format.

use crate::config::T3dConfig;
use crate::model::{Brush, Polygon, Scale, Vec3};
use crate::utils::{format_float, format_vector};
use anyhow::{Context, Result};
use std::fmt::{self, Write as _};
use std::fs::File;
use std::io::Write;
use std::path::Path;

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Begin Polygon")?;
        if !self.texture.is_empty() {
            write!(f, " Texture={}", self.texture)?;
        }
        if self.flags != 0 {
            write!(f, " Flags={}", self.flags)?;
        }
        f.write_char('\n')?;

        if !self.has_default_origin() {
            writeln!(f, "Origin\t{}", format_vector(&self.origin))?;
        }
        if let Some(normal) = &self.normal {
            writeln!(f, "Normal\t{}", format_vector(normal))?;
        }
        if !self.has_default_pan() {
            writeln!(f, "Pan U={} V={}", self.pan.0, self.pan.1)?;
        }
        writeln!(f, "TextureU\t{}", format_vector(&self.u))?;
        writeln!(f, "TextureV\t{}", format_vector(&self.v))?;
        for vertex in &self.vertices {
            writeln!(f, "Vertex\t{}", format_vector(vertex))?;
        }
        writeln!(f, "End Polygon")
    }
}

impl fmt::Display for Brush {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actor_name = self.actor_name.as_deref().filter(|n| !n.is_empty());

        match actor_name {
            Some(name) => writeln!(f, "Begin Actor Class=Brush Name={}", name)?,
            None => writeln!(f, "Begin Actor Class=Brush")?,
        }
        writeln!(f, "CsgOper={}", self.csg)?;
        if self.polyflags != 0 {
            writeln!(f, "PolyFlags={}", self.polyflags)?;
        }
        writeln!(f, "bSelected=True")?;
        write_scale(f, "MainScale", &self.mainscale)?;
        write_scale(f, "PostScale", &self.postscale)?;
        if let Some(group) = self.group.as_deref().filter(|g| !g.is_empty()) {
            writeln!(f, "Group={}", quote_if_needed(group))?;
        }
        if self.location != Vec3::zeros() {
            writeln!(f, "Location=({})", format_coords(&self.location))?;
        }
        let rotation = self.rotation.map(|c| c.round() as i64);
        if rotation.iter().any(|&c| c != 0) {
            writeln!(
                f,
                "Rotation=(Roll={},Pitch={},Yaw={})",
                rotation.x, rotation.y, rotation.z
            )?;
        }
        writeln!(f, "Begin Brush Name={}", self.brush_name)?;
        writeln!(f, "Begin PolyList")?;
        for polygon in &self.polygons {
            write!(f, "{}", polygon)?;
        }
        writeln!(f, "End PolyList")?;
        writeln!(f, "End Brush")?;
        writeln!(f, "Brush=Model'MyLevel.{}'", self.brush_name)?;
        if self.prepivot != Vec3::zeros() {
            writeln!(f, "PrePivot=({})", format_coords(&self.prepivot))?;
        }
        if let Some(name) = actor_name {
            writeln!(f, "Name={}", name)?;
        }
        writeln!(f, "End Actor")
    }
}

fn format_coords(v: &Vec3) -> String {
    format!(
        "X={},Y={},Z={}",
        format_float(v.x),
        format_float(v.y),
        format_float(v.z)
    )
}

fn write_scale(f: &mut fmt::Formatter<'_>, name: &str, scale: &Scale) -> fmt::Result {
    if scale.is_empty() {
        return Ok(());
    }
    let mut parts = Vec::new();
    if let Some(s) = &scale.scale {
        parts.push(format!("Scale=({})", format_coords(s)));
    }
    if let Some(rate) = scale.sheer_rate {
        parts.push(format!("SheerRate={}", format_float(rate)));
    }
    if let Some(axis) = scale.sheer_axis {
        parts.push(format!("SheerAxis={}", axis));
    }
    writeln!(f, "{}=({})", name, parts.join(","))
}

fn quote_if_needed(text: &str) -> String {
    let plain = text
        .chars()
        .all(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | ',' | '=' | '"'));
    if plain {
        text.to_string()
    } else {
        format!("\"{}\"", text.replace('"', ""))
    }
}

/// Render one brush actor
pub fn brush_to_t3d(brush: &Brush) -> String {
    brush.to_string()
}

/// Render brushes as a map document. Empty input gives an empty string.
pub fn export_map(brushes: &[Brush]) -> String {
    if brushes.is_empty() {
        return String::new();
    }
    let mut text = String::from("Begin Map\n");
    for brush in brushes {
        text.push_str(&brush.to_string());
    }
    text.push_str("End Map\n");
    text
}

/// Render brushes without the map wrapper
pub fn export_actors(brushes: &[Brush]) -> String {
    brushes.iter().map(brush_to_t3d).collect()
}

/// Write brushes to a `.t3d` file
pub fn export_t3d_file(brushes: &[Brush], path: impl AsRef<Path>, config: &T3dConfig) -> Result<()> {
    let path = path.as_ref();
    let text = if config.wrap_map {
        export_map(brushes)
    } else {
        export_actors(brushes)
    };

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create T3D file: {}", path.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("Failed to write T3D file: {}", path.display()))?;

    log::info!("Wrote {} brushes to {}", brushes.len(), path.display());
    Ok(())
}
