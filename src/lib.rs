// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! t3dkit
//!
//! Reads and writes the brush geometry in Unreal Engine T3D text exports.
//! Brush actors are extracted from a whole map file, parsed into a typed
//! [`Brush`]/[`Polygon`] model and written back as T3D text that the editor
//! can import again.

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod utils;

pub use config::T3dConfig;
pub use error::{T3dError, T3dResult};
pub use io::{
    brush_to_t3d, export_map, export_t3d_file, filter_brushes, import_t3d_file, parse_t3d,
    parse_t3d_named, read_t3d_file,
};
pub use model::{Brush, CsgOper, Polygon, Scale, SheerAxis, TextureBasis, Vec3, Vertex};

use anyhow::Result;
use std::path::Path;

/// Parse T3D text and render it back in canonical form
pub fn reformat(source: &str) -> T3dResult<String> {
    Ok(export_map(&parse_t3d(source)?))
}

/// Import a T3D file using the configuration from `t3dkit.toml` and the
/// environment
pub fn open(path: impl AsRef<Path>) -> Result<Vec<Brush>> {
    let config = T3dConfig::load()?;
    import_t3d_file(path, &config)
}
