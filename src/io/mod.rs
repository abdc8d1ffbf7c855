// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - extracting, parsing, importing, and exporting T3D text

mod builder;
mod exporter;
mod extractor;
mod importer;
mod parser;
pub mod property;

pub use builder::{build_brush, coords_from_map, rotation_from_map};
pub use exporter::{brush_to_t3d, export_actors, export_map, export_t3d_file};
pub use extractor::{brush_blocks, filter_brushes, BrushBlock};
pub use importer::{import_t3d_file, prepare_brushes, read_t3d_file};
pub use parser::{
    parse_brush_records, parse_t3d, parse_t3d_named, BrushRecord, Level, PolygonRecord,
    StructureParser, MEMORY_SOURCE,
};
pub use property::{
    parse_actor_property, parse_polygon_property, PolygonProperty, PolygonPropertyError,
    PropertyMap, PropertyValue,
};
