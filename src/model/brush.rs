// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Brush actor definition

use super::{CsgOper, GridSnap, Polygon, SheerAxis, Vec3};
use serde::{Deserialize, Serialize};

/// Internal model name used when a brush does not name one
pub const DEFAULT_BRUSH_NAME: &str = "Brush";

/// Unreal angular units per full turn
pub const UNREAL_ROTATION_UNITS: f64 = 65536.0;

/// `MainScale`/`PostScale` block. Every part is optional; an empty scale is
/// not written at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub scale: Option<Vec3>,
    pub sheer_rate: Option<f64>,
    pub sheer_axis: Option<SheerAxis>,
}

impl Scale {
    pub fn new(scale: Vec3) -> Self {
        Self {
            scale: Some(scale),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.scale.is_none() && self.sheer_rate.is_none() && self.sheer_axis.is_none()
    }
}

/// Mesh description handed to geometry consumers: flattened points, no
/// explicit edges, one index list per polygon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub points: Vec<[f64; 3]>,
    pub edges: Vec<[usize; 2]>,
    pub faces: Vec<Vec<usize>>,
}

/// A convex geometry actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brush {
    /// Actor name; the editor generates one when omitted
    pub actor_name: Option<String>,
    /// Name of the internal model
    pub brush_name: String,
    pub csg: CsgOper,
    #[serde(default)]
    pub mainscale: Scale,
    #[serde(default)]
    pub postscale: Scale,
    #[serde(default)]
    pub group: Option<String>,
    pub location: Vec3,
    /// Roll, pitch, yaw in Unreal angular units
    pub rotation: Vec3,
    pub prepivot: Vec3,
    #[serde(default)]
    pub polyflags: u32,
    pub polygons: Vec<Polygon>,
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(Vec::new(), Vec3::zeros(), None)
    }
}

impl Brush {
    pub fn new(polygons: Vec<Polygon>, location: Vec3, actor_name: Option<String>) -> Self {
        Self {
            actor_name,
            brush_name: DEFAULT_BRUSH_NAME.to_string(),
            csg: CsgOper::CsgSubtract,
            mainscale: Scale::default(),
            postscale: Scale::default(),
            group: None,
            location,
            rotation: Vec3::zeros(),
            prepivot: Vec3::zeros(),
            polyflags: 0,
            polygons,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.polygons.iter().map(|p| p.vertices.len()).sum()
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// The editor's builder brush is grouped as `cube`
    pub fn is_red_brush(&self) -> bool {
        self.group
            .as_deref()
            .is_some_and(|g| g.eq_ignore_ascii_case("cube"))
    }

    /// Rotation as roll, pitch, yaw in radians
    pub fn rotation_radians(&self) -> Vec3 {
        self.rotation * (std::f64::consts::TAU / UNREAL_ROTATION_UNITS)
    }

    /// Points and faces for mesh construction. Points are concatenated per
    /// polygon in brush order; each face lists its own points in winding
    /// order.
    pub fn mesh_data(&self) -> MeshData {
        let mut data = MeshData::default();
        for polygon in &self.polygons {
            let start = data.points.len();
            data.points
                .extend(polygon.vertices.iter().map(|v| [v.x, v.y, v.z]));
            data.faces.push((start..data.points.len()).collect());
        }
        data
    }

    /// Snap every vertex and the location to a grid
    pub fn snap(&mut self, grid_size: f64) {
        for polygon in &mut self.polygons {
            polygon.snap(grid_size);
        }
        self.location.snap(grid_size);
    }
}
