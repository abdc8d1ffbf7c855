// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Brush face with its texture projection attributes

use super::{GridSnap, TextureBasis, Vec3, Vertex};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// One planar, convex face of a brush.
///
/// Vertex order is the winding order and is kept exactly as read.
/// `origin`, `u`, `v` and `pan` map a point on the face to texture space,
/// see [`Polygon::uv`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
    /// Texture name; empty means no material
    #[serde(default)]
    pub texture: String,
    /// Surface flags bitmask
    #[serde(default)]
    pub flags: u32,
    pub origin: Vec3,
    /// Face normal as written by the editor, when present
    #[serde(default)]
    pub normal: Option<Vec3>,
    pub pan: (i32, i32),
    pub u: Vec3,
    pub v: Vec3,
}

impl Default for Polygon {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            texture: String::new(),
            flags: 0,
            origin: Vec3::zeros(),
            normal: None,
            pan: (0, 0),
            u: Vec3::new(1.0, 0.0, 0.0),
            v: Vec3::new(0.0, 0.0, 1.0),
        }
    }
}

impl Polygon {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self {
            vertices,
            ..Default::default()
        }
    }

    /// Append more vertices
    pub fn add_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = Vertex>,
    {
        self.vertices.extend(vertices);
    }

    /// A face needs at least three corners to be meaningful
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 3
    }

    pub fn has_default_origin(&self) -> bool {
        self.origin == Vec3::zeros()
    }

    pub fn has_default_pan(&self) -> bool {
        self.pan == (0, 0)
    }

    /// Texture space coordinates (in texels) of a point on this face
    pub fn uv(&self, vertex: &Vertex) -> Vector2<f64> {
        let d = vertex - self.origin;
        Vector2::new(
            d.dot(&self.u) + f64::from(self.pan.0),
            d.dot(&self.v) + f64::from(self.pan.1),
        )
    }

    pub fn texture_basis(&self) -> TextureBasis {
        TextureBasis {
            origin: self.origin,
            u: self.u,
            v: self.v,
        }
    }

    pub fn set_texture_basis(&mut self, basis: TextureBasis) {
        self.origin = basis.origin;
        self.u = basis.u;
        self.v = basis.v;
    }

    pub fn snap(&mut self, grid_size: f64) {
        for v in &mut self.vertices {
            v.snap(grid_size);
        }
    }
}
