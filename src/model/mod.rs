// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Brush scene model: vectors, polygons and brush actors

mod brush;
mod enums;
mod polygon;
mod texture;

pub use brush::{Brush, MeshData, Scale, DEFAULT_BRUSH_NAME, UNREAL_ROTATION_UNITS};
pub use enums::{CsgOper, LenientEnum, SheerAxis};
pub use polygon::Polygon;
pub use texture::TextureBasis;

use crate::utils::round_to_grid;

/// 3D vector type alias
pub type Vec3 = nalgebra::Vector3<f64>;

/// A polygon corner. Same representation as [`Vec3`], used as a point.
pub type Vertex = Vec3;

/// Grid snapping and point helpers for [`Vec3`]
pub trait GridSnap {
    /// Round every component to the nearest multiple of `grid_size`, in place
    fn snap(&mut self, grid_size: f64);

    /// Euclidean distance to another point
    fn distance_to(&self, other: &Self) -> f64;
}

impl GridSnap for Vec3 {
    fn snap(&mut self, grid_size: f64) {
        for c in self.iter_mut() {
            *c = round_to_grid(*c, grid_size);
        }
    }

    fn distance_to(&self, other: &Self) -> f64 {
        (other - self).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_arithmetic() {
        assert_eq!(Vec3::new(1.0, 0.0, 0.0) + Vec3::new(2.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(
            Vec3::new(100.0, 200.0, 0.0) - Vec3::new(0.0, 50.0, 2.0),
            Vec3::new(100.0, 150.0, -2.0)
        );
        assert_eq!(Vec3::new(1.0, -2.0, 4.0) * 2.0, Vec3::new(2.0, -4.0, 8.0));
        assert_eq!(Vec3::new(2.0, -4.0, 8.0) / 2.0, Vec3::new(1.0, -2.0, 4.0));
        assert_ne!(Vec3::zeros(), Vec3::new(0.00001, 0.0, 0.0));
    }

    #[test]
    fn test_vec3_length() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(v.norm(), 5.0);
        approx::assert_relative_eq!(v.normalize(), Vec3::new(0.6, 0.8, 0.0));
        assert_eq!(Vec3::zeros().distance_to(&v), 5.0);
    }

    #[test]
    fn test_snap() {
        let mut v = Vec3::new(14.0, -9.0, 7.9);
        v.snap(16.0);
        assert_eq!(v, Vec3::new(16.0, -16.0, 0.0));
        let snapped = v;
        v.snap(16.0);
        assert_eq!(v, snapped);
    }
}
