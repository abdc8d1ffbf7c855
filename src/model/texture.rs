// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Texture projection basis of a polygon

use super::Vec3;
use crate::utils::math::approx_eq;
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

const DEGENERATE_EPSILON: f64 = 1e-12;

/// Affine map from a face's 3D surface to texel space:
/// `uv(p) = ((p - origin)·u, (p - origin)·v)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureBasis {
    pub origin: Vec3,
    pub u: Vec3,
    pub v: Vec3,
}

impl Default for TextureBasis {
    fn default() -> Self {
        Self {
            origin: Vec3::zeros(),
            u: Vec3::new(1.0, 0.0, 0.0),
            v: Vec3::new(0.0, 0.0, 1.0),
        }
    }
}

impl TextureBasis {
    /// Solve the basis reproducing texel coordinates `uvs` at three face
    /// points.
    ///
    /// `u` and `v` are built in the plane of the triangle by inverting its
    /// Gram matrix, then `origin` is moved along the plane so that the
    /// first point maps exactly to its UV. Returns `None` for collinear
    /// points or UVs that collapse to a line.
    pub fn from_uv_triangle(points: [Vec3; 3], uvs: [Vector2<f64>; 3]) -> Option<Self> {
        let e1 = points[1] - points[0];
        let e2 = points[2] - points[0];

        let gram = Matrix2::new(e1.dot(&e1), e1.dot(&e2), e2.dot(&e1), e2.dot(&e2));
        if approx_eq(gram.determinant(), 0.0, DEGENERATE_EPSILON) {
            return None;
        }
        let gram_inv = gram.try_inverse()?;

        let axis = |k: usize| -> Vec3 {
            let d = Vector2::new(uvs[1][k] - uvs[0][k], uvs[2][k] - uvs[0][k]);
            let c = gram_inv * d;
            e1 * c.x + e2 * c.y
        };
        let u = axis(0);
        let v = axis(1);

        // Offset from origin to the first point, kept in span(u, v).
        let basis = Matrix2::new(u.dot(&u), u.dot(&v), v.dot(&u), v.dot(&v));
        if approx_eq(basis.determinant(), 0.0, DEGENERATE_EPSILON) {
            return None;
        }
        let c = basis.try_inverse()? * uvs[0];
        let origin = points[0] - (u * c.x + v * c.y);

        Some(Self { origin, u, v })
    }

    pub fn uv(&self, point: &Vec3) -> Vector2<f64> {
        let d = point - self.origin;
        Vector2::new(d.dot(&self.u), d.dot(&self.v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solve_reproduces_uvs() {
        let points = [
            Vec3::new(0.0, 0.0, 64.0),
            Vec3::new(128.0, 0.0, 64.0),
            Vec3::new(0.0, 128.0, 64.0),
        ];
        let uvs = [
            Vector2::new(32.0, 16.0),
            Vector2::new(160.0, 16.0),
            Vector2::new(32.0, -112.0),
        ];
        let basis = TextureBasis::from_uv_triangle(points, uvs).unwrap();
        for (p, uv) in points.iter().zip(uvs.iter()) {
            let got = basis.uv(p);
            assert_relative_eq!(got.x, uv.x, epsilon = 1e-9);
            assert_relative_eq!(got.y, uv.y, epsilon = 1e-9);
        }
        assert_relative_eq!(basis.u.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(basis.v.y, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_slanted_face() {
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(64.0, 64.0, 0.0),
            Vec3::new(0.0, 0.0, 32.0),
        ];
        let uvs = [
            Vector2::new(0.0, 0.0),
            Vector2::new(90.0, 0.0),
            Vector2::new(0.0, 32.0),
        ];
        let basis = TextureBasis::from_uv_triangle(points, uvs).unwrap();
        assert_relative_eq!(basis.origin.norm(), 0.0, epsilon = 1e-9);
        for (p, uv) in points.iter().zip(uvs.iter()) {
            let got = basis.uv(p);
            assert_relative_eq!(got.x, uv.x, epsilon = 1e-9);
            assert_relative_eq!(got.y, uv.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_degenerate_input() {
        let collinear = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        ];
        let uvs = [Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)];
        assert!(TextureBasis::from_uv_triangle(collinear, uvs).is_none());

        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let flat_uvs = [Vector2::new(5.0, 5.0); 3];
        assert!(TextureBasis::from_uv_triangle(points, flat_uvs).is_none());
    }
}
