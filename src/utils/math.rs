// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

use crate::model::Vec3;

/// Render a float in T3D fixed format: always signed, zero padded to 13
/// characters, 6 fractional digits (`+00001.000000`).
pub fn format_float(value: f64) -> String {
    format!("{:+013.6}", value)
}

/// Apply [`format_float`] to each component, comma separated
pub fn format_vector(v: &Vec3) -> String {
    format!(
        "{},{},{}",
        format_float(v.x),
        format_float(v.y),
        format_float(v.z)
    )
}

/// Round value to the closest point on a grid of size `grid_size`
pub fn round_to_grid(value: f64, grid_size: f64) -> f64 {
    (value / grid_size).round() * grid_size
}

/// Check if two floats are approximately equal
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
