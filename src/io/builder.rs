// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Raw brush records to typed brushes

use super::parser::{BrushRecord, PolygonRecord};
use super::property::{PropertyMap, PropertyValue};
use crate::model::{
    Brush, CsgOper, LenientEnum, Polygon, Scale, SheerAxis, Vec3, DEFAULT_BRUSH_NAME,
};

/// Build a typed brush, filling in defaults for anything the actor omitted
pub fn build_brush(record: BrushRecord) -> Brush {
    let props = &record.properties;

    let actor_name = props
        .get("name")
        .and_then(PropertyValue::to_text)
        .or(record.actor_name);

    let csg = match props.get("csgoper") {
        Some(PropertyValue::Number(n, _)) => CsgOper::from_index(*n as i64),
        Some(PropertyValue::Text(s)) => CsgOper::from_name(s),
        _ => CsgOper::None,
    };

    let polyflags = props
        .get("polyflags")
        .and_then(PropertyValue::as_number)
        .and_then(flags_from_number)
        .unwrap_or(0);

    Brush {
        actor_name,
        brush_name: record
            .brush_name
            .unwrap_or_else(|| DEFAULT_BRUSH_NAME.to_string()),
        csg,
        mainscale: scale_property(props, "mainscale"),
        postscale: scale_property(props, "postscale"),
        group: props
            .get("group")
            .and_then(PropertyValue::to_text)
            .filter(|g| !g.is_empty()),
        location: coords_property(props, "location"),
        rotation: props
            .get("rotation")
            .and_then(PropertyValue::as_map)
            .map(rotation_from_map)
            .unwrap_or_else(Vec3::zeros),
        prepivot: coords_property(props, "prepivot"),
        polyflags,
        polygons: record.polygons.into_iter().map(build_polygon).collect(),
    }
}

fn build_polygon(record: PolygonRecord) -> Polygon {
    let defaults = Polygon::default();
    Polygon {
        vertices: record.vertices,
        texture: record.texture.unwrap_or_default(),
        flags: record.flags.unwrap_or(0),
        origin: record.origin.unwrap_or(defaults.origin),
        normal: record.normal,
        pan: record.pan.unwrap_or(defaults.pan),
        u: record.u.unwrap_or(defaults.u),
        v: record.v.unwrap_or(defaults.v),
    }
}

/// Flags are a DWORD the editor may print signed, so `-1` is `0xFFFFFFFF`.
/// Values outside both `i32` and `u32` have no meaning.
pub(crate) fn flags_from_integer(n: i64) -> Option<u32> {
    if let Ok(signed) = i32::try_from(n) {
        Some(signed as u32)
    } else {
        u32::try_from(n).ok()
    }
}

fn flags_from_number(n: f64) -> Option<u32> {
    if n.fract() != 0.0 || n < f64::from(i32::MIN) || n > f64::from(u32::MAX) {
        return None;
    }
    flags_from_integer(n as i64)
}

/// `X`/`Y`/`Z` keys to a vector, `default` for missing axes
pub fn coords_from_map(map: &PropertyMap, default: f64) -> Vec3 {
    let axis = |key: &str| map.get(key).and_then(PropertyValue::as_number).unwrap_or(default);
    Vec3::new(axis("x"), axis("y"), axis("z"))
}

/// `Roll`/`Pitch`/`Yaw` keys to a vector, zero for missing components
pub fn rotation_from_map(map: &PropertyMap) -> Vec3 {
    let component = |key: &str| map.get(key).and_then(PropertyValue::as_number).unwrap_or(0.0);
    Vec3::new(component("roll"), component("pitch"), component("yaw"))
}

fn coords_property(props: &PropertyMap, key: &str) -> Vec3 {
    props
        .get(key)
        .and_then(PropertyValue::as_map)
        .map(|m| coords_from_map(m, 0.0))
        .unwrap_or_else(Vec3::zeros)
}

fn scale_property(props: &PropertyMap, key: &str) -> Scale {
    let Some(map) = props.get(key).and_then(PropertyValue::as_map) else {
        return Scale::default();
    };
    Scale {
        scale: map
            .get("scale")
            .and_then(PropertyValue::as_map)
            .map(|m| coords_from_map(m, 1.0)),
        sheer_rate: map.get("sheerrate").and_then(PropertyValue::as_number),
        sheer_axis: map.get("sheeraxis").map(|v| match v {
            PropertyValue::Number(n, _) => SheerAxis::from_index(*n as i64),
            PropertyValue::Text(s) => SheerAxis::from_name(s),
            PropertyValue::Map(_) => SheerAxis::None,
        }),
    }
}
