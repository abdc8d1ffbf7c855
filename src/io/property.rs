// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Property line interpreters using pest
//!
//! Actor properties use Unreal's parenthesised attribute syntax and become a
//! tagged tree of numbers, strings and maps. Polygon properties are the
//! fixed set of vector and pan lines found inside `Begin Polygon` blocks.

use crate::model::Vec3;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "io/t3d.pest"]
struct T3dLineParser;

/// Nested actor property map. Keys are lowercase.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

/// Value of an actor property
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Parsed value and the literal as written (`007`, `+00001.000000`)
    Number(f64, String),
    Text(String),
    Map(PropertyMap),
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropertyValue::Number(n, _) => serializer.serialize_f64(*n),
            PropertyValue::Text(s) => serializer.serialize_str(s),
            PropertyValue::Map(m) => m.serialize(serializer),
        }
    }
}

impl PropertyValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n, _) => Some(*n),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&PropertyMap> {
        match self {
            PropertyValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Scalar value as text. Numbers give back their literal
    /// (`Group=007` gives `"007"`); maps have no text form.
    pub fn to_text(&self) -> Option<String> {
        match self {
            PropertyValue::Text(s) => Some(s.clone()),
            PropertyValue::Number(_, raw) => Some(raw.clone()),
            PropertyValue::Map(_) => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(n, _) => write!(f, "{}", n),
            PropertyValue::Text(s) => f.write_str(s),
            PropertyValue::Map(m) => {
                f.write_str("(")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}={}", k, v)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Parse `Key=Value` into a lowercase key and its value tree.
///
/// Returns `None` for lines outside the grammar; those carry actor data we
/// do not model and are dropped by the caller.
pub fn parse_actor_property(line: &str) -> Option<(String, PropertyValue)> {
    let mut pairs = T3dLineParser::parse(Rule::actor_property, line).ok()?;
    let pair = pairs.next()?.into_inner().next()?;
    convert_pair(pair)
}

fn convert_pair(pair: Pair<Rule>) -> Option<(String, PropertyValue)> {
    let mut inner = pair.into_inner();
    let key = inner.next()?.as_str().to_ascii_lowercase();
    let value = convert_value(inner.next()?)?;
    Some((key, value))
}

fn convert_value(pair: Pair<Rule>) -> Option<PropertyValue> {
    match pair.as_rule() {
        Rule::map => {
            let mut map = PropertyMap::new();
            for entry in pair.into_inner() {
                let (key, value) = convert_pair(entry)?;
                map.insert(key, value);
            }
            Some(PropertyValue::Map(map))
        }
        Rule::quoted => {
            let text = pair.into_inner().next().map(|p| p.as_str()).unwrap_or("");
            Some(PropertyValue::Text(text.to_string()))
        }
        Rule::number => {
            let raw = pair.as_str();
            raw.parse()
                .ok()
                .map(|n| PropertyValue::Number(n, raw.to_string()))
        }
        Rule::bare => Some(PropertyValue::Text(pair.as_str().to_string())),
        _ => None,
    }
}

/// One line of a `Begin Polygon` block
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolygonProperty {
    Pan(i32, i32),
    Origin(Vec3),
    Normal(Vec3),
    TextureU(Vec3),
    TextureV(Vec3),
    Vertex(Vec3),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonPropertyError {
    #[error("Invalid Polygon property")]
    Unrecognized,

    #[error("Expected 3 vector components, found {0}")]
    Arity(usize),

    #[error("Invalid number `{0}`")]
    Number(String),
}

/// Parse a polygon property line such as
/// `Vertex +00001.000000,-00002.000000,-00008.500000` or `Pan U=4 V=-2`.
pub fn parse_polygon_property(line: &str) -> Result<PolygonProperty, PolygonPropertyError> {
    let body = T3dLineParser::parse(Rule::polygon_property, line)
        .ok()
        .and_then(|mut pairs| pairs.next())
        .and_then(|p| p.into_inner().next())
        .ok_or(PolygonPropertyError::Unrecognized)?;

    match body.as_rule() {
        Rule::pan_line => {
            let values = body
                .into_inner()
                .map(|p| {
                    p.as_str()
                        .parse::<i32>()
                        .map_err(|_| PolygonPropertyError::Number(p.as_str().to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            match values[..] {
                [u, v] => Ok(PolygonProperty::Pan(u, v)),
                _ => Err(PolygonPropertyError::Unrecognized),
            }
        }
        Rule::vector_line => {
            let mut inner = body.into_inner();
            let keyword = inner
                .next()
                .ok_or(PolygonPropertyError::Unrecognized)?
                .as_str()
                .to_ascii_lowercase();
            let values = inner
                .map(|p| {
                    p.as_str()
                        .parse::<f64>()
                        .map_err(|_| PolygonPropertyError::Number(p.as_str().to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            let v = match values[..] {
                [x, y, z] => Vec3::new(x, y, z),
                _ => return Err(PolygonPropertyError::Arity(values.len())),
            };
            match keyword.as_str() {
                "origin" => Ok(PolygonProperty::Origin(v)),
                "normal" => Ok(PolygonProperty::Normal(v)),
                "textureu" => Ok(PolygonProperty::TextureU(v)),
                "texturev" => Ok(PolygonProperty::TextureV(v)),
                "vertex" => Ok(PolygonProperty::Vertex(v)),
                _ => Err(PolygonPropertyError::Unrecognized),
            }
        }
        _ => Err(PolygonPropertyError::Unrecognized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(value: &PropertyValue) -> &PropertyMap {
        value.as_map().expect("map value")
    }

    #[test]
    fn test_nested_scale() {
        let (key, value) =
            parse_actor_property("TempScale=(Scale=(X=2.5,Y=4),SheerAxis=SHEER_ZX)").unwrap();
        assert_eq!(key, "tempscale");
        let scale = map(&map(&value)["scale"]);
        assert_eq!(scale["x"].as_number(), Some(2.5));
        assert_eq!(scale["y"].as_number(), Some(4.0));
        assert!(!scale.contains_key("z"));
        assert_eq!(
            map(&value)["sheeraxis"],
            PropertyValue::Text("SHEER_ZX".to_string())
        );
    }

    #[test]
    fn test_scalar_properties() {
        assert_eq!(
            parse_actor_property("CsgOper=CSG_Subtract"),
            Some(("csgoper".to_string(), PropertyValue::Text("CSG_Subtract".to_string())))
        );
        assert_eq!(
            parse_actor_property("PolyFlags=32"),
            Some((
                "polyflags".to_string(),
                PropertyValue::Number(32.0, "32".to_string())
            ))
        );
        assert_eq!(
            parse_actor_property("Group=\"Cube\""),
            Some(("group".to_string(), PropertyValue::Text("Cube".to_string())))
        );
        assert_eq!(
            parse_actor_property("Location=(X=-00064.000000, Y=+128.5)").map(|(_, v)| v.to_string()),
            Some("(x=-64,y=128.5)".to_string())
        );
    }

    #[test]
    fn test_bare_words_with_digits() {
        let (_, value) = parse_actor_property("Name=Brush12").unwrap();
        assert_eq!(value, PropertyValue::Text("Brush12".to_string()));
        let (_, value) = parse_actor_property("Brush=Model'MyLevel.Brush'").unwrap();
        assert_eq!(value.to_text().unwrap(), "Model'MyLevel.Brush'");
    }

    #[test]
    fn test_numeric_literals_keep_their_text() {
        let (_, value) = parse_actor_property("Group=007").unwrap();
        assert_eq!(value.as_number(), Some(7.0));
        assert_eq!(value.to_text().as_deref(), Some("007"));
        let (_, value) = parse_actor_property("Name=1e3").unwrap();
        assert_eq!(value.to_text().as_deref(), Some("1e3"));
        assert_eq!(serde_json::to_string(&value).unwrap(), "1000.0");
    }

    #[test]
    fn test_unparseable_actor_lines() {
        assert!(parse_actor_property("Skins(0)=Texture'Foo'").is_none());
        assert!(parse_actor_property("Location=(X=1").is_none());
        assert!(parse_actor_property("Tag=").is_none());
        assert!(parse_actor_property("just words").is_none());
    }

    #[test]
    fn test_polygon_vectors() {
        assert_eq!(
            parse_polygon_property("Vertex   +00001.000000,-00002.000000,-00008.500000"),
            Ok(PolygonProperty::Vertex(Vec3::new(1.0, -2.0, -8.5)))
        );
        assert_eq!(
            parse_polygon_property("textureu\t+00000.000000,+00001.000000,+00000.000000"),
            Ok(PolygonProperty::TextureU(Vec3::new(0.0, 1.0, 0.0)))
        );
        assert_eq!(
            parse_polygon_property("TextureV -0.5,0,1"),
            Ok(PolygonProperty::TextureV(Vec3::new(-0.5, 0.0, 1.0)))
        );
        assert_eq!(
            parse_polygon_property("Origin +00000.000000,+00000.000000,+00064.000000"),
            Ok(PolygonProperty::Origin(Vec3::new(0.0, 0.0, 64.0)))
        );
        assert_eq!(
            parse_polygon_property("Normal +00000.000000,+00000.000000,-00001.000000"),
            Ok(PolygonProperty::Normal(Vec3::new(0.0, 0.0, -1.0)))
        );
    }

    #[test]
    fn test_polygon_pan() {
        assert_eq!(parse_polygon_property("Pan U=4 V=-2"), Ok(PolygonProperty::Pan(4, -2)));
        assert_eq!(parse_polygon_property("pan u=0 v=0"), Ok(PolygonProperty::Pan(0, 0)));
        assert_eq!(
            parse_polygon_property("Pan U=1"),
            Err(PolygonPropertyError::Unrecognized)
        );
    }

    #[test]
    fn test_polygon_errors() {
        assert_eq!(
            parse_polygon_property("Vertex 1,2"),
            Err(PolygonPropertyError::Arity(2))
        );
        assert_eq!(
            parse_polygon_property("Frobnicate 1,2,3"),
            Err(PolygonPropertyError::Unrecognized)
        );
        assert_eq!(
            parse_polygon_property("Vertexes 1,2,3"),
            Err(PolygonPropertyError::Unrecognized)
        );
        assert!(parse_polygon_property("Pan U=99999999999 V=0").is_err());
    }
}
