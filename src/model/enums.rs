// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Lenient enumerations used by brush actors.
//!
//! Construction never fails: an index out of range or an unknown name
//! resolves to the first member. Unknown enum text in a level file must not
//! abort the whole parse.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumeration with total, lenient construction from an index or a name
pub trait LenientEnum: Copy + Sized + 'static {
    /// All members in declaration order. The first one is the fallback.
    const MEMBERS: &'static [Self];

    /// Lowercase member name, as written to T3D
    fn name(&self) -> &'static str;

    /// Member at `index`, or the fallback member when out of range
    fn from_index(index: i64) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::MEMBERS.get(i))
            .copied()
            .unwrap_or(Self::MEMBERS[0])
    }

    /// Case-insensitive lookup by member name, or the fallback member
    fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::MEMBERS
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
            .copied()
            .unwrap_or(Self::MEMBERS[0])
    }
}

/// Constructive solid geometry operation of a brush
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsgOper {
    #[default]
    None,
    CsgAdd,
    CsgSubtract,
}

impl LenientEnum for CsgOper {
    const MEMBERS: &'static [Self] = &[CsgOper::None, CsgOper::CsgAdd, CsgOper::CsgSubtract];

    fn name(&self) -> &'static str {
        match self {
            CsgOper::None => "none",
            CsgOper::CsgAdd => "csg_add",
            CsgOper::CsgSubtract => "csg_subtract",
        }
    }
}

/// Axis pair a scale's shear applies along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheerAxis {
    #[default]
    None,
    SheerXy,
    SheerXz,
    SheerYx,
    SheerYz,
    SheerZx,
    SheerZy,
}

impl LenientEnum for SheerAxis {
    const MEMBERS: &'static [Self] = &[
        SheerAxis::None,
        SheerAxis::SheerXy,
        SheerAxis::SheerXz,
        SheerAxis::SheerYx,
        SheerAxis::SheerYz,
        SheerAxis::SheerZx,
        SheerAxis::SheerZy,
    ];

    fn name(&self) -> &'static str {
        match self {
            SheerAxis::None => "none",
            SheerAxis::SheerXy => "sheer_xy",
            SheerAxis::SheerXz => "sheer_xz",
            SheerAxis::SheerYx => "sheer_yx",
            SheerAxis::SheerYz => "sheer_yz",
            SheerAxis::SheerZx => "sheer_zx",
            SheerAxis::SheerZy => "sheer_zy",
        }
    }
}

impl From<i64> for CsgOper {
    fn from(index: i64) -> Self {
        Self::from_index(index)
    }
}

impl From<&str> for CsgOper {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<i64> for SheerAxis {
    fn from(index: i64) -> Self {
        Self::from_index(index)
    }
}

impl From<&str> for SheerAxis {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for CsgOper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for SheerAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
