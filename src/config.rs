// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Import and export configuration

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory by [`T3dConfig::load`]
pub const CONFIG_FILE: &str = "t3dkit.toml";

/// T3D import/export options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct T3dConfig {
    /// Round vertices and locations to the grid on import
    pub snap_vertices: bool,
    /// Grid size used when snapping
    pub snap_distance: f64,
    /// Drop the builder ("red") brush on import
    pub skip_red_brush: bool,
    /// Wrap exported actors in `Begin Map`/`End Map`
    pub wrap_map: bool,
    /// Texture size for converting between texture vectors and UVs
    pub texture_size: f64,
}

impl Default for T3dConfig {
    fn default() -> Self {
        Self {
            snap_vertices: false,
            snap_distance: 1.0,
            skip_red_brush: true,
            wrap_map: true,
            texture_size: 256.0,
        }
    }
}

impl T3dConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: T3dConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `t3dkit.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `T3D_*` overrides. Values that don't parse are ignored.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        fn parsed<T: std::str::FromStr>(value: Option<String>) -> Option<T> {
            value.and_then(|v| v.trim().parse().ok())
        }

        if let Some(snap) = parsed(var("T3D_SNAP_VERTICES")) {
            self.snap_vertices = snap;
        }
        if let Some(distance) = parsed(var("T3D_SNAP_DISTANCE")) {
            self.snap_distance = distance;
        }
        if let Some(skip) = parsed(var("T3D_SKIP_RED_BRUSH")) {
            self.skip_red_brush = skip;
        }
        if let Some(wrap) = parsed(var("T3D_WRAP_MAP")) {
            self.wrap_map = wrap;
        }
        if let Some(size) = parsed(var("T3D_TEXTURE_SIZE")) {
            self.texture_size = size;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.snap_distance > 0.0) {
            bail!("snap_distance must be positive, got {}", self.snap_distance);
        }
        if !(self.texture_size > 0.0) {
            bail!("texture_size must be positive, got {}", self.texture_size);
        }
        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = T3dConfig::default();
        assert!(!config.snap_vertices);
        assert_eq!(config.snap_distance, 1.0);
        assert!(config.skip_red_brush);
        assert!(config.wrap_map);
        assert_eq!(config.texture_size, 256.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() -> Result<()> {
        let file = NamedTempFile::with_suffix(".toml")?;
        let config = T3dConfig {
            snap_vertices: true,
            snap_distance: 16.0,
            ..Default::default()
        };
        config.save(file.path())?;
        assert_eq!(T3dConfig::from_file(file.path())?, config);
        Ok(())
    }

    #[test]
    fn test_partial_file() -> Result<()> {
        let file = NamedTempFile::with_suffix(".toml")?;
        std::fs::write(file.path(), "wrap_map = false\n")?;
        let config = T3dConfig::from_file(file.path())?;
        assert!(!config.wrap_map);
        assert!(config.skip_red_brush);
        Ok(())
    }

    #[test]
    fn test_invalid_file() -> Result<()> {
        let file = NamedTempFile::with_suffix(".toml")?;
        std::fs::write(file.path(), "snap_distance = 0.0\n")?;
        assert!(T3dConfig::from_file(file.path()).is_err());
        std::fs::write(file.path(), "snap_distance = \"big\"\n")?;
        assert!(T3dConfig::from_file(file.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("T3D_SNAP_VERTICES", "true"),
            ("T3D_SNAP_DISTANCE", "8"),
            ("T3D_WRAP_MAP", "sometimes"),
        ]
        .into_iter()
        .collect();

        let mut config = T3dConfig::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));
        assert!(config.snap_vertices);
        assert_eq!(config.snap_distance, 8.0);
        assert!(config.wrap_map);
    }
}
