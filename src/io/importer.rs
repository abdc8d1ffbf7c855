// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! T3D file importer

use crate::config::T3dConfig;
use crate::error::{T3dError, T3dResult};
use crate::model::Brush;
use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Read a `.t3d` file and parse its brushes, with no post-processing
pub fn read_t3d_file(path: impl AsRef<Path>) -> T3dResult<Vec<Brush>> {
    let path = path.as_ref();
    let start = Instant::now();
    let source = fs::read_to_string(path).map_err(|source| T3dError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let brushes = super::parse_t3d_named(&source, &path.display().to_string())?;
    info!(
        "Loaded {} brushes from {} in {:.2?}",
        brushes.len(),
        path.display(),
        start.elapsed()
    );
    Ok(brushes)
}

/// Import a `.t3d` file, dropping the builder brush and snapping to the grid
/// as configured
pub fn import_t3d_file(path: impl AsRef<Path>, config: &T3dConfig) -> Result<Vec<Brush>> {
    let path = path.as_ref();
    let brushes = read_t3d_file(path)
        .with_context(|| format!("Failed to import T3D file: {}", path.display()))?;
    Ok(prepare_brushes(brushes, config))
}

/// Apply import options to freshly parsed brushes
pub fn prepare_brushes(brushes: Vec<Brush>, config: &T3dConfig) -> Vec<Brush> {
    brushes
        .into_iter()
        .filter(|b| {
            let skip = config.skip_red_brush && b.is_red_brush();
            if skip {
                warn!(
                    "{} is the red brush, so it won't be imported",
                    b.actor_name.as_deref().unwrap_or("<unnamed>")
                );
            }
            !skip
        })
        .map(|mut b| {
            if config.snap_vertices {
                b.snap(config.snap_distance);
            }
            b
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Vec3;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TWO_BRUSHES: &str = "Begin Map
Begin Actor Class=Brush Name=Brush
    CsgOper=CSG_Active
    Group=\"Cube\"
    Begin Brush Name=Brush
        Begin PolyList
        End PolyList
    End Brush
End Actor
Begin Actor Class=Brush Name=Brush0
    CsgOper=CSG_Subtract
    Location=(X=13.000000,Y=-3.000000)
    Begin Brush Name=Model1
        Begin PolyList
            Begin Polygon
                Vertex 0.4,0,0
                Vertex 15,0,0
                Vertex 0,17,0
            End Polygon
        End PolyList
    End Brush
End Actor
End Map
";

    #[test]
    fn test_import_t3d_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, "{}", TWO_BRUSHES)?;

        let brushes = import_t3d_file(file.path(), &T3dConfig::default())?;
        assert_eq!(brushes.len(), 1);
        assert_eq!(brushes[0].actor_name.as_deref(), Some("Brush0"));
        assert_eq!(brushes[0].location, Vec3::new(13.0, -3.0, 0.0));

        Ok(())
    }

    #[test]
    fn test_import_keeps_red_brush_and_snaps() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, "{}", TWO_BRUSHES)?;

        let config = T3dConfig {
            skip_red_brush: false,
            snap_vertices: true,
            snap_distance: 16.0,
            ..Default::default()
        };
        let brushes = import_t3d_file(file.path(), &config)?;
        assert_eq!(brushes.len(), 2);
        assert_eq!(brushes[1].location, Vec3::new(16.0, 0.0, 0.0));
        assert_eq!(
            brushes[1].polygons[0].vertices,
            vec![Vec3::zeros(), Vec3::new(16.0, 0.0, 0.0), Vec3::new(0.0, 16.0, 0.0)]
        );

        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let err = read_t3d_file("/nonexistent/level.t3d").unwrap_err();
        assert!(matches!(err, T3dError::Io { .. }));
        assert!(import_t3d_file("/nonexistent/level.t3d", &T3dConfig::default()).is_err());
    }

    #[test]
    fn test_error_names_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, "{}", TWO_BRUSHES.replace("Vertex 0,17,0", "Vertex 0,17"))?;

        let err = import_t3d_file(file.path(), &T3dConfig::default()).unwrap_err();
        let parse_err = err.downcast_ref::<T3dError>().expect("T3dError inside");
        match parse_err {
            T3dError::InvalidPolygonProperty { file: name, line, .. } => {
                assert_eq!(name, &file.path().display().to_string());
                assert_eq!(*line, 18);
            }
            other => panic!("unexpected error {other:?}"),
        }
        Ok(())
    }
}
