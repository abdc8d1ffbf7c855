// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Input discovery for .t3d files

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn is_t3d(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("t3d"))
}

/// Expand files and directories into a sorted list of .t3d files.
///
/// Files named explicitly are kept whatever their extension; directories are
/// walked recursively for `*.t3d`.
pub fn discover_t3d_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let entry_path = entry.path();
                if entry_path.is_file() && is_t3d(entry_path) {
                    files.push(entry_path.to_path_buf());
                }
            }
        } else {
            files.push(path.clone());
        }
    }

    files.sort();
    files.dedup();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_directory() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("maps");
        std::fs::create_dir(&nested)?;
        std::fs::write(dir.path().join("b.t3d"), "")?;
        std::fs::write(nested.join("a.T3D"), "")?;
        std::fs::write(dir.path().join("notes.txt"), "")?;

        let files = discover_t3d_files(&[dir.path().to_path_buf()]);
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| is_t3d(f)));
        Ok(())
    }

    #[test]
    fn test_explicit_files_are_kept() {
        let files = discover_t3d_files(&[
            PathBuf::from("level.txt"),
            PathBuf::from("level.txt"),
        ]);
        assert_eq!(files, vec![PathBuf::from("level.txt")]);
    }
}
