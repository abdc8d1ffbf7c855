// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for T3D reading

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal T3D read failure. Each one aborts the parse of a single file.
#[derive(Debug, Error)]
pub enum T3dError {
    /// Unbalanced or misnamed `Begin`/`End` blocks
    #[error("{file}:{line}: {message}: `{text}`")]
    Structure {
        file: String,
        line: usize,
        text: String,
        message: String,
    },

    /// A line inside a `Begin Polygon` block that is not understood
    #[error("{file}:{line}: {message}: `{text}`")]
    InvalidPolygonProperty {
        file: String,
        line: usize,
        text: String,
        message: String,
    },

    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl T3dError {
    /// 1-based line number in the source text, if the error has one
    pub fn line(&self) -> Option<usize> {
        match self {
            T3dError::Structure { line, .. } | T3dError::InvalidPolygonProperty { line, .. } => {
                Some(*line)
            }
            T3dError::Io { .. } => None,
        }
    }

    /// Offending source line, if the error has one
    pub fn text(&self) -> Option<&str> {
        match self {
            T3dError::Structure { text, .. } | T3dError::InvalidPolygonProperty { text, .. } => {
                Some(text)
            }
            T3dError::Io { .. } => None,
        }
    }
}

pub type T3dResult<T> = std::result::Result<T, T3dError>;
