// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI subsystem for t3dkit

pub mod discovery;
pub mod logging;
pub mod reporter;
pub mod stats;

pub use discovery::discover_t3d_files;
pub use logging::init_logging;
pub use reporter::Reporter;
pub use stats::{FileStats, UvRange};
