// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Logger setup for the command-line tool

use log::LevelFilter;

const LOGGED_CRATES: &[&str] = &["t3dkit"];

fn filter_string(level: LevelFilter) -> String {
    let level = level.to_string().to_ascii_lowercase();
    LOGGED_CRATES
        .iter()
        .map(|name| format!("{}={}", name, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install `env_logger`. `RUST_LOG` takes precedence when set.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if std::env::var("RUST_LOG").is_err() {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(filter_string(level)),
        )
        .init();
    } else {
        env_logger::init();
    }
}
