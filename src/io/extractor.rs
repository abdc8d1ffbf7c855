// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Brush actor extraction from whole T3D files

use regex::Regex;
use std::sync::OnceLock;

/// Text of one `Begin Actor Class=Brush` … `End Actor` block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushBlock<'a> {
    pub text: &'a str,
    /// 1-based line of the `Begin Actor` line in the source text
    pub first_line: usize,
}

fn brush_actor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?is)Begin Actor Class=(?:Engine\.)?Brush\s.*?End Actor")
            .expect("brush actor pattern is valid")
    })
}

/// Locate every brush actor block. Other actor classes are skipped.
pub fn brush_blocks(text: &str) -> Vec<BrushBlock<'_>> {
    let mut blocks = Vec::new();
    let mut line = 1;
    let mut cursor = 0;
    for m in brush_actor_pattern().find_iter(text) {
        line += text[cursor..m.start()].matches('\n').count();
        cursor = m.start();
        blocks.push(BrushBlock {
            text: m.as_str(),
            first_line: line,
        });
    }
    blocks
}

/// Keep only brush actors, joined by newlines. Empty when there are none.
pub fn filter_brushes(text: &str) -> String {
    brush_blocks(text)
        .iter()
        .map(|b| b.text)
        .collect::<Vec<_>>()
        .join("\n")
}
