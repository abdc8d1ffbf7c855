// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use super::stats::FileStats;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report brush statistics for one file
    pub fn report_stats(file: &str, stats: &FileStats, duration: Duration) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "File:".bold(), file.cyan());
        println!("{}", "━".repeat(80).bright_black());

        Self::print_count("Brushes", stats.brushes);
        Self::print_count("Polygons", stats.polygons);
        Self::print_count("Vertices", stats.vertices);
        if stats.degenerate_polygons > 0 {
            println!(
                "  {} {}",
                "Degenerate:".bright_black(),
                stats.degenerate_polygons.to_string().red()
            );
        }

        if !stats.csg.is_empty() {
            let breakdown = stats
                .csg
                .iter()
                .map(|(op, n)| format!("{} {}", n, op))
                .collect::<Vec<_>>()
                .join(", ");
            println!("  {} {}", "CSG:".bright_black(), breakdown.yellow());
        }

        if !stats.textures.is_empty() {
            println!("\n{}", "Textures:".bold());
            for texture in &stats.textures {
                println!("  {}", texture.cyan());
            }
        }

        if let Some(range) = stats.uv_range {
            println!(
                "\n  {} u {:.2}..{:.2}, v {:.2}..{:.2}",
                "UV tiles:".bright_black(),
                range.min[0],
                range.max[0],
                range.min[1],
                range.max[1]
            );
        }

        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Summary line after processing several files
    pub fn report_summary(files: usize, failed: usize, brushes: usize) {
        let failed_text = if failed > 0 {
            failed.to_string().red()
        } else {
            failed.to_string().green()
        };
        println!(
            "\n{} {} files, {} failed, {} brushes",
            "Summary:".bold(),
            files.to_string().cyan(),
            failed_text,
            brushes.to_string().cyan()
        );
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    fn print_count(name: &str, count: usize) {
        println!(
            "  {} {}",
            format!("{}:", name).bright_black(),
            count.to_string().cyan()
        );
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }
}
