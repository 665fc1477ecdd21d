// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::floor::FloorMesh;
use colored::*;
use std::path::Path;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a converted floor
    pub fn report_floor(mesh: &FloorMesh, output: &Path, verbose: bool) {
        println!(
            "{} {} {} {}",
            "✅".green(),
            format!("floor {}", mesh.name()).bold(),
            "->".bright_black(),
            output.display().to_string().cyan()
        );
        if verbose {
            let stats = mesh.stats();
            println!(
                "  {} {}  {} {}  {} {}  {} {}",
                "Walls:".bright_black(),
                stats.wall_count.to_string().cyan(),
                "Areas:".bright_black(),
                stats.area_count.to_string().cyan(),
                "Vertices:".bright_black(),
                stats.vertex_count.to_string().cyan(),
                "Faces:".bright_black(),
                stats.face_count.to_string().cyan()
            );
        }
    }

    /// Report a floor that could not be converted
    pub fn report_floor_error(floor: &str, message: &str) {
        eprintln!(
            "{} {} {}",
            "❌".red(),
            format!("floor {}:", floor).red().bold(),
            message
        );
    }

    /// Report the totals of one run
    pub fn report_summary(converted: usize, failed: usize, duration: Duration) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!(
            "  {} {}",
            "Converted:".bright_black(),
            converted.to_string().green()
        );
        println!(
            "  {} {}",
            "Failed:".bright_black(),
            if failed > 0 {
                failed.to_string().red()
            } else {
                failed.to_string().green()
            }
        );
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
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
}
