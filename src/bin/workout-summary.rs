// ABOUTME: Demonstration driver for the workout metrics library
// ABOUTME: Feeds fixed sample sensor packages through decode, compute, and format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Metrics Contributors

//! Demonstration driver for workout summaries.
//!
//! Feeds a fixed list of sample sensor packages through the decode →
//! compute → format pipeline and prints one summary line per workout.
//!
//! Usage:
//! ```bash
//! # Print the fixed text summaries
//! cargo run --bin workout-summary
//!
//! # Emit summaries as JSON lines instead
//! cargo run --bin workout-summary -- --json
//!
//! # Verbose output
//! cargo run --bin workout-summary -- -v
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::error;
use workout_metrics::{formatters, telemetry};

#[derive(Parser)]
#[command(
    name = "workout-summary",
    about = "Workout summary demo driver",
    long_about = "Compute and print workout summaries for fixed sample sensor packages"
)]
struct SummaryArgs {
    /// Emit summaries as JSON lines instead of the fixed text template
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = SummaryArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let packages: [(&str, &[f64]); 3] = [
        ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", &[15_000.0, 1.0, 75.0]),
        ("WLK", &[9_000.0, 1.0, 75.0, 180.0]),
    ];

    for (type_code, values) in packages {
        match telemetry::decode(type_code, values) {
            Ok(workout) => {
                let summary = workout.summary();
                if args.json {
                    println!("{}", serde_json::to_string(&summary)?);
                } else {
                    println!("{}", formatters::format_summary(&summary));
                }
            }
            Err(err) => error!(type_code, %err, "skipping sensor package"),
        }
    }

    Ok(())
}
