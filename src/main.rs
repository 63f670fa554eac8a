// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point.
//!
//! ```bash
//! persistence 12
//! # 12;9;3;2834
//! ```
//!
//! Prints `size;max_steps;n_max;total` on stdout. Diagnostics go to stderr
//! and are controlled by `RUST_LOG` (e.g. `RUST_LOG=debug` to see memo table
//! statistics).

use anyhow::{Context, Result};
use clap::Parser;
use persistence_search::digits::MAX_LENGTH;
use persistence_search::search;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of digits of the integers to search.
    #[arg(
        value_name = "SIZE",
        value_parser = clap::value_parser!(u32).range(1..=MAX_LENGTH as i64)
    )]
    size: Option<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let Some(size) = args.size else {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| String::from("persistence"));
        println!("Usage: {} <number of digits>", program);
        std::process::exit(1);
    };

    let report = search::search(size as usize)
        .with_context(|| format!("searching {}-digit numbers", size))?;
    println!("{}", report);
    Ok(())
}
