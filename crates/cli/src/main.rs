// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use chorequest::{env, Cli};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber filtered by `CQ_LOG` / `RUST_LOG` (default `warn`).
fn setup_logging() {
    let filter = env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!env::no_color())
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging();

    if let Some(dir) = &cli.directory {
        if let Err(e) = std::env::set_current_dir(dir) {
            eprintln!("error: cannot change to directory '{}': {}", dir, e);
            std::process::exit(1);
        }
    }

    if let Err(e) = chorequest::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
