//
//  github-product
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use github_product::cli::{Cli, Commands};
use github_product::exit_codes;
use github_product::output::OutputWriter;

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            OutputWriter::from_flag(false).write_error(&format!("{e:#}"));
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("GHP_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Detect(cmd) => cmd.run(&cli.global).await.map(|()| exit_codes::SUCCESS),
        Commands::Check(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("ghp version {}", github_product::VERSION);
            Ok(exit_codes::SUCCESS)
        }
    }
}
