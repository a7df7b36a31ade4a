// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! schemagen command-line entry point

mod cli;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        cli.log_level
            .map(|level| level.to_level_filter())
            .unwrap_or(log::LevelFilter::Warn)
    };
    env_logger::Builder::new().filter_level(level).init();

    let result = match cli.command {
        Commands::Version => cli::handle_version(),
        Commands::Types { schema, format } => cli::handle_types(schema, format),
        Commands::Generate {
            schema,
            generator,
            type_name,
            depth,
            update,
            format,
        } => cli::handle_generate(schema, generator, type_name, depth, update, format),
        Commands::Selection {
            schema,
            type_name,
            depth,
        } => cli::handle_selection(schema, type_name, depth),
        Commands::Flatten {
            schema,
            generator,
            type_name,
            depth,
        } => cli::handle_flatten(schema, generator, type_name, depth),
        Commands::Plan {
            schema,
            generator,
            type_name,
            format,
        } => cli::handle_plan(schema, generator, type_name, format),
        Commands::Extend {
            schema,
            extender_config,
        } => cli::handle_extend(&schema, extender_config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}
