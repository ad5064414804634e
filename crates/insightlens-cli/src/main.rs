//! InsightLens CLI - business insights from CSV files.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Analyze { file, json, config } => {
            commands::analyze::run(file, json, config, cli.verbose)
        }

        Commands::Export {
            file,
            output,
            format,
            config,
        } => commands::export::run(file, output, format, config, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
