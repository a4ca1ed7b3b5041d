//! dat2inc CLI
//!
//! Reads a ClrMamePro DAT file and prints a C `database[]` table for
//! firmware or dumper builds.

mod cli_types;
mod error;

use std::fs::File;
use std::io::{self, BufWriter};

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use dat2inc_dat::{GenerateOptions, GenerateSummary, generate, open_input};

use crate::cli_types::Cli;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(&cli) {
        eprintln!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

/// Log to stderr so stdout only ever carries the table. `RUST_LOG` wins over
/// the command-line level.
fn init_logging(cli: &Cli) {
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(cli: &Cli) -> Result<GenerateSummary, CliError> {
    let options = GenerateOptions::new()
        .max_size(cli.max_size)
        .name_padding(cli.name_padding);

    // The input must open before the output file is truncated.
    let input = open_input(&cli.input)?;

    let summary = match &cli.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| CliError::create_output(path, e))?;
            let summary = generate(input, BufWriter::new(file), &options)?;
            log::info!("Wrote {}", path.display());
            summary
        }
        None => generate(input, io::stdout().lock(), &options)?,
    };

    Ok(summary)
}
