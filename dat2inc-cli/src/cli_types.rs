//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use dat2inc_dat::{DEFAULT_MAX_ROM_SIZE, DEFAULT_NAME_PADDING};

#[derive(Parser, Debug)]
#[command(name = "dat2inc")]
#[command(about = "Generate a C name/size/CRC32 table from a ClrMamePro DAT file", long_about = None)]
pub(crate) struct Cli {
    /// DAT file to read
    #[arg(default_value = "2600.dat")]
    pub input: PathBuf,

    /// Write the table to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Largest ROM size (in bytes, inclusive) to include
    #[arg(long, default_value_t = DEFAULT_MAX_ROM_SIZE)]
    pub max_size: u64,

    /// Added to the longest name to form LONGEST_FILENAME
    #[arg(long, default_value_t = DEFAULT_NAME_PADDING)]
    pub name_padding: u16,

    /// Only show errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging (skipped ROMs, summary)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub(crate) fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Error
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}
