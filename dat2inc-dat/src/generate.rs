use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::catalog::match_rom_line;
use crate::error::DatError;
use crate::table::TableWriter;

/// Largest rom size (inclusive) that makes it into the table.
pub const DEFAULT_MAX_ROM_SIZE: u64 = 32768;

/// Added to the longest cleaned name to form `LONGEST_FILENAME`.
pub const DEFAULT_NAME_PADDING: u16 = 4;

/// Options for [`generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Inclusive size ceiling.
    pub max_size: u64,
    /// `u16` bounds the `LONGEST_FILENAME` sum.
    pub name_padding: u16,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_ROM_SIZE,
            name_padding: DEFAULT_NAME_PADDING,
        }
    }
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn name_padding(mut self, name_padding: u16) -> Self {
        self.name_padding = name_padding;
        self
    }
}

/// Counters collected during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub lines_read: usize,
    /// Lines with the rom shape, regardless of size.
    pub matched: usize,
    pub emitted: usize,
    /// Matched lines dropped by the size ceiling.
    pub oversized: usize,
    /// Longest cleaned name among emitted rows, in characters.
    pub longest_name: usize,
    /// Value written to `#define LONGEST_FILENAME`.
    pub longest_filename: usize,
}

/// Stream a DAT file from `input` and write the C table to `output`.
///
/// Rows come out in input order. Lines that are not rom lines are skipped
/// without a trace; a read error aborts the run.
pub fn generate<R: BufRead, W: Write>(
    input: R,
    output: W,
    options: &GenerateOptions,
) -> Result<GenerateSummary, DatError> {
    let mut table = TableWriter::new(output);
    let mut summary = GenerateSummary::default();

    table.write_header()?;

    for (idx, line_result) in input.lines().enumerate() {
        let line = line_result.map_err(DatError::Read)?;
        summary.lines_read += 1;

        let Some(rom) = match_rom_line(&line) else {
            continue;
        };
        summary.matched += 1;

        if !rom.fits(options.max_size) {
            log::debug!(
                "line {}: skipping \"{}\" (size {} > {})",
                idx + 1,
                rom.name,
                rom.size,
                options.max_size
            );
            summary.oversized += 1;
            continue;
        }

        summary.longest_name = summary.longest_name.max(rom.clean_name_len());
        table.write_row(&rom)?;
    }

    summary.emitted = table.rows();
    summary.longest_filename = summary.longest_name + usize::from(options.name_padding);
    table.write_footer(summary.longest_filename)?;
    table.flush()?;

    log::info!(
        "{} lines read, {} roms emitted, {} over {} bytes, longest name {}",
        summary.lines_read,
        summary.emitted,
        summary.oversized,
        options.max_size,
        summary.longest_name
    );

    Ok(summary)
}

/// Open a DAT file for [`generate`].
pub fn open_input(path: &Path) -> Result<BufReader<File>, DatError> {
    let file = File::open(path).map_err(|e| DatError::open(path, e))?;
    log::debug!("Reading {}", path.display());
    Ok(BufReader::new(file))
}

/// Like [`generate`], reading from a file path.
pub fn generate_file<W: Write>(
    path: &Path,
    output: W,
    options: &GenerateOptions,
) -> Result<GenerateSummary, DatError> {
    generate(open_input(path)?, output, options)
}

#[cfg(test)]
#[path = "tests/generate_tests.rs"]
mod tests;
