use std::io::Write;

use crate::catalog::RomLine;
use crate::error::DatError;

/// Opening lines of the generated C table, up to the array initializer.
pub const TABLE_HEADER: &str = "static struct {
    const char* name;
    uint16_t size;
    uint32_t crc;
} __packed database[] = {
";

/// Writes the `database[]` C table one row at a time.
pub struct TableWriter<W: Write> {
    out: W,
    rows: usize,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, rows: 0 }
    }

    pub fn write_header(&mut self) -> Result<(), DatError> {
        self.out
            .write_all(TABLE_HEADER.as_bytes())
            .map_err(DatError::Write)
    }

    /// Emit `{ "<name>", <size>, 0x<crc> },`. Size and CRC are copied as
    /// captured, without padding or case changes.
    pub fn write_row(&mut self, rom: &RomLine<'_>) -> Result<(), DatError> {
        writeln!(
            self.out,
            "{{ \"{}\", {}, 0x{} }},",
            rom.name, rom.size, rom.crc
        )
        .map_err(DatError::Write)?;
        self.rows += 1;
        Ok(())
    }

    /// Close the array and define `LONGEST_FILENAME`.
    pub fn write_footer(&mut self, longest_filename: usize) -> Result<(), DatError> {
        writeln!(self.out, "}};").map_err(DatError::Write)?;
        writeln!(self.out, "#define LONGEST_FILENAME {longest_filename}").map_err(DatError::Write)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn flush(&mut self) -> Result<(), DatError> {
        self.out.flush().map_err(DatError::Write)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
