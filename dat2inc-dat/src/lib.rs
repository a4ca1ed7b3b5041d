//! Turn a ClrMamePro DAT file into a static C `database[]` table of
//! name/size/CRC32 triples.

pub mod catalog;
pub mod error;
pub mod generate;
pub mod table;

pub use catalog::{RomLine, clean_name, match_rom_line};
pub use error::DatError;
pub use generate::{
    DEFAULT_MAX_ROM_SIZE, DEFAULT_NAME_PADDING, GenerateOptions, GenerateSummary, generate,
    generate_file, open_input,
};
pub use table::{TABLE_HEADER, TableWriter};
