//! Recognition of ClrMamePro `rom ( ... )` lines.
//!
//! Only one line shape is understood:
//! ```text
//!     rom ( name "Game (Region).ext" size 12345 crc AABBCCDD sha1 ... )
//! ```
//! Anything else, including `game (` headers and malformed rom lines, is
//! ignored by the caller.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a rom line. The name group is greedy, so it stops at the last `.`
/// inside the quotes.
static ROM_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*rom \( name "([^"]+)\.[^"]*" size ([0-9]+) crc ([0-9A-Fa-f]+) .*"#)
        .expect("rom line pattern is valid")
});

/// A single qualifying rom line, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomLine<'a> {
    /// Name as captured, without the extension.
    pub name: &'a str,
    /// Decimal size digits, verbatim.
    pub size: &'a str,
    /// Hex CRC32 digits, verbatim (case preserved).
    pub crc: &'a str,
}

impl<'a> RomLine<'a> {
    /// Numeric size. `None` if the digit run overflows `u64`.
    pub fn size_value(&self) -> Option<u64> {
        self.size.parse().ok()
    }

    /// Whether the rom fits under an inclusive size ceiling.
    pub fn fits(&self, max_size: u64) -> bool {
        self.size_value().is_some_and(|size| size <= max_size)
    }

    pub fn clean_name(&self) -> &'a str {
        clean_name(self.name)
    }

    /// Length of the cleaned name in characters.
    pub fn clean_name_len(&self) -> usize {
        self.clean_name().chars().count()
    }
}

/// Match a single input line (without its line terminator).
pub fn match_rom_line(line: &str) -> Option<RomLine<'_>> {
    let caps = ROM_LINE.captures(line)?;
    Some(RomLine {
        name: caps.get(1)?.as_str(),
        size: caps.get(2)?.as_str(),
        crc: caps.get(3)?.as_str(),
    })
}

/// Strip a trailing ` (...)` annotation: everything from the first `" ("` on.
///
/// `"Pac-Man (USA) (Rev 1)"` becomes `"Pac-Man"`, while `"Rack_(PAL)"` is
/// left alone because no space precedes the parenthesis.
pub fn clean_name(name: &str) -> &str {
    match name.find(" (") {
        Some(idx) => &name[..idx],
        None => name,
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
