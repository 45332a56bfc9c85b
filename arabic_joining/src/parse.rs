//! Parsing for the `ArabicShaping.txt` file format.
//!
//! Each data line has the form `CodePoint; Name; JoiningType; JoiningGroup`. Lines beginning
//! with `#` are comments, and blank lines are ignored.

use crate::error::{Error, Result};
use core::iter::Enumerate;
use core::str::Lines;
use log::{debug, trace};

/// The highest valid Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// A single line of `ArabicShaping.txt`, borrowed from the source text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShapingRecord<'a> {
    /// The 1-based line this record was read from.
    pub line: usize,
    pub code_point: u32,
    pub name: &'a str,
    pub raw_joining_type: &'a str,
    pub raw_joining_group: &'a str,
}

/// A lazy iterator over the records of a source file.
///
/// The iterator can be cloned to restart parsing from the same position.
#[derive(Clone, Debug)]
pub struct ShapingRecords<'a> {
    lines: Enumerate<Lines<'a>>,
}
impl<'a> Iterator for ShapingRecords<'a> {
    type Item = Result<ShapingRecord<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, line) in &mut self.lines {
            if line.starts_with('#') || line.trim().is_empty() {
                debug!("Skipping line {}", idx + 1);
                continue;
            }
            return Some(parse_line(idx + 1, line));
        }
        None
    }
}

/// Returns an iterator over every record in `text`.
pub fn parse_records(text: &str) -> ShapingRecords<'_> {
    ShapingRecords { lines: text.lines().enumerate() }
}

/// Parses every record in `text`, stopping at the first malformed line.
pub fn parse_all(text: &str) -> Result<Vec<ShapingRecord<'_>>> {
    parse_records(text).collect()
}

fn parse_code_point(line: usize, field: &str) -> Result<u32> {
    if field.is_empty() || !field.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::malformed(line, format!("invalid code point {field:?}")));
    }
    let code_point = u32::from_str_radix(field, 16)
        .map_err(|_| Error::malformed(line, format!("code point {field:?} is out of range")))?;
    if code_point > MAX_CODE_POINT {
        return Err(Error::malformed(line, format!("code point {field:?} is out of range")));
    }
    Ok(code_point)
}

fn parse_line(line: usize, text: &str) -> Result<ShapingRecord<'_>> {
    let fields: Vec<_> = text.split(';').map(str::trim).collect();
    if fields.len() != 4 {
        return Err(Error::malformed(line, format!("expected 4 fields, found {}", fields.len())));
    }

    let record = ShapingRecord {
        line,
        code_point: parse_code_point(line, fields[0])?,
        name: fields[1],
        raw_joining_type: fields[2],
        raw_joining_group: fields[3],
    };
    trace!("Parsed record: {record:?}");
    Ok(record)
}
