//! Serialization of joining tables into source code.

use crate::{classify::JoiningType, tables::JoiningTables};
use core::{fmt, str::FromStr};

mod javascript;
mod rust;

/// The banner placed at the top of every generated file.
pub const BANNER: &str = "// Generated code DO NOT EDIT";

/// The language generated tables are written in.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum OutputFormat {
    /// An ES module exporting plain objects.
    JavaScript,
    /// A Rust module with enums and sorted lookup tables.
    Rust,
}
impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::JavaScript => "js",
            OutputFormat::Rust => "rust",
        }
    }

    /// The file extension conventionally used for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::JavaScript => "js",
            OutputFormat::Rust => "rs",
        }
    }
}
impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "js" | "javascript" => Ok(OutputFormat::JavaScript),
            "rs" | "rust" => Ok(OutputFormat::Rust),
            _ => Err(format!("unknown output format {s:?}")),
        }
    }
}

/// Writes the joining enums and tables in the given format.
///
/// The output depends only on the contents of `tables`, so identical tables always produce
/// identical text.
pub fn emit(tables: &JoiningTables, format: OutputFormat) -> String {
    match format {
        OutputFormat::JavaScript => javascript::emit(tables),
        OutputFormat::Rust => rust::emit(tables),
    }
}

fn hex_literal(code_point: u32) -> String {
    format!("0x{code_point:04X}")
}

fn joining_types() -> impl Iterator<Item = (&'static str, char)> + Clone {
    JoiningType::ALL.into_iter().map(|ty| (ty.name(), ty.code()))
}
