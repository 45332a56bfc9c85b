//! Generates the Unicode Arabic joining tables used by text shaping code.
//!
//! The input is the Unicode `ArabicShaping.txt` file. Each record is parsed, its joining type and
//! joining group are resolved, an optional filter restricts the records to the Arabic script,
//! and the survivors are folded into two sorted tables that can be written out as source code:
//!
//! ```
//! use arabic_joining::{generate, GeneratorConfig, OutputFormat};
//!
//! let source = "0627; ARABIC LETTER ALEF; R; ALEF\n";
//! let output = generate(source, &GeneratorConfig::FULL, OutputFormat::JavaScript).unwrap();
//! assert!(output.contains("0x0627: JoiningType.Right_Joining"));
//! ```

mod classify;
mod config;
mod emit;
mod error;
mod filter;
mod parse;
mod tables;

pub use crate::{
    classify::{
        canonicalize_group, classify, describe, is_displayable, ClassifiedRecord, JoiningGroup,
        JoiningType, NO_JOINING_GROUP,
    },
    config::GeneratorConfig,
    emit::{emit, OutputFormat, BANNER},
    error::{Error, Result},
    filter::{
        Admission, BidiLookup, FilterMode, RecordFilter, UcdBidi, ARABIC_SUPPRESSED_GROUPS,
    },
    parse::{parse_all, parse_records, ShapingRecord, ShapingRecords, MAX_CODE_POINT},
    tables::{JoiningTables, TableEntry},
};
pub use unicode_bidi::BidiClass;

use log::info;

/// Builds the joining tables for `source`, using `bidi` to answer bidi class queries.
pub fn build_tables(
    source: &str,
    config: &GeneratorConfig,
    bidi: &dyn BidiLookup,
) -> Result<JoiningTables> {
    info!("Building joining tables ({})...", config.name);
    JoiningTables::build(parse_records(source), &config.filter(bidi))
}

/// Generates the joining tables for `source` with bidi classes from the Unicode database.
pub fn generate(source: &str, config: &GeneratorConfig, format: OutputFormat) -> Result<String> {
    generate_with(source, config, &UcdBidi, format)
}

/// Generates the joining tables for `source` with a custom bidi class lookup.
pub fn generate_with(
    source: &str,
    config: &GeneratorConfig,
    bidi: &dyn BidiLookup,
    format: OutputFormat,
) -> Result<String> {
    let tables = build_tables(source, config, bidi)?;
    info!("Emitting {format} output...");
    Ok(emit(&tables, format))
}
