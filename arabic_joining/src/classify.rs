//! Classification of parsed records into joining types and canonical joining groups.

use crate::{
    error::{Error, Result},
    parse::ShapingRecord,
};
use core::fmt;
use unicode_general_category::{get_general_category, GeneralCategory};

/// How a character connects to its neighbours in a cursive script.
#[derive(Copy, Clone, Debug, Hash, Ord, PartialOrd, Eq, PartialEq)]
pub enum JoiningType {
    RightJoining,
    LeftJoining,
    DualJoining,
    JoinCausing,
    NonJoining,
    Transparent,
}
impl JoiningType {
    /// Every joining type, in the order they are declared in generated code.
    pub const ALL: [JoiningType; 6] = [
        JoiningType::RightJoining,
        JoiningType::LeftJoining,
        JoiningType::DualJoining,
        JoiningType::JoinCausing,
        JoiningType::NonJoining,
        JoiningType::Transparent,
    ];

    /// Parses the single letter code used in `ArabicShaping.txt`.
    pub fn from_code(code: &str) -> Option<JoiningType> {
        Some(match code {
            "R" => JoiningType::RightJoining,
            "L" => JoiningType::LeftJoining,
            "D" => JoiningType::DualJoining,
            "C" => JoiningType::JoinCausing,
            "U" => JoiningType::NonJoining,
            "T" => JoiningType::Transparent,
            _ => return None,
        })
    }

    pub fn code(self) -> char {
        match self {
            JoiningType::RightJoining => 'R',
            JoiningType::LeftJoining => 'L',
            JoiningType::DualJoining => 'D',
            JoiningType::JoinCausing => 'C',
            JoiningType::NonJoining => 'U',
            JoiningType::Transparent => 'T',
        }
    }

    /// The symbolic name used for this joining type in generated code.
    pub fn name(self) -> &'static str {
        match self {
            JoiningType::RightJoining => "Right_Joining",
            JoiningType::LeftJoining => "Left_Joining",
            JoiningType::DualJoining => "Dual_Joining",
            JoiningType::JoinCausing => "Join_Causing",
            JoiningType::NonJoining => "Non_Joining",
            JoiningType::Transparent => "Transparent",
        }
    }
}
impl fmt::Display for JoiningType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The label used by `ArabicShaping.txt` for characters without a joining group.
pub const NO_JOINING_GROUP: &str = "No_Joining_Group";

/// A joining group, identified by its canonical name.
///
/// Joining groups are not a closed set: new Unicode versions add groups, so the members are
/// whatever names the data actually contains.
#[derive(Clone, Debug, Hash, Ord, PartialOrd, Eq, PartialEq)]
pub struct JoiningGroup(String);
impl JoiningGroup {
    /// Creates a joining group from a raw label in `ArabicShaping.txt`.
    pub fn from_raw(raw: &str) -> JoiningGroup {
        if raw == NO_JOINING_GROUP {
            JoiningGroup(raw.to_string())
        } else {
            JoiningGroup(canonicalize_group(raw))
        }
    }

    pub fn none() -> JoiningGroup {
        JoiningGroup(NO_JOINING_GROUP.to_string())
    }

    pub fn is_none(&self) -> bool {
        self.0 == NO_JOINING_GROUP
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}
impl fmt::Display for JoiningGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Converts a raw joining group label into an identifier-safe name.
///
/// Each word is title cased and spaces become underscores, so `ALEF MAKSURA` becomes
/// `Alef_Maksura`. A word begins at any letter that does not follow another letter, which makes
/// the conversion idempotent.
pub fn canonicalize_group(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;
    for ch in raw.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(if ch == ' ' { '_' } else { ch });
            in_word = false;
        }
    }
    out
}

/// Returns whether a character can be shown literally in a generated comment.
pub fn is_displayable(ch: char) -> bool {
    match get_general_category(ch) {
        GeneralCategory::Control
        | GeneralCategory::Format
        | GeneralCategory::Surrogate
        | GeneralCategory::PrivateUse
        | GeneralCategory::Unassigned
        | GeneralCategory::LineSeparator
        | GeneralCategory::ParagraphSeparator => false,
        GeneralCategory::SpaceSeparator => ch == ' ',
        _ => true,
    }
}

/// Builds the human readable comment attached to a table entry.
pub fn describe(code_point: u32, name: &str) -> String {
    match char::from_u32(code_point) {
        Some(ch) if is_displayable(ch) => format!("{name} \"{ch}\""),
        _ => name.to_string(),
    }
}

/// A record with its joining properties resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedRecord {
    pub code_point: u32,
    pub joining_type: JoiningType,
    pub joining_group: JoiningGroup,
    pub comment: String,
}

pub fn classify(record: &ShapingRecord<'_>) -> Result<ClassifiedRecord> {
    let joining_type = JoiningType::from_code(record.raw_joining_type).ok_or_else(|| {
        Error::UnknownJoiningType { line: record.line, code: record.raw_joining_type.to_string() }
    })?;
    Ok(ClassifiedRecord {
        code_point: record.code_point,
        joining_type,
        joining_group: JoiningGroup::from_raw(record.raw_joining_group),
        comment: describe(record.code_point, record.name),
    })
}
