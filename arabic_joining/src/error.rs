use thiserror::Error;

/// An error encountered while turning `ArabicShaping.txt` into joining tables.
///
/// Every error is fatal. A record that cannot be understood would silently break the joining
/// behaviour of its character, so there is no way to skip one.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("line {line}: malformed record: {reason}")]
    MalformedRecord { line: usize, reason: String },
    #[error("line {line}: unknown joining type code {code:?}")]
    UnknownJoiningType { line: usize, code: String },
}
impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedRecord { line, reason: reason.into() }
    }

    /// The 1-based source line the error was found on.
    pub fn line(&self) -> usize {
        match self {
            Error::MalformedRecord { line, .. } => *line,
            Error::UnknownJoiningType { line, .. } => *line,
        }
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
