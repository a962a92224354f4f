//! Error types for the mirror pass and the cube verifier

/// Errors raised while mirroring or verifying rotation source text.
///
/// Line numbers are 1-based and count every line of the input, blank
/// lines included.
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    #[error("line {line}: assignment is {len} characters long, need at least {required} to swap columns")]
    LineTooShort {
        line: usize,
        len: usize,
        required: usize,
    },

    #[error("line {line}: expected a digit at column {column}, found {found:?}")]
    NotADigit {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("line {line}: assignment appears before any rotation header")]
    OrphanAssignment { line: usize },

    #[error("line {line}: could not read a function name from the rotation header")]
    MissingFunctionName { line: usize },

    #[error("cannot address the centre piece of side {side}")]
    CentrePiece { side: usize },

    #[error("facelet ({side}, {face}) is outside the cube")]
    FaceletOutOfRange { side: usize, face: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
