use std::fmt;

use thiserror::Error;

/// Broad classification of plate errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested plate size or traversal pattern is not supported.
    InvalidConfiguration,
    /// A well name or coordinate does not describe a well on the plate.
    InvalidInput,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidConfiguration => "invalid_configuration",
            ErrorKind::InvalidInput => "invalid_input",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors produced by the plate engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlateError {
    #[error("unsupported plate size {0}: expected 96 or 384")]
    UnsupportedPlateSize(u32),

    #[error("unknown traversal pattern '{0}': expected 'spiral' or 'serpentine'")]
    UnknownPattern(String),

    #[error("well (row {row}, col {col}) is outside a {rows}x{cols} plate")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("row index {0} has no well letter (rows are lettered A..P)")]
    RowOutOfAlphabet(usize),

    #[error("malformed well name '{0}'")]
    MalformedWellName(String),

    #[error("well {0} is listed more than once")]
    DuplicateWell(String),
}

impl PlateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlateError::UnsupportedPlateSize(_) | PlateError::UnknownPattern(_) => {
                ErrorKind::InvalidConfiguration
            }
            PlateError::OutOfBounds { .. }
            | PlateError::RowOutOfAlphabet(_)
            | PlateError::MalformedWellName(_)
            | PlateError::DuplicateWell(_) => ErrorKind::InvalidInput,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlateError>;
