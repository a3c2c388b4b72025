use std::path::PathBuf;
use thiserror::Error;

pub type RosterResult<T> = std::result::Result<T, RosterError>;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("Roster file has no header row: {}", path.display())]
    MissingHeader { path: PathBuf },
    #[error("Roster input has no header row")]
    EmptyInput,
    #[error("Expected {expected} fields on line {line}, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },
}

impl RosterError {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

#[macro_export]
macro_rules! roster_error {
    ($($arg:tt)*) => {
        $crate::error::RosterError::message(format!($($arg)*))
    };
}
