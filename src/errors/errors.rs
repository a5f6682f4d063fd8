use std::fmt::Display;

use thiserror::Error;

use crate::Line;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: Line,
    location: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: Line) -> Self {
        Error {
            internal_error: error_impl,
            line,
            location: String::new(),
        }
    }

    /// Attaches context such as `at end` or `at 'foo'` for later phases.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn get_line(&self) -> Line {
        self.line
    }

    pub fn get_location(&self) -> &str {
        &self.location
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[line {}] Error {}: {}",
            self.line, self.location, self.internal_error
        )
    }
}

impl std::error::Error for Error {}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unexpected character {character}.")]
    UnexpectedCharacter { character: char },
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Can not parse to number {token}")]
    NumberParseError { token: String },
}
