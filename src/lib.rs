#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::lexer::lexer::{tokenize, ScanResult};

pub mod errors;
pub mod lexer;
pub mod macros;

/// A 1-based source line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line(pub u32);

impl Line {
    pub fn first() -> Self {
        Line(1)
    }

    pub fn advance(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scans a complete source string with the default options.
pub fn scan(source: &str) -> ScanResult {
    tokenize(source)
}
