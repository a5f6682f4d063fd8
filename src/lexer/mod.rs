//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a flat
//! sequence of tokens for later stages. It handles:
//!
//! - Single-pass, character-by-character recognition of lexemes
//! - Keywords, identifiers, number and string literals, operators and punctuation
//! - Line tracking for every token and diagnostic
//! - Comments and whitespace skipping
//! - Recovery from malformed input without aborting the scan

pub mod lexer;
pub mod tokens;
