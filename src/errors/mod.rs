//! Error types and error reporting for the scanner.
//!
//! Scanning never stops on bad input. Each problem is recorded as an
//! [`errors::Error`] carrying:
//!
//! - the kind of problem and its message
//! - the source line it was detected on
//! - an optional location context, empty for scanner diagnostics
//!
//! The host decides how and where the diagnostics are rendered.

pub mod errors;
