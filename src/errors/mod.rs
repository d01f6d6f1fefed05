//! Error types for the front end.
//!
//! This module defines the structured errors the parser records:
//!
//! - Error structures with source position information
//! - One variant per failure kind (illegal input, missing prefix rule,
//!   unexpected token, malformed numeral)
//! - Error names and suggestions used by diagnostics

pub mod errors;
