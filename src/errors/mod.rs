//! Error types and error handling for the front end.
//!
//! This module defines the error types produced while tokenizing, parsing and
//! analysing a file. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for bad input and for internal invariant violations
//! - Error formatting and helpful suggestions
//!
//! Every error is fatal: the first one aborts the run and is handed back to the caller.

pub mod errors;
