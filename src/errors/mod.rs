//! Error types for the parser.
//!
//! Every error here is recoverable: the parser appends it to its error
//! list and resumes, so a single parse can report many of them.

pub mod errors;

#[cfg(test)]
mod tests;
