//! Input/output collaborators around the synthesis core

/// Command-line parsing and batch orchestration
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding and encoding
pub mod image;
/// Terminal progress display
pub mod progress;
/// Source image enumeration
pub mod source;
