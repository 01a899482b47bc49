/// Command-line parsing and the top-level file workflow
pub mod cli;
/// Runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding and encoding
pub mod image;
/// Scan progress display
pub mod progress;
