//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Letter generation handler (the default command).
pub mod generate;

/// Form template command handler.
pub mod init;

/// Language listing command handler.
pub mod languages;

/// Tone preset listing command handler.
pub mod tones;
