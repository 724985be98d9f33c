//! # barua - Bilingual AI Cover Letter Generator
//!
//! `barua` is a command-line tool that turns an application form into a
//! formatted cover letter using an OpenAI-compatible generation endpoint.
//! Both the interface and the generated letter are available in English and
//! Kiswahili.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive form
//! barua
//!
//! # Generate from a saved form
//! barua init
//! barua barua-form.toml
//!
//! # Swahili interface (and default letter language)
//! barua --lang sw
//!
//! # Inspect the composed request without calling the service
//! barua barua-form.toml --dry-run
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/barua/config.toml`:
//!
//! ```toml
//! [barua]
//! ui_language = "en"
//! model = "gemini-3-pro-preview"
//!
//! [service]
//! endpoint = "https://api.example.com"
//! api_key_env = "BARUA_API_KEY"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and service settings.
pub mod config;

/// File system utilities.
pub mod fs;

/// Cover letter core: form model, prompt construction, generation client.
pub mod letter;

/// Bilingual interface strings.
pub mod messages;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors, prompt handling).
pub mod ui;
