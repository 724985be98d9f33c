//! Consistent styling for CLI output, built on owo-colors.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Semantic styles for terminal output.
pub struct Style;

impl Style {
    /// Section headers (e.g., "Personal information", "Tone presets")
    pub fn header<T: Display>(text: T) -> String {
        format!("{}", text.bold())
    }

    /// Labels/keys (e.g., "endpoint", "model")
    pub fn label<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    /// Primary values (e.g., model names, language names)
    pub fn value<T: Display>(text: T) -> String {
        format!("{}", text.cyan())
    }

    /// Secondary/supplementary info (e.g., descriptions, file paths)
    pub fn secondary<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    /// Success messages
    pub fn success<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    /// Error messages
    pub fn error<T: Display>(text: T) -> String {
        format!("{}", text.red().bold())
    }

    /// Language and tone keys
    pub fn code<T: Display>(text: T) -> String {
        format!("{}", text.yellow())
    }

    /// Hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        format!("{}", text.dimmed().italic())
    }
}
