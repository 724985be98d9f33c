//! Tone preset listing.

use crate::config::ConfigManager;
use crate::letter::{Language, Tone, tone_descriptor};
use crate::messages::{tone_description, tone_name};
use crate::ui::Style;

/// Prints the tone presets with their localized names and the register
/// descriptor each one injects into the instruction text.
pub fn run_tones(lang: Option<Language>) {
    let config = ConfigManager::new().load_or_default();
    let ui_language = lang.or(config.barua.ui_language).unwrap_or(Language::En);

    println!("{}", Style::header("Tone presets"));
    for tone in Tone::ALL {
        println!(
            "  {:14} {} {}",
            Style::code(tone.key()),
            Style::value(tone_name(tone, ui_language)),
            Style::secondary(format!("({})", tone_description(tone, ui_language)))
        );
        println!(
            "  {:14} {}",
            "",
            Style::hint(tone_descriptor(tone, ui_language))
        );
    }
}
