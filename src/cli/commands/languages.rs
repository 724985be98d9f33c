//! Letter language listing.

use crate::letter::Language;
use crate::ui::Style;

/// Prints the supported letter languages.
pub fn run_languages() {
    println!("{}", Style::header("Supported letter languages"));
    for language in [Language::En, Language::Sw] {
        println!(
            "  {:4} {}",
            Style::code(language.code()),
            Style::secondary(language.display_name())
        );
    }
}
