//! Configure command handler for editing service and interface settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{BaruaConfig, ConfigFile, ConfigManager, ServiceConfig};
use crate::letter::{DEFAULT_MODEL, Language};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `--show`, prints the current configuration; otherwise walks an
/// interactive setup for the service endpoint, model, API key variable, and
/// interface language.
pub fn run_configure(lang: Option<Language>, show: bool) -> Result<()> {
    if show {
        print_config(&ConfigManager::new().load_or_default());
        return Ok(());
    }

    handle_prompt_cancellation(|| run_configure_inner(lang))
}

fn run_configure_inner(lang: Option<Language>) -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();

    print_config(&config);

    let current_service = config.service.as_ref();

    let mut endpoint_prompt =
        Text::new("Service endpoint:").with_help_message("OpenAI-compatible API base URL");
    if let Some(service) = current_service {
        endpoint_prompt = endpoint_prompt.with_default(&service.endpoint);
    }
    let endpoint = endpoint_prompt.prompt()?.trim().to_string();
    if endpoint.is_empty() {
        bail!("Service endpoint cannot be empty");
    }

    let current_model = config.barua.model.as_deref().unwrap_or(DEFAULT_MODEL);
    let model = Text::new("Model:")
        .with_default(current_model)
        .prompt()?
        .trim()
        .to_string();
    if model.is_empty() {
        bail!("Model name cannot be empty");
    }

    let current_env = current_service
        .and_then(|service| service.api_key_env.as_deref())
        .unwrap_or("");
    let api_key_env = Text::new("API key environment variable:")
        .with_help_message("Leave empty for services without authentication")
        .with_default(current_env)
        .prompt()?
        .trim()
        .to_string();
    let api_key_env = if api_key_env.is_empty() {
        None
    } else {
        Some(api_key_env)
    };

    let ui_language = select_ui_language(lang.or(config.barua.ui_language))?;

    let updated = ConfigFile {
        barua: BaruaConfig {
            ui_language: Some(ui_language),
            model: Some(model),
        },
        service: Some(ServiceConfig {
            endpoint,
            api_key: current_service.and_then(|service| service.api_key.clone()),
            api_key_env,
        }),
    };

    manager.save(&updated)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_config(config: &ConfigFile) {
    let not_set = || Style::secondary("(not set)");

    println!("{}", Style::header("Current configuration"));
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        config
            .service
            .as_ref()
            .map_or_else(not_set, |service| Style::value(&service.endpoint))
    );
    println!(
        "  {}        {}",
        Style::label("model"),
        config
            .barua
            .model
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("api_key_env"),
        config
            .service
            .as_ref()
            .and_then(|service| service.api_key_env.as_deref())
            .map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("ui_language"),
        config
            .barua
            .ui_language
            .map_or_else(not_set, |lang| Style::value(lang.code()))
    );
    println!();
}

fn select_ui_language(default: Option<Language>) -> Result<Language> {
    const LANGUAGES: [Language; 2] = [Language::En, Language::Sw];

    let options: Vec<String> = LANGUAGES
        .iter()
        .map(|lang| format!("{} - {}", lang.code(), lang.display_name()))
        .collect();

    let start = default
        .and_then(|d| LANGUAGES.iter().position(|lang| *lang == d))
        .unwrap_or(0);

    let selection = Select::new("Interface language:", options.clone())
        .with_starting_cursor(start)
        .prompt()?;

    let index = options
        .iter()
        .position(|option| *option == selection)
        .unwrap_or(start);
    Ok(LANGUAGES[index])
}
