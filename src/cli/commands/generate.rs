//! Letter generation: the default command.
//!
//! Collects a form (interactively or from a TOML file), builds the request,
//! issues the single generation call, and prints the sanitized letter to
//! stdout. Status and errors go to stderr so the letter can be piped.

use anyhow::{Result, anyhow};
use chrono::Local;
use inquire::{Select, Text};
use std::path::Path;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::fs::atomic_write;
use crate::letter::{
    FormData, GenerationClient, InstitutionType, Language, LetterRequest, Tone, build_request,
    load_form,
};
use crate::messages::{Messages, institution_name, messages, tone_description, tone_name};
use crate::ui::{Spinner, Style, is_cancellation};

const LANGUAGES: [Language; 2] = [Language::En, Language::Sw];

pub struct GenerateOptions {
    pub form: Option<String>,
    pub lang: Option<Language>,
    pub tone: Option<Tone>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub out: Option<String>,
    pub dry_run: bool,
}

pub async fn run_generate(options: GenerateOptions) -> Result<()> {
    let manager = ConfigManager::new();
    let config_file = manager.load_or_default();
    let resolved = resolve_config(
        &ResolveOptions {
            lang: options.lang,
            endpoint: options.endpoint.clone(),
            model: options.model.clone(),
        },
        &config_file,
    )?;

    let ui_language = resolved.ui_language;
    let msgs = messages(ui_language);

    let mut form = match &options.form {
        Some(path) => load_form(Path::new(path), ui_language)?,
        None => match interactive_form(ui_language) {
            Ok(form) => form,
            // A cancelled prompt ends the submission cleanly
            Err(e) if is_cancellation(&e) => {
                println!();
                return Ok(());
            }
            Err(e) => return Err(e),
        },
    };

    if let Some(tone) = options.tone {
        form.tone = tone;
    }

    let mut request = build_request(&form, Local::now().date_naive())?;
    request.model = resolved.model.clone();

    if options.dry_run {
        print_request_preview(&request);
        return Ok(());
    }

    let service = resolved.service.ok_or_else(|| {
        anyhow!(
            "Missing required configuration: 'service.endpoint'\n\n\
             Please provide it via:\n  \
             - CLI option: barua --endpoint <url>\n  \
             - Config file: Run 'barua configure' to set it up"
        )
    })?;

    let client = GenerationClient::new(service.endpoint, service.api_key);

    let spinner = Spinner::new(msgs.generating);
    let result = client.generate(&request, form.language).await;
    spinner.stop();

    let letter = result?;

    println!("{letter}");

    if let Some(out) = &options.out {
        atomic_write(Path::new(out), &letter)?;
        eprintln!(
            "{} {} {}",
            Style::success("✓"),
            msgs.saved_to,
            Style::secondary(out)
        );
    }

    Ok(())
}

fn print_request_preview(request: &LetterRequest) {
    println!("{}", Style::header("System instruction"));
    println!("{}", request.system_instruction);
    println!();
    println!("{}", Style::header("Prompt"));
    println!("{}", request.prompt);
    println!();
    println!(
        "{}        {}",
        Style::label("model"),
        Style::value(&request.model)
    );
    println!(
        "{}  {}",
        Style::label("temperature"),
        Style::value(request.temperature)
    );
}

/// Walks the form sections in the same order as the original application:
/// personal, employer, job details, documents, style settings.
fn interactive_form(ui_language: Language) -> Result<FormData> {
    let msgs = messages(ui_language);

    println!("{}", Style::header(msgs.personal_info));
    let full_name = required_text(msgs.full_name, msgs)?;
    let applicant_address = required_text(msgs.applicant_address, msgs)?;
    let email = optional_text(msgs.email, msgs)?;
    let phone = optional_text(msgs.phone, msgs)?;

    println!();
    println!("{}", Style::header(msgs.employer_info));
    let company_name = required_text(msgs.company_name, msgs)?;
    let employer_address = required_text(msgs.employer_address, msgs)?;
    let department = optional_text(msgs.department, msgs)?;
    let institution_type = select_institution(ui_language)?;

    println!();
    println!("{}", Style::header(msgs.job_details));
    let job_title = required_text(msgs.job_title, msgs)?;
    let job_description = optional_text(msgs.job_description, msgs)?;

    println!();
    println!("{}", Style::header(msgs.documents));
    let cv = Text::new(msgs.cv_path)
        .with_help_message(msgs.cv_hint)
        .prompt()?
        .trim()
        .to_string();
    let cv = if cv.is_empty() { None } else { Some(cv) };

    println!();
    println!("{}", Style::header(msgs.style_settings));
    let language = select_language(ui_language)?;
    let tone = select_tone(ui_language)?;

    Ok(FormData {
        full_name,
        applicant_address,
        email,
        phone,
        company_name,
        employer_address,
        department,
        institution_type,
        language,
        tone,
        job_title,
        job_description,
        cv,
    })
}

/// Re-prompts until the field carries non-whitespace content.
fn required_text(label: &str, msgs: &Messages) -> Result<String> {
    loop {
        let value = Text::new(label).prompt()?;
        let value = value.trim();
        if value.is_empty() {
            eprintln!("{}", Style::hint(msgs.required_hint));
        } else {
            return Ok(value.to_string());
        }
    }
}

fn optional_text(label: &str, msgs: &Messages) -> Result<String> {
    let value = Text::new(label)
        .with_help_message(msgs.optional_hint)
        .prompt()?;
    Ok(value.trim().to_string())
}

/// Letter language select. The cursor starts on the interface language: that
/// seeds the default, but the choice here is independent afterwards.
fn select_language(ui_language: Language) -> Result<Language> {
    let msgs = messages(ui_language);
    let options: Vec<String> = LANGUAGES
        .iter()
        .map(|lang| format!("{} - {}", lang.code(), lang.display_name()))
        .collect();

    let start = LANGUAGES
        .iter()
        .position(|lang| *lang == ui_language)
        .unwrap_or(0);

    let selection = Select::new(msgs.generation_language, options.clone())
        .with_starting_cursor(start)
        .prompt()?;

    let index = options
        .iter()
        .position(|option| *option == selection)
        .unwrap_or(start);
    Ok(LANGUAGES[index])
}

fn select_tone(ui_language: Language) -> Result<Tone> {
    let msgs = messages(ui_language);
    let options: Vec<String> = Tone::ALL
        .iter()
        .map(|tone| {
            format!(
                "{} - {}",
                tone_name(*tone, ui_language),
                tone_description(*tone, ui_language)
            )
        })
        .collect();

    let start = Tone::ALL
        .iter()
        .position(|tone| *tone == Tone::Professional)
        .unwrap_or(0);

    let selection = Select::new(msgs.tone, options.clone())
        .with_starting_cursor(start)
        .prompt()?;

    let index = options
        .iter()
        .position(|option| *option == selection)
        .unwrap_or(start);
    Ok(Tone::ALL[index])
}

fn select_institution(ui_language: Language) -> Result<InstitutionType> {
    let msgs = messages(ui_language);
    let options: Vec<String> = InstitutionType::ALL
        .iter()
        .map(|institution| institution_name(*institution, ui_language).to_string())
        .collect();

    let selection = Select::new(msgs.institution_type, options.clone()).prompt()?;

    let index = options
        .iter()
        .position(|option| *option == selection)
        .unwrap_or(0);
    Ok(InstitutionType::ALL[index])
}
