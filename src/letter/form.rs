//! Form data for a single letter submission.
//!
//! Mirrors the fields collected by the application form: applicant identity,
//! employer details, and generation settings. A form is built once per
//! submission and discarded afterwards.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Letter output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Formal British English.
    En,
    /// Kiswahili sanifu (formal register).
    Sw,
}

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Sw => "sw",
        }
    }

    /// Human-readable name shown in listings and prompts.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Sw => "Kiswahili",
        }
    }
}

/// Register the letter is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Friendly,
    Professional,
    Bold,
}

impl Tone {
    pub const ALL: [Self; 3] = [Self::Friendly, Self::Professional, Self::Bold];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Friendly => "friendly",
            Self::Professional => "professional",
            Self::Bold => "bold",
        }
    }
}

/// Sector of the hiring institution. Only affects the commitment-paragraph
/// framing in the instruction text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InstitutionType {
    Government,
    Ngo,
    Private,
}

impl InstitutionType {
    pub const ALL: [Self; 3] = [Self::Government, Self::Ngo, Self::Private];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Government => "government",
            Self::Ngo => "ngo",
            Self::Private => "private",
        }
    }
}

/// One submission's worth of applicant and job details.
///
/// Required fields must be non-empty before prompt construction; the optional
/// text fields fall back to fixed phrases inside the Request Builder.
#[derive(Debug, Clone)]
pub struct FormData {
    pub full_name: String,
    pub applicant_address: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub employer_address: String,
    pub department: String,
    pub institution_type: InstitutionType,
    pub language: Language,
    pub tone: Tone,
    pub job_title: String,
    pub job_description: String,
    /// Path to a CV file, collected by the form but never read or
    /// transmitted. Kept for parity with the web form this tool replaces.
    pub cv: Option<String>,
}

impl FormData {
    /// Checks that every required field carries non-whitespace content.
    ///
    /// The form layer already enforces this; the check here guards against
    /// malformed form files so a broken prompt is never sent.
    pub fn validate(&self) -> Result<(), BuildError> {
        let required = [
            ("full_name", &self.full_name),
            ("applicant_address", &self.applicant_address),
            ("company_name", &self.company_name),
            ("employer_address", &self.employer_address),
            ("job_title", &self.job_title),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(BuildError::MissingField(name));
            }
        }

        Ok(())
    }
}

/// On-disk form document (TOML).
///
/// All generation settings are optional in the file; `language` is seeded
/// from the UI locale when absent, and is independent of it afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct FormFile {
    pub full_name: String,
    pub applicant_address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub company_name: String,
    pub employer_address: String,
    #[serde(default)]
    pub department: String,
    #[serde(default = "default_institution")]
    pub institution_type: InstitutionType,
    pub language: Option<Language>,
    #[serde(default = "default_tone")]
    pub tone: Tone,
    pub job_title: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub cv: Option<String>,
}

const fn default_institution() -> InstitutionType {
    InstitutionType::Government
}

const fn default_tone() -> Tone {
    Tone::Professional
}

impl FormFile {
    /// Resolves the file into validated `FormData`, seeding the letter
    /// language from `ui_language` when the file leaves it unset.
    pub fn into_form(self, ui_language: Language) -> Result<FormData, BuildError> {
        let form = FormData {
            full_name: self.full_name,
            applicant_address: self.applicant_address,
            email: self.email,
            phone: self.phone,
            company_name: self.company_name,
            employer_address: self.employer_address,
            department: self.department,
            institution_type: self.institution_type,
            language: self.language.unwrap_or(ui_language),
            tone: self.tone,
            job_title: self.job_title,
            job_description: self.job_description,
            cv: self.cv,
        };
        form.validate()?;
        Ok(form)
    }
}

/// Loads and validates a form document from disk.
pub fn load_form(path: &Path, ui_language: Language) -> Result<FormData> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read form file: {}", path.display()))?;

    let file: FormFile = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse form file: {}", path.display()))?;

    let form = file.into_form(ui_language)?;
    Ok(form)
}

/// A required form field was missing or blank at prompt-construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    MissingField(&'static str),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => {
                write!(f, "Missing required form field: '{field}'")
            }
        }
    }
}

impl std::error::Error for BuildError {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_form() -> FormData {
        FormData {
            full_name: "Amina Joseph".to_string(),
            applicant_address: "P.O. Box 123, Dodoma".to_string(),
            email: String::new(),
            phone: String::new(),
            company_name: "Ministry of Finance".to_string(),
            employer_address: "P.O. Box 9111, Dodoma".to_string(),
            department: String::new(),
            institution_type: InstitutionType::Government,
            language: Language::En,
            tone: Tone::Professional,
            job_title: "Accountant".to_string(),
            job_description: String::new(),
            cv: None,
        }
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        assert!(sample_form().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_required_field() {
        let mut form = sample_form();
        form.full_name = "   ".to_string();

        let err = form.validate().unwrap_err();
        assert_eq!(err, BuildError::MissingField("full_name"));
        assert!(err.to_string().contains("full_name"));
    }

    #[test]
    fn test_validate_rejects_empty_job_title() {
        let mut form = sample_form();
        form.job_title = String::new();

        assert_eq!(
            form.validate().unwrap_err(),
            BuildError::MissingField("job_title")
        );
    }

    #[test]
    fn test_validate_allows_empty_optional_fields() {
        let mut form = sample_form();
        form.email = String::new();
        form.phone = String::new();
        form.department = String::new();
        form.job_description = String::new();

        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_form_file_seeds_language_from_ui_locale() {
        let file: FormFile = toml::from_str(
            r#"
            full_name = "Amina Joseph"
            applicant_address = "P.O. Box 123, Dodoma"
            company_name = "Ministry of Finance"
            employer_address = "P.O. Box 9111, Dodoma"
            job_title = "Accountant"
            "#,
        )
        .unwrap();

        let form = file.clone().into_form(Language::Sw).unwrap();
        assert_eq!(form.language, Language::Sw);

        // Explicit field wins over the locale seed
        let mut file = file;
        file.language = Some(Language::En);
        let form = file.into_form(Language::Sw).unwrap();
        assert_eq!(form.language, Language::En);
    }

    #[test]
    fn test_form_file_defaults() {
        let file: FormFile = toml::from_str(
            r#"
            full_name = "Amina Joseph"
            applicant_address = "P.O. Box 123, Dodoma"
            company_name = "Ministry of Finance"
            employer_address = "P.O. Box 9111, Dodoma"
            job_title = "Accountant"
            "#,
        )
        .unwrap();

        assert_eq!(file.tone, Tone::Professional);
        assert_eq!(file.institution_type, InstitutionType::Government);
        assert!(file.department.is_empty());
        assert!(file.cv.is_none());
    }

    #[test]
    fn test_form_file_rejects_unknown_enum_value() {
        let result: Result<FormFile, _> = toml::from_str(
            r#"
            full_name = "A"
            applicant_address = "B"
            company_name = "C"
            employer_address = "D"
            job_title = "E"
            tone = "shouty"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::Sw.code(), "sw");
    }
}
