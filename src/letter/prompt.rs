//! Request Builder: turns a validated form into the instruction pair sent to
//! the generation service.
//!
//! Pure by construction. The current date is injected by the caller so the
//! output is fully determined by its inputs.

use chrono::{Datelike, NaiveDate};

use super::form::{BuildError, FormData, Language, Tone};

/// Model identifier pinned by the original application.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Sampling temperature for letter generation.
pub const TEMPERATURE: f32 = 0.6;

/// Fallback inserted into the user prompt when no job description is given.
pub const JOB_DESCRIPTION_FALLBACK: &str = "Standard requirements for the role.";

/// Fallback used in the instruction's data-usage section.
const RESPONSIBILITIES_FALLBACK: &str = "Standard responsibilities for this role.";

/// Fallback department for the user prompt.
pub const DEPARTMENT_FALLBACK: &str = "Human Resources";

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_SW: [&str; 12] = [
    "Januari",
    "Februari",
    "Machi",
    "Aprili",
    "Mei",
    "Juni",
    "Julai",
    "Agosti",
    "Septemba",
    "Oktoba",
    "Novemba",
    "Desemba",
];

/// The complete request handed to the Generation Client.
#[derive(Debug, Clone)]
pub struct LetterRequest {
    /// Style and format rules, fixed per (tone, language).
    pub system_instruction: String,
    /// Per-submission facts.
    pub prompt: String,
    pub model: String,
    pub temperature: f32,
}

/// Subject-line prefix preceding the upper-cased job title.
pub const fn subject_prefix(language: Language) -> &'static str {
    match language {
        Language::En => "RE: APPLICATION FOR THE POSITION OF",
        Language::Sw => "YAH: MAOMBI YA KAZI NAFASI YA",
    }
}

/// Register descriptor injected into the instruction text. Total over
/// (tone, language).
pub const fn tone_descriptor(tone: Tone, language: Language) -> &'static str {
    match (tone, language) {
        (Tone::Friendly, Language::En) => "polite, warm, and respectful",
        (Tone::Friendly, Language::Sw) => "ya adabu, yenye uchangamfu na heshima",
        (Tone::Professional, Language::En) => "formal, official, and structured",
        (Tone::Professional, Language::Sw) => "ya kiofisi, rasmi na yenye mpangilio",
        (Tone::Bold, Language::En) => "confident and assertive but professional",
        (Tone::Bold, Language::Sw) => "ya ujasiri, ushawishi na yenye mamlaka ya kitaalamu",
    }
}

/// Renders the date in the long form of the target locale, e.g.
/// `25 August 2026` (en) or `25 Agosti 2026` (sw).
pub fn format_letter_date(date: NaiveDate, language: Language) -> String {
    let months = match language {
        Language::En => &MONTHS_EN,
        Language::Sw => &MONTHS_SW,
    };
    let month = months[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

/// Builds the system instruction and user prompt for one submission.
///
/// Re-validates required fields so a malformed prompt is never produced even
/// if the form layer misbehaved.
pub fn build_request(form: &FormData, today: NaiveDate) -> Result<LetterRequest, BuildError> {
    form.validate()?;

    Ok(LetterRequest {
        system_instruction: build_system_instruction(form, today),
        prompt: build_prompt(form),
        model: DEFAULT_MODEL.to_string(),
        temperature: TEMPERATURE,
    })
}

fn language_directive(language: Language) -> &'static str {
    match language {
        Language::En => "formal British English",
        Language::Sw => "Kiswahili sanifu kinachotumika katika maombi rasmi ya kiserikali",
    }
}

fn build_system_instruction(form: &FormData, today: NaiveDate) -> String {
    let language = form.language;
    let date = format_letter_date(today, language);
    let tone = tone_descriptor(form.tone, language);
    let institution = form.institution_type.key();
    let subject = format!(
        "{} {}",
        subject_prefix(language),
        form.job_title.to_uppercase()
    );
    let focus = if form.job_description.trim().is_empty() {
        RESPONSIBILITIES_FALLBACK
    } else {
        form.job_description.trim()
    };

    format!(
        "You are a professional cover letter writer with 20 years of experience \
         specializing in applications for Government, NGO, and Private sector \
         institutions in East Africa.\n\
         \n\
         TASK:\n\
         Generate a COMPLETE, print-ready cover letter in {directive}.\n\
         \n\
         GLOBAL RULES - ABSOLUTE COMPLIANCE REQUIRED:\n\
         1. NO BULLET POINTS or lists of any kind. Use full paragraphs only.\n\
         2. NO HEADINGS except for the subject line.\n\
         3. DO NOT EXPLAIN what you are doing. No preamble like \"Here is your letter\".\n\
         4. DO NOT MENTION AI, automation, or software.\n\
         5. OUTPUT ONLY THE LETTER TEXT.\n\
         6. NO MARKDOWN (no bolding, no italics, no # headings, no asterisks).\n\
         7. NO EMOJIS, NO QUOTES, NO HTML.\n\
         8. Use a {tone} tone.\n\
         9. For Kiswahili, use high-level \"Kiswahili cha Ofisi\" \
         (e.g., \"Mamlaka ya Teuzi\", \"Wako katika Ujenzi wa Taifa\").\n\
         \n\
         LETTER STRUCTURE (STRICT ORDER):\n\
         1. APPLICANT ADDRESS & DATE: Start with the applicant's address and today's \
         date ({date}). In the final text, these should be at the top.\n\
         2. EMPLOYER ADDRESS: Full address of the organization/ministry below.\n\
         3. SALUTATION: Formal (e.g., Dear Sir/Madam or Ndugu Meneja/Mkurugenzi).\n\
         4. SUBJECT LINE: Must be ALL CAPS. Format: \"{subject}\".\n\
         5. OPENING PARAGRAPH: Reference the job advertisement clearly.\n\
         6. BODY PARAGRAPHS: Describe education, work experience, and skills relevant \
         to the role.\n\
         7. COMMITMENT PARAGRAPH: Express commitment and how the applicant adds value \
         to a {institution} institution.\n\
         8. CLOSING STATEMENT: Formal closing sentence.\n\
         9. SIGNATURE: End with \"{name}\" as the signature.\n\
         \n\
         DATA USAGE:\n\
         - Focus on the Job Description: {focus}\n\
         - Tailor qualifications to match the needs of a {institution} sector role.",
        directive = language_directive(language),
        name = form.full_name,
    )
}

fn build_prompt(form: &FormData) -> String {
    let description = if form.job_description.trim().is_empty() {
        JOB_DESCRIPTION_FALLBACK
    } else {
        form.job_description.trim()
    };
    let department = if form.department.trim().is_empty() {
        DEPARTMENT_FALLBACK
    } else {
        form.department.trim()
    };

    format!(
        "Generate a professional cover letter for {name} applying for the position \
         of {title} at {company} ({institution}).\n\
         \n\
         Job Description Details:\n\
         {description}\n\
         \n\
         Applicant Address: {applicant_address}\n\
         Employer Address: {employer_address}\n\
         Department: {department}",
        name = form.full_name,
        title = form.job_title,
        company = form.company_name,
        institution = form.institution_type.key(),
        applicant_address = form.applicant_address,
        employer_address = form.employer_address,
    )
}
