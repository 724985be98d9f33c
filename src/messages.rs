//! Bilingual UI strings.
//!
//! The interface (prompts, section headers, status lines) follows the UI
//! locale; the letter language is a separate form field that only takes its
//! default from the locale.

use crate::letter::{InstitutionType, Language, Tone};

/// All locale-dependent interface strings.
pub struct Messages {
    pub personal_info: &'static str,
    pub employer_info: &'static str,
    pub job_details: &'static str,
    pub documents: &'static str,
    pub style_settings: &'static str,

    pub full_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub applicant_address: &'static str,
    pub company_name: &'static str,
    pub employer_address: &'static str,
    pub department: &'static str,
    pub job_title: &'static str,
    pub job_description: &'static str,
    pub institution_type: &'static str,
    pub generation_language: &'static str,
    pub tone: &'static str,
    pub cv_path: &'static str,

    pub optional_hint: &'static str,
    pub required_hint: &'static str,
    pub cv_hint: &'static str,

    pub generating: &'static str,
    pub saved_to: &'static str,
}

static MESSAGES_EN: Messages = Messages {
    personal_info: "Personal information",
    employer_info: "Employer information",
    job_details: "Job details",
    documents: "Documents",
    style_settings: "Style settings",

    full_name: "Full name:",
    email: "Email:",
    phone: "Phone:",
    applicant_address: "Your address:",
    company_name: "Company or institution name:",
    employer_address: "Employer address:",
    department: "Department:",
    job_title: "Job title:",
    job_description: "Job description:",
    institution_type: "Institution type:",
    generation_language: "Letter language:",
    tone: "Tone:",
    cv_path: "CV file path:",

    optional_hint: "Optional, press Enter to skip",
    required_hint: "This field is required",
    cv_hint: "Kept with your application; never sent to the AI service",

    generating: "Generating cover letter...",
    saved_to: "Letter saved to",
};

static MESSAGES_SW: Messages = Messages {
    personal_info: "Taarifa binafsi",
    employer_info: "Taarifa za mwajiri",
    job_details: "Maelezo ya kazi",
    documents: "Nyaraka",
    style_settings: "Mipangilio ya mtindo",

    full_name: "Jina kamili:",
    email: "Barua pepe:",
    phone: "Simu:",
    applicant_address: "Anwani yako:",
    company_name: "Jina la kampuni au taasisi:",
    employer_address: "Anwani ya mwajiri:",
    department: "Idara:",
    job_title: "Nafasi ya kazi:",
    job_description: "Maelezo ya kazi:",
    institution_type: "Aina ya taasisi:",
    generation_language: "Lugha ya barua:",
    tone: "Mtindo wa barua:",
    cv_path: "Njia ya faili la CV:",

    optional_hint: "Si lazima, bonyeza Enter kuruka",
    required_hint: "Sehemu hii inahitajika",
    cv_hint: "Huhifadhiwa na maombi yako; haitumwi kwa huduma ya AI",

    generating: "Inaandaa barua ya maombi...",
    saved_to: "Barua imehifadhiwa kwenye",
};

/// Returns the string table for the given UI locale.
pub const fn messages(language: Language) -> &'static Messages {
    match language {
        Language::En => &MESSAGES_EN,
        Language::Sw => &MESSAGES_SW,
    }
}

/// Display name for a tone in the given locale.
pub const fn tone_name(tone: Tone, language: Language) -> &'static str {
    match (tone, language) {
        (Tone::Friendly, Language::En) => "Friendly",
        (Tone::Friendly, Language::Sw) => "Rafiki",
        (Tone::Professional, Language::En) => "Professional",
        (Tone::Professional, Language::Sw) => "Kitaalamu",
        (Tone::Bold, Language::En) => "Bold",
        (Tone::Bold, Language::Sw) => "Jasiri",
    }
}

/// Short description shown next to a tone option.
pub const fn tone_description(tone: Tone, language: Language) -> &'static str {
    match (tone, language) {
        (Tone::Friendly, Language::En) => "Warm and respectful",
        (Tone::Friendly, Language::Sw) => "Yenye uchangamfu na heshima",
        (Tone::Professional, Language::En) => "Formal and structured",
        (Tone::Professional, Language::Sw) => "Rasmi na yenye mpangilio",
        (Tone::Bold, Language::En) => "Confident and assertive",
        (Tone::Bold, Language::Sw) => "Ya kujiamini na msisitizo",
    }
}

/// Display name for an institution sector in the given locale.
pub const fn institution_name(institution: InstitutionType, language: Language) -> &'static str {
    match (institution, language) {
        (InstitutionType::Government, Language::En) => "Government",
        (InstitutionType::Government, Language::Sw) => "Serikali",
        (InstitutionType::Ngo, Language::En) => "NGO",
        (InstitutionType::Ngo, Language::Sw) => "Shirika lisilo la kiserikali (NGO)",
        (InstitutionType::Private, Language::En) => "Private",
        (InstitutionType::Private, Language::Sw) => "Binafsi",
    }
}
