//! Cover letter core: form model, prompt construction, sanitization, and the
//! generation client.

mod client;
mod form;
mod prompt;
mod sanitize;

pub use client::{GenerationClient, GenerationError};
pub use form::{BuildError, FormData, FormFile, InstitutionType, Language, Tone, load_form};
pub use prompt::{
    DEFAULT_MODEL, DEPARTMENT_FALLBACK, JOB_DESCRIPTION_FALLBACK, LetterRequest, TEMPERATURE,
    build_request, format_letter_date, subject_prefix, tone_descriptor,
};
pub use sanitize::sanitize;
