//! Form template command: writes a TOML form to fill in and submit.

use anyhow::{Result, bail};
use std::path::Path;

use crate::fs::atomic_write;
use crate::ui::Style;

const DEFAULT_PATH: &str = "barua-form.toml";

const FORM_TEMPLATE: &str = r#"# barua application form
# Fill in the fields below, then run: barua <this file>

full_name = ""
applicant_address = ""
email = ""    # optional
phone = ""    # optional

company_name = ""
employer_address = ""
department = ""    # optional, defaults to Human Resources

job_title = ""
job_description = ""    # optional

# government | ngo | private
institution_type = "government"

# friendly | professional | bold
tone = "professional"

# en | sw - defaults to the interface language when omitted
# language = "en"

# Path to your CV. Kept with the application; never sent to the AI service.
# cv = "cv.pdf"
"#;

/// Writes the form template to `path` (default `barua-form.toml`).
/// Refuses to overwrite an existing file.
pub fn run_init(path: Option<&str>) -> Result<()> {
    let path = path.unwrap_or(DEFAULT_PATH);

    if Path::new(path).exists() {
        bail!("File '{path}' already exists");
    }

    atomic_write(Path::new(path), FORM_TEMPLATE)?;

    println!(
        "{} Form template written to {}",
        Style::success("✓"),
        Style::value(path)
    );
    println!(
        "{}",
        Style::hint(format!("Fill it in, then run: barua {path}"))
    );

    Ok(())
}
