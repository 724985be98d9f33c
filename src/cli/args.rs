use clap::{Parser, Subcommand};

use crate::letter::{Language, Tone};

#[derive(Parser, Debug)]
#[command(name = "barua")]
#[command(about = "Bilingual AI cover letter generator (English/Kiswahili)")]
#[command(version)]
pub struct Args {
    /// Form file (TOML); starts an interactive form if not provided
    pub form: Option<String>,

    /// Interface language; also seeds the letter language default
    #[arg(short = 'l', long = "lang", value_enum, global = true)]
    pub lang: Option<Language>,

    /// Override the tone from the form
    #[arg(short = 't', long, value_enum)]
    pub tone: Option<Tone>,

    /// API endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Also write the letter to a file
    #[arg(short = 'o', long)]
    pub out: Option<String>,

    /// Compose and print the request without calling the service
    #[arg(long)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure barua settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List letter languages
    Languages,
    /// List tone presets
    Tones,
    /// Write a form template to fill in
    Init {
        /// Destination path
        path: Option<String>,
    },
}
