use anyhow::Result;
use clap::Parser;

use barua_cli::cli::commands::{configure, generate, init, languages, tones};
use barua_cli::cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Configure { show }) => {
            configure::run_configure(args.lang, show)?;
        }
        Some(Command::Languages) => {
            languages::run_languages();
        }
        Some(Command::Tones) => {
            tones::run_tones(args.lang);
        }
        Some(Command::Init { path }) => {
            init::run_init(path.as_deref())?;
        }
        None => {
            let options = generate::GenerateOptions {
                form: args.form,
                lang: args.lang,
                tone: args.tone,
                endpoint: args.endpoint,
                model: args.model,
                out: args.out,
                dry_run: args.dry_run,
            };
            generate::run_generate(options).await?;
        }
    }

    Ok(())
}
