use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use sku_compiler::logging;
use sku_compiler::service::{self, CompileOptions, DEFAULT_IDENTIFIER};
use sku_compiler::Gender;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Template workbook to fill in
    #[arg(long, short = 't')]
    template: PathBuf,

    /// Import workbook with the size quantities
    #[arg(long, short = 'i')]
    import: PathBuf,

    /// Write numeric sizes into the woman columns and start at size 34
    #[arg(long, short = 'w', conflicts_with = "gender")]
    woman: bool,

    /// Gender as text: man, woman, true or false
    #[arg(long, short = 'g')]
    gender: Option<Gender>,

    /// Identifier used in the output file name
    #[arg(long, default_value = DEFAULT_IDENTIFIER)]
    identifier: String,

    /// Directory for the compiled workbook
    #[arg(long, short = 'o', default_value = ".")]
    output_dir: PathBuf,

    /// Print the compile report as JSON to stdout
    #[arg(long, short = 'r')]
    report: bool,
}

fn resolve_gender(woman: bool, gender: Option<Gender>) -> Gender {
    match (woman, gender) {
        (true, _) => Gender::Woman,
        (false, Some(gender)) => gender,
        (false, None) => Gender::Man,
    }
}

fn run(cli: Cli) -> Result<PathBuf> {
    let options = CompileOptions {
        gender: resolve_gender(cli.woman, cli.gender),
        identifier: cli.identifier,
        ..CompileOptions::default()
    };

    let compiled = service::compile_files(&cli.template, &cli.import, &options)
        .context("Processing failed")?;

    let path = compiled
        .write_to(&cli.output_dir)
        .with_context(|| format!("Unable to write to {}", cli.output_dir.display()))?;
    info!(path = %path.display(), "compiled workbook written");

    if cli.report {
        let json = compiled
            .report
            .to_json()
            .context("Failed to serialize report to JSON")?;
        println!("{}", json);
    }

    Ok(path)
}

fn main() -> Result<()> {
    logging::init();
    run(Cli::parse())?;
    Ok(())
}
