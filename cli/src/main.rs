use std::fs;
use std::path::PathBuf;

use clap::Parser;
use optdoc_gen::pipeline::{DEFAULT_TITLE, GenConfig, run};
use optdoc_gen::resolve::OverrideMap;

#[derive(Debug, Parser)]
#[command(name = "optdoc")]
#[command(about = "Generate option docs and example configs from source declarations")]
struct Cli {
    /// Field-declaration source file (the typed defaults table).
    #[arg(long)]
    defaults: PathBuf,
    /// Option-registry source file (the descriptor 5-tuples).
    #[arg(long)]
    registry: PathBuf,
    /// Markdown reference output path.
    #[arg(long)]
    markdown: PathBuf,
    /// JSON example-config output path.
    #[arg(long)]
    json: PathBuf,
    /// YAML example-config output path.
    #[arg(long)]
    yaml: PathBuf,
    /// JSON file replacing the built-in flag-to-field override map
    /// ("--flag": "field" pairs, null for flags with no backing field).
    #[arg(long)]
    flag_map: Option<PathBuf>,
    /// Markdown document title.
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,
    /// Fail on source lines that look like declarations or registry rows
    /// but match no recognized pattern.
    #[arg(long)]
    strict: bool,
    /// Suppress the summary line and warnings.
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run_generate(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_generate(cli: Cli) -> Result<(), String> {
    let overrides = match &cli.flag_map {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|err| format!("Failed to read flag map '{}': {err}", path.display()))?;
            OverrideMap::from_json(&text).map_err(|err| err.to_string())?
        }
        None => OverrideMap::builtin(),
    };

    let mut config = GenConfig::new(cli.defaults, cli.registry, cli.markdown, cli.json, cli.yaml);
    config.overrides = overrides;
    config.title = cli.title;
    config.strict = cli.strict;

    let report = run(&config).map_err(|err| err.to_string())?;

    if !cli.quiet {
        for warning in &report.warnings {
            eprintln!("warning: {warning}");
        }
        println!(
            "Wrote {} options in {} categories",
            report.options, report.categories
        );
    }
    Ok(())
}
