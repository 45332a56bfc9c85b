use anyhow::*;
use arabic_joining::{GeneratorConfig, OutputFormat};
use clap::{CommandFactory, FromArgMatches, Parser};
use download::SourceLocation;
use log::{info, warn};
use std::{ffi::OsStr, io::Write, path::PathBuf};

mod download;

fn parse_config(name: &str) -> Result<GeneratorConfig, String> {
    GeneratorConfig::by_name(name).ok_or_else(|| {
        let names: Vec<_> = GeneratorConfig::ALL.iter().map(|x| x.name).collect();
        format!("unknown mode {name:?} (expected one of: {})", names.join(", "))
    })
}

/// Lists the presets accepted by `--mode` with their descriptions.
fn modes_help() -> String {
    let mut accum = String::from("Modes:\n");
    for config in GeneratorConfig::ALL {
        accum.push_str(&format!("  {:<8}{}\n", config.name, config.description));
    }
    accum
}

fn command() -> clap::Command {
    Cli::command().after_long_help(modes_help())
}

/// Regenerates the Arabic joining tables from the Unicode character database.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Which characters to include: `full` or `arabic`
    #[arg(long, default_value = "full", value_parser = parse_config)]
    mode: GeneratorConfig,
    /// The language to generate: `js` or `rust`
    #[arg(long, default_value = "js")]
    format: OutputFormat,
    /// Reads ArabicShaping.txt from a local file instead of downloading it
    #[arg(long, conflicts_with = "url")]
    input: Option<PathBuf>,
    /// The URL ArabicShaping.txt is downloaded from
    #[arg(long, default_value = download::ARABIC_SHAPING_URL)]
    url: String,
    /// Writes the generated code to a file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}
impl Cli {
    fn source(&self) -> SourceLocation {
        match &self.input {
            Some(path) => SourceLocation::File(path.clone()),
            None => SourceLocation::Url(self.url.clone()),
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    info!("Using mode '{}': {}", cli.mode.name, cli.mode.description);
    let source = download::load_source(&cli.source())?;
    let generated = arabic_joining::generate(&source, &cli.mode, cli.format)
        .context("Could not generate joining tables.")?;

    match &cli.output {
        Some(path) => {
            if path.extension() != Some(OsStr::new(cli.format.extension())) {
                warn!("'{}' does not have a .{} extension.", path.display(), cli.format.extension());
            }
            info!("Writing tables to '{}'...", path.display());
            std::fs::write(path, &generated)
                .with_context(|| format!("Could not write '{}'.", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(generated.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
fn main() {
    env_logger::init();

    let cli = Cli::from_arg_matches(&command().get_matches()).unwrap_or_else(|e| e.exit());
    if let Err(e) = execute(cli) {
        eprintln!("Error encountered: {:?}", e);
        std::process::exit(1);
    }
}
