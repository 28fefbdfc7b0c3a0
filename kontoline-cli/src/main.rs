use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use kontoline_core::normalize_fragments;
use kontoline_ingest::{load_statements, prettify_all};
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use tracing::debug;

mod config;
mod render;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "kontoline",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("KONTOLINE_BUILD_SHA"), ")"),
    about = "Recover SEPA references and clean narratives from bank statement purpose lines"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize one purpose text given as fixed-width lines
    Normalize {
        /// Purpose lines in order; read one per stdin line when omitted
        fragments: Vec<String>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Load a JSON or CSV export of statement lines and normalize each
    Import {
        /// Path to a .json or .csv export
        path: PathBuf,

        /// Print a JSON array
        #[arg(long)]
        json: bool,

        /// Currency for amounts without a code (overrides config)
        #[arg(long)]
        currency: Option<String>,
    },

    /// Manage ~/.kontoline/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Normalize { fragments, json } => {
            let cfg = config::load_config()?;
            let fragments = if fragments.is_empty() {
                read_stdin_fragments()?
            } else {
                fragments
            };
            debug!(count = fragments.len(), "normalizing fragments");

            let out = normalize_fragments(&fragments);
            if json || cfg.output.json {
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!("{}", render::purpose_block(&out));
            }
        }

        Command::Import {
            path,
            json,
            currency,
        } => {
            let cfg = config::load_config()?;
            if !path.exists() {
                bail!("statement file not found: {}", path.display());
            }
            let currency = currency.unwrap_or(cfg.import.default_currency);

            let raws = load_statements(&path)?;
            let statements = prettify_all(&raws, &currency)
                .with_context(|| format!("normalizing {}", path.display()))?;

            if json || cfg.output.json {
                println!("{}", serde_json::to_string_pretty(&statements)?);
            } else {
                for s in &statements {
                    println!("{}", render::statement_line(s));
                }
                let structured = statements
                    .iter()
                    .filter(|s| s.purpose.has_sepa_references())
                    .count();
                println!(
                    "\n{} statements from {} ({} with SEPA references)",
                    statements.len(),
                    path.display(),
                    structured
                );
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

/// One fragment per stdin line, padding kept.
fn read_stdin_fragments() -> Result<Vec<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("reading purpose lines from stdin (end with Ctrl-D)");
    }
    stdin
        .lock()
        .lines()
        .map(|l| l.context("read stdin"))
        .collect()
}
