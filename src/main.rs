//! prefxml CLI - Command-line tool for preference store export and import.
//!
//! This is the main entry point for the prefxml command-line application.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use prefxml::prelude::*;

/// prefxml - export and import typed preference stores as XML
#[derive(Parser)]
#[command(name = "prefxml")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a JSON preference store to an XML document
    Export {
        /// Path to the JSON preference store
        #[arg(short, long)]
        input: PathBuf,

        /// Output XML file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keys to leave out of the document
        #[arg(short, long, env = "PREFXML_EXCLUDE", value_delimiter = ',')]
        exclude: Vec<String>,

        /// Write without indentation
        #[arg(long)]
        compact: bool,
    },

    /// Import an XML document into a JSON preference store
    Import {
        /// Input XML file
        #[arg(short, long)]
        input: PathBuf,

        /// JSON preference store to write into (created if missing)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List the entries of an XML document
    Show {
        /// Input XML file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Export {
            input,
            output,
            exclude,
            compact,
        } => {
            cmd_export(&input, output.as_ref(), exclude, compact)?;
        }
        Commands::Import { input, output } => {
            cmd_import(&input, &output)?;
        }
        Commands::Show { input } => {
            cmd_show(&input)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    Ok(())
}

fn cmd_export(
    input: &PathBuf,
    output: Option<&PathBuf>,
    exclude: Vec<String>,
    compact: bool,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Preference store not found: {}", input.display());
    }
    let prefs = JsonPreferences::open(input).context("Failed to open preference store")?;

    let excluded: HashSet<String> = exclude
        .into_iter()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .collect();

    tracing::debug!(excluded = excluded.len(), compact, "export options");

    let mut options = ExportOptions::new();
    if !excluded.is_empty() {
        options = options.excluded(Some(excluded));
    }
    if compact {
        options = options.compact();
    }
    let exporter = Exporter::new(options);

    let start = Instant::now();
    let summary = match output {
        Some(path) => {
            let file = File::create(path).context("Failed to create output file")?;
            exporter
                .export(&prefs, BufWriter::new(file))
                .context("Failed to export preferences")?
        }
        None => exporter
            .export(&prefs, io::stdout().lock())
            .context("Failed to export preferences")?,
    };

    eprintln!(
        "Exported {} entries in {:?} ({} excluded, {} null)",
        summary.written,
        start.elapsed(),
        summary.excluded,
        summary.null
    );

    Ok(())
}

fn cmd_import(input: &PathBuf, output: &PathBuf) -> Result<()> {
    println!("Importing: {} -> {}", input.display(), output.display());

    let prefs = JsonPreferences::open(output).context("Failed to open preference store")?;
    let before = prefs.len();

    let committed = import_from_file(&prefs, input).context("Failed to import preferences")?;
    if !committed {
        anyhow::bail!("Preference store rejected the import");
    }

    println!("Import complete: {} entries ({} before)", prefs.len(), before);

    Ok(())
}

fn cmd_show(input: &PathBuf) -> Result<()> {
    let file = File::open(input).context("Failed to open input file")?;

    let count = read_entries(file, |key, value| {
        println!("{:<8} {} = {}", value.kind(), key, value);
    })
    .context("Failed to read preferences document")?;

    println!("\nTotal: {} entries", count);

    Ok(())
}
