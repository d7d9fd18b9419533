use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use tracing::debug;

use crate::models::MatchRecord;
use crate::parsers::translate;
use crate::summary::MatchSummary;
use crate::utils::{format_path_with_tilde, open_input};

/// Input path that stands for standard input
const STDIN_MARKER: &str = "-";

#[derive(Parser)]
#[command(name = "rg-matches")]
#[command(version = "0.1.0")]
#[command(about = "Turn ripgrep --json output into match records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every match record
    List {
        /// Files holding `rg --json` output; standard input when omitted or `-`
        inputs: Vec<PathBuf>,
        /// How to print each match
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show statistics about the matches
    Stats {
        /// Files holding `rg --json` output; standard input when omitted or `-`
        inputs: Vec<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `path:line: text` rows
    Text,
    /// One normalized JSON object per line
    Json,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::List { inputs, format }) => {
            list_matches(inputs, *format)?;
        }
        Some(Commands::Stats { inputs }) => {
            show_stats(inputs)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Translate every input, keeping argument order. Files are translated in
/// parallel; each one is an independent stream.
fn load_records(inputs: &[PathBuf]) -> Result<Vec<MatchRecord>> {
    if inputs.is_empty() {
        return translate_input(Path::new(STDIN_MARKER));
    }

    let stdin_count = inputs.iter().filter(|input| is_stdin(input)).count();
    if stdin_count > 1 {
        bail!("Standard input (`{}`) can only be given once", STDIN_MARKER);
    }

    let batches = inputs
        .par_iter()
        .map(|input| translate_input(input))
        .collect::<Result<Vec<_>>>()?;

    Ok(batches.into_iter().flatten().collect())
}

fn is_stdin(input: &Path) -> bool {
    input == Path::new(STDIN_MARKER)
}

fn translate_input(input: &Path) -> Result<Vec<MatchRecord>> {
    let records = if is_stdin(input) {
        translate(io::stdin().lock()).context("Failed to translate search output from stdin")?
    } else {
        let file = open_input(input)?;
        translate(BufReader::new(file)).with_context(|| {
            format!("Failed to translate search output: {}", input.display())
        })?
    };

    debug!(input = %input.display(), matches = records.len(), "loaded input");
    Ok(records)
}

fn list_matches(inputs: &[PathBuf], format: OutputFormat) -> Result<()> {
    let records = load_records(inputs)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for record in &records {
        match format {
            OutputFormat::Text => writeln!(out, "{}", format_row(record))?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, record)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;

    Ok(())
}

fn format_row(record: &MatchRecord) -> String {
    format!(
        "{}:{}: {}",
        format_path_with_tilde(Path::new(&record.path)),
        record.line_number,
        record.trimmed_line()
    )
}

fn show_stats(inputs: &[PathBuf]) -> Result<()> {
    let records = load_records(inputs)?;
    let summary = MatchSummary::from_records(&records);

    println!("Search Match Statistics");
    println!("=======================");
    println!("Total matches: {}", summary.matches);
    println!("  Submatches: {}", summary.submatches);
    println!("  Files: {}", summary.files);
    println!("  Directories: {}", summary.directories);

    if let Some((path, count)) = &summary.busiest_file {
        println!();
        println!("Busiest file: {} ({} matches)", format_path_with_tilde(Path::new(path)), count);
    }

    Ok(())
}
