//! Transcript Formatter CLI
//! Turns a two-speaker `.vtt` coaching transcript into a review document model (JSON).

use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use transcriptformatter::{discover_speakers, format_transcript, FormatOptions, RosterPolicy};

/// Coaching transcript formatter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Caption file (.vtt) with two speakers
    transcript: PathBuf,

    /// Speaker acting as coach; omit to list the speakers found
    #[arg(short, long)]
    coach: Option<String>,

    /// Only look at the first two speakers found, ignoring any later ones
    #[arg(long)]
    lenient_roster: bool,

    /// Write the document here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let content = fs::read_to_string(&cli.transcript)
        .with_context(|| format!("Unable to read {}", cli.transcript.display()))?;

    let roster_policy = if cli.lenient_roster {
        RosterPolicy::FirstTwo
    } else {
        RosterPolicy::WholeFile
    };

    let Some(coach) = cli.coach else {
        let roster = discover_speakers(&content, roster_policy)?;
        let [first, second] = roster.names();
        bail!(
            "Who is the coach? Re-run with --coach \"{}\" or --coach \"{}\"",
            first,
            second
        );
    };

    let options = FormatOptions {
        coach,
        roster_policy,
        ..FormatOptions::default()
    };
    let document = format_transcript(&content, &options)
        .with_context(|| format!("Unable to format {}", cli.transcript.display()))?;

    let json = if cli.compact {
        serde_json::to_string(&document)?
    } else {
        serde_json::to_string_pretty(&document)?
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("Unable to write {}", path.display()))?;
            info!("Wrote {} rows to {}", document.rows.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }

    Ok(())
}
