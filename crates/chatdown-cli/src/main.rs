//! Command-line exporter for rendered chat transcripts.
//!
//! Usage:
//!  chatdown <input.html>                       - write chat-export-<timestamp>.md to the current directory
//!  chatdown <input.html> --output-dir <dir>    - write the export into <dir>
//!  chatdown <input.html> --stdout              - print the transcript instead
//!
//! Set RUST_LOG (or pass -v) for diagnostics on stderr.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chatdown::{ChatdownOptions, ChatdownService, NestedListStyle};
use chrono::{DateTime, Local};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "chatdown", version, about = "Export a rendered chat page as a Markdown transcript")]
struct Cli {
    /// Saved HTML page containing the conversation
    input: PathBuf,

    /// Directory for the exported transcript
    #[arg(short, long, default_value = ".", conflicts_with = "stdout")]
    output_dir: PathBuf,

    /// Print the transcript to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Attribute marking turn roots and carrying their role
    #[arg(long, default_value = "data-role")]
    role_attr: String,

    /// Fail on turn roots with an unrecognized role instead of skipping them
    #[arg(long)]
    strict_roles: bool,

    /// Escape Markdown metacharacters in text
    #[arg(long)]
    escape: bool,

    /// Render nested lists indented under their parent item
    #[arg(long)]
    indent_nested_lists: bool,

    /// Levels added to every heading (clamped to 6)
    #[arg(long, default_value_t = 1)]
    heading_offset: u8,

    /// Collapse runs of blank lines to one
    #[arg(long)]
    collapse_blank_lines: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> ChatdownOptions {
        let mut options = ChatdownOptions::default();
        options.serializer.heading_offset = self.heading_offset;
        options.serializer.escape_text = self.escape;
        if self.indent_nested_lists {
            options.serializer.nested_lists = NestedListStyle::Indented;
        }
        options.turns.role_attribute = self.role_attr.clone();
        options.turns.skip_unknown_roles = !self.strict_roles;
        options.transcript.collapse_blank_lines = self.collapse_blank_lines;
        options
    }
}

/// File name for an export taken at `timestamp`
fn export_file_name(timestamp: DateTime<Local>) -> String {
    format!("chat-export-{}.md", timestamp.format("%Y-%m-%dT%H-%M-%S"))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let html = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let service = ChatdownService::with_options(cli.options());
    let transcript = service
        .transcript_from_html(&html)
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;

    if cli.stdout {
        print!("{}", transcript);
        return Ok(());
    }

    let path = cli.output_dir.join(export_file_name(Local::now()));
    fs::write(&path, transcript).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote transcript");
    println!("{}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&cli)
}
