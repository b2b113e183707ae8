//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for research results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with all agent reports
    Full,
    /// Only the synthesized summary
    Synthesis,
    /// JSON output
    Json,
}

/// CLI arguments for note-scout
#[derive(Parser, Debug)]
#[command(name = "note-scout")]
#[command(author, version, about = "Multi-agent research for your notes")]
#[command(long_about = r#"
Note Scout researches a note with a team of specialized agents.

Complex notes (meeting preparation, partnerships, multi-domain topics) go
through the full pipeline: research questions are extracted, one agent per
domain investigates them in parallel, and the findings are synthesized into
a single briefing. Simple notes get a quicker single-pass answer from two
providers with a merged summary.

Configuration files are loaded from (in priority order):
1. --config <path>    Explicit config file
2. ./scout.toml       Project-level config
3. ~/.config/note-scout/config.toml   Global config

API keys come from ANTHROPIC_API_KEY and OPENAI_API_KEY.

Example:
  note-scout "Meeting with security leaders about partnership next week"
  note-scout --file meeting-prep.txt --output full
  note-scout --category software "Best rust async runtimes to evaluate"
"#)]
pub struct Cli {
    /// The note text to research (or use --file)
    pub note: Option<String>,

    /// Read the note from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Note category for single-pass research (detected from keywords when omitted)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Extra research approach appended to the single-pass prompt
    #[arg(long, value_name = "TEXT")]
    pub approach: Option<String>,

    /// Stable note identifier recorded in the run log
    #[arg(long, value_name = "ID")]
    pub note_id: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "synthesis")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Validate the configuration and exit
    #[arg(long)]
    pub check_config: bool,
}
