use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Analyze a text and record the result in history.
    Analyze(AnalyzeArgs),
    /// Inspect or clear the analysis history.
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
    /// Write one result as a JSON export document.
    Export(ExportArgs),
}

/// Arguments for `vera analyze`.
#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Text to analyze. Reads stdin when neither TEXT nor --file is given.
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Do not record the result in history.
    #[arg(long)]
    pub no_record: bool,
}

/// History commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HistoryCommands {
    /// List recorded results, newest first. Honors the global --limit.
    List,
    /// Show one recorded result.
    Show { id: String },
    /// Remove every recorded result.
    Clear,
}

/// Arguments for `vera export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Result ID to export. Defaults to the newest result.
    pub id: Option<String>,

    /// Output path. Defaults to `analysis-{id}.json` in the current directory.
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the document instead of writing a file.
    #[arg(long)]
    pub stdout: bool,
}
