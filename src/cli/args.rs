//! Command line argument parsing for the Verity CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Verity - on-device fake news detection
#[derive(Parser, Debug, Clone)]
#[command(name = "verity")]
#[command(about = "Classify text as likely fabricated or likely reliable")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct VerityArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl VerityArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify text with a trained model
    Classify(ClassifyArgs),

    /// Print the normalized token stream for text
    Analyze(AnalyzeArgs),

    /// Stem words
    Stem(StemArgs),
}

/// Arguments for classification
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Path to the model bundle (JSON)
    #[arg(short, long, value_name = "MODEL_FILE", env = "VERITY_MODEL")]
    pub model: PathBuf,

    /// Text to classify (reads stdin if neither this nor --file is given)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text to classify from a file
    #[arg(short = 'i', long, value_name = "TEXT_FILE")]
    pub file: Option<PathBuf>,
}

/// Arguments for analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze (reads stdin if neither this nor --file is given)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text to analyze from a file
    #[arg(short = 'i', long, value_name = "TEXT_FILE")]
    pub file: Option<PathBuf>,
}

/// Arguments for stemming
#[derive(Parser, Debug, Clone)]
pub struct StemArgs {
    /// Words to stem
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Show the rewrite steps for each word
    #[arg(long)]
    pub trace: bool,
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
