//! CLI interface for the resume screener

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Ranks a batch of resumes against a job description")]
#[command(
    long_about = "Scores each resume's skills, experience and education sections against a job description and produces a comparable relevance score per candidate"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score and rank resumes against a job description
    Rank {
        /// Path to the job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Resume files (PDF, TXT, MD) or directories containing them
        #[arg(short, long, num_args = 1.., required = true)]
        resumes: Vec<PathBuf>,

        /// Output format: console, json, markdown (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save the formatted report to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include the per-field score breakdown
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show the normalized text and extracted sections of one document
    Inspect {
        /// Path to the document (PDF, TXT, MD)
        #[arg(short, long)]
        file: PathBuf,

        /// Also print a preview of the raw extracted text
        #[arg(long)]
        raw: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
