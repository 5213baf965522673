//! Resume screener: ranks a batch of resumes against a job description

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_screener::cli::{self, Cli, Commands, ConfigAction};
use resume_screener::config::Config;
use resume_screener::error::{Result, ScreenerError};
use resume_screener::input::manager::{collect_resume_paths, InputManager};
use resume_screener::output::formatter::ReportGenerator;
use resume_screener::output::report::{CandidateReport, ScreeningReport};
use resume_screener::ranking::document::{Document, DocumentKind};
use resume_screener::ranking::normalize::TextNormalizer;
use resume_screener::ranking::ranker::Ranker;
use resume_screener::ranking::sections::{SectionExtractor, SectionLabel};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Rank {
            job,
            resumes,
            output,
            save,
            detailed,
        } => run_rank(job, resumes, output, save, detailed, config).await,

        Commands::Inspect { file, raw } => run_inspect(file, raw, config).await,

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!(
                    "Current configuration ({})\n",
                    Config::config_path().display()
                );
                let rendered = toml::to_string_pretty(&config)
                    .map_err(|e| ScreenerError::Configuration(e.to_string()))?;
                println!("{}", rendered);
                Ok(())
            }
            Some(ConfigAction::Reset) => {
                Config::default().save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
        },
    }
}

async fn run_rank(
    job: PathBuf,
    resumes: Vec<PathBuf>,
    output: Option<String>,
    save: Option<PathBuf>,
    detailed: bool,
    config: Config,
) -> Result<()> {
    cli::validate_file_extension(&job, &["txt", "md"])
        .map_err(|e| ScreenerError::InvalidInput(format!("Job description file: {}", e)))?;

    let output_format = match output {
        Some(format) => cli::parse_output_format(&format).map_err(ScreenerError::InvalidInput)?,
        None => config.output.format,
    };

    let resume_paths = collect_resume_paths(&resumes)?;
    if resume_paths.is_empty() {
        warn!("No resume files found in the given paths");
    }

    let mut input_manager = InputManager::new().with_cache(config.input.enable_cache);

    info!("Reading job description: {}", job.display());
    let job_text = input_manager.extract_text(&job).await?;
    let job_document = Document::new(
        job_text,
        job.to_string_lossy().to_string(),
        DocumentKind::JobDescription,
    );

    let progress = ProgressBar::new(resume_paths.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
            .expect("Invalid progress template")
            .progress_chars("=> "),
    );

    // Per-item isolation: a resume that cannot be decoded joins the batch as
    // empty text and is flagged in the report; the batch always completes.
    let mut texts = Vec::with_capacity(resume_paths.len());
    let mut failed = Vec::with_capacity(resume_paths.len());
    for path in &resume_paths {
        progress.set_message(path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().to_string(),
        ));
        match input_manager.extract_text(path).await {
            Ok(text) => {
                texts.push(text);
                failed.push(false);
            }
            Err(e) => {
                warn!("Could not extract text from '{}': {}", path.display(), e);
                texts.push(String::new());
                failed.push(true);
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    let ranker = Ranker::new();
    let scores = ranker.rank_detailed(&job_document.content, &texts);

    let mut candidates = Vec::with_capacity(scores.len());
    for (((path, text), candidate), extraction_failed) in
        resume_paths.iter().zip(texts).zip(scores).zip(failed)
    {
        let document = Document::new(
            text,
            path.to_string_lossy().to_string(),
            DocumentKind::Resume,
        );
        candidates.push(CandidateReport::from_score(
            &document,
            &candidate,
            extraction_failed,
        ));
    }

    let report = ScreeningReport::new(job_document.file_name().to_string(), candidates);

    let use_colors = config.output.color_output && save.is_none();
    let detailed = detailed || config.output.detailed;
    let formatted = ReportGenerator::format(&report, output_format, use_colors, detailed)?;

    match save {
        Some(path) => {
            tokio::fs::write(&path, formatted.as_bytes()).await?;
            println!("Report saved to {}", path.display());
        }
        None => println!("{}", formatted),
    }

    Ok(())
}

async fn run_inspect(file: PathBuf, raw: bool, config: Config) -> Result<()> {
    let mut input_manager = InputManager::new().with_cache(config.input.enable_cache);
    let text = input_manager.extract_text(&file).await?;
    let document = Document::new(
        text,
        file.to_string_lossy().to_string(),
        DocumentKind::Resume,
    );

    println!("{}", document.file_name().bold());
    println!(
        "{} words, {} characters",
        document.word_count, document.character_count
    );

    if raw {
        println!("\n{}", "Raw text preview".bold());
        println!("{}", truncate_text(&document.content, 400));
    }

    let normalizer = TextNormalizer::new();
    let extractor = SectionExtractor::new();
    let normalized = normalizer.normalize(&document.content);

    println!("\n{}", "Normalized text preview".bold());
    println!("{}", truncate_text(&normalized, 400));

    println!("\n{}", "Extracted sections".bold());
    for label in SectionLabel::ALL {
        let body = extractor.extract(&normalized, label);
        if body.is_empty() {
            println!("  {:<12} (absent)", label.to_string());
        } else {
            println!("  {:<12} {}", label.to_string(), truncate_text(&body, 120));
        }
    }

    Ok(())
}

/// Truncate text to a maximum character count, breaking at a word boundary.
fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let prefix: String = text.chars().take(max_length).collect();
    let cut = prefix.rfind(' ').unwrap_or(prefix.len());
    format!("{}...", &prefix[..cut])
}
