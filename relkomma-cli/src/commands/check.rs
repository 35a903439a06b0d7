//! Check command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, SentenceReport, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use relkomma_core::{RelativeClauseCommaRule, Variant};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Input JSON files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Check for the comma after the relative clause instead
    #[arg(long)]
    pub after: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "RELKOMMA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: all available)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per match with the corrected sentence
    Text,
    /// JSON array of sentences with their matches
    Json,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting relative clause check");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let mut rule_section = cli_config.rule.clone();
        if self.after {
            rule_section.variant = Some(Variant::After);
        }
        let config = relkomma_core::Config::from_section(&rule_section)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        let rule = RelativeClauseCommaRule::new(config)?;
        log::info!("Rule: {} ({})", rule.id(), rule.description());

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to check", files.len());

        let pool = self.build_pool(cli_config.performance.worker_threads)?;
        let format = self.output_format(&cli_config)?;
        let mut formatter = self.create_formatter(format, cli_config.output.pretty_json)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut total_matches = 0;
        for file in &files {
            for report in check_file(&rule, &pool, file)? {
                total_matches += report.matches.len();
                formatter.format_sentence(&report)?;
            }
            progress.file_completed(&file.display().to_string());
        }

        formatter.finish()?;
        progress.finish();
        log::info!(
            "Found {} possible missing comma(s) in {} file(s)",
            total_matches,
            files.len()
        );

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }

    fn build_pool(&self, configured: usize) -> Result<rayon::ThreadPool> {
        let threads = self.threads.unwrap_or(configured);
        let mut builder = rayon::ThreadPoolBuilder::new();
        if threads > 0 {
            builder = builder.num_threads(threads);
        }
        let pool = builder
            .build()
            .context("Failed to build worker thread pool")?;
        log::debug!("Using {} worker thread(s)", pool.current_num_threads());
        Ok(pool)
    }

    /// Command line wins over the config file
    fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&config.output.format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.format
                ))
                .into()
            }),
        }
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        })
    }
}

/// Check every sentence of one file, keeping the input order
pub fn check_file(
    rule: &RelativeClauseCommaRule,
    pool: &rayon::ThreadPool,
    path: &Path,
) -> Result<Vec<SentenceReport>> {
    let file_name = path.display().to_string();
    let sentences = FileReader::read_sentences(path)?
        .into_iter()
        .enumerate()
        .map(|(index, input)| {
            input
                .into_sentence()
                .with_context(|| format!("{}: sentence {}", file_name, index + 1))
        })
        .collect::<Result<Vec<_>>>()?;
    log::debug!("{}: {} sentence(s)", file_name, sentences.len());

    let reports = pool.install(|| {
        sentences
            .par_iter()
            .enumerate()
            .map(|(index, (text, sentence))| SentenceReport {
                file: file_name.clone(),
                sentence: index + 1,
                text: text.clone(),
                matches: rule.check(sentence),
            })
            .collect()
    });

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use relkomma_core::Config;
    use std::fs;
    use tempfile::TempDir;

    const AUTO: &str = r#"[
        {"tokens": [
            {"text": "Das", "tags": ["ART:DEF:NOM:SIN:NEU"]},
            {"text": "Auto", "tags": ["SUB:NOM:SIN:NEU"]},
            {"text": "das", "tags": ["ART:DEF:AKK:SIN:NEU", "PRO:REL:AKK:SIN:NEU"]},
            {"text": "ich", "tags": ["PRO:PER:NOM:SIN:ALG"]},
            {"text": "kaufte", "tags": ["VER:1:SIN:PRT:SFT"]},
            {"text": "ist", "tags": ["VER:AUX:3:SIN:PRÄ"]},
            {"text": "rot", "tags": ["ADJ:PRD:GRU"]}
        ]},
        {"tokens": [{"text": "Ja", "tags": ["ADV:ASS"]}]}
    ]"#;

    fn args() -> CheckArgs {
        CheckArgs {
            input: Vec::new(),
            output: None,
            format: None,
            after: false,
            config: None,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_check_file_keeps_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("auto.json");
        fs::write(&path, AUTO).unwrap();

        let rule = RelativeClauseCommaRule::new(Config::default()).unwrap();
        let pool = rayon::ThreadPoolBuilder::new().num_threads(2).build().unwrap();
        let reports = check_file(&rule, &pool, &path).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].sentence, 1);
        assert_eq!(reports[0].matches.len(), 1);
        assert_eq!(reports[0].text, "Das Auto das ich kaufte ist rot");
        assert!(reports[1].matches.is_empty());
    }

    #[test]
    fn test_check_file_reports_bad_sentence() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, r#"[{"tokens": []}, {"tokens": [{"text": "x", "tags": [":"]}]}]"#)
            .unwrap();

        let rule = RelativeClauseCommaRule::new(Config::default()).unwrap();
        let pool = rayon::ThreadPoolBuilder::new().build().unwrap();
        let error = check_file(&rule, &pool, &path).unwrap_err();
        assert!(format!("{error:#}").contains("sentence 2"));
    }

    #[test]
    fn test_output_format_precedence() {
        let mut config = CliConfig::default();
        config.output.format = "json".to_string();
        assert_eq!(args().output_format(&config).unwrap(), OutputFormat::Json);

        let mut explicit = args();
        explicit.format = Some(OutputFormat::Text);
        assert_eq!(explicit.output_format(&config).unwrap(), OutputFormat::Text);

        config.output.format = "xml".to_string();
        assert!(args().output_format(&config).is_err());
    }

    #[test]
    fn test_thread_count() {
        let mut with_threads = args();
        with_threads.threads = Some(3);
        assert_eq!(with_threads.build_pool(0).unwrap().current_num_threads(), 3);
        assert_eq!(args().build_pool(2).unwrap().current_num_threads(), 2);
    }
}
