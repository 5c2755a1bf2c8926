//! Convert command implementation

use crate::config::{CliConfig, LanguageChoice, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::input::{resolve_inputs, FileReader, ResolvedInput};
use crate::output::{FileReport, FileStatus, JsonReporter, ReportFormatter, TextReporter};
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use smartquote_core::{Config, QuoteProcessor};
use std::io;
use std::path::{Path, PathBuf};

/// Arguments for converting files in place
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Files to convert in place (glob patterns are expanded)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<String>,

    /// Language of the quotes, overriding detection
    #[arg(short, long, value_enum)]
    pub language: Option<LanguageChoice>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report files that would change without writing them
    #[arg(long)]
    pub check: bool,

    /// Process files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel processing
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Status report format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Suppress success output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Effective settings after merging the config file with flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub language: LanguageChoice,
    pub max_restore_passes: usize,
    pub format: OutputFormat,
    pub parallel: bool,
    pub threads: Option<usize>,
}

/// Aggregated outcome of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub unchanged: usize,
    pub would_change: usize,
    pub failed: usize,
}

impl BatchSummary {
    fn record(&mut self, status: FileStatus) {
        match status {
            FileStatus::Converted => self.converted += 1,
            FileStatus::Unchanged => self.unchanged += 1,
            FileStatus::WouldChange => self.would_change += 1,
            FileStatus::Failed => self.failed += 1,
        }
    }

    /// No failures, and nothing left to convert in check mode
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.would_change == 0
    }
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<BatchSummary> {
        self.init_logging();

        log::info!("Starting quote conversion");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let settings = self.settings(&file_config);
        log::debug!("Settings: {:?}", settings);

        let config = Config::builder()
            .language_opt(settings.language.forced())
            .max_restore_passes(settings.max_restore_passes)
            .build()?;
        let processor = QuoteProcessor::with_config(config)?;

        let reports = self.run(&processor, &settings)?;

        let mut reporter: Box<dyn ReportFormatter> = match settings.format {
            OutputFormat::Text => Box::new(TextReporter::new(
                io::stdout().lock(),
                io::stderr().lock(),
                self.quiet,
            )),
            OutputFormat::Json => Box::new(JsonReporter::new(io::stdout().lock())),
        };

        let mut summary = BatchSummary::default();
        for report in &reports {
            summary.record(report.status);
            reporter.report(report)?;
        }
        reporter.finish()?;

        log::info!(
            "Finished: {} converted, {} unchanged, {} would change, {} failed",
            summary.converted,
            summary.unchanged,
            summary.would_change,
            summary.failed
        );

        Ok(summary)
    }

    /// Merge file configuration with command-line flags
    pub fn settings(&self, file_config: &CliConfig) -> Settings {
        let configured_threads = match file_config.performance.threads {
            0 => None,
            n => Some(n),
        };

        Settings {
            language: self.language.unwrap_or(file_config.conversion.language),
            max_restore_passes: file_config.conversion.max_restore_passes,
            format: self.format.unwrap_or(file_config.output.format),
            parallel: self.parallel || file_config.performance.parallel,
            threads: self.threads.or(configured_threads),
        }
    }

    fn run(&self, processor: &QuoteProcessor<'_>, settings: &Settings) -> Result<Vec<FileReport>> {
        let inputs = resolve_inputs(&self.files);

        let handle = |input: &ResolvedInput| match input {
            ResolvedInput::File(path) => convert_file(processor, path, self.check)
                .unwrap_or_else(|e| FileReport::failed(path.clone(), &e)),
            ResolvedInput::Failed { argument, error } => {
                FileReport::failed(argument.as_str(), &anyhow::anyhow!(error.to_string()))
            }
        };

        if !settings.parallel || inputs.len() < 2 {
            return Ok(inputs.iter().map(handle).collect());
        }

        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = settings.threads {
            anyhow::ensure!(threads > 0, "Thread count must be greater than 0");
            builder = builder.num_threads(threads);
        }
        let pool = builder.build().context("Failed to create thread pool")?;

        log::debug!(
            "Converting {} files on {} threads",
            inputs.len(),
            pool.current_num_threads()
        );
        Ok(pool.install(|| inputs.par_iter().map(handle).collect()))
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // a logger may already be installed when running in-process
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

/// Convert one file, writing it back when the text changed
pub fn convert_file(
    processor: &QuoteProcessor<'_>,
    path: &Path,
    check: bool,
) -> CliResult<FileReport> {
    let original = FileReader::read_text(path)?;
    let output = processor
        .process(&original)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to convert: {}", path.display()))?;

    let changed = output.text != original;
    let status = match (changed, check) {
        (false, _) => FileStatus::Unchanged,
        (true, true) => FileStatus::WouldChange,
        (true, false) => {
            FileReader::write_text(path, &output.text)?;
            FileStatus::Converted
        }
    };

    log::info!(
        "{}: {} via {:?}, {} of {} lines changed",
        path.display(),
        output.language.code(),
        output.source,
        output.stats.changed_lines,
        output.stats.total_lines
    );

    Ok(FileReport {
        path: path.to_path_buf(),
        status,
        language: Some(output.language.code()),
        changed_lines: output.stats.changed_lines,
        balanced: output.balanced,
        error: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(files: Vec<String>) -> ConvertArgs {
        ConvertArgs {
            files,
            language: None,
            config: None,
            check: false,
            parallel: false,
            threads: None,
            format: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_settings_defaults() {
        let settings = args(vec![]).settings(&CliConfig::default());
        assert_eq!(
            settings,
            Settings {
                language: LanguageChoice::Auto,
                max_restore_passes: 32,
                format: OutputFormat::Text,
                parallel: false,
                threads: None,
            }
        );
    }

    #[test]
    fn test_flags_override_config_file() {
        let file_config = CliConfig::from_toml(
            "[conversion]\nlanguage = \"de\"\n[output]\nformat = \"json\"\n[performance]\nthreads = 3",
        )
        .unwrap();

        let mut cli = args(vec![]);
        cli.language = Some(LanguageChoice::English);
        cli.threads = Some(1);

        let settings = cli.settings(&file_config);
        assert_eq!(settings.language, LanguageChoice::English);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.threads, Some(1));
    }

    #[test]
    fn test_convert_file_writes_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.md");
        fs::write(&path, "Er sagte \"ja\".").unwrap();

        let processor = QuoteProcessor::new().unwrap();
        let report = convert_file(&processor, &path, false).unwrap();

        assert_eq!(report.status, FileStatus::Converted);
        assert_eq!(report.language, Some("de"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Er sagte „ja“.");
    }

    #[test]
    fn test_convert_file_check_mode_leaves_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.md");
        fs::write(&path, "This is \"it\".").unwrap();

        let processor = QuoteProcessor::new().unwrap();
        let report = convert_file(&processor, &path, true).unwrap();

        assert_eq!(report.status, FileStatus::WouldChange);
        assert_eq!(fs::read_to_string(&path).unwrap(), "This is \"it\".");
    }

    #[test]
    fn test_convert_file_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plain.md");
        fs::write(&path, "Keine Zitate.").unwrap();

        let processor = QuoteProcessor::new().unwrap();
        let report = convert_file(&processor, &path, false).unwrap();
        assert_eq!(report.status, FileStatus::Unchanged);
    }

    #[test]
    fn test_convert_file_reports_core_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested.md");
        fs::write(&path, "Siehe [`a`](b) hier.").unwrap();

        let config = Config::builder().max_restore_passes(1).build().unwrap();
        let processor = QuoteProcessor::with_config(config).unwrap();
        let err = convert_file(&processor, &path, false).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ProcessingError(_))
        ));
        assert!(format!("{err:#}").contains("Processing error"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Siehe [`a`](b) hier.");
    }

    #[test]
    fn test_execute_continues_after_failure() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.md");
        fs::write(&good, "Das ist \"gut\".").unwrap();
        let missing = temp_dir.path().join("missing.md");

        let summary = args(vec![
            missing.to_string_lossy().to_string(),
            good.to_string_lossy().to_string(),
        ])
        .execute()
        .unwrap();

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.converted, 1);
        assert!(!summary.is_success());
        assert_eq!(fs::read_to_string(&good).unwrap(), "Das ist „gut“.");
    }

    #[test]
    fn test_execute_parallel() {
        let temp_dir = TempDir::new().unwrap();
        let mut files = Vec::new();
        for i in 0..5 {
            let path = temp_dir.path().join(format!("{i}.md"));
            fs::write(&path, format!("Das ist \"{i}\".")).unwrap();
            files.push(path.to_string_lossy().to_string());
        }

        let mut cli = args(files);
        cli.parallel = true;
        cli.threads = Some(2);
        let summary = cli.execute().unwrap();

        assert_eq!(summary.converted, 5);
        assert!(summary.is_success());
        for i in 0..5 {
            let content = fs::read_to_string(temp_dir.path().join(format!("{i}.md"))).unwrap();
            assert_eq!(content, format!("Das ist „{i}“."));
        }
    }

    #[test]
    fn test_zero_threads_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut files = Vec::new();
        for name in ["a.md", "b.md"] {
            let path = temp_dir.path().join(name);
            fs::write(&path, "x").unwrap();
            files.push(path.to_string_lossy().to_string());
        }

        let mut cli = args(files);
        cli.parallel = true;
        cli.threads = Some(0);
        let err = cli.execute().unwrap_err();
        assert!(err.to_string().contains("Thread count must be greater than 0"));
    }

    #[test]
    fn test_summary_success_rules() {
        let mut summary = BatchSummary::default();
        summary.record(FileStatus::Converted);
        summary.record(FileStatus::Unchanged);
        assert!(summary.is_success());

        summary.record(FileStatus::WouldChange);
        assert!(!summary.is_success());
    }
}
