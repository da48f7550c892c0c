// SPDX-License-Identifier: PMPL-1.0-or-later
//! FinAccAI CLI - rule-based WCAG accessibility checker

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use finaccai::color::{color_contrast, parse_color};
use finaccai::config::{load_config, ScanConfig};
use finaccai::report::{generate_report, OutputFormat};
use finaccai::scanner::{self, ScanSummary};
use finaccai::ConformanceLevel;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Rule-based WCAG accessibility checker for HTML documents
#[derive(Parser)]
#[command(name = "finaccai")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a single HTML file
    Check {
        /// File to check
        file: PathBuf,

        #[command(flatten)]
        opts: ScanOpts,
    },

    /// Check every HTML file under a directory
    Scan {
        /// Directory to scan
        dir: PathBuf,

        #[command(flatten)]
        opts: ScanOpts,
    },

    /// Compute the contrast ratio of two hex colors
    Contrast {
        /// Text color, e.g. "#777"
        foreground: String,

        /// Background color, e.g. "#ffffff"
        background: String,

        /// WCAG conformance level
        #[arg(long, default_value = "aaa")]
        level: LevelArg,
    },
}

#[derive(Args)]
struct ScanOpts {
    /// WCAG conformance level (overrides the config file)
    #[arg(long)]
    level: Option<LevelArg>,

    /// Output format
    #[arg(long, default_value = "text")]
    format: FormatArg,

    /// Output file (stdout if not specified)
    #[arg(long)]
    output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

/// WCAG conformance level CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LevelArg {
    /// Level AA - standard
    Aa,
    /// Level AAA - enhanced
    Aaa,
}

impl From<LevelArg> for ConformanceLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Aa => ConformanceLevel::AA,
            LevelArg::Aaa => ConformanceLevel::AAA,
        }
    }
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// Standalone HTML page
    Html,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Html => OutputFormat::Html,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("finaccai=debug")
    } else {
        EnvFilter::new("finaccai=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(opts: &ScanOpts) -> anyhow::Result<ScanConfig> {
    let mut config = match opts.config {
        Some(ref path) => load_config(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ScanConfig::default(),
    };
    if let Some(level) = opts.level {
        config.level = level.into();
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file, opts } => {
            init_logging(opts.verbose);
            let config = resolve_config(&opts)?;
            let page = scanner::scan_file(&file, &config)
                .with_context(|| format!("checking {}", file.display()))?;
            let summary = ScanSummary::from(page);
            emit(&summary, &opts)?;

            if summary.has_failures() {
                std::process::exit(1);
            }
        }

        Commands::Scan { dir, opts } => {
            init_logging(opts.verbose);
            let config = resolve_config(&opts)?;
            let summary = scanner::scan_directory(&dir, &config)?;
            emit(&summary, &opts)?;

            if summary.has_failures() {
                std::process::exit(1);
            }
        }

        Commands::Contrast { foreground, background, level } => {
            let level = ConformanceLevel::from(level);
            let fg = parse_color(&foreground)
                .with_context(|| format!("not a hex color: {}", foreground))?;
            let bg = parse_color(&background)
                .with_context(|| format!("not a hex color: {}", background))?;

            let ratio = color_contrast(fg, bg);
            let required = level.min_contrast_ratio();
            let verdict = if ratio >= required { "PASS" } else { "FAIL" };
            println!(
                "Contrast ratio {:.2}:1 ({} Level needs {:.1}:1) {}",
                ratio, level, required, verdict
            );

            if ratio < required {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn emit(summary: &ScanSummary, opts: &ScanOpts) -> anyhow::Result<()> {
    let report = generate_report(summary, opts.format.into())?;
    write_output(&report, opts.output.as_deref())
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)
                .with_context(|| format!("writing report to {}", p.display()))?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
