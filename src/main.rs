//! linkshield - URL phishing risk checker
//!
//! Thin presentation shell over the assessment engine: parses the command
//! line, runs one assessment, and renders the verdict and findings.

use anyhow::Context;
use clap::Parser;
use console::style;
use linkshield::{Engine, Settings, Verdict};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "linkshield")]
#[command(version)]
#[command(about = "Assess a URL for phishing characteristics", long_about = None)]
struct Cli {
    /// URL to assess (must start with http:// or https://)
    #[arg(value_name = "URL")]
    url: String,

    /// Emit the assessment as JSON
    #[arg(long)]
    json: bool,

    /// Path to a settings file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let settings = match &cli.config {
        Some(path) => Settings::load_from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::load_default().context("failed to load default settings")?,
    };

    let engine = Engine::new(&settings);
    let assessment = engine.assess(&cli.url).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
        return Ok(());
    }

    let verdict = match assessment.verdict {
        Verdict::Safe => style(assessment.verdict.to_string()).green().bold(),
        Verdict::Suspicious => style(assessment.verdict.to_string()).yellow().bold(),
        Verdict::Phishing => style(assessment.verdict.to_string()).red().bold(),
    };

    println!("{} (score: {})", verdict, assessment.score);
    for finding in &assessment.findings {
        println!("  - {}", finding);
    }

    if assessment.verdict.is_safe() {
        println!("\n{}", style("This URL looks safe to open.").green());
    } else {
        println!(
            "\n{}",
            style("Do not open this URL without further review.").red()
        );
    }

    Ok(())
}
