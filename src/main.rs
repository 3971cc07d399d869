//! PRIME CVD Risk Calculator
//!
//! Non-interactive entry point: reads a JSON-encoded clinical input record,
//! computes the 10-year CVD risk, and optionally writes the report document
//! to a date-stamped file.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use primecvd::adapters::fs_assets::FsAssets;
use primecvd::adapters::text::TextRenderer;
use primecvd::application::report_filename;
use primecvd::ports::AssetSource;
use primecvd::{AssessmentService, ClinicalInput};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (input_path, report_dir) = parse_args()?;

    let input = read_input(&input_path)
        .with_context(|| format!("Failed to read clinical input from {input_path}"))?;

    // Branding is best-effort; a missing logo only logs a warning.
    if FsAssets::new().load_logo().is_some() {
        tracing::debug!("Logo loaded");
    }

    let mut service = AssessmentService::new(Arc::new(TextRenderer::new()));
    let assessment = service
        .assess(&input)
        .context("Risk assessment rejected the input")?;

    println!(
        "10-Year CVD Risk: {:.1}% ({})",
        assessment.risk_percent, assessment.tier
    );
    println!("{}", assessment.tier.interpretation());

    if let Some(dir) = report_dir {
        let bytes = service
            .generate_report(&input, &assessment)
            .context("Failed to render report")?;
        let path = dir.join(report_filename(chrono::Utc::now().date_naive()));
        std::fs::write(&path, bytes)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

/// Parse `primecvd <input.json | -> [--report <dir>]`.
fn parse_args() -> Result<(String, Option<PathBuf>)> {
    let mut args = std::env::args().skip(1);
    let input_path = match args.next() {
        Some(p) => p,
        None => bail!("Usage: primecvd <input.json | -> [--report <dir>]"),
    };

    let report_dir = match args.next().as_deref() {
        Some("--report") => {
            let dir = args
                .next()
                .context("--report requires an output directory")?;
            Some(PathBuf::from(dir))
        }
        Some(other) => bail!("Unknown argument: {other}"),
        None => None,
    };

    Ok((input_path, report_dir))
}

/// Read and deserialize the clinical input ("-" reads stdin).
fn read_input(path: &str) -> Result<ClinicalInput> {
    let raw = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    serde_json::from_str(&raw).context("Invalid clinical input JSON")
}
