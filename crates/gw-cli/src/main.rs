// ─────────────────────────────────────────────────────────────────────
// SCPN GW Curvature — Comparison CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Command-line driver: trace an event across the detector network,
//! print the rounded tensors and residuals, persist the artifacts.

use anyhow::{bail, Context, Result};
use clap::Parser;
use gw_core::compare::{compare_event, Detector, EventKernel, GwEvent};
use gw_core::dynamo::Weighting;
use gw_core::field::SymbolicField;
use gw_core::prem::DensityProfile;
use gw_core::report::write_artifacts;
use gw_core::sampler::FieldSampler;
use gw_core::sky::{parse_utc, SiderealTransform, SkyPosition};
use gw_types::config::{ComparisonConfig, Mode};
use gw_types::constants::{RESIDUAL_REPORT_DECIMALS, TENSOR_REPORT_DECIMALS};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gw-compare",
    version,
    about = "Compare symbolic path-curvature tensors across GW detectors"
)]
struct Cli {
    /// Right ascension of the source (degrees)
    #[arg(long, allow_negative_numbers = true)]
    ra: f64,

    /// Declination of the source (degrees)
    #[arg(long, allow_negative_numbers = true)]
    dec: f64,

    /// UTC timestamp of the event (ISO-8601)
    #[arg(long)]
    timestamp: String,

    /// Output file prefix (may include a directory)
    #[arg(long)]
    prefix: String,

    /// Walk the precomputed symbolic field instead of PREM weighting
    #[arg(long)]
    legacy_symbolic: bool,

    /// Apply the dynamo post-weighting stage
    #[arg(long)]
    dynamo: bool,

    /// JSON configuration overriding the default detector network
    #[arg(long)]
    config: Option<PathBuf>,

    /// Density table (delimited text, radius in meters)
    #[arg(long, default_value = "data/prem_coarse.csv")]
    prem_table: PathBuf,

    /// Symbolic field artifact; built and saved here when missing
    #[arg(long, default_value = "symbolic_curvature_tensor.npy")]
    field: PathBuf,

    /// Step-count override for the path integration
    #[arg(long)]
    steps: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ComparisonConfig::from_file(&path.to_string_lossy())
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => ComparisonConfig::default(),
    };

    let mode = if cli.legacy_symbolic {
        Mode::LegacySymbolic
    } else {
        config.mode
    };
    let steps = cli.steps.or(config.steps);

    let event = GwEvent {
        sky: SkyPosition {
            ra_deg: cli.ra,
            dec_deg: cli.dec,
        },
        when: parse_utc(&cli.timestamp)?,
    };

    let kernel = match mode {
        Mode::Prem => {
            let profile = DensityProfile::from_file(&cli.prem_table.to_string_lossy())
                .with_context(|| format!("loading density table {}", cli.prem_table.display()))?;
            EventKernel::Prem(profile)
        }
        Mode::LegacySymbolic => {
            let field = if cli.field.exists() {
                SymbolicField::load(&cli.field)
                    .with_context(|| format!("loading field artifact {}", cli.field.display()))?
            } else {
                println!("Building symbolic field (first run)...");
                let field = SymbolicField::build();
                field
                    .save(&cli.field)
                    .with_context(|| format!("saving field artifact {}", cli.field.display()))?;
                field
            };
            EventKernel::Symbolic(FieldSampler::new(&field)?)
        }
    };

    let weighting = if cli.dynamo {
        Weighting::Dynamo(config.dynamo)
    } else {
        Weighting::Identity
    };

    let detectors: Vec<Detector> = config
        .detectors
        .iter()
        .map(|d| Detector {
            name: d.name.clone(),
            site: d.site(),
        })
        .collect();

    println!("\nComputing symbolic curvature tensors for {}...", cli.prefix);

    let report = compare_event(
        &event,
        &detectors,
        &kernel,
        &weighting,
        &SiderealTransform,
        steps,
    );

    for (name, tensor) in &report.tensors {
        println!("\n→ {name}");
        print!("{}", tensor.rounded(TENSOR_REPORT_DECIMALS));
    }
    for (name, err) in &report.failures {
        eprintln!("\n✗ {name}: {err}");
    }
    for res in &report.residuals {
        println!("\n∆ {} – {}:", res.first, res.second);
        print!("{}", res.delta.rounded(RESIDUAL_REPORT_DECIMALS));
    }

    if report.tensors.is_empty() {
        bail!("no detector produced a tensor");
    }

    write_artifacts(&cli.prefix, &report).context("writing output artifacts")?;
    Ok(())
}
