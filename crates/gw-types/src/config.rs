// ─────────────────────────────────────────────────────────────────────
// SCPN GW Curvature — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Comparison-run configuration.
//!
//! Built once at process start and passed by reference into the engine;
//! there are no ambient globals. The default detector network is the
//! LIGO/Virgo triple used throughout the reference datasets.

use crate::error::GwResult;
use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// Interpolation-mode selection for a comparison run.
///
/// `Prem` weights the path by the radial Earth density profile and is the
/// default. `LegacySymbolic` walks the precomputed symbolic tensor field
/// with the historical mixed deg/km stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Prem,
    LegacySymbolic,
}

/// One detector site, keyed by a unique name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    pub name: String,
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub height_km: f64,
}

impl DetectorConfig {
    pub fn site(&self) -> GeoPoint {
        GeoPoint::new(self.lat_deg, self.lon_deg, self.height_km)
    }
}

/// Parameters of the optional dynamo post-weighting stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DynamoParams {
    /// Relative amplitude of the sinusoidal modulation (default: 0.05).
    #[serde(default = "default_dynamo_amplitude")]
    pub amplitude: f64,
}

fn default_dynamo_amplitude() -> f64 {
    0.05
}

impl Default for DynamoParams {
    fn default() -> Self {
        DynamoParams {
            amplitude: default_dynamo_amplitude(),
        }
    }
}

/// Top-level configuration for a multi-detector comparison run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Detector network, in declaration order. Order fixes both the
    /// iteration order and the orientation of pairwise residuals.
    #[serde(default = "default_detectors")]
    pub detectors: Vec<DetectorConfig>,

    #[serde(default)]
    pub mode: Mode,

    /// Step-count override; when absent, the mode's default applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,

    #[serde(default)]
    pub dynamo: DynamoParams,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        ComparisonConfig {
            detectors: default_detectors(),
            mode: Mode::default(),
            steps: None,
            dynamo: DynamoParams::default(),
        }
    }
}

fn default_detectors() -> Vec<DetectorConfig> {
    vec![
        DetectorConfig {
            name: "Hanford".into(),
            lat_deg: 46.455,
            lon_deg: -119.408,
            height_km: 0.142554,
        },
        DetectorConfig {
            name: "Livingston".into(),
            lat_deg: 30.563,
            lon_deg: -90.774,
            height_km: -0.006574,
        },
        DetectorConfig {
            name: "Virgo".into(),
            lat_deg: 43.63,
            lon_deg: 10.5,
            height_km: 0.051884,
        },
    ]
}

impl ComparisonConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> GwResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
