// ─────────────────────────────────────────────────────────────────────
// SCPN GW Curvature — PREM Density Profile
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Radial Earth density profile (PREM-style lookup).
//!
//! Loads a delimited density table (one header row, radius in meters and
//! density in kg/m³ as the first two columns), sorts it by ascending
//! radius, and interpolates with a cubic spline. Queries outside the
//! table range follow the spline's trend instead of clamping, so every
//! radius yields a finite density and no bounds error is ever raised.

use gw_math::spline::CubicSpline;
use gw_types::error::{GwError, GwResult};

/// Immutable radius→density interpolant. Radii in km, density in kg/m³.
#[derive(Debug, Clone)]
pub struct DensityProfile {
    spline: CubicSpline,
}

impl DensityProfile {
    /// Build from (radius_km, density) samples in any order. Fails with a
    /// `Data` error on fewer than 2 rows or zero-spaced adjacent radii
    /// after sorting.
    pub fn from_samples(mut samples: Vec<(f64, f64)>) -> GwResult<Self> {
        if samples.len() < 2 {
            return Err(GwError::Data(format!(
                "density table needs at least 2 rows, got {}",
                samples.len()
            )));
        }
        samples.sort_by(|a, b| a.0.total_cmp(&b.0));

        let radius: Vec<f64> = samples.iter().map(|s| s.0).collect();
        let density: Vec<f64> = samples.iter().map(|s| s.1).collect();
        let spline = CubicSpline::new(radius, density).map_err(|e| match e {
            GwError::Data(msg) => GwError::Data(format!("density table: {msg}")),
            other => other,
        })?;
        Ok(DensityProfile { spline })
    }

    /// Parse a delimited table: one header row, then
    /// `radius_in_meters,density_kg_per_m3[,...]` per line. Radius is
    /// converted to km. Blank lines are skipped.
    pub fn from_table(text: &str) -> GwResult<Self> {
        let mut samples = Vec::new();
        for (lineno, line) in text.lines().enumerate().skip(1) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut cols = line.split(',');
            let radius_m = parse_column(cols.next(), "radius", lineno)?;
            let density = parse_column(cols.next(), "density", lineno)?;
            samples.push((radius_m / 1000.0, density));
        }
        Self::from_samples(samples)
    }

    /// Load a density table from a file.
    pub fn from_file(path: &str) -> GwResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_table(&text)
    }

    /// Density at the given radius from the Earth's center (km). Finite
    /// for any finite input; extrapolated beyond the table's range.
    pub fn density_at(&self, radius_km: f64) -> f64 {
        self.spline.eval(radius_km)
    }

    /// Table radius range (km) covered without extrapolation.
    pub fn radius_range(&self) -> (f64, f64) {
        self.spline.range()
    }
}

fn parse_column(col: Option<&str>, what: &str, lineno: usize) -> GwResult<f64> {
    let raw = col
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| GwError::Data(format!("line {}: missing {what} column", lineno + 1)))?;
    raw.parse::<f64>().map_err(|_| {
        GwError::Data(format!(
            "line {}: cannot parse {what} value '{raw}'",
            lineno + 1
        ))
    })
}
