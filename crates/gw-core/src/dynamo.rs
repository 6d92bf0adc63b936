// ─────────────────────────────────────────────────────────────────────
// SCPN GW Curvature — Dynamo Weighting
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Optional post-integration weighting of the accumulated tensor.
//!
//! The dynamo strategy applies a synthetic sinusoidal scalar in the
//! detector latitude, longitude, and UTC time of day. Like the field
//! itself it is illustrative, not geophysics.

use chrono::{DateTime, Timelike, Utc};
use gw_types::config::DynamoParams;
use gw_types::geo::GeoPoint;
use gw_types::tensor::Tensor3x3;
use std::f64::consts::TAU;

/// Post-integration weighting strategy.
#[derive(Debug, Clone, Copy)]
pub enum Weighting {
    /// Leave the integrated tensor untouched.
    Identity,
    /// Multiply by the dynamo modulation factor.
    Dynamo(DynamoParams),
}

impl Weighting {
    /// Scalar modulation factor for a site at a UTC instant.
    pub fn factor(&self, site: &GeoPoint, when: DateTime<Utc>) -> f64 {
        match self {
            Weighting::Identity => 1.0,
            Weighting::Dynamo(params) => {
                let lat = site.lat_deg.to_radians();
                let lon = site.lon_deg.to_radians();
                let seconds = f64::from(when.num_seconds_from_midnight())
                    + f64::from(when.nanosecond()) * 1e-9;
                let phase = TAU * seconds / 86_400.0;
                1.0 + params.amplitude * lat.sin() * (lon + phase).cos()
            }
        }
    }

    /// Apply the factor to an integrated tensor.
    pub fn apply(&self, tensor: Tensor3x3, site: &GeoPoint, when: DateTime<Utc>) -> Tensor3x3 {
        match self {
            Weighting::Identity => tensor,
            _ => tensor * self.factor(site, when),
        }
    }
}
