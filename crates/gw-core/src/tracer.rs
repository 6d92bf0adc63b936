// ─────────────────────────────────────────────────────────────────────
// SCPN GW Curvature — Path Tracer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Discretized accumulation of the symbolic tensor along a traced path.
//!
//! Two kernels share the walk. The radial (PREM) kernel starts on the
//! z-axis a fixed standoff above the mean radius, samples density by
//! radius from the Earth's center, and accumulates `ρ·I₃·|dz|` before a
//! final division by the step count. The field kernel starts at the
//! detector itself and steps the geodetic coordinates directly in mixed
//! deg/km units — the historical approximation, kept bit-faithful behind
//! the legacy mode — averaging the sampled tensors and recording every
//! traversed point.

use crate::prem::DensityProfile;
use crate::sampler::FieldSampler;
use crate::sky::{line_of_sight, Convention, HorizonTransform, SkyPosition};
use chrono::{DateTime, Utc};
use gw_types::constants::{EARTH_RADIUS_KM, LEGACY_PATH_LENGTH_KM, PREM_PATH_LENGTH_KM};
use gw_types::error::{GwError, GwResult};
use gw_types::geo::GeoPoint;
use gw_types::tensor::Tensor3x3;

/// Sampling kernel walked by [`integrate_path`].
pub enum PathKernel<'a> {
    /// Radius→density lookup; positions are km offsets from the Earth's
    /// center.
    Radial(&'a DensityProfile),
    /// Symbolic-field lookup; positions are (lat°, lon°, height km).
    Field(&'a FieldSampler),
}

/// The sequence of geodetic points a field-kernel walk visited, in step
/// order. Finite and consumed once; there is no way to restart it.
#[derive(Debug)]
pub struct PathTrace {
    points: std::vec::IntoIter<GeoPoint>,
}

impl Iterator for PathTrace {
    type Item = GeoPoint;

    fn next(&mut self) -> Option<GeoPoint> {
        self.points.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl ExactSizeIterator for PathTrace {}

/// Result of one path integration.
pub struct Integration {
    pub tensor: Tensor3x3,
    /// Present for the field kernel only.
    pub path: Option<PathTrace>,
}

/// Walk the segment from `origin` along `direction` for `path_length_km`
/// in `steps` equal increments, accumulating the kernel's samples.
///
/// Fails with a `Sampling` error when `steps == 0` or the path length is
/// non-positive; otherwise it cannot fail, since both kernels are total
/// over their inputs.
pub fn integrate_path(
    kernel: &PathKernel<'_>,
    origin: [f64; 3],
    direction: [f64; 3],
    steps: usize,
    path_length_km: f64,
) -> GwResult<Integration> {
    if steps == 0 {
        return Err(GwError::Sampling("step count must be positive".into()));
    }
    if !(path_length_km > 0.0) {
        return Err(GwError::Sampling(format!(
            "path length must be positive, got {path_length_km} km"
        )));
    }

    match kernel {
        PathKernel::Radial(profile) => {
            let dz = -path_length_km / steps as f64;
            let mut accum = Tensor3x3::zeros();
            for step in 0..steps {
                let s = step as f64 * dz;
                let pos = [
                    origin[0] + s * direction[0],
                    origin[1] + s * direction[1],
                    origin[2] + s * direction[2],
                ];
                let radius = (pos[0] * pos[0] + pos[1] * pos[1] + pos[2] * pos[2]).sqrt();
                accum = accum + Tensor3x3::scaled_identity(profile.density_at(radius) * dz.abs());
            }
            Ok(Integration {
                tensor: accum / steps as f64,
                path: None,
            })
        }
        PathKernel::Field(sampler) => {
            let mut accum = Tensor3x3::zeros();
            let mut points = Vec::with_capacity(steps);
            for step in 0..steps {
                let f = step as f64 / steps as f64;
                let lat = origin[0] + direction[0] * f * path_length_km;
                let lon = origin[1] + direction[1] * f * path_length_km;
                let vertical = origin[2] + direction[2] * f * path_length_km;
                let point = GeoPoint::new(lat, lon, vertical.min(0.0));
                accum = accum
                    + sampler.sample(point.lat_deg, point.lon_deg, point.depth_km())
                        / steps as f64;
                points.push(point);
            }
            Ok(Integration {
                tensor: accum,
                path: Some(PathTrace {
                    points: points.into_iter(),
                }),
            })
        }
    }
}

/// PREM-weighted trace for one detector: resolve the source direction,
/// start a fixed standoff above the mean radius on the z-axis, and
/// integrate density down through the planet.
pub fn trace_prem(
    sky: &SkyPosition,
    site: &GeoPoint,
    when: DateTime<Utc>,
    steps: usize,
    profile: &DensityProfile,
    transform: &dyn HorizonTransform,
) -> GwResult<Integration> {
    let horizon = transform.horizon(sky, site, when)?;
    let direction = line_of_sight(&horizon, Convention::Outward);
    let origin = [0.0, 0.0, EARTH_RADIUS_KM + PREM_PATH_LENGTH_KM];
    integrate_path(
        &PathKernel::Radial(profile),
        origin,
        direction,
        steps,
        PREM_PATH_LENGTH_KM,
    )
}

/// Legacy symbolic-field trace for one detector, stepping geodetic
/// coordinates from the detector along the inward direction.
pub fn trace_symbolic(
    sky: &SkyPosition,
    site: &GeoPoint,
    when: DateTime<Utc>,
    steps: usize,
    sampler: &FieldSampler,
    transform: &dyn HorizonTransform,
) -> GwResult<Integration> {
    let horizon = transform.horizon(sky, site, when)?;
    let direction = line_of_sight(&horizon, Convention::Inward);
    let origin = [site.lat_deg, site.lon_deg, site.height_km];
    integrate_path(
        &PathKernel::Field(sampler),
        origin,
        direction,
        steps,
        LEGACY_PATH_LENGTH_KM,
    )
}
