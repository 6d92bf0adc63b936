// ─────────────────────────────────────────────────────────────────────
// SCPN GW Curvature — Sky Resolution
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Line-of-sight resolution from a sky position.
//!
//! The equatorial→horizontal conversion sits behind [`HorizonTransform`]
//! with a fixed contract: (RA, Dec, site, UTC instant) → (azimuth,
//! altitude) in radians, azimuth measured from north through east. The
//! bundled [`SiderealTransform`] uses the GMST polynomial without
//! precession, nutation, or refraction terms; that keeps the transform
//! dependency-free and is accurate to a small fraction of a degree over
//! the observation epochs of interest.

use chrono::{DateTime, NaiveDateTime, Utc};
use gw_types::error::{GwError, GwResult};
use gw_types::geo::GeoPoint;

/// Equatorial sky position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPosition {
    pub ra_deg: f64,
    pub dec_deg: f64,
}

/// Horizontal coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizon {
    pub azimuth_rad: f64,
    pub altitude_rad: f64,
}

/// Direction-vector convention for the traced path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// East-north-up components of the source direction; used with an
    /// Earth-centered origin high above the surface.
    Outward,
    /// Negated variant pointing from the detector toward the planet;
    /// used with the detector's own geodetic position as origin.
    Inward,
}

/// Parse an ISO-8601 timestamp as UTC. Accepts RFC 3339 strings and the
/// bare `YYYY-MM-DDTHH:MM:SS[.fff]` form without an offset.
pub fn parse_utc(stamp: &str) -> GwResult<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(stamp) {
        return Ok(t.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|t| t.and_utc())
        .map_err(|e| GwError::Coordinate(format!("cannot parse timestamp '{stamp}': {e}")))
}

/// Equatorial→horizontal conversion service.
pub trait HorizonTransform {
    fn horizon(
        &self,
        sky: &SkyPosition,
        site: &GeoPoint,
        when: DateTime<Utc>,
    ) -> GwResult<Horizon>;
}

/// Greenwich-mean-sidereal-time based transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiderealTransform;

impl SiderealTransform {
    /// Julian date of a UTC instant.
    pub fn julian_date(when: DateTime<Utc>) -> f64 {
        let unix = when.timestamp() as f64 + f64::from(when.timestamp_subsec_nanos()) * 1e-9;
        unix / 86_400.0 + 2_440_587.5
    }

    /// Greenwich mean sidereal time in degrees, [0, 360).
    pub fn gmst_deg(when: DateTime<Utc>) -> f64 {
        let d = Self::julian_date(when) - 2_451_545.0;
        (280.460_618_37 + 360.985_647_366_29 * d).rem_euclid(360.0)
    }

    /// Local sidereal time in degrees for an east-positive longitude.
    pub fn local_sidereal_deg(when: DateTime<Utc>, lon_deg: f64) -> f64 {
        (Self::gmst_deg(when) + lon_deg).rem_euclid(360.0)
    }
}

impl HorizonTransform for SiderealTransform {
    fn horizon(
        &self,
        sky: &SkyPosition,
        site: &GeoPoint,
        when: DateTime<Utc>,
    ) -> GwResult<Horizon> {
        let lst_deg = Self::local_sidereal_deg(when, site.lon_deg);
        let hour_angle = (lst_deg - sky.ra_deg).to_radians();
        let lat = site.lat_deg.to_radians();
        let dec = sky.dec_deg.to_radians();

        let sin_alt =
            (lat.sin() * dec.sin() + lat.cos() * dec.cos() * hour_angle.cos()).clamp(-1.0, 1.0);
        let altitude = sin_alt.asin();
        let azimuth = f64::atan2(
            -dec.cos() * hour_angle.sin(),
            dec.sin() * lat.cos() - dec.cos() * lat.sin() * hour_angle.cos(),
        )
        .rem_euclid(std::f64::consts::TAU);

        if !altitude.is_finite() || !azimuth.is_finite() {
            return Err(GwError::Coordinate(format!(
                "horizontal transform produced a non-finite result for \
                 ra={}, dec={}, site=({}, {})",
                sky.ra_deg, sky.dec_deg, site.lat_deg, site.lon_deg
            )));
        }
        Ok(Horizon {
            azimuth_rad: azimuth,
            altitude_rad: altitude,
        })
    }
}

/// Unit direction vector for a horizon position under the given
/// convention, in the local east-north-up basis.
pub fn line_of_sight(horizon: &Horizon, convention: Convention) -> [f64; 3] {
    let (az, alt) = (horizon.azimuth_rad, horizon.altitude_rad);
    let mut v = [
        alt.cos() * az.sin(),
        alt.cos() * az.cos(),
        alt.sin(),
    ];
    if convention == Convention::Inward {
        for c in &mut v {
            *c = -*c;
        }
    }
    let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    [v[0] / norm, v[1] / norm, v[2] / norm]
}
