// ─────────────────────────────────────────────────────────────────────
// SCPN GW Curvature — Geodetic Point
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Geodetic position on (or in) the Earth.

use serde::{Deserialize, Serialize};

/// A geodetic point: latitude/longitude in degrees, signed height in km.
///
/// `height_km` is elevation above the surface; negative values are below
/// it. Longitude is wrapped into [-180, 180) at construction so that field
/// lookups are stable; latitude is stored as given (out-of-range latitudes
/// simply fall outside the field domain and sample as zero).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub height_km: f64,
}

impl GeoPoint {
    pub fn new(lat_deg: f64, lon_deg: f64, height_km: f64) -> Self {
        GeoPoint {
            lat_deg,
            lon_deg: wrap_longitude(lon_deg),
            height_km,
        }
    }

    /// Below-surface depth in km: negative height clamped at zero, so a
    /// point above the surface has depth 0, never a negative depth.
    pub fn depth_km(&self) -> f64 {
        (-self.height_km).max(0.0)
    }
}

/// Wrap a longitude into [-180, 180).
pub fn wrap_longitude(lon_deg: f64) -> f64 {
    let wrapped = (lon_deg + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid of a negative epsilon can land exactly on 360.0
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longitude_wrapping() {
        assert_eq!(GeoPoint::new(0.0, 190.0, 0.0).lon_deg, -170.0);
        assert_eq!(GeoPoint::new(0.0, -190.0, 0.0).lon_deg, 170.0);
        assert_eq!(GeoPoint::new(0.0, 360.0, 0.0).lon_deg, 0.0);
        assert_eq!(GeoPoint::new(0.0, -180.0, 0.0).lon_deg, -180.0);
        assert_eq!(GeoPoint::new(0.0, 10.5, 0.0).lon_deg, 10.5);
    }

    #[test]
    fn test_depth_clamps_above_surface() {
        assert_eq!(GeoPoint::new(0.0, 0.0, 2.5).depth_km(), 0.0);
        assert_eq!(GeoPoint::new(0.0, 0.0, -35.0).depth_km(), 35.0);
        assert_eq!(GeoPoint::new(0.0, 0.0, 0.0).depth_km(), 0.0);
    }

    #[test]
    fn test_latitude_not_wrapped() {
        // Legacy tracing can step latitude out of range; the point keeps it.
        assert_eq!(GeoPoint::new(104.2, 0.0, 0.0).lat_deg, 104.2);
    }
}
