// ─────────────────────────────────────────────────────────────────────
// SCPN GW Curvature — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Mean Earth radius (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Depth of the core–mantle boundary (km); bottom of the field depth axis.
pub const CMB_DEPTH_KM: f64 = 2890.0;

/// Segment length for PREM-weighted tracing (km). The path starts this far
/// above the mean radius on the z-axis and descends through the planet.
pub const PREM_PATH_LENGTH_KM: f64 = 26000.0;

/// Default step count for PREM-weighted tracing.
pub const PREM_STEPS: usize = 100;

/// Segment length for legacy symbolic-field tracing (mixed deg/km units).
pub const LEGACY_PATH_LENGTH_KM: f64 = 10000.0;

/// Default step count for legacy symbolic-field tracing.
pub const LEGACY_STEPS: usize = 200;

/// Coupling strength of the latitude-dependent rotational term in the
/// symbolic tensor construction.
pub const ROT_COUPLING: f64 = 0.1;

/// Decimal precision for reported per-detector tensors.
pub const TENSOR_REPORT_DECIMALS: i32 = 6;

/// Decimal precision for reported/persisted residual tensors.
pub const RESIDUAL_REPORT_DECIMALS: i32 = 8;
