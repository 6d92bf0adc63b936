// ─────────────────────────────────────────────────────────────────────
// SCPN GW Curvature — Symbolic Tensor Field
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Precomputed symbolic curvature field on a global (lat, lon, depth) grid.
//!
//! The construction is illustrative, not physically calibrated: a
//! depth-stepped "exclusion density" sets an isotropic diagonal, and a
//! sinusoidal latitude term adds an off-diagonal coupling that changes
//! sign across hemispheres. Built once, persisted as `.npy`, read-only
//! thereafter.

use gw_types::constants::ROT_COUPLING;
use gw_types::error::{GwError, GwResult};
use gw_types::tensor::Tensor3x3;
use ndarray::Array5;
use ndarray_npy::{read_npy, write_npy};
use std::path::Path;

/// Fixed latitude axis: -90..=90 in 1° steps (181 ticks).
pub fn default_lat_axis() -> Vec<f64> {
    (-90..=90).map(f64::from).collect()
}

/// Fixed longitude axis: -180..=180 in 1° steps (361 ticks).
pub fn default_lon_axis() -> Vec<f64> {
    (-180..=180).map(f64::from).collect()
}

/// Fixed depth axis in km, surface down to the core–mantle boundary.
pub fn default_depth_axis() -> Vec<f64> {
    vec![0.0, 50.0, 100.0, 200.0, 500.0, 1000.0, 2000.0, 2890.0]
}

/// Depth-stepped exclusion density: a discrete material-layer proxy with
/// tunable constants (crust, transition, lower mantle, near-core).
pub fn exclusion_density(depth_km: f64) -> f64 {
    if depth_km < 100.0 {
        1.0
    } else if depth_km < 500.0 {
        3.0
    } else if depth_km < 2000.0 {
        5.0
    } else {
        8.0
    }
}

/// The symbolic cell tensor: isotropic diagonal plus an antisymmetric
/// rotational coupling in the off-diagonals.
pub fn symbolic_tensor(rho: f64, rot: f64) -> Tensor3x3 {
    Tensor3x3([[rho, 0.0, rot], [0.0, rho, -rot], [rot, -rot, rho]])
}

/// Dense (lat × lon × depth × 3 × 3) tensor grid over rectilinear axes.
#[derive(Debug, Clone)]
pub struct SymbolicField {
    lat_axis: Vec<f64>,
    lon_axis: Vec<f64>,
    depth_axis: Vec<f64>,
    data: Array5<f64>,
}

impl SymbolicField {
    /// Build over the fixed global axes.
    pub fn build() -> Self {
        Self::build_over(default_lat_axis(), default_lon_axis(), default_depth_axis())
    }

    /// Build over caller-supplied rectilinear axes. Deterministic; the
    /// generation rule has no error paths.
    pub fn build_over(lat_axis: Vec<f64>, lon_axis: Vec<f64>, depth_axis: Vec<f64>) -> Self {
        let shape = (lat_axis.len(), lon_axis.len(), depth_axis.len(), 3, 3);
        let mut data = Array5::zeros(shape);

        for (i, &lat) in lat_axis.iter().enumerate() {
            let rot_base = lat.to_radians().sin() * ROT_COUPLING;
            for j in 0..lon_axis.len() {
                for (k, &depth) in depth_axis.iter().enumerate() {
                    let rho = exclusion_density(depth);
                    let cell = symbolic_tensor(rho, rot_base * rho);
                    for r in 0..3 {
                        for c in 0..3 {
                            data[[i, j, k, r, c]] = cell.get(r, c);
                        }
                    }
                }
            }
        }

        SymbolicField {
            lat_axis,
            lon_axis,
            depth_axis,
            data,
        }
    }

    /// The stored tensor at grid node (i, j, k).
    pub fn node(&self, i: usize, j: usize, k: usize) -> Tensor3x3 {
        let mut t = [[0.0; 3]; 3];
        for (r, row) in t.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = self.data[[i, j, k, r, c]];
            }
        }
        Tensor3x3(t)
    }

    pub fn lat_axis(&self) -> &[f64] {
        &self.lat_axis
    }

    pub fn lon_axis(&self) -> &[f64] {
        &self.lon_axis
    }

    pub fn depth_axis(&self) -> &[f64] {
        &self.depth_axis
    }

    pub fn data(&self) -> &Array5<f64> {
        &self.data
    }

    /// Persist the grid as a `.npy` artifact (f64, lossless round-trip).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> GwResult<()> {
        write_npy(path.as_ref(), &self.data)
            .map_err(|e| GwError::Npy(format!("write '{}': {e}", path.as_ref().display())))
    }

    /// Load a field persisted over the fixed global axes.
    pub fn load<P: AsRef<Path>>(path: P) -> GwResult<Self> {
        Self::load_over(
            path,
            default_lat_axis(),
            default_lon_axis(),
            default_depth_axis(),
        )
    }

    /// Load a field persisted over the given axes; the artifact's shape
    /// must match them exactly.
    pub fn load_over<P: AsRef<Path>>(
        path: P,
        lat_axis: Vec<f64>,
        lon_axis: Vec<f64>,
        depth_axis: Vec<f64>,
    ) -> GwResult<Self> {
        let data: Array5<f64> = read_npy(path.as_ref())
            .map_err(|e| GwError::Npy(format!("read '{}': {e}", path.as_ref().display())))?;
        let expected = (lat_axis.len(), lon_axis.len(), depth_axis.len(), 3, 3);
        if data.dim() != expected {
            return Err(GwError::Data(format!(
                "field artifact shape {:?} does not match expected {:?}",
                data.dim(),
                expected
            )));
        }
        Ok(SymbolicField {
            lat_axis,
            lon_axis,
            depth_axis,
            data,
        })
    }
}
