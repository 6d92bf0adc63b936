// ─────────────────────────────────────────────────────────────────────
// SCPN GW Curvature — Field Sampler
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Point sampling of the symbolic tensor field.
//!
//! One trilinear interpolator per tensor component, all over the same
//! three axes; components interpolate independently with no coupling.
//! Outside the grid domain every component reads as zero (absence of
//! field), so a query that is out of range on a single axis still
//! returns a defined, all-zero tensor.

use crate::field::SymbolicField;
use gw_math::trilinear::Trilinear;
use gw_types::error::GwResult;
use gw_types::tensor::Tensor3x3;
use ndarray::s;

/// Read-only sampler derived from a built [`SymbolicField`].
#[derive(Debug, Clone)]
pub struct FieldSampler {
    /// Row-major component interpolators, index = row * 3 + col.
    components: Vec<Trilinear>,
}

impl FieldSampler {
    /// Extract the nine per-component interpolators from the field.
    pub fn new(field: &SymbolicField) -> GwResult<Self> {
        let mut components = Vec::with_capacity(9);
        for r in 0..3 {
            for c in 0..3 {
                let values = field.data().slice(s![.., .., .., r, c]).to_owned();
                components.push(Trilinear::new(
                    field.lat_axis().to_vec(),
                    field.lon_axis().to_vec(),
                    field.depth_axis().to_vec(),
                    values,
                    0.0,
                )?);
            }
        }
        Ok(FieldSampler { components })
    }

    /// Sample the field tensor at (lat°, lon°, depth km).
    pub fn sample(&self, lat_deg: f64, lon_deg: f64, depth_km: f64) -> Tensor3x3 {
        let mut t = [[0.0; 3]; 3];
        for (idx, interp) in self.components.iter().enumerate() {
            t[idx / 3][idx % 3] = interp.eval(lat_deg, lon_deg, depth_km);
        }
        Tensor3x3(t)
    }
}
