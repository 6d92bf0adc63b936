// ─────────────────────────────────────────────────────────────────────
// SCPN GW Curvature — Trilinear Interpolation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Trilinear interpolation on a rectilinear (non-uniform) grid.
//!
//! A query outside any axis bound returns the fill value, not an error
//! and not a clamped sample. At a grid node the interpolation reduces to
//! the stored value exactly.

use gw_types::error::{GwError, GwResult};
use ndarray::Array3;

/// Rectilinear trilinear interpolator with an out-of-domain fill value.
#[derive(Debug, Clone)]
pub struct Trilinear {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    values: Array3<f64>,
    fill: f64,
}

impl Trilinear {
    /// Build an interpolator over `values[[i, j, k]]` sampled at
    /// `(x[i], y[j], z[k])`. Each axis needs at least two strictly
    /// increasing ticks, and the value grid must match the axis lengths.
    pub fn new(
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<f64>,
        values: Array3<f64>,
        fill: f64,
    ) -> GwResult<Self> {
        for (name, axis) in [("x", &x), ("y", &y), ("z", &z)] {
            if axis.len() < 2 {
                return Err(GwError::Data(format!(
                    "axis {name} needs at least 2 ticks, got {}",
                    axis.len()
                )));
            }
            if axis.windows(2).any(|w| w[1] - w[0] <= 0.0) {
                return Err(GwError::Data(format!(
                    "axis {name} must be strictly increasing"
                )));
            }
        }
        if values.dim() != (x.len(), y.len(), z.len()) {
            return Err(GwError::Data(format!(
                "value grid shape {:?} does not match axes ({}, {}, {})",
                values.dim(),
                x.len(),
                y.len(),
                z.len()
            )));
        }
        Ok(Trilinear {
            x,
            y,
            z,
            values,
            fill,
        })
    }

    /// Interpolate at (px, py, pz); fill value outside the domain.
    pub fn eval(&self, px: f64, py: f64, pz: f64) -> f64 {
        let (Some((i, tx)), Some((j, ty)), Some((k, tz))) = (
            bracket(&self.x, px),
            bracket(&self.y, py),
            bracket(&self.z, pz),
        ) else {
            return self.fill;
        };

        let v = &self.values;
        let c00 = v[[i, j, k]] * (1.0 - tx) + v[[i + 1, j, k]] * tx;
        let c10 = v[[i, j + 1, k]] * (1.0 - tx) + v[[i + 1, j + 1, k]] * tx;
        let c01 = v[[i, j, k + 1]] * (1.0 - tx) + v[[i + 1, j, k + 1]] * tx;
        let c11 = v[[i, j + 1, k + 1]] * (1.0 - tx) + v[[i + 1, j + 1, k + 1]] * tx;

        let c0 = c00 * (1.0 - ty) + c10 * ty;
        let c1 = c01 * (1.0 - ty) + c11 * ty;

        c0 * (1.0 - tz) + c1 * tz
    }
}

/// Locate `p` on a strictly increasing axis. Returns the lower cell index
/// and the fractional position in [0, 1], or None when `p` lies outside
/// the axis bounds (NaN compares outside).
fn bracket(axis: &[f64], p: f64) -> Option<(usize, f64)> {
    let n = axis.len();
    if !(p >= axis[0] && p <= axis[n - 1]) {
        return None;
    }
    let idx = axis.partition_point(|&v| v <= p);
    // p == max lands past the last cell; reuse it with t = 1.
    let i = idx.saturating_sub(1).min(n - 2);
    let t = (p - axis[i]) / (axis[i + 1] - axis[i]);
    Some((i, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_interp() -> Trilinear {
        // f(x, y, z) = x + 10y + 100z on non-uniform axes
        let x = vec![0.0, 1.0, 3.0];
        let y = vec![-2.0, 0.0, 2.0];
        let z = vec![0.0, 50.0, 100.0, 200.0];
        let values = Array3::from_shape_fn((3, 3, 4), |(i, j, k)| {
            x[i] + 10.0 * y[j] + 100.0 * z[k]
        });
        Trilinear::new(x, y, z, values, 0.0).unwrap()
    }

    #[test]
    fn test_exact_at_nodes() {
        let interp = sample_interp();
        assert!((interp.eval(3.0, 2.0, 200.0) - (3.0 + 20.0 + 20000.0)).abs() < 1e-10);
        assert!((interp.eval(0.0, -2.0, 0.0) - (-20.0)).abs() < 1e-10);
        assert!((interp.eval(1.0, 0.0, 50.0) - 5001.0).abs() < 1e-10);
    }

    #[test]
    fn test_linear_field_exact_between_nodes() {
        let interp = sample_interp();
        let (px, py, pz) = (2.2, 1.3, 137.0);
        let expected = px + 10.0 * py + 100.0 * pz;
        assert!(
            (interp.eval(px, py, pz) - expected).abs() < 1e-9,
            "trilinear must be exact for a trilinear field"
        );
    }

    #[test]
    fn test_fill_outside_any_axis() {
        let interp = sample_interp();
        assert_eq!(interp.eval(-0.1, 0.0, 50.0), 0.0);
        assert_eq!(interp.eval(1.0, 2.1, 50.0), 0.0);
        assert_eq!(interp.eval(1.0, 0.0, 200.5), 0.0);
        assert_eq!(interp.eval(f64::NAN, 0.0, 50.0), 0.0);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let bad = Trilinear::new(
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            Array3::zeros((2, 2, 3)),
            0.0,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_decreasing_axis_rejected() {
        let bad = Trilinear::new(
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            Array3::zeros((2, 2, 2)),
            0.0,
        );
        assert!(bad.is_err());
    }
}
