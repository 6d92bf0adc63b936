// ─────────────────────────────────────────────────────────────────────
// SCPN GW Curvature — Tensor
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dense 3×3 tensor of f64.
//!
//! Carries the accumulated symbolic curvature along a path. Not required
//! to be symmetric; the only defined algebra is addition, subtraction,
//! negation, and scalar multiplication/division.

use crate::error::{GwError, GwResult};
use ndarray::Array2;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 3×3 tensor, row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tensor3x3(pub [[f64; 3]; 3]);

impl Tensor3x3 {
    /// The zero tensor.
    pub fn zeros() -> Self {
        Tensor3x3([[0.0; 3]; 3])
    }

    /// The identity tensor I₃.
    pub fn identity() -> Self {
        Self::scaled_identity(1.0)
    }

    /// s · I₃.
    pub fn scaled_identity(s: f64) -> Self {
        let mut t = [[0.0; 3]; 3];
        for (i, row) in t.iter_mut().enumerate() {
            row[i] = s;
        }
        Tensor3x3(t)
    }

    /// Component accessor, row then column.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.0[row][col]
    }

    /// Largest absolute component.
    pub fn max_abs(&self) -> f64 {
        self.0
            .iter()
            .flatten()
            .fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    /// True when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().flatten().all(|v| v.is_finite())
    }

    /// Component-wise rounding to `decimals` decimal places. Reporting
    /// precision only; the unrounded tensor is the mathematical result.
    pub fn rounded(&self, decimals: i32) -> Self {
        let scale = 10f64.powi(decimals);
        self.map(|v| (v * scale).round() / scale)
    }

    /// Apply `f` to every component.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        let mut out = [[0.0; 3]; 3];
        for r in 0..3 {
            for c in 0..3 {
                out[r][c] = f(self.0[r][c]);
            }
        }
        Tensor3x3(out)
    }

    /// Copy into a freshly allocated (3, 3) ndarray, for persistence.
    pub fn to_array2(&self) -> Array2<f64> {
        Array2::from_shape_fn((3, 3), |(r, c)| self.0[r][c])
    }

    /// Rebuild from a (3, 3) ndarray.
    pub fn from_array2(a: &Array2<f64>) -> GwResult<Self> {
        if a.dim() != (3, 3) {
            return Err(GwError::Npy(format!(
                "expected a (3, 3) array, got {:?}",
                a.dim()
            )));
        }
        let mut t = [[0.0; 3]; 3];
        for r in 0..3 {
            for c in 0..3 {
                t[r][c] = a[[r, c]];
            }
        }
        Ok(Tensor3x3(t))
    }
}

impl Add for Tensor3x3 {
    type Output = Tensor3x3;

    fn add(self, rhs: Tensor3x3) -> Tensor3x3 {
        let mut out = self.0;
        for r in 0..3 {
            for c in 0..3 {
                out[r][c] += rhs.0[r][c];
            }
        }
        Tensor3x3(out)
    }
}

impl Sub for Tensor3x3 {
    type Output = Tensor3x3;

    fn sub(self, rhs: Tensor3x3) -> Tensor3x3 {
        let mut out = self.0;
        for r in 0..3 {
            for c in 0..3 {
                out[r][c] -= rhs.0[r][c];
            }
        }
        Tensor3x3(out)
    }
}

impl Neg for Tensor3x3 {
    type Output = Tensor3x3;

    fn neg(self) -> Tensor3x3 {
        self.map(|v| -v)
    }
}

impl Mul<f64> for Tensor3x3 {
    type Output = Tensor3x3;

    fn mul(self, s: f64) -> Tensor3x3 {
        self.map(|v| v * s)
    }
}

impl Div<f64> for Tensor3x3 {
    type Output = Tensor3x3;

    fn div(self, s: f64) -> Tensor3x3 {
        self.map(|v| v / s)
    }
}

impl fmt::Display for Tensor3x3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{}{:>14.6e} {:>14.6e} {:>14.6e}{}",
                if i == 0 { "[" } else { " " },
                row[0],
                row[1],
                row[2],
                if i == 2 { "]" } else { "" }
            )?;
        }
        Ok(())
    }
}
