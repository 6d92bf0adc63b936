// ─────────────────────────────────────────────────────────────────────
// SCPN GW Curvature — Cubic Spline
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Natural cubic spline over strictly increasing knots.
//!
//! Queries outside the knot range evaluate the first/last cubic segment
//! beyond its bracket, so the interpolant's trend continues instead of
//! clamping. Callers must not assume monotonicity in that region.

use gw_types::error::{GwError, GwResult};

/// Natural cubic spline through (x, y) knots.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Second derivatives at the knots; zero at both ends (natural BC).
    m: Vec<f64>,
}

impl CubicSpline {
    /// Build the spline. Requires `x.len() == y.len()`, at least two knots,
    /// and strictly increasing `x`. With exactly two knots the spline
    /// degenerates to the straight line through them.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> GwResult<Self> {
        if x.len() != y.len() {
            return Err(GwError::Data(format!(
                "knot count mismatch: {} abscissae vs {} ordinates",
                x.len(),
                y.len()
            )));
        }
        let n = x.len();
        if n < 2 {
            return Err(GwError::Data(format!(
                "cubic spline needs at least 2 knots, got {n}"
            )));
        }
        for i in 0..n - 1 {
            if x[i + 1] - x[i] <= 0.0 {
                return Err(GwError::Data(format!(
                    "knots must be strictly increasing: x[{}]={} followed by x[{}]={}",
                    i,
                    x[i],
                    i + 1,
                    x[i + 1]
                )));
            }
        }

        let m = solve_second_derivatives(&x, &y);
        Ok(CubicSpline { x, y, m })
    }

    /// Evaluate at `t`. Defined for every finite `t`.
    pub fn eval(&self, t: f64) -> f64 {
        let n = self.x.len();
        // Segment index; queries beyond either end reuse the end segment.
        let idx = self.x.partition_point(|&v| v <= t);
        let i = idx.saturating_sub(1).min(n - 2);

        let h = self.x[i + 1] - self.x[i];
        let a = (self.x[i + 1] - t) / h;
        let b = (t - self.x[i]) / h;
        a * self.y[i]
            + b * self.y[i + 1]
            + ((a * a * a - a) * self.m[i] + (b * b * b - b) * self.m[i + 1]) * h * h / 6.0
    }

    /// Knot range [min, max].
    pub fn range(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }
}

/// Solve the natural-spline tridiagonal system for the knot second
/// derivatives. The interior equations are
///   h₍ᵢ₋₁₎·mᵢ₋₁ + 2(h₍ᵢ₋₁₎+hᵢ)·mᵢ + hᵢ·mᵢ₊₁ = 6·(Δᵢ − Δᵢ₋₁)
/// with m₀ = mₙ₋₁ = 0; a single forward/backward sweep solves it.
fn solve_second_derivatives(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut m = vec![0.0; n];
    if n < 3 {
        return m;
    }

    let k = n - 2;
    let mut diag = vec![0.0; k];
    let mut upper = vec![0.0; k];
    let mut rhs = vec![0.0; k];
    for i in 0..k {
        let h0 = x[i + 1] - x[i];
        let h1 = x[i + 2] - x[i + 1];
        diag[i] = 2.0 * (h0 + h1);
        upper[i] = h1;
        rhs[i] = 6.0 * ((y[i + 2] - y[i + 1]) / h1 - (y[i + 1] - y[i]) / h0);
    }

    // Forward sweep; the sub-diagonal of row i equals upper[i-1].
    for i in 1..k {
        let w = upper[i - 1] / diag[i - 1];
        diag[i] -= w * upper[i - 1];
        rhs[i] -= w * rhs[i - 1];
    }

    // Back substitution into the interior of m.
    m[k] = rhs[k - 1] / diag[k - 1];
    for i in (0..k - 1).rev() {
        m[i + 1] = (rhs[i] - upper[i] * m[i + 2]) / diag[i];
    }
    m
}
