// ─────────────────────────────────────────────────────────────────────
// SCPN GW Curvature — Property-Based Tests (proptest) for gw-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for gw-math using proptest.
//!
//! Covers: cubic spline interpolation invariants, trilinear bounds
//! behavior and node identity.

use gw_math::spline::CubicSpline;
use gw_math::trilinear::Trilinear;
use ndarray::Array3;
use proptest::prelude::*;

// ── Cubic Spline Properties ──────────────────────────────────────────

proptest! {
    /// The spline interpolates every knot it was built from.
    #[test]
    fn spline_hits_knots(
        n in 2usize..20,
        seed in 0.0f64..100.0,
    ) {
        let x: Vec<f64> = (0..n).map(|i| i as f64 * 1.5).collect();
        let y: Vec<f64> = (0..n).map(|i| ((i as f64) + seed).sin() * 10.0).collect();
        let s = CubicSpline::new(x.clone(), y.clone()).unwrap();

        for (xi, yi) in x.iter().zip(y.iter()) {
            prop_assert!((s.eval(*xi) - yi).abs() < 1e-8);
        }
    }

    /// Affine data is reproduced exactly everywhere, including outside
    /// the knot range.
    #[test]
    fn spline_reproduces_affine(
        slope in -10.0f64..10.0,
        intercept in -100.0f64..100.0,
        t in -50.0f64..50.0,
    ) {
        let x: Vec<f64> = (0..6).map(|i| i as f64 * 2.0).collect();
        let y: Vec<f64> = x.iter().map(|v| slope * v + intercept).collect();
        let s = CubicSpline::new(x, y).unwrap();

        let expected = slope * t + intercept;
        prop_assert!(
            (s.eval(t) - expected).abs() < 1e-6 * (1.0 + expected.abs()),
            "eval({}) = {}, expected {}", t, s.eval(t), expected
        );
    }

    /// Output is finite for any finite query.
    #[test]
    fn spline_finite_output(t in -1e4f64..1e4) {
        let s = CubicSpline::new(
            vec![0.0, 1.0, 4.0, 9.0, 16.0],
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
        ).unwrap();
        prop_assert!(s.eval(t).is_finite());
    }
}

// ── Trilinear Properties ─────────────────────────────────────────────

fn constant_grid(c: f64) -> Trilinear {
    Trilinear::new(
        vec![0.0, 1.0, 2.0],
        vec![0.0, 2.0, 5.0],
        vec![0.0, 10.0],
        Array3::from_elem((3, 3, 2), c),
        0.0,
    )
    .unwrap()
}

proptest! {
    /// Inside the domain a constant field interpolates to the constant;
    /// outside it falls back to the fill value.
    #[test]
    fn trilinear_constant_inside_fill_outside(
        c in -1e3f64..1e3,
        px in -1.0f64..3.0,
        py in -1.0f64..6.0,
        pz in -5.0f64..15.0,
    ) {
        let interp = constant_grid(c);
        let inside = (0.0..=2.0).contains(&px)
            && (0.0..=5.0).contains(&py)
            && (0.0..=10.0).contains(&pz);

        let v = interp.eval(px, py, pz);
        if inside {
            prop_assert!((v - c).abs() < 1e-9);
        } else {
            prop_assert_eq!(v, 0.0);
        }
    }

    /// Repeat queries are bit-identical (pure function of immutable data).
    #[test]
    fn trilinear_idempotent(
        px in -1.0f64..3.0,
        py in -1.0f64..6.0,
        pz in -5.0f64..15.0,
    ) {
        let interp = constant_grid(7.25);
        let a = interp.eval(px, py, pz);
        let b = interp.eval(px, py, pz);
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    /// Interpolated values never leave the hull of the corner values.
    #[test]
    fn trilinear_within_corner_hull(
        px in 0.0f64..2.0,
        py in 0.0f64..5.0,
        pz in 0.0f64..10.0,
    ) {
        let x = vec![0.0, 1.0, 2.0];
        let y = vec![0.0, 2.0, 5.0];
        let z = vec![0.0, 4.0, 10.0];
        let values = Array3::from_shape_fn((3, 3, 3), |(i, j, k)| {
            ((i * 7 + j * 3 + k * 11) % 13) as f64 - 6.0
        });
        let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let interp = Trilinear::new(x, y, z, values, 0.0).unwrap();

        let v = interp.eval(px, py, pz);
        prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9);
    }
}
