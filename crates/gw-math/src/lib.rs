//! Numerical primitives for SCPN GW Curvature.

pub mod spline;
pub mod trilinear;
