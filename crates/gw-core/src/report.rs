// ─────────────────────────────────────────────────────────────────────
// SCPN GW Curvature — Artifact Reporting
// © 1998–2026 Miroslav Šotek. All rights reserved.
// ─────────────────────────────────────────────────────────────────────
//! Persistence of per-detector tensors and pairwise residuals.
//!
//! Each tensor is written twice: a `.npy` array (lossless f64) and a
//! human-readable text dump in exponential notation. Residual arrays are
//! rounded to the reporting precision before persisting; the residual
//! `.npy` names follow the `{prefix}_delta_{A}_{B}` convention consumed
//! downstream by the heatmap plotter.

use crate::compare::ComparisonReport;
use gw_types::constants::RESIDUAL_REPORT_DECIMALS;
use gw_types::error::{GwError, GwResult};
use gw_types::tensor::Tensor3x3;
use ndarray::Array2;
use ndarray_npy::{read_npy, write_npy};
use std::fmt::Write as _;
use std::path::Path;

/// Write one tensor as a `.npy` array.
pub fn write_tensor_npy<P: AsRef<Path>>(path: P, tensor: &Tensor3x3) -> GwResult<()> {
    write_npy(path.as_ref(), &tensor.to_array2())
        .map_err(|e| GwError::Npy(format!("write '{}': {e}", path.as_ref().display())))
}

/// Read a tensor back from a `.npy` array.
pub fn read_tensor_npy<P: AsRef<Path>>(path: P) -> GwResult<Tensor3x3> {
    let a: Array2<f64> = read_npy(path.as_ref())
        .map_err(|e| GwError::Npy(format!("read '{}': {e}", path.as_ref().display())))?;
    Tensor3x3::from_array2(&a)
}

/// Render one tensor as three rows of exponential-notation values with
/// 8 fractional digits.
pub fn tensor_to_text(tensor: &Tensor3x3) -> String {
    let mut out = String::new();
    for r in 0..3 {
        for c in 0..3 {
            if c > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{:.8e}", tensor.get(r, c));
        }
        out.push('\n');
    }
    out
}

/// Write one tensor as an exponential-notation text dump.
pub fn write_tensor_txt<P: AsRef<Path>>(path: P, tensor: &Tensor3x3) -> GwResult<()> {
    std::fs::write(path, tensor_to_text(tensor))?;
    Ok(())
}

/// Persist every tensor and residual of a comparison run under the given
/// output prefix (which may carry a directory component).
pub fn write_artifacts(prefix: &str, report: &ComparisonReport) -> GwResult<()> {
    for (name, tensor) in &report.tensors {
        write_tensor_npy(format!("{prefix}_{name}_tensor.npy"), tensor)?;
        write_tensor_txt(format!("{prefix}_{name}_tensor.txt"), tensor)?;
    }
    for res in &report.residuals {
        let rounded = res.delta.rounded(RESIDUAL_REPORT_DECIMALS);
        let stem = format!("{prefix}_delta_{}_{}", res.first, res.second);
        write_tensor_npy(format!("{stem}.npy"), &rounded)?;
        write_tensor_txt(format!("{stem}.txt"), &rounded)?;
    }
    Ok(())
}
