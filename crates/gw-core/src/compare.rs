// ─────────────────────────────────────────────────────────────────────
// SCPN GW Curvature — Detector Comparison
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Multi-detector comparison of accumulated path tensors.
//!
//! Detectors are processed in declaration order. A failure while
//! resolving or integrating one detector aborts only that detector;
//! everything already computed still reports. Residuals are taken over
//! the successful detectors, one per unordered pair, oriented
//! earlier-minus-later in declaration order.

use crate::dynamo::Weighting;
use crate::prem::DensityProfile;
use crate::sampler::FieldSampler;
use crate::sky::{HorizonTransform, SkyPosition};
use crate::tracer::{trace_prem, trace_symbolic};
use chrono::{DateTime, Utc};
use gw_types::constants::{LEGACY_STEPS, PREM_STEPS};
use gw_types::error::GwError;
use gw_types::geo::GeoPoint;
use gw_types::tensor::Tensor3x3;

/// A named detector site.
#[derive(Debug, Clone)]
pub struct Detector {
    pub name: String,
    pub site: GeoPoint,
}

/// The observed event: sky position plus UTC instant.
#[derive(Debug, Clone, Copy)]
pub struct GwEvent {
    pub sky: SkyPosition,
    pub when: DateTime<Utc>,
}

/// Integration kernel for a comparison run; selecting the kernel selects
/// the mode, so an unused resource is never loaded.
pub enum EventKernel {
    Prem(DensityProfile),
    Symbolic(FieldSampler),
}

impl EventKernel {
    /// Default step count for this kernel's mode.
    pub fn default_steps(&self) -> usize {
        match self {
            EventKernel::Prem(_) => PREM_STEPS,
            EventKernel::Symbolic(_) => LEGACY_STEPS,
        }
    }
}

/// One pairwise residual, oriented `first − second` with `first`
/// declared before `second`.
#[derive(Debug, Clone)]
pub struct Residual {
    pub first: String,
    pub second: String,
    pub delta: Tensor3x3,
}

/// Outcome of a comparison run. Tensors are unrounded; rounding is a
/// reporting concern.
#[derive(Debug)]
pub struct ComparisonReport {
    /// Successful detectors in declaration order.
    pub tensors: Vec<(String, Tensor3x3)>,
    /// One entry per unordered pair of successful detectors.
    pub residuals: Vec<Residual>,
    /// Detectors whose trace failed, with the failure.
    pub failures: Vec<(String, GwError)>,
}

/// Trace every detector and diff the results pairwise.
pub fn compare_event(
    event: &GwEvent,
    detectors: &[Detector],
    kernel: &EventKernel,
    weighting: &Weighting,
    transform: &dyn HorizonTransform,
    steps: Option<usize>,
) -> ComparisonReport {
    let steps = steps.unwrap_or_else(|| kernel.default_steps());

    let mut tensors: Vec<(String, Tensor3x3)> = Vec::with_capacity(detectors.len());
    let mut failures = Vec::new();
    for det in detectors {
        let traced = match kernel {
            EventKernel::Prem(profile) => {
                trace_prem(&event.sky, &det.site, event.when, steps, profile, transform)
            }
            EventKernel::Symbolic(sampler) => trace_symbolic(
                &event.sky,
                &det.site,
                event.when,
                steps,
                sampler,
                transform,
            ),
        };
        match traced {
            Ok(integration) => {
                let tensor = weighting.apply(integration.tensor, &det.site, event.when);
                tensors.push((det.name.clone(), tensor));
            }
            Err(e) => failures.push((det.name.clone(), e)),
        }
    }

    let mut residuals = Vec::new();
    for i in 0..tensors.len() {
        for j in i + 1..tensors.len() {
            residuals.push(Residual {
                first: tensors[i].0.clone(),
                second: tensors[j].0.clone(),
                delta: tensors[i].1 - tensors[j].1,
            });
        }
    }

    ComparisonReport {
        tensors,
        residuals,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sky::{parse_utc, SiderealTransform};

    fn event() -> GwEvent {
        GwEvent {
            sky: SkyPosition {
                ra_deg: 197.45,
                dec_deg: -23.38,
            },
            when: parse_utc("2017-08-17T12:41:04").unwrap(),
        }
    }

    fn network() -> Vec<Detector> {
        vec![
            Detector {
                name: "Hanford".into(),
                site: GeoPoint::new(46.455, -119.408, 0.142554),
            },
            Detector {
                name: "Livingston".into(),
                site: GeoPoint::new(30.563, -90.774, -0.006574),
            },
            Detector {
                name: "Virgo".into(),
                site: GeoPoint::new(43.63, 10.5, 0.051884),
            },
        ]
    }

    fn prem_kernel() -> EventKernel {
        EventKernel::Prem(
            DensityProfile::from_samples(vec![(0.0, 13_000.0), (6371.0, 2600.0)]).unwrap(),
        )
    }

    #[test]
    fn test_declaration_order_and_pair_orientation() {
        let report = compare_event(
            &event(),
            &network(),
            &prem_kernel(),
            &Weighting::Identity,
            &SiderealTransform,
            None,
        );
        assert!(report.failures.is_empty());

        let names: Vec<&str> = report.tensors.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["Hanford", "Livingston", "Virgo"]);

        let pairs: Vec<(&str, &str)> = report
            .residuals
            .iter()
            .map(|r| (r.first.as_str(), r.second.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("Hanford", "Livingston"),
                ("Hanford", "Virgo"),
                ("Livingston", "Virgo"),
            ]
        );
    }

    #[test]
    fn test_residual_antisymmetry_and_self_difference() {
        let report = compare_event(
            &event(),
            &network(),
            &prem_kernel(),
            &Weighting::Identity,
            &SiderealTransform,
            None,
        );
        for (_, a) in &report.tensors {
            // diff(A, A) is the exact zero matrix
            assert_eq!(*a - *a, Tensor3x3::zeros());
            for (_, b) in &report.tensors {
                assert_eq!(*a - *b, -(*b - *a));
            }
        }
        // Emitted residuals match recomputing first − second directly.
        for res in &report.residuals {
            let a = report
                .tensors
                .iter()
                .find(|(n, _)| *n == res.first)
                .unwrap()
                .1;
            let b = report
                .tensors
                .iter()
                .find(|(n, _)| *n == res.second)
                .unwrap()
                .1;
            assert_eq!(res.delta, a - b);
        }
    }

    #[test]
    fn test_failed_detector_is_contained() {
        let mut detectors = network();
        detectors.insert(
            1,
            Detector {
                name: "Broken".into(),
                site: GeoPoint::new(f64::NAN, 0.0, 0.0),
            },
        );

        let report = compare_event(
            &event(),
            &detectors,
            &prem_kernel(),
            &Weighting::Identity,
            &SiderealTransform,
            None,
        );

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, "Broken");
        assert!(matches!(report.failures[0].1, GwError::Coordinate(_)));

        // The three healthy detectors still report, with all pairs.
        assert_eq!(report.tensors.len(), 3);
        assert_eq!(report.residuals.len(), 3);
    }

    #[test]
    fn test_step_override_and_sampling_failure_containment() {
        // A zero-step override fails every detector, but the report
        // itself still comes back rather than propagating.
        let report = compare_event(
            &event(),
            &network(),
            &prem_kernel(),
            &Weighting::Identity,
            &SiderealTransform,
            Some(0),
        );
        assert!(report.tensors.is_empty());
        assert_eq!(report.failures.len(), 3);
        assert!(report
            .failures
            .iter()
            .all(|(_, e)| matches!(e, GwError::Sampling(_))));
        assert!(report.residuals.is_empty());
    }

    #[test]
    fn test_dynamo_weighting_scales_results() {
        let identity = compare_event(
            &event(),
            &network(),
            &prem_kernel(),
            &Weighting::Identity,
            &SiderealTransform,
            None,
        );
        let weighted = compare_event(
            &event(),
            &network(),
            &prem_kernel(),
            &Weighting::Dynamo(Default::default()),
            &SiderealTransform,
            None,
        );
        for ((_, plain), (name, scaled)) in identity.tensors.iter().zip(&weighted.tensors) {
            let det = network().into_iter().find(|d| d.name == *name).unwrap();
            let f = Weighting::Dynamo(Default::default()).factor(&det.site, event().when);
            assert!((scaled.get(0, 0) - plain.get(0, 0) * f).abs() < 1e-9);
        }
    }
}
