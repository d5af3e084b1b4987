// Parameter-grid sweep drivers over the diagnostic pipeline

use serde::Serialize;

use crate::diagnostics::{
    first_law_residual, photon_sphere_shift_estimate, SHIFT_PREFACTOR_MAX, SHIFT_PREFACTOR_MIN,
};
use crate::error::ThetaKerrError;
use crate::horizon::horizon_gate_profile;
use crate::triage::triage;
use crate::types::{FirstLawInputs, ModelParameters, TriageDecision, TriageResult, TriageThresholds};

// ============================================================================
// SINGLE-POINT PIPELINE
// ============================================================================

// Everything the pipeline derives for one parameter point
//
// This is the unit of work every sweep repeats: grid points are fully
// independent, so the drivers below are plain iteration over this
// function and could be fanned out across workers without any shared
// state. Result rows only need to keep their grid-point association,
// not the invocation order.
#[derive(Debug, Clone)]
pub struct PointDiagnostics {
    pub chi: f64,
    pub gate_average: f64,
    pub shift_min: f64,
    pub shift_max: f64,
    pub residual: f64,
    pub triage: TriageResult,
}

// Run the whole diagnostic pipeline for one parameter point
//
// Expands the parameters into a Kerr geometry, averages the gate over the
// horizon, estimates the photon-sphere shift band, evaluates the
// First-Law residual from the supplied thermodynamic variation and
// triages the result. Every stage is a pure function of its inputs.
pub fn diagnose_point(
    params: &ModelParameters,
    samples: usize,
    first_law: &FirstLawInputs,
) -> Result<PointDiagnostics, ThetaKerrError> {
    let bh = params.black_hole()?;
    let profile = horizon_gate_profile(&bh, params.sigma_k, params.sigma_pi, samples)?;

    let chi = params.chi();
    let (shift_min, shift_max) = photon_sphere_shift_estimate(
        chi,
        profile.average,
        SHIFT_PREFACTOR_MIN,
        SHIFT_PREFACTOR_MAX,
    );

    let residual = first_law_residual(
        first_law.d_mass,
        first_law.th_ds,
        first_law.omega_h_dj,
        params.eps * params.mass,
    );

    let triage = triage(profile.average, chi, residual, TriageThresholds::default());

    Ok(PointDiagnostics {
        chi,
        gate_average: profile.average,
        shift_min,
        shift_max,
        residual,
        triage,
    })
}

// ============================================================================
// PARAMETER MAP (a*, χ)
// ============================================================================

// Grid configuration for the (a*, χ) map
#[derive(Debug, Clone)]
pub struct ParamMapConfig {
    pub mass: f64,
    pub lambda: f64,
    pub sigma_k: f64,
    pub sigma_pi: f64,
    pub spins: Vec<f64>,
    pub eps_values: Vec<f64>,
    pub samples: usize,
    pub first_law: FirstLawInputs,
}

impl Default for ParamMapConfig {
    fn default() -> Self {
        Self {
            mass: 10.0,
            lambda: 100.0,
            sigma_k: 0.1,
            sigma_pi: 0.3,
            spins: vec![0.5, 0.7, 0.9, 0.99],
            // χ ~ 1e-6, 1e-5, 1e-4 for M = 10, Λ = 100
            eps_values: vec![1.0e-4, 1.0e-3, 1.0e-2],
            samples: 400,
            first_law: FirstLawInputs::placeholder(),
        }
    }
}

// One row of the (a*, χ) map table
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParamMapRow {
    pub a_star: f64,
    pub chi: f64,
    pub gate_average: f64,
    pub shift_min: f64,
    pub shift_max: f64,
    pub decision: TriageDecision,
}

// Sweep the (a*, χ) grid
//
// ⟨G⟩_H depends on the geometry and the gate widths but not on ε, so it
// is computed once per spin and reused across the ε values of that spin.
pub fn param_map(config: &ParamMapConfig) -> Result<Vec<ParamMapRow>, ThetaKerrError> {
    let mut rows = Vec::with_capacity(config.spins.len() * config.eps_values.len());

    for &a_star in &config.spins {
        let reference = ModelParameters {
            mass: config.mass,
            eps: config.eps_values.first().copied().unwrap_or(0.0),
            lambda: config.lambda,
            a_star,
            sigma_k: config.sigma_k,
            sigma_pi: config.sigma_pi,
        };
        let bh = reference.black_hole()?;
        let gate_average =
            horizon_gate_profile(&bh, config.sigma_k, config.sigma_pi, config.samples)?.average;

        for &eps in &config.eps_values {
            let params = ModelParameters { eps, ..reference };
            let chi = params.chi();
            let (shift_min, shift_max) = photon_sphere_shift_estimate(
                chi,
                gate_average,
                SHIFT_PREFACTOR_MIN,
                SHIFT_PREFACTOR_MAX,
            );
            let residual = first_law_residual(
                config.first_law.d_mass,
                config.first_law.th_ds,
                config.first_law.omega_h_dj,
                eps * config.mass,
            );
            let decision = triage(gate_average, chi, residual, TriageThresholds::default()).decision;

            rows.push(ParamMapRow {
                a_star,
                chi,
                gate_average,
                shift_min,
                shift_max,
                decision,
            });
        }
    }

    Ok(rows)
}

// ============================================================================
// SIGMA SCAN (gate sharpness)
// ============================================================================

// Scan configuration: σ_Π list at fixed near-extremal spin and fixed χ
#[derive(Debug, Clone)]
pub struct SigmaScanConfig {
    pub mass: f64,
    pub a_star: f64,
    pub eps: f64,
    pub lambda: f64,
    pub sigma_k: f64,
    pub sigma_pi_values: Vec<f64>,
    pub samples: usize,
    pub first_law: FirstLawInputs,
}

impl Default for SigmaScanConfig {
    fn default() -> Self {
        Self {
            mass: 10.0,
            a_star: 0.99,
            // χ ~ 1e-5 for Λ = 100
            eps: 1.0e-3,
            lambda: 100.0,
            sigma_k: 0.1,
            sigma_pi_values: vec![0.05, 0.10, 0.20, 0.30, 0.50],
            samples: 400,
            first_law: FirstLawInputs::placeholder(),
        }
    }
}

// One row of the σ_Π scan table
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SigmaScanRow {
    pub sigma_pi: f64,
    pub chi: f64,
    pub gate_average: f64,
    pub shift_min: f64,
    pub shift_max: f64,
    pub decision: TriageDecision,
}

// Sweep the gate sharpness σ_Π, rerunning the whole pipeline per value
pub fn sigma_scan(config: &SigmaScanConfig) -> Result<Vec<SigmaScanRow>, ThetaKerrError> {
    let mut rows = Vec::with_capacity(config.sigma_pi_values.len());

    for &sigma_pi in &config.sigma_pi_values {
        let params = ModelParameters {
            mass: config.mass,
            eps: config.eps,
            lambda: config.lambda,
            a_star: config.a_star,
            sigma_k: config.sigma_k,
            sigma_pi,
        };
        let point = diagnose_point(&params, config.samples, &config.first_law)?;

        rows.push(SigmaScanRow {
            sigma_pi,
            chi: point.chi,
            gate_average: point.gate_average,
            shift_min: point.shift_min,
            shift_max: point.shift_max,
            decision: point.triage.decision,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::sigmoid_gate;

    // End-to-end scenario: M = 10, a = 0, σ = (0.1, 0.3), 400 samples.
    // ˜K = 1 at every sample, so ⟨G⟩ = 0.5 · s_Π(0) ≈ 6.355e-4 and the
    // point REJECTs on gate coverage alone (χ = 1e-5, R = 0.01).
    #[test]
    fn test_schwarzschild_point_rejects_on_coverage_only() {
        let params = ModelParameters::with_spin(10.0, 1.0e-3, 100.0, 0.0);
        let point = diagnose_point(&params, 400, &FirstLawInputs::placeholder()).unwrap();

        let expected_gate = 0.5 * sigmoid_gate(0.0, 0.3);
        assert!((point.gate_average - expected_gate).abs() < 1e-9);
        assert!((point.chi - 1.0e-5).abs() < 1e-20);
        assert!((point.residual - 0.01).abs() < 1e-12);

        assert_eq!(point.triage.decision, TriageDecision::Reject);
        assert_eq!(point.triage.reasons.len(), 1, "coverage failure only");
        assert!(point.triage.reasons[0].contains("Gate coverage"));
    }

    // End-to-end scenario: near-extremal a* = 0.99 with the default
    // calibration clears both stages.
    #[test]
    fn test_near_extremal_point_passes() {
        let params = ModelParameters::with_spin(10.0, 1.0e-3, 100.0, 0.99);
        let point = diagnose_point(&params, 400, &FirstLawInputs::placeholder()).unwrap();

        assert!((point.gate_average - 0.126264).abs() < 0.02);
        assert_eq!(point.triage.decision, TriageDecision::Pass);
        // Shift band: (0.5, 2.0) × χ⟨G⟩
        assert!(point.shift_min < point.shift_max);
        assert!((point.shift_max / point.shift_min - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_unphysical_spin_aborts_the_pipeline() {
        let params = ModelParameters::with_spin(10.0, 1.0e-3, 100.0, 1.5);
        let err = diagnose_point(&params, 400, &FirstLawInputs::placeholder()).unwrap_err();
        assert!(matches!(err, ThetaKerrError::NoRealHorizon { .. }));
    }

    #[test]
    fn test_param_map_covers_the_grid() {
        let config = ParamMapConfig::default();
        let rows = param_map(&config).unwrap();
        assert_eq!(rows.len(), 4 * 3, "spins × eps values");

        // ⟨G⟩ is reused across ε within one spin
        for spin_rows in rows.chunks(3) {
            let g0 = spin_rows[0].gate_average;
            assert!(spin_rows.iter().all(|r| r.gate_average == g0));
            // χ grows with ε at fixed spin
            assert!(spin_rows[0].chi < spin_rows[1].chi);
            assert!(spin_rows[1].chi < spin_rows[2].chi);
        }
    }

    #[test]
    fn test_param_map_decisions_follow_the_gate() {
        let rows = param_map(&ParamMapConfig::default()).unwrap();
        for row in &rows {
            let expected = if row.gate_average < 0.10 {
                TriageDecision::Reject
            } else {
                TriageDecision::Pass
            };
            assert_eq!(row.decision, expected, "a* = {}, χ = {}", row.a_star, row.chi);
        }
        // With the default grid, slow spins reject on coverage while the
        // near-extremal rows clear the 0.10 threshold
        assert!(rows.iter().any(|r| r.decision.is_reject()));
        assert!(rows
            .iter()
            .filter(|r| r.a_star == 0.99)
            .all(|r| r.decision == TriageDecision::Pass));
    }

    #[test]
    fn test_sigma_scan_average_grows_with_width() {
        let rows = sigma_scan(&SigmaScanConfig::default()).unwrap();
        assert_eq!(rows.len(), 5);
        for pair in rows.windows(2) {
            assert!(
                pair[1].gate_average > pair[0].gate_average,
                "a wider σ_Π leaks more gate below threshold"
            );
        }
        // χ is held fixed across the scan
        assert!(rows.iter().all(|r| (r.chi - 1.0e-5).abs() < 1e-20));
    }
}
