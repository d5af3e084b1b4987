// Horizon-averaged gate profile via area-weighted quadrature

use std::f64::consts::PI;

use crate::curvature::{kretschmann_invariant, normalized_curvature};
use crate::error::ThetaKerrError;
use crate::gate::{combined_gate, polarization_invariant};
use crate::types::{GateProfile, KerrBlackHole};

// ============================================================================
// HORIZON GATE PROFILE
// ============================================================================

// Evaluate the gate over the horizon and average it with the area weight
//
// Algorithm: partition θ ∈ (0, π) into `samples` equal bins and evaluate
// everything at the bin midpoints (midpoint rule; deliberately not a
// higher-order scheme). Per sample:
// - K at r = r₊ from the exact Kretschmann formula, normalized to ˜K,
// - ˜Π²(θ) from the phenomenological polarization model,
// - G(˜K, ˜Π²) from the combined sigmoid gate.
//
// The average uses the horizon area element, which in these coordinates
// is proportional to sinθ dθ:
//
//   ⟨G⟩_H = Σ G_i sinθ_i / Σ sinθ_i
//
// A weight sum of exactly zero yields ⟨G⟩ = 0 by explicit policy rather
// than a division error (same fallback as the First-Law residual).
// Unreachable once `samples` ≥ 1 is validated, but the policy stands.
//
// Convergence in `samples` is monotone in practice but not bit-exact;
// ≥ 200 samples gives stable averages, the drivers use 400.
pub fn horizon_gate_profile(
    bh: &KerrBlackHole,
    sigma_k: f64,
    sigma_pi: f64,
    samples: usize,
) -> Result<GateProfile, ThetaKerrError> {
    if sigma_k <= 0.0 {
        return Err(ThetaKerrError::NonPositiveSigma { name: "sigma_K", value: sigma_k });
    }
    if sigma_pi <= 0.0 {
        return Err(ThetaKerrError::NonPositiveSigma { name: "sigma_Pi", value: sigma_pi });
    }
    if samples == 0 {
        return Err(ThetaKerrError::ZeroSamples);
    }

    let r_plus = bh.horizon_radius();
    let a_star = bh.a_star();

    let mut thetas = Vec::with_capacity(samples);
    let mut k_tilde_vals = Vec::with_capacity(samples);
    let mut gate_vals = Vec::with_capacity(samples);

    // Accumulators for the sinθ-weighted average
    let mut num = 0.0;
    let mut den = 0.0;

    for i in 0..samples {
        // Bin midpoint
        let theta = (i as f64 + 0.5) * PI / samples as f64;
        thetas.push(theta);

        let k = kretschmann_invariant(bh.mass, bh.spin, r_plus, theta);
        let k_tilde = normalized_curvature(k, bh.mass);
        k_tilde_vals.push(k_tilde);

        let pi2_tilde = polarization_invariant(a_star, theta);

        let g = combined_gate(k_tilde, pi2_tilde, sigma_k, sigma_pi);
        gate_vals.push(g);

        let w = theta.sin();
        num += g * w;
        den += w;
    }

    let average = if den != 0.0 { num / den } else { 0.0 };

    Ok(GateProfile {
        thetas,
        normalized_curvature: k_tilde_vals,
        gate_values: gate_vals,
        average,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::sigmoid_gate;

    #[test]
    fn test_zero_spin_profile_is_a_constant() {
        // a = 0: ˜K = 1 everywhere on the horizon, ˜Π² = 0 everywhere, so
        // G = 0.5 · s_Π(0) at every angle and the weighted average of a
        // constant is that constant
        let bh = KerrBlackHole::new(10.0, 0.0).unwrap();
        let profile = horizon_gate_profile(&bh, 0.1, 0.3, 400).unwrap();

        let expected = 0.5 * sigmoid_gate(0.0, 0.3);
        for (kt, g) in profile
            .normalized_curvature
            .iter()
            .zip(profile.gate_values.iter())
        {
            assert_eq!(*kt, 1.0, "˜K must be exactly 1 at zero spin");
            assert!((g - expected).abs() < 1e-15);
        }
        assert!(
            (profile.average - expected).abs() < 1e-9,
            "⟨G⟩ = {} should equal the constant {}",
            profile.average,
            expected
        );
    }

    #[test]
    fn test_zero_spin_average_is_independent_of_resolution() {
        let bh = KerrBlackHole::new(10.0, 0.0).unwrap();
        let coarse = horizon_gate_profile(&bh, 0.1, 0.3, 7).unwrap();
        let fine = horizon_gate_profile(&bh, 0.1, 0.3, 1000).unwrap();
        assert!((coarse.average - fine.average).abs() < 1e-12);
    }

    #[test]
    fn test_profile_shape() {
        let bh = KerrBlackHole::new(10.0, 9.0).unwrap();
        let profile = horizon_gate_profile(&bh, 0.1, 0.3, 100).unwrap();
        assert_eq!(profile.thetas.len(), 100);
        assert_eq!(profile.normalized_curvature.len(), 100);
        assert_eq!(profile.gate_values.len(), 100);
        // Midpoints stay strictly inside (0, π)
        assert!(profile.thetas[0] > 0.0);
        assert!(*profile.thetas.last().unwrap() < PI);
        // Gate values live in [0, 1]
        assert!(profile.gate_values.iter().all(|&g| (0.0..=1.0).contains(&g)));
    }

    #[test]
    fn test_average_grows_with_spin() {
        // Faster spin opens both gates: r₊ shrinks (more curvature) and
        // the polarization invariant grows as a*²
        let mut last = 0.0;
        for &a_star in &[0.0, 0.5, 0.7, 0.9, 0.99] {
            let bh = KerrBlackHole::new(10.0, a_star * 10.0).unwrap();
            let avg = horizon_gate_profile(&bh, 0.1, 0.3, 400).unwrap().average;
            assert!(avg >= last, "⟨G⟩ should not decrease with spin");
            last = avg;
        }
    }

    #[test]
    fn test_near_extremal_average_matches_calibration() {
        // M = 10, a = 9.9, σ = (0.1, 0.3), 400 samples. The quadrature
        // value for the exact invariant is ≈ 0.12626; kept as a pinned
        // regression value (quadrature-dependent, hence the loose band).
        let bh = KerrBlackHole::new(10.0, 9.9).unwrap();
        let avg = horizon_gate_profile(&bh, 0.1, 0.3, 400).unwrap().average;
        assert!(
            (avg - 0.126264).abs() < 0.02,
            "near-extremal ⟨G⟩ drifted: {}",
            avg
        );
    }

    #[test]
    fn test_quadrature_converges() {
        // Not bit-exact across resolutions, but 200 → 800 samples agree
        // to well under the 0.02 band the triage thresholds care about
        let bh = KerrBlackHole::new(10.0, 9.9).unwrap();
        let coarse = horizon_gate_profile(&bh, 0.1, 0.3, 200).unwrap().average;
        let fine = horizon_gate_profile(&bh, 0.1, 0.3, 800).unwrap().average;
        assert!((coarse - fine).abs() < 5e-3);
    }

    #[test]
    fn test_rejects_non_positive_sigma() {
        let bh = KerrBlackHole::new(10.0, 0.0).unwrap();
        let err = horizon_gate_profile(&bh, 0.0, 0.3, 10).unwrap_err();
        assert!(matches!(err, ThetaKerrError::NonPositiveSigma { name: "sigma_K", .. }));
        let err = horizon_gate_profile(&bh, 0.1, -0.3, 10).unwrap_err();
        assert!(matches!(err, ThetaKerrError::NonPositiveSigma { name: "sigma_Pi", .. }));
    }

    #[test]
    fn test_rejects_zero_samples() {
        let bh = KerrBlackHole::new(10.0, 0.0).unwrap();
        let err = horizon_gate_profile(&bh, 0.1, 0.3, 0).unwrap_err();
        assert_eq!(err, ThetaKerrError::ZeroSamples);
    }
}
