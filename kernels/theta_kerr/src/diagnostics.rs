// Observable estimates and thermodynamic consistency residual

// ============================================================================
// PHOTON-SPHERE SHIFT ESTIMATE
// ============================================================================

// O(1) theoretical prefactor band for the photon-sphere shift scaling
//
// The leading-order scaling is Δr_ph / r_ph ≈ A(a*) χ ⟨G⟩_H with A of
// order one; the band [0.5, 2.0] brackets the prefactor uncertainty.
pub const SHIFT_PREFACTOR_MIN: f64 = 0.5;
pub const SHIFT_PREFACTOR_MAX: f64 = 2.0;

// Estimate the fractional photon-sphere shift band
//
// Returns (Δ_min, Δ_max) = (a_min · χ⟨G⟩, a_max · χ⟨G⟩).
//
// Pure scaling: linear in χ at fixed ⟨G⟩ and in ⟨G⟩ at fixed χ; no
// iteration, non-finite inputs propagate. Caller contract: a_min ≤ a_max.
// The ordering is NOT validated here, so a caller that swaps the band
// gets Δ_min > Δ_max without error.
#[inline]
pub fn photon_sphere_shift_estimate(
    chi: f64,
    gate_average: f64,
    a_min: f64,
    a_max: f64,
) -> (f64, f64) {
    let base = chi * gate_average;
    (a_min * base, a_max * base)
}

// ============================================================================
// FIRST LAW RESIDUAL
// ============================================================================

// Normalized First-Law residual
//
// Math: R = |dM - T_H dS - Ω_H dJ| / max(|dM|, |T_H dS|, εM)
//
// The denominator takes the max of three magnitudes, with the EFT scale
// εM as a floor: this prevents blow-up when dM and T_H dS are both near
// zero while still penalizing a correction comparable to εM. A
// denominator of exactly zero yields R = 0 by explicit policy (all three
// scales vanished, nothing to compare against), not an error.
pub fn first_law_residual(d_mass: f64, th_ds: f64, omega_h_dj: f64, eps_m: f64) -> f64 {
    let num = (d_mass - th_ds - omega_h_dj).abs();
    let denom = d_mass.abs().max(th_ds.abs()).max(eps_m);
    if denom != 0.0 {
        num / denom
    } else {
        0.0
    }
}
