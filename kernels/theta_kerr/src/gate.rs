// Two-invariant geometric gate model

// ============================================================================
// POLARIZATION INVARIANT (PHENOMENOLOGICAL MODEL)
// ============================================================================

// Normalized polarization invariant ˜Π²(θ) = a*² sin²θ
//
// This is a phenomenological stand-in, NOT a measured quantity: the real
// invariant would come from the contraction of the polarization tensor.
// The model keeps its three defining features:
// - zero on the rotation axis (θ = 0, π),
// - maximal on the equator (θ = π/2),
// - quadratic growth with spin, normalized so (a* = 1, equator) → 1.
//
// Callers needing a real polarization model substitute this function.
#[inline]
pub fn polarization_invariant(a_star: f64, theta: f64) -> f64 {
    let s = theta.sin();
    a_star * a_star * s * s
}

// ============================================================================
// SIGMOID GATES
// ============================================================================

// Smooth step s(x) = 0.5 (1 + tanh((x - 1)/σ)) centered at the
// Schwarzschild-like reference value x = 1
//
// Behavior:
// - x ≪ 1: saturates to 0 (invariant below reference, gate closed)
// - x ≫ 1: saturates to 1 (invariant above reference, gate open)
// - σ → 0 degenerates to a hard step, σ → ∞ to a constant 0.5
//
// Caller contract: σ > 0. The pipeline entry point validates this before
// any gate is evaluated; see horizon::horizon_gate_profile.
#[inline]
pub fn sigmoid_gate(x: f64, sigma: f64) -> f64 {
    0.5 * (1.0 + ((x - 1.0) / sigma).tanh())
}

// Combined gate G(˜K, ˜Π²) = s_K(˜K) · s_Π(˜Π²)
//
// The product form is an AND-gate in probability-like space: G is small
// unless BOTH invariants exceed their reference thresholds. It is not a
// boolean AND; partial openings multiply.
#[inline]
pub fn combined_gate(k_tilde: f64, pi2_tilde: f64, sigma_k: f64, sigma_pi: f64) -> f64 {
    sigmoid_gate(k_tilde, sigma_k) * sigmoid_gate(pi2_tilde, sigma_pi)
}
