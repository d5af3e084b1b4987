// Closed-form curvature invariants for Kerr spacetime

// ============================================================================
// KRETSCHMANN INVARIANT
// ============================================================================

// Kretschmann scalar K = R_abcd R^abcd for Kerr in Boyer-Lindquist coordinates
//
// Math (exact, no expansion):
//
//   K = 48 M² (r⁶ - 15 a² r⁴ cos²θ + 15 a⁴ r² cos⁴θ - a⁶ cos⁶θ)
//       / (r² + a² cos²θ)⁶
//
// Physics: this scalar measures the magnitude of spacetime curvature in a
// coordinate-independent way. At a = 0 it reduces to the Schwarzschild
// value 48 M² / r⁶, which anchors the normalization below.
//
// Numerically stable for r > 0: the denominator Σ⁶ only vanishes at the
// ring singularity (r = 0, θ = π/2), well inside the horizon and outside
// the domain of use (we evaluate at r = r₊ > 0).
pub fn kretschmann_invariant(m: f64, a: f64, r: f64, theta: f64) -> f64 {
    let ct = theta.cos();
    let r2 = r * r;
    let a2 = a * a;
    let cos2 = ct * ct;

    let a2cos2 = a2 * cos2;
    let numerator = r2 * r2 * r2 - 15.0 * a2cos2 * r2 * r2 + 15.0 * a2cos2 * a2cos2 * r2
        - a2cos2 * a2cos2 * a2cos2;
    let sigma = r2 + a2cos2;
    let denom = sigma.powi(6);

    48.0 * m * m * numerator / denom
}

// ============================================================================
// NORMALIZATION
// ============================================================================

// Reference curvature: Schwarzschild Kretschmann at r = 2M
//
// Math: K_Schw(2M) = 48 M² / (2M)⁶ = 3 / (4 M⁴)
//
// This is the fixed normalization scale of the gate: a non-spinning hole
// sits exactly at ˜K = 1 on its own horizon.
#[inline]
pub fn schwarzschild_reference_curvature(m: f64) -> f64 {
    3.0 / (4.0 * m.powi(4))
}

// Normalized curvature ˜K = K / K_Schw(2M)
#[inline]
pub fn normalized_curvature(k: f64, m: f64) -> f64 {
    k / schwarzschild_reference_curvature(m)
}
