// Type definitions for the Θ–Kerr diagnostic pipeline

use serde::Serialize;

use crate::error::ThetaKerrError;

// ============================================================================
// EFT MODEL PARAMETERS
// ============================================================================

// Parameters of the Θ–Kerr effective field theory in geometric units (G = c = 1)
//
// Physics:
// - Mass (M): sets the size scale of the black hole
// - ε: bare coupling of the curvature correction
// - Λ: EFT cutoff scale; corrections are suppressed by powers of M/Λ
// - a*: dimensionless spin a/M ∈ [-1, 1]
// - σ_K, σ_Π: widths of the two sigmoid gates (smaller = sharper)
//
// M > 0 and Λ > 0 are caller contract (asserted, not error-returned);
// unphysical spin is only caught when a KerrBlackHole is built from this.
#[derive(Debug, Clone, Copy)]
pub struct ModelParameters {
    // Black hole mass
    pub mass: f64,

    // Coupling parameter ε
    pub eps: f64,

    // EFT scale Λ
    pub lambda: f64,

    // Dimensionless spin a* = a / M
    pub a_star: f64,

    // Gate sharpness in ˜K
    pub sigma_k: f64,

    // Gate sharpness in ˜Π²
    pub sigma_pi: f64,
}

impl ModelParameters {
    // Create parameters with the standard gate calibration
    // (a* = 0.5, σ_K = 0.1, σ_Π = 0.3)
    pub fn new(mass: f64, eps: f64, lambda: f64) -> Self {
        assert!(mass > 0.0, "Mass must be positive");
        assert!(lambda > 0.0, "EFT scale must be positive");
        Self {
            mass,
            eps,
            lambda,
            a_star: 0.5,
            sigma_k: 0.1,
            sigma_pi: 0.3,
        }
    }

    // Same constructor with an explicit spin
    pub fn with_spin(mass: f64, eps: f64, lambda: f64, a_star: f64) -> Self {
        let mut params = Self::new(mass, eps, lambda);
        params.a_star = a_star;
        params
    }

    // Dimensionless coupling strength χ = ε M² / Λ²
    //
    // This is the small parameter of the EFT expansion: all observable
    // shifts scale linearly with χ at leading order.
    #[inline]
    pub fn chi(&self) -> f64 {
        self.eps * self.mass * self.mass / (self.lambda * self.lambda)
    }

    // Dimensional spin parameter a = a* M
    #[inline]
    pub fn spin(&self) -> f64 {
        self.a_star * self.mass
    }

    // Build the Kerr geometry this parameter point lives on
    //
    // Fails when |a*| > 1 (no real horizon).
    pub fn black_hole(&self) -> Result<KerrBlackHole, ThetaKerrError> {
        KerrBlackHole::new(self.mass, self.spin())
    }
}

// ============================================================================
// KERR GEOMETRY
// ============================================================================

// A Kerr black hole with mass M and spin parameter a = J/M
//
// Invariant: a² ≤ M² (cosmic censorship). Construction validates this and
// fails with a domain error otherwise, so r₊ is always real for a built
// value. Negative a (retrograde spin) is allowed; the horizon and the
// curvature invariant only depend on a².
#[derive(Debug, Clone, Copy)]
pub struct KerrBlackHole {
    // Mass in geometric units
    pub mass: f64,

    // Spin parameter a ∈ [-M, M]
    pub spin: f64,
}

impl KerrBlackHole {
    // Create a new black hole, validating the horizon exists
    pub fn new(mass: f64, spin: f64) -> Result<Self, ThetaKerrError> {
        assert!(mass > 0.0, "Mass must be positive");
        if spin * spin > mass * mass {
            return Err(ThetaKerrError::NoRealHorizon { mass, spin });
        }
        Ok(Self { mass, spin })
    }

    // Dimensionless spin a* = a / M
    #[inline]
    pub fn a_star(&self) -> f64 {
        self.spin / self.mass
    }

    // Check if this is a Schwarzschild black hole (no spin)
    #[inline]
    pub fn is_schwarzschild(&self) -> bool {
        self.spin.abs() < 1e-10
    }

    // Outer event horizon radius r₊
    //
    // Math: r₊ = M + √(M² - a²)
    //
    // Spin dependence:
    // - a = 0 (Schwarzschild): r₊ = 2M
    // - a = 0.99M (near-extremal): r₊ ≈ 1.14M
    // - a → M (extremal): r₊ → M
    #[inline]
    pub fn horizon_radius(&self) -> f64 {
        let m = self.mass;
        let a = self.spin;
        m + (m * m - a * a).sqrt()
    }
}

// ============================================================================
// HORIZON GATE PROFILE
// ============================================================================

// Sampled gate profile on the horizon and its area-weighted average
//
// Produced once per (black hole, σ_K, σ_Π, sample count) combination by
// the horizon averager; read-only afterwards. The three vectors run in
// parallel over the θ grid.
#[derive(Debug, Clone)]
pub struct GateProfile {
    // Polar angles θ_i ∈ (0, π), bin midpoints
    pub thetas: Vec<f64>,

    // ˜K(θ_i) at r = r₊
    pub normalized_curvature: Vec<f64>,

    // G(˜K, ˜Π²) at each θ_i
    pub gate_values: Vec<f64>,

    // ⟨G⟩_H = Σ G_i sinθ_i / Σ sinθ_i
    pub average: f64,
}

// ============================================================================
// FIRST LAW INPUTS
// ============================================================================

// Thermodynamic variation entering the First-Law consistency check
//
// dM, T_H dS and Ω_H dJ come from an external thermodynamic solver; the
// pipeline only consumes them. The placeholder values below are the
// stand-in used by the drivers until that solver exists, chosen to leave
// a residual of 0.01 against the default threshold of 0.02.
#[derive(Debug, Clone, Copy)]
pub struct FirstLawInputs {
    // Mass variation dM
    pub d_mass: f64,

    // Entropy term T_H dS
    pub th_ds: f64,

    // Angular momentum term Ω_H dJ
    pub omega_h_dj: f64,
}

impl FirstLawInputs {
    pub fn new(d_mass: f64, th_ds: f64, omega_h_dj: f64) -> Self {
        Self { d_mass, th_ds, omega_h_dj }
    }

    // Stand-in variation used by the sweep drivers
    pub fn placeholder() -> Self {
        Self::new(1.0, 0.99, 0.0)
    }
}

// ============================================================================
// TRIAGE TYPES
// ============================================================================

// Thresholds for the two triage stages
#[derive(Debug, Clone, Copy)]
pub struct TriageThresholds {
    // Stage 1: minimum acceptable gate coverage ⟨G⟩_H
    pub gate: f64,

    // Stage 2: maximum acceptable First-Law residual R
    pub first_law: f64,
}

impl Default for TriageThresholds {
    fn default() -> Self {
        Self { gate: 0.10, first_law: 0.02 }
    }
}

// Outcome of the triage protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TriageDecision {
    // Configuration survives both stages and moves on to the metric solver
    Pass,

    // At least one stage failed
    Reject,
}

impl TriageDecision {
    // Table-friendly label
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Reject => "REJECT",
        }
    }

    #[inline]
    pub fn is_reject(&self) -> bool {
        matches!(self, Self::Reject)
    }
}

// Decision plus the human-readable reasons behind it
//
// Reasons preserve stage order: a gate-coverage reason always precedes a
// First-Law reason. A Pass carries exactly one informational reason.
#[derive(Debug, Clone)]
pub struct TriageResult {
    pub decision: TriageDecision,
    pub reasons: Vec<String>,
}
