// Error taxonomy for the Θ–Kerr diagnostic pipeline

// ============================================================================
// PIPELINE ERRORS
// ============================================================================

// Errors raised by the diagnostic core
//
// Two families:
// - Domain errors: physically invalid geometry (|a| > M leaves no real
//   horizon, r₊ = M + √(M² - a²) is undefined)
// - Configuration misuse: gate widths or quadrature resolutions for which
//   the pipeline output is ill-defined (σ ≤ 0 makes the tanh argument's
//   scale undefined; zero samples leave nothing to average)
//
// Degenerate inputs with a documented zero-return policy (zero-weight
// averages, zero-denominator First-Law residuals) are NOT errors and
// never surface here.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ThetaKerrError {
    // |a| > M: cosmic censorship violated, no outer horizon exists
    #[error("no real horizon: |a| = {} exceeds M = {} (a² must be ≤ M²)", .spin.abs(), .mass)]
    NoRealHorizon { mass: f64, spin: f64 },

    // Gate sharpness must be strictly positive for the sigmoid to be defined
    #[error("gate width {name} must be > 0, got {value}")]
    NonPositiveSigma { name: &'static str, value: f64 },

    // Quadrature needs at least one θ bin
    #[error("horizon quadrature needs at least one sample")]
    ZeroSamples,
}
