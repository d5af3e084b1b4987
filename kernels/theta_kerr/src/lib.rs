// kernels/theta_kerr/src/lib.rs

// Θ–Kerr Horizon-Gate Diagnostics Core
//
// This library evaluates the geometric gate G(˜K, ˜Π²) on the outer horizon
// of a Kerr black hole and runs the two-stage triage protocol on top of it.
// All computations use f64 in geometric units (G = c = 1).

pub mod curvature;
pub mod diagnostics;
pub mod error;
pub mod gate;
pub mod horizon;
pub mod sweep;
pub mod triage;
pub mod types;

pub use crate::curvature::{
    kretschmann_invariant, normalized_curvature, schwarzschild_reference_curvature,
};
pub use crate::diagnostics::{
    first_law_residual, photon_sphere_shift_estimate, SHIFT_PREFACTOR_MAX, SHIFT_PREFACTOR_MIN,
};
pub use crate::error::ThetaKerrError;
pub use crate::gate::{combined_gate, polarization_invariant, sigmoid_gate};
pub use crate::horizon::horizon_gate_profile;
pub use crate::sweep::{
    diagnose_point, param_map, sigma_scan, ParamMapConfig, ParamMapRow, PointDiagnostics,
    SigmaScanConfig, SigmaScanRow,
};
pub use crate::triage::triage;
pub use crate::types::{
    FirstLawInputs, GateProfile, KerrBlackHole, ModelParameters, TriageDecision, TriageResult,
    TriageThresholds,
};
