// Two-stage triage protocol for Θ–Kerr parameter points

use crate::types::{TriageDecision, TriageResult, TriageThresholds};

// ============================================================================
// TRIAGE DECISION
// ============================================================================

// Apply the two-stage screening to an evaluated parameter point
//
// - Stage 1 (coverage): ⟨G⟩_H below the gate threshold means the
//   curvature correction has nowhere to act on the horizon.
// - Stage 2 (consistency): a First-Law residual above threshold means the
//   thermodynamic bookkeeping of the configuration is broken.
//
// Both stages are evaluated unconditionally so a caller sees every
// applicable reason at once, in stage order (coverage before First Law).
// REJECT iff at least one stage failed; a pass carries exactly one
// informational reason.
//
// χ is accepted and echoed but never gates the decision: the thresholds
// are coupling-independent for now, and the parameter is reserved for
// coupling-dependent screening later. Keep it that way.
pub fn triage(
    gate_average: f64,
    chi: f64,
    first_law_residual: f64,
    thresholds: TriageThresholds,
) -> TriageResult {
    let mut reasons: Vec<String> = Vec::new();

    // Stage 1: gate coverage
    if gate_average < thresholds.gate {
        reasons.push(format!(
            "Gate coverage too small: <G>_H = {:.3e} < {:.2}",
            gate_average, thresholds.gate
        ));
    }

    // Stage 2: First Law residual
    if first_law_residual > thresholds.first_law {
        reasons.push(format!(
            "First Law residual too large: R = {:.3e} > {:.2}",
            first_law_residual, thresholds.first_law
        ));
    }

    if reasons.is_empty() {
        TriageResult {
            decision: TriageDecision::Pass,
            reasons: vec![format!(
                "Configuration eligible for the metric solver (chi = {:.3e}).",
                chi
            )],
        }
    } else {
        TriageResult { decision: TriageDecision::Reject, reasons }
    }
}
