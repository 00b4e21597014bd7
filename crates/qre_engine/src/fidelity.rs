//! Circuit fidelity estimation for QRE
//!
//! Gantree: L5_Estimation → FidelityEstimator
//!
//! Success probability as a product of independent factors: gate errors,
//! SWAP errors (three CNOTs each), readout errors and a decoherence decay
//! `exp(-t / T2)`.

use crate::routing::SwapCount;
use crate::timing::estimate_execution_time;
use qre_core::estimation::CNOTS_PER_SWAP;
use qre_core::{resolve, Architecture, Circuit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest contributor to circuit error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorSource {
    /// Gate errors of the circuit itself
    Gates,
    /// Errors of inserted SWAPs
    Swaps,
    /// Readout errors
    Readout,
    /// Decoherence during execution
    Decoherence,
    /// No error at all
    None,
}

impl fmt::Display for ErrorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorSource::Gates => "gate errors",
            ErrorSource::Swaps => "SWAP overhead",
            ErrorSource::Readout => "readout errors",
            ErrorSource::Decoherence => "decoherence",
            ErrorSource::None => "none",
        };
        write!(f, "{}", name)
    }
}

/// Per-source fidelity factors
/// Gantree: FidelityBreakdown // 충실도 분해
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FidelityBreakdown {
    /// Product of `1 - error` over the circuit's gates
    pub gate: f64,
    /// `(1 - cnot_error)^(3·swaps)`
    pub swap: f64,
    /// `(1 - avg_readout_error)^qubits`
    pub readout: f64,
    /// `exp(-t_us / avg_T2_us)`
    pub decoherence: f64,
}

impl FidelityBreakdown {
    /// Overall fidelity, clamped to be non-negative
    pub fn total(&self) -> f64 {
        (self.gate * self.swap * self.readout * self.decoherence).max(0.0)
    }

    /// Source with the smallest factor (first wins on ties)
    pub fn dominant_error_source(&self) -> ErrorSource {
        let factors = [
            (ErrorSource::Gates, self.gate),
            (ErrorSource::Swaps, self.swap),
            (ErrorSource::Readout, self.readout),
            (ErrorSource::Decoherence, self.decoherence),
        ];
        let mut dominant = (ErrorSource::None, 1.0);
        for (source, factor) in factors {
            if factor < dominant.1 {
                dominant = (source, factor);
            }
        }
        dominant.0
    }
}

impl Default for FidelityBreakdown {
    fn default() -> Self {
        Self {
            gate: 1.0,
            swap: 1.0,
            readout: 1.0,
            decoherence: 1.0,
        }
    }
}

/// Compute every fidelity factor
/// Gantree: fidelity_breakdown(c,arch,swaps) -> FidelityBreakdown // 충실도 분해
///
/// The decoherence factor uses the gate-sum execution time. Unbounded SWAPs
/// give a zero SWAP factor.
pub fn fidelity_breakdown(circuit: &Circuit, arch: &Architecture, swaps: SwapCount) -> FidelityBreakdown {
    let gate = circuit
        .gates()
        .iter()
        .map(|g| 1.0 - resolve::gate_error(arch, g))
        .product();

    let swap = match swaps.finite() {
        Some(n) => {
            let per_swap = (1.0 - resolve::cnot_error(arch)).powi(CNOTS_PER_SWAP as i32);
            per_swap.powf(n as f64)
        }
        None => 0.0,
    };

    let readout = (1.0 - arch.avg_readout_error()).powf(circuit.num_qubits() as f64);

    let avg_t2 = arch.avg_t2_us();
    let decoherence = if avg_t2 > 0.0 {
        let time_us = estimate_execution_time(circuit, arch, swaps, None) / 1000.0;
        (-time_us / avg_t2).exp()
    } else {
        1.0
    };

    FidelityBreakdown {
        gate,
        swap,
        readout,
        decoherence,
    }
}

/// Estimate circuit fidelity in [0, 1]
/// Gantree: estimate_fidelity(c,arch,swaps) -> f64 // 충실도 추정
pub fn estimate_fidelity(circuit: &Circuit, arch: &Architecture, swaps: SwapCount) -> f64 {
    fidelity_breakdown(circuit, arch, swaps).total()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qre_core::{CircuitBuilder, Connectivity, GateErrors};

    fn ideal() -> Architecture {
        Architecture::ideal("ideal", 2, Connectivity::AllToAll)
    }

    #[test]
    fn test_single_gate_error() {
        for eps in [1e-4, 1e-3, 0.05] {
            let a = ideal().with_gate_error("X", eps);
            let c = CircuitBuilder::new(1).x(0).build();
            let f = estimate_fidelity(&c, &a, SwapCount::Finite(0));
            assert_relative_eq!(f, 1.0 - eps, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ideal_bell_is_perfect() {
        let c = CircuitBuilder::new(2).h(0).cnot(0, 1).build();
        let b = fidelity_breakdown(&c, &ideal(), SwapCount::Finite(0));
        assert_relative_eq!(b.total(), 1.0);
        assert_eq!(b.dominant_error_source(), ErrorSource::None);
    }

    #[test]
    fn test_fidelity_override() {
        let a = ideal().with_gate_errors(GateErrors::uniform(0.1, 0.1));
        let c = CircuitBuilder::new(1)
            .gate(qre_core::Gate::single("H", 0).with_fidelity(0.999))
            .build();
        assert_relative_eq!(
            estimate_fidelity(&c, &a, SwapCount::Finite(0)),
            0.999,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_swap_and_readout_factors() {
        let a = ideal()
            .with_gate_errors(GateErrors::uniform(0.0, 0.01))
            .with_readout_error(0.02);
        let c = CircuitBuilder::new(2).build();
        let b = fidelity_breakdown(&c, &a, SwapCount::Finite(2));

        assert_relative_eq!(b.swap, 0.99f64.powi(6), epsilon = 1e-12);
        assert_relative_eq!(b.readout, 0.98f64.powi(2), epsilon = 1e-12);
        assert_eq!(b.dominant_error_source(), ErrorSource::Swaps);
    }

    #[test]
    fn test_decoherence_factor() {
        let a = ideal().with_coherence(100.0, 1.0);
        let c = CircuitBuilder::new(1).timed("X", &[0], 1000.0).build();
        let b = fidelity_breakdown(&c, &a, SwapCount::Finite(0));

        // 1000 ns gate + measurement (superconducting preset, 500 ns)
        assert_relative_eq!(b.decoherence, (-1.5f64).exp(), epsilon = 1e-12);
        assert_eq!(b.dominant_error_source(), ErrorSource::Decoherence);
    }

    #[test]
    fn test_unbounded_swaps_zero_fidelity() {
        let c = CircuitBuilder::new(2).cnot(0, 1).build();
        assert_eq!(estimate_fidelity(&c, &ideal(), SwapCount::Unbounded), 0.0);
    }

    #[test]
    fn test_clamped_non_negative() {
        let a = ideal().with_gate_error("X", 1.0);
        let c = CircuitBuilder::new(1).x(0).x(0).x(0).build();
        let f = estimate_fidelity(&c, &a, SwapCount::Finite(0));
        assert!(f >= 0.0);
    }
}
