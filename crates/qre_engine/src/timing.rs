//! Execution time and coherence estimation for QRE
//!
//! Gantree: L5_Estimation → TimingEstimator
//!
//! Physical execution time (ns), the coherence it requires and whether the
//! device's average T1/T2 fall short of it.

use crate::routing::SwapCount;
use qre_core::estimation::{CNOTS_PER_SWAP, COHERENCE_SAFETY_FACTOR};
use qre_core::{resolve, Architecture, Circuit, Microseconds, Nanoseconds};
use serde::{Deserialize, Serialize};

/// Coherence times a run needs (µs)
/// Gantree: RequiredCoherence // 필요 코히어런스
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RequiredCoherence {
    /// Required T1 (µs)
    pub t1_us: Microseconds,
    /// Required T2 (µs)
    pub t2_us: Microseconds,
}

impl RequiredCoherence {
    /// Requirement for a given execution time
    /// Gantree: for_time(ns) -> Self // 필요 코히어런스 계산
    pub fn for_time(execution_time_ns: Nanoseconds) -> Self {
        let required = execution_time_ns / 1000.0 * COHERENCE_SAFETY_FACTOR;
        Self {
            t1_us: required,
            t2_us: required,
        }
    }
}

/// Whether the device's average coherence is insufficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoherenceLimits {
    /// Required T1 exceeds average T1
    pub t1: bool,
    /// Required T2 exceeds average T2
    pub t2: bool,
}

impl CoherenceLimits {
    /// Compare a requirement against an architecture's average T1/T2
    pub fn check(required: &RequiredCoherence, arch: &Architecture) -> Self {
        let avg_t1 = arch.avg_t1_us();
        let avg_t2 = arch.avg_t2_us();
        Self {
            t1: avg_t1 > 0.0 && required.t1_us > avg_t1,
            t2: avg_t2 > 0.0 && required.t2_us > avg_t2,
        }
    }

    /// Both flags set (used for unroutable circuits)
    pub fn all() -> Self {
        Self { t1: true, t2: true }
    }

    /// Either flag set
    pub fn any(&self) -> bool {
        self.t1 || self.t2
    }
}

/// Estimate physical execution time in nanoseconds
/// Gantree: estimate_execution_time(c,arch,swaps,depth) -> ns // 실행 시간
///
/// A positive `compiled_depth` uses `depth × two-qubit duration`; otherwise
/// gate durations are summed and each SWAP costs three CNOTs. Both add one
/// measurement per qubit. Unbounded SWAPs give `+∞`.
pub fn estimate_execution_time(
    circuit: &Circuit,
    arch: &Architecture,
    swaps: SwapCount,
    compiled_depth: Option<usize>,
) -> Nanoseconds {
    let Some(swap_count) = swaps.finite() else {
        return f64::INFINITY;
    };

    let readout = circuit.num_qubits() as f64 * resolve::measurement_duration(arch);

    let gates = match compiled_depth {
        Some(depth) if depth > 0 => depth as f64 * resolve::two_qubit_duration(arch),
        _ => {
            let gate_time: f64 = circuit
                .gates()
                .iter()
                .map(|g| resolve::gate_duration(arch, g))
                .sum();
            let swap_time =
                swap_count as f64 * CNOTS_PER_SWAP as f64 * resolve::cnot_duration(arch);
            gate_time + swap_time
        }
    };

    gates + readout
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qre_core::{CircuitBuilder, Connectivity, GateTimings};

    fn arch() -> Architecture {
        Architecture::ideal("t", 3, Connectivity::Linear)
            .with_gate_timings(GateTimings::uniform(50.0, 300.0, 1000.0))
            .with_coherence(100.0, 80.0)
    }

    #[test]
    fn test_sequential_sum() {
        let c = CircuitBuilder::new(2).h(0).cnot(0, 1).build();
        let t = estimate_execution_time(&c, &arch(), SwapCount::Finite(0), None);
        assert_relative_eq!(t, 50.0 + 300.0 + 2.0 * 1000.0);
    }

    #[test]
    fn test_swaps_cost_three_cnots() {
        let c = CircuitBuilder::new(2).cnot(0, 1).build();
        let a = arch().with_gate_time("CNOT", 200.0);
        let t = estimate_execution_time(&c, &a, SwapCount::Finite(2), None);
        assert_relative_eq!(t, 200.0 + 2.0 * 3.0 * 200.0 + 2.0 * 1000.0);
    }

    #[test]
    fn test_gate_duration_override() {
        let c = CircuitBuilder::new(1).timed("X", &[0], 7.0).build();
        let t = estimate_execution_time(&c, &arch(), SwapCount::Finite(0), None);
        assert_relative_eq!(t, 7.0 + 1000.0);
    }

    #[test]
    fn test_depth_based() {
        let c = CircuitBuilder::new(3).h(0).h(1).h(2).build();
        let t = estimate_execution_time(&c, &arch(), SwapCount::Finite(5), Some(4));
        assert_relative_eq!(t, 4.0 * 300.0 + 3.0 * 1000.0);

        // Zero depth behaves like no depth
        let zero = estimate_execution_time(&c, &arch(), SwapCount::Finite(0), Some(0));
        let none = estimate_execution_time(&c, &arch(), SwapCount::Finite(0), None);
        assert_relative_eq!(zero, none);
    }

    #[test]
    fn test_unbounded_swaps() {
        let c = CircuitBuilder::new(2).cnot(0, 1).build();
        let t = estimate_execution_time(&c, &arch(), SwapCount::Unbounded, None);
        assert!(t.is_infinite());
    }

    #[test]
    fn test_required_coherence() {
        let req = RequiredCoherence::for_time(20_000.0);
        assert_relative_eq!(req.t1_us, 100.0);
        assert_relative_eq!(req.t2_us, 100.0);

        let limits = CoherenceLimits::check(&req, &arch());
        assert!(!limits.t1);
        assert!(limits.t2);
        assert!(limits.any());
    }

    #[test]
    fn test_infinite_coherence_never_limited() {
        let a = arch().with_coherence(f64::INFINITY, f64::INFINITY);
        let limits = CoherenceLimits::check(&RequiredCoherence::for_time(1e12), &a);
        assert_eq!(limits, CoherenceLimits::default());
    }
}
