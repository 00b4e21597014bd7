//! Estimation result for QRE
//!
//! Gantree: L6_Integration → EstimationResult
//!
//! One record per `estimate_all` call. Infinite values (unroutable circuits,
//! Surface Code above threshold) serialize to JSON as `null`.

use crate::analyzer::CircuitAnalysis;
use crate::classical::ClassicalResources;
use crate::fault_tolerance::FaultToleranceResult;
use crate::fidelity::{ErrorSource, FidelityBreakdown};
use crate::routing::{SwapCount, SwapStrategy};
use crate::timing::{CoherenceLimits, RequiredCoherence};
use chrono::{DateTime, Utc};
use qre_core::{Nanoseconds, QreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Full resource estimate for one circuit on one architecture
/// Gantree: EstimationResult // 추정 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    // ========================================================================
    // Identification
    // ========================================================================
    /// Circuit id
    pub circuit_id: String,

    /// Circuit name
    pub circuit_name: String,

    /// Architecture name
    pub architecture_name: String,

    // ========================================================================
    // Logical Structure
    // ========================================================================
    /// Number of logical qubits
    pub circuit_width: usize,

    /// Depth and gate composition
    #[serde(flatten)]
    pub analysis: CircuitAnalysis,

    // ========================================================================
    // Routing
    // ========================================================================
    /// Strategy used for the SWAP estimate
    pub swap_strategy: SwapStrategy,

    /// Estimated SWAPs
    pub swap_count: SwapCount,

    /// Depth after SWAP insertion (`None` when unroutable)
    pub compiled_depth: Option<usize>,

    // ========================================================================
    // Physical Execution
    // ========================================================================
    /// Physical execution time
    pub execution_time_ns: Nanoseconds,

    /// Coherence the run requires
    pub required_coherence: RequiredCoherence,

    /// Whether average T1/T2 fall short
    pub coherence_limited: CoherenceLimits,

    /// Overall success probability
    pub fidelity: f64,

    /// 1 - fidelity
    pub error_rate: f64,

    /// Per-source fidelity factors
    pub fidelity_breakdown: FidelityBreakdown,

    /// Smallest fidelity factor
    pub dominant_error_source: ErrorSource,

    /// Quantum volume proxy
    pub quantum_volume: u64,

    // ========================================================================
    // Optional Analyses
    // ========================================================================
    /// Classical simulation cost
    pub classical: ClassicalResources,

    /// Surface Code estimate (when requested)
    pub fault_tolerance: Option<FaultToleranceResult>,

    /// Advisory notes
    pub suggestions: Vec<String>,

    /// When the estimate was produced
    pub timestamp: DateTime<Utc>,
}

impl EstimationResult {
    /// Check whether the circuit could be placed and routed
    pub fn is_routable(&self) -> bool {
        !self.swap_count.is_unbounded()
    }

    /// Execution time in seconds
    pub fn execution_time_s(&self) -> f64 {
        self.execution_time_ns * 1e-9
    }

    /// Compare everything except the timestamp
    pub fn same_estimate(&self, other: &Self) -> bool {
        let mut other = other.clone();
        other.timestamp = self.timestamp;
        *self == other
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> QreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Multi-line summary
    pub fn summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!(
            "Estimate: {} on {}\n",
            if self.circuit_name.is_empty() {
                "circuit"
            } else {
                &self.circuit_name
            },
            self.architecture_name
        ));
        s.push_str(&format!(
            "  Width/Depth: {} qubits, depth {} ({} gates)\n",
            self.circuit_width, self.analysis.depth, self.analysis.total_gates
        ));
        s.push_str(&format!(
            "  SWAPs ({}): {}\n",
            self.swap_strategy, self.swap_count
        ));
        s.push_str(&format!(
            "  Execution: {:.1} µs\n",
            self.execution_time_ns / 1000.0
        ));
        s.push_str(&format!(
            "  Fidelity: {:.4} (dominant: {})\n",
            self.fidelity, self.dominant_error_source
        ));
        s.push_str(&format!("  Quantum volume: {}\n", self.quantum_volume));
        if let Some(ft) = &self.fault_tolerance {
            s.push_str(&format!("  Fault tolerance: {}\n", ft));
        }
        for suggestion in &self.suggestions {
            s.push_str(&format!("  - {}\n", suggestion));
        }
        s
    }
}

impl fmt::Display for EstimationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EstimationResult({}, depth={}, swaps={}, fidelity={:.4})",
            self.architecture_name, self.analysis.depth, self.swap_count, self.fidelity
        )
    }
}
