//! Circuit analysis for QRE
//!
//! Gantree: L3_Analysis → CircuitAnalyzer
//!
//! Logical depth under maximal parallelism and gate composition counts.

use qre_core::{Circuit, GateCounts, QreResult};
use serde::{Deserialize, Serialize};

/// Structural summary of a circuit
/// Gantree: CircuitAnalysis // 회로 분석 결과
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CircuitAnalysis {
    /// Logical depth (number of parallel layers)
    pub depth: usize,

    /// Upper-cased tag -> count
    pub gate_counts: GateCounts,

    /// Total number of gates
    pub total_gates: usize,

    /// T and TDG gates
    pub t_gate_count: usize,

    /// Gates in the Clifford set
    pub clifford_count: usize,

    /// Gates outside the Clifford set (T/TDG included)
    pub non_clifford_count: usize,

    /// Gates with exactly two operands
    pub two_qubit_count: usize,

    /// Gates with more than two operands
    pub multi_qubit_count: usize,
}

impl CircuitAnalysis {
    /// True when every gate is Clifford (vacuously true for no gates)
    pub fn is_clifford_only(&self) -> bool {
        self.clifford_count == self.total_gates
    }

    /// Average gates per layer
    pub fn parallelism(&self) -> f64 {
        if self.depth == 0 {
            0.0
        } else {
            self.total_gates as f64 / self.depth as f64
        }
    }
}

/// Analyze a circuit, failing on out-of-range qubit references
/// Gantree: analyze(circuit) -> Result<CircuitAnalysis> // 회로 분석
pub fn analyze(circuit: &Circuit) -> QreResult<CircuitAnalysis> {
    circuit.validate()?;

    let mut analysis = CircuitAnalysis {
        depth: logical_depth(circuit),
        total_gates: circuit.gate_count(),
        ..Default::default()
    };

    for gate in circuit.gates() {
        let tag = gate.tag();
        if qre_core::estimation::is_t_gate(&tag) {
            analysis.t_gate_count += 1;
        }
        if qre_core::estimation::is_clifford(&tag) {
            analysis.clifford_count += 1;
        } else {
            analysis.non_clifford_count += 1;
        }
        match gate.arity() {
            2 => analysis.two_qubit_count += 1,
            n if n > 2 => analysis.multi_qubit_count += 1,
            _ => {}
        }
        *analysis.gate_counts.entry(tag).or_insert(0) += 1;
    }

    Ok(analysis)
}

/// Logical depth by per-qubit layer tracking
///
/// Assumes every operand is in range; call through `analyze` for checked input.
fn logical_depth(circuit: &Circuit) -> usize {
    let mut finish_layer = vec![0usize; circuit.num_qubits()];
    let mut depth = 0;

    for gate in circuit.gates() {
        let start = gate
            .qubits
            .iter()
            .map(|&q| finish_layer[q])
            .max()
            .unwrap_or(0);
        for &q in &gate.qubits {
            finish_layer[q] = start + 1;
        }
        depth = depth.max(start + 1);
    }

    depth
}

// ============================================================================
// Tests
// ============================================================================
