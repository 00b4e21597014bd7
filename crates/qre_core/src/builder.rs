//! Circuit builder for QRE
//!
//! Gantree: L1_Circuit → CircuitBuilder
//!
//! Fluent builder for constructing circuits with the common gate tags.

use crate::circuit::Circuit;
use crate::gate::Gate;
use crate::types::{Nanoseconds, QubitId};

/// Fluent circuit builder (consuming self pattern)
/// Gantree: CircuitBuilder // 빌더 패턴
pub struct CircuitBuilder {
    /// Internal circuit being built
    circuit: Circuit,
}

impl CircuitBuilder {
    // ========================================================================
    // Constructor
    // ========================================================================

    /// Create a new circuit builder
    /// Gantree: new(n) -> Self // 생성자
    pub fn new(num_qubits: usize) -> Self {
        Self {
            circuit: Circuit::new(num_qubits),
        }
    }

    /// Create with circuit name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            circuit: Circuit::with_name(num_qubits, name),
        }
    }

    // ========================================================================
    // Generic
    // ========================================================================

    /// Append an arbitrary gate
    pub fn gate(mut self, gate: Gate) -> Self {
        self.circuit.push_gate(gate);
        self
    }

    /// Append a gate by tag and operands
    pub fn op(self, kind: &str, qubits: &[QubitId]) -> Self {
        self.gate(Gate::new(kind, qubits.to_vec()))
    }

    /// Append a gate with a duration override
    pub fn timed(self, kind: &str, qubits: &[QubitId], duration_ns: Nanoseconds) -> Self {
        self.gate(Gate::new(kind, qubits.to_vec()).with_duration(duration_ns))
    }

    // ========================================================================
    // Single-Qubit Gates
    // ========================================================================

    /// Add Hadamard gate
    pub fn h(self, qubit: QubitId) -> Self {
        self.op("H", &[qubit])
    }

    /// Add Pauli-X gate
    pub fn x(self, qubit: QubitId) -> Self {
        self.op("X", &[qubit])
    }

    /// Add Pauli-Y gate
    pub fn y(self, qubit: QubitId) -> Self {
        self.op("Y", &[qubit])
    }

    /// Add Pauli-Z gate
    pub fn z(self, qubit: QubitId) -> Self {
        self.op("Z", &[qubit])
    }

    /// Add S gate
    pub fn s(self, qubit: QubitId) -> Self {
        self.op("S", &[qubit])
    }

    /// Add S-dagger gate
    pub fn sdg(self, qubit: QubitId) -> Self {
        self.op("SDG", &[qubit])
    }

    /// Add T gate
    pub fn t(self, qubit: QubitId) -> Self {
        self.op("T", &[qubit])
    }

    /// Add T-dagger gate
    pub fn tdg(self, qubit: QubitId) -> Self {
        self.op("TDG", &[qubit])
    }

    /// Add Rx rotation
    pub fn rx(self, qubit: QubitId, angle: f64) -> Self {
        self.gate(Gate::single("RX", qubit).with_parameters(vec![angle]))
    }

    /// Add Ry rotation
    pub fn ry(self, qubit: QubitId, angle: f64) -> Self {
        self.gate(Gate::single("RY", qubit).with_parameters(vec![angle]))
    }

    /// Add Rz rotation
    pub fn rz(self, qubit: QubitId, angle: f64) -> Self {
        self.gate(Gate::single("RZ", qubit).with_parameters(vec![angle]))
    }

    // ========================================================================
    // Multi-Qubit Gates
    // ========================================================================

    /// Add CNOT gate
    pub fn cnot(self, control: QubitId, target: QubitId) -> Self {
        self.op("CNOT", &[control, target])
    }

    /// Add CZ gate
    pub fn cz(self, control: QubitId, target: QubitId) -> Self {
        self.op("CZ", &[control, target])
    }

    /// Add SWAP gate
    pub fn swap(self, a: QubitId, b: QubitId) -> Self {
        self.op("SWAP", &[a, b])
    }

    /// Add Toffoli gate
    pub fn ccx(self, c1: QubitId, c2: QubitId, target: QubitId) -> Self {
        self.op("CCX", &[c1, c2, target])
    }

    // ========================================================================
    // Layers
    // ========================================================================

    /// Hadamard on every qubit
    pub fn h_layer(mut self) -> Self {
        for q in 0..self.circuit.num_qubits() {
            self = self.h(q);
        }
        self
    }

    /// CNOT chain 0→1→…→n-1
    pub fn cx_chain(mut self) -> Self {
        for q in 0..self.circuit.num_qubits().saturating_sub(1) {
            self = self.cnot(q, q + 1);
        }
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Finish building
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_builder() {
        let c = CircuitBuilder::with_name(2, "Bell").h(0).cnot(0, 1).build();
        assert_eq!(c.num_qubits(), 2);
        assert_eq!(c.gate_count(), 2);
        assert_eq!(c.gates()[1].kind, "CNOT");
        assert_eq!(c.gates()[1].id, "cnot_1");
    }

    #[test]
    fn test_layers() {
        let c = CircuitBuilder::new(4).h_layer().cx_chain().build();
        assert_eq!(c.gate_count(), 4 + 3);
        assert_eq!(c.two_qubit_pairs().count(), 3);
    }

    #[test]
    fn test_rotation_parameters() {
        let c = CircuitBuilder::new(1).rz(0, 0.25).build();
        assert_eq!(c.gates()[0].parameters, vec![0.25]);
    }

    #[test]
    fn test_timed_gate() {
        let c = CircuitBuilder::new(1).timed("X", &[0], 42.0).build();
        assert_eq!(c.gates()[0].duration_ns, Some(42.0));
    }
}
