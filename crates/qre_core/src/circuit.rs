//! Quantum circuit structure for QRE
//!
//! Gantree: L1_Circuit → Circuit
//!
//! A circuit is immutable input to the estimators. Construction does not
//! check qubit indices; `validate` (called by the analyzer) does.

use crate::error::{QreError, QreResult};
use crate::gate::Gate;
use crate::types::QubitId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantum circuit
/// Gantree: Circuit // 회로 구조체
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Circuit identifier
    #[serde(default)]
    id: String,

    /// Human-readable name
    #[serde(default)]
    name: String,

    /// Number of qubits
    /// Gantree: num_qubits: usize // 큐비트 수
    #[serde(rename = "qubits")]
    num_qubits: usize,

    /// Gate sequence
    /// Gantree: gates: Vec<Gate> // 게이트 목록
    gates: Vec<Gate>,
}

impl Circuit {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new empty circuit
    /// Gantree: new(n) -> Self // 생성자
    pub fn new(num_qubits: usize) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            num_qubits,
            gates: Vec::new(),
        }
    }

    /// Create a circuit with a name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.to_lowercase().replace(' ', "_"),
            name,
            num_qubits,
            gates: Vec::new(),
        }
    }

    /// Create from a vector of gates (not validated)
    pub fn from_gates(num_qubits: usize, gates: Vec<Gate>) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            num_qubits,
            gates,
        }
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> QreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> QreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // ========================================================================
    // Basic Operations
    // ========================================================================

    /// Append a gate; an empty id is replaced by `<tag>_<index>`
    /// Gantree: push_gate(&mut, Gate) // 게이트 추가
    pub fn push_gate(&mut self, mut gate: Gate) {
        if gate.id.is_empty() {
            gate.id = format!("{}_{}", gate.kind.to_lowercase(), self.gates.len());
        }
        self.gates.push(gate);
    }

    /// Get circuit id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Set circuit id
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Get circuit name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set circuit name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get gates
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Get total gate count
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Check if circuit is empty
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Logical operand pairs of the two-qubit gates, in circuit order
    pub fn two_qubit_pairs(&self) -> impl Iterator<Item = (QubitId, QubitId)> + '_ {
        self.gates
            .iter()
            .filter(|g| g.is_two_qubit())
            .map(|g| (g.qubits[0], g.qubits[1]))
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check that every gate operand is below `num_qubits`
    /// Gantree: validate(&self) -> Result // 검증
    pub fn validate(&self) -> QreResult<()> {
        for gate in &self.gates {
            if let Some(&qubit) = gate.qubits.iter().find(|&&q| q >= self.num_qubits) {
                return Err(QreError::QubitOutOfRange {
                    gate_id: gate.id.clone(),
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
        }
        Ok(())
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.name.is_empty() {
            "Circuit"
        } else {
            self.name.as_str()
        };
        writeln!(
            f,
            "{} ({} qubits, {} gates)",
            label,
            self.num_qubits,
            self.gates.len()
        )?;
        for gate in &self.gates {
            writeln!(f, "  {}", gate)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
