//! Quantum gate definitions for QRE
//!
//! Gantree: L1_Circuit → Gate
//!
//! Gates are identified by a free-form tag ("H", "CNOT", "RZ", ...) so that
//! any vendor gate set can be described. Tags compare case-insensitively.

use crate::types::{Nanoseconds, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single gate operation
/// Gantree: Gate // 게이트 구조체
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Identifier, unique within its circuit
    pub id: String,

    /// Gate tag, e.g. "H" or "CNOT"
    /// Gantree: kind: String // 게이트 종류
    #[serde(rename = "type")]
    pub kind: String,

    /// Operand qubits in order (control first for controlled gates)
    /// Gantree: qubits: Vec<QubitId> // 대상 큐비트
    pub qubits: Vec<QubitId>,

    /// Rotation angles or other real parameters
    #[serde(default)]
    pub parameters: Vec<f64>,

    /// Duration override for this gate instance
    #[serde(default)]
    pub duration_ns: Option<Nanoseconds>,

    /// Fidelity override for this gate instance, in [0, 1]
    #[serde(default)]
    pub fidelity: Option<f64>,
}

impl Gate {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a gate with an empty id
    pub fn new(kind: impl Into<String>, qubits: Vec<QubitId>) -> Self {
        Self {
            id: String::new(),
            kind: kind.into(),
            qubits,
            parameters: Vec::new(),
            duration_ns: None,
            fidelity: None,
        }
    }

    /// Single-qubit gate shorthand
    pub fn single(kind: impl Into<String>, qubit: QubitId) -> Self {
        Self::new(kind, vec![qubit])
    }

    /// Two-qubit gate shorthand
    pub fn two(kind: impl Into<String>, a: QubitId, b: QubitId) -> Self {
        Self::new(kind, vec![a, b])
    }

    /// Set the gate id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set gate parameters
    pub fn with_parameters(mut self, parameters: Vec<f64>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Override the duration of this gate instance
    pub fn with_duration(mut self, duration_ns: Nanoseconds) -> Self {
        self.duration_ns = Some(duration_ns);
        self
    }

    /// Override the fidelity of this gate instance
    pub fn with_fidelity(mut self, fidelity: f64) -> Self {
        self.fidelity = Some(fidelity);
        self
    }

    // ========================================================================
    // Gate Properties
    // ========================================================================

    /// Upper-cased tag used for every table lookup
    /// Gantree: tag(&self) -> String // 대문자 태그
    pub fn tag(&self) -> String {
        self.kind.to_ascii_uppercase()
    }

    /// Number of operand qubits
    pub fn arity(&self) -> usize {
        self.qubits.len()
    }

    /// Check if gate acts on exactly two qubits
    pub fn is_two_qubit(&self) -> bool {
        self.qubits.len() == 2
    }

    /// Check if gate acts on more than two qubits
    pub fn is_multi_qubit(&self) -> bool {
        self.qubits.len() > 2
    }

    /// Check if the tag is in the Clifford set
    pub fn is_clifford(&self) -> bool {
        crate::constants::estimation::is_clifford(&self.tag())
    }

    /// Check if the tag is T or T-dagger
    pub fn is_t_gate(&self) -> bool {
        crate::constants::estimation::is_t_gate(&self.tag())
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let qubits: Vec<String> = self.qubits.iter().map(|q| format!("q[{}]", q)).collect();
        if self.parameters.is_empty() {
            write!(f, "{} {}", self.kind.to_lowercase(), qubits.join(", "))
        } else {
            let params: Vec<String> = self.parameters.iter().map(|p| format!("{:.4}", p)).collect();
            write!(
                f,
                "{}({}) {}",
                self.kind.to_lowercase(),
                params.join(", "),
                qubits.join(", ")
            )
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
