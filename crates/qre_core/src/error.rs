//! Error types for QRE
//!
//! Gantree: L0_Foundation → Errors
//!
//! Failures surfaced by the estimation engine. Infeasible estimates
//! (circuit wider than the device, physical error rate above the Surface
//! Code threshold) are reported as sentinel values, never as errors.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for QRE
/// Gantree: QreError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QreError {
    // ========================================================================
    // Circuit Errors
    // ========================================================================
    /// Gate references a qubit the circuit does not declare
    /// Gantree: QubitOutOfRange{gate,q,n} // 큐비트 범위
    #[error("Gate '{gate_id}' acts on qubit {qubit}, out of range for circuit with {num_qubits} qubits")]
    QubitOutOfRange {
        gate_id: String,
        qubit: usize,
        num_qubits: usize,
    },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Probability value out of range [0, 1]
    #[error("Invalid probability {value} for {what}: must be in range [0, 1]")]
    InvalidProbability { what: String, value: f64 },

    /// Durations and coherence times must be strictly positive
    #[error("Invalid duration {value} for {what}: must be positive")]
    InvalidDuration { what: String, value: f64 },

    /// Invalid T2 value (must be <= 2*T1)
    #[error("Invalid T2 for qubit {qubit} ({t2_us:.2}µs): must be <= 2*T1 ({t1_us:.2}µs)")]
    InvalidT2 { qubit: usize, t2_us: f64, t1_us: f64 },

    /// Calibration vector has neither one entry nor one per qubit
    #[error("{what} has {len} entries; expected 1 or {num_qubits}")]
    InvalidCalibrationLength {
        what: String,
        len: usize,
        num_qubits: usize,
    },

    /// Malformed custom connectivity
    #[error("Invalid connectivity: {0}")]
    InvalidConnectivity(String),

    /// Estimation option outside its domain
    #[error("Invalid estimation option: {0}")]
    InvalidOption(String),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type alias for QRE operations
/// Gantree: QreResult<T> // type alias
pub type QreResult<T> = Result<T, QreError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for QreError {
    fn from(err: serde_json::Error) -> Self {
        QreError::JsonError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl QreError {
    /// Check if error is a validation error (architecture or options)
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            QreError::InvalidProbability { .. }
                | QreError::InvalidDuration { .. }
                | QreError::InvalidT2 { .. }
                | QreError::InvalidCalibrationLength { .. }
                | QreError::InvalidConnectivity(_)
                | QreError::InvalidOption(_)
        )
    }

    /// Check if error is a circuit error
    pub fn is_circuit_error(&self) -> bool {
        matches!(self, QreError::QubitOutOfRange { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_out_of_range_display() {
        let err = QreError::QubitOutOfRange {
            gate_id: "x_0".into(),
            qubit: 5,
            num_qubits: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("x_0"));
        assert!(msg.contains('5'));
        assert!(msg.contains('1'));
    }

    #[test]
    fn test_error_categories() {
        let oor = QreError::QubitOutOfRange {
            gate_id: "g".into(),
            qubit: 3,
            num_qubits: 2,
        };
        assert!(oor.is_circuit_error());
        assert!(!oor.is_validation_error());

        let t2 = QreError::InvalidT2 {
            qubit: 0,
            t2_us: 300.0,
            t1_us: 100.0,
        };
        assert!(t2.is_validation_error());
        assert!(!t2.is_circuit_error());
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<f64>("not json").unwrap_err();
        let qre: QreError = err.into();
        assert!(matches!(qre, QreError::JsonError(_)));
    }
}
