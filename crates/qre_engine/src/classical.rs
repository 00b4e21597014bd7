//! Classical simulation cost for QRE
//!
//! Gantree: L5_Estimation → ClassicalEstimator
//!
//! Complexity tag and memory footprint for simulating a circuit classically.
//! Clifford mode applies only to all-Clifford circuits and otherwise falls
//! back to state-vector. Memory beyond `f64` range is reported as `+∞`.

use qre_core::Circuit;
use qre_core::estimation::{BYTES_PER_AMPLITUDE, BYTES_PER_MB, BYTES_PER_TABLEAU_ENTRY};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classical simulation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SimulationMode {
    /// Full state vector
    #[default]
    StateVector,
    /// Tensor-network contraction
    TensorNetwork,
    /// Stabilizer (Gottesman-Knill)
    Clifford,
}

impl SimulationMode {
    /// Name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            SimulationMode::StateVector => "state-vector",
            SimulationMode::TensorNetwork => "tensor-network",
            SimulationMode::Clifford => "clifford",
        }
    }
}

impl fmt::Display for SimulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classical simulation resources
/// Gantree: ClassicalResources // 고전 자원
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassicalResources {
    /// Mode actually used (after the Clifford fallback)
    pub mode: SimulationMode,

    /// Asymptotic cost tag
    pub complexity: String,

    /// Memory in MB, `None` when not computable
    pub memory_mb: Option<f64>,
}

const CLIFFORD_COMPLEXITY: &str = "O(poly(N_q, G_total)) approx O(N_q^2 * G_total)";
const STATE_VECTOR_COMPLEXITY: &str = "O(G_total * 2^N_q)";
const TENSOR_NETWORK_COMPLEXITY: &str =
    "Varies (e.g., O(poly(N_q) * D_max^k * G_total) for 1D-like)";

/// Estimate classical simulation resources
/// Gantree: estimate_classical_resources(c,mode) -> ClassicalResources // 고전 자원 추정
pub fn estimate_classical_resources(circuit: &Circuit, mode: SimulationMode) -> ClassicalResources {
    let n = circuit.num_qubits() as f64;
    let clifford_only = circuit.gates().iter().all(|g| g.is_clifford());

    match mode {
        SimulationMode::Clifford if clifford_only => ClassicalResources {
            mode,
            complexity: CLIFFORD_COMPLEXITY.to_string(),
            memory_mb: Some((n * n * BYTES_PER_TABLEAU_ENTRY / BYTES_PER_MB).ceil() + 1.0),
        },
        SimulationMode::TensorNetwork => ClassicalResources {
            mode,
            complexity: TENSOR_NETWORK_COMPLEXITY.to_string(),
            memory_mb: None,
        },
        _ => ClassicalResources {
            mode: SimulationMode::StateVector,
            complexity: STATE_VECTOR_COMPLEXITY.to_string(),
            memory_mb: Some((2f64.powf(n) * BYTES_PER_AMPLITUDE / BYTES_PER_MB).ceil()),
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
