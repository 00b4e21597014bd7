//! Fault-tolerant overhead estimation for QRE
//!
//! Gantree: L5_Estimation → FaultToleranceEstimator
//!
//! Surface Code model:
//!
//! ```text
//! p_L ≈ A (p / p_th)^((d+1)/2)   =>   d = ceil(2 ln(p_L/A) / ln(p/p_th) - 1), odd, >= 3
//! physical per logical = 2d²
//! total physical       = ceil(L · 2d² · 1.5) + ceil(0.25 L) if T > 0
//! logical cycle        = 5d · t_2q
//! ```
//!
//! At or above threshold every derived quantity is `+∞`; that is a result,
//! not an error.

use qre_core::surface_code::{
    self, CODE_NAME, CONSTANT_FACTOR_A, DISTILLATION_OVERHEAD, DISTILLATION_QUBIT_FRACTION,
    MIN_DISTANCE, ROUTING_OVERHEAD_FACTOR, THRESHOLD_ERROR_RATE,
};
use qre_core::{resolve, Architecture, Nanoseconds};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surface Code resource record
/// Gantree: FaultToleranceResult // 결함 허용 자원
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultToleranceResult {
    /// Error-correcting code
    pub code_name: String,

    /// Requested logical error rate
    pub target_logical_error_rate: f64,

    /// Physical (two-qubit) error rate used
    pub physical_error_rate: f64,

    /// Code distance (`+∞` when infeasible)
    pub code_distance: f64,

    /// Logical qubits to encode
    pub logical_qubits: usize,

    /// 2d²
    pub physical_qubits_per_logical: f64,

    /// Total physical qubits including routing and distillation
    pub total_physical_qubits: f64,

    /// Physical qubits per logical qubit including routing
    pub error_correction_overhead_factor: f64,

    /// Duration of one logical cycle
    pub logical_cycle_time_ns: Nanoseconds,

    /// Logical circuit depth
    pub logical_depth: usize,

    /// depth × logical cycle
    pub total_logical_execution_time_ns: Nanoseconds,

    /// Magic states (one per T gate)
    pub resource_state_count: f64,

    /// Flat distillation overhead factor
    pub distillation_overhead: f64,
}

impl FaultToleranceResult {
    /// Check whether the code can suppress errors on this device
    pub fn is_feasible(&self) -> bool {
        self.code_distance.is_finite()
    }

    fn infeasible(
        logical_qubits: usize,
        logical_depth: usize,
        physical_error_rate: f64,
        target: f64,
    ) -> Self {
        Self {
            code_name: CODE_NAME.to_string(),
            target_logical_error_rate: target,
            physical_error_rate,
            code_distance: f64::INFINITY,
            logical_qubits,
            physical_qubits_per_logical: f64::INFINITY,
            total_physical_qubits: f64::INFINITY,
            error_correction_overhead_factor: f64::INFINITY,
            logical_cycle_time_ns: f64::INFINITY,
            logical_depth,
            total_logical_execution_time_ns: f64::INFINITY,
            resource_state_count: f64::INFINITY,
            distillation_overhead: f64::INFINITY,
        }
    }
}

impl fmt::Display for FaultToleranceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_feasible() {
            write!(
                f,
                "{}(d={}, {} logical -> {} physical)",
                self.code_name, self.code_distance, self.logical_qubits, self.total_physical_qubits
            )
        } else {
            write!(f, "{}(infeasible at p={})", self.code_name, self.physical_error_rate)
        }
    }
}

/// Required code distance, `None` when the code cannot reach the target
pub fn code_distance(physical_error_rate: f64, target_logical_error_rate: f64) -> Option<f64> {
    if physical_error_rate >= THRESHOLD_ERROR_RATE || target_logical_error_rate <= 0.0 {
        return None;
    }
    let min = MIN_DISTANCE as f64;
    // A noiseless device needs no more than the smallest code
    if physical_error_rate <= 0.0 {
        return Some(min);
    }

    let ratio = (target_logical_error_rate / CONSTANT_FACTOR_A).ln()
        / (physical_error_rate / THRESHOLD_ERROR_RATE).ln();
    let mut d = (2.0 * ratio - 1.0).ceil();
    if !d.is_finite() {
        return None;
    }
    if d % 2.0 == 0.0 {
        d += 1.0;
    }
    Some(d.max(min))
}

/// Estimate Surface Code resources
/// Gantree: estimate_fault_tolerant_resources(L,T,depth,arch,target) -> FaultToleranceResult // 결함 허용 추정
pub fn estimate_fault_tolerant_resources(
    logical_qubits: usize,
    t_gate_count: usize,
    logical_depth: usize,
    arch: &Architecture,
    target_logical_error_rate: f64,
) -> FaultToleranceResult {
    let p = resolve::two_qubit_error(arch);

    let Some(d) = code_distance(p, target_logical_error_rate) else {
        log::debug!(
            "Surface Code infeasible on {}: p = {} (threshold {})",
            arch.name,
            p,
            THRESHOLD_ERROR_RATE
        );
        return FaultToleranceResult::infeasible(
            logical_qubits,
            logical_depth,
            p,
            target_logical_error_rate,
        );
    };

    let per_logical = surface_code::physical_per_logical(d);
    let mut total = (logical_qubits as f64 * per_logical * ROUTING_OVERHEAD_FACTOR).ceil();
    if t_gate_count > 0 {
        total += (DISTILLATION_QUBIT_FRACTION * logical_qubits as f64).ceil();
    }

    let cycle = surface_code::cycle_factor(d) * resolve::two_qubit_duration(arch);

    FaultToleranceResult {
        code_name: CODE_NAME.to_string(),
        target_logical_error_rate,
        physical_error_rate: p,
        code_distance: d,
        logical_qubits,
        physical_qubits_per_logical: per_logical,
        total_physical_qubits: total,
        error_correction_overhead_factor: per_logical * ROUTING_OVERHEAD_FACTOR,
        logical_cycle_time_ns: cycle,
        logical_depth,
        total_logical_execution_time_ns: logical_depth as f64 * cycle,
        resource_state_count: t_gate_count as f64,
        distillation_overhead: if t_gate_count > 0 {
            DISTILLATION_OVERHEAD
        } else {
            1.0
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
