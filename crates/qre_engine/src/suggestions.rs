//! Optimization suggestions for QRE
//!
//! Gantree: L6_Integration → Suggestions
//!
//! Advisory threshold checks on an assembled result. Nothing else reads
//! these strings.

use crate::result::EstimationResult;
use crate::routing::SwapCount;
use qre_core::Architecture;

/// SWAPs above this share of the gate count are flagged
const SWAP_SHARE_LIMIT: f64 = 0.2;

/// Fidelity below this is flagged
const LOW_FIDELITY: f64 = 0.9;

/// Fidelity below this with T gates suggests fault tolerance
const T_GATE_FIDELITY: f64 = 0.95;

/// Fault-tolerant qubits above this multiple of the device size are flagged
const FT_QUBIT_MULTIPLE: f64 = 50.0;

/// Magic states per T gate above this are flagged
const DISTILLATION_RATIO_LIMIT: f64 = 1.5;

/// Depth above which parallelism is checked
const DEEP_CIRCUIT: usize = 100;

/// Classical memory above this (MB) is flagged
const LARGE_MEMORY_MB: f64 = 4096.0;

/// Build suggestions for a result
/// Gantree: generate_suggestions(result,arch) -> Vec<String> // 최적화 제안
pub fn generate_suggestions(result: &EstimationResult, arch: &Architecture) -> Vec<String> {
    let mut suggestions = Vec::new();
    let analysis = &result.analysis;

    match result.swap_count {
        SwapCount::Unbounded => suggestions.push(format!(
            "Circuit cannot be routed on '{}' ({} qubits needed, {} available or unreachable). \
             Choose a larger or better connected device.",
            arch.name, result.circuit_width, arch.num_qubits
        )),
        SwapCount::Finite(n) if n as f64 > analysis.total_gates as f64 * SWAP_SHARE_LIMIT => {
            suggestions.push(format!(
                "High SWAP overhead ({} SWAPs). Consider circuit re-compilation for '{}' \
                 topology or alternative mappings.",
                n, arch.name
            ))
        }
        SwapCount::Finite(_) => {}
    }

    let depth_limit = arch.constraints.and_then(|c| c.max_circuit_depth);
    if let (Some(depth), Some(max)) = (result.compiled_depth, depth_limit) {
        if depth > max {
            suggestions.push(format!(
                "Compiled depth {} exceeds the {}-layer limit of '{}'. Reduce depth or split \
                 the circuit into shorter jobs.",
                depth, max, arch.name
            ));
        }
    }

    if result.coherence_limited.any() {
        suggestions.push(format!(
            "Execution likely coherence-limited. Aim to reduce circuit depth or use hardware \
             with better coherence. Required T1/T2: ~{:.1}µs.",
            result.required_coherence.t1_us
        ));
    }

    if result.fidelity < LOW_FIDELITY {
        suggestions.push(format!(
            "Low circuit fidelity ({:.1}%). Explore error mitigation or fault-tolerant encoding \
             if high precision is needed.",
            result.fidelity * 100.0
        ));
    }

    match &result.fault_tolerance {
        Some(ft) => {
            if ft.total_physical_qubits.is_finite()
                && ft.total_physical_qubits > arch.num_qubits as f64 * FT_QUBIT_MULTIPLE
            {
                suggestions.push(format!(
                    "Fault-tolerant mode requires very high physical qubit count ({:.0}). \
                     Verify algorithm scale or target error rate.",
                    ft.total_physical_qubits
                ));
            }
            if analysis.t_gate_count > 0
                && ft.resource_state_count.is_finite()
                && ft.resource_state_count / analysis.t_gate_count as f64 > DISTILLATION_RATIO_LIMIT
            {
                suggestions.push(
                    "Significant overhead for magic state distillation. Consider optimizing \
                     T-gate count or different distillation protocols."
                        .to_string(),
                );
            }
        }
        None => {
            if analysis.t_gate_count > 0 && result.fidelity < T_GATE_FIDELITY {
                suggestions.push(format!(
                    "Circuit contains {} T-gates with moderate fidelity. Fault-tolerance might \
                     be necessary for high precision.",
                    analysis.t_gate_count
                ));
            }
        }
    }

    if analysis.depth > DEEP_CIRCUIT
        && analysis.parallelism() < result.circuit_width as f64 / 3.0
    {
        suggestions.push(format!(
            "Circuit is deep ({} layers) with potentially low parallelism. Explore techniques \
             to increase gate concurrency or reduce depth.",
            analysis.depth
        ));
    }

    if let Some(mb) = result.classical.memory_mb {
        if mb > LARGE_MEMORY_MB {
            suggestions.push(format!(
                "State-vector simulation requires significant classical memory (~{:.0} MB). \
                 Consider tensor network methods or partial simulation.",
                mb
            ));
        }
    }

    suggestions
}

// ============================================================================
// Tests
// ============================================================================
