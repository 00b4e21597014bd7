//! Parameter resolution for QRE
//!
//! Gantree: L2_Hardware → Resolve
//!
//! Looks up a gate's error rate or duration on an architecture. Every
//! lookup follows the same chain:
//!
//! 1. the gate's own override (fidelity / duration)
//! 2. the architecture's per-tag entry
//! 3. the single-/two-qubit category entry (by operand count)
//! 4. a fixed default, logged as a warning

use crate::architecture::Architecture;
use crate::constants::estimation::{DEFAULT_GATE_DURATION_NS, DEFAULT_GATE_ERROR};
use crate::gate::Gate;
use crate::types::Nanoseconds;

/// Per-tag key for measurement durations
const MEASUREMENT_TAG: &str = "MEASUREMENT";

/// Tag used for the CNOTs a SWAP decomposes into
const CNOT_TAG: &str = "CNOT";

// ============================================================================
// Error Rates
// ============================================================================

/// Effective error of one gate
/// Gantree: gate_error(arch,gate) -> f64 // 게이트 에러
pub fn gate_error(arch: &Architecture, gate: &Gate) -> f64 {
    match gate.fidelity {
        Some(fidelity) => 1.0 - fidelity,
        None => tag_error(arch, &gate.tag(), gate.arity()),
    }
}

/// Error rate for a tag acting on `arity` qubits
pub fn tag_error(arch: &Architecture, tag: &str, arity: usize) -> f64 {
    if let Some(error) = arch.gate_errors.get(tag) {
        return error;
    }
    let category = if arity >= 2 {
        arch.gate_errors.two_qubit
    } else {
        arch.gate_errors.single_qubit
    };
    category.unwrap_or_else(|| {
        log::warn!(
            "No error rate for gate '{}' on {}, using default {}",
            tag,
            arch.name,
            DEFAULT_GATE_ERROR
        );
        DEFAULT_GATE_ERROR
    })
}

/// Single-qubit category error
pub fn single_qubit_error(arch: &Architecture) -> f64 {
    arch.gate_errors.single_qubit.unwrap_or_else(|| {
        log::warn!("No single-qubit error rate on {}, using default", arch.name);
        DEFAULT_GATE_ERROR
    })
}

/// Two-qubit category error (the physical error rate of the device)
pub fn two_qubit_error(arch: &Architecture) -> f64 {
    arch.gate_errors.two_qubit.unwrap_or_else(|| {
        log::warn!("No two-qubit error rate on {}, using default", arch.name);
        DEFAULT_GATE_ERROR
    })
}

/// Error of one CNOT
pub fn cnot_error(arch: &Architecture) -> f64 {
    tag_error(arch, CNOT_TAG, 2)
}

// ============================================================================
// Durations
// ============================================================================

/// Effective duration of one gate (ns)
/// Gantree: gate_duration(arch,gate) -> ns // 게이트 시간
pub fn gate_duration(arch: &Architecture, gate: &Gate) -> Nanoseconds {
    match gate.duration_ns {
        Some(ns) => ns,
        None => tag_duration(arch, &gate.tag(), gate.arity()),
    }
}

/// Duration for a tag acting on `arity` qubits (ns)
pub fn tag_duration(arch: &Architecture, tag: &str, arity: usize) -> Nanoseconds {
    if let Some(ns) = arch.gate_timings.get(tag) {
        return ns;
    }
    let category = if arity >= 2 {
        arch.gate_timings.two_qubit_ns
    } else {
        arch.gate_timings.single_qubit_ns
    };
    category.unwrap_or_else(|| {
        log::warn!(
            "No timing for gate '{}' on {}, using default {} ns",
            tag,
            arch.name,
            DEFAULT_GATE_DURATION_NS
        );
        DEFAULT_GATE_DURATION_NS
    })
}

/// Two-qubit category duration (ns)
pub fn two_qubit_duration(arch: &Architecture) -> Nanoseconds {
    arch.gate_timings.two_qubit_ns.unwrap_or_else(|| {
        log::warn!("No two-qubit timing on {}, using default", arch.name);
        DEFAULT_GATE_DURATION_NS
    })
}

/// Duration of one CNOT (ns)
pub fn cnot_duration(arch: &Architecture) -> Nanoseconds {
    tag_duration(arch, CNOT_TAG, 2)
}

/// Duration of one measurement (ns)
pub fn measurement_duration(arch: &Architecture) -> Nanoseconds {
    arch.gate_timings
        .get(MEASUREMENT_TAG)
        .or(arch.gate_timings.measurement_ns)
        .or(arch.gate_timings.single_qubit_ns)
        .unwrap_or_else(|| {
            log::warn!("No measurement timing on {}, using default", arch.name);
            DEFAULT_GATE_DURATION_NS
        })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::architecture::{GateErrors, GateTimings};
    use crate::topology::Connectivity;
    use approx::assert_relative_eq;

    fn bare() -> Architecture {
        Architecture::ideal("bare", 3, Connectivity::Linear)
            .with_gate_errors(GateErrors::default())
            .with_gate_timings(GateTimings::default())
    }

    #[test]
    fn test_error_chain() {
        let arch = bare();
        assert_relative_eq!(tag_error(&arch, "H", 1), DEFAULT_GATE_ERROR);

        let arch = arch.with_gate_errors(GateErrors::uniform(1e-3, 1e-2));
        assert_relative_eq!(tag_error(&arch, "H", 1), 1e-3);
        assert_relative_eq!(tag_error(&arch, "CZ", 2), 1e-2);
        assert_relative_eq!(tag_error(&arch, "CCX", 3), 1e-2);

        let arch = arch.with_gate_error("CZ", 2e-2);
        assert_relative_eq!(tag_error(&arch, "CZ", 2), 2e-2);
    }

    #[test]
    fn test_gate_override_wins() {
        let arch = bare().with_gate_error("X", 0.05);
        let gate = Gate::single("x", 0).with_fidelity(0.99);
        assert_relative_eq!(gate_error(&arch, &gate), 0.01, epsilon = 1e-12);

        let plain = Gate::single("x", 0);
        assert_relative_eq!(gate_error(&arch, &plain), 0.05);
    }

    #[test]
    fn test_duration_chain() {
        let arch = bare();
        assert_relative_eq!(tag_duration(&arch, "CNOT", 2), DEFAULT_GATE_DURATION_NS);

        let arch = arch
            .with_gate_timings(GateTimings::uniform(20.0, 300.0, 700.0))
            .with_gate_time("cnot", 250.0);
        assert_relative_eq!(cnot_duration(&arch), 250.0);
        assert_relative_eq!(two_qubit_duration(&arch), 300.0);
        assert_relative_eq!(tag_duration(&arch, "RZ", 1), 20.0);

        let gate = Gate::two("CNOT", 0, 1).with_duration(10.0);
        assert_relative_eq!(gate_duration(&arch, &gate), 10.0);
    }

    #[test]
    fn test_measurement_chain() {
        let mut arch = bare();
        assert_relative_eq!(measurement_duration(&arch), DEFAULT_GATE_DURATION_NS);

        arch.gate_timings.single_qubit_ns = Some(40.0);
        assert_relative_eq!(measurement_duration(&arch), 40.0);

        arch.gate_timings.measurement_ns = Some(800.0);
        assert_relative_eq!(measurement_duration(&arch), 800.0);

        let arch = arch.with_gate_time("measurement", 900.0);
        assert_relative_eq!(measurement_duration(&arch), 900.0);
    }
}
