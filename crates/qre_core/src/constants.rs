//! Constants for QRE
//!
//! Gantree: L0_Foundation → Constants
//!
//! Read-only tables: estimator constants, Surface Code model parameters
//! and per-technology hardware benchmarks.

// ============================================================================
// Estimator Constants
// Gantree: estimation // 추정 상수
// ============================================================================

pub mod estimation {
    //! Constants used across the estimators

    /// Required coherence = execution time × this factor
    pub const COHERENCE_SAFETY_FACTOR: f64 = 5.0;

    /// A SWAP decomposes into this many CNOTs
    pub const CNOTS_PER_SWAP: usize = 3;

    /// Error rate used when neither a per-gate nor a category rate exists
    pub const DEFAULT_GATE_ERROR: f64 = 0.1;

    /// Gate duration (ns) used when neither a per-gate nor a category timing exists
    pub const DEFAULT_GATE_DURATION_NS: f64 = 1000.0;

    /// Readout error used when an architecture lists none
    pub const DEFAULT_READOUT_ERROR: f64 = 5e-3;

    /// T1 (µs) used when an architecture lists none
    pub const DEFAULT_T1_US: f64 = 100.0;

    /// T2 (µs) used when an architecture lists none
    pub const DEFAULT_T2_US: f64 = 80.0;

    /// Quantum volume success threshold (heavy-output style 2/3)
    pub const QV_SUCCESS_THRESHOLD: f64 = 2.0 / 3.0;

    /// Bytes per complex amplitude (complex128)
    pub const BYTES_PER_AMPLITUDE: f64 = 16.0;

    /// Bytes per stabilizer tableau entry
    pub const BYTES_PER_TABLEAU_ENTRY: f64 = 8.0;

    /// Bytes in one megabyte (MiB)
    pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

    /// Gate tags treated as Clifford (upper-case)
    pub const CLIFFORD_GATES: &[&str] = &[
        "X", "Y", "Z", "H", "S", "SDG", "CX", "CY", "CZ", "CNOT", "SWAP",
    ];

    /// Gate tags counted as T gates (upper-case)
    pub const T_GATES: &[&str] = &["T", "TDG"];

    /// Check whether an upper-cased tag is Clifford
    #[inline]
    pub fn is_clifford(tag: &str) -> bool {
        CLIFFORD_GATES.contains(&tag)
    }

    /// Check whether an upper-cased tag is a T / T-dagger gate
    #[inline]
    pub fn is_t_gate(tag: &str) -> bool {
        T_GATES.contains(&tag)
    }
}

// ============================================================================
// Surface Code Constants
// Gantree: surface_code // 표면 코드 상수
// ============================================================================

pub mod surface_code {
    //! Surface Code overhead model parameters

    /// Code name reported in fault-tolerance records
    pub const CODE_NAME: &str = "SurfaceCode";

    /// Physical error threshold; at or above it the code cannot suppress errors
    pub const THRESHOLD_ERROR_RATE: f64 = 1e-2;

    /// Prefactor A in p_L ≈ A (p/p_th)^((d+1)/2)
    pub const CONSTANT_FACTOR_A: f64 = 0.1;

    /// Minimum code distance
    pub const MIN_DISTANCE: u32 = 3;

    /// Routing / layout overhead on top of the data patches
    pub const ROUTING_OVERHEAD_FACTOR: f64 = 1.5;

    /// Extra qubits per logical qubit for magic-state distillation
    pub const DISTILLATION_QUBIT_FRACTION: f64 = 0.25;

    /// Flat overhead factor reported for magic-state distillation
    pub const DISTILLATION_OVERHEAD: f64 = 1.25;

    /// Default target logical error rate
    pub const DEFAULT_TARGET_LOGICAL_ERROR_RATE: f64 = 1e-15;

    /// Physical qubits per logical qubit at distance d (2d²)
    #[inline]
    pub fn physical_per_logical(d: f64) -> f64 {
        2.0 * d * d
    }

    /// Logical cycle length in physical two-qubit gate durations (5d)
    #[inline]
    pub fn cycle_factor(d: f64) -> f64 {
        5.0 * d
    }
}

// ============================================================================
// Technology Benchmarks
// Gantree: technology // 기술별 벤치마크
// ============================================================================

pub mod technology {
    //! Typical hardware parameters per qubit technology

    /// One row of the technology table
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Benchmark {
        /// Single-qubit gate time (ns)
        pub single_qubit_ns: f64,
        /// Two-qubit gate time (ns)
        pub two_qubit_ns: f64,
        /// Measurement time (ns)
        pub measurement_ns: f64,
        /// Single-qubit gate error
        pub single_qubit_error: f64,
        /// Two-qubit gate error
        pub two_qubit_error: f64,
        /// Readout error
        pub readout_error: f64,
        /// T1 (µs)
        pub t1_us: f64,
        /// T2 (µs)
        pub t2_us: f64,
    }

    /// Superconducting transmon processors
    pub const SUPERCONDUCTING: Benchmark = Benchmark {
        single_qubit_ns: 30.0,
        two_qubit_ns: 200.0,
        measurement_ns: 500.0,
        single_qubit_error: 1e-4,
        two_qubit_error: 5e-3,
        readout_error: 1e-2,
        t1_us: 100.0,
        t2_us: 80.0,
    };

    /// Trapped-ion processors
    pub const TRAPPED_ION: Benchmark = Benchmark {
        single_qubit_ns: 1_000.0,
        two_qubit_ns: 50_000.0,
        measurement_ns: 100_000.0,
        single_qubit_error: 5e-5,
        two_qubit_error: 1e-3,
        readout_error: 5e-3,
        t1_us: 1e6,
        t2_us: 1e5,
    };

    /// Photonic processors (no intrinsic decoherence)
    pub const PHOTONIC: Benchmark = Benchmark {
        single_qubit_ns: 10.0,
        two_qubit_ns: 100.0,
        measurement_ns: 1_000.0,
        single_qubit_error: 1e-3,
        two_qubit_error: 1e-2,
        readout_error: 2e-2,
        t1_us: f64::INFINITY,
        t2_us: f64::INFINITY,
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clifford_set() {
        assert!(estimation::is_clifford("CNOT"));
        assert!(estimation::is_clifford("SDG"));
        assert!(!estimation::is_clifford("T"));
        assert!(!estimation::is_clifford("RZ"));
    }

    #[test]
    fn test_t_gate_set() {
        assert!(estimation::is_t_gate("T"));
        assert!(estimation::is_t_gate("TDG"));
        assert!(!estimation::is_t_gate("S"));
    }

    #[test]
    fn test_surface_code_scaling() {
        assert_eq!(surface_code::physical_per_logical(3.0), 18.0);
        assert_eq!(surface_code::cycle_factor(7.0), 35.0);
    }

    #[test]
    fn test_t2_constraint_in_benchmarks() {
        // T2 should be <= 2*T1 (physical constraint)
        for b in [technology::SUPERCONDUCTING, technology::TRAPPED_ION] {
            assert!(b.t2_us <= 2.0 * b.t1_us);
        }
    }
}
