//! # QRE Bench
//!
//! Sample circuits, provider comparison and reporting.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qre_bench // L7: Bench (완료)
//!     Generators // 샘플 회로 (완료)
//!         bell, ghz, grover, qft // 표준 회로
//!         vqe, vqe_with(Ansatz) // 변분 회로 (HE, UCCSD)
//!         qaoa(QaoaProblem) // MaxCut, NumberPartitioning, Random
//!         random // 시드 기반 난수 회로
//!     ComparisonSuite // 공급자 비교 (완료)
//!         ProviderProfile // 가격 모델
//!         run() // 비용 순위
//!     Reporter // 결과 리포팅 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qre_bench::prelude::*;
//! use qre_engine::EstimationOptions;
//!
//! let circuit = CircuitGenerator::new().qft(5);
//! let mut suite = ComparisonSuite::new();
//! let entries = suite
//!     .run(&circuit, &ProviderProfile::catalogue(), &EstimationOptions::default())
//!     .unwrap();
//!
//! println!("{}", Reporter::report(&entries, ReportFormat::Markdown));
//! ```
//!
//! ## Circuit Generation
//!
//! ```rust
//! use qre_bench::prelude::*;
//!
//! let gen = CircuitGenerator::with_seed(42);
//!
//! let bell = gen.bell();
//! let grover = gen.grover(4);
//! let vqe = gen.vqe(6, 3, Entanglement::Circular);
//! let uccsd = gen.vqe_with(6, 2, Ansatz::Uccsd);
//! let qaoa = gen.qaoa_maxcut_ring(8, 2);
//! let partition = gen.qaoa(6, 2, QaoaProblem::NumberPartitioning);
//! let random = gen.random(5, 50);
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Circuit generators (Gantree: L7_Bench → Generators)
pub mod generators;

/// Provider comparison (Gantree: L7_Bench → ComparisonSuite)
pub mod suite;

/// Reporting (Gantree: L7_Bench → Reporter)
pub mod reporter;

// ============================================================================
// Re-exports
// ============================================================================

pub use generators::{Ansatz, CircuitGenerator, Entanglement, QaoaProblem};
pub use reporter::{ReportFormat, Reporter};
pub use suite::{ComparisonEntry, ComparisonStatistics, ComparisonSuite, ProviderProfile};

// ============================================================================
// Prelude
// ============================================================================

/// Convenient imports for common use cases
pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use qre_bench::prelude::*;
    //! ```

    pub use crate::generators::{Ansatz, CircuitGenerator, Entanglement, QaoaProblem};
    pub use crate::reporter::{ReportFormat, Reporter};
    pub use crate::suite::{ComparisonEntry, ComparisonStatistics, ComparisonSuite, ProviderProfile};
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use approx::assert_relative_eq;
    use qre_core::prelude::*;
    use qre_engine::prelude::*;

    #[test]
    fn test_bell_on_ideal_device() {
        let bell = CircuitGenerator::new().bell();
        let arch = Architecture::ideal("ideal", 2, Connectivity::AllToAll);
        let r = estimate_all(&bell, &arch, &EstimationOptions::default()).unwrap();

        assert_eq!(r.analysis.depth, 2);
        assert_eq!(r.analysis.total_gates, 2);
        assert_eq!(r.swap_count, SwapCount::Finite(0));
        assert_relative_eq!(r.fidelity, 1.0);
    }

    #[test]
    fn test_depth_monotonic_in_appended_gates() {
        let gen = CircuitGenerator::with_seed(5);
        let base = gen.random(4, 30);

        let mut extended = base.clone();
        extended.push_gate(Gate::two("CNOT", 0, 3));

        let before = analyze(&base).unwrap().depth;
        let after = analyze(&extended).unwrap().depth;
        assert!(after >= before);
    }

    #[test]
    fn test_state_vector_memory_doubles() {
        let gen = CircuitGenerator::new();
        let mb = |n: usize| {
            estimate_classical_resources(&gen.ghz(n), SimulationMode::StateVector)
                .memory_mb
                .unwrap()
        };
        // 2^n × 16 B, rounded up to whole MB
        assert_eq!(mb(26), 1024.0);
        assert_eq!(mb(27), 2048.0);
        assert_eq!(mb(28), 4096.0);
    }

    #[test]
    fn test_variational_circuits_route_on_ring() {
        let gen = CircuitGenerator::new();
        let arch = Architecture::ideal("ring", 6, Connectivity::Ring);

        let vqe = gen.vqe(6, 2, Entanglement::Circular);
        let swaps = estimate_swap_overhead(&vqe, &arch, SwapStrategy::ShortestPath, None).unwrap();
        assert_eq!(swaps, SwapCount::Finite(0));

        let qaoa = gen.qaoa_maxcut_ring(6, 1);
        let swaps = estimate_swap_overhead(&qaoa, &arch, SwapStrategy::Greedy, None).unwrap();
        assert_eq!(swaps, SwapCount::Finite(0));
    }

    #[test]
    fn test_full_workflow() {
        let circuit = CircuitGenerator::new().grover(5);
        let mut suite = ComparisonSuite::new();
        let entries = suite
            .run(
                &circuit,
                &ProviderProfile::catalogue(),
                &EstimationOptions::fault_tolerant(1e-12),
            )
            .unwrap();

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(suite.statistics().count, 4);

        for format in [
            ReportFormat::Markdown,
            ReportFormat::Json,
            ReportFormat::Csv,
            ReportFormat::Text,
        ] {
            assert!(!Reporter::report(&entries, format).is_empty());
        }
    }
}
