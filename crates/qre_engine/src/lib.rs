//! # QRE Engine
//!
//! Resource estimators and the estimation pipeline.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qre_engine // L3-L6: Estimation (완료)
//!     L3_Analysis // 회로 분석 (완료)
//!         CircuitAnalyzer // 깊이/게이트 구성 (완료)
//!     L4_Routing // 라우팅 (완료)
//!         SwapRouter // shortest-path / greedy (완료)
//!     L5_Estimation // 추정기 (완료)
//!         TimingEstimator // 실행 시간/코히어런스 (완료)
//!         FidelityEstimator // 충실도 (완료)
//!         QuantumVolumeEstimator // 양자 볼륨 (완료)
//!         FaultToleranceEstimator // 표면 코드 (완료)
//!         ClassicalEstimator // 고전 시뮬레이션 비용 (완료)
//!     L6_Integration // 통합 (완료)
//!         EstimationOptions // 추정 옵션 (완료)
//!         Pipeline // analyze() → route() → time() → score() → run() (완료)
//!         EstimationResult // 결과 (완료)
//!         Suggestions // 최적화 제안 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qre_core::prelude::*;
//! use qre_engine::prelude::*;
//!
//! let circuit = CircuitBuilder::with_name(3, "GHZ").h(0).cx_chain().build();
//! let arch = Architecture::from_technology(
//!     "sc-5",
//!     5,
//!     Connectivity::Linear,
//!     Technology::Superconducting,
//! );
//!
//! let result = estimate_all(&circuit, &arch, &EstimationOptions::default()).unwrap();
//! println!("{}", result.summary());
//! ```
//!
//! ## Using the Pipeline
//!
//! ```rust
//! use qre_core::prelude::*;
//! use qre_engine::prelude::*;
//!
//! let circuit = CircuitBuilder::new(4).h(0).cnot(0, 3).build();
//! let arch = Architecture::from_technology(
//!     "ring",
//!     4,
//!     Connectivity::Ring,
//!     Technology::TrappedIon,
//! );
//!
//! let mut pipeline = Pipeline::new(&circuit, &arch, EstimationOptions::quick());
//! let swaps = pipeline.route().unwrap();
//! let time_ns = pipeline.time().unwrap();
//! println!("{} SWAPs, {:.1} µs", swaps, time_ns / 1000.0);
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Circuit analysis (Gantree: L3_Analysis → CircuitAnalyzer)
pub mod analyzer;

/// SWAP estimation (Gantree: L4_Routing → SwapRouter)
pub mod routing;

/// Timing and coherence (Gantree: L5_Estimation → TimingEstimator)
pub mod timing;

/// Fidelity (Gantree: L5_Estimation → FidelityEstimator)
pub mod fidelity;

/// Quantum volume (Gantree: L5_Estimation → QuantumVolumeEstimator)
pub mod volume;

/// Surface Code (Gantree: L5_Estimation → FaultToleranceEstimator)
pub mod fault_tolerance;

/// Classical simulation cost (Gantree: L5_Estimation → ClassicalEstimator)
pub mod classical;

/// Options (Gantree: L6_Integration → EstimationOptions)
pub mod config;

/// Result record (Gantree: L6_Integration → EstimationResult)
pub mod result;

/// Suggestions (Gantree: L6_Integration → Suggestions)
pub mod suggestions;

/// Pipeline (Gantree: L6_Integration → Pipeline)
pub mod pipeline;

// ============================================================================
// Re-exports
// ============================================================================

pub use analyzer::{analyze, CircuitAnalysis};
pub use classical::{estimate_classical_resources, ClassicalResources, SimulationMode};
pub use config::EstimationOptions;
pub use fault_tolerance::{estimate_fault_tolerant_resources, FaultToleranceResult};
pub use fidelity::{estimate_fidelity, fidelity_breakdown, ErrorSource, FidelityBreakdown};
pub use pipeline::{estimate_all, Pipeline, PipelineStage, PipelineState};
pub use result::EstimationResult;
pub use routing::{estimate_swap_overhead, SwapCount, SwapStrategy};
pub use suggestions::generate_suggestions;
pub use timing::{estimate_execution_time, CoherenceLimits, RequiredCoherence};
pub use volume::estimate_quantum_volume;

// ============================================================================
// Prelude
// ============================================================================

/// Convenient imports for common use cases
pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use qre_engine::prelude::*;
    //! ```

    pub use crate::analyzer::{analyze, CircuitAnalysis};
    pub use crate::classical::{estimate_classical_resources, SimulationMode};
    pub use crate::config::EstimationOptions;
    pub use crate::fault_tolerance::{estimate_fault_tolerant_resources, FaultToleranceResult};
    pub use crate::fidelity::{estimate_fidelity, ErrorSource};
    pub use crate::pipeline::{estimate_all, Pipeline, PipelineStage};
    pub use crate::result::EstimationResult;
    pub use crate::routing::{estimate_swap_overhead, SwapCount, SwapStrategy};
    pub use crate::timing::estimate_execution_time;
    pub use crate::volume::estimate_quantum_volume;
}

// ============================================================================
// Integration Tests
// ============================================================================
