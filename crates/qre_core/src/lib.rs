//! # QRE Core
//!
//! Circuits, hardware architectures and topology for the Quantum Resource
//! Estimator.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qre_core // L0+L2: Foundation + Circuit + Hardware (완료)
//!     L0_Foundation // 기반 타입/상수/에러 (완료)
//!         CoreTypes // 핵심 타입 (완료)
//!         Constants // 추정/표면 코드/기술 상수 (완료)
//!         Errors // 에러 타입 (완료)
//!     L1_Circuit // 회로 구조 (완료)
//!         Gate // 게이트 레코드 (완료)
//!         Circuit // 회로 구조체 (완료)
//!         CircuitBuilder // 빌더 패턴 (완료)
//!     L2_Hardware // 하드웨어 모델 (완료)
//!         Topology // 연결성 그래프 (완료)
//!         Architecture // 하드웨어 구조 (완료)
//!         Resolve // 파라미터 조회 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qre_core::prelude::*;
//!
//! let circuit = CircuitBuilder::with_name(3, "GHZ")
//!     .h(0)
//!     .cnot(0, 1)
//!     .cnot(1, 2)
//!     .build();
//!
//! assert!(circuit.validate().is_ok());
//! println!("{}", circuit);
//! ```
//!
//! ## Architectures
//!
//! ```rust
//! use qre_core::prelude::*;
//!
//! let arch = Architecture::from_technology(
//!     "sc-27",
//!     27,
//!     Connectivity::HeavyHex,
//!     Technology::Superconducting,
//! );
//! assert!(arch.validate().is_ok());
//!
//! let graph = arch.adjacency();
//! assert_eq!(graph.num_qubits(), 27);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Gate records (Gantree: L1_Circuit → Gate)
pub mod gate;

/// Circuit structure (Gantree: L1_Circuit → Circuit)
pub mod circuit;

/// Circuit builder (Gantree: L1_Circuit → CircuitBuilder)
pub mod builder;

/// Connectivity graphs (Gantree: L2_Hardware → Topology)
pub mod topology;

/// Hardware architecture (Gantree: L2_Hardware → Architecture)
pub mod architecture;

/// Error rate / duration lookup (Gantree: L2_Hardware → Resolve)
pub mod resolve;

// ============================================================================
// Re-exports
// ============================================================================

pub use architecture::{Architecture, GateErrors, GateTimings, HardwareConstraints, Technology};
pub use builder::CircuitBuilder;
pub use circuit::Circuit;
pub use constants::{estimation, surface_code, technology};
pub use error::{QreError, QreResult};
pub use gate::Gate;
pub use topology::{AdjacencyGraph, Connectivity};
pub use types::{GateCounts, Microseconds, Nanoseconds, QubitId, QubitMapping};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qre_core::prelude::*;
    //! ```

    pub use crate::architecture::{Architecture, GateErrors, GateTimings, HardwareConstraints, Technology};
    pub use crate::builder::CircuitBuilder;
    pub use crate::circuit::Circuit;
    pub use crate::constants::{estimation, surface_code, technology};
    pub use crate::error::{QreError, QreResult};
    pub use crate::gate::Gate;
    pub use crate::resolve;
    pub use crate::topology::{AdjacencyGraph, Connectivity};
    pub use crate::types::{GateCounts, Microseconds, Nanoseconds, QubitId, QubitMapping};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================
