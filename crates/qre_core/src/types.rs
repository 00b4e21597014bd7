//! Core types for QRE
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Fundamental type aliases shared by every estimator.

use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit identifier (0-indexed)
/// Gantree: QubitId // pub type QubitId = usize
pub type QubitId = usize;

/// Duration in nanoseconds
pub type Nanoseconds = f64;

/// Duration in microseconds
pub type Microseconds = f64;

/// Gate tag (upper-cased) -> occurrence count
///
/// Ordered so that serialized results are reproducible.
pub type GateCounts = BTreeMap<String, usize>;

/// Logical -> physical qubit assignment, indexed by logical qubit
pub type QubitMapping = Vec<QubitId>;

// ============================================================================
// Helpers
// ============================================================================

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Identity mapping for `n` logical qubits
pub fn identity_mapping(n: usize) -> QubitMapping {
    (0..n).collect()
}

// ============================================================================
// Tests
// ============================================================================
