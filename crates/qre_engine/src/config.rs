//! Estimation options for QRE
//!
//! Gantree: L6_Integration → EstimationOptions
//!
//! Caller-selected knobs for a full estimation run.

use crate::classical::SimulationMode;
use crate::routing::SwapStrategy;
use qre_core::surface_code::DEFAULT_TARGET_LOGICAL_ERROR_RATE;
use qre_core::{QreError, QreResult, QubitMapping};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Options for `estimate_all`
/// Gantree: EstimationOptions // 추정 옵션
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationOptions {
    /// SWAP estimation strategy
    pub swap_strategy: SwapStrategy,

    /// Run the Surface Code estimator
    pub enable_fault_tolerance: bool,

    /// Target logical error rate for the Surface Code estimator
    pub target_logical_error_rate: f64,

    /// Classical simulation method
    pub simulation_mode: SimulationMode,

    /// Logical -> physical placement (identity when absent)
    pub initial_mapping: Option<QubitMapping>,
}

impl EstimationOptions {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Default options: greedy routing, no fault tolerance, state-vector
    pub fn new() -> Self {
        Self {
            swap_strategy: SwapStrategy::Greedy,
            enable_fault_tolerance: false,
            target_logical_error_rate: DEFAULT_TARGET_LOGICAL_ERROR_RATE,
            simulation_mode: SimulationMode::StateVector,
            initial_mapping: None,
        }
    }

    /// Fault tolerance enabled at the given target logical error rate
    pub fn fault_tolerant(target_logical_error_rate: f64) -> Self {
        Self {
            enable_fault_tolerance: true,
            target_logical_error_rate,
            ..Self::new()
        }
    }

    /// Cheapest run: distance bound routing, no fault tolerance
    pub fn quick() -> Self {
        Self {
            swap_strategy: SwapStrategy::ShortestPath,
            ..Self::new()
        }
    }

    /// Parse from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> QreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set SWAP strategy
    pub fn with_swap_strategy(mut self, strategy: SwapStrategy) -> Self {
        self.swap_strategy = strategy;
        self
    }

    /// Enable or disable fault-tolerance estimation
    pub fn with_fault_tolerance(mut self, enabled: bool) -> Self {
        self.enable_fault_tolerance = enabled;
        self
    }

    /// Set target logical error rate
    pub fn with_target_error_rate(mut self, rate: f64) -> Self {
        self.target_logical_error_rate = rate;
        self
    }

    /// Set classical simulation mode
    pub fn with_simulation_mode(mut self, mode: SimulationMode) -> Self {
        self.simulation_mode = mode;
        self
    }

    /// Set initial mapping
    pub fn with_initial_mapping(mut self, mapping: QubitMapping) -> Self {
        self.initial_mapping = Some(mapping);
        self
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate options
    pub fn validate(&self) -> QreResult<()> {
        let rate = self.target_logical_error_rate;
        if !(rate > 0.0 && rate < 1.0) {
            return Err(QreError::InvalidOption(format!(
                "target_logical_error_rate must be in (0, 1), got {}",
                rate
            )));
        }
        Ok(())
    }
}

impl Default for EstimationOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EstimationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EstimationOptions({}, ft={}, target={:e}, {})",
            self.swap_strategy,
            self.enable_fault_tolerance,
            self.target_logical_error_rate,
            self.simulation_mode
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let o = EstimationOptions::default();
        assert_eq!(o.swap_strategy, SwapStrategy::Greedy);
        assert!(!o.enable_fault_tolerance);
        assert_eq!(o.target_logical_error_rate, 1e-15);
        assert_eq!(o.simulation_mode, SimulationMode::StateVector);
        assert!(o.initial_mapping.is_none());
        assert!(o.validate().is_ok());
    }

    #[test]
    fn test_named_constructors() {
        let ft = EstimationOptions::fault_tolerant(1e-12);
        assert!(ft.enable_fault_tolerance);
        assert_eq!(ft.target_logical_error_rate, 1e-12);

        assert_eq!(EstimationOptions::quick().swap_strategy, SwapStrategy::ShortestPath);
    }

    #[test]
    fn test_validation() {
        for bad in [0.0, 1.0, -1e-3, f64::NAN] {
            let o = EstimationOptions::new().with_target_error_rate(bad);
            assert!(matches!(o.validate(), Err(QreError::InvalidOption(_))));
        }
    }

    #[test]
    fn test_partial_json() {
        let o = EstimationOptions::from_json(
            r#"{"swap_strategy": "shortest-path", "simulation_mode": "clifford"}"#,
        )
        .unwrap();
        assert_eq!(o.swap_strategy, SwapStrategy::ShortestPath);
        assert_eq!(o.simulation_mode, SimulationMode::Clifford);
        assert_eq!(o.target_logical_error_rate, 1e-15);
    }

    #[test]
    fn test_builder_chain() {
        let o = EstimationOptions::new()
            .with_fault_tolerance(true)
            .with_initial_mapping(vec![2, 0, 1])
            .with_swap_strategy(SwapStrategy::None);
        assert!(o.enable_fault_tolerance);
        assert_eq!(o.initial_mapping, Some(vec![2, 0, 1]));
        assert_eq!(o.swap_strategy, SwapStrategy::None);
    }
}
