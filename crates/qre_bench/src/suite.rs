//! Provider comparison suite
//!
//! Gantree: L7_Bench → ComparisonSuite
//!
//! Runs one circuit against several priced architectures and ranks them by
//! estimated cost. Each provider gets an independent `estimate_all` call.

use qre_core::{Architecture, Circuit, Connectivity, GateErrors, QreResult, Technology};
use qre_engine::{estimate_all, EstimationOptions, EstimationResult};
use serde::{Deserialize, Serialize};

/// A priced architecture
/// Gantree: ProviderProfile // 공급자 프로파일
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderProfile {
    /// Device model
    pub architecture: Architecture,

    /// Price per second of execution
    pub rate_per_second: f64,

    /// Price per physical qubit used
    pub penalty_per_qubit: f64,
}

impl ProviderProfile {
    /// Create a profile
    pub fn new(architecture: Architecture, rate_per_second: f64, penalty_per_qubit: f64) -> Self {
        Self {
            architecture,
            rate_per_second,
            penalty_per_qubit,
        }
    }

    /// Provider name (the architecture name)
    pub fn name(&self) -> &str {
        &self.architecture.name
    }

    /// Illustrative catalogue of current device classes
    ///
    /// Prices are placeholders for relative comparison only.
    pub fn catalogue() -> Vec<Self> {
        vec![
            Self::new(
                Architecture::from_technology(
                    "heavy-hex-127",
                    127,
                    Connectivity::HeavyHex,
                    Technology::Superconducting,
                )
                .with_gate_errors(GateErrors::uniform(1e-3, 1e-2))
                .with_coherence(100.0, 100.0),
                1.60,
                0.01,
            ),
            Self::new(
                Architecture::from_technology(
                    "grid-72",
                    72,
                    Connectivity::Grid,
                    Technology::Superconducting,
                )
                .with_gate_errors(GateErrors::uniform(5e-4, 1e-2))
                .with_coherence(150.0, 150.0),
                1.20,
                0.01,
            ),
            Self::new(
                Architecture::from_technology(
                    "ion-32",
                    32,
                    Connectivity::AllToAll,
                    Technology::TrappedIon,
                )
                .with_gate_errors(GateErrors::uniform(1e-4, 2e-3)),
                0.30,
                0.05,
            ),
            Self::new(
                Architecture::from_technology(
                    "lattice-80",
                    80,
                    Connectivity::HeavySquare,
                    Technology::Superconducting,
                )
                .with_gate_errors(GateErrors::uniform(2e-3, 1.5e-2))
                .with_coherence(80.0, 80.0),
                0.90,
                0.01,
            ),
        ]
    }

    /// Physical qubits billed for an estimate
    ///
    /// The fault-tolerant total when present and finite, otherwise the
    /// circuit width.
    pub fn physical_qubits(estimate: &EstimationResult) -> f64 {
        estimate
            .fault_tolerance
            .as_ref()
            .map(|ft| ft.total_physical_qubits)
            .filter(|q| q.is_finite())
            .unwrap_or(estimate.circuit_width as f64)
    }

    /// Cost of an estimate on this provider, `+∞` when the run is infeasible
    pub fn estimated_cost(&self, estimate: &EstimationResult) -> f64 {
        if !estimate.is_routable() || !estimate.execution_time_ns.is_finite() {
            return f64::INFINITY;
        }
        self.rate_per_second * estimate.execution_time_s()
            + self.penalty_per_qubit * Self::physical_qubits(estimate)
    }
}

/// One ranked provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// 1-based rank, cheapest first
    pub rank: usize,

    /// Provider name
    pub provider: String,

    /// Billed physical qubits
    pub physical_qubits: f64,

    /// Estimated cost (`null` in JSON when infeasible)
    pub estimated_cost: f64,

    /// Full estimate
    pub estimate: EstimationResult,
}

impl ComparisonEntry {
    /// Check whether the provider can run the circuit at all
    pub fn is_feasible(&self) -> bool {
        self.estimated_cost.is_finite()
    }
}

/// Provider comparison suite
/// Gantree: ComparisonSuite // 공급자 비교
pub struct ComparisonSuite {
    /// Entries of every `run`, in run order
    results: Vec<ComparisonEntry>,
}

impl ComparisonSuite {
    /// Create new suite
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Estimate `circuit` on every provider and rank by cost
    ///
    /// Stable: equal costs keep provider order. Infeasible providers rank
    /// last. Fails on the first provider whose architecture or options do
    /// not validate.
    pub fn run(
        &mut self,
        circuit: &Circuit,
        providers: &[ProviderProfile],
        options: &EstimationOptions,
    ) -> QreResult<Vec<ComparisonEntry>> {
        log::info!(
            "Comparing '{}' across {} providers",
            circuit.name(),
            providers.len()
        );

        let mut entries = Vec::with_capacity(providers.len());
        for provider in providers {
            let estimate = estimate_all(circuit, &provider.architecture, options)?;
            let estimated_cost = provider.estimated_cost(&estimate);
            log::debug!("{}: cost {}", provider.name(), estimated_cost);

            entries.push(ComparisonEntry {
                rank: 0,
                provider: provider.name().to_string(),
                physical_qubits: ProviderProfile::physical_qubits(&estimate),
                estimated_cost,
                estimate,
            });
        }

        entries.sort_by(|a, b| a.estimated_cost.total_cmp(&b.estimated_cost));
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.rank = i + 1;
        }

        self.results.extend(entries.iter().cloned());
        Ok(entries)
    }

    /// All entries recorded so far
    pub fn results(&self) -> &[ComparisonEntry] {
        &self.results
    }

    /// Clear results
    pub fn clear(&mut self) {
        self.results.clear();
    }

    /// Statistics over recorded entries
    pub fn statistics(&self) -> ComparisonStatistics {
        ComparisonStatistics::from_entries(&self.results)
    }
}

impl Default for ComparisonSuite {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate over comparison entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonStatistics {
    /// Number of entries
    pub count: usize,

    /// Entries with a finite cost
    pub feasible_count: usize,

    /// Cheapest feasible cost
    pub min_cost: Option<f64>,

    /// Most expensive feasible cost
    pub max_cost: Option<f64>,

    /// Mean fidelity over feasible entries
    pub avg_fidelity: Option<f64>,

    /// Provider of the cheapest feasible entry
    pub best_provider: Option<String>,
}

impl ComparisonStatistics {
    /// Compute statistics from entries
    pub fn from_entries(entries: &[ComparisonEntry]) -> Self {
        let feasible: Vec<&ComparisonEntry> = entries.iter().filter(|e| e.is_feasible()).collect();

        let best = feasible
            .iter()
            .min_by(|a, b| a.estimated_cost.total_cmp(&b.estimated_cost));
        let max_cost = feasible
            .iter()
            .map(|e| e.estimated_cost)
            .max_by(|a, b| a.total_cmp(b));
        let avg_fidelity = if feasible.is_empty() {
            None
        } else {
            Some(feasible.iter().map(|e| e.estimate.fidelity).sum::<f64>() / feasible.len() as f64)
        };

        Self {
            count: entries.len(),
            feasible_count: feasible.len(),
            min_cost: best.map(|e| e.estimated_cost),
            max_cost,
            avg_fidelity,
            best_provider: best.map(|e| e.provider.clone()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::CircuitGenerator;
    use approx::assert_relative_eq;

    fn ideal(name: &str, n: usize, conn: Connectivity) -> Architecture {
        Architecture::ideal(name, n, conn)
    }

    #[test]
    fn test_cost_formula() {
        let bell = CircuitGenerator::new().bell();
        let provider = ProviderProfile::new(ideal("a2a", 2, Connectivity::AllToAll), 1.0, 0.5);

        let mut suite = ComparisonSuite::new();
        let entries = suite.run(&bell, &[provider], &EstimationOptions::default()).unwrap();

        // 2 layers × 200 ns + 2 readouts × 500 ns
        assert_relative_eq!(entries[0].estimate.execution_time_ns, 1400.0);
        assert_relative_eq!(entries[0].physical_qubits, 2.0);
        assert_relative_eq!(entries[0].estimated_cost, 1400e-9 + 1.0);
        assert_eq!(entries[0].rank, 1);
    }

    #[test]
    fn test_ranking_order() {
        let ghz = CircuitGenerator::new().ghz(4);
        let providers = vec![
            ProviderProfile::new(ideal("pricey", 4, Connectivity::AllToAll), 1.0, 2.0),
            ProviderProfile::new(ideal("too-small", 3, Connectivity::Linear), 0.0, 0.0),
            ProviderProfile::new(ideal("cheap", 4, Connectivity::AllToAll), 1.0, 1.0),
        ];

        let mut suite = ComparisonSuite::new();
        let entries = suite.run(&ghz, &providers, &EstimationOptions::default()).unwrap();

        let order: Vec<&str> = entries.iter().map(|e| e.provider.as_str()).collect();
        assert_eq!(order, vec!["cheap", "pricey", "too-small"]);
        assert_eq!(entries.iter().map(|e| e.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(!entries[2].is_feasible());
        assert!(entries[2].estimated_cost.is_infinite());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let bell = CircuitGenerator::new().bell();
        let providers = vec![
            ProviderProfile::new(ideal("first", 2, Connectivity::AllToAll), 1.0, 1.0),
            ProviderProfile::new(ideal("second", 2, Connectivity::AllToAll), 1.0, 1.0),
            ProviderProfile::new(ideal("third", 2, Connectivity::AllToAll), 1.0, 1.0),
        ];

        let mut suite = ComparisonSuite::new();
        let entries = suite.run(&bell, &providers, &EstimationOptions::default()).unwrap();
        let order: Vec<&str> = entries.iter().map(|e| e.provider.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_fault_tolerant_qubits_billed() {
        let ghz = CircuitGenerator::new().ghz(3);
        let arch = Architecture::from_technology(
            "ions",
            32,
            Connectivity::AllToAll,
            Technology::TrappedIon,
        );
        let provider = ProviderProfile::new(arch, 0.0, 1.0);

        let mut suite = ComparisonSuite::new();
        let entries = suite
            .run(&ghz, &[provider], &EstimationOptions::fault_tolerant(1e-12))
            .unwrap();

        let ft_total = entries[0]
            .estimate
            .fault_tolerance
            .as_ref()
            .unwrap()
            .total_physical_qubits;
        assert_relative_eq!(entries[0].physical_qubits, ft_total);
        assert_relative_eq!(entries[0].estimated_cost, ft_total);
    }

    #[test]
    fn test_infeasible_fault_tolerance_bills_width() {
        let ghz = CircuitGenerator::new().ghz(3);
        let arch = Architecture::from_technology(
            "photonic",
            8,
            Connectivity::AllToAll,
            Technology::Photonic,
        );
        let provider = ProviderProfile::new(arch, 0.0, 1.0);

        let mut suite = ComparisonSuite::new();
        let entries = suite
            .run(&ghz, &[provider], &EstimationOptions::fault_tolerant(1e-12))
            .unwrap();
        assert_relative_eq!(entries[0].physical_qubits, 3.0);
    }

    #[test]
    fn test_invalid_architecture_fails() {
        let bell = CircuitGenerator::new().bell();
        let bad = ideal("bad", 2, Connectivity::AllToAll).with_readout_error(1.5);
        let mut suite = ComparisonSuite::new();
        assert!(suite
            .run(&bell, &[ProviderProfile::new(bad, 1.0, 1.0)], &EstimationOptions::default())
            .is_err());
        assert!(suite.results().is_empty());
    }

    #[test]
    fn test_catalogue_runs() {
        let qft = CircuitGenerator::new().qft(5);
        let mut suite = ComparisonSuite::new();
        let entries = suite
            .run(&qft, &ProviderProfile::catalogue(), &EstimationOptions::default())
            .unwrap();

        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|e| e.is_feasible()));
        for pair in entries.windows(2) {
            assert!(pair[0].estimated_cost <= pair[1].estimated_cost);
        }
    }

    #[test]
    fn test_statistics() {
        let ghz = CircuitGenerator::new().ghz(4);
        let providers = vec![
            ProviderProfile::new(ideal("a", 4, Connectivity::AllToAll), 0.0, 1.0),
            ProviderProfile::new(ideal("b", 4, Connectivity::AllToAll), 0.0, 2.0),
            ProviderProfile::new(ideal("small", 2, Connectivity::Linear), 0.0, 1.0),
        ];
        let mut suite = ComparisonSuite::new();
        suite.run(&ghz, &providers, &EstimationOptions::default()).unwrap();

        let stats = suite.statistics();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.feasible_count, 2);
        assert_eq!(stats.min_cost, Some(4.0));
        assert_eq!(stats.max_cost, Some(8.0));
        assert_eq!(stats.best_provider.as_deref(), Some("a"));
        assert_relative_eq!(stats.avg_fidelity.unwrap(), 1.0);

        suite.clear();
        assert_eq!(suite.statistics().count, 0);
        assert_eq!(suite.statistics().min_cost, None);
    }
}
