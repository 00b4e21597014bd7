//! Staged estimation pipeline for QRE
//!
//! Gantree: L6_Integration → Pipeline
//!
//! Runs the estimators in order, keeping intermediate results:
//! analyze → route → time → score → run (classical + fault tolerance).
//! Each stage runs the earlier ones it depends on.

use crate::analyzer::{self, CircuitAnalysis};
use crate::classical::estimate_classical_resources;
use crate::config::EstimationOptions;
use crate::fault_tolerance::estimate_fault_tolerant_resources;
use crate::fidelity::{fidelity_breakdown, FidelityBreakdown};
use crate::result::EstimationResult;
use crate::routing::{estimate_swap_overhead, SwapCount};
use crate::suggestions::generate_suggestions;
use crate::timing::{estimate_execution_time, CoherenceLimits, RequiredCoherence};
use crate::volume::estimate_quantum_volume;
use chrono::Utc;
use qre_core::{Architecture, Circuit, Nanoseconds, QreResult};
use serde::{Deserialize, Serialize};

/// Pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PipelineStage {
    /// Nothing run yet
    Initial,
    /// Inputs validated, circuit analyzed
    Analyzed,
    /// SWAP overhead and compiled depth known
    Routed,
    /// Execution time and coherence known
    Timed,
    /// Fidelity and quantum volume known
    Scored,
    /// Result assembled
    Completed,
}

/// Intermediate results
#[derive(Debug, Clone)]
pub struct PipelineState {
    /// Current stage
    pub stage: PipelineStage,

    /// Circuit analysis
    pub analysis: Option<CircuitAnalysis>,

    /// SWAP estimate
    pub swap_count: Option<SwapCount>,

    /// Depth after SWAP insertion (`None` also when unroutable)
    pub compiled_depth: Option<usize>,

    /// Physical execution time
    pub execution_time_ns: Option<Nanoseconds>,

    /// Required coherence
    pub required_coherence: Option<RequiredCoherence>,

    /// Coherence flags
    pub coherence_limited: Option<CoherenceLimits>,

    /// Fidelity factors
    pub fidelity: Option<FidelityBreakdown>,

    /// Quantum volume proxy
    pub quantum_volume: Option<u64>,
}

impl PipelineState {
    fn new() -> Self {
        Self {
            stage: PipelineStage::Initial,
            analysis: None,
            swap_count: None,
            compiled_depth: None,
            execution_time_ns: None,
            required_coherence: None,
            coherence_limited: None,
            fidelity: None,
            quantum_volume: None,
        }
    }
}

/// Estimation pipeline over borrowed inputs
/// Gantree: Pipeline // 단계별 추정
pub struct Pipeline<'a> {
    circuit: &'a Circuit,
    arch: &'a Architecture,
    options: EstimationOptions,
    state: PipelineState,
}

impl<'a> Pipeline<'a> {
    // ========================================================================
    // Constructor
    // ========================================================================

    /// Create a pipeline (inputs are validated by the first stage)
    pub fn new(circuit: &'a Circuit, arch: &'a Architecture, options: EstimationOptions) -> Self {
        Self {
            circuit,
            arch,
            options,
            state: PipelineState::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current stage
    pub fn stage(&self) -> PipelineStage {
        self.state.stage
    }

    /// Intermediate results
    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Options in use
    pub fn options(&self) -> &EstimationOptions {
        &self.options
    }

    fn advance(&mut self, stage: PipelineStage) {
        if stage > self.state.stage {
            self.state.stage = stage;
        }
    }

    // ========================================================================
    // Stages
    // ========================================================================

    /// Stage 1: validate inputs and analyze the circuit
    pub fn analyze(&mut self) -> QreResult<&CircuitAnalysis> {
        let analysis = match self.state.analysis.take() {
            Some(analysis) => analysis,
            None => {
                self.arch.validate()?;
                self.options.validate()?;
                let analysis = analyzer::analyze(self.circuit)?;
                log::debug!(
                    "Analyzed '{}': depth {}, {} gates, {} T",
                    self.circuit.name(),
                    analysis.depth,
                    analysis.total_gates,
                    analysis.t_gate_count
                );
                analysis
            }
        };
        self.advance(PipelineStage::Analyzed);
        Ok(self.state.analysis.insert(analysis))
    }

    /// Stage 2: SWAP overhead and compiled depth
    pub fn route(&mut self) -> QreResult<SwapCount> {
        if let Some(swaps) = self.state.swap_count {
            return Ok(swaps);
        }
        let depth = self.analyze()?.depth;

        let swaps = estimate_swap_overhead(
            self.circuit,
            self.arch,
            self.options.swap_strategy,
            self.options.initial_mapping.as_deref(),
        )?;

        let width = self.circuit.num_qubits();
        let compiled_depth = match swaps {
            SwapCount::Finite(n) if width > 0 => Some(depth + n.div_ceil((width / 2).max(1))),
            SwapCount::Finite(_) => Some(depth),
            SwapCount::Unbounded => None,
        };
        log::debug!("Routed: {} SWAPs, compiled depth {:?}", swaps, compiled_depth);

        self.state.swap_count = Some(swaps);
        self.state.compiled_depth = compiled_depth;
        self.advance(PipelineStage::Routed);
        Ok(swaps)
    }

    /// Stage 3: execution time and coherence
    pub fn time(&mut self) -> QreResult<Nanoseconds> {
        if let Some(t) = self.state.execution_time_ns {
            return Ok(t);
        }
        let swaps = self.route()?;

        let time_ns =
            estimate_execution_time(self.circuit, self.arch, swaps, self.state.compiled_depth);
        let required = RequiredCoherence::for_time(time_ns);
        let limits = if swaps.is_unbounded() {
            CoherenceLimits::all()
        } else {
            CoherenceLimits::check(&required, self.arch)
        };
        log::debug!("Timed: {:.1} ns, coherence limited {:?}", time_ns, limits);

        self.state.execution_time_ns = Some(time_ns);
        self.state.required_coherence = Some(required);
        self.state.coherence_limited = Some(limits);
        self.advance(PipelineStage::Timed);
        Ok(time_ns)
    }

    /// Stage 4: fidelity and quantum volume
    pub fn score(&mut self) -> QreResult<FidelityBreakdown> {
        if let Some(breakdown) = self.state.fidelity {
            return Ok(breakdown);
        }
        self.time()?;
        let swaps = self.route()?;

        let breakdown = fidelity_breakdown(self.circuit, self.arch, swaps);
        let qv = estimate_quantum_volume(self.arch, self.circuit.num_qubits());
        log::debug!("Scored: fidelity {:.6}, QV {}", breakdown.total(), qv);

        self.state.fidelity = Some(breakdown);
        self.state.quantum_volume = Some(qv);
        self.advance(PipelineStage::Scored);
        Ok(breakdown)
    }

    /// Run every stage and assemble the result
    pub fn run(&mut self) -> QreResult<EstimationResult> {
        let analysis = self.analyze()?.clone();
        let swaps = self.route()?;
        let time_ns = self.time()?;
        let breakdown = self.score()?;

        let classical = estimate_classical_resources(self.circuit, self.options.simulation_mode);

        let fault_tolerance = if self.options.enable_fault_tolerance {
            let ft = estimate_fault_tolerant_resources(
                self.circuit.num_qubits(),
                analysis.t_gate_count,
                analysis.depth,
                self.arch,
                self.options.target_logical_error_rate,
            );
            log::debug!("Fault tolerance: {}", ft);
            Some(ft)
        } else {
            None
        };

        let fidelity = breakdown.total();
        let mut result = EstimationResult {
            circuit_id: self.circuit.id().to_string(),
            circuit_name: self.circuit.name().to_string(),
            architecture_name: self.arch.name.clone(),
            circuit_width: self.circuit.num_qubits(),
            analysis,
            swap_strategy: self.options.swap_strategy,
            swap_count: swaps,
            compiled_depth: self.state.compiled_depth,
            execution_time_ns: time_ns,
            required_coherence: self.state.required_coherence.unwrap_or_default(),
            coherence_limited: self.state.coherence_limited.unwrap_or_default(),
            fidelity,
            error_rate: 1.0 - fidelity,
            fidelity_breakdown: breakdown,
            dominant_error_source: breakdown.dominant_error_source(),
            quantum_volume: self.state.quantum_volume.unwrap_or(1),
            classical,
            fault_tolerance,
            suggestions: Vec::new(),
            timestamp: Utc::now(),
        };
        result.suggestions = generate_suggestions(&result, self.arch);

        self.advance(PipelineStage::Completed);
        Ok(result)
    }

    /// Discard intermediate results
    pub fn reset(&mut self) {
        self.state = PipelineState::new();
    }
}

/// Full estimate for one circuit on one architecture
/// Gantree: estimate_all(c,arch,options) -> Result<EstimationResult> // 전체 추정
pub fn estimate_all(
    circuit: &Circuit,
    arch: &Architecture,
    options: &EstimationOptions,
) -> QreResult<EstimationResult> {
    Pipeline::new(circuit, arch, options.clone()).run()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use qre_core::{CircuitBuilder, Connectivity, QreError, Technology};

    fn ghz() -> Circuit {
        CircuitBuilder::with_name(4, "GHZ").h(0).cx_chain().build()
    }

    fn linear() -> Architecture {
        Architecture::from_technology("lin", 4, Connectivity::Linear, Technology::Superconducting)
    }

    #[test]
    fn test_pipeline_new() {
        let (c, a) = (ghz(), linear());
        let pipeline = Pipeline::new(&c, &a, EstimationOptions::default());
        assert_eq!(pipeline.stage(), PipelineStage::Initial);
        assert!(pipeline.state().analysis.is_none());
    }

    #[test]
    fn test_staged_execution() {
        let (c, a) = (ghz(), linear());
        let mut pipeline = Pipeline::new(&c, &a, EstimationOptions::default());

        let depth = pipeline.analyze().unwrap().depth;
        assert_eq!(depth, 4);
        assert_eq!(pipeline.stage(), PipelineStage::Analyzed);

        assert_eq!(pipeline.route().unwrap(), SwapCount::Finite(0));
        assert_eq!(pipeline.state().compiled_depth, Some(4));

        // 4 layers * 200 ns + 4 * 500 ns measurement
        let t = pipeline.time().unwrap();
        assert!((t - 2800.0).abs() < 1e-9);

        let breakdown = pipeline.score().unwrap();
        assert!(breakdown.total() > 0.9);
        assert_eq!(pipeline.stage(), PipelineStage::Scored);

        pipeline.run().unwrap();
        assert_eq!(pipeline.stage(), PipelineStage::Completed);
    }

    #[test]
    fn test_later_stage_runs_earlier_ones() {
        let (c, a) = (ghz(), linear());
        let mut pipeline = Pipeline::new(&c, &a, EstimationOptions::default());
        pipeline.score().unwrap();
        assert!(pipeline.state().analysis.is_some());
        assert!(pipeline.state().execution_time_ns.is_some());
    }

    #[test]
    fn test_compiled_depth_adds_swap_layers() {
        let (c, a) = (CircuitBuilder::new(4).cnot(0, 3).build(), linear());
        let mut pipeline = Pipeline::new(&c, &a, EstimationOptions::quick());
        assert_eq!(pipeline.route().unwrap(), SwapCount::Finite(2));
        // 1 + ceil(2 / 2)
        assert_eq!(pipeline.state().compiled_depth, Some(2));
    }

    #[test]
    fn test_invalid_architecture_rejected() {
        let c = ghz();
        let a = linear().with_coherence(10.0, 50.0);
        let mut pipeline = Pipeline::new(&c, &a, EstimationOptions::default());
        assert!(matches!(pipeline.analyze(), Err(QreError::InvalidT2 { .. })));
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = EstimationOptions::new().with_target_error_rate(2.0);
        let err = estimate_all(&ghz(), &linear(), &options).unwrap_err();
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_reset() {
        let (c, a) = (ghz(), linear());
        let mut pipeline = Pipeline::new(&c, &a, EstimationOptions::default());
        pipeline.time().unwrap();
        pipeline.reset();
        assert_eq!(pipeline.stage(), PipelineStage::Initial);
        assert!(pipeline.state().swap_count.is_none());
    }
}
