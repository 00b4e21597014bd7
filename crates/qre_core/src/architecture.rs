//! Hardware architecture model for QRE
//!
//! Gantree: L2_Hardware → Architecture
//!
//! Read-only description of a quantum device: size, connectivity, native
//! gates, calibration (gate errors, readout errors, T1/T2) and gate timings.
//! Per-qubit vectors hold either one entry per qubit or a single entry
//! that applies uniformly.

use crate::constants::estimation::{DEFAULT_READOUT_ERROR, DEFAULT_T1_US, DEFAULT_T2_US};
use crate::constants::technology::{self, Benchmark};
use crate::error::{QreError, QreResult};
use crate::topology::{AdjacencyGraph, Connectivity};
use crate::types::{mean, Microseconds, Nanoseconds};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Tolerance for the T2 <= 2·T1 check
const T2_TOLERANCE_US: f64 = 1e-9;

// ============================================================================
// Technology
// ============================================================================

/// Qubit technology, selects a row of the benchmark table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Technology {
    /// Superconducting transmons
    #[default]
    Superconducting,
    /// Trapped ions
    TrappedIon,
    /// Photonic
    Photonic,
}

impl Technology {
    /// Benchmark parameters for this technology
    pub fn benchmark(&self) -> &'static Benchmark {
        match self {
            Technology::Superconducting => &technology::SUPERCONDUCTING,
            Technology::TrappedIon => &technology::TRAPPED_ION,
            Technology::Photonic => &technology::PHOTONIC,
        }
    }
}

// ============================================================================
// Gate Error / Timing Tables
// ============================================================================

/// Gate error rates: per-gate entries plus category fallbacks
/// Gantree: GateErrors // 게이트 에러 표
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GateErrors {
    /// Fallback for any single-qubit gate
    #[serde(default, alias = "single-qubit", skip_serializing_if = "Option::is_none")]
    pub single_qubit: Option<f64>,

    /// Fallback for any gate on two or more qubits
    #[serde(default, alias = "two-qubit", skip_serializing_if = "Option::is_none")]
    pub two_qubit: Option<f64>,

    /// Per-tag error rates
    #[serde(flatten)]
    pub per_gate: BTreeMap<String, f64>,
}

impl GateErrors {
    /// Category fallbacks only
    pub fn uniform(single_qubit: f64, two_qubit: f64) -> Self {
        Self {
            single_qubit: Some(single_qubit),
            two_qubit: Some(two_qubit),
            per_gate: BTreeMap::new(),
        }
    }

    /// Per-tag rate, tags compared case-insensitively
    pub fn get(&self, tag: &str) -> Option<f64> {
        lookup(&self.per_gate, tag)
    }

    fn check(&self) -> QreResult<()> {
        check_probability("single-qubit gate error", self.single_qubit)?;
        check_probability("two-qubit gate error", self.two_qubit)?;
        for (tag, &rate) in &self.per_gate {
            check_probability(&format!("gate error '{}'", tag), Some(rate))?;
        }
        Ok(())
    }
}

/// Gate durations (ns): per-gate entries plus category fallbacks
/// Gantree: GateTimings // 게이트 시간 표
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GateTimings {
    /// Fallback for any single-qubit gate
    #[serde(default, rename = "single_qubit", alias = "single-qubit", skip_serializing_if = "Option::is_none")]
    pub single_qubit_ns: Option<Nanoseconds>,

    /// Fallback for any gate on two or more qubits
    #[serde(default, rename = "two_qubit", alias = "two-qubit", skip_serializing_if = "Option::is_none")]
    pub two_qubit_ns: Option<Nanoseconds>,

    /// Measurement of one qubit
    #[serde(default, rename = "measurement", skip_serializing_if = "Option::is_none")]
    pub measurement_ns: Option<Nanoseconds>,

    /// Per-tag durations
    #[serde(flatten)]
    pub per_gate: BTreeMap<String, Nanoseconds>,
}

impl GateTimings {
    /// Category fallbacks only
    pub fn uniform(single_qubit_ns: f64, two_qubit_ns: f64, measurement_ns: f64) -> Self {
        Self {
            single_qubit_ns: Some(single_qubit_ns),
            two_qubit_ns: Some(two_qubit_ns),
            measurement_ns: Some(measurement_ns),
            per_gate: BTreeMap::new(),
        }
    }

    /// Per-tag duration, tags compared case-insensitively
    pub fn get(&self, tag: &str) -> Option<Nanoseconds> {
        lookup(&self.per_gate, tag)
    }

    fn check(&self) -> QreResult<()> {
        check_positive("single-qubit gate time", self.single_qubit_ns)?;
        check_positive("two-qubit gate time", self.two_qubit_ns)?;
        check_positive("measurement time", self.measurement_ns)?;
        for (tag, &ns) in &self.per_gate {
            check_positive(&format!("gate time '{}'", tag), Some(ns))?;
        }
        Ok(())
    }
}

fn lookup(table: &BTreeMap<String, f64>, tag: &str) -> Option<f64> {
    table
        .get(tag)
        .or_else(|| {
            table
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(tag))
                .map(|(_, v)| v)
        })
        .copied()
}

// ============================================================================
// Hardware Constraints
// ============================================================================

/// Execution limits advertised by a provider
/// Gantree: HardwareConstraints // 실행 제약
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HardwareConstraints {
    /// Deepest compiled circuit the device accepts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_circuit_depth: Option<usize>,

    /// Shot limit per job
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_shots: Option<u64>,
}

impl HardwareConstraints {
    /// Depth limit only
    pub fn max_depth(depth: usize) -> Self {
        Self {
            max_circuit_depth: Some(depth),
            max_shots: None,
        }
    }

    /// True when `depth` is within the depth limit (or there is none)
    pub fn allows_depth(&self, depth: usize) -> bool {
        self.max_circuit_depth.map_or(true, |max| depth <= max)
    }
}

// ============================================================================
// Architecture
// ============================================================================

/// Quantum hardware architecture
/// Gantree: Architecture // 하드웨어 구조
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Architecture {
    /// Device name
    pub name: String,

    /// Number of physical qubits
    #[serde(rename = "qubit_count")]
    pub num_qubits: usize,

    /// Interaction topology
    pub connectivity: Connectivity,

    /// Native gate tags (upper-case)
    #[serde(default, rename = "native_gate_set")]
    pub native_gates: BTreeSet<String>,

    /// Gate error rates
    pub gate_errors: GateErrors,

    /// Readout error per qubit (or one uniform entry)
    pub readout_errors: Vec<f64>,

    /// T1 per qubit in µs (or one uniform entry); `null` is unbounded
    #[serde(rename = "t1_times", deserialize_with = "coherence_times")]
    pub t1_us: Vec<Microseconds>,

    /// T2 per qubit in µs (or one uniform entry); `null` is unbounded
    #[serde(rename = "t2_times", deserialize_with = "coherence_times")]
    pub t2_us: Vec<Microseconds>,

    /// Gate durations
    pub gate_timings: GateTimings,

    /// Provider execution limits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<HardwareConstraints>,
}

impl Architecture {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Device with the typical parameters of a technology
    /// Gantree: from_technology(name,n,conn,tech) -> Self // 기술 프리셋
    pub fn from_technology(
        name: impl Into<String>,
        num_qubits: usize,
        connectivity: Connectivity,
        technology: Technology,
    ) -> Self {
        let b = technology.benchmark();
        Self {
            name: name.into(),
            num_qubits,
            connectivity,
            native_gates: BTreeSet::new(),
            gate_errors: GateErrors::uniform(b.single_qubit_error, b.two_qubit_error),
            readout_errors: vec![b.readout_error],
            t1_us: vec![b.t1_us],
            t2_us: vec![b.t2_us],
            gate_timings: GateTimings::uniform(b.single_qubit_ns, b.two_qubit_ns, b.measurement_ns),
            constraints: None,
        }
    }

    /// Noiseless device with infinite coherence and superconducting timings
    pub fn ideal(name: impl Into<String>, num_qubits: usize, connectivity: Connectivity) -> Self {
        Self::from_technology(name, num_qubits, connectivity, Technology::Superconducting)
            .with_gate_errors(GateErrors::uniform(0.0, 0.0))
            .with_readout_error(0.0)
            .with_coherence(f64::INFINITY, f64::INFINITY)
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> QreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> QreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Replace the gate error table
    pub fn with_gate_errors(mut self, errors: GateErrors) -> Self {
        self.gate_errors = errors;
        self
    }

    /// Set a per-gate error rate
    pub fn with_gate_error(mut self, tag: &str, error: f64) -> Self {
        self.gate_errors.per_gate.insert(tag.to_ascii_uppercase(), error);
        self
    }

    /// Replace the gate timing table
    pub fn with_gate_timings(mut self, timings: GateTimings) -> Self {
        self.gate_timings = timings;
        self
    }

    /// Set a per-gate duration
    pub fn with_gate_time(mut self, tag: &str, duration_ns: Nanoseconds) -> Self {
        self.gate_timings
            .per_gate
            .insert(tag.to_ascii_uppercase(), duration_ns);
        self
    }

    /// Uniform readout error
    pub fn with_readout_error(mut self, error: f64) -> Self {
        self.readout_errors = vec![error];
        self
    }

    /// Per-qubit readout errors
    pub fn with_readout_errors(mut self, errors: Vec<f64>) -> Self {
        self.readout_errors = errors;
        self
    }

    /// Uniform T1/T2 (µs)
    pub fn with_coherence(mut self, t1_us: Microseconds, t2_us: Microseconds) -> Self {
        self.t1_us = vec![t1_us];
        self.t2_us = vec![t2_us];
        self
    }

    /// Per-qubit T1/T2 (µs)
    pub fn with_coherence_per_qubit(mut self, t1_us: Vec<f64>, t2_us: Vec<f64>) -> Self {
        self.t1_us = t1_us;
        self.t2_us = t2_us;
        self
    }

    /// Attach provider execution limits
    pub fn with_constraints(mut self, constraints: HardwareConstraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Set native gate tags
    pub fn with_native_gates(mut self, gates: &[&str]) -> Self {
        self.native_gates = gates.iter().map(|g| g.to_ascii_uppercase()).collect();
        self
    }

    // ========================================================================
    // Derived Data
    // ========================================================================

    /// Build the adjacency graph for this device
    pub fn adjacency(&self) -> AdjacencyGraph {
        AdjacencyGraph::build(self.num_qubits, &self.connectivity)
    }

    /// Mean readout error (falls back when none are listed)
    pub fn avg_readout_error(&self) -> f64 {
        mean(&self.readout_errors).unwrap_or(DEFAULT_READOUT_ERROR)
    }

    /// Mean T1 in µs (falls back when none are listed)
    pub fn avg_t1_us(&self) -> Microseconds {
        mean(&self.t1_us).unwrap_or(DEFAULT_T1_US)
    }

    /// Mean T2 in µs (falls back when none are listed)
    pub fn avg_t2_us(&self) -> Microseconds {
        mean(&self.t2_us).unwrap_or(DEFAULT_T2_US)
    }

    /// Readout error of one physical qubit
    pub fn readout_error(&self, qubit: usize) -> f64 {
        per_qubit(&self.readout_errors, qubit).unwrap_or(DEFAULT_READOUT_ERROR)
    }

    /// Check whether a tag is native (case-insensitive)
    pub fn is_native(&self, tag: &str) -> bool {
        self.native_gates.contains(&tag.to_ascii_uppercase())
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check calibration data and connectivity for consistency
    /// Gantree: validate(&self) -> Result // 검증
    pub fn validate(&self) -> QreResult<()> {
        self.gate_errors.check()?;
        self.gate_timings.check()?;

        self.check_len("readout_errors", self.readout_errors.len())?;
        self.check_len("t1_times", self.t1_us.len())?;
        self.check_len("t2_times", self.t2_us.len())?;

        for &e in &self.readout_errors {
            check_probability("readout error", Some(e))?;
        }
        for &t in self.t1_us.iter().chain(&self.t2_us) {
            check_positive("coherence time", Some(t))?;
        }

        // T2 <= 2*T1 (physical constraint)
        for qubit in 0..self.num_qubits {
            let t1 = per_qubit(&self.t1_us, qubit);
            let t2 = per_qubit(&self.t2_us, qubit);
            if let (Some(t1_us), Some(t2_us)) = (t1, t2) {
                if t2_us > 2.0 * t1_us + T2_TOLERANCE_US {
                    return Err(QreError::InvalidT2 {
                        qubit,
                        t2_us,
                        t1_us,
                    });
                }
            }
        }

        if let Connectivity::Custom(adjacencies) = &self.connectivity {
            self.check_custom(adjacencies)?;
        }

        Ok(())
    }

    fn check_len(&self, what: &str, len: usize) -> QreResult<()> {
        if len <= 1 || len == self.num_qubits {
            Ok(())
        } else {
            Err(QreError::InvalidCalibrationLength {
                what: what.to_string(),
                len,
                num_qubits: self.num_qubits,
            })
        }
    }

    fn check_custom(&self, adjacencies: &[Vec<usize>]) -> QreResult<()> {
        if adjacencies.len() != self.num_qubits {
            return Err(QreError::InvalidConnectivity(format!(
                "adjacency list has {} rows for {} qubits",
                adjacencies.len(),
                self.num_qubits
            )));
        }
        for (i, neighbors) in adjacencies.iter().enumerate() {
            for &j in neighbors {
                if j >= self.num_qubits {
                    return Err(QreError::InvalidConnectivity(format!(
                        "qubit {} lists neighbor {} outside the device",
                        i, j
                    )));
                }
                if !adjacencies[j].contains(&i) {
                    return Err(QreError::InvalidConnectivity(format!(
                        "asymmetric coupling {} -> {}",
                        i, j
                    )));
                }
            }
        }
        Ok(())
    }
}

/// JSON writes infinite times as `null`; read them back as `+∞`
fn coherence_times<'de, D>(deserializer: D) -> Result<Vec<Microseconds>, D::Error>
where
    D: Deserializer<'de>,
{
    let times: Vec<Option<Microseconds>> = Vec::deserialize(deserializer)?;
    Ok(times
        .into_iter()
        .map(|t| t.unwrap_or(f64::INFINITY))
        .collect())
}

/// Value for a qubit from a per-qubit or uniform vector
fn per_qubit(values: &[f64], qubit: usize) -> Option<f64> {
    match values.len() {
        0 => None,
        1 => Some(values[0]),
        _ => values.get(qubit).copied(),
    }
}

fn check_probability(what: &str, value: Option<f64>) -> QreResult<()> {
    match value {
        Some(v) if !(0.0..=1.0).contains(&v) => Err(QreError::InvalidProbability {
            what: what.to_string(),
            value: v,
        }),
        _ => Ok(()),
    }
}

fn check_positive(what: &str, value: Option<f64>) -> QreResult<()> {
    match value {
        Some(v) if v.is_nan() || v <= 0.0 => Err(QreError::InvalidDuration {
            what: what.to_string(),
            value: v,
        }),
        _ => Ok(()),
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Architecture({}, {} qubits, {})",
            self.name, self.num_qubits, self.connectivity
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn linear5() -> Architecture {
        Architecture::from_technology("lin5", 5, Connectivity::Linear, Technology::Superconducting)
    }

    #[test]
    fn test_presets_are_valid() {
        for tech in [
            Technology::Superconducting,
            Technology::TrappedIon,
            Technology::Photonic,
        ] {
            let arch = Architecture::from_technology("dev", 8, Connectivity::Ring, tech);
            assert!(arch.validate().is_ok(), "{:?} preset invalid", tech);
        }
        assert!(Architecture::ideal("ideal", 3, Connectivity::AllToAll)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_per_gate_lookup_case_insensitive() {
        let arch = linear5().with_gate_error("cnot", 0.02);
        assert_eq!(arch.gate_errors.get("CNOT"), Some(0.02));
        assert_eq!(arch.gate_errors.get("cnot"), Some(0.02));
        assert_eq!(arch.gate_errors.get("CZ"), None);
    }

    #[test]
    fn test_invalid_t2() {
        let arch = linear5().with_coherence(100.0, 250.0);
        assert!(matches!(
            arch.validate(),
            Err(QreError::InvalidT2 { qubit: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_lengths_and_ranges() {
        let arch = linear5().with_readout_errors(vec![0.01, 0.02]);
        assert!(matches!(
            arch.validate(),
            Err(QreError::InvalidCalibrationLength { len: 2, .. })
        ));

        let arch = linear5().with_gate_error("H", 1.5);
        assert!(matches!(
            arch.validate(),
            Err(QreError::InvalidProbability { .. })
        ));

        let arch = linear5().with_gate_time("H", 0.0);
        assert!(matches!(arch.validate(), Err(QreError::InvalidDuration { .. })));
    }

    #[test]
    fn test_custom_connectivity_validation() {
        let mut arch = linear5();
        arch.num_qubits = 3;
        arch.connectivity = Connectivity::Custom(vec![vec![1], vec![0, 2], vec![1]]);
        assert!(arch.validate().is_ok());

        arch.connectivity = Connectivity::Custom(vec![vec![1], vec![2], vec![1]]);
        assert!(matches!(
            arch.validate(),
            Err(QreError::InvalidConnectivity(_))
        ));

        arch.connectivity = Connectivity::Custom(vec![vec![1], vec![0]]);
        assert!(arch.validate().is_err());
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "name": "Basic Linear 3Q",
            "qubit_count": 3,
            "connectivity": {"type": "linear"},
            "native_gate_set": ["H", "CNOT"],
            "gate_errors": {"single-qubit": 0.001, "CNOT": 0.01},
            "readout_errors": [0.02],
            "t1_times": [100.0, 110.0, 105.0],
            "t2_times": [80.0],
            "gate_timings": {"single_qubit": 50.0, "CNOT": 300.0, "measurement": 1000.0}
        }"#;
        let arch = Architecture::from_json(json).unwrap();
        assert_eq!(arch.num_qubits, 3);
        assert_eq!(arch.gate_errors.single_qubit, Some(0.001));
        assert_eq!(arch.gate_errors.get("CNOT"), Some(0.01));
        assert_eq!(arch.gate_timings.measurement_ns, Some(1000.0));
        assert_eq!(arch.gate_timings.get("cnot"), Some(300.0));
        assert!(arch.is_native("cnot"));
        assert!(arch.validate().is_ok());
    }

    #[test]
    fn test_averages_and_fallbacks() {
        let arch = linear5().with_coherence_per_qubit(vec![90.0, 110.0], vec![60.0, 100.0]);
        assert_relative_eq!(arch.avg_t1_us(), 100.0);
        assert_relative_eq!(arch.avg_t2_us(), 80.0);

        let empty = linear5()
            .with_readout_errors(vec![])
            .with_coherence_per_qubit(vec![], vec![]);
        assert_relative_eq!(empty.avg_readout_error(), 5e-3);
        assert_relative_eq!(empty.avg_t1_us(), 100.0);
        assert_relative_eq!(empty.avg_t2_us(), 80.0);
        assert_relative_eq!(empty.readout_error(3), 5e-3);
    }

    #[test]
    fn test_infinite_coherence_json_round_trip() {
        let ideal = Architecture::ideal("ideal", 3, Connectivity::AllToAll);
        let json = ideal.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["t1_times"][0].is_null());
        assert!(value["t2_times"][0].is_null());

        let back = Architecture::from_json(&json).unwrap();
        assert_eq!(back, ideal);
        assert!(back.avg_t1_us().is_infinite());
        assert!(back.validate().is_ok());

        let finite = linear5();
        assert_eq!(Architecture::from_json(&finite.to_json().unwrap()).unwrap(), finite);
    }

    #[test]
    fn test_constraints() {
        let json = r#"{
            "name": "limited",
            "qubit_count": 2,
            "connectivity": {"type": "linear"},
            "gate_errors": {},
            "readout_errors": [],
            "t1_times": [],
            "t2_times": [],
            "gate_timings": {},
            "constraints": {"max_circuit_depth": 50, "max_shots": 10000}
        }"#;
        let arch = Architecture::from_json(json).unwrap();
        let limits = arch.constraints.unwrap();
        assert_eq!(limits.max_circuit_depth, Some(50));
        assert_eq!(limits.max_shots, Some(10_000));
        assert!(limits.allows_depth(50));
        assert!(!limits.allows_depth(51));

        // Absent by default and omitted from JSON
        let plain = linear5();
        assert!(plain.constraints.is_none());
        assert!(!plain.to_json().unwrap().contains("constraints"));

        let arch = plain.with_constraints(HardwareConstraints::max_depth(10));
        assert!(HardwareConstraints::default().allows_depth(usize::MAX));
        assert_eq!(
            Architecture::from_json(&arch.to_json().unwrap()).unwrap(),
            arch
        );
    }

    #[test]
    fn test_native_gates() {
        let arch = linear5().with_native_gates(&["rz", "sx", "ecr"]);
        assert!(arch.is_native("ECR"));
        assert!(!arch.is_native("CNOT"));
    }
}
