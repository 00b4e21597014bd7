//! SWAP overhead estimation for QRE
//!
//! Gantree: L4_Routing → SwapRouter
//!
//! Counts the SWAPs needed to make every two-qubit gate act on coupled
//! physical qubits. Two estimators are available:
//!
//! - shortest-path: fixed mapping, `max(dist - 1, 0)` per gate (lower bound)
//! - greedy: live mapping, one improving SWAP at a time
//!
//! Neither is an optimal router.

use qre_core::types::identity_mapping;
use qre_core::{AdjacencyGraph, Architecture, Circuit, QreResult, QubitId, QubitMapping};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Strategy / Count
// ============================================================================

/// SWAP estimation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SwapStrategy {
    /// Distance-based lower bound under the initial mapping
    ShortestPath,
    /// Greedy router with a live mapping
    #[default]
    #[serde(rename = "greedy-router")]
    Greedy,
    /// No routing (always zero)
    None,
}

impl SwapStrategy {
    /// Name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            SwapStrategy::ShortestPath => "shortest-path",
            SwapStrategy::Greedy => "greedy-router",
            SwapStrategy::None => "none",
        }
    }
}

impl fmt::Display for SwapStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Number of SWAPs, or unbounded when the circuit cannot be routed
/// Gantree: SwapCount // SWAP 수
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapCount {
    /// Finite count
    Finite(usize),
    /// Circuit does not fit or operands are unreachable
    Unbounded,
}

impl SwapCount {
    /// Finite count, if any
    pub fn finite(&self) -> Option<usize> {
        match self {
            SwapCount::Finite(n) => Some(*n),
            SwapCount::Unbounded => None,
        }
    }

    /// Check for the unbounded sentinel
    pub fn is_unbounded(&self) -> bool {
        matches!(self, SwapCount::Unbounded)
    }

    /// As a float (`+∞` when unbounded)
    pub fn as_f64(&self) -> f64 {
        match self {
            SwapCount::Finite(n) => *n as f64,
            SwapCount::Unbounded => f64::INFINITY,
        }
    }
}

impl Default for SwapCount {
    fn default() -> Self {
        SwapCount::Finite(0)
    }
}

impl fmt::Display for SwapCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapCount::Finite(n) => write!(f, "{}", n),
            SwapCount::Unbounded => write!(f, "inf"),
        }
    }
}

// ============================================================================
// Estimation
// ============================================================================

/// Estimate SWAP overhead for a circuit on an architecture
/// Gantree: estimate_swap_overhead(c,arch,strategy,mapping) -> SwapCount // SWAP 추정
///
/// Fails only when a gate references a qubit outside the circuit. An
/// invalid `initial_mapping` is replaced by the identity mapping.
pub fn estimate_swap_overhead(
    circuit: &Circuit,
    arch: &Architecture,
    strategy: SwapStrategy,
    initial_mapping: Option<&[QubitId]>,
) -> QreResult<SwapCount> {
    circuit.validate()?;

    if strategy == SwapStrategy::None || arch.connectivity.is_all_to_all() {
        return Ok(SwapCount::Finite(0));
    }

    if circuit.num_qubits() > arch.num_qubits {
        log::warn!(
            "Circuit needs {} qubits but {} has {}, SWAP count unbounded",
            circuit.num_qubits(),
            arch.name,
            arch.num_qubits
        );
        return Ok(SwapCount::Unbounded);
    }

    let graph = arch.adjacency();
    let mapping = sanitize_mapping(initial_mapping, circuit.num_qubits(), arch.num_qubits);

    let count = match strategy {
        SwapStrategy::ShortestPath => shortest_path_swaps(circuit, &graph, &mapping),
        SwapStrategy::Greedy => greedy_swaps(circuit, &graph, mapping),
        SwapStrategy::None => SwapCount::Finite(0),
    };

    if count.is_unbounded() {
        log::warn!("Unreachable qubit pair on {}, SWAP count unbounded", arch.name);
    }
    log::debug!("SWAP estimate ({}) on {}: {}", strategy, arch.name, count);

    Ok(count)
}

/// Caller mapping if well-formed, identity otherwise
fn sanitize_mapping(
    mapping: Option<&[QubitId]>,
    num_logical: usize,
    num_physical: usize,
) -> QubitMapping {
    let Some(mapping) = mapping else {
        return identity_mapping(num_logical);
    };

    let mut seen = vec![false; num_physical];
    let valid = mapping.len() == num_logical
        && mapping
            .iter()
            .all(|&p| p < num_physical && !std::mem::replace(&mut seen[p], true));

    if valid {
        mapping.to_vec()
    } else {
        log::warn!(
            "Invalid initial mapping {:?} for {} logical / {} physical qubits, using identity",
            mapping,
            num_logical,
            num_physical
        );
        identity_mapping(num_logical)
    }
}

/// Sum of `max(dist - 1, 0)` under a fixed mapping
fn shortest_path_swaps(circuit: &Circuit, graph: &AdjacencyGraph, mapping: &[QubitId]) -> SwapCount {
    let mut total = 0;
    for (a, b) in circuit.two_qubit_pairs() {
        match graph.distance(mapping[a], mapping[b]) {
            Some(dist) => total += dist.saturating_sub(1),
            None => return SwapCount::Unbounded,
        }
    }
    SwapCount::Finite(total)
}

/// Greedy routing with a live mapping
///
/// Candidate SWAPs exchange an operand with an occupied neighbour. The
/// neighbours of the first operand are tried before those of the second,
/// each in ascending index order; a candidate wins only if strictly closer.
/// When no candidate improves, the remaining `dist - 1` is charged and the
/// gate is left.
fn greedy_swaps(circuit: &Circuit, graph: &AdjacencyGraph, mut mapping: QubitMapping) -> SwapCount {
    // physical -> logical
    let mut occupant: Vec<Option<usize>> = vec![None; graph.num_qubits()];
    for (logical, &physical) in mapping.iter().enumerate() {
        occupant[physical] = Some(logical);
    }

    let mut total = 0;

    for (a, b) in circuit.two_qubit_pairs() {
        loop {
            let (pa, pb) = (mapping[a], mapping[b]);
            if graph.is_adjacent(pa, pb) {
                break;
            }
            let current = match graph.distance(pa, pb) {
                Some(d) => d,
                None => return SwapCount::Unbounded,
            };
            if current <= 1 {
                break;
            }

            let mut best: Option<(QubitId, QubitId)> = None;
            let mut best_dist = current;

            for &n in graph.neighbors(pa) {
                if occupant[n].is_none() {
                    continue;
                }
                if let Some(d) = graph.distance(n, pb) {
                    if d < best_dist {
                        best_dist = d;
                        best = Some((pa, n));
                    }
                }
            }
            for &n in graph.neighbors(pb) {
                if occupant[n].is_none() {
                    continue;
                }
                if let Some(d) = graph.distance(pa, n) {
                    if d < best_dist {
                        best_dist = d;
                        best = Some((pb, n));
                    }
                }
            }

            match best {
                Some((x, y)) => {
                    if let (Some(lx), Some(ly)) = (occupant[x], occupant[y]) {
                        mapping[lx] = y;
                        mapping[ly] = x;
                        occupant.swap(x, y);
                    }
                    total += 1;
                }
                None => {
                    total += current - 1;
                    break;
                }
            }
        }
    }

    SwapCount::Finite(total)
}

// ============================================================================
// Tests
// ============================================================================
