//! Qubit connectivity for QRE
//!
//! Gantree: L2_Hardware → Topology
//!
//! `Connectivity` names the interaction topology of a device;
//! `AdjacencyGraph` is the undirected neighbour list derived from it and
//! answers shortest-path queries by breadth-first search.
//!
//! Heavy-hex and heavy-square are approximated by a linear chain with an
//! extra (i, i+2) link whenever `i % 3 == 0`. This is not a faithful
//! heavy-hex lattice, and SWAP estimates for those devices depend on it.

use crate::types::QubitId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Named or custom interaction topology
/// Gantree: Connectivity // 연결 토폴로지
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "adjacencies", rename_all = "kebab-case")]
pub enum Connectivity {
    /// Every pair coupled (trapped ions)
    AllToAll,
    /// Chain 0-1-2-…-(n-1)
    Linear,
    /// Chain closed back to 0
    Ring,
    /// Row-major ⌈√n⌉ × ⌈√n⌉ grid
    Grid,
    /// IBM heavy-hex (approximated)
    HeavyHex,
    /// Heavy-square (approximated like heavy-hex)
    HeavySquare,
    /// Caller-supplied adjacency list, `adjacencies[i]` = neighbours of i
    Custom(Vec<Vec<QubitId>>),
}

impl Connectivity {
    /// Short name for display and reports
    pub fn name(&self) -> &'static str {
        match self {
            Connectivity::AllToAll => "all-to-all",
            Connectivity::Linear => "linear",
            Connectivity::Ring => "ring",
            Connectivity::Grid => "grid",
            Connectivity::HeavyHex => "heavy-hex",
            Connectivity::HeavySquare => "heavy-square",
            Connectivity::Custom(_) => "custom",
        }
    }

    /// Check for all-to-all coupling
    pub fn is_all_to_all(&self) -> bool {
        matches!(self, Connectivity::AllToAll)
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Undirected adjacency list indexed by physical qubit
/// Gantree: AdjacencyGraph // 인접 리스트
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    /// Sorted, deduplicated neighbour lists
    adj: Vec<Vec<QubitId>>,
}

impl AdjacencyGraph {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Build the graph for `num_qubits` physical qubits
    /// Gantree: build(n, Connectivity) -> Self // 그래프 생성
    pub fn build(num_qubits: usize, connectivity: &Connectivity) -> Self {
        let n = num_qubits;
        let mut graph = Self {
            adj: vec![Vec::new(); n],
        };

        match connectivity {
            Connectivity::AllToAll => {
                for i in 0..n {
                    for j in i + 1..n {
                        graph.add_edge(i, j);
                    }
                }
            }
            Connectivity::Linear => graph.add_chain(n),
            Connectivity::Ring => {
                graph.add_chain(n);
                if n > 1 {
                    graph.add_edge(n - 1, 0);
                }
            }
            Connectivity::Grid => {
                let side = ceil_sqrt(n);
                for r in 0..side {
                    for c in 0..side {
                        let idx = r * side + c;
                        if idx >= n {
                            continue;
                        }
                        // Right neighbor
                        if c + 1 < side && idx + 1 < n {
                            graph.add_edge(idx, idx + 1);
                        }
                        // Down neighbor
                        if r + 1 < side && idx + side < n {
                            graph.add_edge(idx, idx + side);
                        }
                    }
                }
            }
            Connectivity::HeavyHex | Connectivity::HeavySquare => {
                graph.add_chain(n);
                for i in (0..n).step_by(3) {
                    if i + 2 < n {
                        graph.add_edge(i, i + 2);
                    }
                }
            }
            Connectivity::Custom(adjacencies) => {
                // Taken as given; entries beyond the device are ignored.
                for (i, neighbors) in adjacencies.iter().enumerate().take(n) {
                    graph.adj[i].extend(neighbors.iter().copied().filter(|&q| q < n));
                }
            }
        }

        for neighbors in &mut graph.adj {
            neighbors.sort_unstable();
            neighbors.dedup();
        }

        graph
    }

    fn add_chain(&mut self, n: usize) {
        for i in 0..n.saturating_sub(1) {
            self.add_edge(i, i + 1);
        }
    }

    fn add_edge(&mut self, a: QubitId, b: QubitId) {
        if a != b {
            self.adj[a].push(b);
            self.adj[b].push(a);
        }
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Number of physical qubits
    pub fn num_qubits(&self) -> usize {
        self.adj.len()
    }

    /// Number of directed adjacency entries / 2 for symmetric graphs
    pub fn num_edges(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Neighbours of a qubit in ascending order (empty when out of range)
    /// Gantree: neighbors(q) -> &[QubitId] // 이웃
    pub fn neighbors(&self, qubit: QubitId) -> &[QubitId] {
        self.adj.get(qubit).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check for a direct coupling
    pub fn is_adjacent(&self, a: QubitId, b: QubitId) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Raw adjacency lists
    pub fn as_lists(&self) -> &[Vec<QubitId>] {
        &self.adj
    }

    // ========================================================================
    // Shortest Paths
    // ========================================================================

    /// Hop distance between two qubits by breadth-first search
    /// Gantree: distance(a, b) -> Option<usize> // 최단 거리
    ///
    /// `None` means unreachable (or an index out of range) and stands for +∞.
    pub fn distance(&self, start: QubitId, end: QubitId) -> Option<usize> {
        if start >= self.adj.len() || end >= self.adj.len() {
            return None;
        }
        if start == end {
            return Some(0);
        }

        let mut visited = vec![false; self.adj.len()];
        let mut queue = VecDeque::new();

        visited[start] = true;
        queue.push_back((start, 0usize));

        while let Some((current, dist)) = queue.pop_front() {
            for &neighbor in &self.adj[current] {
                if neighbor == end {
                    return Some(dist + 1);
                }
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back((neighbor, dist + 1));
                }
            }
        }

        None
    }

    /// Check if every qubit is reachable from qubit 0
    pub fn is_connected(&self) -> bool {
        (1..self.adj.len()).all(|q| self.distance(0, q).is_some())
    }

    /// Maximum finite distance over all pairs
    pub fn diameter(&self) -> usize {
        let n = self.adj.len();
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .filter_map(|(i, j)| self.distance(i, j))
            .max()
            .unwrap_or(0)
    }
}

/// Smallest `s` with `s * s >= n`
fn ceil_sqrt(n: usize) -> usize {
    let mut s = (n as f64).sqrt() as usize;
    while s * s < n {
        s += 1;
    }
    while s > 0 && (s - 1) * (s - 1) >= n {
        s -= 1;
    }
    s
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for AdjacencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AdjacencyGraph({} qubits, {} edges)",
            self.num_qubits(),
            self.num_edges()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_symmetric(g: &AdjacencyGraph) {
        for a in 0..g.num_qubits() {
            for &b in g.neighbors(a) {
                assert!(g.neighbors(b).contains(&a), "edge {}-{} not symmetric", a, b);
            }
        }
    }

    #[test]
    fn test_linear() {
        let g = AdjacencyGraph::build(5, &Connectivity::Linear);
        assert_eq!(g.num_edges(), 4);
        assert_eq!(g.neighbors(0), &[1]);
        assert_eq!(g.neighbors(2), &[1, 3]);
        assert!(!g.is_adjacent(0, 2));
        assert_symmetric(&g);
    }

    #[test]
    fn test_ring() {
        let g = AdjacencyGraph::build(4, &Connectivity::Ring);
        assert_eq!(g.num_edges(), 4);
        assert!(g.is_adjacent(3, 0));
        assert_eq!(g.diameter(), 2);

        // Degenerate rings collapse to a chain without self loops
        assert_eq!(AdjacencyGraph::build(2, &Connectivity::Ring).num_edges(), 1);
        assert_eq!(AdjacencyGraph::build(1, &Connectivity::Ring).num_edges(), 0);
    }

    #[test]
    fn test_grid_partial_last_row() {
        // 5 qubits on a 3x3 grid: rows [0,1,2], [3,4]
        let g = AdjacencyGraph::build(5, &Connectivity::Grid);
        assert_eq!(g.neighbors(0), &[1, 3]);
        assert_eq!(g.neighbors(1), &[0, 2, 4]);
        assert_eq!(g.neighbors(2), &[1]);
        assert_eq!(g.neighbors(4), &[1, 3]);
        assert_symmetric(&g);
    }

    #[test]
    fn test_grid_square() {
        let g = AdjacencyGraph::build(9, &Connectivity::Grid);
        // 2 horizontal per row × 3 + 2 vertical per column × 3
        assert_eq!(g.num_edges(), 12);
        assert_eq!(g.distance(0, 8), Some(4));
    }

    #[test]
    fn test_heavy_hex_skip_links() {
        let g = AdjacencyGraph::build(7, &Connectivity::HeavyHex);
        assert!(g.is_adjacent(0, 2));
        assert!(g.is_adjacent(3, 5));
        assert!(!g.is_adjacent(1, 3));
        // i = 6 has no i+2 inside the device
        assert_eq!(g.neighbors(6), &[5]);
        assert_eq!(
            g,
            AdjacencyGraph::build(7, &Connectivity::HeavySquare),
            "heavy-square uses the same approximation"
        );
    }

    #[test]
    fn test_all_to_all() {
        let g = AdjacencyGraph::build(4, &Connectivity::AllToAll);
        assert_eq!(g.num_edges(), 6);
        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    assert!(g.is_adjacent(i, j));
                }
            }
        }
    }

    #[test]
    fn test_custom_used_as_given() {
        let custom = Connectivity::Custom(vec![vec![1], vec![0, 2], vec![1], vec![]]);
        let g = AdjacencyGraph::build(4, &custom);
        assert_eq!(g.neighbors(1), &[0, 2]);
        assert!(g.neighbors(3).is_empty());
        assert!(!g.is_connected());
    }

    #[test]
    fn test_distance() {
        let g = AdjacencyGraph::build(5, &Connectivity::Linear);
        assert_eq!(g.distance(0, 4), Some(4));
        assert_eq!(g.distance(2, 2), Some(0));
        assert_eq!(g.distance(0, 9), None);
        assert_eq!(g.distance(9, 9), None);

        let split = AdjacencyGraph::build(
            4,
            &Connectivity::Custom(vec![vec![1], vec![0], vec![3], vec![2]]),
        );
        assert_eq!(split.distance(0, 3), None);
    }

    #[test]
    fn test_empty_device() {
        let g = AdjacencyGraph::build(0, &Connectivity::Grid);
        assert_eq!(g.num_qubits(), 0);
        assert!(g.is_connected());
    }

    #[test]
    fn test_ceil_sqrt() {
        assert_eq!(ceil_sqrt(0), 0);
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(5), 3);
        assert_eq!(ceil_sqrt(9), 3);
        assert_eq!(ceil_sqrt(10), 4);
    }

    #[test]
    fn test_connectivity_json() {
        let json = serde_json::to_string(&Connectivity::HeavyHex).unwrap();
        assert_eq!(json, r#"{"type":"heavy-hex"}"#);

        let custom: Connectivity =
            serde_json::from_str(r#"{"type":"custom","adjacencies":[[1],[0]]}"#).unwrap();
        assert_eq!(custom, Connectivity::Custom(vec![vec![1], vec![0]]));
    }
}
