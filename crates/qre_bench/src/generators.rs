//! Sample circuit generators
//!
//! Gantree: L7_Bench → Generators
//!
//! Reference workloads for estimation runs and provider comparisons. Every
//! generator except `random` is deterministic.

use qre_core::{Circuit, CircuitBuilder, QubitId};
use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Probability that a random gate is a CNOT
const RANDOM_CNOT_PROBABILITY: f64 = 0.3;

/// Single-qubit tags drawn by `random`
const RANDOM_SINGLE_QUBIT_TAGS: [&str; 8] = ["H", "X", "Y", "Z", "RZ", "RY", "T", "S"];

/// Entangling pattern for variational ansätze
/// Gantree: Entanglement // 얽힘 패턴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entanglement {
    /// CNOT chain 0→1→…→n-1
    #[default]
    Linear,
    /// Chain closed with n-1→0
    Circular,
    /// CNOT on every pair i < j
    Full,
}

impl fmt::Display for Entanglement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entanglement::Linear => write!(f, "linear"),
            Entanglement::Circular => write!(f, "circular"),
            Entanglement::Full => write!(f, "full"),
        }
    }
}

/// VQE ansatz family
/// Gantree: Ansatz // 변분 안자츠
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ansatz {
    /// RY layers with a CNOT entangler
    HardwareEfficient(Entanglement),
    /// Simplified unitary coupled-cluster singles and doubles
    Uccsd,
}

impl Default for Ansatz {
    fn default() -> Self {
        Ansatz::HardwareEfficient(Entanglement::Linear)
    }
}

/// QAOA cost Hamiltonian
/// Gantree: QaoaProblem // QAOA 문제
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QaoaProblem {
    /// ZZ on every edge of a ring
    #[default]
    MaxCut,
    /// Weighted Z on each qubit plus ZZ on every pair
    NumberPartitioning,
    /// ZZ on random weighted pairs drawn from the generator's RNG
    Random,
}

impl fmt::Display for QaoaProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QaoaProblem::MaxCut => write!(f, "MaxCut"),
            QaoaProblem::NumberPartitioning => write!(f, "NumberPartitioning"),
            QaoaProblem::Random => write!(f, "Random"),
        }
    }
}

/// Circuit generator
/// Gantree: CircuitGenerator // 회로 생성기
pub struct CircuitGenerator {
    /// Random seed
    seed: Option<u64>,
}

impl CircuitGenerator {
    /// Create new generator
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Create generator with seed
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    // ========================================================================
    // Standard Circuits
    // ========================================================================

    /// Bell pair: H, CNOT
    pub fn bell(&self) -> Circuit {
        CircuitBuilder::with_name(2, "Bell State").h(0).cnot(0, 1).build()
    }

    /// GHZ state preparation
    /// |GHZ⟩ = (|00...0⟩ + |11...1⟩) / √2
    pub fn ghz(&self, num_qubits: usize) -> Circuit {
        CircuitBuilder::with_name(num_qubits, format!("GHZ ({} qubits)", num_qubits))
            .h(0)
            .cx_chain()
            .build()
    }

    /// Grover search with a single-Z oracle and CNOT-fan diffusion
    pub fn grover(&self, num_qubits: usize) -> Circuit {
        let name = format!("Grover Search ({} qubits)", num_qubits);
        let Some(last) = num_qubits.checked_sub(1) else {
            return CircuitBuilder::with_name(0, name).build();
        };

        let mut builder = CircuitBuilder::with_name(num_qubits, name).h_layer();

        // Oracle
        builder = builder.z(last);

        // Diffusion
        for q in 0..num_qubits {
            builder = builder.h(q).x(q);
        }
        builder = builder.h(last);
        for q in 0..last {
            builder = builder.cnot(q, last);
        }
        builder = builder.h(last);
        for q in 0..num_qubits {
            builder = builder.x(q).h(q);
        }

        builder.build()
    }

    /// QFT with controlled phases lowered to RZ + CNOT
    pub fn qft(&self, num_qubits: usize) -> Circuit {
        let mut builder =
            CircuitBuilder::with_name(num_qubits, format!("QFT ({} qubits)", num_qubits));

        for i in 0..num_qubits {
            builder = builder.h(i);
            for j in (i + 1)..num_qubits {
                let angle = PI / (1u64 << (j - i)) as f64;
                builder = builder.rz(j, angle).cnot(j, i);
            }
        }

        builder.build()
    }

    // ========================================================================
    // Variational Circuits
    // ========================================================================

    /// Hardware-efficient VQE ansatz
    pub fn vqe(&self, num_qubits: usize, layers: usize, entanglement: Entanglement) -> Circuit {
        self.vqe_with(num_qubits, layers, Ansatz::HardwareEfficient(entanglement))
    }

    /// VQE circuit for the given ansatz
    ///
    /// Hardware-efficient: H layer, then per layer an RY layer and the
    /// entangler. Linear and circular layers after the first add a
    /// wrap-around CNOT n-1→0. Closed by an RZ layer.
    ///
    /// UCCSD: X on the first half, then per layer single excitations
    /// (i, i+n/2) and, from 4 qubits, double excitations on i..i+4 for
    /// even i. Closed by an H layer.
    pub fn vqe_with(&self, num_qubits: usize, layers: usize, ansatz: Ansatz) -> Circuit {
        match ansatz {
            Ansatz::HardwareEfficient(entanglement) => {
                self.hardware_efficient(num_qubits, layers, entanglement)
            }
            Ansatz::Uccsd => self.uccsd(num_qubits, layers),
        }
    }

    fn hardware_efficient(
        &self,
        num_qubits: usize,
        layers: usize,
        entanglement: Entanglement,
    ) -> Circuit {
        let name = format!(
            "VQE-HE ({} qubits, {} layers, {} entanglement)",
            num_qubits, layers, entanglement
        );
        let mut builder = CircuitBuilder::with_name(num_qubits, name).h_layer();

        for layer in 0..layers {
            let angle = PI / 4.0 * (layer + 1) as f64 / layers as f64;
            for q in 0..num_qubits {
                builder = builder.ry(q, angle);
            }

            builder = match entanglement {
                Entanglement::Linear => builder.cx_chain(),
                Entanglement::Circular if num_qubits > 1 => {
                    builder.cx_chain().cnot(num_qubits - 1, 0)
                }
                Entanglement::Circular => builder,
                Entanglement::Full => {
                    for i in 0..num_qubits {
                        for j in (i + 1)..num_qubits {
                            builder = builder.cnot(i, j);
                        }
                    }
                    builder
                }
            };
            if layer > 0 && entanglement != Entanglement::Full && num_qubits > 1 {
                builder = builder.cnot(num_qubits - 1, 0);
            }
        }

        for q in 0..num_qubits {
            let angle = PI / 2.0 * (q + 1) as f64 / num_qubits as f64;
            builder = builder.rz(q, angle);
        }

        builder.build()
    }

    fn uccsd(&self, num_qubits: usize, layers: usize) -> Circuit {
        let name = format!("VQE-UCCSD ({} qubits, {} layers)", num_qubits, layers);
        let mut builder = CircuitBuilder::with_name(num_qubits, name);
        let half = num_qubits / 2;

        // Reference state
        for q in 0..half {
            builder = builder.x(q);
        }

        for layer in 0..layers {
            let angle = PI / (layer + 1) as f64;
            for i in 0..half {
                let j = i + half;
                builder = builder
                    .ry(i, angle / 2.0)
                    .cnot(i, j)
                    .ry(j, -angle / 2.0)
                    .cnot(i, j);
            }

            if num_qubits >= 4 {
                let angle = PI / (2 * (layer + 1)) as f64;
                for i in (0..num_qubits - 3).step_by(2) {
                    builder = builder
                        .rx(i, angle)
                        .cnot(i, i + 1)
                        .cnot(i + 1, i + 2)
                        .cnot(i + 2, i + 3)
                        .rx(i + 3, -angle)
                        .cnot(i + 2, i + 3)
                        .cnot(i + 1, i + 2)
                        .cnot(i, i + 1);
                }
            }
        }

        builder.h_layer().build()
    }

    /// QAOA for max-cut on a ring graph
    pub fn qaoa_maxcut_ring(&self, num_qubits: usize, steps: usize) -> Circuit {
        self.qaoa(num_qubits, steps, QaoaProblem::MaxCut)
    }

    /// QAOA circuit with `steps` cost and mixer rounds
    ///
    /// Step `s` of `p` uses γ = 0.1 + 0.8·s/p for the cost layer and an
    /// RX(2β) mixer with β = π/(p+1)·(s+1). ZZ terms are CNOT-RZ-CNOT.
    ///
    /// - MaxCut: every ring edge (i, i+1 mod n), so 2 qubits get both
    ///   (0,1) and (1,0)
    /// - NumberPartitioning: RZ(γ·w_i) per qubit, then every pair i < j
    ///   with phase γ·w_i·w_j/2, where w_i = (i+1)/n
    /// - Random: min(2n, n(n-1)/2) random pairs per step with weights in
    ///   [0.1, 1.0), reproducible for a fixed seed
    pub fn qaoa(&self, num_qubits: usize, steps: usize, problem: QaoaProblem) -> Circuit {
        let name = format!("QAOA-{} ({} qubits, {} steps)", problem, num_qubits, steps);
        let mut builder = CircuitBuilder::with_name(num_qubits, name).h_layer();
        let mut rng = self.get_rng();
        let n = num_qubits as f64;

        for step in 0..steps {
            let gamma = 0.1 + 0.8 * step as f64 / steps as f64;

            match problem {
                QaoaProblem::MaxCut if num_qubits > 1 => {
                    for i in 0..num_qubits {
                        builder = zz(builder, i, (i + 1) % num_qubits, 2.0 * gamma);
                    }
                }
                QaoaProblem::NumberPartitioning => {
                    for i in 0..num_qubits {
                        builder = builder.rz(i, gamma * (i + 1) as f64 / n);
                    }
                    for i in 0..num_qubits {
                        for j in (i + 1)..num_qubits {
                            let weight = (i + 1) as f64 / n * (j + 1) as f64 / n;
                            builder = zz(builder, i, j, weight * gamma * 0.5);
                        }
                    }
                }
                QaoaProblem::Random if num_qubits > 1 => {
                    let interactions = (2 * num_qubits).min(num_qubits * (num_qubits - 1) / 2);
                    for _ in 0..interactions {
                        let (i, j) = random_pair(&mut rng, num_qubits);
                        let weight = rng.gen_range(0.1..1.0);
                        builder = zz(builder, i, j, gamma * weight);
                    }
                }
                QaoaProblem::MaxCut | QaoaProblem::Random => {}
            }

            let beta = PI / (steps + 1) as f64 * (step + 1) as f64;
            for q in 0..num_qubits {
                builder = builder.rx(q, 2.0 * beta);
            }
        }

        builder.build()
    }

    // ========================================================================
    // Random Circuits
    // ========================================================================

    /// Random circuit of `num_gates` gates
    ///
    /// 30% CNOTs on distinct random pairs, the rest drawn from
    /// H/X/Y/Z/RZ/RY/T/S. Reproducible for a fixed seed.
    pub fn random(&self, num_qubits: usize, num_gates: usize) -> Circuit {
        let name = format!("Random Circuit ({}q, {}g)", num_qubits, num_gates);
        let mut builder = CircuitBuilder::with_name(num_qubits, name);
        if num_qubits == 0 {
            return builder.build();
        }
        let mut rng = self.get_rng();

        for _ in 0..num_gates {
            if num_qubits > 1 && rng.gen::<f64>() < RANDOM_CNOT_PROBABILITY {
                let (a, b) = random_pair(&mut rng, num_qubits);
                builder = builder.cnot(a, b);
                continue;
            }

            let q = rng.gen_range(0..num_qubits);
            builder = match RANDOM_SINGLE_QUBIT_TAGS[rng.gen_range(0..RANDOM_SINGLE_QUBIT_TAGS.len())]
            {
                "RZ" => builder.rz(q, rng.gen_range(0.0..2.0 * PI)),
                "RY" => builder.ry(q, rng.gen_range(0.0..2.0 * PI)),
                tag => builder.op(tag, &[q]),
            };
        }

        builder.build()
    }

    // ========================================================================
    // Scaling Families
    // ========================================================================

    /// GHZ circuits of 2..=max_qubits
    pub fn qubit_scaling(&self, max_qubits: usize) -> Vec<Circuit> {
        (2..=max_qubits).map(|n| self.ghz(n)).collect()
    }

    /// VQE circuits of 1..=max_layers layers
    pub fn depth_scaling(&self, num_qubits: usize, max_layers: usize) -> Vec<Circuit> {
        (1..=max_layers)
            .map(|layers| self.vqe(num_qubits, layers, Entanglement::Linear))
            .collect()
    }

    // ========================================================================
    // Utility
    // ========================================================================

    /// Get RNG with optional seed
    fn get_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for CircuitGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// exp(-iθ/2·Z_a Z_b) as CNOT-RZ-CNOT
fn zz(builder: CircuitBuilder, a: QubitId, b: QubitId, theta: f64) -> CircuitBuilder {
    builder.cnot(a, b).rz(b, theta).cnot(a, b)
}

/// Two distinct qubits
fn random_pair(rng: &mut StdRng, num_qubits: usize) -> (QubitId, QubitId) {
    let a = rng.gen_range(0..num_qubits);
    let mut b = rng.gen_range(0..num_qubits - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}

// ============================================================================
// Tests
// ============================================================================
