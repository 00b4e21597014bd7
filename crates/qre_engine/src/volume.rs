//! Quantum volume proxy for QRE
//!
//! Gantree: L5_Estimation → QuantumVolumeEstimator
//!
//! Coarse estimate from a synthetic square circuit of width and depth `n`
//! with `n` single-qubit and `n/2` two-qubit gates per layer. This is not
//! the heavy-output benchmarking protocol.

use qre_core::estimation::QV_SUCCESS_THRESHOLD;
use qre_core::{resolve, Architecture};

/// Largest exponent representable as a `u64` power of two
const MAX_QV_EXPONENT: u32 = u64::BITS - 1;

/// Success probability of the width-`n` square model circuit
pub fn square_circuit_fidelity(arch: &Architecture, n: usize) -> f64 {
    let e1 = resolve::single_qubit_error(arch);
    let e2 = resolve::two_qubit_error(arch);
    let nf = n as f64;

    let layer = (1.0 - e1).powf(nf) * (1.0 - e2).powf((n / 2) as f64);
    let gates = layer.powf(nf);
    let readout = (1.0 - arch.avg_readout_error()).powf(nf);

    gates * readout
}

/// Achievable quantum volume `2^n` for circuits up to `circuit_width` qubits
/// Gantree: estimate_quantum_volume(arch,width) -> u64 // 양자 볼륨
///
/// Stops at the first width whose square circuit falls to 2/3 or below.
/// Saturates at `2^63`, the largest power of two a `u64` holds.
pub fn estimate_quantum_volume(arch: &Architecture, circuit_width: usize) -> u64 {
    let max_width = circuit_width.min(arch.num_qubits);
    let mut best = 0u32;

    for n in 1..=max_width {
        if square_circuit_fidelity(arch, n) > QV_SUCCESS_THRESHOLD {
            best = n as u32;
        } else {
            break;
        }
    }

    if best > MAX_QV_EXPONENT {
        log::debug!(
            "Quantum volume 2^{} on {} saturated to 2^{}",
            best,
            arch.name,
            MAX_QV_EXPONENT
        );
    }
    1u64 << best.min(MAX_QV_EXPONENT)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qre_core::{Connectivity, GateErrors, Technology};

    #[test]
    fn test_zero_width() {
        let a = Architecture::ideal("i", 5, Connectivity::AllToAll);
        assert_eq!(estimate_quantum_volume(&a, 0), 1);
    }

    #[test]
    fn test_ideal_limited_by_width() {
        let a = Architecture::ideal("i", 5, Connectivity::AllToAll);
        assert_eq!(estimate_quantum_volume(&a, 3), 8);
        assert_eq!(estimate_quantum_volume(&a, 10), 32);
    }

    #[test]
    fn test_square_fidelity_formula() {
        let a = Architecture::ideal("i", 4, Connectivity::AllToAll)
            .with_gate_errors(GateErrors::uniform(0.01, 0.02))
            .with_readout_error(0.03);
        let layer = 0.99f64.powi(4) * 0.98f64.powi(2);
        let expected = layer.powi(4) * 0.97f64.powi(4);
        assert_relative_eq!(square_circuit_fidelity(&a, 4), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_noisy_device_stops_early() {
        let a = Architecture::ideal("noisy", 20, Connectivity::AllToAll)
            .with_gate_errors(GateErrors::uniform(0.0, 0.1));
        // n=1: 1.0, n=2: 0.81, n=3: 0.729, n=4: 0.43
        assert_eq!(estimate_quantum_volume(&a, 20), 8);
    }

    #[test]
    fn test_wide_ideal_device_saturates() {
        for width in [63, 64, 100] {
            let a = Architecture::ideal("big", width, Connectivity::AllToAll);
            let qv = estimate_quantum_volume(&a, width);
            assert!(qv.is_power_of_two());
            assert_eq!(qv, 1u64 << 63);
        }
    }

    #[test]
    fn test_preset_device() {
        let a = Architecture::from_technology("sc", 27, Connectivity::HeavyHex, Technology::Superconducting);
        let qv = estimate_quantum_volume(&a, 27);
        assert!(qv.is_power_of_two());
        assert!(qv >= 2);
    }
}
