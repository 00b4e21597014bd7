//! QRE Provider Comparison
//!
//! Estimates a handful of sample circuits on the built-in provider catalogue
//! and prints ranked reports.

use qre_bench::prelude::*;
use qre_core::QreResult;
use qre_engine::EstimationOptions;

fn main() -> QreResult<()> {
    println!("╔══════════════════════════════════════════════════════════════════════╗");
    println!("║                 QRE Provider Comparison Report                       ║");
    println!("╚══════════════════════════════════════════════════════════════════════╝\n");

    let gen = CircuitGenerator::with_seed(42);
    let providers = ProviderProfile::catalogue();

    println!("Providers:");
    for p in &providers {
        println!(
            "  • {} ({} qubits, {}, {:.2}/s, {:.2}/qubit)",
            p.name(),
            p.architecture.num_qubits,
            p.architecture.connectivity.name(),
            p.rate_per_second,
            p.penalty_per_qubit
        );
    }
    println!();

    let circuits = vec![
        gen.bell(),
        gen.ghz(12),
        gen.qft(8),
        gen.vqe(10, 3, Entanglement::Linear),
        gen.vqe_with(8, 2, Ansatz::Uccsd),
        gen.qaoa_maxcut_ring(16, 2),
        gen.qaoa(12, 2, QaoaProblem::Random),
        gen.random(20, 200),
    ];

    let mut suite = ComparisonSuite::new();

    // =========================================================================
    // NISQ Execution
    // =========================================================================
    for circuit in &circuits {
        println!("═══════════════════════════════════════════════════════════════════════");
        println!("  {}", circuit.name());
        println!("═══════════════════════════════════════════════════════════════════════\n");

        let entries = suite.run(circuit, &providers, &EstimationOptions::default())?;
        println!("{}", Reporter::report(&entries, ReportFormat::Text));
        println!("{}", Reporter::error_budget_report(&entries));
    }

    // =========================================================================
    // Fault-Tolerant Execution
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  Fault-tolerant QFT (target logical error 1e-12)");
    println!("═══════════════════════════════════════════════════════════════════════\n");

    let ft = EstimationOptions::fault_tolerant(1e-12);
    let entries = suite.run(&gen.qft(8), &providers, &ft)?;
    println!("{}", Reporter::report(&entries, ReportFormat::Markdown));

    let stats = suite.statistics();
    println!(
        "Total: {} estimates, {} feasible, best overall {}",
        stats.count,
        stats.feasible_count,
        stats.best_provider.as_deref().unwrap_or("none")
    );

    Ok(())
}
