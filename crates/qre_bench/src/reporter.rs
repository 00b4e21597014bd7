//! Comparison reporting
//!
//! Gantree: L7_Bench → Reporter
//!
//! Renders ranked provider comparisons as Markdown, JSON, CSV or text.

use crate::suite::{ComparisonEntry, ComparisonStatistics};
use serde::{Deserialize, Serialize};

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Markdown table
    Markdown,
    /// JSON
    Json,
    /// CSV
    Csv,
    /// Plain text summary
    Text,
}

/// Comparison reporter
/// Gantree: Reporter // 결과 리포팅
pub struct Reporter;

impl Reporter {
    // ========================================================================
    // Format Converters
    // ========================================================================

    /// Generate report in specified format
    pub fn report(entries: &[ComparisonEntry], format: ReportFormat) -> String {
        match format {
            ReportFormat::Markdown => Self::to_markdown(entries),
            ReportFormat::Json => Self::to_json(entries),
            ReportFormat::Csv => Self::to_csv(entries),
            ReportFormat::Text => Self::to_text(entries),
        }
    }

    /// Markdown summary and ranking table
    pub fn to_markdown(entries: &[ComparisonEntry]) -> String {
        let stats = ComparisonStatistics::from_entries(entries);
        let mut output = String::new();

        output.push_str("# Resource Estimation Comparison\n\n");

        output.push_str("## Summary\n\n");
        output.push_str(&format!("- **Providers**: {}\n", stats.count));
        output.push_str(&format!("- **Feasible**: {}\n", stats.feasible_count));
        if let (Some(best), Some(cost)) = (&stats.best_provider, stats.min_cost) {
            output.push_str(&format!("- **Best**: {} ({:.4})\n", best, cost));
        }
        output.push('\n');

        output.push_str("## Ranking\n\n");
        output.push_str(
            "| Rank | Provider | Qubits | Depth | SWAPs | Time (µs) | Fidelity | Physical Qubits | Cost |\n",
        );
        output.push_str(
            "|------|----------|--------|-------|-------|-----------|----------|-----------------|------|\n",
        );
        for e in entries {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {:.4} | {:.0} | {} |\n",
                e.rank,
                e.provider,
                e.estimate.circuit_width,
                e.estimate.analysis.depth,
                e.estimate.swap_count,
                format_time_us(e.estimate.execution_time_ns),
                e.estimate.fidelity,
                e.physical_qubits,
                format_cost(e.estimated_cost)
            ));
        }

        output
    }

    /// Statistics plus entries; infinite values become `null`
    pub fn to_json(entries: &[ComparisonEntry]) -> String {
        let stats = ComparisonStatistics::from_entries(entries);

        let report = serde_json::json!({
            "statistics": stats,
            "entries": entries,
        });

        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    /// One row per entry
    pub fn to_csv(entries: &[ComparisonEntry]) -> String {
        let mut output = String::new();

        output.push_str(
            "rank,provider,circuit,qubits,depth,swaps,execution_time_ns,fidelity,dominant_error,physical_qubits,estimated_cost\n",
        );
        for e in entries {
            output.push_str(&format!(
                "{},{},{},{},{},{},{},{},{},{},{}\n",
                e.rank,
                csv_field(&e.provider),
                csv_field(&e.estimate.circuit_name),
                e.estimate.circuit_width,
                e.estimate.analysis.depth,
                e.estimate.swap_count,
                e.estimate.execution_time_ns,
                e.estimate.fidelity,
                e.estimate.dominant_error_source,
                e.physical_qubits,
                e.estimated_cost
            ));
        }

        output
    }

    /// Plain text summary
    pub fn to_text(entries: &[ComparisonEntry]) -> String {
        let stats = ComparisonStatistics::from_entries(entries);
        let mut output = String::new();

        output.push_str("Resource Estimation Comparison\n");
        output.push_str("==============================\n\n");

        output.push_str("Summary:\n");
        output.push_str(&format!("  Providers compared: {}\n", stats.count));
        output.push_str(&format!("  Feasible: {}\n", stats.feasible_count));
        match (&stats.best_provider, stats.min_cost) {
            (Some(best), Some(cost)) => {
                output.push_str(&format!("  Cheapest: {} at {:.4}\n", best, cost))
            }
            _ => output.push_str("  Cheapest: none feasible\n"),
        }
        if let Some(f) = stats.avg_fidelity {
            output.push_str(&format!("  Average fidelity: {:.4}\n", f));
        }
        output.push('\n');

        output.push_str("Ranking:\n");
        for e in entries {
            output.push_str(&format!(
                "  {}. {}: cost {}, {} µs, fidelity {:.4}, {} SWAPs{}\n",
                e.rank,
                e.provider,
                format_cost(e.estimated_cost),
                format_time_us(e.estimate.execution_time_ns),
                e.estimate.fidelity,
                e.estimate.swap_count,
                if e.is_feasible() { "" } else { " [infeasible]" }
            ));
            for suggestion in &e.estimate.suggestions {
                output.push_str(&format!("       - {}\n", suggestion));
            }
        }

        output
    }

    // ========================================================================
    // Specialized Reports
    // ========================================================================

    /// Markdown table of fidelity factors per provider
    pub fn error_budget_report(entries: &[ComparisonEntry]) -> String {
        let mut output = String::new();

        output.push_str("# Error Budget\n\n");
        output.push_str("| Provider | Gates | SWAPs | Readout | Decoherence | Total | Dominant |\n");
        output.push_str("|----------|-------|-------|---------|-------------|-------|----------|\n");

        for e in entries {
            let b = &e.estimate.fidelity_breakdown;
            output.push_str(&format!(
                "| {} | {:.4} | {:.4} | {:.4} | {:.4} | {:.4} | {} |\n",
                e.provider,
                b.gate,
                b.swap,
                b.readout,
                b.decoherence,
                e.estimate.fidelity,
                e.estimate.dominant_error_source
            ));
        }

        output
    }
}

/// Cost cell, "infeasible" for `+∞`
fn format_cost(cost: f64) -> String {
    if cost.is_finite() {
        format!("{:.4}", cost)
    } else {
        "infeasible".to_string()
    }
}

/// Nanoseconds as µs with one decimal, "inf" when unbounded
fn format_time_us(time_ns: f64) -> String {
    if time_ns.is_finite() {
        format!("{:.1}", time_ns / 1000.0)
    } else {
        "inf".to_string()
    }
}

/// Quote a CSV field when it contains a delimiter
fn csv_field(value: &str) -> String {
    if value.contains(&[',', '"', '\n'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::CircuitGenerator;
    use crate::suite::{ComparisonSuite, ProviderProfile};
    use qre_core::{Architecture, Connectivity};
    use qre_engine::EstimationOptions;

    fn make_entries() -> Vec<ComparisonEntry> {
        let ghz = CircuitGenerator::new().ghz(4);
        let providers = vec![
            ProviderProfile::new(
                Architecture::ideal("wide, ideal", 4, Connectivity::AllToAll),
                1.0,
                1.0,
            ),
            ProviderProfile::new(Architecture::ideal("narrow", 3, Connectivity::Linear), 1.0, 1.0),
        ];
        ComparisonSuite::new()
            .run(&ghz, &providers, &EstimationOptions::default())
            .unwrap()
    }

    #[test]
    fn test_to_markdown() {
        let md = Reporter::to_markdown(&make_entries());
        assert!(md.contains("# Resource Estimation Comparison"));
        assert!(md.contains("| Rank | Provider |"));
        assert!(md.contains("- **Feasible**: 1"));
        assert!(md.contains("| 2 | narrow | 4 | 4 | inf | inf |"));
        assert!(md.contains("infeasible"));
    }

    #[test]
    fn test_to_json() {
        let json = Reporter::to_json(&make_entries());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["statistics"]["count"], 2);
        assert_eq!(value["entries"][0]["provider"], "wide, ideal");
        assert!(value["entries"][1]["estimated_cost"].is_null());
    }

    #[test]
    fn test_to_csv() {
        let csv = Reporter::to_csv(&make_entries());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("rank,provider,circuit"));
        assert!(lines[1].starts_with("1,\"wide, ideal\",GHZ (4 qubits),4,4,0,"));
        assert!(lines[2].ends_with(",inf"));
    }

    #[test]
    fn test_to_text() {
        let text = Reporter::to_text(&make_entries());
        assert!(text.contains("Summary:"));
        assert!(text.contains("Cheapest: wide, ideal"));
        assert!(text.contains("[infeasible]"));
        assert!(text.contains("cannot be routed"));
    }

    #[test]
    fn test_report_dispatch() {
        let entries = make_entries();
        assert!(Reporter::report(&entries, ReportFormat::Markdown).starts_with("# Resource"));
        assert!(Reporter::report(&entries, ReportFormat::Json).starts_with('{'));
        assert!(Reporter::report(&entries, ReportFormat::Csv).starts_with("rank,"));
        assert!(Reporter::report(&entries, ReportFormat::Text).starts_with("Resource"));
    }

    #[test]
    fn test_error_budget_report() {
        let report = Reporter::error_budget_report(&make_entries());
        assert!(report.contains("# Error Budget"));
        assert!(report.contains("| wide, ideal | 1.0000 | 1.0000 | 1.0000 | 1.0000 | 1.0000 |"));
    }

    #[test]
    fn test_empty() {
        let md = Reporter::to_markdown(&[]);
        assert!(md.contains("- **Providers**: 0"));

        let text = Reporter::to_text(&[]);
        assert!(text.contains("none feasible"));

        let json = Reporter::to_json(&[]);
        assert!(json.contains("\"count\": 0"));
    }
}
