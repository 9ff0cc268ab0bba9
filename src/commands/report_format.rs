use crate::commands::summary::{summarize, EstimateSummary};
use crate::services::simulation_types::{BatchReport, ExperimentReport};

pub fn format_experiment_report(report: &ExperimentReport) -> String {
    let exact = match report.exact {
        Some(value) => format!("{value:.6}"),
        None => "n/a".to_string(),
    };

    let mut lines = Vec::new();
    lines.push(format!("Experiment: {}", report.name));
    lines.push(format!("Event: {}", report.event.label()));
    lines.push(format!("People: {}", report.people));
    lines.push(format!("Calendar days: {}", report.calendar_days));
    lines.push(format!("Trials: {}", report.trials));
    lines.push(format!("Repeats: {}", report.repeats));
    lines.push(format!("Exact: {exact}"));
    lines.push(String::new());
    lines.push("Repeat | Estimate".to_string());
    lines.push("-------|---------".to_string());
    for (index, estimate) in report.estimates.iter().enumerate() {
        lines.push(format!("{} | {:.6}", index + 1, estimate));
    }
    if let Some(summary) = summarize(&report.estimates) {
        lines.push(String::new());
        lines.push(format_summary(&summary, report.exact));
    }

    lines.join("\n")
}

pub fn format_batch_report(report: &BatchReport) -> String {
    let mut lines = Vec::new();
    lines.push("Batch Report".to_string());
    lines.push(format!(
        "Seed: {}",
        report
            .seed
            .map(|seed| seed.to_string())
            .unwrap_or_else(|| "entropy".to_string())
    ));
    lines.push(String::new());
    lines.push("Name | Event | People | Exact | Mean | Min | Max".to_string());
    lines.push("-----|-------|--------|-------|------|-----|----".to_string());
    for experiment in &report.experiments {
        let exact = experiment
            .exact
            .map(|value| format!("{value:.4}"))
            .unwrap_or_else(|| "n/a".to_string());
        let summary = summarize(&experiment.estimates);
        let (mean, min, max) = match summary {
            Some(s) => (
                format!("{:.4}", s.mean),
                format!("{:.4}", s.min),
                format!("{:.4}", s.max),
            ),
            None => ("n/a".to_string(), "n/a".to_string(), "n/a".to_string()),
        };
        lines.push(format!(
            "{} | {} | {} | {} | {} | {} | {}",
            experiment.name,
            experiment.event.label(),
            experiment.people,
            exact,
            mean,
            min,
            max
        ));
    }
    lines.join("\n")
}

/// One row of the exact-versus-simulated table.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub people: usize,
    pub exact: f64,
    pub estimates: Vec<f64>,
}

pub fn format_comparison_table(rows: &[ComparisonRow]) -> String {
    let mut lines = Vec::new();
    lines.push("People | Exact | Simulated | Difference".to_string());
    lines.push("-------|-------|-----------|-----------".to_string());
    for row in rows {
        let mean = summarize(&row.estimates)
            .map(|s| s.mean)
            .unwrap_or(0.0);
        lines.push(format!(
            "{} | {:.4} | {:.4} | {:+.4}",
            row.people,
            row.exact,
            mean,
            mean - row.exact
        ));
    }
    lines.join("\n")
}

fn format_summary(summary: &EstimateSummary, exact: Option<f64>) -> String {
    let mut line = format!(
        "Mean: {:.6} | Min: {:.6} | Max: {:.6} | Std dev: {:.6}",
        summary.mean, summary.min, summary.max, summary.std_dev
    );
    if let Some(exact) = exact {
        line.push_str(&format!(" | Error: {:+.6}", summary.mean - exact));
    }
    line
}
