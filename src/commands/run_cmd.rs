use std::path::Path;
use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_batch_report;
use crate::services::simulation::simulate_from_experiment_file;
use crate::services::simulation_types::BatchReport;

pub fn run_command(cmd: Commands) -> ExitCode {
    if let Commands::Run { config, output } = cmd {
        let report = match simulate_from_experiment_file(&config) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Failed to run experiments: {e}");
                return ExitCode::FAILURE;
            }
        };

        let contents = match serialize_report(&report, &output) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize experiment report: {e}");
                return ExitCode::FAILURE;
            }
        };

        if let Err(e) = std::fs::write(&output, contents) {
            eprintln!("Failed to write experiment report: {e}");
            return ExitCode::FAILURE;
        }
        println!("{}", format_batch_report(&report));
        println!("Experiment report written to {output}");
        return ExitCode::SUCCESS;
    }
    ExitCode::FAILURE
}

/// JSON for `.json` outputs, YAML otherwise.
fn serialize_report(report: &BatchReport, output: &str) -> Result<String, String> {
    let is_json = Path::new(output)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::to_string_pretty(report).map_err(|e| e.to_string())
    } else {
        serde_yaml::to_string(report).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::event::Event;
    use crate::services::simulation_types::ExperimentReport;

    fn report() -> BatchReport {
        BatchReport {
            seed: Some(1),
            experiments: vec![ExperimentReport {
                name: "week".to_string(),
                event: Event::ConsecutiveRun { run_length: 6 },
                people: 77,
                calendar_days: 365,
                trials: 10,
                repeats: 1,
                exact: None,
                estimates: vec![0.1],
                tallies: vec![],
            }],
        }
    }

    #[test]
    fn serialize_report_picks_format_from_extension() {
        let yaml = serialize_report(&report(), "out.yaml").unwrap();
        assert!(yaml.contains("name: week"));
        assert!(yaml.contains("kind: consecutive_run"));
        assert!(yaml.contains("run_length: 6"));

        let json = serialize_report(&report(), "out.JSON").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["experiments"][0]["people"], 77);
        assert_eq!(value["experiments"][0]["event"]["kind"], "consecutive_run");
        assert!(value["experiments"][0].get("tallies").is_none());
    }
}
