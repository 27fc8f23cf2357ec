use std::path::Path;
use std::process;

use colored::Colorize;
use itertools::Itertools;
use list_reversal::config::{DemoConfig, OutputFormat};
use list_reversal::error::ConfigError;
use list_reversal::node;
use list_reversal::reverse_list;
use serde::Serialize;

// =============================================================================
// Reversal reports
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ReversalReport {
    input: Vec<i64>,
    output: Vec<i64>,
    nodes: usize,
}

fn reverse_sequence(values: &[i64]) -> ReversalReport {
    let head = reverse_list(node::from_vec(values.to_vec()));
    let nodes = node::len(&head);

    ReversalReport {
        input: values.to_vec(),
        output: node::into_vec(head),
        nodes,
    }
}

fn render_chain(values: &[i64], show_links: bool) -> String {
    if !show_links {
        return format!("{:?}", values);
    }
    if values.is_empty() {
        return "None".to_string();
    }
    format!("{} -> None", values.iter().join(" -> "))
}

fn render_text(reports: &[ReversalReport], show_links: bool) -> String {
    reports
        .iter()
        .map(|report| {
            format!(
                "{} {}\n{} {}",
                "input: ".cyan(),
                render_chain(&report.input, show_links),
                "output:".green(),
                render_chain(&report.output, show_links),
            )
        })
        .join("\n\n")
}

fn render_json(reports: &[ReversalReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}

fn load_config(arg: Option<String>) -> Result<DemoConfig, ConfigError> {
    match arg {
        Some(path) => DemoConfig::load(Path::new(&path)),
        None => Ok(DemoConfig::default()),
    }
}

fn main() {
    let config = match load_config(std::env::args().nth(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            process::exit(1);
        }
    };

    let reports: Vec<ReversalReport> = config
        .sequences
        .iter()
        .map(|values| reverse_sequence(values))
        .collect();

    match config.format {
        OutputFormat::Text => {
            println!("{}", render_text(&reports, config.show_links));
            println!();
            println!(
                "{}",
                format!("✓ Reversed {} list(s)", reports.len()).green()
            );
        }
        OutputFormat::Json => match render_json(&reports) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("{} {}", "error:".red().bold(), err);
                process::exit(1);
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_sequence_scenarios() {
        let cases: Vec<(Vec<i64>, Vec<i64>)> = vec![
            (vec![1, 2, 3, 4, 5], vec![5, 4, 3, 2, 1]),
            (vec![], vec![]),
            (vec![7], vec![7]),
            (vec![1, 2], vec![2, 1]),
        ];

        for (input, expected) in cases {
            let report = reverse_sequence(&input);
            assert_eq!(report.output, expected);
            assert_eq!(report.nodes, input.len());
            assert_eq!(report.input, input);
        }
    }

    #[test]
    fn test_render_chain() {
        assert_eq!(render_chain(&[1, 2, 3], true), "1 -> 2 -> 3 -> None");
        assert_eq!(render_chain(&[], true), "None");
        assert_eq!(render_chain(&[4, 5], false), "[4, 5]");
    }

    #[test]
    fn test_render_text_contains_both_sides() {
        colored::control::set_override(false);
        let text = render_text(&[reverse_sequence(&[1, 2])], true);
        assert!(text.contains("input:  1 -> 2 -> None"));
        assert!(text.contains("output: 2 -> 1 -> None"));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&[reverse_sequence(&[1, 2, 3])]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["input"], serde_json::json!([1, 2, 3]));
        assert_eq!(value[0]["output"], serde_json::json!([3, 2, 1]));
        assert_eq!(value[0]["nodes"], 3);
    }

    #[test]
    fn test_load_config_defaults_without_argument() {
        let config = load_config(None).unwrap();
        assert_eq!(config, DemoConfig::default());
    }
}
