//! Console output formatter for generated combos

use colored::Colorize;
use lemur_application::GenerateCombosOutput;
use lemur_domain::{Letter, Shortfall};
use serde::Serialize;

/// Formats combo results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format warnings, combos and (when `show` is set) the candidate table
    pub fn format(output: &GenerateCombosOutput, show: bool) -> String {
        let mut text = String::new();

        text.push_str(&Self::format_warnings(output.letter, &output.shortfalls));

        for combo in &output.combos {
            text.push_str(&format!("{}\n", combo));
        }

        if show {
            text.push_str(&Self::format_table(&output.adjectives, &output.animals));
        }

        text
    }

    /// One warning line per source list smaller than the requested size
    pub fn format_warnings(letter: Letter, shortfalls: &[Shortfall]) -> String {
        shortfalls
            .iter()
            .map(|s| {
                format!(
                    "{} Full {} list for letter ({}) is smaller than your requested list size\n",
                    "WARNING:".yellow().bold(),
                    s.list.as_str(),
                    letter
                )
            })
            .collect()
    }

    /// Side-by-side table of every candidate adjective and animal
    ///
    /// The shorter list is padded with empty entries. Rows whose adjective
    /// slot is empty are not printed.
    pub fn format_table(adjectives: &[String], animals: &[String]) -> String {
        let rows = adjectives.len().max(animals.len());

        let mut table = format!(
            "\n({}) {:<25} ({}) {}\n",
            adjectives.len(),
            "ADJECTIVES",
            animals.len(),
            "ANIMALS"
        );

        for i in 0..rows {
            let adjective = slot(adjectives, i);
            if adjective.is_empty() {
                continue;
            }
            let row = format!("{:<4} {:<26} {}", i + 1, adjective, slot(animals, i));
            table.push_str(row.trim_end());
            table.push('\n');
        }

        table
    }

    /// Format as JSON
    pub fn format_json(output: &GenerateCombosOutput, show: bool) -> serde_json::Result<String> {
        let report = JsonReport {
            letter: output.letter,
            combos: output.combos.iter().map(|c| c.to_string()).collect(),
            warnings: &output.shortfalls,
            adjectives: show.then_some(output.adjectives.as_slice()),
            animals: show.then_some(output.animals.as_slice()),
        };
        serde_json::to_string_pretty(&report)
    }
}

/// Entry `i` of `list`, or the empty padding entry past its end
fn slot(list: &[String], i: usize) -> &str {
    list.get(i).map(String::as_str).unwrap_or("")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    letter: Letter,
    combos: Vec<String>,
    warnings: &'a [Shortfall],
    #[serde(skip_serializing_if = "Option::is_none")]
    adjectives: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    animals: Option<&'a [String]>,
}
