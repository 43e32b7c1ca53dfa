//! Rendering a distribution for humans and machines

use anyhow::{bail, Result};
use arena_core::Distribution;
use std::str::FromStr;

use crate::simulation::SimulationResults;

/// How the report is printed to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One labelled, tab-separated line per record
    #[default]
    Text,
    /// The full results as pretty JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => bail!("Unknown output format: {}", s),
        }
    }
}

/// Render one line per non-empty record, lowest record first.
///
/// Numbers use their shortest form, so a 50% share prints as `50`.
pub fn render_text(distribution: &Distribution) -> String {
    let mut report = String::new();
    for row in distribution.rows() {
        report.push_str(&format!(
            "wins:\t{}\tloses:\t{}\tcount:\t{}\tpercent:\t{}\tpercentile:\t{}\n",
            row.wins, row.losses, row.count, row.percent, row.percentile
        ));
    }
    report
}

pub fn render_json(results: &SimulationResults) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

pub fn render(results: &SimulationResults, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(&results.distribution)),
        OutputFormat::Json => render_json(results),
    }
}
