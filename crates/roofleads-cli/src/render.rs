//! Terminal rendering of pipeline outcomes.

use std::fmt::Write as _;

use roofleads_core::{Coordinate, ResultTable};
use roofleads_pipeline::PipelineOutcome;

const NOT_FOUND_MESSAGE: &str = "Could not find coordinates for that location.";
const NO_LEADS_MESSAGE: &str = "No leads found nearby.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub(crate) fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Render one outcome for stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn render_outcome(
    outcome: &PipelineOutcome,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
        OutputFormat::Text => Ok(render_text(outcome)),
    }
}

fn render_text(outcome: &PipelineOutcome) -> String {
    let mut out = String::new();
    if let Some(location) = outcome.location() {
        let _ = writeln!(out, "Extracted location: {location}");
    }

    match outcome {
        PipelineOutcome::Success {
            coordinate, table, ..
        } => {
            out.push_str(&render_map(*coordinate, table));
            out.push('\n');
            out.push_str(&render_table(table));
        }
        PipelineOutcome::ExtractionFailed { message }
        | PipelineOutcome::ExternalServiceError { message, .. } => {
            let _ = write!(out, "Something went wrong: {message}");
        }
        PipelineOutcome::LocationNotFound { .. } => out.push_str(NOT_FOUND_MESSAGE),
        PipelineOutcome::NoLeadsFound { .. } => out.push_str(NO_LEADS_MESSAGE),
    }

    out
}

/// Plain coordinate listing standing in for the map view.
fn render_map(center: Coordinate, table: &ResultTable) -> String {
    let mut out = format!("Map centered on {center}:\n");
    for row in table {
        let _ = writeln!(out, "  {}", row.place.coordinate());
    }
    out
}

fn render_table(table: &ResultTable) -> String {
    const ADDRESS: &str = "Address";
    const LATITUDE: &str = "latitude";
    const LONGITUDE: &str = "longitude";
    const SCORE: &str = "LeadScore";

    let name_width = table
        .iter()
        .map(|r| r.place.display_name.chars().count())
        .chain(std::iter::once(ADDRESS.len()))
        .max()
        .unwrap_or(ADDRESS.len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{ADDRESS:<name_width$}  {LATITUDE:>12}  {LONGITUDE:>12}  {SCORE:>9}"
    );
    for row in table {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>12}  {:>12}  {:>9}",
            row.place.display_name, row.place.latitude, row.place.longitude, row.lead_score
        );
    }
    // Drop the final newline; callers print with `println!`.
    out.truncate(out.trim_end_matches('\n').len());
    out
}
