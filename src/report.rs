//! Rendering of [`LineStats`] for stdout

use crate::average::LineStats;
use crate::config::OutputFormat;
use crate::error::Result;

pub fn render(stats: &LineStats, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("Average line length: {}", stats.average)),
        OutputFormat::Json => Ok(serde_json::to_string(stats)?),
    }
}
