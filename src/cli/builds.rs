//! `fluenttc builds` - List builds matching filters

use super::filters::BuildFilters;
use anyhow::{Context, Result};
use fluenttc::client::{TeamCityClient, Transport};
use fluenttc::domain::Build;

/// Output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per build
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Queries builds and renders them
pub async fn list_builds<T: Transport>(
    client: &TeamCityClient<T>,
    filters: &BuildFilters,
    format: OutputFormat,
) -> Result<String> {
    let builds = client
        .builds(|b| filters.apply(b))
        .await
        .context("Failed to query builds")?;

    tracing::debug!(count = builds.len(), "builds received");
    format_builds(&builds, format)
}

/// Renders builds as text or JSON
pub fn format_builds(builds: &[Build], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            if builds.is_empty() {
                return Ok("No builds found.".to_string());
            }
            let lines: Vec<String> = builds.iter().map(ToString::to_string).collect();
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(builds).context("Failed to serialize builds")
        }
    }
}
