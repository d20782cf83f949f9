//! `fluenttc configs` - List build configurations

use anyhow::{Context, Result};
use fluenttc::client::{TeamCityClient, Transport};
use fluenttc::domain::BuildConfig;

/// Queries build configurations, optionally restricted to a project
pub async fn list_configs<T: Transport>(
    client: &TeamCityClient<T>,
    project: Option<&str>,
) -> Result<String> {
    let configs = client
        .build_configurations(|c| match project {
            Some(id) => c.project(|p| p.id(id)),
            None => c,
        })
        .await
        .context("Failed to query build configurations")?;

    Ok(format_configs(&configs))
}

/// One `id  project / name` line per configuration
pub fn format_configs(configs: &[BuildConfig]) -> String {
    if configs.is_empty() {
        return "No build configurations found.".to_string();
    }
    configs
        .iter()
        .map(|c| {
            format!(
                "{}  {} / {}",
                c.id.as_deref().unwrap_or("-"),
                c.project_name.as_deref().unwrap_or("-"),
                c
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_configs() {
        let configs: Vec<BuildConfig> = serde_json::from_str(
            r#"[{"id":"Tools_Compile","name":"Compile","projectName":"Tools"},{"name":"Orphan"}]"#,
        )
        .unwrap();
        assert_eq!(
            format_configs(&configs),
            "Tools_Compile  Tools / Compile\n-  - / Orphan"
        );
    }

    #[test]
    fn test_format_configs_empty() {
        assert_eq!(format_configs(&[]), "No build configurations found.");
    }
}
