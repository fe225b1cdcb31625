//! Table and JSON output formatting for CLI commands.

use tabled::{Table, Tabled};

use neuroserve_plugin::PluginDescriptor;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One catalog row in the table view.
#[derive(Debug, Tabled)]
pub struct PluginRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Provider")]
    pub provider: String,
    #[tabled(rename = "Tasks")]
    pub tasks: String,
}

impl From<&PluginDescriptor> for PluginRow {
    fn from(descriptor: &PluginDescriptor) -> Self {
        Self {
            name: descriptor.name.clone(),
            provider: descriptor.provider.clone().unwrap_or_else(|| "-".to_string()),
            tasks: descriptor.tasks.join(", "),
        }
    }
}

/// Render the plugin catalog in the selected format.
///
/// JSON output has the same shape as `GET /plugins`.
pub fn render_catalog(
    descriptors: &[PluginDescriptor],
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Table if descriptors.is_empty() => Ok("No plugins found.".to_string()),
        OutputFormat::Table => {
            let rows: Vec<PluginRow> = descriptors.iter().map(PluginRow::from).collect();
            Ok(Table::new(rows).to_string())
        }
        OutputFormat::Json => serde_json::to_string_pretty(descriptors),
    }
}
