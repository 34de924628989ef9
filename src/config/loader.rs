use crate::report::ReportFormat;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default inline style of every table cell
pub const DEFAULT_CELL_STYLE: &str = "font-family:verdana;font-size:80%";

/// Configuration for a permgen run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Resource directory scanning
    pub resources: ResourceConfig,

    /// Report output
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Visit resource files sorted by file name instead of directory order
    pub sort_files: bool,

    /// Only parse files with one of these extensions (empty: every file)
    pub extensions: Vec<String>,

    /// What to do with a `<string>` element that has no text
    pub empty_strings: EmptyStringPolicy,
}

/// Handling of string resources without text content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyStringPolicy {
    /// Ignore the entry; the field keeps whatever it had
    #[default]
    Skip,
    /// Abort the run
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: html, json
    pub format: ReportFormat,

    /// HTML-escape the tag and cell contents
    pub escape_html: bool,

    /// Inline `style` attribute of each cell
    pub cell_style: String,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            sort_files: true,
            extensions: vec![],
            empty_strings: EmptyStringPolicy::Skip,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Html,
            escape_html: false,
            cell_style: DEFAULT_CELL_STYLE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }
}

impl ResourceConfig {
    /// Whether a file should be parsed as a resource document
    pub fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        self.extensions
            .iter()
            .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }
}
