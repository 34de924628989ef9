mod html;
mod json;

pub use html::HtmlReporter;
pub use json::JsonReporter;

use crate::config::ReportConfig;
use crate::permission::PermissionRecord;
use miette::{IntoDiagnostic, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Table rows to paste into an HTML page
    #[default]
    Html,
    Json,
}

/// Reporter for outputting resolved permissions
pub struct Reporter<'a> {
    config: &'a ReportConfig,
}

impl<'a> Reporter<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    /// Render the report in the configured format
    pub fn render(&self, tag: &str, permissions: &[PermissionRecord]) -> Result<String> {
        match self.config.format {
            ReportFormat::Html => {
                let reporter = HtmlReporter::new()
                    .with_cell_style(&self.config.cell_style)
                    .with_escaping(self.config.escape_html);
                Ok(reporter.render(tag, permissions))
            }
            ReportFormat::Json => JsonReporter::new().render(tag, permissions),
        }
    }

    /// Write the report to standard output
    pub fn report(&self, tag: &str, permissions: &[PermissionRecord]) -> Result<()> {
        let output = self.render(tag, permissions)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes()).into_diagnostic()?;
        stdout.flush().into_diagnostic()
    }
}
