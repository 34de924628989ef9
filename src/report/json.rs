use crate::permission::PermissionRecord;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

/// JSON reporter for programmatic output
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }

    /// Pretty-printed document, emitted even when there are no permissions
    pub fn render(&self, tag: &str, permissions: &[PermissionRecord]) -> Result<String> {
        let report = JsonReport { tag, permissions };
        let mut json = serde_json::to_string_pretty(&report).into_diagnostic()?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    tag: &'a str,
    permissions: &'a [PermissionRecord],
}
