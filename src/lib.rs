//! permgen - Permission documentation for Android manifests
//!
//! Reads the `<permission>` declarations of an AndroidManifest.xml, resolves
//! their `@string/` label and description references against a directory of
//! string resource files, and renders the result as HTML table rows.
//!
//! # Pipeline
//!
//! 1. **Manifest parsing** - one [`PermissionRecord`] per declaration
//! 2. **Resource resolution** - fill labels and descriptions in place
//! 3. **Reporting** - HTML rows or JSON

pub mod analysis;
pub mod config;
pub mod discovery;
pub mod error;
pub mod parser;
pub mod permission;
pub mod report;

pub use analysis::{ResolveSummary, ResourceResolver};
pub use config::Config;
pub use error::{PermgenError, Result};
pub use parser::{ManifestParser, StringsParser};
pub use permission::{string_key, PermissionRecord};
pub use report::{ReportFormat, Reporter};

use std::path::Path;

/// Parse the manifest and resolve its permissions against `resource_dir`
pub fn load_permissions(
    manifest: &Path,
    resource_dir: &Path,
    config: &Config,
) -> Result<Vec<PermissionRecord>> {
    let mut permissions = ManifestParser::new().parse_file(manifest)?;
    ResourceResolver::new(&config.resources).resolve(&mut permissions, resource_dir)?;
    Ok(permissions)
}
