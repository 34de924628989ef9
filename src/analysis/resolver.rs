//! Resolution of `@string/` references against a resource directory
//!
//! Each permission record carries the keys its label and description point
//! at. The resolver walks every resource file of the directory, and every
//! `<string>` entry whose name equals one of those keys fills the matching
//! field. Later matches overwrite earlier ones, so the file order decides
//! which value wins when a key is defined more than once.

use crate::config::{EmptyStringPolicy, ResourceConfig};
use crate::discovery::ResourceFinder;
use crate::error::{PermgenError, Result};
use crate::parser::{StringResource, StringsParser};
use crate::permission::PermissionRecord;
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

/// Counters collected while resolving
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveSummary {
    /// Resource files parsed
    pub files: usize,
    /// `<string>` entries seen across all files
    pub strings: usize,
    /// Label and description assignments made (overwrites included)
    pub assignments: usize,
    /// Empty `<string>` entries skipped although a record referenced them
    pub skipped_empty: usize,
    /// Keys still unresolved after every file was visited
    pub unresolved: Vec<String>,
}

impl fmt::Display for ResolveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files, {} strings, {} assignments, {} unresolved",
            self.files,
            self.strings,
            self.assignments,
            self.unresolved.len()
        )
    }
}

/// Fills in permission labels and descriptions from string resources
pub struct ResourceResolver<'a> {
    config: &'a ResourceConfig,
    parser: StringsParser,
}

impl<'a> ResourceResolver<'a> {
    pub fn new(config: &'a ResourceConfig) -> Self {
        Self {
            config,
            parser: StringsParser::new(),
        }
    }

    /// Resolve every record against the files of `resource_dir`.
    ///
    /// Any unreadable or malformed file aborts resolution.
    pub fn resolve(
        &self,
        records: &mut [PermissionRecord],
        resource_dir: &Path,
    ) -> Result<ResolveSummary> {
        let files = ResourceFinder::new(self.config).find_files(resource_dir)?;
        let mut summary = ResolveSummary::default();

        for file in &files {
            let strings = self.parser.parse_file(file)?;
            self.apply(records, file, &strings, &mut summary)?;
            summary.files += 1;
        }

        for record in records.iter() {
            for key in record.unresolved_keys() {
                warn!("No string resource named '{}' (used by {})", key, record.name);
                summary.unresolved.push(key.to_string());
            }
        }

        info!("Resolved resources: {}", summary);
        Ok(summary)
    }

    /// Apply the string entries of one file to the records
    pub fn apply(
        &self,
        records: &mut [PermissionRecord],
        path: &Path,
        strings: &[StringResource],
        summary: &mut ResolveSummary,
    ) -> Result<()> {
        for string in strings {
            summary.strings += 1;

            let referenced = records.iter().any(|r| references(r, &string.name));
            if !referenced {
                continue;
            }

            let Some(raw) = &string.value else {
                match self.config.empty_strings {
                    EmptyStringPolicy::Skip => {
                        debug!(
                            "Skipping empty string '{}' in {}",
                            string.name,
                            path.display()
                        );
                        summary.skipped_empty += 1;
                        continue;
                    }
                    EmptyStringPolicy::Error => {
                        return Err(PermgenError::EmptyString {
                            path: path.to_path_buf(),
                            name: string.name.clone(),
                        });
                    }
                }
            };

            let value = normalize_value(raw);
            for record in records.iter_mut() {
                if record.description_key.as_deref() == Some(string.name.as_str()) {
                    record.description = Some(value.clone());
                    summary.assignments += 1;
                }
                if record.label_key.as_deref() == Some(string.name.as_str()) {
                    record.label = Some(value.clone());
                    summary.assignments += 1;
                }
            }
        }

        Ok(())
    }
}

fn references(record: &PermissionRecord, key: &str) -> bool {
    record.label_key.as_deref() == Some(key) || record.description_key.as_deref() == Some(key)
}

/// Drop newlines and turn tabs into single spaces
pub fn normalize_value(raw: &str) -> String {
    raw.replace('\n', "").replace('\t', " ")
}
