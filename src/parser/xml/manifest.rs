use super::{read_document, XmlDocument};
use crate::error::Result;
use crate::permission::PermissionRecord;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;
use tracing::debug;

const PERMISSION_TAG: &[u8] = b"permission";

/// Parser for the `<permission>` declarations of an AndroidManifest.xml
pub struct ManifestParser;

impl ManifestParser {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a manifest file
    pub fn parse_file(&self, path: &Path) -> Result<Vec<PermissionRecord>> {
        let contents = read_document(path)?;
        self.parse(path, &contents)
    }

    /// Extract every permission declaration in document order
    pub fn parse(&self, path: &Path, contents: &str) -> Result<Vec<PermissionRecord>> {
        let mut doc = XmlDocument::new(path, contents);
        let mut permissions = Vec::new();

        while let Some(event) = doc.next_event()? {
            match event {
                Event::Start(ref e) | Event::Empty(ref e) if e.name().as_ref() == PERMISSION_TAG => {
                    permissions.push(self.read_permission(&doc, e)?);
                }
                _ => {}
            }
        }

        debug!(
            "Parsed manifest {}: {} permissions",
            path.display(),
            permissions.len()
        );

        Ok(permissions)
    }

    fn read_permission(&self, doc: &XmlDocument<'_>, e: &BytesStart<'_>) -> Result<PermissionRecord> {
        let attr = |name: &str| -> Result<String> {
            Ok(doc.attribute(e, name)?.unwrap_or_default())
        };

        let record = PermissionRecord::new(
            attr("android:name")?,
            attr("android:permissionGroup")?,
            attr("android:protectionLevel")?,
            &attr("android:label")?,
            &attr("android:description")?,
        );

        debug!(
            "Found permission {} (label key: {:?}, description key: {:?})",
            record.name, record.label_key, record.description_key
        );

        Ok(record)
    }
}

impl Default for ManifestParser {
    fn default() -> Self {
        Self::new()
    }
}
