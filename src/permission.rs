use serde::Serialize;

/// Marker that introduces a string resource reference in a manifest attribute
pub const STRING_REF_MARKER: &str = "@string/";

/// Extract the resource key from a raw attribute value such as `@string/app_name`.
///
/// Everything after the first `@string/` is the key. Values without the
/// marker (literal text, `@android:string/...`) have no key.
pub fn string_key(raw: &str) -> Option<&str> {
    raw.find(STRING_REF_MARKER)
        .map(|index| &raw[index + STRING_REF_MARKER.len()..])
}

/// A `<permission>` declaration from the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionRecord {
    /// Permission identifier (`android:name`)
    pub name: String,

    /// Permission group, empty when not declared
    pub group: String,

    /// Protection level, empty when not declared
    pub protection_level: String,

    /// Resource key the label refers to
    pub label_key: Option<String>,

    /// Resource key the description refers to
    pub description_key: Option<String>,

    /// Resolved label text, `None` until a matching string resource is found
    pub label: Option<String>,

    /// Resolved description text
    pub description: Option<String>,
}

impl PermissionRecord {
    /// Build a record from raw attribute values. Missing attributes are empty strings.
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        protection_level: impl Into<String>,
        raw_label: &str,
        raw_description: &str,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            protection_level: protection_level.into(),
            label_key: string_key(raw_label).map(str::to_string),
            description_key: string_key(raw_description).map(str::to_string),
            label: None,
            description: None,
        }
    }

    /// Label text for display, empty when unresolved
    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    /// Description text for display, empty when unresolved
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Keys this record still waits on
    pub fn unresolved_keys(&self) -> impl Iterator<Item = &str> {
        let label = match (&self.label_key, &self.label) {
            (Some(key), None) => Some(key.as_str()),
            _ => None,
        };
        let description = match (&self.description_key, &self.description) {
            (Some(key), None) => Some(key.as_str()),
            _ => None,
        };
        label.into_iter().chain(description)
    }
}
