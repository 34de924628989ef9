use crate::config::DEFAULT_CELL_STYLE;
use crate::permission::PermissionRecord;
use quick_xml::escape::escape;
use std::borrow::Cow;

/// Renders permissions as `<tr>` rows of a five-column HTML table.
///
/// The fragment has no surrounding `<table>`; it is meant to be appended to
/// a page that collects the permissions of several packages, each section
/// introduced by a header row carrying its tag.
pub struct HtmlReporter {
    cell_style: String,
    escape: bool,
}

impl HtmlReporter {
    pub fn new() -> Self {
        Self {
            cell_style: DEFAULT_CELL_STYLE.to_string(),
            escape: false,
        }
    }

    pub fn with_cell_style(mut self, style: &str) -> Self {
        self.cell_style = style.to_string();
        self
    }

    /// Escape markup characters in the tag and cell contents
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Header row followed by one row per permission; nothing for an empty list
    pub fn render(&self, tag: &str, permissions: &[PermissionRecord]) -> String {
        let mut out = String::new();
        if permissions.is_empty() {
            return out;
        }

        out.push_str("<tr>\n");
        self.push_cell(&mut out, " colspan=\"5\"", tag);
        out.push_str("</tr>\n");

        for permission in permissions {
            out.push_str("<tr>\n");
            self.push_cell(&mut out, "", &permission.name);
            self.push_cell(&mut out, "", permission.description_text());
            self.push_cell(&mut out, "", permission.label_text());
            self.push_cell(&mut out, "", &permission.group);
            self.push_cell(&mut out, "", &permission.protection_level);
            out.push_str("</tr>\n");
        }

        out
    }

    fn push_cell(&self, out: &mut String, extra_attrs: &str, content: &str) {
        out.push_str(&format!(
            "<td{} style=\"{}\" align=\"left\">{}</td>\n",
            extra_attrs,
            self.cell_style,
            self.content(content)
        ));
    }

    fn content<'s>(&self, text: &'s str) -> Cow<'s, str> {
        if self.escape {
            escape(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}
