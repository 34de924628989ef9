use super::{normalize_line_endings, read_document, XmlDocument};
use crate::error::Result;
use quick_xml::events::Event;
use std::path::Path;
use tracing::debug;

const STRING_TAG: &[u8] = b"string";

/// A `<string name="...">` entry from a values resource file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringResource {
    /// Value of the `name` attribute, empty when missing
    pub name: String,

    /// Text content, `None` when the element has no text at all
    pub value: Option<String>,
}

/// Parser for Android string resource files (res/values*/strings.xml)
pub struct StringsParser;

impl StringsParser {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a resource file
    pub fn parse_file(&self, path: &Path) -> Result<Vec<StringResource>> {
        let contents = read_document(path)?;
        self.parse(path, &contents)
    }

    /// Extract every `<string>` element in document order.
    ///
    /// The value is the element's full text content: text and CDATA of the
    /// element and of any inline markup nested in it (`<b>`, `<xliff:g>`),
    /// entity-unescaped. Unlike a DOM lookup of the first child node, text
    /// after inline markup is kept as well.
    pub fn parse(&self, path: &Path, contents: &str) -> Result<Vec<StringResource>> {
        let mut doc = XmlDocument::new(path, contents);
        let mut strings: Vec<StringResource> = Vec::new();
        // Indices into `strings` of the <string> elements currently open
        let mut open: Vec<usize> = Vec::new();

        while let Some(event) = doc.next_event()? {
            match event {
                Event::Start(ref e) if e.name().as_ref() == STRING_TAG => {
                    let name = doc.attribute(e, "name")?.unwrap_or_default();
                    open.push(strings.len());
                    strings.push(StringResource { name, value: None });
                }
                Event::Empty(ref e) if e.name().as_ref() == STRING_TAG => {
                    let name = doc.attribute(e, "name")?.unwrap_or_default();
                    strings.push(StringResource { name, value: None });
                }
                Event::End(ref e) if e.name().as_ref() == STRING_TAG => {
                    open.pop();
                }
                Event::Text(ref t) if !open.is_empty() && !t.is_empty() => {
                    let text = doc.text(t)?;
                    append_text(&mut strings, &open, &text);
                }
                Event::CData(ref c) if !open.is_empty() => {
                    let text = normalize_line_endings(&String::from_utf8_lossy(c));
                    append_text(&mut strings, &open, &text);
                }
                _ => {}
            }
        }

        debug!(
            "Parsed resource file {}: {} string entries",
            path.display(),
            strings.len()
        );

        Ok(strings)
    }
}

impl Default for StringsParser {
    fn default() -> Self {
        Self::new()
    }
}

fn append_text(strings: &mut [StringResource], open: &[usize], text: &str) {
    for &index in open {
        strings[index]
            .value
            .get_or_insert_with(String::new)
            .push_str(text);
    }
}
