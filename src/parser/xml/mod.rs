mod manifest;
mod strings;

pub use manifest::ManifestParser;
pub use strings::{StringResource, StringsParser};

use crate::error::{Malformation, PermgenError, Result};
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::Reader;
use std::path::{Path, PathBuf};

/// Event reader that rejects documents a validating XML parser would reject.
///
/// quick-xml already checks tokens, attribute syntax and end-tag names; this
/// adds the document-level rules: exactly one root element, nothing but
/// whitespace outside it, and every element closed at end of input.
pub(crate) struct XmlDocument<'a> {
    path: PathBuf,
    reader: Reader<&'a [u8]>,
    depth: usize,
    seen_root: bool,
}

impl<'a> XmlDocument<'a> {
    pub fn new(path: &Path, contents: &'a str) -> Self {
        let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
        let mut reader = Reader::from_str(contents);
        reader.trim_text(false);
        reader.check_end_names(true);

        Self {
            path: path.to_path_buf(),
            reader,
            depth: 0,
            seen_root: false,
        }
    }

    /// Next event, or `None` once the whole document has been read
    pub fn next_event(&mut self) -> Result<Option<Event<'a>>> {
        let event = self
            .reader
            .read_event()
            .map_err(|source| self.xml_error(source))?;

        match &event {
            Event::Start(_) => {
                self.enter_root()?;
                self.depth += 1;
            }
            Event::Empty(_) => self.enter_root()?,
            // Unmatched end tags are rejected by quick-xml's end-name check
            Event::End(_) => self.depth = self.depth.saturating_sub(1),
            Event::Text(text) if self.depth == 0 => {
                if !text.iter().all(u8::is_ascii_whitespace) {
                    return Err(self.malformed(Malformation::TextOutsideRoot));
                }
            }
            Event::CData(_) if self.depth == 0 => {
                return Err(self.malformed(Malformation::TextOutsideRoot));
            }
            Event::Eof => {
                if self.depth > 0 {
                    return Err(self.malformed(Malformation::UnclosedElement));
                }
                if !self.seen_root {
                    return Err(self.malformed(Malformation::NoRootElement));
                }
                return Ok(None);
            }
            _ => {}
        }

        Ok(Some(event))
    }

    /// Unescaped value of the attribute with the given qualified name
    pub fn attribute(&self, element: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
        for attr in element.attributes() {
            let attr = attr.map_err(|e| self.xml_error(e.into()))?;
            if attr.key.as_ref() == name.as_bytes() {
                let value = attr
                    .unescape_value()
                    .map_err(|source| self.xml_error(source))?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }

    /// Unescaped text with XML end-of-line handling applied
    pub fn text(&self, text: &BytesText<'_>) -> Result<String> {
        let value = text.unescape().map_err(|source| self.xml_error(source))?;
        Ok(normalize_line_endings(&value))
    }

    fn enter_root(&mut self) -> Result<()> {
        if self.depth == 0 {
            if self.seen_root {
                return Err(self.malformed(Malformation::MultipleRootElements));
            }
            self.seen_root = true;
        }
        Ok(())
    }

    fn xml_error(&self, source: quick_xml::Error) -> PermgenError {
        PermgenError::Xml {
            path: self.path.clone(),
            position: self.reader.buffer_position(),
            source,
        }
    }

    fn malformed(&self, kind: Malformation) -> PermgenError {
        PermgenError::Malformed {
            path: self.path.clone(),
            kind,
        }
    }
}

/// Translate `\r\n` and lone `\r` to `\n`, as an XML processor does before parsing
pub(crate) fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Read an XML file from disk
pub(crate) fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| PermgenError::Io {
        path: path.to_path_buf(),
        source,
    })
}
