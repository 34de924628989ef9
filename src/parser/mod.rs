pub mod xml;

pub use xml::{ManifestParser, StringResource, StringsParser};
