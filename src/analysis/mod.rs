mod resolver;

pub use resolver::{normalize_value, ResolveSummary, ResourceResolver};
