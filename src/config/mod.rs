mod loader;

pub use loader::{Config, EmptyStringPolicy, ReportConfig, ResourceConfig, DEFAULT_CELL_STYLE};
