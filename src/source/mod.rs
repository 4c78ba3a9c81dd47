//! Source loading
//!
//! Each configured location is read and parsed as YAML. Locations that cannot
//! be read or parsed contribute nothing; the reason is kept for diagnostics.

pub mod document;
pub mod loader;

pub use document::Document;
pub use loader::{load_source, load_sources, LoadedSources, SkipReason};
