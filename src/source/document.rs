//! Parsed source documents

use crate::path;
use serde_yaml::Value;
use std::path::{Path, PathBuf};

/// One parsed configuration file. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    origin: PathBuf,
    root: Value,
}

impl Document {
    pub fn new(origin: impl Into<PathBuf>, root: Value) -> Self {
        Self { origin: origin.into(), root }
    }

    /// Parse YAML text. An empty document parses to `null` and resolves
    /// nothing.
    pub fn parse(origin: impl Into<PathBuf>, text: &str) -> Result<Self, serde_yaml::Error> {
        let root: Value = serde_yaml::from_str(text)?;
        Ok(Self::new(origin, root))
    }

    /// Where the document was loaded from.
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn lookup(&self, path: &str) -> Option<&Value> {
        path::lookup(&self.root, path)
    }
}

#[cfg(test)]
mod tests {
    use super::Document;

    #[test]
    fn parse_and_lookup() {
        let doc = Document::parse("base.yaml", "server:\n  port: 8080\n").expect("parse");
        assert_eq!(doc.origin().to_str(), Some("base.yaml"));
        assert_eq!(doc.lookup("server.port").and_then(|v| v.as_i64()), Some(8080));
    }

    #[test]
    fn empty_text_is_a_null_document() {
        let doc = Document::parse("empty.yaml", "").expect("parse");
        assert!(doc.root().is_null());
        assert!(doc.lookup("anything").is_none());
    }

    #[test]
    fn multiple_documents_are_rejected() {
        assert!(Document::parse("multi.yaml", "a: 1\n---\nb: 2\n").is_err());
    }
}
