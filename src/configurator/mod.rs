//! Layered configuration lookup
//!
//! Sources are consulted in ascending priority (the last one listed wins),
//! and the environment overlay outranks all of them. A source whose value
//! at a path is missing or `null` has no opinion about that path: it never
//! blanks out a value from a lower-priority source. This also means no source
//! can deliberately unset an inherited value.

use crate::domain::Resolved;
use crate::env::{overlay_value, Environment, ProcessEnvironment};
use crate::export;
use crate::source::{load_sources, Document, SkipReason};
use serde_yaml::Value as YamlValue;
use std::path::Path;

/// Merge-and-lookup engine over an immutable, priority-ordered source list.
#[derive(Debug)]
pub struct Configurator<E = ProcessEnvironment> {
    documents: Vec<Document>,
    skipped: Vec<SkipReason>,
    env: E,
}

impl Configurator<ProcessEnvironment> {
    /// Load `sources` (lowest priority first) with the process environment as
    /// the overlay. Sources that fail to load are dropped.
    pub fn new<I, P>(sources: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self::with_environment(sources, ProcessEnvironment)
    }
}

impl<E: Environment> Configurator<E> {
    pub fn with_environment<I, P>(sources: I, env: E) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let loaded = load_sources(sources);
        tracing::debug!(
            "Configurator ready: {} sources loaded, {} skipped",
            loaded.documents.len(),
            loaded.skipped.len()
        );
        Self { documents: loaded.documents, skipped: loaded.skipped, env }
    }

    /// Build from already-parsed documents, lowest priority first.
    pub fn from_documents(documents: Vec<Document>, env: E) -> Self {
        Self { documents, skipped: Vec::new(), env }
    }

    /// Resolve `path`. A non-empty environment variable named after the
    /// uppercased path wins outright; otherwise the highest-priority source
    /// with a non-null value at `path` supplies it.
    pub fn get(&self, path: &str) -> Resolved {
        if let Some(value) = overlay_value(&self.env, path) {
            tracing::trace!(path, "resolved from environment");
            return Resolved::from(value);
        }

        // Walking from the top is equivalent to letting each later source
        // overwrite earlier non-empty answers.
        self.documents
            .iter()
            .rev()
            .filter_map(|document| {
                let value = Resolved::from_yaml(document.lookup(path)?);
                if value.is_absent() {
                    return None;
                }
                tracing::trace!(path, source = %document.origin().display(), "resolved");
                Some(value)
            })
            .next()
            .unwrap_or(Resolved::Absent)
    }

    /// Length of the sequence the winning source holds at `path`, or `None`
    /// when that node is not a sequence. Exports use it to decide whether an
    /// integer segment indexes a list or names a mapping key.
    pub(crate) fn sequence_len(&self, path: &str) -> Option<usize> {
        let mut node = self
            .documents
            .iter()
            .rev()
            .filter_map(|document| document.lookup(path))
            .find(|node| !node.is_null())?;
        while let YamlValue::Tagged(tagged) = node {
            node = &tagged.value;
        }
        node.as_sequence().map(Vec::len)
    }

    /// Like [`get`](Self::get), falling back to `default` (unchanged) when
    /// nothing is found.
    pub fn get_or_default(&self, path: &str, default: impl Into<Resolved>) -> Resolved {
        match self.get(path) {
            Resolved::Absent => default.into(),
            value => value,
        }
    }

    /// Compact JSON holding only the resolvable `paths`, nested as the paths
    /// describe.
    pub fn export<S: AsRef<str>>(&self, paths: &[S]) -> serde_json::Result<String> {
        export::export(self, paths)
    }

    pub fn export_pretty<S: AsRef<str>>(&self, paths: &[S]) -> serde_json::Result<String> {
        export::export_pretty(self, paths)
    }

    /// Loaded documents, lowest priority first.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Sources dropped at construction, in the order they were attempted.
    pub fn skipped(&self) -> &[SkipReason] {
        &self.skipped
    }

    pub fn environment(&self) -> &E {
        &self.env
    }
}
