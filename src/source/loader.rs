//! Source file loading

use super::Document;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a source location contributed nothing.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("Failed reading source {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid YAML in source {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl SkipReason {
    pub fn path(&self) -> &Path {
        match self {
            SkipReason::Read { path, .. } | SkipReason::Parse { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SkipReason::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Outcome of loading an ordered list of locations.
#[derive(Debug, Default)]
pub struct LoadedSources {
    /// Successfully parsed documents, lowest priority first.
    pub documents: Vec<Document>,
    pub skipped: Vec<SkipReason>,
}

/// Read and parse a single location. The file is read whole and closed
/// before parsing.
pub fn load_source(path: &Path) -> Result<Document, SkipReason> {
    let content = fs::read_to_string(path)
        .map_err(|source| SkipReason::Read { path: path.to_path_buf(), source })?;

    Document::parse(path, &content)
        .map_err(|source| SkipReason::Parse { path: path.to_path_buf(), source })
}

/// Load every location in order, keeping the relative order of the ones
/// that succeed.
pub fn load_sources<I, P>(locations: I) -> LoadedSources
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut loaded = LoadedSources::default();

    for location in locations {
        match load_source(location.as_ref()) {
            Ok(document) => {
                tracing::debug!("Loaded source {}", document.origin().display());
                loaded.documents.push(document);
            }
            Err(reason) => {
                // Missing files are how optional override layers opt out.
                if reason.is_not_found() {
                    tracing::debug!("Skipping missing source {}", reason.path().display());
                } else {
                    tracing::warn!("Skipping source: {}", reason);
                }
                loaded.skipped.push(reason);
            }
        }
    }

    loaded
}
