//! Partial export of resolved values as JSON
//!
//! Only paths that resolve are written; a path that resolves to nothing leaves
//! no key behind. Paths are applied in order, so a later duplicate (or a
//! later path covering an earlier one) overwrites what was set before.

use crate::configurator::Configurator;
use crate::env::Environment;
use crate::path::assign;
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Build the exported tree for `paths`.
pub fn export_document<E, S>(config: &Configurator<E>, paths: &[S]) -> JsonValue
where
    E: Environment,
    S: AsRef<str>,
{
    let mut exported = JsonValue::Object(JsonMap::new());
    for path in paths {
        let path = path.as_ref();
        match config.get(path).to_json() {
            Some(value) => {
                assign(&mut exported, path, value, |prefix| config.sequence_len(prefix))
            }
            None => tracing::debug!("Omitting unresolved path '{}' from export", path),
        }
    }
    exported
}

pub fn export<E, S>(config: &Configurator<E>, paths: &[S]) -> serde_json::Result<String>
where
    E: Environment,
    S: AsRef<str>,
{
    serde_json::to_string(&export_document(config, paths))
}

pub fn export_pretty<E, S>(config: &Configurator<E>, paths: &[S]) -> serde_json::Result<String>
where
    E: Environment,
    S: AsRef<str>,
{
    serde_json::to_string_pretty(&export_document(config, paths))
}
