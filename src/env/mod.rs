//! Environment-variable overlay
//!
//! The overlay outranks every file source. For a lookup path `p` the variable
//! consulted is `p` uppercased verbatim: `database.host` reads `DATABASE.HOST`,
//! delimiters included.

use std::collections::HashMap;

/// Read access to a set of environment variables.
pub trait Environment {
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        // Names the platform cannot represent are never set.
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(name).and_then(|value| value.into_string().ok())
    }
}

/// A fixed set of variables, for tests and for hosts that manage their own
/// environment snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    vars: HashMap<String, String>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticEnvironment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl Environment for StaticEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Variable name consulted for `path`.
pub fn overlay_name(path: &str) -> String {
    path.to_uppercase()
}

/// Overlay value for `path`, if the variable is set to something non-empty.
pub fn overlay_value<E: Environment + ?Sized>(env: &E, path: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }
    env.var(&overlay_name(path)).filter(|value| !value.is_empty())
}
