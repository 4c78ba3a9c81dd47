//! configurator: layered YAML configuration with an environment overlay
//!
//! Merges configuration from an ordered list of YAML files (last listed wins)
//! and environment variables (which win over every file), and resolves dotted
//! paths such as `server.port` against the result.
//!
//! ```no_run
//! use configurator::Configurator;
//!
//! let config = Configurator::new(["base.yaml", "production.yaml"]);
//! let port = config.get_or_default("server.port", 8080_i64);
//! let json = config.export(&["server.port", "database.host"])?;
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod configurator;
pub mod domain;
pub mod env;
pub mod export;
pub mod path;
pub mod source;

pub use configurator::Configurator;
pub use domain::{Resolved, Scalar};
pub use env::{Environment, ProcessEnvironment, StaticEnvironment};
pub use source::{Document, SkipReason};
