//! Core value types shared by lookup and export

pub mod value;

pub use value::{yaml_to_json, Resolved, Scalar};
