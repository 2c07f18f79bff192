//! Crate prelude

// Re-export the crate Error and Result alias.
pub use crate::error::{Error, Result};
