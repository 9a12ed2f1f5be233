//! Shared domain types and configuration for the gemfind pipeline.
//!
//! The venue working set, the user's filter state, and the runtime
//! configuration live here so that the feed and ranking crates agree on one
//! canonical shape. Persisted user flags (joined, snoozed, saved venues) go
//! through the [`KvStore`] seam; this crate never touches storage directly.

pub mod app_config;
pub mod config;
pub mod kv;
pub mod types;
pub mod waitlist;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use kv::{KvStore, MemoryStore};
pub use types::{FilterState, Venue, DEFAULT_BUDGET_CEILING};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
