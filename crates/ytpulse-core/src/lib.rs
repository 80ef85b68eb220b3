//! Shared domain types and configuration for ytpulse.
//!
//! Holds the comment record produced by collection, the sentiment category
//! and tally types consumed by classification and reporting, and the
//! environment-driven application configuration.

pub mod app_config;
pub mod comments;
pub mod config;

pub use app_config::{AppConfig, ConfigError};
pub use comments::{CommentRecord, Recommendation, SentimentCategory, Tally};
pub use config::{load_app_config, load_app_config_from_env};
