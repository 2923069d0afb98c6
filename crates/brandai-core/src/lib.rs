//! Shared domain types and configuration for the BrandAI service.
//!
//! Holds the inbound [`BrandBrief`] with its validator, the [`BrandIdentity`]
//! schema both generation backends must satisfy, and env-driven [`AppConfig`].

pub mod app_config;
pub mod brief;
pub mod config;
pub mod identity;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, API_KEY_PLACEHOLDER};
pub use brief::{BrandBrief, Era, Goal, Tone, VisualStyle};
pub use config::{load_app_config, load_app_config_from_env};
pub use identity::{BrandIdentity, ColorPalette, SocialMediaPost, Typography};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// A brief that failed validation before reaching the generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max} characters (got {actual})")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("palavras must contain at least 3 comma-separated keywords (got {found})")]
    NotEnoughKeywords { found: usize },
}

/// A generated identity that does not satisfy the response schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("identity schema violation: {0}")]
pub struct SchemaViolation(pub String);
