//! Error types for the Jeevan profile core.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Onboarding error: {0}")]
    Onboarding(#[from] OnboardingError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors produced at the profile store boundary.
///
/// "No profile yet" is not an error; `ProfileStore::load_profile`
/// reports it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors surfaced by the onboarding controller.
///
/// Field updates and step navigation never fail; only the two store
/// crossings do, and both are retryable. The controller leaves its
/// state untouched when returning one of these.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingError {
    #[error("Failed to load profile: {0}")]
    LoadFailed(#[source] StoreError),

    #[error("Failed to save profile: {0}")]
    SaveFailed(#[source] StoreError),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
