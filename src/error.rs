//! Error types for the lead-capture service.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Mail dispatch errors.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Mail transport is not configured (set SMTP_HOST/SMTP_USER/SMTP_PASS)")]
    NotConfigured,

    #[error("SMTP relay error: {0}")]
    Relay(String),

    #[error("Invalid {kind} address '{address}': {reason}")]
    InvalidAddress {
        kind: String,
        address: String,
        reason: String,
    },

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("SMTP send failed: {0}")]
    Send(String),
}

/// Wizard state machine errors.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Cannot submit before reaching the final step")]
    NotAtFinalStep,

    #[error("Submission failed: {0}")]
    SubmitFailed(String),
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
