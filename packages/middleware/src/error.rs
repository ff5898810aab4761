use crate::schema::FieldError;

/// Errors raised by the client core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Metadata has not been loaded, so the login form cannot be validated.
    #[error("validation rules are not available")]
    SchemaUnavailable,

    /// A login request is already in flight.
    #[error("a login request is already pending")]
    Busy,

    #[error("invalid form: {} field error(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("rule bounds are inverted (min {min} > max {max})")]
    InvalidRule { min: usize, max: usize },

    #[error("failed to decode server payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
