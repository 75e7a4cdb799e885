use thiserror::Error;

/// Errors raised while resolving a microservice from the pool
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MicroserviceError {
    #[error("Microservice '{name}' is not configured")]
    NotConfigured { name: String },

    #[error("Microservice '{name}' is misconfigured: '{field}': {message}")]
    InvalidConfiguration {
        name: String,
        field: String,
        message: String,
    },
}

impl MicroserviceError {
    pub fn not_configured(name: impl Into<String>) -> Self {
        Self::NotConfigured { name: name.into() }
    }

    pub fn invalid_configuration(
        name: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidConfiguration {
            name: name.into(),
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the microservice the error refers to
    pub fn name(&self) -> &str {
        match self {
            Self::NotConfigured { name } | Self::InvalidConfiguration { name, .. } => name,
        }
    }
}
