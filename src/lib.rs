//! Microservice Pool
//!
//! Turns named microservice declarations into validated endpoint
//! descriptors:
//! - Lazy construction on first lookup, cached only once valid
//! - Pluggable structural validation plus a response format allow-list
//! - Lookup by name and iteration in declaration order

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

pub use config::{AppConfig, MicroserviceConfig, MicroserviceConfigs};
pub use domain::{
    Microservice, MicroserviceError, MicroserviceFormat, MicroserviceValidator, Violation,
    SUPPORTED_FORMATS,
};
pub use infrastructure::{ConstraintValidator, MicroservicePool, MicroservicePoolIter};

/// Build a pool over the configured microservices using the default validator
pub fn create_pool(config: &AppConfig) -> MicroservicePool {
    MicroservicePool::new(
        Arc::new(ConstraintValidator::new()),
        config.microservices.clone(),
    )
}
