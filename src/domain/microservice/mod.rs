//! Microservice domain

mod entity;
mod format;
mod validation;

pub use entity::Microservice;
pub use format::{MicroserviceFormat, SUPPORTED_FORMATS};
pub use validation::{MicroserviceValidator, Violation};

#[cfg(test)]
pub use validation::MockMicroserviceValidator;
