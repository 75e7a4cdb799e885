//! Infrastructure layer - Pool, validators and logging

pub mod logging;
pub mod microservice;
pub mod validation;

pub use microservice::{MicroservicePool, MicroservicePoolIter};
pub use validation::ConstraintValidator;
