//! Domain layer - Microservice descriptors and the validation capability

pub mod error;
pub mod microservice;

pub use error::MicroserviceError;
pub use microservice::{
    Microservice, MicroserviceFormat, MicroserviceValidator, Violation, SUPPORTED_FORMATS,
};
