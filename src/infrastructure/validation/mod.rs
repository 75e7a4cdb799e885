//! Microservice validator implementations

mod constraint;

pub use constraint::ConstraintValidator;
