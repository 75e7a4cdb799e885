//! Validation capability for microservice descriptors

use std::fmt;

use super::entity::Microservice;

#[cfg(test)]
use mockall::automock;

/// A single constraint failure reported by a validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path of the offending property, e.g. `base_uri`
    pub property_path: String,
    pub message: String,
}

impl Violation {
    pub fn new(property_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property_path: property_path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}': {}", self.property_path, self.message)
    }
}

/// Checks a microservice against structural constraints
///
/// Implementations must be free of side effects. The order of the returned
/// violations is meaningful: callers surface the first one.
#[cfg_attr(test, automock)]
pub trait MicroserviceValidator: Send + Sync {
    fn validate(&self, microservice: &Microservice) -> Vec<Violation>;
}
