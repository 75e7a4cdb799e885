//! Response formats a microservice can speak

use std::fmt;

/// Format names accepted in microservice configuration, in display order
pub const SUPPORTED_FORMATS: [&str; 3] = ["jsonld", "jsonapi", "jsonhal"];

/// Hypermedia format exposed by a microservice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MicroserviceFormat {
    JsonLd,
    JsonApi,
    JsonHal,
}

impl MicroserviceFormat {
    /// Parse a configured format name, `None` when it is not supported
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "jsonld" => Some(Self::JsonLd),
            "jsonapi" => Some(Self::JsonApi),
            "jsonhal" => Some(Self::JsonHal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JsonLd => "jsonld",
            Self::JsonApi => "jsonapi",
            Self::JsonHal => "jsonhal",
        }
    }

    /// Media type to send in `Accept` / `Content-Type` headers
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::JsonLd => "application/ld+json",
            Self::JsonApi => "application/vnd.api+json",
            Self::JsonHal => "application/hal+json",
        }
    }

    pub fn is_supported(value: &str) -> bool {
        Self::parse(value).is_some()
    }
}

impl fmt::Display for MicroserviceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
