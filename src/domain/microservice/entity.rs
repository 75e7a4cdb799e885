//! Microservice entity

use validator::Validate;

use super::format::MicroserviceFormat;

/// A remote HTTP service addressed by name
///
/// Construction never fails. Whether the configured values are usable is
/// decided afterwards by a [`MicroserviceValidator`](super::MicroserviceValidator)
/// and the pool's format allow-list; the constraints below are the ones the
/// default validator enforces.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Microservice {
    #[validate(length(min = 1, message = "This value should not be blank."))]
    name: String,

    #[validate(
        length(min = 1, message = "This value should not be blank."),
        url(message = "This value is not a valid URL.")
    )]
    base_uri: String,

    api_path: String,

    #[validate(length(min = 1, message = "This value should not be blank."))]
    format: String,
}

impl Microservice {
    pub fn new(
        name: impl Into<String>,
        base_uri: impl Into<String>,
        api_path: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_uri: base_uri.into(),
            api_path: api_path.into(),
            format: format.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn api_path(&self) -> &str {
        &self.api_path
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// Parsed format, `None` if the configured value is not supported
    pub fn format_kind(&self) -> Option<MicroserviceFormat> {
        MicroserviceFormat::parse(&self.format)
    }

    /// Base URI joined with the API path by a single slash
    pub fn endpoint(&self) -> String {
        let path = self.api_path.trim_start_matches('/');

        if path.is_empty() {
            return self.base_uri.clone();
        }

        format!("{}/{}", self.base_uri.trim_end_matches('/'), path)
    }
}
