//! Default validator backed by `validator` derive constraints

use validator::{Validate, ValidationError};

use crate::domain::{Microservice, MicroserviceValidator, Violation};

/// Fields in declaration order; violations are reported in this order
const FIELD_ORDER: [&str; 4] = ["name", "base_uri", "api_path", "format"];

/// Validates microservices against the constraints declared on the entity
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintValidator;

impl ConstraintValidator {
    pub fn new() -> Self {
        Self
    }
}

impl MicroserviceValidator for ConstraintValidator {
    fn validate(&self, microservice: &Microservice) -> Vec<Violation> {
        let errors = match microservice.validate() {
            Ok(()) => return Vec::new(),
            Err(errors) => errors,
        };

        let mut fields: Vec<(String, Vec<ValidationError>)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let field: &str = field.as_ref();
                (field.to_string(), errors.clone())
            })
            .collect();

        fields.sort_by_key(|(field, _)| {
            let position = FIELD_ORDER
                .iter()
                .position(|known| *known == field.as_str())
                .unwrap_or(FIELD_ORDER.len());
            (position, field.clone())
        });

        fields
            .into_iter()
            .flat_map(|(field, errors)| {
                errors
                    .into_iter()
                    .map(move |error| Violation::new(field.clone(), message_of(&error)))
            })
            .collect()
    }
}

fn message_of(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => error.code.to_string(),
    }
}
