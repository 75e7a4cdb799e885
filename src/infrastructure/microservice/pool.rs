//! Lazily built, validated microservice registry

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use super::iter::MicroservicePoolIter;
use crate::config::MicroserviceConfigs;
use crate::domain::{
    Microservice, MicroserviceError, MicroserviceFormat, MicroserviceValidator, SUPPORTED_FORMATS,
};

/// Registry of configured microservices
///
/// Descriptors are built from configuration on first access and cached once
/// they pass validation. Failed builds leave no trace, so the next lookup for
/// the same name starts over.
pub struct MicroservicePool {
    configs: MicroserviceConfigs,
    validator: Arc<dyn MicroserviceValidator>,
    cache: RwLock<HashMap<String, Arc<Microservice>>>,
}

impl MicroservicePool {
    pub fn new(validator: Arc<dyn MicroserviceValidator>, configs: MicroserviceConfigs) -> Self {
        Self {
            configs,
            validator,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Whether `name` is declared in configuration
    pub fn has(&self, name: &str) -> bool {
        self.configs.contains(name)
    }

    /// Get the validated microservice registered under `name`
    pub fn get(&self, name: &str) -> Result<Arc<Microservice>, MicroserviceError> {
        if let Some(cached) = self.cache.read().get(name) {
            debug!(microservice = %name, "Cache hit for microservice");
            return Ok(Arc::clone(cached));
        }

        let microservice = Arc::new(self.build(name)?);
        let (installed, inserted) = self.install(name, microservice);

        if inserted {
            debug!(
                microservice = %name,
                base_uri = %installed.base_uri(),
                format = %installed.format(),
                "Microservice built"
            );
        }

        Ok(installed)
    }

    /// Walk every configured microservice in declaration order
    pub fn iter(&self) -> MicroservicePoolIter<'_> {
        MicroservicePoolIter::new(self, self.configs.names())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.configs.names()
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Number of microservices built and cached so far
    pub fn cached_count(&self) -> usize {
        self.cache.read().len()
    }

    /// Cache `microservice` unless another caller got there first; returns the
    /// cached instance and whether it is the one passed in
    fn install(&self, name: &str, microservice: Arc<Microservice>) -> (Arc<Microservice>, bool) {
        let mut cache = self.cache.write();
        let installed = cache
            .entry(name.to_string())
            .or_insert_with(|| Arc::clone(&microservice));

        (Arc::clone(installed), Arc::ptr_eq(installed, &microservice))
    }

    fn build(&self, name: &str) -> Result<Microservice, MicroserviceError> {
        let config = self
            .configs
            .get(name)
            .ok_or_else(|| MicroserviceError::not_configured(name))?;

        let microservice = Microservice::new(
            name,
            config.base_uri.as_str(),
            config.api_path.as_deref().unwrap_or_default(),
            config.format.as_str(),
        );

        self.check(&microservice)?;

        Ok(microservice)
    }

    fn check(&self, microservice: &Microservice) -> Result<(), MicroserviceError> {
        if let Some(violation) = self.validator.validate(microservice).into_iter().next() {
            return Err(MicroserviceError::invalid_configuration(
                microservice.name(),
                violation.property_path,
                violation.message,
            ));
        }

        if !MicroserviceFormat::is_supported(microservice.format()) {
            return Err(MicroserviceError::invalid_configuration(
                microservice.name(),
                "format",
                format!(
                    "'{}' format isn't supported, supported formats are {}",
                    microservice.format(),
                    SUPPORTED_FORMATS.join(",")
                ),
            ));
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a MicroservicePool {
    type Item = Result<Arc<Microservice>, MicroserviceError>;
    type IntoIter = MicroservicePoolIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for MicroservicePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MicroservicePool")
            .field("configs", &self.configs)
            .field("cached", &self.cached_count())
            .finish_non_exhaustive()
    }
}
