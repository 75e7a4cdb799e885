//! Raw microservice configuration records

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One microservice entry as declared in configuration
///
/// Required fields fall back to empty strings when absent so that the
/// validator reports them instead of the deserializer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MicroserviceConfig {
    #[serde(default)]
    pub base_uri: String,

    #[serde(default)]
    pub api_path: Option<String>,

    #[serde(default)]
    pub format: String,
}

impl MicroserviceConfig {
    pub fn new(base_uri: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            api_path: None,
            format: format.into(),
        }
    }

    pub fn with_api_path(mut self, api_path: impl Into<String>) -> Self {
        self.api_path = Some(api_path.into());
        self
    }
}

/// Microservice configurations keyed by name, in declaration order
#[derive(Debug, Clone, Default)]
pub struct MicroserviceConfigs {
    entries: Vec<(String, MicroserviceConfig)>,
    index: HashMap<String, usize>,
}

impl MicroserviceConfigs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry; a repeated name replaces the earlier record in place
    pub fn insert(&mut self, name: impl Into<String>, config: MicroserviceConfig) {
        let name = name.into();

        match self.index.get(&name).copied() {
            Some(position) => self.entries[position].1 = config,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, config));
            }
        }
    }

    pub fn with(mut self, name: impl Into<String>, config: MicroserviceConfig) -> Self {
        self.insert(name, config);
        self
    }

    pub fn get(&self, name: &str) -> Option<&MicroserviceConfig> {
        self.index.get(name).map(|&position| &self.entries[position].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Rename every entry through `rename`, keeping declaration order
    pub fn map_names(self, mut rename: impl FnMut(&str) -> String) -> Self {
        self.entries
            .into_iter()
            .map(|(name, config)| (rename(&name), config))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, MicroserviceConfig)> for MicroserviceConfigs {
    fn from_iter<I: IntoIterator<Item = (N, MicroserviceConfig)>>(iter: I) -> Self {
        let mut configs = Self::new();

        for (name, config) in iter {
            configs.insert(name, config);
        }

        configs
    }
}

impl<'de> Deserialize<'de> for MicroserviceConfigs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ConfigsVisitor;

        impl<'de> Visitor<'de> for ConfigsVisitor {
            type Value = MicroserviceConfigs;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of microservice names to configurations")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut configs = MicroserviceConfigs::new();

                while let Some((name, config)) = map.next_entry::<String, MicroserviceConfig>()? {
                    configs.insert(name, config);
                }

                Ok(configs)
            }
        }

        deserializer.deserialize_map(ConfigsVisitor)
    }
}
