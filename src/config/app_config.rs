use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::microservice::MicroserviceConfigs;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub microservices: MicroserviceConfigs,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

type ConfigFile = config::File<config::FileSourceFile, config::FileFormat>;

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_files(Self::files())
    }

    /// Load with an extra file layered above the defaults and below the environment
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        let mut files = Self::files();
        files.push(config::File::from(path).required(true));

        Self::load_files(files)
    }

    fn load_files(files: Vec<ConfigFile>) -> Result<Self, config::ConfigError> {
        let declared = declared_names(&files)?;

        let mut builder = config::Config::builder();
        for file in files {
            builder = builder.add_source(file);
        }

        let mut app: Self = builder
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        // The merged tree lowercases keys; put back the names as declared in files
        app.microservices = app.microservices.map_names(|name| {
            declared
                .get(name)
                .cloned()
                .unwrap_or_else(|| name.to_string())
        });

        Ok(app)
    }

    fn files() -> Vec<ConfigFile> {
        vec![
            config::File::with_name("config/default").required(false),
            config::File::with_name("config/local").required(false),
        ]
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("APP")
            .separator("__")
            .try_parsing(true)
    }
}

/// Microservice names as spelled in the files, keyed by their lowercase form
fn declared_names(files: &[ConfigFile]) -> Result<HashMap<String, String>, config::ConfigError> {
    let mut declared: HashMap<String, String> = HashMap::new();

    for file in files {
        let root = config::Source::collect(file)?;

        let Some(section) = root
            .into_iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("microservices"))
            .map(|(_, value)| value)
        else {
            continue;
        };

        for name in section.into_table()?.into_keys() {
            let folded = name.to_lowercase();

            match declared.entry(folded) {
                Entry::Occupied(existing) if *existing.get() != name => {
                    return Err(config::ConfigError::Message(format!(
                        "microservice names '{}' and '{}' differ only by case",
                        existing.get(),
                        name
                    )));
                }
                Entry::Occupied(_) => {}
                Entry::Vacant(slot) => {
                    slot.insert(name);
                }
            }
        }
    }

    Ok(declared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.logging.level, "info");
        assert!(matches!(config.logging.format, LogFormat::Pretty));
        assert!(config.microservices.is_empty());
    }

    #[test]
    fn test_deserialize_full_config() {
        let config: AppConfig = serde_json::from_str(
            r#"{
                "logging": {"level": "debug", "format": "json"},
                "microservices": {
                    "books": {"base_uri": "https://books.example.com", "api_path": "/api", "format": "jsonld"},
                    "authors": {"base_uri": "https://authors.example.com", "format": "jsonhal"}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert!(matches!(config.logging.format, LogFormat::Json));
        assert_eq!(
            config.microservices.names().collect::<Vec<_>>(),
            vec!["books", "authors"]
        );
    }

    #[test]
    fn test_deserialize_without_sections() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config.logging.level, "info");
        assert!(config.microservices.is_empty());
    }

    /// Loading reads process-wide environment variables
    static LOAD_LOCK: Mutex<()> = Mutex::new(());

    fn write_config(tag: &str, extension: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "microservice-pool-{}-{}.{}",
            tag,
            std::process::id(),
            extension
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_from_file_keeps_order() {
        let _guard = LOAD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let path = write_config(
            "order",
            "json",
            r#"{
                "microservices": {
                    "zeta": {"base_uri": "https://z.example.com", "format": "jsonld"},
                    "alpha": {"base_uri": "https://a.example.com", "format": "jsonapi"}
                }
            }"#,
        );

        let config = AppConfig::load_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            config.microservices.names().collect::<Vec<_>>(),
            vec!["zeta", "alpha"]
        );
        assert_eq!(
            config.microservices.get("alpha").unwrap().base_uri,
            "https://a.example.com"
        );
    }

    #[test]
    fn test_load_from_keeps_declared_name_case() {
        let _guard = LOAD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let path = write_config(
            "case",
            "toml",
            r#"
                [microservices.BookStore]
                base_uri = "https://bookstore.example.com"
                format = "jsonld"

                [microservices.alpha]
                base_uri = "https://alpha.example.com"
                format = "jsonapi"
            "#,
        );

        let config = AppConfig::load_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            config.microservices.names().collect::<Vec<_>>(),
            vec!["BookStore", "alpha"]
        );

        let pool = crate::create_pool(&config);
        assert!(pool.has("BookStore"));
        assert!(!pool.has("bookstore"));
        assert_eq!(pool.get("BookStore").unwrap().name(), "BookStore");
    }

    #[test]
    fn test_load_from_rejects_names_differing_only_by_case() {
        let _guard = LOAD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let path = write_config(
            "collision",
            "toml",
            r#"
                [microservices.BookStore]
                base_uri = "https://bookstore.example.com"
                format = "jsonld"

                [microservices.bookstore]
                base_uri = "https://other.example.com"
                format = "jsonld"
            "#,
        );

        let result = AppConfig::load_from(&path);
        std::fs::remove_file(&path).unwrap();

        let error = result.unwrap_err().to_string();
        assert!(error.contains("differ only by case"), "{error}");
    }

    #[test]
    fn test_environment_overrides_and_extends_microservices() {
        let _guard = LOAD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let path = write_config(
            "env",
            "toml",
            r#"
                [microservices.BookStore]
                base_uri = "https://bookstore.example.com"
                format = "jsonld"
            "#,
        );

        // SAFETY: environment access is serialized by LOAD_LOCK within this module
        unsafe {
            std::env::set_var("APP__MICROSERVICES__BOOKSTORE__FORMAT", "jsonhal");
            std::env::set_var(
                "APP__MICROSERVICES__INVENTORY__BASE_URI",
                "https://inventory.example.com",
            );
            std::env::set_var("APP__MICROSERVICES__INVENTORY__FORMAT", "jsonapi");
        }

        let result = AppConfig::load_from(&path);

        unsafe {
            std::env::remove_var("APP__MICROSERVICES__BOOKSTORE__FORMAT");
            std::env::remove_var("APP__MICROSERVICES__INVENTORY__BASE_URI");
            std::env::remove_var("APP__MICROSERVICES__INVENTORY__FORMAT");
        }
        std::fs::remove_file(&path).unwrap();

        let config = result.unwrap();
        assert_eq!(
            config.microservices.names().collect::<Vec<_>>(),
            vec!["BookStore", "inventory"]
        );

        let bookstore = config.microservices.get("BookStore").unwrap();
        assert_eq!(bookstore.base_uri, "https://bookstore.example.com");
        assert_eq!(bookstore.format, "jsonhal");

        let inventory = config.microservices.get("inventory").unwrap();
        assert_eq!(inventory.base_uri, "https://inventory.example.com");
        assert_eq!(inventory.format, "jsonapi");
    }
}
