//! List command - prints microservices in declaration order

use std::io::{self, Write};

use crate::infrastructure::MicroservicePool;

use super::Cli;

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let pool = super::bootstrap(cli)?;
    execute(&pool, &mut io::stdout().lock())
}

/// Stops at the first misconfigured microservice
pub fn execute(pool: &MicroservicePool, out: &mut impl Write) -> anyhow::Result<()> {
    for microservice in pool {
        let microservice = microservice?;

        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            microservice.name(),
            microservice.format(),
            microservice.base_uri(),
            microservice.api_path()
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MicroserviceConfig, MicroserviceConfigs};
    use crate::domain::MicroserviceError;
    use crate::infrastructure::ConstraintValidator;
    use std::sync::Arc;

    fn pool(configs: MicroserviceConfigs) -> MicroservicePool {
        MicroservicePool::new(Arc::new(ConstraintValidator::new()), configs)
    }

    #[test]
    fn test_list_prints_in_order() {
        let pool = pool(
            MicroserviceConfigs::new()
                .with(
                    "books",
                    MicroserviceConfig::new("https://books.example.com", "jsonld")
                        .with_api_path("/api"),
                )
                .with(
                    "authors",
                    MicroserviceConfig::new("https://authors.example.com", "jsonapi"),
                ),
        );

        let mut out = Vec::new();
        execute(&pool, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "books\tjsonld\thttps://books.example.com\t/api\n\
             authors\tjsonapi\thttps://authors.example.com\t\n"
        );
    }

    #[test]
    fn test_list_fails_on_invalid_entry() {
        let pool = pool(
            MicroserviceConfigs::new()
                .with("books", MicroserviceConfig::new("https://books.example.com", "jsonld"))
                .with("legacy", MicroserviceConfig::new("https://legacy.example.com", "xml")),
        );

        let mut out = Vec::new();
        let error = execute(&pool, &mut out).unwrap_err();

        let error = error.downcast_ref::<MicroserviceError>().unwrap();
        assert_eq!(error.name(), "legacy");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "books\tjsonld\thttps://books.example.com\t\n"
        );
    }
}
