//! Check command - validates every configured microservice

use std::io::{self, Write};

use crate::infrastructure::MicroservicePool;

use super::Cli;

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let pool = super::bootstrap(cli)?;
    execute(&pool, &mut io::stdout().lock())
}

/// Reports every entry, then fails if any of them is misconfigured
pub fn execute(pool: &MicroservicePool, out: &mut impl Write) -> anyhow::Result<()> {
    let mut failures = 0;

    for name in pool.names() {
        match pool.get(name) {
            Ok(_) => writeln!(out, "ok\t{}", name)?,
            Err(e) => {
                failures += 1;
                writeln!(out, "error\t{}\t{}", name, e)?;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!(
            "{} of {} microservices are misconfigured",
            failures,
            pool.len()
        );
    }

    Ok(())
}
