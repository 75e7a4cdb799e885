use std::sync::Arc;

use super::pool::MicroservicePool;
use crate::domain::{Microservice, MicroserviceError};

/// Iterator over a pool's microservices in declaration order
///
/// Each step resolves its name through [`MicroservicePool::get`], so it
/// reuses and extends the shared cache. The first error is yielded and
/// ends the iteration.
pub struct MicroservicePoolIter<'a> {
    pool: &'a MicroservicePool,
    names: Box<dyn Iterator<Item = &'a str> + 'a>,
    done: bool,
}

impl<'a> MicroservicePoolIter<'a> {
    pub(super) fn new(
        pool: &'a MicroservicePool,
        names: impl Iterator<Item = &'a str> + 'a,
    ) -> Self {
        Self {
            pool,
            names: Box::new(names),
            done: false,
        }
    }
}

impl Iterator for MicroservicePoolIter<'_> {
    type Item = Result<Arc<Microservice>, MicroserviceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(name) = self.names.next() else {
            self.done = true;
            return None;
        };

        let result = self.pool.get(name);
        self.done = result.is_err();

        Some(result)
    }
}

impl std::iter::FusedIterator for MicroservicePoolIter<'_> {}
