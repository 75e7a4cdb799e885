//! Microservice pool

mod iter;
mod pool;

pub use iter::MicroservicePoolIter;
pub use pool::MicroservicePool;
