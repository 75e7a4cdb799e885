//! Application configuration

mod app_config;
mod microservice;

pub use app_config::{AppConfig, LogFormat, LoggingConfig};
pub use microservice::{MicroserviceConfig, MicroserviceConfigs};
