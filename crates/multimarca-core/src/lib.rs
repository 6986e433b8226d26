//! Shared configuration and catalog record types for multimarca.

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod error;

pub use app_config::{AppConfig, Environment};
pub use catalog::{
    slug_from_name, CategoryRecord, NewCategory, NewProduct, ProductRecord, ProductUpdate,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
