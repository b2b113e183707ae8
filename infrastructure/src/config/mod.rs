//! Configuration loading and raw file types

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileLoggingConfig, FileProvidersConfig};
pub use loader::ConfigLoader;
