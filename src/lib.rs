pub mod app_config;
mod extensions;
pub mod models;
pub mod payload_loader;
pub mod serialization;
