//! Configuration and file management for dapp-shell
//!
//! This crate provides:
//! - Cache directory lookup
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Raw access to the contact list file

pub mod app_config;
pub mod config_file;
pub mod contacts_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::{find_config_file, ConfigSource};
pub use contacts_file::{read_contacts_json, ContactsFileError};
pub use paths::cache_dir;
