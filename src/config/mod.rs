//! Configuration module for linkshield
//!
//! Handles loading and managing configuration from TOML files.

pub mod settings;

pub use settings::Settings;
