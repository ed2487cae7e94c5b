// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::generators::{MAX_PASSWORD_LENGTH, MAX_WORD_COUNT, MIN_PASSWORD_LENGTH, MIN_WORD_COUNT};

// Configuration for the generator
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,

    // Passphrase Generation
    pub default_word_count: usize,
    pub default_separator: String,
    pub wordlist_path: Option<PathBuf>,

    // Download target for password.txt
    pub output_directory: PathBuf,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,

            // Passphrase Generation
            default_word_count: 6,
            default_separator: "-".to_string(),
            wordlist_path: None,

            output_directory: PathBuf::from("."),

            // Web Interface
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unknown or unparseable values keep the defaults.
    ///
    /// Rejected values are returned as warnings rather than logged, since the
    /// logger is configured from this same config.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) => {
                    config.default_password_length = length;
                }
                _ => warnings.push(format!("Ignoring DEFAULT_PASSWORD_LENGTH='{}'", val)),
            }
        }

        // Passphrase Generation
        if let Some(val) = lookup("DEFAULT_WORD_COUNT") {
            match val.parse::<usize>() {
                Ok(count) if (MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&count) => {
                    config.default_word_count = count;
                }
                _ => warnings.push(format!("Ignoring DEFAULT_WORD_COUNT='{}'", val)),
            }
        }

        if let Some(separator) = lookup("DEFAULT_SEPARATOR") {
            config.default_separator = separator;
        }

        if let Some(path) = lookup("WORDLIST_PATH") {
            if !path.trim().is_empty() {
                config.wordlist_path = Some(PathBuf::from(path));
            }
        }

        if let Some(dir) = lookup("OUTPUT_DIRECTORY") {
            config.output_directory = PathBuf::from(dir);
        }

        // Web Interface
        if let Some(val) = lookup("WEB_PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => warnings.push(format!("Ignoring WEB_PORT='{}'", val)),
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match crate::logging::parse_level(&level) {
                Some(filter) => config.log_level = filter,
                None => warnings.push(format!("Unknown LOG_LEVEL '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = Some(PathBuf::from(file));
        }

        (config, warnings)
    }

    // Create directories needed for operation
    pub fn ensure_directories_exist(&self) {
        if !self.output_directory.exists() {
            if let Err(e) = std::fs::create_dir_all(&self.output_directory) {
                log::warn!("Failed to create output directory: {}", e);
            }
        }

        if let Some(parent) = self.log_file.as_ref().and_then(|f| f.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    log::warn!("Failed to create log directory: {}", e);
                }
            }
        }
    }
}
