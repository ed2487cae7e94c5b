// src/core/session.rs
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use crate::core::config::Config;
use crate::generators::{EffLargeWordlist, GeneratorError, PasswordGenerator, WordSource, Wordlist};
use crate::models::{GenerationMode, GenerationRecord, PassphraseOptions, PasswordGenerationOptions};
use crate::strength;

pub const DOWNLOAD_FILE_NAME: &str = "password.txt";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("nothing has been generated yet")]
    NothingGenerated,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Holds the word source and the latest result; each generation replaces it.
pub struct GeneratorSession {
    generator: PasswordGenerator,
    words: Box<dyn WordSource + Send>,
    current: Option<GenerationRecord>,
}

impl GeneratorSession {
    pub fn new(generator: PasswordGenerator, words: Box<dyn WordSource + Send>) -> Self {
        Self {
            generator,
            words,
            current: None,
        }
    }

    /// Word list from `WORDLIST_PATH` when configured, the built-in EFF list otherwise.
    pub fn from_config(config: &Config) -> Result<Self> {
        let words: Box<dyn WordSource + Send> = match &config.wordlist_path {
            Some(path) => Box::new(Wordlist::load(path)?),
            None => Box::new(EffLargeWordlist::new()),
        };
        Ok(Self::new(PasswordGenerator::new()?, words))
    }

    pub fn generate_password(&mut self, options: &PasswordGenerationOptions) -> Result<&GenerationRecord> {
        let value = self.generator.generate_password(options)?;
        Ok(self.record(GenerationMode::Password, value))
    }

    pub fn generate_passphrase(&mut self, options: &PassphraseOptions) -> Result<&GenerationRecord> {
        let value = self.generator.generate_passphrase(options, self.words.as_mut())?;
        Ok(self.record(GenerationMode::Passphrase, value))
    }

    fn record(&mut self, mode: GenerationMode, value: String) -> &GenerationRecord {
        let strength = strength::analyze_password_strength(&value);
        log::info!(
            "Generated {} ({} characters, strength {}/4)",
            mode,
            value.chars().count(),
            strength.score
        );
        self.current.insert(GenerationRecord {
            mode,
            value,
            strength,
            generated_at: Utc::now(),
        })
    }

    pub fn current(&self) -> Option<&GenerationRecord> {
        self.current.as_ref()
    }

    pub fn word_source(&self) -> &dyn WordSource {
        self.words.as_ref()
    }

    /// Write the current value to `<dir>/password.txt`, replacing any previous file.
    pub fn download(&self, dir: &Path) -> Result<PathBuf> {
        let record = self.current.as_ref().ok_or(SessionError::NothingGenerated)?;
        save_to_file(dir, &record.value)
    }
}

pub fn save_to_file(dir: &Path, value: &str) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join(DOWNLOAD_FILE_NAME);
    fs::write(&path, value)?;
    log::info!("Saved generated value to {}", path.display());
    Ok(path)
}
