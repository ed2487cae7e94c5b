// src/generators/mod.rs
use rand_chacha::ChaCha20Rng;
use rand_core::{OsRng, SeedableRng};
use thiserror::Error;

use crate::models::{PassphraseOptions, PasswordGenerationOptions};

pub mod passphrase;
pub mod password;
pub mod wordlist;

pub use passphrase::generate_passphrase;
pub use password::generate_password;
pub use wordlist::{EffLargeWordlist, WordSource, Wordlist};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL_CHARS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const MIN_WORD_COUNT: usize = 3;
pub const MAX_WORD_COUNT: usize = 10;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("no character types selected")]
    NoCharsetSelected,

    #[error("custom text too long: {custom} characters leave no room in a {length}-character password")]
    CustomTextTooLong { custom: usize, length: usize },

    #[error("password length {length} is outside {min}..={max}")]
    LengthOutOfRange { length: usize, min: usize, max: usize },

    #[error("word count {count} is outside {min}..={max}")]
    WordCountOutOfRange { count: usize, min: usize, max: usize },

    #[error("word list contains no words")]
    EmptyWordList,

    #[error("word list line {line}: {reason}")]
    WordListParse { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("random source unavailable: {0}")]
    Randomness(#[from] rand_core::Error),
}

impl GeneratorError {
    /// True for errors caused by the caller's options rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GeneratorError::NoCharsetSelected
                | GeneratorError::CustomTextTooLong { .. }
                | GeneratorError::LengthOutOfRange { .. }
                | GeneratorError::WordCountOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// ChaCha20 seeded from the operating system.
pub fn secure_rng() -> Result<ChaCha20Rng> {
    Ok(ChaCha20Rng::from_rng(OsRng)?)
}

/// Owns the random source used by both generation modes.
pub struct PasswordGenerator {
    rng: ChaCha20Rng,
}

impl PasswordGenerator {
    pub fn new() -> Result<Self> {
        Ok(Self::from_rng(secure_rng()?))
    }

    pub fn from_rng(rng: ChaCha20Rng) -> Self {
        PasswordGenerator { rng }
    }

    pub fn generate_password(&mut self, options: &PasswordGenerationOptions) -> Result<String> {
        generate_password(options, &mut self.rng)
    }

    pub fn generate_passphrase<W>(&mut self, options: &PassphraseOptions, words: &mut W) -> Result<String>
    where
        W: WordSource + ?Sized,
    {
        generate_passphrase(options, words, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_flagged() {
        assert!(GeneratorError::NoCharsetSelected.is_validation());
        assert!(GeneratorError::CustomTextTooLong { custom: 4, length: 4 }.is_validation());
        assert!(!GeneratorError::EmptyWordList.is_validation());
    }

    #[test]
    fn error_messages_name_the_problem() {
        assert_eq!(GeneratorError::NoCharsetSelected.to_string(), "no character types selected");
        assert!(GeneratorError::CustomTextTooLong { custom: 9, length: 8 }
            .to_string()
            .starts_with("custom text too long"));
    }

    #[test]
    fn generator_from_os_entropy_produces_passwords() {
        let mut generator = PasswordGenerator::new().unwrap();
        let password = generator
            .generate_password(&PasswordGenerationOptions::default())
            .unwrap();
        assert_eq!(password.chars().count(), 16);
    }

    #[test]
    fn seeded_generators_are_reproducible() {
        let options = PasswordGenerationOptions::default();
        let mut a = PasswordGenerator::from_rng(ChaCha20Rng::seed_from_u64(7));
        let mut b = PasswordGenerator::from_rng(ChaCha20Rng::seed_from_u64(7));
        assert_eq!(
            a.generate_password(&options).unwrap(),
            b.generate_password(&options).unwrap()
        );
    }
}
