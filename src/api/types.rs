// src/api/types.rs
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::core::config::Config;
use crate::models::{
    GenerationMode, GenerationRecord, PassphraseOptions, PasswordGenerationOptions, StrengthReport,
};

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct PasswordGenerationRequest {
    /// Password length, 4-128 (default: configured length, 16)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include numbers (default: true)
    pub include_numbers: Option<bool>,
    /// Include special characters (default: true)
    pub include_special_chars: Option<bool>,
    /// Text inserted unchanged at a random position (default: none)
    pub custom_text: Option<String>,
    /// Characters removed from the character set (default: none)
    pub exclude_chars: Option<String>,
}

impl PasswordGenerationRequest {
    // Create options with defaults or provided values
    pub fn into_options(self, config: &Config) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.length.unwrap_or(config.default_password_length),
            include_uppercase: self.include_uppercase.unwrap_or(true),
            include_lowercase: self.include_lowercase.unwrap_or(true),
            include_numbers: self.include_numbers.unwrap_or(true),
            include_special_chars: self.include_special_chars.unwrap_or(true),
            custom_text: self.custom_text.unwrap_or_default(),
            exclude_chars: self.exclude_chars.unwrap_or_default(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct PassphraseGenerationRequest {
    /// Number of words, 3-10 (default: configured count, 6)
    pub word_count: Option<usize>,
    /// Separator between words (default: configured separator, "-")
    pub separator: Option<String>,
    /// Append a random digit (default: false)
    pub include_numbers: Option<bool>,
    /// Append a random special character (default: false)
    pub include_special_chars: Option<bool>,
}

impl PassphraseGenerationRequest {
    pub fn into_options(self, config: &Config) -> PassphraseOptions {
        PassphraseOptions {
            word_count: self.word_count.unwrap_or(config.default_word_count),
            separator: self
                .separator
                .unwrap_or_else(|| config.default_separator.clone()),
            include_numbers: self.include_numbers.unwrap_or(false),
            include_special_chars: self.include_special_chars.unwrap_or(false),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Which generator produced the value
    pub mode: Option<GenerationMode>,
    /// Generated password or passphrase
    pub value: Option<String>,
    /// zxcvbn strength estimate of the value
    pub strength: Option<StrengthReport>,
    /// When the value was generated
    pub generated_at: Option<DateTime<Utc>>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

impl GenerationResponse {
    pub fn from_record(record: &GenerationRecord) -> Self {
        Self {
            success: true,
            mode: Some(record.mode),
            value: Some(record.value.clone()),
            strength: Some(record.strength.clone()),
            generated_at: Some(record.generated_at),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            mode: None,
            value: None,
            strength: None,
            generated_at: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// zxcvbn strength estimate
    pub strength: StrengthReport,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SystemStatusResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Crate version
    pub version: String,
    /// Words available for passphrases
    pub wordlist_size: usize,
    /// Entropy contributed by each passphrase word
    pub bits_per_word: f64,
    /// Whether a value has been generated in this session
    pub has_current: bool,
    /// Error message (if operation failed)
    pub error: Option<String>,
}
