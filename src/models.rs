// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_special_chars: bool,
    /// Inserted verbatim as one contiguous block
    pub custom_text: String,
    /// Every character listed here is removed from the character set
    pub exclude_chars: String,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_special_chars: true,
            custom_text: String::new(),
            exclude_chars: String::new(),
        }
    }
}

// Passphrase generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PassphraseOptions {
    pub word_count: usize,
    pub separator: String,
    /// Append one random digit after the last word
    pub include_numbers: bool,
    /// Append one random special character after the last word (and digit)
    pub include_special_chars: bool,
}

impl Default for PassphraseOptions {
    fn default() -> Self {
        Self {
            word_count: 6,
            separator: "-".to_string(),
            include_numbers: false,
            include_special_chars: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    Password,
    Passphrase,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMode::Password => write!(f, "password"),
            GenerationMode::Passphrase => write!(f, "passphrase"),
        }
    }
}

/// Strength estimate as reported by zxcvbn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StrengthReport {
    /// Discrete score from 0 (too guessable) to 4 (very unguessable)
    pub score: u8,
    pub label: String,
    pub guesses_log10: f64,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

/// The result of the latest successful generation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationRecord {
    pub mode: GenerationMode,
    pub value: String,
    pub strength: StrengthReport,
    pub generated_at: DateTime<Utc>,
}
