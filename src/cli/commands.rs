// src/cli/commands.rs
use clap::{Args, Subcommand};

use crate::core::config::Config;
use crate::models::{PassphraseOptions, PasswordGenerationOptions};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a random password
    Password(PasswordArgs),

    /// Generate a passphrase from a word list
    Passphrase(PassphraseArgs),

    /// Estimate the strength of an existing password
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },

    /// Run the HTTP API
    Serve {
        /// API server port
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(long, env = "WEB_ADDRESS")]
        address: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct PasswordArgs {
    /// Password length (4-128)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out special characters
    #[arg(long)]
    pub no_special: bool,

    /// Text to place somewhere in the password, unchanged
    #[arg(long, short, default_value = "")]
    pub custom_text: String,

    /// Characters that must not appear in the random part
    #[arg(long, short, default_value = "")]
    pub exclude: String,
}

impl PasswordArgs {
    pub fn to_options(&self, config: &Config) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.length.unwrap_or(config.default_password_length),
            include_uppercase: !self.no_uppercase,
            include_lowercase: !self.no_lowercase,
            include_numbers: !self.no_numbers,
            include_special_chars: !self.no_special,
            custom_text: self.custom_text.clone(),
            exclude_chars: self.exclude.clone(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct PassphraseArgs {
    /// Number of words (3-10)
    #[arg(long, short)]
    pub words: Option<usize>,

    /// Text placed between words
    #[arg(long, short)]
    pub separator: Option<String>,

    /// Append a random digit
    #[arg(long)]
    pub numbers: bool,

    /// Append a random special character
    #[arg(long)]
    pub special: bool,
}

impl PassphraseArgs {
    pub fn to_options(&self, config: &Config) -> PassphraseOptions {
        PassphraseOptions {
            word_count: self.words.unwrap_or(config.default_word_count),
            separator: self
                .separator
                .clone()
                .unwrap_or_else(|| config.default_separator.clone()),
            include_numbers: self.numbers,
            include_special_chars: self.special,
        }
    }
}
