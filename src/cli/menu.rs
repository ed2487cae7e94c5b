// src/cli/menu.rs
use std::error::Error;
use std::path::Path;

use inquire::{Confirm, CustomType, Password, Select, Text};

use crate::cli::handlers::{render_record, render_strength};
use crate::core::config::Config;
use crate::core::session::GeneratorSession;
use crate::generators::{MAX_PASSWORD_LENGTH, MAX_WORD_COUNT, MIN_PASSWORD_LENGTH, MIN_WORD_COUNT};
use crate::models::{PassphraseOptions, PasswordGenerationOptions};
use crate::strength;

const GENERATE_PASSWORD: &str = "🔐  Generate password";
const GENERATE_PASSPHRASE: &str = "📝  Generate passphrase";
const ANALYZE: &str = "📊  Analyze a password";
const SAVE_CURRENT: &str = "💾  Save last result to password.txt";
const EXIT: &str = "❌  Exit";

pub fn run_cli_menu(session: &mut GeneratorSession, config: &Config) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║          🦀 PASSFORGE                ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        let options = vec![GENERATE_PASSWORD, GENERATE_PASSPHRASE, ANALYZE, SAVE_CURRENT, EXIT];
        let choice = Select::new("What would you like to do?", options).prompt()?;

        match choice {
            GENERATE_PASSWORD => {
                let options = prompt_password_options(config)?;
                match session.generate_password(&options) {
                    Ok(record) => println!("\n{}\n", render_record(record)),
                    Err(e) => println!("❌ {}", e),
                }
            }
            GENERATE_PASSPHRASE => {
                let options = prompt_passphrase_options(config)?;
                match session.generate_passphrase(&options) {
                    Ok(record) => println!("\n{}\n", render_record(record)),
                    Err(e) => println!("❌ {}", e),
                }
            }
            ANALYZE => {
                let password = Password::new("Password to analyze:")
                    .with_display_mode(inquire::PasswordDisplayMode::Masked)
                    .without_confirmation()
                    .prompt()?;
                let report = strength::analyze_password_strength(&password);
                println!("\n{}\n", render_strength(&report));
            }
            SAVE_CURRENT => {
                let dir = Text::new("Directory:")
                    .with_default(&config.output_directory.to_string_lossy())
                    .prompt()?;
                match session.download(Path::new(&dir)) {
                    Ok(path) => println!("✅ Saved to {}", path.display()),
                    Err(e) => println!("❌ {}", e),
                }
            }
            _ => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn prompt_password_options(config: &Config) -> Result<PasswordGenerationOptions, Box<dyn Error>> {
    let length = CustomType::<usize>::new("Password length:")
        .with_default(config.default_password_length)
        .with_help_message(&format!("{}-{}", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH))
        .with_error_message("Please enter a number")
        .prompt()?;

    let include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(true)
        .prompt()?;

    let include_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(true)
        .prompt()?;

    let include_numbers = Confirm::new("Include numbers?")
        .with_default(true)
        .prompt()?;

    let include_special_chars = Confirm::new("Include special characters?")
        .with_default(true)
        .prompt()?;

    let custom_text = Text::new("Custom text (optional):").prompt()?;
    let exclude_chars = Text::new("Characters to exclude (optional):").prompt()?;

    Ok(PasswordGenerationOptions {
        length,
        include_uppercase,
        include_lowercase,
        include_numbers,
        include_special_chars,
        custom_text,
        exclude_chars,
    })
}

fn prompt_passphrase_options(config: &Config) -> Result<PassphraseOptions, Box<dyn Error>> {
    let word_count = CustomType::<usize>::new("Number of words:")
        .with_default(config.default_word_count)
        .with_help_message(&format!("{}-{}", MIN_WORD_COUNT, MAX_WORD_COUNT))
        .with_error_message("Please enter a number")
        .prompt()?;

    let separator = Text::new("Separator:")
        .with_default(&config.default_separator)
        .prompt()?;

    let include_numbers = Confirm::new("Append a number?")
        .with_default(false)
        .prompt()?;

    let include_special_chars = Confirm::new("Append a special character?")
        .with_default(false)
        .prompt()?;

    Ok(PassphraseOptions {
        word_count,
        separator,
        include_numbers,
        include_special_chars,
    })
}
