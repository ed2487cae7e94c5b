// src/cli/handlers.rs
use std::error::Error;
use std::fmt::Write as _;
use std::path::Path;

use crate::cli::commands::{PassphraseArgs, PasswordArgs};
use crate::core::config::Config;
use crate::core::session::GeneratorSession;
use crate::models::{GenerationRecord, StrengthReport};
use crate::strength;

// Handlers for CLI commands; each returns the text to print
pub fn handle_password(
    session: &mut GeneratorSession,
    config: &Config,
    args: &PasswordArgs,
    json: bool,
    output: Option<&Path>,
) -> Result<String, Box<dyn Error>> {
    let options = args.to_options(config);
    session.generate_password(&options)?;
    finish(session, json, output)
}

pub fn handle_passphrase(
    session: &mut GeneratorSession,
    config: &Config,
    args: &PassphraseArgs,
    json: bool,
    output: Option<&Path>,
) -> Result<String, Box<dyn Error>> {
    let options = args.to_options(config);
    session.generate_passphrase(&options)?;
    finish(session, json, output)
}

pub fn handle_analyze(password: &str, json: bool) -> Result<String, Box<dyn Error>> {
    let report = strength::analyze_password_strength(password);
    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(render_strength(&report))
}

fn finish(session: &GeneratorSession, json: bool, output: Option<&Path>) -> Result<String, Box<dyn Error>> {
    let saved = match output {
        Some(dir) => Some(session.download(dir)?),
        None => None,
    };

    let record = session.current().ok_or("no generated value")?;
    if json {
        return Ok(serde_json::to_string_pretty(record)?);
    }

    let mut text = render_record(record);
    if let Some(path) = saved {
        let _ = write!(text, "\nSaved to {}", path.display());
    }
    Ok(text)
}

pub fn render_record(record: &GenerationRecord) -> String {
    format!("{}\n{}", record.value, render_strength(&record.strength))
}

pub fn render_strength(report: &StrengthReport) -> String {
    let mut text = format!("Strength: {}/4 ({})", report.score, report.label);
    if let Some(warning) = &report.warning {
        let _ = write!(text, "\nWarning: {}", warning);
    }
    for suggestion in &report.suggestions {
        let _ = write!(text, "\nSuggestion: {}", suggestion);
    }
    text
}
