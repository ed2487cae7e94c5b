// src/strength.rs
use zxcvbn::zxcvbn;

use crate::models::StrengthReport;

pub fn score_label(score: u8) -> &'static str {
    match score {
        0 => "Very weak",
        1 => "Weak",
        2 => "Fair",
        3 => "Strong",
        _ => "Very strong",
    }
}

// Analyze password strength with zxcvbn
pub fn analyze_password_strength(password: &str) -> StrengthReport {
    let entropy = match zxcvbn(password, &[]) {
        Ok(entropy) => entropy,
        Err(e) => {
            // Only a blank password is rejected by zxcvbn
            log::debug!("Strength estimation skipped: {}", e);
            return StrengthReport {
                score: 0,
                label: score_label(0).to_string(),
                guesses_log10: 0.0,
                warning: None,
                suggestions: Vec::new(),
            };
        }
    };

    let (warning, suggestions) = match entropy.feedback() {
        Some(feedback) => (
            feedback.warning().map(|w| w.to_string()),
            feedback.suggestions().iter().map(|s| s.to_string()).collect(),
        ),
        None => (None, Vec::new()),
    };

    let score = entropy.score();
    StrengthReport {
        score,
        label: score_label(score).to_string(),
        guesses_log10: entropy.guesses_log10(),
        warning,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_scores_zero() {
        let report = analyze_password_strength("");
        assert_eq!(report.score, 0);
        assert_eq!(report.label, "Very weak");
        assert!(report.warning.is_none());
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn common_password_is_weak_with_feedback() {
        let report = analyze_password_strength("password");
        assert_eq!(report.score, 0);
        assert!(report.warning.is_some() || !report.suggestions.is_empty());
    }

    #[test]
    fn long_random_password_is_very_strong() {
        let report = analyze_password_strength("q7#Vx!m2Lp$9rT@zW4&k");
        assert_eq!(report.score, 4);
        assert_eq!(report.label, "Very strong");
        assert!(report.guesses_log10 > 10.0);
    }

    #[test]
    fn scores_stay_in_range() {
        for candidate in ["a", "abc123", "correct-horse-battery-staple", "Tr0ub4dor&3"] {
            assert!(analyze_password_strength(candidate).score <= 4);
        }
    }
}
