use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_core::{CryptoRng, RngCore};

use super::{
    GeneratorError, Result, DIGITS, LOWERCASE, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
    SPECIAL_CHARS, UPPERCASE,
};
use crate::models::PasswordGenerationOptions;

/// Concatenates the enabled classes in class order, then strips excluded characters.
///
/// Exclusions are literal characters; `.` or `[` remove only themselves.
pub fn build_charset(options: &PasswordGenerationOptions) -> Vec<char> {
    let mut chars = Vec::new();

    if options.include_uppercase {
        chars.extend(UPPERCASE.chars());
    }
    if options.include_lowercase {
        chars.extend(LOWERCASE.chars());
    }
    if options.include_numbers {
        chars.extend(DIGITS.chars());
    }
    if options.include_special_chars {
        chars.extend(SPECIAL_CHARS.chars());
    }

    if !options.exclude_chars.is_empty() {
        chars.retain(|c| !options.exclude_chars.contains(*c));
    }

    chars
}

/// Generate a password of exactly `options.length` characters.
///
/// The custom text, if any, is spliced into the random characters as one block
/// at a uniformly chosen position, so it may also land at either end.
pub fn generate_password<R>(options: &PasswordGenerationOptions, rng: &mut R) -> Result<String>
where
    R: RngCore + CryptoRng,
{
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&options.length) {
        return Err(GeneratorError::LengthOutOfRange {
            length: options.length,
            min: MIN_PASSWORD_LENGTH,
            max: MAX_PASSWORD_LENGTH,
        });
    }

    let chars = build_charset(options);
    if chars.is_empty() {
        return Err(GeneratorError::NoCharsetSelected);
    }

    let custom_len = options.custom_text.chars().count();
    if custom_len >= options.length {
        return Err(GeneratorError::CustomTextTooLong {
            custom: custom_len,
            length: options.length,
        });
    }

    let random_len = options.length - custom_len;
    let dist = Uniform::from(0..chars.len());
    let mut password: Vec<char> = (0..random_len)
        .map(|_| chars[dist.sample(&mut *rng)])
        .collect();

    if custom_len > 0 {
        let index = rng.gen_range(0..=random_len);
        password.splice(index..index, options.custom_text.chars());
    }

    log::debug!(
        "Generated password of {} characters from a {}-character set",
        options.length,
        chars.len()
    );

    Ok(password.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(0x5eed)
    }

    fn only(upper: bool, lower: bool, numbers: bool, special: bool) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: 16,
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_special_chars: special,
            custom_text: String::new(),
            exclude_chars: String::new(),
        }
    }

    #[test]
    fn charset_keeps_class_order_and_duplicates() {
        let options = PasswordGenerationOptions::default();
        let charset: String = build_charset(&options).into_iter().collect();
        assert_eq!(charset, format!("{UPPERCASE}{LOWERCASE}{DIGITS}{SPECIAL_CHARS}"));

        let letters: String = build_charset(&only(false, true, true, false)).into_iter().collect();
        assert_eq!(letters, "abcdefghijklmnopqrstuvwxyz0123456789");
    }

    #[test]
    fn alphanumeric_password_has_exact_length_and_alphabet() {
        let options = PasswordGenerationOptions {
            length: 12,
            ..only(true, true, true, false)
        };
        let mut rng = rng();
        for _ in 0..50 {
            let password = generate_password(&options, &mut rng).unwrap();
            assert_eq!(password.chars().count(), 12);
            assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn custom_text_is_contiguous() {
        let options = PasswordGenerationOptions {
            length: 8,
            custom_text: "cat".to_string(),
            ..PasswordGenerationOptions::default()
        };
        let mut rng = rng();
        for _ in 0..100 {
            let password = generate_password(&options, &mut rng).unwrap();
            assert_eq!(password.chars().count(), 8);
            assert!(password.contains("cat"), "{password} lacks custom text");
        }
    }

    #[test]
    fn custom_text_can_land_at_both_ends() {
        let options = PasswordGenerationOptions {
            length: 5,
            custom_text: "XYZW".to_string(),
            ..only(false, true, false, false)
        };
        let mut rng = rng();
        let mut starts = false;
        let mut ends = false;
        for _ in 0..200 {
            let password = generate_password(&options, &mut rng).unwrap();
            starts |= password.starts_with("XYZW");
            ends |= password.ends_with("XYZW");
        }
        assert!(starts && ends);
    }

    #[test]
    fn multibyte_custom_text_counts_characters() {
        let options = PasswordGenerationOptions {
            length: 6,
            custom_text: "ñé".to_string(),
            ..PasswordGenerationOptions::default()
        };
        let password = generate_password(&options, &mut rng()).unwrap();
        assert_eq!(password.chars().count(), 6);
        assert!(password.contains("ñé"));
    }

    #[test]
    fn excluded_characters_never_appear() {
        let options = PasswordGenerationOptions {
            length: 128,
            exclude_chars: "oO0".to_string(),
            ..only(true, true, true, false)
        };
        let mut rng = rng();
        for _ in 0..20 {
            let password = generate_password(&options, &mut rng).unwrap();
            assert!(!password.contains(['o', 'O', '0']));
        }
    }

    #[test]
    fn regex_metacharacters_are_excluded_literally() {
        let options = PasswordGenerationOptions {
            exclude_chars: ".*[]".to_string(),
            ..only(false, false, false, true)
        };
        let charset = build_charset(&options);
        assert_eq!(charset.len(), SPECIAL_CHARS.len() - 4);
        assert!(!charset.iter().any(|c| ".*[]".contains(*c)));
        assert!(charset.contains(&'{'));
    }

    #[test]
    fn disabled_classes_stay_out_of_random_part() {
        let options = PasswordGenerationOptions {
            length: 64,
            custom_text: "AB12".to_string(),
            ..only(false, true, false, false)
        };
        let mut rng = rng();
        for _ in 0..20 {
            let password = generate_password(&options, &mut rng).unwrap();
            let random_part = password.replacen("AB12", "", 1);
            assert_eq!(random_part.chars().count(), 60);
            assert!(random_part.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn no_classes_selected_is_rejected() {
        let err = generate_password(&only(false, false, false, false), &mut rng()).unwrap_err();
        assert!(matches!(err, GeneratorError::NoCharsetSelected));
    }

    #[test]
    fn excluding_every_digit_empties_the_set() {
        let options = PasswordGenerationOptions {
            exclude_chars: DIGITS.to_string(),
            ..only(false, false, true, false)
        };
        let err = generate_password(&options, &mut rng()).unwrap_err();
        assert!(matches!(err, GeneratorError::NoCharsetSelected));
    }

    #[test]
    fn custom_text_filling_the_length_is_rejected() {
        for custom in ["abcd", "abcde"] {
            let options = PasswordGenerationOptions {
                length: 4,
                custom_text: custom.to_string(),
                ..PasswordGenerationOptions::default()
            };
            let err = generate_password(&options, &mut rng()).unwrap_err();
            assert!(matches!(err, GeneratorError::CustomTextTooLong { length: 4, .. }));
        }
    }

    #[test]
    fn empty_charset_is_reported_before_custom_text() {
        let options = PasswordGenerationOptions {
            length: 4,
            custom_text: "toolong".to_string(),
            ..only(false, false, false, false)
        };
        let err = generate_password(&options, &mut rng()).unwrap_err();
        assert!(matches!(err, GeneratorError::NoCharsetSelected));
    }

    #[test]
    fn length_bounds_are_enforced() {
        let mut rng = rng();
        for length in [MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH] {
            let options = PasswordGenerationOptions { length, ..PasswordGenerationOptions::default() };
            assert_eq!(generate_password(&options, &mut rng).unwrap().chars().count(), length);
        }
        for length in [0, MIN_PASSWORD_LENGTH - 1, MAX_PASSWORD_LENGTH + 1] {
            let options = PasswordGenerationOptions { length, ..PasswordGenerationOptions::default() };
            assert!(matches!(
                generate_password(&options, &mut rng),
                Err(GeneratorError::LengthOutOfRange { .. })
            ));
        }
    }
}
