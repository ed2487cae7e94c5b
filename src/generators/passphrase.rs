use rand::Rng;
use rand_core::{CryptoRng, RngCore};

use super::{GeneratorError, Result, WordSource, DIGITS, MAX_WORD_COUNT, MIN_WORD_COUNT, SPECIAL_CHARS};
use crate::models::PassphraseOptions;

/// Join `word_count` drawn words with the separator, then append the optional
/// digit and special-character suffix (in that order).
pub fn generate_passphrase<W, R>(options: &PassphraseOptions, words: &mut W, rng: &mut R) -> Result<String>
where
    W: WordSource + ?Sized,
    R: RngCore + CryptoRng,
{
    if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&options.word_count) {
        return Err(GeneratorError::WordCountOutOfRange {
            count: options.word_count,
            min: MIN_WORD_COUNT,
            max: MAX_WORD_COUNT,
        });
    }
    if words.is_empty() {
        return Err(GeneratorError::EmptyWordList);
    }

    let picked = (0..options.word_count)
        .map(|_| words.draw_word(&mut *rng))
        .collect::<Result<Vec<_>>>()?;
    let mut passphrase = picked.join(&options.separator);

    if options.include_numbers {
        passphrase.push(pick(DIGITS, rng));
    }
    if options.include_special_chars {
        passphrase.push(pick(SPECIAL_CHARS, rng));
    }

    log::debug!(
        "Generated passphrase of {} words ({:.1} bits from words)",
        options.word_count,
        words.entropy_bits_per_word() * options.word_count as f64
    );

    Ok(passphrase)
}

fn pick<R: RngCore>(set: &str, rng: &mut R) -> char {
    let bytes = set.as_bytes();
    char::from(bytes[rng.gen_range(0..bytes.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::Wordlist;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    fn words() -> Wordlist {
        Wordlist::from_words(
            ["apple", "river", "castle", "piano", "tiger", "ocean"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
        )
        .unwrap()
    }

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(42)
    }

    fn options(word_count: usize, separator: &str) -> PassphraseOptions {
        PassphraseOptions {
            word_count,
            separator: separator.to_string(),
            include_numbers: false,
            include_special_chars: false,
        }
    }

    #[test]
    fn words_are_joined_with_the_exact_separator() {
        let mut list = words();
        let mut rng = rng();
        for separator in ["-", " ", "::", "🦀"] {
            let phrase = generate_passphrase(&options(5, separator), &mut list, &mut rng).unwrap();
            let parts: Vec<&str> = phrase.split(separator).collect();
            assert_eq!(parts.len(), 5, "{phrase}");
            assert!(parts.iter().all(|p| list.words().iter().any(|w| w == p)));
        }
    }

    #[test]
    fn empty_separator_concatenates_words() {
        let mut list = words();
        let phrase = generate_passphrase(&options(3, ""), &mut list, &mut rng()).unwrap();
        assert!(phrase.chars().all(|c| c.is_ascii_lowercase()));
        assert!(phrase.len() >= 3 * 5);
    }

    #[test]
    fn number_and_special_suffixes_follow_the_words() {
        let mut list = words();
        let opts = PassphraseOptions {
            include_numbers: true,
            include_special_chars: true,
            ..options(4, "-")
        };
        let mut rng = rng();
        for _ in 0..20 {
            let phrase = generate_passphrase(&opts, &mut list, &mut rng).unwrap();
            let mut tail = phrase.chars().rev();
            let special = tail.next().unwrap();
            let digit = tail.next().unwrap();
            assert!(SPECIAL_CHARS.contains(special));
            assert!(digit.is_ascii_digit());

            let body = &phrase[..phrase.len() - 2];
            assert_eq!(body.split('-').count(), 4);
        }
    }

    #[test]
    fn only_number_suffix() {
        let mut list = words();
        let opts = PassphraseOptions { include_numbers: true, ..options(3, " ") };
        let phrase = generate_passphrase(&opts, &mut list, &mut rng()).unwrap();
        assert!(phrase.ends_with(|c: char| c.is_ascii_digit()));
        let body = &phrase[..phrase.len() - 1];
        assert_eq!(body.split(' ').count(), 3);
    }

    #[test]
    fn word_count_bounds_are_enforced() {
        let mut list = words();
        let mut rng = rng();
        for count in [MIN_WORD_COUNT, MAX_WORD_COUNT] {
            assert!(generate_passphrase(&options(count, "-"), &mut list, &mut rng).is_ok());
        }
        for count in [0, MIN_WORD_COUNT - 1, MAX_WORD_COUNT + 1] {
            assert!(matches!(
                generate_passphrase(&options(count, "-"), &mut list, &mut rng),
                Err(GeneratorError::WordCountOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn works_through_a_trait_object() {
        let mut source: Box<dyn WordSource + Send> = Box::new(words());
        let phrase = generate_passphrase(&options(6, "."), source.as_mut(), &mut rng()).unwrap();
        assert_eq!(phrase.split('.').count(), 6);
    }
}
