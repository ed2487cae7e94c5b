//! Word sources for passphrase generation.
//!
//! The built-in source is the 7776-word EFF large list shipped with `chbs`.
//! Other lists can be loaded from text, either in diceware format
//! (`11111<TAB>word`, looked up by rolling dice) or one word per line.

use std::fs;
use std::path::Path;

use chbs::word::BUILTIN_EFF_LARGE;
use rand::Rng;
use rand_core::RngCore;

use super::{GeneratorError, Result};

/// Anything passphrase words can be drawn from.
pub trait WordSource {
    /// Draw one word, uniformly over the source.
    fn draw_word(&mut self, rng: &mut dyn RngCore) -> Result<String>;

    /// Number of distinct words the source can yield.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entropy_bits_per_word(&self) -> f64 {
        (self.len() as f64).log2()
    }
}

/// The EFF large diceware list bundled with `chbs`.
///
/// The bundled text is in dice order without keys, so five rolls of the
/// caller's rng index straight into it.
pub struct EffLargeWordlist {
    words: Vec<&'static str>,
}

impl EffLargeWordlist {
    pub const WORD_COUNT: usize = 7776;
    const DICE: u32 = 5;

    pub fn new() -> Self {
        Self {
            words: BUILTIN_EFF_LARGE
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect(),
        }
    }
}

impl Default for EffLargeWordlist {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSource for EffLargeWordlist {
    fn draw_word(&mut self, rng: &mut dyn RngCore) -> Result<String> {
        let key = roll_dice(Self::DICE, rng);
        self.words
            .get(dice_index(&key))
            .map(|word| word.to_string())
            .ok_or_else(|| GeneratorError::WordListParse {
                line: 0,
                reason: format!(
                    "built-in list has {} words, expected {}",
                    self.words.len(),
                    Self::WORD_COUNT
                ),
            })
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

const MAX_DICE: u32 = 8;

/// A word list loaded from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
    // Number of dice per word for diceware lists; `words` is then ordered by dice key.
    dice: Option<u32>,
}

impl Wordlist {
    /// Plain list; every word is drawn with equal probability.
    pub fn from_words(words: Vec<String>) -> Result<Self> {
        if words.is_empty() {
            return Err(GeneratorError::EmptyWordList);
        }
        Ok(Self { words, dice: None })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let list = Self::parse(&content)?;
        log::info!(
            "Loaded {} words from {} ({})",
            list.len(),
            path.as_ref().display(),
            if list.is_diceware() { "diceware" } else { "plain" }
        );
        Ok(list)
    }

    /// Parse either format; the first non-empty line decides which one.
    pub fn parse(content: &str) -> Result<Self> {
        let mut lines = content
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .peekable();

        let diceware = match lines.peek() {
            Some((_, first)) => split_dice_line(first).is_some(),
            None => return Err(GeneratorError::EmptyWordList),
        };

        if !diceware {
            return Self::from_words(lines.map(|(_, line)| line.to_string()).collect());
        }

        let mut dice = None;
        let mut slots: Vec<Option<String>> = Vec::new();
        for (line_no, line) in lines {
            let (key, word) = split_dice_line(line).ok_or_else(|| GeneratorError::WordListParse {
                line: line_no,
                reason: "expected a dice key followed by a word".to_string(),
            })?;

            let digits = key.len() as u32;
            if digits > MAX_DICE {
                return Err(GeneratorError::WordListParse {
                    line: line_no,
                    reason: format!("dice key {key} is longer than {MAX_DICE} digits"),
                });
            }
            let expected = *dice.get_or_insert_with(|| {
                slots = vec![None; 6usize.pow(digits)];
                digits
            });
            if digits != expected {
                return Err(GeneratorError::WordListParse {
                    line: line_no,
                    reason: format!("dice key {key} has {digits} digits, expected {expected}"),
                });
            }

            let slot = &mut slots[dice_index(key)];
            if slot.is_some() {
                return Err(GeneratorError::WordListParse {
                    line: line_no,
                    reason: format!("duplicate dice key {key}"),
                });
            }
            *slot = Some(word.to_string());
        }

        let total = slots.len();
        let words: Vec<String> = slots.into_iter().flatten().collect();
        if words.len() != total {
            return Err(GeneratorError::WordListParse {
                line: 0,
                reason: format!("diceware list covers {} of {} dice keys", words.len(), total),
            });
        }

        Ok(Self { words, dice })
    }

    pub fn is_diceware(&self) -> bool {
        self.dice.is_some()
    }

    #[cfg(test)]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Word for a diceware key such as `"16655"`.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let dice = self.dice?;
        if key.len() != dice as usize || !key.chars().all(|c| ('1'..='6').contains(&c)) {
            return None;
        }
        self.words.get(dice_index(key)).map(String::as_str)
    }
}

impl WordSource for Wordlist {
    fn draw_word(&mut self, rng: &mut dyn RngCore) -> Result<String> {
        let dice = match self.dice {
            Some(dice) => dice,
            None => return Ok(self.words[rng.gen_range(0..self.words.len())].clone()),
        };
        let key = roll_dice(dice, rng);
        self.lookup(&key)
            .map(str::to_string)
            .ok_or_else(|| GeneratorError::WordListParse {
                line: 0,
                reason: format!("no word for dice key {key}"),
            })
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

fn split_dice_line(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split_whitespace();
    let key = parts.next()?;
    let word = parts.next()?;
    if parts.next().is_some() || !key.chars().all(|c| ('1'..='6').contains(&c)) {
        return None;
    }
    Some((key, word))
}

/// One die roll per key digit, e.g. `"35142"` for five dice.
fn roll_dice(dice: u32, rng: &mut dyn RngCore) -> String {
    (0..dice)
        .map(|_| char::from(b'1' + rng.gen_range(0..6u8)))
        .collect()
}

fn dice_index(key: &str) -> usize {
    key.bytes()
        .fold(0, |acc, b| acc * 6 + usize::from(b - b'1'))
}
