// Labadain stemmer for Tetun, covering native words and Portuguese loanwords.
//
// Reference:
// Gabriel de Jesus (2024), Labadain Stemmer, adapting the Snowball R1, R2 and
// RV regions to the Tetun vowel inventory.
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use enumset::EnumSet;
use tracing::{debug, trace};

use crate::error::{Result, StemmerError};
use crate::words::WordTokens;

pub mod affixes;
mod pipeline;
mod regions;
pub mod rules;

pub use pipeline::{Pipeline, Rule};
pub use regions::{find_r1_r2, find_rv, is_vowel, Regions};

// Words up to this many characters are never stemmed
static SHORT_WORD_LENGTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Light,
    Moderate,
    Heavy,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
        }
    }

    /// Rule categories this mode is able to apply.
    pub fn rules(self) -> EnumSet<Rule> {
        Pipeline::for_mode(self).rules()
    }
}

impl FromStr for Mode {
    type Err = StemmerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "heavy" => Ok(Self::Heavy),
            _ => Err(StemmerError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stems text expected to be already lowercased, see [`crate::preprocess`].
#[derive(Debug, Clone)]
pub struct LabadainStemmer {
    mode: Mode,
    pipeline: Pipeline,
}

impl Default for LabadainStemmer {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl LabadainStemmer {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            pipeline: Pipeline::for_mode(mode),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn stem_word<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if word.chars().count() <= SHORT_WORD_LENGTH {
            return Cow::Borrowed(word);
        }

        let word = word.trim();

        match self.pipeline.apply(word) {
            Some((rule, stemmed)) => {
                if stemmed != word {
                    trace!(word, stem = %stemmed, ?rule, "stemmed");
                }

                stemmed
            }
            None => Cow::Borrowed(word),
        }
    }

    pub fn stem_tokens<'a, I>(&self, tokens: I) -> Vec<Cow<'a, str>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .map(|token| self.stem_word(token))
            .collect()
    }

    pub fn stem(&self, text: &str) -> String {
        let stemmed = self.stem_tokens(WordTokens::from(text).map(|token| token.text));

        debug!(mode = %self.mode, tokens = stemmed.len(), "stemmed text");

        stemmed.join(" ")
    }
}

/// Stems `text` with the pipeline named by `mode`.
pub fn stem(text: &str, mode: &str) -> Result<String> {
    let mode = mode.parse::<Mode>()?;

    Ok(LabadainStemmer::new(mode).stem(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    static MODES: [Mode; 3] = [Mode::Light, Mode::Moderate, Mode::Heavy];

    #[test]
    fn test_mode_from_str() {
        for mode in MODES {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }

        assert!(matches!(
            "Heavy".parse::<Mode>(),
            Err(StemmerError::InvalidMode(m)) if m == "Heavy"
        ));
        assert_eq!(Mode::default(), Mode::Light);
    }

    #[test]
    fn test_mode_rules() {
        assert!(Mode::Light.rules().is_subset(Mode::Moderate.rules()));
        assert!(Mode::Moderate.rules().is_subset(Mode::Heavy.rules()));
        assert!(!Mode::Light.rules().contains(Rule::TetunSuffix));
        assert!(Mode::Heavy.rules().contains(Rule::TetunPrefix));
    }

    #[test]
    fn test_short_words_are_kept() {
        let words = ["", "o", "ba", "ban", "hau", "óra", "ha'", "nak", "ida"];

        for mode in MODES {
            let stemmer = LabadainStemmer::new(mode);

            for word in words {
                assert_eq!(stemmer.stem_word(word), word);
            }
        }
    }

    #[test]
    fn test_stem() {
        let tests = [
            ("light", "o estudante hakerek livru", "o estud hakerek livr"),
            ("moderate", "hakerek-na'in hakerek livru", "hakerek hakerek livr"),
            ("heavy", "nakdoko, hamos! 2024", "doko mos 2024"),
            ("light", "", ""),
        ];

        for (mode, text, expected) in tests {
            assert_eq!(stem(text, mode).unwrap(), expected);
        }
    }

    #[test]
    fn test_stem_invalid_mode() {
        assert!(matches!(
            stem("estudante", "aggressive"),
            Err(StemmerError::InvalidMode(_))
        ));
    }

    #[test]
    fn test_stemmer_is_reusable() {
        let stemmer = LabadainStemmer::new(Mode::Heavy);

        let first = stemmer.stem("estudante hamos");
        let second = stemmer.stem("estudante hamos");

        assert_eq!(first, "estud mos");
        assert_eq!(first, second);
    }

    #[test]
    fn test_stem_tokens() {
        let stemmer = LabadainStemmer::default();

        assert_eq!(
            stemmer.stem_tokens(["universidade", "ida", "organizada"]),
            vec!["univers", "ida", "organiz"]
        );
    }
}
