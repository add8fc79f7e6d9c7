// Word tokenizer for Tetun text.
//
// Hyphenated and apostrophized words such as "hakerek-na'in" or "ha'u" are
// kept whole, as are numbers with inner separators such as "1.000,5".
// Everything else is punctuation and gets dropped.
use lazy_static::lazy_static;
use regex::{Matches, Regex};

lazy_static! {
    static ref TOKEN_REGEX: Regex = Regex::new(
        r"(?x)
        \d+(?:[.,]\d+)*
        | [\p{L}\p{M}\d]+(?:['’\-][\p{L}\p{M}\d]+)*
        "
    )
    .unwrap();
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum WordTokenKind {
    Word,
    Number,
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct WordToken<'a> {
    pub kind: WordTokenKind,
    pub text: &'a str,
}

pub struct WordTokens<'a> {
    matches: Matches<'static, 'a>,
}

impl<'a> Iterator for WordTokens<'a> {
    type Item = WordToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.matches.next()?.as_str();

        // Numbers are tried first, so a word never starts with a digit
        let kind = if text.starts_with(|c: char| c.is_ascii_digit()) {
            WordTokenKind::Number
        } else {
            WordTokenKind::Word
        };

        Some(WordToken { kind, text })
    }
}

impl<'a> From<&'a str> for WordTokens<'a> {
    fn from(value: &'a str) -> Self {
        Self {
            matches: TOKEN_REGEX.find_iter(value),
        }
    }
}

pub fn tokenize(text: &str) -> Vec<&str> {
    WordTokens::from(text).map(|token| token.text).collect()
}
