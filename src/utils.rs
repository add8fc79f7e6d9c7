use std::borrow::Cow;

// Affix tables spell apostrophes with the ASCII character
static CANONICAL_APOSTROPHE: char = '\'';
static TYPOGRAPHIC_APOSTROPHE: char = '’';

pub fn normalize_apostrophes(string: &str) -> Cow<str> {
    if !string.contains(TYPOGRAPHIC_APOSTROPHE) {
        return Cow::Borrowed(string);
    }

    Cow::Owned(string.replace(TYPOGRAPHIC_APOSTROPHE, &CANONICAL_APOSTROPHE.to_string()))
}

pub fn lowercase(string: &str) -> Cow<str> {
    if string.chars().any(char::is_uppercase) {
        Cow::Owned(string.to_lowercase())
    } else {
        Cow::Borrowed(string)
    }
}

/// Lowercases the text and normalizes its apostrophes, which is what the
/// stemmer expects as input.
pub fn preprocess(text: &str) -> String {
    normalize_apostrophes(&lowercase(text)).into_owned()
}
