// Suffix and prefix rules of the Labadain stemmer.
//
// Every rule returns the word untouched when none of its conditions hold,
// and borrows from the input whenever it only needs to cut it.
use std::borrow::Cow;

use super::affixes::ByLength;
use super::regions::Regions;

static AMENTE_AFTER_IV: [&str; 1] = ["at"];
static AMENTE_PRECEDING: [&str; 3] = ["oz", "ik", "ad"];
static MENTE_PRECEDING: [&str; 3] = ["ante", "avel", "ivel"];
static IDADES_PRECEDING: [&str; 3] = ["abil", "is", "iv"];

#[inline]
fn char_len(string: &str) -> usize {
    string.chars().count()
}

// Cuts the first of `preceding` ending `stem` whose start lies in R2.
fn strip_preceding<'a>(stem: &'a str, preceding: &[&str], r2: usize) -> Option<&'a str> {
    preceding.iter().find_map(|p| {
        let rest = stem.strip_suffix(p)?;

        if char_len(rest) >= r2 {
            Some(rest)
        } else {
            None
        }
    })
}

fn remove_longest_from<'a>(word: &'a str, suffixes: &ByLength, region: usize) -> Cow<'a, str> {
    for suffix in suffixes.iter() {
        if let Some(stem) = word.strip_suffix(suffix) {
            if char_len(stem) >= region {
                return Cow::Borrowed(stem);
            }
        }
    }

    Cow::Borrowed(word)
}

/// Removes the longest suffix of the table starting in R2.
pub fn standard_suffix_removal<'a>(
    word: &'a str,
    regions: &Regions,
    suffixes: &ByLength,
) -> Cow<'a, str> {
    remove_longest_from(word, suffixes, regions.r2)
}

/// Replaces a suffix starting in R2 with a fixed string.
pub fn simple_replace_suffixes<'a>(
    word: &'a str,
    regions: &Regions,
    suffixes: &[&str],
    replacement: &str,
) -> Cow<'a, str> {
    for suffix in suffixes {
        if let Some(stem) = word.strip_suffix(suffix) {
            if char_len(stem) >= regions.r2 {
                let mut replaced = String::with_capacity(stem.len() + replacement.len());
                replaced.push_str(stem);
                replaced.push_str(replacement);

                return Cow::Owned(replaced);
            }
        }
    }

    Cow::Borrowed(word)
}

/// Deletes "amente" in R1, together with a preceding "iv" (and "at" before
/// it when in R2), or a preceding "oz", "ik" or "ad" in R2.
pub fn process_amente_suffix<'a>(word: &'a str, regions: &Regions, suffix: &str) -> Cow<'a, str> {
    let stem = match word.strip_suffix(suffix) {
        Some(stem) if char_len(stem) >= regions.r1 => stem,
        _ => return Cow::Borrowed(word),
    };

    // NOTE: "iv" goes even when it lies before R2, only "at" is guarded
    if let Some(before_iv) = stem.strip_suffix("iv") {
        if char_len(before_iv) >= regions.r2 {
            if let Some(before_at) = strip_preceding(before_iv, &AMENTE_AFTER_IV, regions.r2) {
                return Cow::Borrowed(before_at);
            }
        }

        return Cow::Borrowed(before_iv);
    }

    Cow::Borrowed(strip_preceding(stem, &AMENTE_PRECEDING, regions.r2).unwrap_or(stem))
}

/// Deletes "mente" in R2, together with a preceding "ante", "avel" or
/// "ivel" in R2.
pub fn process_mente_suffix<'a>(word: &'a str, regions: &Regions, suffix: &str) -> Cow<'a, str> {
    match word.strip_suffix(suffix) {
        Some(stem) if char_len(stem) >= regions.r2 => Cow::Borrowed(
            strip_preceding(stem, &MENTE_PRECEDING, regions.r2).unwrap_or(stem),
        ),
        _ => Cow::Borrowed(word),
    }
}

pub fn process_idades_suffixes<'a>(
    word: &'a str,
    regions: &Regions,
    suffixes: &[&str],
) -> Cow<'a, str> {
    for suffix in suffixes {
        if let Some(stem) = word.strip_suffix(suffix) {
            if char_len(stem) >= regions.r2 {
                return Cow::Borrowed(
                    strip_preceding(stem, &IDADES_PRECEDING, regions.r2).unwrap_or(stem),
                );
            }
        }
    }

    Cow::Borrowed(word)
}

/// Deletes an "ivu" family suffix in R2. The last "at" found before it is
/// deleted as well when it starts in R2, adjacent or not.
pub fn process_ivos_suffixes<'a>(
    word: &'a str,
    regions: &Regions,
    suffixes: &[&str],
) -> Cow<'a, str> {
    for suffix in suffixes {
        if let Some(stem) = word.strip_suffix(suffix) {
            if char_len(stem) >= regions.r2 {
                return match stem.rfind("at") {
                    Some(i) if char_len(&stem[..i]) >= regions.r2 => Cow::Borrowed(&stem[..i]),
                    _ => Cow::Borrowed(stem),
                };
            }
        }
    }

    Cow::Borrowed(word)
}

/// Deletes a residual vowel ending in RV, in declared order.
pub fn residual_suffixes_removal<'a>(
    word: &'a str,
    regions: &Regions,
    suffixes: &[&str],
) -> Cow<'a, str> {
    for suffix in suffixes {
        if let Some(stem) = word.strip_suffix(suffix) {
            if char_len(stem) >= regions.rv {
                return Cow::Borrowed(stem);
            }
        }
    }

    Cow::Borrowed(word)
}

/// Removes the longest verb suffix of the table starting in RV.
pub fn verb_suffix_removal<'a>(
    word: &'a str,
    regions: &Regions,
    suffixes: &ByLength,
) -> Cow<'a, str> {
    remove_longest_from(word, suffixes, regions.rv)
}

/// Removes the longest native suffix leaving a root of more than two
/// characters.
pub fn tetun_suffix_removal<'a>(word: &'a str, suffixes: &ByLength) -> Cow<'a, str> {
    suffixes
        .iter()
        .filter_map(|suffix| word.strip_suffix(suffix))
        .find(|root| char_len(root) > 2)
        .map_or(Cow::Borrowed(word), Cow::Borrowed)
}

/// Removes the longest native prefix leaving a root of more than two
/// characters.
pub fn tetun_prefix_removal<'a>(word: &'a str, prefixes: &ByLength) -> Cow<'a, str> {
    prefixes
        .iter()
        .filter_map(|prefix| word.strip_prefix(prefix))
        .find(|root| char_len(root) > 2)
        .map_or(Cow::Borrowed(word), Cow::Borrowed)
}
