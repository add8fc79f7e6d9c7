// Reference:
// http://snowball.tartarus.org/texts/r1r2.html
// http://snowball.tartarus.org/algorithms/spanish/stemmer.html
//
// All offsets are counted in characters, not bytes, so that accented
// vowels such as "á" count as one position.

static TETUN_VOWELS: &str = "aeiouáéíóú";

#[inline]
pub fn is_vowel(c: char) -> bool {
    TETUN_VOWELS.contains(c)
}

/// Region boundaries of a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub r1: usize,
    pub r2: usize,
    pub rv: usize,
}

impl Regions {
    pub fn of(word: &str) -> Self {
        let (r1, r2) = find_r1_r2(word);

        Self {
            r1,
            r2,
            rv: find_rv(word),
        }
    }
}

/// R1 is the region after the first non-vowel following a vowel, R2 is the
/// same search started after R1. Both default to the length of the word.
pub fn find_r1_r2(word: &str) -> (usize, usize) {
    let chars = word.chars().collect::<Vec<_>>();
    let len = chars.len();

    let boundary = |from: usize| {
        (from..len)
            .find(|&i| !is_vowel(chars[i]) && is_vowel(chars[i - 1]))
            .map(|i| i + 1)
            .unwrap_or(len)
    };

    let r1 = boundary(1);
    let r2 = boundary(r1 + 1);

    (r1, r2)
}

pub fn find_rv(word: &str) -> usize {
    let chars = word.chars().collect::<Vec<_>>();
    let len = chars.len();

    if len < 3 {
        return len;
    }

    let after_next = |predicate: fn(char) -> bool| {
        (2..len)
            .find(|&i| predicate(chars[i]))
            .map(|i| i + 1)
            .unwrap_or(len)
    };

    if !is_vowel(chars[1]) {
        // Consonant in second position: after the next vowel
        after_next(is_vowel)
    } else if is_vowel(chars[0]) {
        // Two leading vowels: after the next consonant
        after_next(|c| !is_vowel(c))
    } else if len > 3 {
        3
    } else {
        len
    }
}
