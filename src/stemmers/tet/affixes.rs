// Affix tables for the Labadain stemmer.
//
// Tables are tried either in declared order or longest-first, depending on
// the rule consuming them, so the order of entries below is significant.
use std::cmp::Reverse;

use lazy_static::lazy_static;

// Portuguese loanword suffixes
pub static GENERAL_SUFFIXES: [&str; 34] = [
    "eza", "ezas", "iku", "ika", "ikus", "ikas", "izmu", "izmus", "ável", "ível", "ista", "istas",
    "ozu", "oza", "ozus", "ozas", "amentu", "amentus", "imentu", "imentus", "adora", "adór",
    "asaun", "adoras", "adores", "asoens", "ante", "antes", "ánsia", "atória", "atóriu",
    "atórias", "atórius", "amentál",
];

pub static LOJIAS_SUFFIXES: [&str; 2] = ["lojia", "lojias"];
pub static USOENS_SUFFIXES: [&str; 2] = ["usaun", "usoens"];
pub static ENSIAS_SUFFIXES: [&str; 2] = ["énsia", "énsias"];

pub static LOJIAS_REPLACEMENT: &str = "loj";
pub static USOENS_REPLACEMENT: &str = "u";
pub static ENSIAS_REPLACEMENT: &str = "ente";

// Adverbs
pub static AMENTE_SUFFIX: &str = "amente";
pub static MENTE_SUFFIX: &str = "mente";

pub static IDADES_SUFFIXES: [&str; 2] = ["idade", "idades"];
pub static IVOS_SUFFIXES: [&str; 4] = ["ivu", "iva", "ivus", "ivas"];

pub static VERB_BASED_SUFFIXES: [&str; 12] = [
    "ada", "adu", "adas", "adus", "ida", "idu", "idas", "idus", "ária", "áriu", "árias", "árius",
];

pub static RESIDUAL_SUFFIXES: [&str; 6] = ["a", "e", "i", "u", "us", "as"];

// Native Tetun affixes
pub static TETUN_SUFFIXES: [&str; 4] = ["-na'in", "-teen", "dór", "n"];
pub static TETUN_PREFIXES: [&str; 3] = ["ha", "nak", "nam"];

/// Affix table sorted by decreasing character length, keeping the declared
/// order between affixes of the same length.
#[derive(Debug)]
pub struct ByLength(Vec<&'static str>);

impl ByLength {
    pub fn new(table: &[&'static str]) -> Self {
        let mut sorted = table.to_vec();
        sorted.sort_by_key(|affix| Reverse(affix.chars().count()));

        Self(sorted)
    }

    pub fn as_slice(&self) -> &[&'static str] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }
}

lazy_static! {
    pub static ref GENERAL_SUFFIXES_BY_LENGTH: ByLength = ByLength::new(&GENERAL_SUFFIXES);
    pub static ref VERB_BASED_SUFFIXES_BY_LENGTH: ByLength = ByLength::new(&VERB_BASED_SUFFIXES);
    pub static ref TETUN_SUFFIXES_BY_LENGTH: ByLength = ByLength::new(&TETUN_SUFFIXES);
    pub static ref TETUN_PREFIXES_BY_LENGTH: ByLength = ByLength::new(&TETUN_PREFIXES);
}

#[inline]
pub fn ends_with_any(word: &str, table: &[&str]) -> bool {
    table.iter().any(|suffix| word.ends_with(suffix))
}

#[inline]
pub fn starts_with_any(word: &str, table: &[&str]) -> bool {
    table.iter().any(|prefix| word.starts_with(prefix))
}
