use std::borrow::Cow;

use enumset::{EnumSet, EnumSetType};

use super::affixes::*;
use super::regions::Regions;
use super::rules::*;
use super::Mode;

/// A rule category of the stemmer, in the order the pipelines try them.
#[derive(Debug, EnumSetType)]
pub enum Rule {
    GeneralSuffix,
    LojiaSuffix,
    UsaunSuffix,
    EnsiaSuffix,
    AmenteSuffix,
    MenteSuffix,
    IdadeSuffix,
    IvuSuffix,
    VerbSuffix,
    TetunSuffix,
    TetunPrefix,
    ResidualSuffix,
}

use Rule::*;

static BASE_STEPS: [Rule; 10] = [
    GeneralSuffix,
    LojiaSuffix,
    UsaunSuffix,
    EnsiaSuffix,
    AmenteSuffix,
    MenteSuffix,
    IdadeSuffix,
    IvuSuffix,
    VerbSuffix,
    ResidualSuffix,
];

impl Rule {
    pub fn matches(self, word: &str) -> bool {
        match self {
            GeneralSuffix => ends_with_any(word, &GENERAL_SUFFIXES),
            LojiaSuffix => ends_with_any(word, &LOJIAS_SUFFIXES),
            UsaunSuffix => ends_with_any(word, &USOENS_SUFFIXES),
            EnsiaSuffix => ends_with_any(word, &ENSIAS_SUFFIXES),
            AmenteSuffix => word.ends_with(AMENTE_SUFFIX),
            MenteSuffix => word.ends_with(MENTE_SUFFIX),
            IdadeSuffix => ends_with_any(word, &IDADES_SUFFIXES),
            IvuSuffix => ends_with_any(word, &IVOS_SUFFIXES),
            VerbSuffix => ends_with_any(word, &VERB_BASED_SUFFIXES),
            TetunSuffix => ends_with_any(word, &TETUN_SUFFIXES),
            TetunPrefix => starts_with_any(word, &TETUN_PREFIXES),
            ResidualSuffix => ends_with_any(word, &RESIDUAL_SUFFIXES),
        }
    }

    pub fn apply<'a>(self, word: &'a str, regions: &Regions) -> Cow<'a, str> {
        match self {
            GeneralSuffix => {
                standard_suffix_removal(word, regions, &GENERAL_SUFFIXES_BY_LENGTH)
            }
            LojiaSuffix => {
                simple_replace_suffixes(word, regions, &LOJIAS_SUFFIXES, LOJIAS_REPLACEMENT)
            }
            UsaunSuffix => {
                simple_replace_suffixes(word, regions, &USOENS_SUFFIXES, USOENS_REPLACEMENT)
            }
            EnsiaSuffix => {
                simple_replace_suffixes(word, regions, &ENSIAS_SUFFIXES, ENSIAS_REPLACEMENT)
            }
            AmenteSuffix => process_amente_suffix(word, regions, AMENTE_SUFFIX),
            MenteSuffix => process_mente_suffix(word, regions, MENTE_SUFFIX),
            IdadeSuffix => process_idades_suffixes(word, regions, &IDADES_SUFFIXES),
            IvuSuffix => process_ivos_suffixes(word, regions, &IVOS_SUFFIXES),
            VerbSuffix => verb_suffix_removal(word, regions, &VERB_BASED_SUFFIXES_BY_LENGTH),
            TetunSuffix => tetun_suffix_removal(word, &TETUN_SUFFIXES_BY_LENGTH),
            TetunPrefix => tetun_prefix_removal(word, &TETUN_PREFIXES_BY_LENGTH),
            ResidualSuffix => residual_suffixes_removal(word, regions, &RESIDUAL_SUFFIXES),
        }
    }
}

/// Ordered decision list: the first rule matching a word is the only one
/// applied to it, whether or not it ends up shortening the word.
#[derive(Debug, Clone)]
pub struct Pipeline {
    steps: Vec<Rule>,
}

impl Pipeline {
    pub fn for_mode(mode: Mode) -> Self {
        let native: &[Rule] = match mode {
            Mode::Light => &[],
            Mode::Moderate => &[TetunSuffix],
            Mode::Heavy => &[TetunSuffix, TetunPrefix],
        };

        // Native affixes go right before the residual step
        let (head, residual) = BASE_STEPS.split_at(BASE_STEPS.len() - 1);

        Self {
            steps: [head, native, residual].concat(),
        }
    }

    pub fn steps(&self) -> &[Rule] {
        &self.steps
    }

    pub fn rules(&self) -> EnumSet<Rule> {
        self.steps.iter().copied().collect()
    }

    /// Returns the rule committed to for this word along with its output.
    pub fn apply<'a>(&self, word: &'a str) -> Option<(Rule, Cow<'a, str>)> {
        let rule = self.steps.iter().copied().find(|rule| rule.matches(word))?;

        Some((rule, rule.apply(word, &Regions::of(word))))
    }

    pub fn run<'a>(&self, word: &'a str) -> Cow<'a, str> {
        match self.apply(word) {
            Some((_, stemmed)) => stemmed,
            None => Cow::Borrowed(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_steps_order() {
        assert_eq!(Pipeline::for_mode(Mode::Light).steps(), &BASE_STEPS);
        assert_eq!(
            &Pipeline::for_mode(Mode::Heavy).steps()[8..],
            &[VerbSuffix, TetunSuffix, TetunPrefix, ResidualSuffix]
        );
        assert_eq!(
            &Pipeline::for_mode(Mode::Moderate).steps()[8..],
            &[VerbSuffix, TetunSuffix, ResidualSuffix]
        );
    }

    #[test]
    fn test_light_pipeline() {
        let pipeline = Pipeline::for_mode(Mode::Light);

        let tests = [
            ("nasionalizmu", "nasional"),
            ("tipolojia", "tipolojia"),
            ("antropolojia", "antropoloj"),
            ("konstitusaun", "konstitu"),
            ("eksperiénsia", "eksperiente"),
            ("rapidamente", "rapid"),
            ("naturalmente", "natural"),
            ("universidade", "univers"),
            ("produtivu", "produt"),
            ("aplikatorivu", "aplik"),
            ("produtividade", "produt"),
            ("organizada", "organiz"),
            ("livru", "livr"),
            ("hare", "har"),
            ("hamos", "hamos"),
            ("fatin", "fatin"),
            ("hakerek-na'in", "hakerek-na'in"),
            ("hakerek", "hakerek"),
        ];

        for (word, expected) in tests {
            assert_eq!(pipeline.run(word), expected, "{}", word);
        }
    }

    #[test]
    fn test_moderate_pipeline() {
        let pipeline = Pipeline::for_mode(Mode::Moderate);

        let tests = [
            ("nasionalizmu", "nasional"),
            ("hakerek-na'in", "hakerek"),
            ("bosok-teen", "bosok"),
            ("servidór", "servi"),
            ("fatin", "fati"),
            ("hare", "har"),
            ("hamos", "hamos"),
            ("nakdoko", "nakdoko"),
        ];

        for (word, expected) in tests {
            assert_eq!(pipeline.run(word), expected, "{}", word);
        }
    }

    #[test]
    fn test_heavy_pipeline() {
        let pipeline = Pipeline::for_mode(Mode::Heavy);

        let tests = [
            ("nasionalizmu", "nasional"),
            ("hakerek-na'in", "hakerek"),
            ("fatin", "fati"),
            ("hamos", "mos"),
            ("nakdoko", "doko"),
            // The prefix rule commits and keeps the word, so "e" is not removed
            ("hare", "hare"),
            ("livru", "livr"),
        ];

        for (word, expected) in tests {
            assert_eq!(pipeline.run(word), expected, "{}", word);
        }
    }

    #[test]
    fn test_first_matching_rule_commits() {
        let pipeline = Pipeline::for_mode(Mode::Light);

        // "ante" lies before R2, and the residual "e" is never tried
        assert_eq!(
            pipeline.apply("sante"),
            Some((GeneralSuffix, Cow::Borrowed("sante")))
        );
        assert_eq!(
            pipeline.apply("estudante"),
            Some((GeneralSuffix, Cow::Borrowed("estud")))
        );
        assert_eq!(pipeline.apply("hakerek"), None);
    }

    #[test]
    fn test_mode_escalation() {
        let light = Pipeline::for_mode(Mode::Light).rules();
        let moderate = Pipeline::for_mode(Mode::Moderate).rules();
        let heavy = Pipeline::for_mode(Mode::Heavy).rules();

        assert!(light.is_subset(moderate));
        assert!(moderate.is_subset(heavy));
        assert_eq!(moderate - light, EnumSet::only(TetunSuffix));
        assert_eq!(heavy - moderate, EnumSet::only(TetunPrefix));
    }
}
