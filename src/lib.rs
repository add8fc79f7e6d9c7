mod corpus;
mod error;
pub mod stemmers;
mod utils;
mod words;

pub use corpus::{load_corpus, write_corpus};
pub use error::{Result, StemmerError};
pub use stemmers::tet::{stem, LabadainStemmer, Mode, Pipeline, Regions, Rule};
pub use utils::{lowercase, normalize_apostrophes, preprocess};
pub use words::{tokenize, WordToken, WordTokenKind, WordTokens};
