use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StemmerError {
    #[error("invalid mode {0:?}, choose \"light\", \"moderate\" or \"heavy\"")]
    InvalidMode(String),

    #[error("file not found at: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, StemmerError>;
