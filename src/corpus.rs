use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::{Result, StemmerError};

fn map_not_found(path: &Path, error: io::Error) -> StemmerError {
    if error.kind() == io::ErrorKind::NotFound {
        StemmerError::MissingFile {
            path: path.to_path_buf(),
        }
    } else {
        StemmerError::Io(error)
    }
}

/// Reads a whole UTF-8 text file.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    fs::read_to_string(path).map_err(|error| map_not_found(path, error))
}

/// Appends `corpus` and a trailing newline to the file, creating it if
/// needed.
pub fn write_corpus<P: AsRef<Path>>(path: P, corpus: &str) -> Result<()> {
    let path = path.as_ref();

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| map_not_found(path, error))?;

    file.write_all(corpus.as_bytes())?;
    file.write_all(b"\n")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_corpus() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corpus.txt");

        fs::write(&path, "Ha’u hakerek livru.\n").unwrap();

        assert_eq!(load_corpus(&path).unwrap(), "Ha’u hakerek livru.\n");
    }

    #[test]
    fn test_load_missing_corpus() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        match load_corpus(&path) {
            Err(StemmerError::MissingFile { path: missing }) => assert_eq!(missing, path),
            other => panic!("expected a missing file, got {:?}", other),
        }
    }

    #[test]
    fn test_write_corpus_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stems.txt");

        write_corpus(&path, "estud hakerek").unwrap();
        write_corpus(&path, "livr").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "estud hakerek\nlivr\n");
    }

    #[test]
    fn test_write_corpus_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nowhere").join("stems.txt");

        assert!(matches!(
            write_corpus(&path, "livr"),
            Err(StemmerError::MissingFile { .. })
        ));
    }
}
