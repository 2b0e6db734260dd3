use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

mod encoding;

pub use self::encoding::decode_japanese;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("file is empty: {0}")]
    EmptyFile(PathBuf),
}

/// Reads a text file and decodes it to UTF-8, probing the Japanese
/// encodings the tool accepts. Files that decode to nothing but
/// whitespace are rejected before tokenization.
pub fn read_to_utf8(path: &Path) -> Result<String, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = decode_japanese(&bytes);
    if text.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    info!(path = %path.display(), bytes = bytes.len(), "loaded input file");
    Ok(text)
}
