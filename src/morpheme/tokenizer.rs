//! Morphological tokenizer backed by lindera's embedded IPA dictionary.

use lindera::dictionary::{load_dictionary_from_kind, DictionaryKind};
use lindera::error::LinderaError;
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use lindera::tokenizer::Tokenizer;
use thiserror::Error;
use tracing::debug;

use super::{MorphFeatures, Morpheme};

#[derive(Error, Debug)]
pub enum TokenizeError {
    #[error("failed to load the IPA dictionary: {0}")]
    Dictionary(#[source] LinderaError),

    #[error("morphological analysis failed: {0}")]
    Analysis(#[source] LinderaError),
}

/// Segments UTF-8 text into morphemes tagged with IPA-schema features.
///
/// Tokens whose feature list is too short to classify (unknown words) are
/// dropped. Dictionary and analysis failures are hard errors; the caller
/// aborts before extraction.
pub fn tokenize(text: &str) -> Result<Vec<Morpheme>, TokenizeError> {
    let dictionary =
        load_dictionary_from_kind(DictionaryKind::IPADIC).map_err(TokenizeError::Dictionary)?;
    let segmenter = Segmenter::new(Mode::Normal, dictionary, None);
    let tokenizer = Tokenizer::new(segmenter);

    let mut tokens = tokenizer
        .tokenize(text)
        .map_err(TokenizeError::Analysis)?;

    let mut morphemes = Vec::with_capacity(tokens.len());
    for token in tokens.iter_mut() {
        let surface = token.text.to_string();
        if let Some(features) = MorphFeatures::from_details(&token.details()) {
            morphemes.push(Morpheme { surface, features });
        }
    }

    debug!(count = morphemes.len(), "tokenized input text");
    Ok(morphemes)
}
