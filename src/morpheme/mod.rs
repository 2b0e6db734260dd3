//! Morpheme records produced by morphological analysis.
//!
//! The tagger follows the IPA dictionary schema: every token carries an
//! ordered list of nine feature strings, with `*` standing in for fields
//! that do not apply. This module replaces positional feature indexing
//! with a named-field record so downstream code never has to remember
//! which index holds the base form.

pub mod tokenizer;

pub use tokenizer::{tokenize, TokenizeError};

/// Sentinel the IPA schema uses for "not applicable".
pub const NO_VALUE: &str = "*";

/// Part-of-speech tags the extractor dispatches on.
pub const POS_NOUN: &str = "名詞";
pub const POS_VERB: &str = "動詞";
pub const POS_ADJECTIVE: &str = "形容詞";

/// Sub-classification marking independent (non-auxiliary) verbs and
/// adjectives.
pub const DETAIL_INDEPENDENT: &str = "自立";

/// Grammatical features of a single morpheme, one named field per IPA
/// schema position.
///
/// `pos` and `pos_detail` are kept verbatim (including a possible `*`)
/// because the extraction rules compare them literally; the remaining
/// fields map `*` and absence to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphFeatures {
    /// Part of speech (名詞, 動詞, 助詞, ...). Schema field 0.
    pub pos: String,
    /// Part-of-speech sub-classification (一般, 自立, 代名詞, ...).
    /// Schema field 1.
    pub pos_detail: String,
    /// Finer sub-classifications. Schema fields 2 and 3.
    pub pos_detail_2: Option<String>,
    pub pos_detail_3: Option<String>,
    /// Conjugation type and form for inflected words. Schema fields 4
    /// and 5.
    pub conjugation_type: Option<String>,
    pub conjugation_form: Option<String>,
    /// Dictionary (base) form of verbs and adjectives. Schema field 6.
    pub base_form: Option<String>,
    /// Katakana reading and pronunciation. Schema fields 7 and 8.
    pub reading: Option<String>,
    pub pronunciation: Option<String>,
}

impl MorphFeatures {
    /// Builds the record from the tagger's ordered feature list.
    ///
    /// Returns `None` when fewer than two fields are present, which the
    /// tagger emits for unknown words it cannot classify. Such tokens are
    /// dropped silently rather than treated as errors.
    pub fn from_details(details: &[&str]) -> Option<Self> {
        if details.len() < 2 {
            return None;
        }

        let field = |index: usize| -> Option<String> {
            details
                .get(index)
                .filter(|value| **value != NO_VALUE)
                .map(|value| (*value).to_string())
        };

        Some(Self {
            pos: details[0].to_string(),
            pos_detail: details[1].to_string(),
            pos_detail_2: field(2),
            pos_detail_3: field(3),
            conjugation_type: field(4),
            conjugation_form: field(5),
            base_form: field(6),
            reading: field(7),
            pronunciation: field(8),
        })
    }
}

/// One tokenized word: the surface form exactly as it appeared in the
/// text, plus its grammatical features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    pub surface: String,
    pub features: MorphFeatures,
}
