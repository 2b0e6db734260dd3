//! Word-frequency extraction from tokenized morphemes.
//!
//! Turns the tagger's morpheme stream into a word → occurrence-count map.
//! General nouns are counted by surface form; independent verbs and
//! adjectives are counted by their dictionary form so inflected
//! occurrences collapse onto one key. Functional words are suppressed
//! through two fixed tables: a stop-word set checked against every
//! candidate, and a set of noun sub-classifications that never carry
//! standalone meaning.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use unicode_segmentation::UnicodeSegmentation;

use crate::morpheme::{
    Morpheme, DETAIL_INDEPENDENT, NO_VALUE, POS_ADJECTIVE, POS_NOUN, POS_VERB,
};

lazy_static! {
    /// Common functional and referential words excluded regardless of
    /// part of speech: pronouns, temporal deictics, honorific suffixes,
    /// and formal nouns such as こと and もの.
    static ref STOP_WORDS: HashSet<&'static str> = [
        "こと", "もの", "ため", "よう",
        "そう", "これ", "それ", "あれ",
        "どれ", "ここ", "そこ", "あそこ",
        "どこ", "とき", "時", "中",
        "人", "私", "僕", "俺", "あなた",
        "彼", "彼女", "方", "者", "上",
        "下", "前", "後", "間", "所",
        "場合", "今", "今日", "明日", "昨日",
        "ところ", "何", "の", "お", "ご",
        "さん", "くん", "ちゃん", "様",
    ]
    .into_iter()
    .collect();

    /// Noun sub-classifications excluded even when the surface form is
    /// not a stop word: non-independent nouns, pronouns, suffixes,
    /// numerals, and nouns that act as adverbs (今日, 昨年, ...).
    static ref EXCLUDED_NOUN_SUBCLASSES: HashSet<&'static str> =
        ["非自立", "代名詞", "接尾", "数", "副詞可能"].into_iter().collect();
}

/// Occurrence counts keyed by word. No ordering is implied; callers that
/// need ranked output go through [`top_words`].
pub type FrequencyMap = HashMap<String, u32>;

/// Whether a word is in the fixed stop-word table.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Length in logical characters rather than bytes.
fn char_count(word: &str) -> usize {
    word.graphemes(true).count()
}

/// Extracts meaningful words and their occurrence counts from a morpheme
/// sequence.
///
/// Every key in the result is at least two logical characters long and is
/// not a stop word. The function is pure: it reads only its input and the
/// two constant tables, so repeated or concurrent invocations are safe.
pub fn extract(morphemes: &[Morpheme]) -> FrequencyMap {
    let mut frequencies = FrequencyMap::new();

    for morpheme in morphemes {
        let surface = morpheme.surface.as_str();

        // Single-character surfaces are disproportionately particles,
        // punctuation, and fragments.
        if char_count(surface) < 2 {
            continue;
        }
        if is_stop_word(surface) {
            continue;
        }

        let features = &morpheme.features;
        match features.pos.as_str() {
            POS_NOUN => {
                let detail = features.pos_detail.as_str();
                if detail == NO_VALUE || EXCLUDED_NOUN_SUBCLASSES.contains(detail) {
                    continue;
                }
                *frequencies.entry(surface.to_string()).or_insert(0) += 1;
            }
            POS_VERB | POS_ADJECTIVE if features.pos_detail == DETAIL_INDEPENDENT => {
                // Counted by dictionary form, so 会い and 会っ both land
                // on 会う. Entries without a dictionary form are skipped.
                let Some(base) = features.base_form.as_deref() else {
                    continue;
                };
                if char_count(base) < 2 || is_stop_word(base) {
                    continue;
                }
                *frequencies.entry(base.to_string()).or_insert(0) += 1;
            }
            _ => {}
        }
    }

    frequencies
}

/// Minimal baseline extractor: counts surface forms of one part of speech
/// with no stop-word, length, or base-form handling.
///
/// Kept as a reference point for comparing [`extract`] against raw tagger
/// output; the filtered extractor is the canonical behavior.
pub fn extract_by_pos(morphemes: &[Morpheme], target_pos: &str) -> FrequencyMap {
    let mut frequencies = FrequencyMap::new();

    for morpheme in morphemes {
        if morpheme.features.pos == target_pos {
            *frequencies.entry(morpheme.surface.clone()).or_insert(0) += 1;
        }
    }

    frequencies
}

/// Ranks words by descending count, truncated to `limit`.
///
/// Equal counts are ordered lexicographically so repeated runs over the
/// same input print identically.
pub fn top_words(frequencies: &FrequencyMap, limit: usize) -> Vec<(String, u32)> {
    let mut ranked: Vec<(String, u32)> = frequencies
        .iter()
        .map(|(word, count)| (word.clone(), *count))
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}
