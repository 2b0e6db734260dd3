use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use kumo::analyze::{extract, is_stop_word, top_words};
use kumo::input::read_to_utf8;
use kumo::morpheme::{self, MorphFeatures, Morpheme};

fn morph(surface: &str, details: &[&str]) -> Morpheme {
    Morpheme {
        surface: surface.to_string(),
        features: MorphFeatures::from_details(details).unwrap(),
    }
}

#[test]
fn end_to_end_extraction_from_file() {
    let test_file = "test_e2e_input.txt";
    let content = "自然言語の言葉を数える";
    let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode(content);

    let mut file = File::create(test_file).unwrap();
    file.write_all(&bytes).unwrap();

    let text = read_to_utf8(Path::new(test_file)).expect("Should decode the Shift_JIS file");
    assert_eq!(text, content);

    // Tagger output for the decoded sentence, IPA schema.
    let morphemes = [
        morph("自然", &["名詞", "形容動詞語幹", "*", "*", "*", "*", "自然", "シゼン", "シゼン"]),
        morph("言語", &["名詞", "一般", "*", "*", "*", "*", "言語", "ゲンゴ", "ゲンゴ"]),
        morph("の", &["助詞", "連体化", "*", "*", "*", "*", "の", "ノ", "ノ"]),
        morph("言葉", &["名詞", "一般", "*", "*", "*", "*", "言葉", "コトバ", "コトバ"]),
        morph("を", &["助詞", "格助詞", "一般", "*", "*", "*", "を", "ヲ", "ヲ"]),
        morph(
            "数える",
            &["動詞", "自立", "*", "*", "一段", "基本形", "数える", "カゾエル", "カゾエル"],
        ),
    ];

    let frequencies = extract(&morphemes);
    assert_eq!(frequencies.get("自然"), Some(&1));
    assert_eq!(frequencies.get("言語"), Some(&1));
    assert_eq!(frequencies.get("言葉"), Some(&1));
    assert_eq!(frequencies.get("数える"), Some(&1));
    assert_eq!(frequencies.get("の"), None);

    let ranked = top_words(&frequencies, 20);
    assert_eq!(ranked.len(), 4);
    for (word, count) in &ranked {
        assert!(word.chars().count() >= 2);
        assert!(!is_stop_word(word));
        assert_eq!(*count, 1);
    }

    fs::remove_file(test_file).unwrap();
}

#[test]
fn tokenizer_feeds_the_extractor() {
    let morphemes = morpheme::tokenize("朝も夜も君に会いたい").expect("Should tokenize");
    assert!(!morphemes.is_empty());

    // 朝 and 夜 are single characters, 君 is a pronoun, も/に/たい are
    // functional; only the verb survives, counted by dictionary form.
    let frequencies = extract(&morphemes);
    assert_eq!(frequencies.get("会う"), Some(&1));

    for word in frequencies.keys() {
        assert!(word.chars().count() >= 2);
        assert!(!is_stop_word(word));
    }
}

#[test]
fn empty_text_tokenizes_to_an_empty_map() {
    let morphemes = morpheme::tokenize("").expect("Should tokenize empty input");
    let frequencies = extract(&morphemes);
    assert!(frequencies.is_empty());
}
