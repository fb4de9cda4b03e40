use std::sync::Arc;
use std::thread;

use gram_core::dictionary::PhraseTable;
use gram_core::error::StoreError;
use gram_core::language::{LanguageProcessor, Script};
use gram_core::store::{LearnedEntries, LearnedStore, MemoryStore};

use crate::{DictionaryTranslator, Translator, TranslatorOptions};

const DEVANAGARI: Script = Script::new("Devanagari", &[('\u{0900}', '\u{097F}')]);

struct TestProcessor;

impl LanguageProcessor for TestProcessor {
    fn language_code(&self) -> &str {
        "mr"
    }

    fn script(&self) -> &Script {
        &DEVANAGARI
    }
}

/// Store whose slot is never reachable, like a full or disabled local storage
struct FailingStore;

impl LearnedStore for FailingStore {
    fn load(&self) -> Result<LearnedEntries, StoreError> {
        Err(StoreError::Unavailable("storage disabled".to_string()))
    }

    fn save(&self, _entries: &LearnedEntries) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("quota exceeded".to_string()))
    }

    fn location(&self) -> String {
        "failing".to_string()
    }
}

fn table(pairs: &[(&str, &str)]) -> PhraseTable {
    let mut table = PhraseTable::new("test");
    for (k, v) in pairs {
        table.insert_if_absent(k, v);
    }
    table
}

fn base() -> PhraseTable {
    table(&[
        ("नमस्कार", "Hello"),
        ("धन्यवाद", "Thank You"),
        ("क्षमस्व", "Sorry"),
        ("माफ करा", "Excuse Me"),
        ("गाव", "Village"),
        ("ग्राम", "Village"),
        ("पंचायत", "Panchayat"),
        ("ग्रामपंचायत", "Gram Panchayat"),
        ("तक्रार", "Complaint"),
        ("तक्रार नोंदवा", "Register Complaint"),
        ("\u{0958}लम", "Pen"),
    ])
}

fn fragments() -> PhraseTable {
    table(&[("आणि", "and"), ("ला", "to")])
}

fn translator_with(
    store: Arc<dyn LearnedStore>,
    options: TranslatorOptions,
) -> DictionaryTranslator<TestProcessor> {
    DictionaryTranslator::new(TestProcessor, base(), fragments(), store, options)
}

fn translator() -> DictionaryTranslator<TestProcessor> {
    translator_with(Arc::new(MemoryStore::new()), TranslatorOptions::default())
}

#[test]
fn test_same_language_is_identity() {
    let t = translator();
    assert_eq!(t.translate("नमस्कार", "mr", "mr"), "नमस्कार");
    assert_eq!(t.translate("  गावात ", "en", "en"), "  गावात ");
}

#[test]
fn test_empty_and_blank_pass_through() {
    let t = translator();
    assert_eq!(t.translate("", "mr", "en"), "");
    assert_eq!(t.translate("   ", "mr", "en"), "   ");
}

#[test]
fn test_exact_match_on_trimmed_input() {
    let t = translator();
    assert_eq!(t.translate("  नमस्कार \n", "mr", "en"), "Hello");
}

#[test]
fn test_exact_match_beats_word_by_word() {
    let t = translator();
    assert_eq!(t.translate("तक्रार नोंदवा", "mr", "en"), "Register Complaint");
}

#[test]
fn test_miss_returns_original_input() {
    let t = translator();
    assert_eq!(t.translate("  hello world ", "mr", "en"), "  hello world ");
}

#[test]
fn test_word_by_word_with_fragment() {
    let t = translator();
    assert_eq!(
        t.translate("नमस्कार आणि धन्यवाद", "mr", "en"),
        "Hello and Thank You"
    );
}

#[test]
fn test_edge_punctuation_is_reattached() {
    let t = translator();
    assert_eq!(t.translate("(धन्यवाद!)", "mr", "en"), "(Thank You!)");
    assert_eq!(t.translate("नमस्कार !", "mr", "en"), "Hello !");
}

#[test]
fn test_multi_word_key_not_matched_word_by_word() {
    let t = translator();
    assert_eq!(t.translate("क्षमस्व, माफ करा", "mr", "en"), "Sorry, माफ करा");
}

#[test]
fn test_phrase_window_matches_multi_word_key() {
    let options = TranslatorOptions {
        phrase_window: 3,
        ..TranslatorOptions::default()
    };
    let t = translator_with(Arc::new(MemoryStore::new()), options);

    assert_eq!(t.translate("क्षमस्व, माफ करा", "mr", "en"), "Sorry, Excuse Me");
    assert_eq!(
        t.translate("कृपया तक्रार नोंदवा.", "mr", "en"),
        "कृपया Register Complaint."
    );
}

#[test]
fn test_compound_containment_replaces_span() {
    let t = translator();
    assert_eq!(t.translate("गावात", "mr", "en"), "Villageात");
    assert_eq!(t.translate("ग्रामपंचायतीत", "mr", "en"), "Gram Panchayatीत");
}

#[test]
fn test_compound_split_falls_back_to_fragments() {
    let t = translator();
    assert_eq!(t.translate("रामला", "mr", "en"), "राम to");
}

#[test]
fn test_latin_words_never_compound_matched() {
    let t = translator();
    assert!(t.learn_word("office", "कार्यालय"));

    assert_eq!(t.translate("office", "en", "mr"), "कार्यालय");
    assert_eq!(t.translate("offices", "en", "mr"), "offices");
}

#[test]
fn test_learn_then_lookup() {
    let t = translator();
    assert_eq!(t.translate("फूल", "mr", "en"), "फूल");

    assert!(t.learn_word("फूल", "Flower"));
    assert_eq!(t.translate("फूल", "mr", "en"), "Flower");
}

#[test]
fn test_learn_is_first_writer_wins() {
    let t = translator();
    assert!(!t.learn_word("नमस्कार", "Hi"));
    assert_eq!(t.translate("नमस्कार", "mr", "en"), "Hello");

    assert!(t.learn_word("फूल", "Flower"));
    assert!(!t.add_translation("फूल", "Bloom"));
    assert_eq!(t.translate("फूल", "mr", "en"), "Flower");
}

#[test]
fn test_learn_trims_and_rejects_blank() {
    let t = translator();
    assert!(!t.learn_word("   ", "Tree"));
    assert!(!t.learn_word("झाड", " \t"));

    assert!(t.learn_word("  झाड ", " Tree "));
    let all = t.all_translations();
    assert_eq!(all.get("झाड").map(String::as_str), Some("Tree"));
}

#[test]
fn test_batch_matches_single_calls() {
    let t = translator();
    let texts = vec!["नमस्कार", "", "गावात", "hello", "क्षमस्व, माफ करा"];

    let batch = t.translate_batch(&texts, "mr", "en");
    let single: Vec<String> = texts.iter().map(|s| t.translate(s, "mr", "en")).collect();

    assert_eq!(batch.len(), texts.len());
    assert_eq!(batch, single);
}

#[test]
fn test_all_translations_is_a_snapshot() {
    let t = translator();
    let before = t.all_translations().len();

    let mut snapshot = t.all_translations();
    snapshot.insert("नमस्कार".to_string(), "changed".to_string());
    snapshot.remove("धन्यवाद");

    assert_eq!(t.translate("नमस्कार", "mr", "en"), "Hello");
    assert_eq!(t.all_translations().len(), before);
}

#[test]
fn test_learned_entries_survive_restart() {
    let store = Arc::new(MemoryStore::new());

    let first = translator_with(store.clone(), TranslatorOptions::default());
    assert!(first.learn_word("फूल", "Flower"));
    drop(first);

    let second = translator_with(store, TranslatorOptions::default());
    assert_eq!(second.translate("फूल", "mr", "en"), "Flower");
    assert_eq!(second.learned_translations().len(), 1);
}

#[test]
fn test_learned_entries_never_shadow_base() {
    let store = Arc::new(MemoryStore::with_contents(
        r#"{"नमस्कार": "Hi", "फूल": "Flower"}"#,
    ));
    let t = translator_with(store, TranslatorOptions::default());

    assert_eq!(t.translate("नमस्कार", "mr", "en"), "Hello");
    assert_eq!(t.translate("फूल", "mr", "en"), "Flower");
}

#[test]
fn test_corrupt_store_starts_empty_and_recovers() {
    let store = Arc::new(MemoryStore::with_contents("{oops"));
    let t = translator_with(store.clone(), TranslatorOptions::default());

    assert!(t.learned_translations().is_empty());
    assert!(t.learn_word("फूल", "Flower"));
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn test_failed_persist_keeps_entry_in_memory() {
    let t = translator_with(Arc::new(FailingStore), TranslatorOptions::default());

    assert!(t.learn_word("फूल", "Flower"));
    assert_eq!(t.translate("फूल", "mr", "en"), "Flower");
    assert_eq!(t.learned_translations().len(), 1);
}

#[test]
fn test_concurrent_learners_only_one_wins() {
    let store = Arc::new(MemoryStore::new());
    let t = translator_with(store.clone(), TranslatorOptions::default());

    let wins = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let t = &t;
                scope.spawn(move || t.learn_word("फूल", &format!("Flower {i}")))
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count()
    });

    assert_eq!(wins, 1);
    let persisted = store.load().unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(
        persisted.get("फूल").map(String::as_str),
        Some(t.translate("फूल", "mr", "en").as_str())
    );
}

#[test]
fn test_normalized_matching() {
    let decomposed = "\u{0915}\u{093C}लम";

    let plain = translator();
    assert_eq!(plain.translate(decomposed, "mr", "en"), decomposed);

    let options = TranslatorOptions {
        normalize_unicode: true,
        ..TranslatorOptions::default()
    };
    let normalized = translator_with(Arc::new(MemoryStore::new()), options);
    assert_eq!(normalized.translate(decomposed, "mr", "en"), "Pen");
}

#[test]
fn test_metadata_counts() {
    let t = translator();
    assert!(t.learn_word("फूल", "Flower"));

    let meta = t.metadata();
    assert_eq!(meta.phrase_count, base().len() + 1);
    assert_eq!(meta.learned_count, 1);
    assert_eq!(meta.fragment_count, 2);
    assert_eq!(
        t.supported_languages(),
        vec![("mr".to_string(), "en".to_string())]
    );
}
