use spell_core::fuzzy::distance::damerau_levenshtein;
use spell_core::{EngineConfig, SpellEngine, SpellError, SuggestionResult, Verbosity};
use std::io::Cursor;
use std::sync::Arc;
use std::thread;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn find<'a>(results: &'a [SuggestionResult], term: &str) -> Option<&'a SuggestionResult> {
    results.iter().find(|r| r.term == term)
}

#[test]
fn reference_edit_distances() {
    let cases = [
        ("elo", 2),
        ("ello", 1),
        ("hll", 2),
        ("helo", 1),
        ("heo", 2),
        ("hel", 2),
        ("zello", 1),
        ("hllo", 1),
        ("hello", 0),
        ("hello!", 1),
        ("hello WORLD!", 7),
    ];
    for (target, expected) in cases {
        assert_eq!(damerau_levenshtein("hello", target), expected, "hello -> {}", target);
    }
}

#[test]
fn lookup_recall_at_default_distance() {
    init_logger();
    let engine = SpellEngine::new();
    engine.ingest("hello", &["a greeting"]).unwrap();
    engine.ingest("something", &["An item that exists"]).unwrap();

    for (query, expected) in [("zello", 1), ("hllo", 1), ("zllo", 2)] {
        let results = engine.lookup(query);
        assert!(!results.is_empty(), "{} must produce suggestions", query);
        let hello = find(&results, "hello").expect("hello suggested");
        assert_eq!(hello.distance, expected, "distance for {}", query);
        assert_eq!(hello.definitions, vec!["a greeting"]);
        assert_eq!(engine.suggest(query)[0].term, "hello");
    }
}

#[test]
fn no_suggestions_beyond_max_distance() {
    init_logger();
    let engine = SpellEngine::new();
    engine.ingest("hello", &[] as &[&str]).unwrap();
    engine.ingest("world", &[] as &[&str]).unwrap();

    assert!(find(&engine.lookup("world"), "hello").is_none());
    assert!(find(&engine.lookup("hello"), "world").is_none());
    assert!(engine.lookup("xyzzy").is_empty());
    assert!(engine.lookup("").is_empty());
}

#[test]
fn repeated_ingestion_grows_count_only() {
    init_logger();
    let engine = SpellEngine::new();
    assert!(engine.ingest("hello", &["a greeting"]).unwrap());
    let entries = engine.entry_count();

    for def in ["a greeting", "a salutation", "an interjection"] {
        assert!(!engine.ingest("hello", &[def]).unwrap());
    }

    assert_eq!(engine.frequency("hello"), Some(4));
    assert_eq!(engine.entry_count(), entries);
    assert_eq!(engine.term_count(), 1);

    let mut definitions = engine.definitions("hello");
    definitions.sort();
    assert_eq!(
        definitions,
        vec!["a greeting", "a salutation", "an interjection"]
    );
}

#[test]
fn empty_term_is_rejected() {
    let engine = SpellEngine::new();
    engine.ingest("hello", &[] as &[&str]).unwrap();
    let entries = engine.entry_count();

    let err = engine.ingest("", &["nothing"]).unwrap_err();
    assert!(matches!(err, SpellError::InvalidInput(_)));
    assert_eq!(engine.entry_count(), entries);
}

#[test]
fn each_term_is_reported_once() {
    let engine = SpellEngine::new();
    for term in ["hello", "hell", "help", "helo", "hallo"] {
        engine.ingest(term, &[] as &[&str]).unwrap();
    }
    let results = engine.lookup("helo");
    let mut terms: Vec<&str> = results.iter().map(|r| r.term.as_str()).collect();
    let total = terms.len();
    terms.sort_unstable();
    terms.dedup();
    assert_eq!(terms.len(), total);
    assert_eq!(find(&results, "helo").unwrap().distance, 0);
    assert_eq!(results[0].term, "helo");
}

#[test]
fn suggest_ranks_by_distance_then_frequency() {
    init_logger();
    let engine = SpellEngine::new();
    engine.ingest_corpus("the then than then them then the").unwrap();

    let ranked = engine.suggest("thn");
    let terms: Vec<&str> = ranked.iter().map(|r| r.term.as_str()).collect();
    // All one edit away; "then" occurs most often.
    assert_eq!(terms[0], "then");
    assert!(ranked.windows(2).all(|w| {
        w[0].distance < w[1].distance
            || (w[0].distance == w[1].distance && w[0].count >= w[1].count)
    }));
}

#[test]
fn verbosity_trims_suggestions() {
    let closest = SpellEngine::with_config(EngineConfig::default().with_verbosity(Verbosity::Closest))
        .unwrap();
    let top = SpellEngine::with_config(EngineConfig::default().with_verbosity(Verbosity::Top))
        .unwrap();
    for engine in [&closest, &top] {
        engine.ingest_corpus("spelling spewing spell spelling").unwrap();
    }

    let results = closest.suggest("speling");
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.distance == 1));
    assert_eq!(results[0].term, "spelling");

    let results = top.suggest("speling");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].term, "spelling");
    assert_eq!(results[0].count, 2);
}

#[test]
fn corpus_ingestion_reports_stats() {
    init_logger();
    let engine = SpellEngine::new();
    let stats = engine
        .ingest_reader(Cursor::new("Hello world\nhello, WORLD!\nfarewell"))
        .unwrap();
    assert_eq!(stats.words, 3);
    assert_eq!(stats.entries, engine.entry_count());
    assert_eq!(engine.frequency("hello"), Some(2));
    assert_eq!(engine.frequency("world"), Some(2));
    assert_eq!(engine.frequency("farewell"), Some(1));
}

#[test]
fn non_ascii_terms() {
    let engine = SpellEngine::new();
    engine.ingest("नमस्ते", &["greeting"]).unwrap();
    engine.ingest("café", &[] as &[&str]).unwrap();

    let results = engine.lookup("नमस्त");
    assert_eq!(find(&results, "नमस्ते").unwrap().distance, 1);
    let results = engine.lookup("cafe");
    assert_eq!(find(&results, "café").unwrap().distance, 1);
}

#[test]
fn larger_max_distance_widens_recall() {
    let engine =
        SpellEngine::with_config(EngineConfig::default().with_max_edit_distance(3)).unwrap();
    engine.ingest("elephant", &[] as &[&str]).unwrap();
    let results = engine.lookup("elphnt");
    assert_eq!(find(&results, "elephant").unwrap().distance, 2);
    let results = engine.lookup("elxphxnx");
    assert_eq!(find(&results, "elephant").unwrap().distance, 3);
}

#[test]
fn concurrent_readers_and_writers() {
    init_logger();
    let engine = Arc::new(SpellEngine::new());
    engine.ingest("hello", &["a greeting"]).unwrap();

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for i in 0..25 {
                    let term = format!("term{}x{}", t, i);
                    engine.ingest(&term, &["generated"]).unwrap();
                    engine.ingest("hello", &[] as &[&str]).unwrap();
                }
            })
        })
        .collect();
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..25 {
                    let results = engine.lookup("hllo");
                    let hello = results.iter().find(|r| r.term == "hello").unwrap();
                    assert_eq!(hello.distance, 1);
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().unwrap();
    }
    assert_eq!(engine.frequency("hello"), Some(101));
    assert_eq!(engine.term_count(), 101);
}

#[test]
fn engine_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SpellEngine>();
}
