//! Golden tests for the relevance router.
//!
//! Verifies the documented precedence: title mentions dominate, the
//! foreign-topic list only fires when no library vocabulary matched, and
//! classification is a pure function of the query.

use liber_core::catalog::Catalog;
use liber_core::router::classify;

#[test]
fn every_catalog_title_is_in_scope() {
    let catalog = Catalog::builtin();
    let titles: Vec<String> = catalog.titles().map(|t| t.to_string()).collect();

    for title in titles {
        let query = format!("Do you have {} on the shelf?", title);
        let verdict = classify(&query, &catalog);
        assert!(verdict.in_scope, "title '{}' should be in scope", title);
        assert!(
            verdict.reason.contains(&title.to_lowercase()),
            "reason should name the title, got: {}",
            verdict.reason
        );
    }
}

#[test]
fn title_mention_dominates_any_other_content() {
    let catalog = Catalog::builtin();
    // Foreign topic plus a title: the title wins.
    let verdict = classify("weather forecast while I read Fahrenheit 451", &catalog);
    assert!(verdict.in_scope);
    assert!(verdict.reason.contains("fahrenheit 451"));
}

#[test]
fn case_is_ignored_for_title_mentions() {
    let catalog = Catalog::builtin();
    let verdict = classify("is THE HOBBIT available?", &catalog);
    assert!(verdict.in_scope);
}

#[test]
fn foreign_topics_reject_in_list_order() {
    let catalog = Catalog::builtin();

    let verdict = classify("What's the weather like today?", &catalog);
    assert!(!verdict.in_scope);
    assert_eq!(verdict.reason, "Query about 'weather' is not library-related");

    // "weather" precedes "travel" in the list, so it names the reason.
    let verdict = classify("travel plans depend on the weather", &catalog);
    assert!(!verdict.in_scope);
    assert!(verdict.reason.contains("'weather'"));
}

#[test]
fn book_and_author_always_accept() {
    let catalog = Catalog::builtin();
    assert!(classify("a book about cooking", &catalog).in_scope);
    assert!(classify("who is your favourite author", &catalog).in_scope);
}

#[test]
fn library_keyword_shields_foreign_topic() {
    let catalog = Catalog::builtin();
    // Library vocabulary is checked before the foreign list, so a mixed
    // query stays in scope.
    let verdict = classify("weather in the library", &catalog);
    assert!(verdict.in_scope);
}

#[test]
fn unrecognized_queries_are_rejected_generically() {
    let catalog = Catalog::builtin();
    let verdict = classify("zxcvbnm qwerty", &catalog);
    assert!(!verdict.in_scope);
    assert_eq!(verdict.reason, "Query does not appear to be library-related");
}

#[test]
fn empty_and_whitespace_queries_are_rejected() {
    let catalog = Catalog::builtin();
    assert!(!classify("", &catalog).in_scope);
    assert!(!classify("   \t  ", &catalog).in_scope);
}

#[test]
fn classification_is_idempotent() {
    let catalog = Catalog::builtin();
    for query in [
        "Is 'The Great Gatsby' available?",
        "What's the weather like today?",
        "",
        "how do I borrow a novel",
    ] {
        let first = classify(query, &catalog);
        let second = classify(query, &catalog);
        assert_eq!(first, second, "classify must be pure for {:?}", query);
    }
}
