//! Relevance router - decides whether a query is about library services.
//!
//! Keyword heuristics only, no LLM involved. A title mention from the
//! catalog always wins; the foreign-topic list is consulted only when no
//! library vocabulary matched at all, so a mixed query like "book about
//! weather" is not rejected.

use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Vocabulary that marks a query as library business.
const LIBRARY_KEYWORDS: &[&str] = &[
    "book",
    "library",
    "borrow",
    "return",
    "member",
    "membership",
    "available",
    "timings",
    "hours",
    "reading",
    "author",
    "novel",
    "search",
    "recommend",
    "loan",
    "fine",
    "policy",
    "catalog",
];

/// Topics the desk explicitly does not handle. Scanned in order, first
/// match wins, and only when no library keyword was found.
const FOREIGN_TOPICS: &[&str] = &[
    "weather",
    "sports",
    "politics",
    "cooking",
    "recipe",
    "travel",
    "movies",
    "music",
    "gaming",
    "technology",
    "news",
    "science",
];

/// Outcome of relevance classification: verdict plus a reason suitable for
/// showing to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeVerdict {
    pub in_scope: bool,
    pub reason: String,
}

impl ScopeVerdict {
    fn accept(reason: String) -> Self {
        Self {
            in_scope: true,
            reason,
        }
    }

    fn reject(reason: String) -> Self {
        Self {
            in_scope: false,
            reason,
        }
    }
}

/// Classify a query against the catalog. Pure function of its inputs.
///
/// Priority order, first match wins:
/// 1. catalog title mentioned in the query (case-insensitive substring)
/// 2. library keyword count
/// 3. foreign topic scan, only when the keyword count is zero
/// 4. any keyword, or "book"/"author" -> in scope
/// 5. nothing recognized -> out of scope
pub fn classify(query: &str, catalog: &Catalog) -> ScopeVerdict {
    let q = query.to_lowercase();

    // Title mentions are the highest signal, even over foreign topics.
    for title in catalog.titles() {
        let t = title.to_lowercase();
        if q.contains(&t) {
            debug!("router: title mention '{}'", t);
            return ScopeVerdict::accept(format!("Query mentions book '{}'", t));
        }
    }

    let keyword_count = LIBRARY_KEYWORDS.iter().filter(|k| q.contains(*k)).count();

    if keyword_count == 0 {
        for topic in FOREIGN_TOPICS {
            if q.contains(topic) {
                debug!("router: foreign topic '{}'", topic);
                return ScopeVerdict::reject(format!(
                    "Query about '{}' is not library-related",
                    topic
                ));
            }
        }
    }

    if keyword_count >= 1 || q.contains("book") || q.contains("author") {
        debug!("router: {} library keyword(s)", keyword_count);
        return ScopeVerdict::accept("Query contains library-related content".to_string());
    }

    ScopeVerdict::reject("Query does not appear to be library-related".to_string())
}
