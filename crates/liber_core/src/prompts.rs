//! Prompt building for the external generator.
//!
//! The prompt is only composed after a positive relevance verdict, so it
//! can assume the query is library business.

use crate::catalog::Catalog;
use crate::identity::MemberContext;

/// Ground rules suffix (constant size, always included)
const DESK_RULES: &str = "\
Rules:
- Answer only from the catalog and hours listed above.
- Keep responses concise but informative.
- For availability questions, include the author and copy count.
- If the caller is not a registered member, mention that borrowing requires membership.";

/// Build the full prompt for one request: identity block, serialized
/// catalog, posted hours, ground rules, then the query.
pub fn desk_prompt(query: &str, member: &MemberContext, catalog: &Catalog) -> String {
    let member_line = match &member.member_id {
        Some(id) => format!("Caller: {} (member ID: {})", member.name, id),
        None => format!("Caller: {} (not registered)", member.name),
    };

    let holdings: Vec<String> = catalog
        .iter()
        .map(|b| format!("- '{}' by {}: {} copies", b.title, b.author, b.copies))
        .collect();

    format!(
        "You are a helpful library service-desk assistant. Be friendly and professional.\n\n\
         {}\n\n\
         Catalog:\n{}\n\n\
         Library hours: {}\n\n\
         {}\n\n\
         Caller's question: {}",
        member_line,
        holdings.join("\n"),
        catalog.opening_hours(),
        DESK_RULES,
        query
    )
}
