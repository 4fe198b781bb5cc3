//! Command handlers for liberctl.

use anyhow::Result;
use console::style;
use liber_core::{Catalog, Config, MemberContext, ServiceDesk};
use owo_colors::OwoColorize;

fn load_config(path: Option<&str>) -> Config {
    match path {
        Some(p) => Config::load_from(p).unwrap_or_else(|e| {
            eprintln!("{} {}", "[config]".yellow(), e);
            Config::default()
        }),
        None => Config::load(),
    }
}

/// Handle ask command: one request/response cycle.
pub async fn ask(config: Option<&str>, query: &str, name: &str, member_id: Option<&str>) -> Result<()> {
    let desk = ServiceDesk::from_config(&load_config(config));
    let caller = match member_id {
        Some(id) => MemberContext::member(name, id),
        None => MemberContext::guest(name),
    };

    let answer = desk.respond(query, &caller).await;

    println!("{} {}", "User:".cyan().bold(), query);
    println!("{} {}", "Desk:".green().bold(), answer);
    Ok(())
}

/// Handle demo command: replay the scripted walkthrough.
pub async fn demo(config: Option<&str>) -> Result<()> {
    let desk = ServiceDesk::from_config(&load_config(config));

    let alice = MemberContext::member("Alice", "M001");
    let bob = MemberContext::guest("Bob");

    let scenarios: &[(&str, &str, &MemberContext)] = &[
        ("Registered member searching for a book", "Is 'The Great Gatsby' available?", &alice),
        ("Registered member checking a second title", "Tell me about 'To Kill a Mockingbird'", &alice),
        ("Guest asking for opening hours", "What are the library timings?", &bob),
        ("Non-library question (guardrail)", "What's the weather like today?", &alice),
        ("Opening hours query", "What are the library hours?", &bob),
        ("Membership query from a guest", "How do I become a member?", &bob),
    ];

    println!("{}", style("LIBRARY SERVICE DESK").bold());
    println!("{}", style("=".repeat(60)).dim());

    for (i, (label, query, caller)) in scenarios.iter().enumerate() {
        println!();
        println!("{}", style(format!("--- Scenario {}: {} ---", i + 1, label)).dim());
        println!("{} {}", "User:".cyan().bold(), query);
        let answer = desk.respond(query, caller).await;
        println!("{} {}", "Desk:".green().bold(), answer);
    }

    Ok(())
}

/// Handle catalog command: list holdings, or look up one title.
pub fn catalog(title: Option<&str>) -> Result<()> {
    let catalog = Catalog::builtin();

    if let Some(wanted) = title {
        match catalog.search(wanted) {
            Some(book) => println!(
                "Book found: '{}' by {}. Available copies: {}",
                book.title.cyan(),
                book.author,
                book.copies
            ),
            None => println!("Book '{}' not found in the catalog.", wanted),
        }
        return Ok(());
    }

    println!("{}", style("CATALOG").bold());
    for book in catalog.iter() {
        let copies = if book.copies == 1 {
            "1 copy".to_string()
        } else {
            format!("{} copies", book.copies)
        };
        println!(
            "  {} by {} ({})",
            book.title.cyan(),
            book.author,
            copies.dimmed()
        );
    }
    Ok(())
}

/// Handle hours command.
pub fn hours() -> Result<()> {
    println!("{}", liber_core::OPENING_HOURS);
    Ok(())
}
