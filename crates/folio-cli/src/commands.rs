//! One-shot commands

use std::fmt::Write;

use anyhow::Result;
use folio_core::{Route, SearchEngine, SearchableItem, Section};

/// Run a single query and print the results
pub fn search(engine: &SearchEngine, query: &str, limit: usize, json: bool) -> Result<()> {
    let results = engine.search_with_limit(query, limit);
    tracing::debug!(query = %query, hits = results.len(), "One-shot search");

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", format_results(query, &results));
    }
    Ok(())
}

fn format_results(query: &str, results: &[SearchableItem]) -> String {
    if results.is_empty() {
        return format!("No results for \"{}\"\n", query.trim());
    }

    let mut out = String::new();
    for item in results {
        let badge = format!("[{}]", item.kind.badge());
        let _ = writeln!(out, "{:<10} {}  {}", badge, item.title, item.url);
        if !item.description.is_empty() {
            let _ = writeln!(out, "{:<10} {}", "", item.description);
        }
    }
    out
}

/// List every section with its shortcut digit and route
pub fn sections() {
    print!("{}", format_sections());
}

fn format_sections() -> String {
    let mut out = String::new();
    for (i, section) in Section::ALL.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}  {:<14} {}",
            i + 1,
            section.title(),
            Route::new(*section).url()
        );
    }
    out
}
