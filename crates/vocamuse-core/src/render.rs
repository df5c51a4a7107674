//! Display lines for the terminal screens and the page-style listing.
//!
//! Everything here is a pure function of its arguments.

use vocamuse_types::{Entry, Quote};

use crate::query::Criteria;

pub const SEPARATOR: &str = "----------------------------------------";

const FAVORITE_MARKER: &str = "★";

pub fn main_menu() -> Vec<String> {
    [
        "=== VocaMuse ===",
        "1) add      add a new word",
        "2) words    browse saved words",
        "3) quote    add a quote",
        "4) quotes   browse saved quotes",
        "5) exit     leave VocaMuse",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Lines describing one entry, closed by a separator
pub fn entry_block(entry: &Entry) -> Vec<String> {
    let mut lines = Vec::with_capacity(5);

    let mut title = format!("{} - {} [{}]", entry.word, entry.translation, entry.word_type);
    if entry.favorite {
        title.push(' ');
        title.push_str(FAVORITE_MARKER);
    }
    lines.push(title);
    lines.push(format!("  Level: {}", entry.legacy_level()));

    if !entry.semantic_field.is_empty() {
        lines.push(format!("  Field: {}", entry.semantic_field));
    }
    if let Some(example) = entry.example.as_deref().filter(|e| !e.is_empty()) {
        lines.push(format!("  Example: \"{example}\""));
    }

    lines.push(SEPARATOR.to_string());
    lines
}

fn empty_listing_line(total: usize) -> String {
    if total == 0 {
        "No words saved yet.".to_string()
    } else {
        "No words match the active filters.".to_string()
    }
}

fn filter_summary(shown: usize, total: usize, criteria: &Criteria) -> Option<String> {
    if criteria.is_empty() {
        return None;
    }
    Some(format!(
        "Filters: {} ({shown} of {total})",
        criteria.describe()
    ))
}

/// Word listing for the terminal. `total` is the unfiltered collection size.
pub fn word_list(entries: &[&Entry], total: usize, criteria: &Criteria) -> Vec<String> {
    let mut lines = vec!["=== Saved words ===".to_string()];
    lines.extend(filter_summary(entries.len(), total, criteria));

    if entries.is_empty() {
        lines.push(empty_listing_line(total));
    } else {
        for entry in entries {
            lines.extend(entry_block(entry));
        }
    }

    lines
}

pub fn words_help() -> Vec<String> {
    [
        "Commands:",
        "  f, favorite <word>   toggle favorite",
        "  d, delete <word>     delete a word",
        "  e, edit <word>       edit a word",
        "  t, type <type>       filter by type (noun, verb, adjective, adverb)",
        "  s, field <text>      filter by semantic field",
        "  l, level <1-3>       filter by level",
        "  starred              toggle favorites-only filter",
        "  c, clear             clear filters",
        "  h, help              show the list again",
        "  b, back              back to the main menu",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// `1. "quote"` lines, or the empty-collection message
pub fn numbered_quotes(quotes: &[Quote]) -> Vec<String> {
    if quotes.is_empty() {
        return vec!["No quotes saved yet.".to_string()];
    }
    quotes
        .iter()
        .enumerate()
        .map(|(i, quote)| format!("{}. \"{}\"", i + 1, quote))
        .collect()
}

pub fn quote_list(quotes: &[Quote]) -> Vec<String> {
    let mut lines = vec!["=== Saved quotes ===".to_string()];
    lines.extend(numbered_quotes(quotes));
    lines.push("(press Enter to go back)".to_string());
    lines
}

/// Page-style listing addressed by id, as used by the non-interactive CLI
pub fn entry_page(entries: &[&Entry], total: usize, criteria: &Criteria) -> Vec<String> {
    let mut lines = Vec::new();
    lines.extend(filter_summary(entries.len(), total, criteria));

    if entries.is_empty() {
        lines.push(empty_listing_line(total));
        return lines;
    }

    for entry in entries {
        let marker = if entry.favorite { FAVORITE_MARKER } else { " " };
        lines.push(format!(
            "{marker} [{}] {} ({}) - {} / {}",
            entry.id, entry.word, entry.translation, entry.word_type, entry.semantic_field
        ));
        lines.push(format!("    Level: {}", entry.legacy_level()));
        if let Some(example) = entry.example.as_deref().filter(|e| !e.is_empty()) {
            lines.push(format!("    \"{example}\""));
        }
    }

    lines
}
