// src/fields/name.rs

use crate::fields::NA;
use crate::ner::EntityTagger;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// How far into the document each stage is allowed to look
const MAX_LINES: usize = 120;
const HEADER_LINES: usize = 5;
const NER_LINES: usize = 80;
const FALLBACK_LINES: usize = 40;

// Role/section words that disqualify a line (or span) from being a name
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "experience", "summary", "profile", "developer", "engineer",
        "skills", "project", "resume", "education", "objective",
        "data", "analyst", "analysis", "curriculum", "intern", "manager",
        "company", "role", "contact", "email", "phone", "mobile",
        "address", "linkedin", "github",
    ]
    .into_iter()
    .collect()
});

static NON_ALPHA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").expect("Failed to compile NON_ALPHA_RE"));

static NOISY_CHAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9@#/$%&*<>]").expect("Failed to compile NOISY_CHAR_RE"));

/// Extracts a plausible person name from normalized text, or `"NA"`.
///
/// Ordered cascade, first success wins. Layered from most specific (explicit
/// "Name:" label) to least specific (crude line shape), each stage narrowing
/// false positives via the shared stop-word set.
pub fn extract_name(text: &str, tagger: &dyn EntityTagger) -> String {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(MAX_LINES)
        .collect();

    explicit_label(&lines)
        .or_else(|| header_line(&lines))
        .or_else(|| tagged_person(&lines, tagger))
        .or_else(|| clean_line_fallback(&lines))
        .unwrap_or_else(|| NA.to_string())
}

/// Stage 1: a line starting "name:", "name -" or "name " carries the answer
/// after the first colon or dash.
fn explicit_label(lines: &[&str]) -> Option<String> {
    for line in lines {
        let lower = line.to_lowercase();
        if !(lower.starts_with("name:") || lower.starts_with("name -") || lower.starts_with("name "))
        {
            continue;
        }
        let value = match line.find([':', '-']) {
            Some(pos) => &line[pos + 1..],
            // bare "name " prefix, take whatever follows the label word
            None => line[4..].trim_start(),
        };
        let value = value.trim();
        let words = value.split_whitespace().count();
        if (2..=6).contains(&words) {
            return Some(value.to_string());
        }
    }
    None
}

/// Stage 2: the name usually sits at the very top in its own short line.
fn header_line(lines: &[&str]) -> Option<String> {
    for line in lines.iter().take(HEADER_LINES) {
        let words: Vec<&str> = line.split_whitespace().collect();
        if !(2..=4).contains(&words.len()) {
            continue;
        }
        if line.chars().any(|c| c.is_ascii_digit()) {
            continue;
        }
        if words.iter().all(|w| !STOP_WORDS.contains(w.to_lowercase().as_str())) {
            return Some(line.to_string());
        }
    }
    None
}

/// Stage 3: entity recognition over the punctuation-stripped header block.
fn tagged_person(lines: &[&str], tagger: &dyn EntityTagger) -> Option<String> {
    let header: String = lines
        .iter()
        .take(NER_LINES)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let cleaned = NON_ALPHA_RE.replace_all(&header, " ");

    for span in tagger.person_spans(&cleaned) {
        let span = span.trim();
        let words: Vec<&str> = span.split_whitespace().collect();
        if (2..=6).contains(&words.len())
            && words.iter().all(|w| !STOP_WORDS.contains(w.to_lowercase().as_str()))
        {
            return Some(span.to_string());
        }
    }
    None
}

/// Stage 4: first short line that neither mentions a stop word nor carries
/// digits/symbols.
fn clean_line_fallback(lines: &[&str]) -> Option<String> {
    for line in lines.iter().take(FALLBACK_LINES) {
        let lower = line.to_lowercase();
        // substring match here, unlike stage 2's exact word match
        if STOP_WORDS.iter().any(|w| lower.contains(w)) {
            continue;
        }
        if NOISY_CHAR_RE.is_match(line) {
            continue;
        }
        let words = line.split_whitespace().count();
        if (2..=4).contains(&words) {
            return Some(line.to_string());
        }
    }
    None
}
