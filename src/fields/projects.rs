// src/fields/projects.rs

use crate::fields::NA;

// Headings that end a captured section
const STOP_HEADINGS: [&str; 6] = [
    "education",
    "experience",
    "summary",
    "contact",
    "project",
    "skills",
];

// Captured lines shorter than this are separators or bullets, not projects
const MIN_PROJECT_LINE: usize = 5;

/// Extracts the project list from normalized text; `["NA"]` when nothing
/// matches.
///
/// Primary strategy: capture the lines under a heading containing "project"
/// until the next section heading. Fallback: every line anywhere in the text
/// that mentions "project".
pub fn extract_projects(text: &str) -> Vec<String> {
    let section = capture_section(text, "project");
    if !section.is_empty() {
        let cleaned: Vec<String> = section
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| l.len() > MIN_PROJECT_LINE)
            .collect();
        if !cleaned.is_empty() {
            return cleaned;
        }
        return vec![NA.to_string()];
    }

    let found: Vec<String> = text
        .lines()
        .filter(|l| l.to_lowercase().contains("project"))
        .map(|l| l.trim().to_string())
        .collect();

    if found.is_empty() {
        vec![NA.to_string()]
    } else {
        found
    }
}

/// Lines between a heading containing `key` and the next section heading.
/// Lines re-mentioning the key re-arm capture instead of stopping it.
fn capture_section<'a>(text: &'a str, key: &str) -> Vec<&'a str> {
    let mut capture = false;
    let mut result = Vec::new();

    for line in text.lines() {
        let lower = line.to_lowercase();

        if lower.contains(key) {
            capture = true;
            continue;
        }

        if capture && STOP_HEADINGS.iter().any(|stop| lower.contains(stop)) {
            break;
        }

        if capture {
            result.push(line.trim());
        }
    }

    result
}
