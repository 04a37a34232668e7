// src/fields/skills.rs

use crate::fields::NA;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// Window taken after a matched skills heading
const SECTION_WINDOW: usize = 400;

// Heading patterns tried in order; first hit wins
static SECTION_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"skills\s*[:\-]?",
        r"technical skills\s*[:\-]?",
        r"key skills\s*[:\-]?",
        r"skills & tools\s*[:\-]?",
        r"expertise\s*[:\-]?",
    ]
    .iter()
    .filter_map(|pat| Regex::new(pat).ok())
    .collect()
});

// Headings that end the skills section
static BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(education|projects?|experience|work|summary)\s*[:\-]?")
        .expect("Failed to compile BOUNDARY_RE")
});

static CLEANUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9+.#/\s-]").expect("Failed to compile CLEANUP_RE"));

static TOKEN_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s,;:/\|\-\n]+").expect("Failed to compile TOKEN_SPLIT_RE"));

static PROG_LANGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "python", "java", "javascript", "typescript", "c", "c++", "c#", "go", "php", "ruby",
        "swift", "kotlin",
    ]
    .into_iter()
    .collect()
});

static FRAMEWORKS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "react", "next.js", "node.js", "express", "django", "flask", "spring", "angular", "vue",
        "pandas", "numpy", "matplotlib", "pytorch", "tensorflow", "sklearn", "selenium",
    ]
    .into_iter()
    .collect()
});

static TOOLS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git", "github", "gitlab",
        "terraform",
    ]
    .into_iter()
    .collect()
});

static DATABASES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "mysql", "postgres", "postgresql", "sqlite", "oracle", "mongodb", "redis", "firebase",
        "mssql",
    ]
    .into_iter()
    .collect()
});

/// Extracts the skill list from normalized text; `["NA"]` when nothing matches.
///
/// Locates a skills heading (whole text as fallback), truncates at the next
/// section boundary, tokenizes, and classifies tokens against the fixed
/// vocabularies plus the dynamic rule. Result order follows set iteration and
/// is deliberately not stabilized.
pub fn extract_skills(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![NA.to_string()];
    }

    let lower = text.to_lowercase();

    let mut section = "";
    for re in SECTION_RES.iter() {
        if let Some(m) = re.find(&lower) {
            let start = m.end();
            let end = (start + SECTION_WINDOW).min(lower.len());
            section = slice_at_char_boundary(&lower, start, end);
            break;
        }
    }
    if section.is_empty() {
        section = &lower;
    }

    // Cut at the first boundary heading (education, experience, ...)
    if let Some(m) = BOUNDARY_RE.find(section) {
        section = &section[..m.start()];
    }

    let cleaned = CLEANUP_RE.replace_all(section, " ");

    let mut skills: HashSet<String> = HashSet::new();
    for token in TOKEN_SPLIT_RE.split(&cleaned) {
        let token = token.trim();
        if token.len() < 2 {
            continue;
        }
        if PROG_LANGS.contains(token)
            || FRAMEWORKS.contains(token)
            || TOOLS.contains(token)
            || DATABASES.contains(token)
            || dynamic_rule(token)
        {
            skills.insert(token.to_string());
        }
    }

    if skills.is_empty() {
        return vec![NA.to_string()];
    }

    skills
        .into_iter()
        .map(|s| {
            if s.contains(['+', '#', '.']) {
                s
            } else {
                title_case(&s)
            }
        })
        .collect()
}

/// Catch-all for tokens outside the vocabularies. Known imprecision: ordinary
/// digit-bearing or short all-caps tokens also match; tunable, kept as-is.
fn dynamic_rule(token: &str) -> bool {
    const MARKERS: [&str; 6] = ["+", "#", ".", "js", "sql", "api"];
    MARKERS.iter().any(|m| token.contains(m))
        || token.chars().any(|c| c.is_ascii_digit())
        || (token.len() > 1
            && token.len() <= 6
            && token.chars().any(|c| c.is_alphabetic())
            && !token.chars().any(|c| c.is_lowercase()))
}

fn title_case(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut at_word_start = true;
    for c in token.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

// Regex match offsets are byte positions, but the +400 window can land inside
// a multi-byte character.
fn slice_at_char_boundary(text: &str, start: usize, end: usize) -> &str {
    let mut end = end;
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    &text[start..end]
}
