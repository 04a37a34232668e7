// src/extract/markup.rs
//
// HTML and RTF handlers: both strip markup down to visible plain text.

use crate::utils::error::ExtractError;
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::Html;
use std::path::Path;

/// HTML: visible text only, with newline separators between block elements.
pub fn extract_html(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    let html = String::from_utf8_lossy(&bytes);
    Ok(html_to_text(&html))
}

pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut out = String::new();
    collect_visible_text(document.tree.root(), &mut out);

    // Collapse the blank lines left behind by nested block elements
    out.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_visible_text(node: NodeRef<Node>, out: &mut String) {
    match node.value() {
        Node::Element(element) => {
            let name = element.name();
            if matches!(name, "script" | "style" | "head" | "noscript" | "template") {
                return;
            }
            let block = is_block_element(name);
            if block && !out.ends_with('\n') && !out.is_empty() {
                out.push('\n');
            }
            for child in node.children() {
                collect_visible_text(child, out);
            }
            if block && !out.ends_with('\n') && !out.is_empty() {
                out.push('\n');
            }
        }
        Node::Text(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                if !out.is_empty() && !out.ends_with('\n') && !out.ends_with(' ') {
                    out.push(' ');
                }
                out.push_str(trimmed);
            }
        }
        _ => {
            for child in node.children() {
                collect_visible_text(child, out);
            }
        }
    }
}

fn is_block_element(name: &str) -> bool {
    matches!(
        name,
        "p" | "div"
            | "br"
            | "li"
            | "ul"
            | "ol"
            | "table"
            | "tr"
            | "td"
            | "th"
            | "section"
            | "article"
            | "header"
            | "footer"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
    )
}

/// RTF: strip control words, groups and escapes down to the document text.
pub fn extract_rtf(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    let rtf = String::from_utf8_lossy(&bytes);
    Ok(rtf_to_text(&rtf))
}

// RTF destination groups whose contents are metadata, not document text
const SKIP_DESTINATIONS: &[&str] = &[
    "fonttbl",
    "colortbl",
    "stylesheet",
    "info",
    "pict",
    "header",
    "footer",
];

pub fn rtf_to_text(rtf: &str) -> String {
    let mut out = String::new();
    let mut chars = rtf.chars().peekable();
    // Depth below which we are inside a skipped destination group (fonttbl etc.)
    let mut depth: i32 = 0;
    let mut skip_until: Option<i32> = None;

    while let Some(c) = chars.next() {
        match c {
            '{' => depth += 1,
            '}' => {
                if skip_until.map(|d| depth <= d).unwrap_or(false) {
                    skip_until = None;
                }
                depth -= 1;
            }
            '\\' => match chars.peek().copied() {
                Some('\\') | Some('{') | Some('}') => {
                    if let Some(literal) = chars.next() {
                        if skip_until.is_none() {
                            out.push(literal);
                        }
                    }
                }
                Some('\'') => {
                    // \'hh hex escape; keep printable latin-1
                    chars.next();
                    let hex: String = chars.by_ref().take(2).collect();
                    if skip_until.is_none() {
                        if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                            out.push(byte as char);
                        }
                    }
                }
                Some(d) if d.is_ascii_alphabetic() => {
                    let mut word = String::new();
                    while let Some(&c) = chars.peek() {
                        if !c.is_ascii_alphabetic() {
                            break;
                        }
                        word.push(c);
                        chars.next();
                    }
                    // optional signed numeric parameter
                    if chars.peek() == Some(&'-') {
                        chars.next();
                    }
                    while chars.peek().map_or(false, |c| c.is_ascii_digit()) {
                        chars.next();
                    }
                    // control words eat one trailing space as a delimiter
                    if chars.peek() == Some(&' ') {
                        chars.next();
                    }

                    if SKIP_DESTINATIONS.contains(&word.as_str()) && skip_until.is_none() {
                        skip_until = Some(depth);
                    } else if skip_until.is_none() {
                        match word.as_str() {
                            "par" | "line" | "sect" | "page" => out.push('\n'),
                            "tab" => out.push('\t'),
                            _ => {}
                        }
                    }
                }
                _ => {
                    // \* destination marker and other symbols: drop
                    chars.next();
                }
            },
            '\r' | '\n' => {}
            _ => {
                if skip_until.is_none() {
                    out.push(c);
                }
            }
        }
    }

    out.trim().to_string()
}
