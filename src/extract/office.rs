// src/extract/office.rs
//
// DOCX, PPTX and ODT are all zip containers around XML. Each handler pulls
// the relevant content parts out of the archive and joins the text-bearing
// nodes with newlines.

use crate::utils::error::ExtractError;
use std::io::Cursor;
use std::path::Path;

/// DOCX: paragraph text (`w:p` / `w:t`) from word/document.xml, one paragraph
/// per line.
pub fn extract_docx(path: &Path) -> Result<String, ExtractError> {
    let xml = read_container_part(path, "word/document.xml")?;
    paragraphs_of(&xml, "p", "t")
}

/// PPTX: text of every text-bearing shape (`a:t`) across all slides, in slide
/// order.
pub fn extract_pptx(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Container(e.to_string()))?;

    let mut slide_names: Vec<String> = archive
        .file_names()
        .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
        .map(String::from)
        .collect();
    // slide10.xml would sort before slide2.xml lexicographically
    slide_names.sort_by_key(|name| slide_index(name));

    let mut parts = Vec::new();
    for name in &slide_names {
        let file = archive
            .by_name(name)
            .map_err(|e| ExtractError::Container(e.to_string()))?;
        let xml = std::io::read_to_string(file)?;
        let slide_text = paragraphs_of(&xml, "p", "t")?;
        if !slide_text.trim().is_empty() {
            parts.push(slide_text);
        }
    }

    Ok(parts.join("\n"))
}

/// ODT: paragraph elements (`text:p`) from content.xml.
pub fn extract_odt(path: &Path) -> Result<String, ExtractError> {
    let xml = read_container_part(path, "content.xml")?;
    paragraphs_of(&xml, "p", "")
}

fn read_container_part(path: &Path, part: &str) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Container(e.to_string()))?;
    let file = archive
        .by_name(part)
        .map_err(|e| ExtractError::Container(format!("{}: {}", part, e)))?;
    Ok(std::io::read_to_string(file)?)
}

/// Collects the text of every `para_tag` element, joined with newlines.
/// When `text_tag` is non-empty only text inside those child elements counts
/// (w:t / a:t); otherwise all descendant text nodes do (ODT).
fn paragraphs_of(xml: &str, para_tag: &str, text_tag: &str) -> Result<String, ExtractError> {
    let doc = roxmltree::Document::parse(xml).map_err(|e| ExtractError::Xml(e.to_string()))?;

    let mut paragraphs = Vec::new();
    for node in doc.descendants().filter(|n| n.tag_name().name() == para_tag) {
        // Nested paragraphs (tables in tables) would double-count text
        if node
            .ancestors()
            .skip(1)
            .any(|a| a.tag_name().name() == para_tag)
        {
            continue;
        }

        let mut text = String::new();
        for descendant in node.descendants() {
            if descendant.is_text() {
                let counts = text_tag.is_empty()
                    || descendant
                        .ancestors()
                        .any(|a| a.tag_name().name() == text_tag);
                if counts {
                    text.push_str(descendant.text().unwrap_or(""));
                }
            }
        }
        paragraphs.push(text);
    }

    Ok(paragraphs.join("\n"))
}

fn slide_index(name: &str) -> u32 {
    name.trim_start_matches("ppt/slides/slide")
        .trim_end_matches(".xml")
        .parse()
        .unwrap_or(u32::MAX)
}
