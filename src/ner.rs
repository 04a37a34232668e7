// src/ner.rs
//
// Named-entity tagging is consumed as a black-box capability: the name
// heuristic only needs "give me the PERSON spans of this text". The trait is
// the contract; the built-in tagger is a deliberately simple default that can
// be swapped for a real model-backed implementation.

/// Tags spans of text with entity types. Only PERSON spans are consumed here.
pub trait EntityTagger: Send + Sync {
    /// Returns candidate PERSON spans in document order.
    fn person_spans(&self, text: &str) -> Vec<String>;
}

/// Default tagger: treats runs of capitalized alphabetic words as candidate
/// person names. Input text has already been stripped to letters and
/// whitespace by the caller, so this only has to find the runs.
#[derive(Debug, Default, Clone)]
pub struct HeuristicTagger {
    /// Longest run of words still considered a single name.
    max_span_words: usize,
}

impl HeuristicTagger {
    pub fn new() -> Self {
        Self { max_span_words: 6 }
    }

    fn is_name_word(word: &str) -> bool {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) if first.is_uppercase() => chars.all(|c| c.is_alphabetic()),
            _ => false,
        }
    }
}

impl EntityTagger for HeuristicTagger {
    fn person_spans(&self, text: &str) -> Vec<String> {
        let mut spans = Vec::new();
        let mut run: Vec<&str> = Vec::new();

        for word in text.split_whitespace() {
            if Self::is_name_word(word) && run.len() < self.max_span_words {
                run.push(word);
            } else {
                if run.len() >= 2 {
                    spans.push(run.join(" "));
                }
                run.clear();
            }
        }
        if run.len() >= 2 {
            spans.push(run.join(" "));
        }

        spans
    }
}
