#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;

use once_cell::sync::Lazy;
use regex::Regex;

// Case-insensitive "now," marker the next-question prompt asks the model to
// lead its question with.
static NOW_MARKER: Lazy<Regex> = Lazy::new(|| return Regex::new(r"(?i)now,").unwrap());

// A period followed by optional whitespace and an uppercase letter. The split
// happens right after the period, so the uppercase letter is matched rather
// than looked ahead at.
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| return Regex::new(r"\.\s*[A-Z]").unwrap());

/// Splits a free-text model reply into a short compliment and the question
/// itself. Model prose is not reliably structured, so this is heuristic by
/// nature; precedence is fixed and the first matching rule wins.
pub struct ResponseParser {}

impl ResponseParser {
    pub fn parse(full_text: &str) -> (String, String) {
        let compliment: &str;
        let question: &str;

        if let Some(marker) = NOW_MARKER.find(full_text) {
            compliment = full_text[..marker.start()].trim();
            question = full_text[marker.start()..].trim();
        } else if let Some(boundary) = SENTENCE_BOUNDARY.find(full_text) {
            let split_idx = boundary.start() + 1;
            compliment = full_text[..split_idx].trim();
            question = full_text[split_idx..].trim();
        } else if let Some(idx) = full_text.find('?') {
            let split_idx = idx + 1;
            compliment = full_text[..split_idx].trim_end_matches('?').trim();
            question = full_text[split_idx..].trim();
        } else {
            compliment = "";
            question = full_text.trim();
        }

        let question = question.replace("`history:`", "Based on our discussion:");

        return (compliment.to_string(), question);
    }
}
