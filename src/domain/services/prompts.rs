#[cfg(test)]
#[path = "prompts_test.rs"]
mod tests;

use crate::domain::models::Turn;

/// How many characters of a document are fed to the summarizer.
pub const SUMMARY_INPUT_LIMIT: usize = 4000;

/// Every prompt sent to the generative backend. Kept in one place so the
/// quiz-master voice stays consistent across calls.
pub struct Prompts {}

impl Prompts {
    fn base_context(document_summary: &str) -> String {
        if document_summary.is_empty() {
            return "".to_string();
        }

        return format!("Document summary: {document_summary}. ");
    }

    /// The last few turns as plain Q/A lines, prefixed with the document
    /// summary when one exists.
    pub fn recent_context(document_summary: &str, history: &[Turn]) -> String {
        let start = history.len().saturating_sub(3);
        let lines = history[start..]
            .iter()
            .map(|turn| {
                return format!("Q: {} A: {}", turn.question, turn.user_answer);
            })
            .collect::<Vec<String>>();

        return format!(
            "{}{}",
            Prompts::base_context(document_summary),
            lines.join("\n")
        );
    }

    pub fn opener(topic: &str, document_summary: &str) -> String {
        let mut base_context = "".to_string();
        if !document_summary.is_empty() {
            base_context = format!("Document summary (if any): {document_summary}. ");
        }

        return format!(
            "You are a quiz master on {topic} programming. {base_context}Start with a broad, engaging opener question for beginners. Begin with a short compliment like 'Welcome!' then the question. Keep concise."
        );
    }

    pub fn judge(
        topic: &str,
        document_summary: &str,
        history: &[Turn],
        question: &str,
        answer: &str,
    ) -> String {
        let context = Prompts::recent_context(document_summary, history);

        return format!(
            "Topic: {topic}. {context} Current Q: {question} User A: {answer}. Is it correct (yes/no)? If no, brief explanation. Output: 'Correct!' or 'Incorrect: [explanation]'."
        );
    }

    pub fn extract(topic: &str, document_summary: &str, answer: &str) -> String {
        return format!(
            "{}From user answer '{answer}' on {topic}, extract 1 key technical keyword/phrase/acronym. Prioritize unexplored terms. Output just the keyword.",
            Prompts::base_context(document_summary)
        );
    }

    /// The branch-path extraction: the full history, concepts included, so the
    /// model can avoid everything already nested on.
    pub fn branch(document_summary: &str, history: &[Turn]) -> String {
        let lines = history
            .iter()
            .map(|turn| {
                return format!(
                    "Q: {} A: {} Concept: {}",
                    turn.question, turn.user_answer, turn.concept
                );
            })
            .collect::<Vec<String>>();

        return format!(
            "{}{}, suggest 1 fresh, unrelated concept/keyword not previously nested. Output just the keyword.",
            Prompts::base_context(document_summary),
            lines.join("\n")
        );
    }

    pub fn next_question(
        topic: &str,
        document_summary: &str,
        directive: &str,
        concept: &str,
        history: &[Turn],
    ) -> String {
        let base_context = Prompts::base_context(document_summary);
        let context = Prompts::recent_context(document_summary, history);

        return format!(
            "You are a quiz master on {topic}. {base_context}{directive} Respond engagingly: Start with a compliment on their previous answer, then 'Now, [follow-up question on '{concept}']?' Use history: {context}. Keep concise, separate clearly."
        );
    }

    pub fn summarize(topic: &str, text: &str) -> String {
        let truncated = text.chars().take(SUMMARY_INPUT_LIMIT).collect::<String>();

        return format!(
            "Summarize the key points from this document text (focus on {topic} if provided): {truncated}"
        );
    }
}
