#[cfg(test)]
#[path = "meet_test.rs"]
mod tests;

/// Builds an instant meet link for a virtual interview. Pure URL
/// construction, no account or calendar integration involved.
pub struct Meet {}

impl Meet {
    pub fn link(title: &str) -> String {
        let mut title = title.trim();
        if title.is_empty() {
            title = "IntelliPrep Virtual Interview";
        }

        return format!(
            "https://meet.google.com/new?title={}",
            urlencoding::encode(title)
        );
    }
}
