#[cfg(test)]
#[path = "policy_test.rs"]
mod tests;

/// Maximum nesting depth before a quiz must branch to an unrelated concept.
pub const MAX_NEST_LEVEL: u32 = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Ask a deeper follow-up on the same concept.
    Nest,
    /// Switch to a fresh concept unrelated to anything already covered.
    Branch,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PolicyDecision {
    pub next_level: u32,
    pub directive: Directive,
}

impl PolicyDecision {
    /// The instruction handed to the next-question prompt.
    pub fn text(&self, concept: &str) -> String {
        if self.directive == Directive::Nest {
            return format!(
                "Nest deeper on '{concept}' (current level {level}).",
                level = self.next_level
            );
        }

        return format!("Branch to new topic '{concept}' (reset to level 0).");
    }
}

/// Pure depth policy: nest until the maximum level is reached, then branch
/// and reset. The only writer of a session's nest level.
pub struct NestPolicy {}

impl NestPolicy {
    pub fn decide(nest_level: u32) -> PolicyDecision {
        if nest_level < MAX_NEST_LEVEL {
            return PolicyDecision {
                next_level: nest_level + 1,
                directive: Directive::Nest,
            };
        }

        return PolicyDecision {
            next_level: 0,
            directive: Directive::Branch,
        };
    }
}
