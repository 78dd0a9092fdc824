//! Cumulative debate context.
//!
//! The context handed to each turn is plain text: every earlier turn is
//! appended as `Role (Round n): text`. Nothing is summarized or dropped.

use super::role::DebateRole;

/// Growing text transcript of a debate in progress
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one debater turn.
    ///
    /// Proponent turns open with a blank line so each round reads as a block.
    pub fn record(&mut self, role: DebateRole, round: u32, content: &str) {
        if role == DebateRole::Proponent {
            self.text.push('\n');
        }
        self.text.push_str(&format!(
            "{} (Round {}): {}\n",
            role.display_name(),
            round,
            content
        ));
    }

    /// Context for the next debater turn
    pub fn context(&self) -> &str {
        &self.text
    }

    /// Context handed to the judge
    pub fn judge_context(&self) -> String {
        format!("Full debate transcript:\n{}", self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_layout() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());

        transcript.record(DebateRole::Proponent, 1, "for");
        assert_eq!(transcript.context(), "\nProponent (Round 1): for\n");

        transcript.record(DebateRole::Opponent, 1, "against");
        assert_eq!(
            transcript.context(),
            "\nProponent (Round 1): for\nOpponent (Round 1): against\n"
        );
    }

    #[test]
    fn test_judge_context_wraps_full_text() {
        let mut transcript = Transcript::new();
        transcript.record(DebateRole::Proponent, 1, "a");
        transcript.record(DebateRole::Opponent, 1, "b");
        transcript.record(DebateRole::Proponent, 2, "c");
        transcript.record(DebateRole::Opponent, 2, "d");

        let judge = transcript.judge_context();
        assert!(judge.starts_with("Full debate transcript:\n"));
        assert!(judge.contains("Proponent (Round 2): c"));
        assert!(judge.ends_with("Opponent (Round 2): d\n"));
    }
}
