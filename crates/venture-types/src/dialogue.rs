//! Dialogue transcript types.
//!
//! A dialogue is a bounded, strictly alternating exchange between two
//! agents. The transcript records messages in conversation order and is
//! never mutated after the dialogue completes.

use serde::{Deserialize, Serialize};

/// One message in a dialogue, immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueTurn {
    /// Display name of the speaker (e.g., "CEO").
    pub speaker: String,
    pub message: String,
}

/// Ordered record of a dialogue's messages.
///
/// For a dialogue run with `turns` exchanges after the opening message,
/// the transcript holds exactly `2 * turns + 1` entries, alternating
/// strictly between the two participants, initiator first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<DialogueTurn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn in conversation order.
    pub fn push(&mut self, speaker: impl Into<String>, message: impl Into<String>) {
        self.turns.push(DialogueTurn {
            speaker: speaker.into(),
            message: message.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn turns(&self) -> &[DialogueTurn] {
        &self.turns
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&DialogueTurn> {
        self.turns.last()
    }

    /// Whether the speaker sequence strictly alternates between two names.
    pub fn alternates(&self) -> bool {
        self.turns
            .windows(2)
            .all(|pair| pair[0].speaker != pair[1].speaker)
    }
}

impl IntoIterator for Transcript {
    type Item = DialogueTurn;
    type IntoIter = std::vec::IntoIter<DialogueTurn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push("CEO", "opening");
        transcript.push("Developer", "reply");
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.turns()[0].speaker, "CEO");
        assert_eq!(transcript.last().unwrap().message, "reply");
    }

    #[test]
    fn test_alternates_detects_repeat_speaker() {
        let mut transcript = Transcript::new();
        transcript.push("CEO", "a");
        transcript.push("Developer", "b");
        transcript.push("Developer", "c");
        assert!(!transcript.alternates());
    }

    #[test]
    fn test_empty_transcript_alternates_vacuously() {
        assert!(Transcript::new().alternates());
    }
}
