//! Verdict extraction from free-form judge output.
//!
//! Pure text matching, no I/O. The judge is asked to write
//! `Winner: PROPONENT` or `Winner: OPPONENT`; anything else is
//! [`Winner::Unknown`].

use serde::{Deserialize, Serialize};

const PROPONENT_MARKER: &str = "winner: proponent";
const OPPONENT_MARKER: &str = "winner: opponent";

/// Outcome of a debate as declared by the judge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Winner {
    Proponent,
    Opponent,
    #[default]
    Unknown,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::Proponent => "PROPONENT",
            Winner::Opponent => "OPPONENT",
            Winner::Unknown => "UNKNOWN",
        }
    }

    pub fn is_decisive(&self) -> bool {
        !matches!(self, Winner::Unknown)
    }

    /// Parse the judge's raw text.
    ///
    /// Case-insensitive substring match on the two literal markers. The
    /// proponent marker is checked first, so text naming both sides resolves
    /// to [`Winner::Proponent`].
    ///
    /// ```
    /// use debate_domain::Winner;
    ///
    /// assert_eq!(Winner::from_judge_text("Winner: Proponent\nStrong case."), Winner::Proponent);
    /// assert_eq!(Winner::from_judge_text("**Winner: OPPONENT**"), Winner::Opponent);
    /// assert_eq!(Winner::from_judge_text("The winner is the opponent"), Winner::Unknown);
    /// ```
    pub fn from_judge_text(text: &str) -> Winner {
        let lowered = text.to_lowercase();
        if lowered.contains(PROPONENT_MARKER) {
            Winner::Proponent
        } else if lowered.contains(OPPONENT_MARKER) {
            Winner::Opponent
        } else {
            Winner::Unknown
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
