// ─────────────────────────────────────────────────────────────────────
// Neuro-Twin — Action Pattern Vocabulary
// ─────────────────────────────────────────────────────────────────────
//! Fixed vocabulary of behavioral actions and their canonical
//! (theta, beta) intent pairs, following arousal theory: stability
//! wants high theta / low beta, motor drive wants the opposite. A
//! design-level lookup table, not a learned mapping.

use serde::{Deserialize, Serialize};

/// Neutral intent used for unrecognized action names.
pub const NEUTRAL_INTENT: (f64, f64) = (0.5, 0.5);

/// A named behavioral action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionPattern {
    /// Stability focus: high theta, low beta.
    Stand,
    /// Rhythmic balance: moderate theta, moderate beta.
    Walk,
    /// High drive and responsiveness: low theta, high beta.
    Run,
}

impl ActionPattern {
    /// Parse the action vocabulary. Unknown names yield `None`; the
    /// controller maps those to [`NEUTRAL_INTENT`] rather than erroring.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "STAND" => Some(Self::Stand),
            "WALK" => Some(Self::Walk),
            "RUN" => Some(Self::Run),
            _ => None,
        }
    }

    /// Canonical (theta, beta) pair for this action.
    pub fn intent(self) -> (f64, f64) {
        match self {
            Self::Stand => (0.8, 0.1),
            Self::Walk => (0.4, 0.5),
            Self::Run => (0.1, 0.9),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vocabulary() {
        assert_eq!(ActionPattern::parse("STAND"), Some(ActionPattern::Stand));
        assert_eq!(ActionPattern::parse("WALK"), Some(ActionPattern::Walk));
        assert_eq!(ActionPattern::parse("RUN"), Some(ActionPattern::Run));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(ActionPattern::parse("FLY"), None);
        assert_eq!(ActionPattern::parse(""), None);
        // The vocabulary is case-sensitive.
        assert_eq!(ActionPattern::parse("run"), None);
    }

    #[test]
    fn test_intent_pairs() {
        assert_eq!(ActionPattern::Stand.intent(), (0.8, 0.1));
        assert_eq!(ActionPattern::Walk.intent(), (0.4, 0.5));
        assert_eq!(ActionPattern::Run.intent(), (0.1, 0.9));
    }
}
