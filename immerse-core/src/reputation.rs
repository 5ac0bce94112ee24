//! Reputation: the learner's standing with an individual NPC.
//!
//! Reputation lives in [-0.5, 1.0]: NPCs can turn cold but never fully
//! hostile.
//!
//! Tiers (lower bound inclusive):
//! - Warm      ≥ 0.5
//! - Friendly  [0.0, 0.5)
//! - Cool      [-0.3, 0.0)
//! - Cold      < -0.3

use serde::{Deserialize, Serialize};

/// Lowest reachable reputation.
pub const REPUTATION_MIN: f32 = -0.5;
/// Highest reachable reputation.
pub const REPUTATION_MAX: f32 = 1.0;

/// Clamp a raw reputation value into [`REPUTATION_MIN`, `REPUTATION_MAX`].
#[must_use]
pub fn clamp_reputation(value: f32) -> f32 {
    value.clamp(REPUTATION_MIN, REPUTATION_MAX)
}

/// Reputation tiers used by prompt composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReputationTier {
    /// Score ≥ 0.5: the NPC knows and likes the learner.
    Warm,
    /// Score 0.0–0.5: polite and welcoming.
    Friendly,
    /// Score -0.3–0.0: reserved.
    Cool,
    /// Score < -0.3: curt and unhelpful.
    Cold,
}

impl ReputationTier {
    /// Classify a score into a tier.
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        match score {
            s if s >= 0.5 => Self::Warm,
            s if s >= 0.0 => Self::Friendly,
            s if s >= -0.3 => Self::Cool,
            _ => Self::Cold,
        }
    }

    /// Canonical sentence describing how the NPC treats the learner.
    ///
    /// Used verbatim in downstream prompts.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Warm => {
                "Warm and familiar with the learner; offers extra help, patience and small talk."
            }
            Self::Friendly => {
                "Friendly and polite; treats the learner as a welcome newcomer."
            }
            Self::Cool => {
                "Polite but cool; keeps answers brief and expects the learner to make an effort."
            }
            Self::Cold => {
                "Cold and curt; gives minimal help until the learner rebuilds trust."
            }
        }
    }
}

/// The canonical behavior sentence for a reputation score.
#[must_use]
pub fn reputation_behavior_descriptor(reputation: f32) -> &'static str {
    ReputationTier::from_score(reputation).description()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reputation_tiers() {
        assert_eq!(ReputationTier::from_score(0.9), ReputationTier::Warm);
        assert_eq!(ReputationTier::from_score(0.5), ReputationTier::Warm);
        assert_eq!(ReputationTier::from_score(0.49), ReputationTier::Friendly);
        assert_eq!(ReputationTier::from_score(0.0), ReputationTier::Friendly);
        assert_eq!(ReputationTier::from_score(-0.01), ReputationTier::Cool);
        assert_eq!(ReputationTier::from_score(-0.3), ReputationTier::Cool);
        assert_eq!(ReputationTier::from_score(-0.31), ReputationTier::Cold);
    }

    #[test]
    fn descriptors_carry_tier_words() {
        assert!(reputation_behavior_descriptor(0.7).contains("Warm"));
        assert!(reputation_behavior_descriptor(0.2).contains("Friendly"));
        assert!(reputation_behavior_descriptor(-0.2).contains("cool"));
        assert!(reputation_behavior_descriptor(-0.5).contains("Cold"));
    }

    #[test]
    fn clamp_bounds() {
        assert!((clamp_reputation(5.0) - 1.0).abs() < f32::EPSILON);
        assert!((clamp_reputation(-5.0) + 0.5).abs() < f32::EPSILON);
        assert!((clamp_reputation(0.2) - 0.2).abs() < f32::EPSILON);
    }
}
