//! NPC Behavioral Variation Matrix: personality, mood, reputation and
//! culture blended into behavior modifiers.
//!
//! The matrix is a pure function. Given the same inputs it returns the same
//! [`NpcBehaviorModifiers`], and it never looks at world state. Downstream
//! prompt composition turns the modifiers into instructions such as
//! "keep replies short" or "wait longer before prompting the learner".
//!
//! Every weighted sum is clamped to [0, 1] on its own, so one term cannot
//! bleed into another. The coefficients are fixed; prompt text relies on the
//! relative ordering they produce.

use serde::{Deserialize, Serialize};

use crate::mood::Mood;
use crate::reputation::{REPUTATION_MAX, REPUTATION_MIN};
use crate::types::{BigFiveProfile, CulturalOverlay};

/// Shortest silence an NPC tolerates, in seconds.
pub const MIN_SILENCE_SECONDS: u32 = 3;
/// Longest silence an NPC tolerates, in seconds.
pub const MAX_SILENCE_SECONDS: u32 = 15;

/// Derived behavior vector for one NPC at one moment.
///
/// Recomputed on demand and never stored in the world state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NpcBehaviorModifiers {
    /// How long replies run (0 = terse, 1 = chatty).
    pub response_length: f32,
    /// Tolerance for learner mistakes and slowness.
    pub patience: f32,
    /// Willingness to rephrase, hint or translate.
    pub helpfulness: f32,
    /// How strictly the expected register is enforced.
    pub register_strictness: f32,
    /// Likelihood of starting new topics unprompted.
    pub topic_initiative: f32,
    /// How much emotion shows in replies.
    pub expressiveness: f32,
    /// Seconds of learner silence before the NPC steps in (3–15).
    pub silence_tolerance_seconds: u32,
    /// Tendency to escalate friction (complain, call a manager, walk away).
    pub escalation_tendency: f32,
}

/// Compute the behavior modifiers for an NPC.
///
/// * `reputation`: reputation with the learner, in [-0.5, 1.0].
/// * `patience_level`: the NPC's authored base patience, in [0, 1].
#[must_use]
pub fn compute_npc_behavior(
    personality: &BigFiveProfile,
    mood: &Mood,
    reputation: f32,
    culture: &CulturalOverlay,
    patience_level: f32,
) -> NpcBehaviorModifiers {
    let mood_val = mood.valence();
    let rep_norm = normalize_reputation(reputation);

    let response_length = clamp01(
        personality.extraversion * 0.5
            + (0.5 + mood_val * 0.3)
            + culture.emotional_expressiveness * 0.2,
    );

    let patience = clamp01(
        personality.agreeableness * 0.4
            + rep_norm * 0.3
            + (0.5 + mood_val * 0.2)
            + patience_level * 0.1,
    );

    let helpfulness = clamp01(
        personality.agreeableness * 0.35 + personality.openness * 0.25 + rep_norm * 0.4,
    );

    let register_strictness = clamp01(
        personality.conscientiousness * 0.4
            + (0.5 - mood_val * 0.2)
            + culture.formality_default * 0.3,
    );

    let topic_initiative = clamp01(
        personality.extraversion * 0.4
            + personality.openness * 0.3
            + (0.5 + mood_val * 0.2)
            + rep_norm * 0.1,
    );

    let expressiveness = clamp01(
        personality.extraversion * 0.3
            + culture.emotional_expressiveness * 0.5
            + (0.5 + mood_val * 0.2),
    );

    let escalation_tendency = clamp01(
        (1.0 - personality.agreeableness) * 0.4
            + culture.power_distance_sensitivity * 0.3
            + (-mood_val).max(0.0) * 0.3,
    );

    NpcBehaviorModifiers {
        response_length,
        patience,
        helpfulness,
        register_strictness,
        topic_initiative,
        expressiveness,
        silence_tolerance_seconds: silence_tolerance(patience),
        escalation_tendency,
    }
}

/// Map reputation from [-0.5, 1.0] onto [0, 1].
#[must_use]
pub fn normalize_reputation(reputation: f32) -> f32 {
    (reputation - REPUTATION_MIN) / (REPUTATION_MAX - REPUTATION_MIN)
}

// `patience` is already clamped, so the result stays within 3–15.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn silence_tolerance(patience: f32) -> u32 {
    let seconds = (3.0 + patience * 12.0).round() as u32;
    seconds.clamp(MIN_SILENCE_SECONDS, MAX_SILENCE_SECONDS)
}

fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}
