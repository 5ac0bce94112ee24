//! Mood Dynamics: transient NPC moods, their valence, transitions and decay.
//!
//! Mood is stored as free text in the environment description because
//! ambient-event reactions may inject any string. [`Mood`] keeps the closed
//! set the behavior matrix understands and carries everything else in
//! [`Mood::Custom`], which has zero valence.
//!
//! Transitions are a fixed table keyed by [`MoodTrigger`]. Each trigger picks
//! one of two next moods depending on a personality reactivity score:
//!
//!   reactivity = 0.5 + trait × 0.5,   above 0.7 → first mood, else second
//!
//! Nothing here reads or writes world state; callers write the result back
//! with [`crate::WorldState::with_npc_mood`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::BigFiveProfile;

/// Decay progress per elapsed turn. A non-neutral mood resets after 10 turns.
pub const MOOD_DECAY_PER_TURN: f64 = 0.1;

/// Reactivity above this threshold selects the stronger reaction.
const REACTION_THRESHOLD: f32 = 0.7;

/// An NPC's transient mood.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    /// Baseline; every NPC starts here.
    #[default]
    Neutral,
    /// Mildly happy with the learner.
    Pleased,
    /// Openly friendly.
    Warm,
    /// Entertained.
    Amused,
    /// Occupied with something else.
    Busy,
    /// Worried.
    Anxious,
    /// Wants the exchange to move faster.
    Impatient,
    /// Annoyed.
    Irritated,
    /// Distant and curt.
    Cold,
    /// Overwhelmed.
    Panicking,
    /// Any mood outside the closed set, kept verbatim.
    Custom(String),
}

impl Mood {
    /// Scalar valence in [-0.6, 0.4]. Custom moods map to 0.0.
    #[must_use]
    pub fn valence(&self) -> f32 {
        match self {
            Self::Neutral | Self::Custom(_) => 0.0,
            Self::Pleased => 0.3,
            Self::Warm => 0.4,
            Self::Amused => 0.2,
            Self::Busy => -0.1,
            Self::Anxious => -0.2,
            Self::Impatient => -0.3,
            Self::Irritated => -0.4,
            Self::Cold => -0.5,
            Self::Panicking => -0.6,
        }
    }

    /// Whether this is the baseline mood.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        matches!(self, Self::Neutral)
    }

    /// The mood's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Neutral => "neutral",
            Self::Pleased => "pleased",
            Self::Warm => "warm",
            Self::Amused => "amused",
            Self::Busy => "busy",
            Self::Anxious => "anxious",
            Self::Impatient => "impatient",
            Self::Irritated => "irritated",
            Self::Cold => "cold",
            Self::Panicking => "panicking",
            Self::Custom(s) => s,
        }
    }
}

impl From<&str> for Mood {
    fn from(s: &str) -> Self {
        match s {
            "neutral" => Self::Neutral,
            "pleased" => Self::Pleased,
            "warm" => Self::Warm,
            "amused" => Self::Amused,
            "busy" => Self::Busy,
            "anxious" => Self::Anxious,
            "impatient" => Self::Impatient,
            "irritated" => Self::Irritated,
            "cold" => Self::Cold,
            "panicking" => Self::Panicking,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for Mood {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Mood> for String {
    fn from(mood: Mood) -> Self {
        match mood {
            Mood::Custom(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Events that can shift an NPC's mood during an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoodTrigger {
    /// The learner got their message across.
    SuccessfulCommunication,
    /// The learner used the wrong register (too casual, too formal).
    RegisterViolation,
    /// The learner could not be understood.
    CommunicationFailure,
    /// The learner broke a cultural norm.
    CulturalInsensitivity,
    /// The learner stalled or went silent.
    LearnerHesitation,
    /// The learner tried to fix an earlier mistake.
    RepairAttempt,
    /// Something unpleasant happened nearby.
    AmbientEventNegative,
    /// Something pleasant happened nearby.
    AmbientEventPositive,
}

impl MoodTrigger {
    /// All triggers.
    pub const ALL: [Self; 8] = [
        Self::SuccessfulCommunication,
        Self::RegisterViolation,
        Self::CommunicationFailure,
        Self::CulturalInsensitivity,
        Self::LearnerHesitation,
        Self::RepairAttempt,
        Self::AmbientEventNegative,
        Self::AmbientEventPositive,
    ];

    /// Kebab-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuccessfulCommunication => "successful-communication",
            Self::RegisterViolation => "register-violation",
            Self::CommunicationFailure => "communication-failure",
            Self::CulturalInsensitivity => "cultural-insensitivity",
            Self::LearnerHesitation => "learner-hesitation",
            Self::RepairAttempt => "repair-attempt",
            Self::AmbientEventNegative => "ambient-event-negative",
            Self::AmbientEventPositive => "ambient-event-positive",
        }
    }

    /// The mood this trigger leads to for a given personality.
    #[must_use]
    pub fn next_mood(self, personality: &BigFiveProfile) -> Mood {
        let (trait_value, strong, mild) = match self {
            Self::SuccessfulCommunication => (personality.agreeableness, Mood::Warm, Mood::Pleased),
            Self::RegisterViolation => (personality.neuroticism, Mood::Irritated, Mood::Cold),
            Self::CommunicationFailure => {
                (1.0 - personality.agreeableness, Mood::Impatient, Mood::Amused)
            }
            Self::CulturalInsensitivity => {
                (personality.conscientiousness, Mood::Cold, Mood::Irritated)
            }
            Self::LearnerHesitation => (personality.extraversion, Mood::Impatient, Mood::Neutral),
            Self::RepairAttempt => (personality.agreeableness, Mood::Pleased, Mood::Neutral),
            Self::AmbientEventNegative => (personality.neuroticism, Mood::Panicking, Mood::Anxious),
            Self::AmbientEventPositive => (personality.extraversion, Mood::Amused, Mood::Pleased),
        };

        if reactivity(trait_value) > REACTION_THRESHOLD {
            strong
        } else {
            mild
        }
    }
}

impl fmt::Display for MoodTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodTrigger {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown mood trigger: {s}"))
    }
}

fn reactivity(trait_value: f32) -> f32 {
    0.5 + trait_value * 0.5
}

/// Compute the mood that follows `event` for an NPC with `personality`.
///
/// Unrecognized events leave the mood unchanged.
#[must_use]
pub fn compute_mood_shift(current: &Mood, event: &str, personality: &BigFiveProfile) -> Mood {
    match event.parse::<MoodTrigger>() {
        Ok(trigger) => trigger.next_mood(personality),
        Err(_) => current.clone(),
    }
}

/// Whether a mood held for `turns_elapsed` turns should reset to neutral.
#[must_use]
pub fn should_decay_mood(current: &Mood, turns_elapsed: u32) -> bool {
    should_decay_mood_at_rate(current, turns_elapsed, MOOD_DECAY_PER_TURN)
}

/// [`should_decay_mood`] with an explicit per-turn decay rate.
#[must_use]
pub fn should_decay_mood_at_rate(current: &Mood, turns_elapsed: u32, rate_per_turn: f64) -> bool {
    if current.is_neutral() {
        return false;
    }
    f64::from(turns_elapsed) * rate_per_turn >= 1.0
}
