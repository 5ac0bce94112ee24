//! Core type definitions shared by the schema, the world state and the
//! behavior matrix.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Identity Types
// ---------------------------------------------------------------------------

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Wrap a raw identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }
    };
}

string_id! {
    /// Identifier of a location in the world graph.
    LocationId
}

string_id! {
    /// Identifier of an NPC from the environment roster.
    NpcId
}

string_id! {
    /// Identifier of an ambient event in the world's catalog.
    EventId
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// Time of day. The cycle is fixed: morning → afternoon → evening → night → morning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// First slot of the day; every world starts here.
    #[default]
    Morning,
    /// Second slot.
    Afternoon,
    /// Third slot.
    Evening,
    /// Last slot before wrapping back to morning.
    Night,
}

impl TimeOfDay {
    /// All values in cycle order.
    pub const CYCLE: [Self; 4] = [Self::Morning, Self::Afternoon, Self::Evening, Self::Night];

    /// The next time of day, wrapping after night.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Morning => Self::Afternoon,
            Self::Afternoon => Self::Evening,
            Self::Evening => Self::Night,
            Self::Night => Self::Morning,
        }
    }

    /// Lowercase name, as used in schedules and trigger conditions.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CYCLE
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown time of day: {s}"))
    }
}

// ---------------------------------------------------------------------------
// Location & Interactable kinds
// ---------------------------------------------------------------------------

/// Social character of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    /// Open to anyone (streets, plazas, stations).
    Public,
    /// Restricted to invited people (homes, staff rooms).
    Private,
    /// Shops, cafés, markets.
    Commercial,
    /// Offices, schools, clinics.
    Institutional,
}

/// What sort of thing an interactable is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractableKind {
    /// A physical object.
    Object,
    /// A posted sign or notice.
    Sign,
    /// A menu or price list.
    Menu,
    /// A form, letter or other document.
    Document,
    /// A machine or appliance.
    Device,
}

// ---------------------------------------------------------------------------
// Ambient event classification
// ---------------------------------------------------------------------------

/// Who is expected to fire an ambient event.
///
/// The engine never evaluates the accompanying trigger condition; the
/// category only tells the issuer which condition language applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerCategory {
    /// Fired when the clock reaches a time of day.
    TimeBased,
    /// Fired when a reputation threshold is crossed.
    ReputationGated,
    /// Fired by chance.
    Random,
    /// Fired by quest or curriculum progress.
    QuestTriggered,
}

/// How long an ambient event stays in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventDuration {
    /// Applies its reactions and is immediately over; never becomes active.
    Instant,
    /// Active until the scene ends and the event is cleared.
    Scene,
    /// Active until explicitly cleared.
    Persistent,
}

// ---------------------------------------------------------------------------
// Personality & Culture
// ---------------------------------------------------------------------------

/// Big Five personality profile. Each trait ranges 0.0–1.0 and is fixed for
/// the life of a world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BigFiveProfile {
    /// Curiosity and willingness to engage with new topics.
    pub openness: f32,
    /// Orderliness; drives how strictly register is enforced.
    pub conscientiousness: f32,
    /// Talkativeness and initiative.
    pub extraversion: f32,
    /// Warmth and tolerance toward the learner.
    pub agreeableness: f32,
    /// Emotional reactivity to negative events.
    pub neuroticism: f32,
}

impl BigFiveProfile {
    /// Create a profile, clamping every trait to [0, 1].
    #[must_use]
    pub fn new(
        openness: f32,
        conscientiousness: f32,
        extraversion: f32,
        agreeableness: f32,
        neuroticism: f32,
    ) -> Self {
        Self {
            openness: openness.clamp(0.0, 1.0),
            conscientiousness: conscientiousness.clamp(0.0, 1.0),
            extraversion: extraversion.clamp(0.0, 1.0),
            agreeableness: agreeableness.clamp(0.0, 1.0),
            neuroticism: neuroticism.clamp(0.0, 1.0),
        }
    }
}

impl Default for BigFiveProfile {
    fn default() -> Self {
        Self::new(0.5, 0.5, 0.5, 0.5, 0.5)
    }
}

/// Cultural behavioral overlay. Each scalar ranges 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CulturalOverlay {
    /// How bluntly the NPC states things (0 = indirect, 1 = direct).
    pub communicative_directness: f32,
    /// Default register (0 = casual, 1 = formal).
    pub formality_default: f32,
    /// Sensitivity to status and hierarchy.
    pub power_distance_sensitivity: f32,
    /// How openly emotion is shown.
    pub emotional_expressiveness: f32,
}

impl CulturalOverlay {
    /// Create an overlay, clamping every scalar to [0, 1].
    #[must_use]
    pub fn new(
        communicative_directness: f32,
        formality_default: f32,
        power_distance_sensitivity: f32,
        emotional_expressiveness: f32,
    ) -> Self {
        Self {
            communicative_directness: communicative_directness.clamp(0.0, 1.0),
            formality_default: formality_default.clamp(0.0, 1.0),
            power_distance_sensitivity: power_distance_sensitivity.clamp(0.0, 1.0),
            emotional_expressiveness: emotional_expressiveness.clamp(0.0, 1.0),
        }
    }
}

impl Default for CulturalOverlay {
    fn default() -> Self {
        Self::new(0.5, 0.5, 0.5, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_of_day_cycles_and_wraps() {
        let mut t = TimeOfDay::Morning;
        let mut seen = vec![t];
        for _ in 0..4 {
            t = t.next();
            seen.push(t);
        }
        assert_eq!(
            seen,
            vec![
                TimeOfDay::Morning,
                TimeOfDay::Afternoon,
                TimeOfDay::Evening,
                TimeOfDay::Night,
                TimeOfDay::Morning,
            ]
        );
    }

    #[test]
    fn time_of_day_parses_case_insensitively() {
        assert_eq!("Evening".parse::<TimeOfDay>(), Ok(TimeOfDay::Evening));
        assert_eq!(" night ".parse::<TimeOfDay>(), Ok(TimeOfDay::Night));
        assert!("dusk".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn ids_compare_against_str() {
        let id = LocationId::from("cafe");
        assert_eq!(&id, "cafe");
        assert_eq!(id.to_string(), "cafe");
    }

    #[test]
    fn profile_constructor_clamps() {
        let p = BigFiveProfile::new(1.5, -0.2, 0.3, 0.4, 2.0);
        assert!((p.openness - 1.0).abs() < f32::EPSILON);
        assert!(p.conscientiousness.abs() < f32::EPSILON);
        assert!((p.neuroticism - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn trigger_category_uses_kebab_case() {
        let json = serde_json::to_string(&TriggerCategory::ReputationGated).expect("serialize");
        assert_eq!(json, "\"reputation-gated\"");
    }
}
