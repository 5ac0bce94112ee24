//! The declarative environment description, as supplied by the upstream
//! schema loader.
//!
//! Field names follow the external camelCase convention. The description has
//! already been validated and migrated upstream, so nothing here re-checks
//! structural integrity (dangling connections, duplicate ids, …). The
//! [`crate::adapter`] module maps these shapes onto the engine's own types.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::types::{
    EventDuration, InteractableKind, LocationKind, TimeOfDay, TriggerCategory,
};

/// A complete, validated environment description.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentDescription {
    /// Locations in declaration order. Order matters: it drives NPC
    /// placement and the learner's starting location.
    pub locations: Vec<LocationSpec>,
    /// NPC roster.
    #[serde(default)]
    pub npcs: Vec<NpcSpec>,
    /// Ambient event catalog.
    #[serde(default)]
    pub ambient_events: Vec<AmbientEventSpec>,
    /// Optional day/night schedule.
    #[serde(default)]
    pub time_system: Option<TimeSystemSpec>,
}

impl EnvironmentDescription {
    /// Parse a description from JSON.
    ///
    /// # Errors
    /// Returns `WorldError::Schema` if the JSON does not match the expected shape.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::WorldError::Schema(e.to_string()))
    }

    /// Load a description from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// External shape of a location.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSpec {
    /// Location id.
    pub id: String,
    /// Localized names, keyed by language code.
    #[serde(default)]
    pub name: BTreeMap<String, String>,
    /// Narrative description.
    #[serde(default)]
    pub description: String,
    /// Location kind.
    #[serde(rename = "type")]
    pub kind: LocationKind,
    /// Directly reachable location ids.
    #[serde(default)]
    pub connections: Vec<String>,
    /// NPCs present here.
    #[serde(default)]
    pub npcs: NpcPresenceSpec,
    /// Things the learner can interact with.
    #[serde(default)]
    pub interactables: Vec<InteractableSpec>,
    /// Sensory ambience text.
    #[serde(default)]
    pub ambience: String,
    /// Free-form unlock predicate, evaluated outside the engine.
    #[serde(default)]
    pub unlock_condition: Option<String>,
}

/// External shape of NPC presence at a location.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpcPresenceSpec {
    /// NPCs always assigned here.
    #[serde(default)]
    pub resident: Vec<String>,
    /// NPCs that appear here conditionally.
    #[serde(default)]
    pub transient: Vec<String>,
}

/// External shape of an interactable.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractableSpec {
    /// Interactable id.
    pub id: String,
    /// Localized names, keyed by language code.
    #[serde(default)]
    pub name: BTreeMap<String, String>,
    /// Interactable kind.
    #[serde(rename = "type")]
    pub kind: InteractableKind,
    /// Vocabulary domain tag.
    #[serde(default)]
    pub vocabulary_domain: String,
    /// Prompt shown when the learner interacts.
    #[serde(default)]
    pub interaction_prompt: String,
}

/// External shape of a roster entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpcSpec {
    /// NPC id.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Role in the scenario (barista, clerk, …).
    #[serde(default)]
    pub role: String,
    /// Big Five profile.
    #[serde(default)]
    pub personality: PersonalitySpec,
    /// Cultural overlay.
    #[serde(default)]
    pub cultural_overlay: CulturalOverlaySpec,
    /// Authored base patience, 0.0–1.0.
    #[serde(default = "default_half")]
    pub patience_level: f32,
}

/// External Big Five block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalitySpec {
    /// Openness.
    #[serde(default = "default_half")]
    pub openness: f32,
    /// Conscientiousness.
    #[serde(default = "default_half")]
    pub conscientiousness: f32,
    /// Extraversion.
    #[serde(default = "default_half")]
    pub extraversion: f32,
    /// Agreeableness.
    #[serde(default = "default_half")]
    pub agreeableness: f32,
    /// Neuroticism.
    #[serde(default = "default_half")]
    pub neuroticism: f32,
}

impl Default for PersonalitySpec {
    fn default() -> Self {
        Self {
            openness: 0.5,
            conscientiousness: 0.5,
            extraversion: 0.5,
            agreeableness: 0.5,
            neuroticism: 0.5,
        }
    }
}

/// External cultural overlay block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalOverlaySpec {
    /// Communicative directness.
    #[serde(default = "default_half")]
    pub communicative_directness: f32,
    /// Default formality.
    #[serde(default = "default_half")]
    pub formality_default: f32,
    /// Power-distance sensitivity.
    #[serde(default = "default_half")]
    pub power_distance_sensitivity: f32,
    /// Emotional expressiveness.
    #[serde(default = "default_half")]
    pub emotional_expressiveness: f32,
}

impl Default for CulturalOverlaySpec {
    fn default() -> Self {
        Self {
            communicative_directness: 0.5,
            formality_default: 0.5,
            power_distance_sensitivity: 0.5,
            emotional_expressiveness: 0.5,
        }
    }
}

/// External shape of an ambient event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbientEventSpec {
    /// Event id.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Trigger category.
    pub trigger_type: TriggerCategory,
    /// Condition interpreted by whoever fires the event.
    #[serde(default)]
    pub trigger_condition: String,
    /// What happens.
    #[serde(default)]
    pub description: String,
    /// NPC id → mood the NPC switches to.
    #[serde(default)]
    pub npc_reactions: BTreeMap<String, String>,
    /// Vocabulary domain tag.
    #[serde(default)]
    pub vocabulary_domain: String,
    /// Duration category.
    pub duration: EventDuration,
    /// Whether the learner may ignore the event.
    #[serde(default)]
    pub ignorable: bool,
}

/// External shape of the time system.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSystemSpec {
    /// Whether the clock runs at all.
    #[serde(default)]
    pub enabled: bool,
    /// Presentational day length.
    #[serde(default = "default_day_length")]
    pub day_length_minutes: u32,
    /// Starting time as authored. The engine always starts in the morning,
    /// so this is accepted and ignored.
    #[serde(default)]
    pub start_time: Option<TimeOfDay>,
    /// Whether the schedule gates NPC availability.
    #[serde(default, rename = "timeAffectsNPCs", alias = "timeAffectsNpcs")]
    pub time_affects_npcs: bool,
    /// Whether the schedule gates location access.
    #[serde(default)]
    pub time_affects_locations: bool,
    /// One slot per time of day.
    #[serde(default)]
    pub schedule: Vec<TimeSlotSpec>,
}

/// External shape of a schedule slot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotSpec {
    /// Which time of day this slot covers.
    pub time_of_day: TimeOfDay,
    /// NPC id → available during this slot.
    #[serde(default, rename = "npcAvailability", alias = "NPCAvailability")]
    pub npc_availability: BTreeMap<String, bool>,
    /// Location id → accessible during this slot.
    #[serde(default)]
    pub location_accessibility: BTreeMap<String, bool>,
}

fn default_half() -> f32 { 0.5 }
fn default_day_length() -> u32 { 60 }
