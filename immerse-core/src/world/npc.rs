//! Per-NPC records: the runtime state the world mutates and the static
//! profile it never touches.

use serde::Serialize;

use crate::behavior::{NpcBehaviorModifiers, compute_npc_behavior};
use crate::mood::Mood;
use crate::types::{BigFiveProfile, CulturalOverlay, LocationId, NpcId};

/// Runtime state of one NPC within a world snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NpcWorldState {
    /// Which NPC this is.
    pub npc_id: NpcId,
    /// Where the NPC currently is.
    pub current_location: LocationId,
    /// Whether the NPC can be talked to at all.
    pub available: bool,
    /// Current mood; ambient events may set any string.
    pub current_mood: Mood,
    /// Reputation with the learner, in [-0.5, 1.0].
    pub reputation_with_learner: f32,
    /// Forward-injection directives waiting for the next prompt.
    pub pending_directives: Vec<String>,
    /// Unix milliseconds of the last reputation change; 0 if never.
    pub last_interaction_timestamp: i64,
}

impl NpcWorldState {
    /// Fresh runtime state: neutral, reputation 0, nothing pending.
    #[must_use]
    pub fn new(npc_id: NpcId, current_location: LocationId) -> Self {
        Self {
            npc_id,
            current_location,
            available: true,
            current_mood: Mood::Neutral,
            reputation_with_learner: 0.0,
            pending_directives: Vec::new(),
            last_interaction_timestamp: 0,
        }
    }
}

/// Static roster data for an NPC, fixed for the life of a world.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NpcProfile {
    /// NPC id.
    pub id: NpcId,
    /// Display name.
    pub name: String,
    /// Role in the scenario.
    pub role: String,
    /// Big Five profile.
    pub personality: BigFiveProfile,
    /// Cultural overlay.
    pub cultural_overlay: CulturalOverlay,
    /// Authored base patience, 0.0–1.0.
    pub patience_level: f32,
}

impl NpcProfile {
    /// Run the behavior matrix against this profile and a runtime state.
    #[must_use]
    pub fn behavior(&self, state: &NpcWorldState) -> NpcBehaviorModifiers {
        compute_npc_behavior(
            &self.personality,
            &state.current_mood,
            state.reputation_with_learner,
            &self.cultural_overlay,
            self.patience_level,
        )
    }
}
