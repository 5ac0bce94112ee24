//! Ambient events: catalog entries that, once fired, push NPC moods around.
//!
//! Firing applies every `npc → mood` reaction as a direct overwrite and marks
//! the event active until it is cleared. Instant events apply their reactions
//! but never enter the active set. Firing an unknown or already active event
//! hands back the input snapshot untouched.

use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;

use tracing::debug;

use super::WorldState;
use crate::mood::Mood;
use crate::types::{EventDuration, EventId, NpcId, TriggerCategory};

/// A statically defined ambient event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmbientEvent {
    /// Event id.
    pub id: EventId,
    /// Display name.
    pub name: String,
    /// Who is expected to fire it.
    pub trigger: TriggerCategory,
    /// Condition in the issuer's language; never evaluated by the engine.
    pub trigger_condition: String,
    /// What happens.
    pub description: String,
    /// NPC id → mood the NPC switches to.
    pub npc_reactions: BTreeMap<NpcId, Mood>,
    /// Vocabulary domain tag.
    pub vocabulary_domain: String,
    /// Duration category.
    pub duration: EventDuration,
    /// Whether the learner may ignore it.
    pub ignorable: bool,
}

impl WorldState {
    /// Fire an ambient event.
    ///
    /// Returns the input snapshot, borrowed, for an unknown or already
    /// active event.
    #[must_use]
    pub fn fire_ambient_event(&self, event_id: &str) -> Cow<'_, Self> {
        let Some(event) = self.event(event_id) else {
            debug!(session = %self.session_id, event = event_id, "Unknown ambient event");
            return Cow::Borrowed(self);
        };
        if self.is_event_active(event_id) {
            debug!(session = %self.session_id, event = event_id, "Ambient event already active");
            return Cow::Borrowed(self);
        }

        let mut next = self.clone();
        for (npc_id, reaction) in &event.npc_reactions {
            if let Some(npc) = next.npc_states.get_mut(npc_id) {
                npc.current_mood = reaction.clone();
            }
        }
        if event.duration != EventDuration::Instant {
            next.active_events.push(event.id.clone());
        }

        debug!(
            session = %self.session_id,
            event = event_id,
            reactions = event.npc_reactions.len(),
            instant = event.duration == EventDuration::Instant,
            "Fired ambient event"
        );
        Cow::Owned(next)
    }

    /// Clear an active ambient event. Clearing an inactive event is a no-op.
    #[must_use]
    pub fn clear_ambient_event(&self, event_id: &str) -> Cow<'_, Self> {
        if !self.is_event_active(event_id) {
            return Cow::Borrowed(self);
        }

        let mut next = self.clone();
        next.active_events.retain(|id| id != event_id);
        debug!(session = %self.session_id, event = event_id, "Cleared ambient event");
        Cow::Owned(next)
    }

    /// Catalog entries for the currently active events.
    #[must_use]
    pub fn active_ambient_events(&self) -> Vec<&AmbientEvent> {
        self.active_events
            .iter()
            .filter_map(|id| self.event(id.as_str()))
            .collect()
    }
}
