//! Reputation updates against a world snapshot.

use std::borrow::Cow;

use chrono::Utc;
use tracing::debug;

use super::WorldState;
use crate::reputation::clamp_reputation;

impl WorldState {
    /// Add `delta` to an NPC's reputation, clamped to [-0.5, 1.0], and stamp
    /// the interaction with the current wall-clock time.
    ///
    /// Returns the input snapshot, borrowed, for an unknown NPC.
    #[must_use]
    pub fn update_reputation(&self, npc_id: &str, delta: f32) -> Cow<'_, Self> {
        self.update_reputation_at(npc_id, delta, Utc::now().timestamp_millis())
    }

    /// [`WorldState::update_reputation`] with an explicit timestamp in Unix
    /// milliseconds.
    #[must_use]
    pub fn update_reputation_at(&self, npc_id: &str, delta: f32, timestamp: i64) -> Cow<'_, Self> {
        if !self.npc_states.contains_key(npc_id) {
            debug!(session = %self.session_id, npc = npc_id, "Reputation update for unknown NPC");
            return Cow::Borrowed(self);
        }

        let mut next = self.clone();
        if let Some(npc) = next.npc_states.get_mut(npc_id) {
            let before = npc.reputation_with_learner;
            npc.reputation_with_learner = clamp_reputation(before + delta);
            npc.last_interaction_timestamp = timestamp;
            debug!(
                session = %self.session_id,
                npc = npc_id,
                before,
                after = npc.reputation_with_learner,
                "Updated reputation"
            );
        }
        Cow::Owned(next)
    }
}
