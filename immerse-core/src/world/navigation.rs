//! Learner navigation and NPC presence.
//!
//! A move succeeds only along a connection of the current location, to a
//! location that exists, and (when the clock gates locations) is not
//! explicitly closed in the current time slot. A blocked move is an ordinary
//! outcome and yields `None`.

use tracing::debug;

use super::{Location, NpcWorldState, WorldState};

impl WorldState {
    /// Move the learner to `target`.
    ///
    /// Returns `None` when the move is not possible. On success only the
    /// learner's location differs from `self`.
    #[must_use]
    pub fn navigate_to(&self, target: &str) -> Option<Self> {
        let Some(current) = self.current_location() else {
            debug!(
                session = %self.session_id,
                learner_location = %self.learner_location,
                "Learner location missing from world"
            );
            return None;
        };

        if !current.is_connected_to(target) {
            debug!(session = %self.session_id, from = %current.id, to = target, "Not connected");
            return None;
        }

        let destination = self.location(target)?;

        if self.location_closed_now(target) {
            debug!(
                session = %self.session_id,
                to = target,
                time = %self.time_system.current_time_of_day,
                "Location closed at this time"
            );
            return None;
        }

        let mut next = self.clone();
        next.learner_location = destination.id.clone();
        Some(next)
    }

    /// Locations the learner could move to right now.
    #[must_use]
    pub fn reachable_locations(&self) -> Vec<&Location> {
        let Some(current) = self.current_location() else {
            return Vec::new();
        };
        current
            .connections
            .iter()
            .filter_map(|id| self.location(id.as_str()))
            .filter(|loc| !self.location_closed_now(loc.id.as_str()))
            .collect()
    }

    /// NPCs the learner can meet at `location_id` right now.
    ///
    /// Residents come first, then transients, each at most once. Unknown
    /// NPC ids, unavailable NPCs and NPCs the current time slot marks
    /// unavailable are left out. An unknown location yields nothing.
    #[must_use]
    pub fn npcs_at_location(&self, location_id: &str) -> Vec<&NpcWorldState> {
        let Some(location) = self.location(location_id) else {
            return Vec::new();
        };
        let slot = if self.time_system.enabled {
            self.current_time_slot()
        } else {
            None
        };

        location
            .present_npc_ids()
            .filter_map(|id| self.npc_states.get(id))
            .filter(|npc| npc.available)
            .filter(|npc| !slot.is_some_and(|s| s.excludes_npc(npc.npc_id.as_str())))
            .collect()
    }

    fn location_closed_now(&self, location_id: &str) -> bool {
        self.time_system.enabled
            && self.time_system.time_affects_locations
            && self
                .current_time_slot()
                .is_some_and(|slot| slot.closes_location(location_id))
    }
}
