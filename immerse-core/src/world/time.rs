//! Time-of-day clock and schedule.

use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use super::WorldState;
use crate::types::{LocationId, NpcId, TimeOfDay};

/// The world clock and its schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSystem {
    /// When false the clock never moves and the schedule is ignored.
    pub enabled: bool,
    /// Presentational day length.
    pub day_length_minutes: u32,
    /// Where in the cycle the world is.
    pub current_time_of_day: TimeOfDay,
    /// Whether the schedule gates NPC availability.
    pub time_affects_npcs: bool,
    /// Whether the schedule gates location access.
    pub time_affects_locations: bool,
    /// One slot per time of day when non-empty.
    pub schedule: Arc<Vec<TimeSlot>>,
}

impl TimeSystem {
    /// A clock that never runs.
    #[must_use]
    pub fn disabled(day_length_minutes: u32) -> Self {
        Self {
            enabled: false,
            day_length_minutes,
            current_time_of_day: TimeOfDay::Morning,
            time_affects_npcs: false,
            time_affects_locations: false,
            schedule: Arc::new(Vec::new()),
        }
    }

    /// The schedule slot for the current time of day, if any.
    #[must_use]
    pub fn current_slot(&self) -> Option<&TimeSlot> {
        self.schedule
            .iter()
            .find(|slot| slot.time_of_day == self.current_time_of_day)
    }
}

/// Availability and accessibility during one time of day.
///
/// A missing entry means "available" / "accessible"; only an explicit
/// `false` closes something.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    /// Which time of day this slot covers.
    pub time_of_day: TimeOfDay,
    /// NPC id → available.
    pub npc_availability: BTreeMap<NpcId, bool>,
    /// Location id → accessible.
    pub location_accessibility: BTreeMap<LocationId, bool>,
}

impl TimeSlot {
    /// Whether the slot explicitly closes `location`.
    #[must_use]
    pub fn closes_location(&self, location: &str) -> bool {
        self.location_accessibility.get(location) == Some(&false)
    }

    /// Whether the slot explicitly marks `npc` unavailable.
    #[must_use]
    pub fn excludes_npc(&self, npc: &str) -> bool {
        self.npc_availability.get(npc) == Some(&false)
    }
}

impl WorldState {
    /// Move the clock to the next time of day, wrapping after night.
    ///
    /// Returns the same snapshot, borrowed, when the clock is disabled.
    #[must_use]
    pub fn advance_time(&self) -> Cow<'_, Self> {
        if !self.time_system.enabled {
            debug!(session = %self.session_id, "Time system disabled; clock not advanced");
            return Cow::Borrowed(self);
        }

        let mut next = self.clone();
        next.time_system.current_time_of_day = self.time_system.current_time_of_day.next();
        debug!(
            session = %self.session_id,
            from = %self.time_system.current_time_of_day,
            to = %next.time_system.current_time_of_day,
            "Advanced time of day"
        );
        Cow::Owned(next)
    }

    /// The schedule slot for the current time of day, if any.
    #[must_use]
    pub fn current_time_slot(&self) -> Option<&TimeSlot> {
        self.time_system.current_slot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entries_are_open() {
        let slot = TimeSlot {
            time_of_day: TimeOfDay::Night,
            npc_availability: BTreeMap::from([(NpcId::from("baker"), false)]),
            location_accessibility: BTreeMap::from([
                (LocationId::from("bakery"), false),
                (LocationId::from("plaza"), true),
            ]),
        };

        assert!(slot.closes_location("bakery"));
        assert!(!slot.closes_location("plaza"));
        assert!(!slot.closes_location("station"));
        assert!(slot.excludes_npc("baker"));
        assert!(!slot.excludes_npc("guard"));
    }

    #[test]
    fn current_slot_follows_clock() {
        let mut time = TimeSystem::disabled(60);
        time.schedule = Arc::new(
            TimeOfDay::CYCLE
                .into_iter()
                .map(|t| TimeSlot {
                    time_of_day: t,
                    ..TimeSlot::default()
                })
                .collect(),
        );
        time.current_time_of_day = TimeOfDay::Evening;
        assert_eq!(
            time.current_slot().map(|s| s.time_of_day),
            Some(TimeOfDay::Evening)
        );
    }
}
