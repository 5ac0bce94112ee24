//! World State Store: the immutable snapshot of one simulation instance.
//!
//! A [`WorldState`] owns the location graph, the clock, the ambient event
//! catalog, the learner's position and every NPC's runtime state. Nothing
//! mutates a snapshot in place: each transition returns a new value and the
//! previous one stays valid, so undo history and speculative previews are
//! just extra references.
//!
//! Transitions that may have nothing to do return `Cow<'_, WorldState>`.
//! `Cow::Borrowed` is the input snapshot itself, which lets callers detect a
//! no-op without comparing contents. Catalog data that never changes after
//! construction (locations, events, profiles, schedule) sits behind `Arc`
//! and is shared between snapshots.

mod events;
mod location;
mod navigation;
mod npc;
mod reputation;
mod time;

pub use events::AmbientEvent;
pub use location::{Interactable, Location, NpcPresence};
pub use npc::{NpcProfile, NpcWorldState};
pub use time::{TimeSlot, TimeSystem};

use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::adapter;
use crate::behavior::NpcBehaviorModifiers;
use crate::config::WorldConfig;
use crate::error::{Result, WorldError};
use crate::mood::Mood;
use crate::schema::EnvironmentDescription;
use crate::types::{EventId, LocationId, NpcId};

/// One immutable snapshot of a world.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldState {
    /// Id of the environment schema this world was built from.
    pub schema_id: String,
    /// Locations in declaration order.
    pub locations: Arc<Vec<Location>>,
    /// Clock and schedule.
    pub time_system: TimeSystem,
    /// Full ambient event catalog.
    pub ambient_events: Arc<Vec<AmbientEvent>>,
    /// Ids of currently active events, in firing order.
    pub active_events: Vec<EventId>,
    /// Where the learner is.
    pub learner_location: LocationId,
    /// Runtime state per NPC.
    pub npc_states: BTreeMap<NpcId, NpcWorldState>,
    /// Static roster data per NPC.
    pub npc_profiles: Arc<BTreeMap<NpcId, NpcProfile>>,
    /// Learner session this world belongs to.
    pub session_id: String,
}

/// Build the initial snapshot from an environment description using the
/// default [`WorldConfig`].
///
/// # Errors
/// Returns [`WorldError::NoLocations`] when the description has no locations.
pub fn create_world_state(
    schema_id: &str,
    environment: &EnvironmentDescription,
    session_id: &str,
) -> Result<WorldState> {
    create_world_state_with(&WorldConfig::default(), schema_id, environment, session_id)
}

/// Build the initial snapshot from an environment description.
///
/// # Errors
/// Returns [`WorldError::NoLocations`] when the description has no locations.
pub fn create_world_state_with(
    config: &WorldConfig,
    schema_id: &str,
    environment: &EnvironmentDescription,
    session_id: &str,
) -> Result<WorldState> {
    let locations: Vec<Location> = environment
        .locations
        .iter()
        .map(adapter::location_from_spec)
        .collect();

    let learner_location = adapter::choose_start_location(&locations, &config.preferred_start_location)
        .map(|loc| loc.id.clone())
        .ok_or(WorldError::NoLocations)?;
    if learner_location != *config.preferred_start_location.as_str() {
        warn!(
            preferred = %config.preferred_start_location,
            chosen = %learner_location,
            "Preferred start location missing; using fallback"
        );
    }

    let mut npc_states = BTreeMap::new();
    let mut npc_profiles = BTreeMap::new();
    for spec in &environment.npcs {
        let profile = adapter::npc_profile_from_spec(spec);
        let home = adapter::initial_npc_location(&spec.id, &locations)
            .map(|loc| loc.id.clone())
            .ok_or(WorldError::NoLocations)?;
        if !locations.iter().any(|loc| loc.npcs.resident.contains(&profile.id)) {
            warn!(npc = %profile.id, placed_at = %home, "NPC is not resident anywhere; using first location");
        }
        npc_states.insert(profile.id.clone(), NpcWorldState::new(profile.id.clone(), home));
        npc_profiles.insert(profile.id.clone(), profile);
    }

    let ambient_events: Vec<AmbientEvent> = environment
        .ambient_events
        .iter()
        .map(adapter::ambient_event_from_spec)
        .collect();

    let time_system = adapter::time_system_from_spec(
        environment.time_system.as_ref(),
        config.default_day_length_minutes,
    );

    info!(
        schema = schema_id,
        session = session_id,
        locations = locations.len(),
        npcs = npc_states.len(),
        events = ambient_events.len(),
        time_enabled = time_system.enabled,
        start = %learner_location,
        "World state created"
    );

    Ok(WorldState {
        schema_id: schema_id.to_string(),
        locations: Arc::new(locations),
        time_system,
        ambient_events: Arc::new(ambient_events),
        active_events: Vec::new(),
        learner_location,
        npc_states,
        npc_profiles: Arc::new(npc_profiles),
        session_id: session_id.to_string(),
    })
}

impl WorldState {
    /// Look up a location by id.
    #[must_use]
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|loc| loc.id == *id)
    }

    /// The learner's current location, if it exists in this world.
    #[must_use]
    pub fn current_location(&self) -> Option<&Location> {
        self.location(self.learner_location.as_str())
    }

    /// Runtime state of an NPC.
    #[must_use]
    pub fn npc(&self, id: &str) -> Option<&NpcWorldState> {
        self.npc_states.get(id)
    }

    /// Static profile of an NPC.
    #[must_use]
    pub fn profile(&self, id: &str) -> Option<&NpcProfile> {
        self.npc_profiles.get(id)
    }

    /// Look up an ambient event in the catalog.
    #[must_use]
    pub fn event(&self, id: &str) -> Option<&AmbientEvent> {
        self.ambient_events.iter().find(|e| e.id == *id)
    }

    /// Whether an event is currently active.
    #[must_use]
    pub fn is_event_active(&self, id: &str) -> bool {
        self.active_events.iter().any(|e| e == id)
    }

    /// Behavior modifiers for an NPC in this snapshot.
    #[must_use]
    pub fn behavior_for(&self, npc_id: &str) -> Option<NpcBehaviorModifiers> {
        let profile = self.profile(npc_id)?;
        let state = self.npc(npc_id)?;
        Some(profile.behavior(state))
    }

    /// Write a mood back into an NPC's runtime state.
    ///
    /// Returns the input snapshot, borrowed, for an unknown NPC or when the
    /// NPC already has that mood.
    #[must_use]
    pub fn with_npc_mood(&self, npc_id: &str, mood: Mood) -> Cow<'_, Self> {
        match self.npc(npc_id) {
            Some(npc) if npc.current_mood != mood => {}
            _ => return Cow::Borrowed(self),
        }

        let mut next = self.clone();
        if let Some(npc) = next.npc_states.get_mut(npc_id) {
            debug!(session = %self.session_id, npc = npc_id, from = %npc.current_mood, to = %mood, "Mood changed");
            npc.current_mood = mood;
        }
        Cow::Owned(next)
    }

    /// Queue a forward-injection directive for an NPC's next prompt.
    ///
    /// Returns the input snapshot, borrowed, for an unknown NPC.
    #[must_use]
    pub fn queue_directive(&self, npc_id: &str, directive: &str) -> Cow<'_, Self> {
        if self.npc(npc_id).is_none() {
            return Cow::Borrowed(self);
        }

        let mut next = self.clone();
        if let Some(npc) = next.npc_states.get_mut(npc_id) {
            npc.pending_directives.push(directive.to_string());
        }
        Cow::Owned(next)
    }

    /// Drop every pending directive for an NPC, typically after they were
    /// injected into a prompt.
    ///
    /// Returns the input snapshot, borrowed, for an unknown NPC or one with
    /// nothing pending.
    #[must_use]
    pub fn clear_directives(&self, npc_id: &str) -> Cow<'_, Self> {
        if self.npc(npc_id).is_none_or(|npc| npc.pending_directives.is_empty()) {
            return Cow::Borrowed(self);
        }

        let mut next = self.clone();
        if let Some(npc) = next.npc_states.get_mut(npc_id) {
            npc.pending_directives.clear();
        }
        Cow::Owned(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{LocationSpec, NpcPresenceSpec, NpcSpec};
    use crate::types::{LocationKind, TimeOfDay};

    fn location(id: &str, connections: &[&str], residents: &[&str]) -> LocationSpec {
        LocationSpec {
            id: id.to_string(),
            name: BTreeMap::new(),
            description: String::new(),
            kind: LocationKind::Public,
            connections: connections.iter().map(ToString::to_string).collect(),
            npcs: NpcPresenceSpec {
                resident: residents.iter().map(ToString::to_string).collect(),
                transient: Vec::new(),
            },
            interactables: Vec::new(),
            ambience: String::new(),
            unlock_condition: None,
        }
    }

    fn npc(id: &str) -> NpcSpec {
        NpcSpec {
            id: id.to_string(),
            name: id.to_string(),
            role: String::new(),
            personality: crate::schema::PersonalitySpec::default(),
            cultural_overlay: crate::schema::CulturalOverlaySpec::default(),
            patience_level: 0.5,
        }
    }

    fn env() -> EnvironmentDescription {
        EnvironmentDescription {
            locations: vec![
                location("street", &["shop"], &[]),
                location("shop", &["street"], &["clerk"]),
            ],
            npcs: vec![npc("clerk"), npc("drifter")],
            ambient_events: Vec::new(),
            time_system: None,
        }
    }

    #[test]
    fn empty_environment_is_rejected() {
        let empty = EnvironmentDescription {
            locations: Vec::new(),
            npcs: Vec::new(),
            ambient_events: Vec::new(),
            time_system: None,
        };
        let err = create_world_state("schema", &empty, "s1").expect_err("no locations");
        assert!(matches!(err, WorldError::NoLocations));
    }

    #[test]
    fn npcs_start_neutral_at_home() {
        let world = create_world_state("schema-1", &env(), "session-1").expect("world");

        let clerk = world.npc("clerk").expect("clerk");
        assert_eq!(clerk.current_location, LocationId::from("shop"));
        assert_eq!(clerk.current_mood, Mood::Neutral);
        assert!(clerk.reputation_with_learner.abs() < f32::EPSILON);
        assert!(clerk.pending_directives.is_empty());
        assert_eq!(clerk.last_interaction_timestamp, 0);

        let drifter = world.npc("drifter").expect("drifter");
        assert_eq!(drifter.current_location, LocationId::from("street"));
    }

    #[test]
    fn world_without_time_system_is_disabled() {
        let world = create_world_state("schema-1", &env(), "session-1").expect("world");
        assert!(!world.time_system.enabled);
        assert_eq!(world.time_system.day_length_minutes, 60);
        assert_eq!(world.time_system.current_time_of_day, TimeOfDay::Morning);
        assert_eq!(world.schema_id, "schema-1");
        assert_eq!(world.session_id, "session-1");
    }

    #[test]
    fn configured_start_location_is_honored() {
        let config = WorldConfig {
            preferred_start_location: "shop".to_string(),
            ..WorldConfig::default()
        };
        let world = create_world_state_with(&config, "schema", &env(), "s").expect("world");
        assert_eq!(world.learner_location, LocationId::from("shop"));
    }

    #[test]
    fn mood_write_back_is_copy_on_write() {
        let world = create_world_state("schema", &env(), "s").expect("world");
        let next = world.with_npc_mood("clerk", Mood::Irritated).into_owned();

        assert_eq!(next.npc("clerk").map(|n| &n.current_mood), Some(&Mood::Irritated));
        assert_eq!(world.npc("clerk").map(|n| &n.current_mood), Some(&Mood::Neutral));
        assert!(Arc::ptr_eq(&world.locations, &next.locations));
    }

    #[test]
    fn mood_write_back_for_unknown_npc_is_identity() {
        let world = create_world_state("schema", &env(), "s").expect("world");
        let same = world.with_npc_mood("ghost", Mood::Cold);
        assert!(matches!(same, Cow::Borrowed(w) if std::ptr::eq(w, &world)));
    }

    #[test]
    fn directives_queue_and_clear() {
        let world = create_world_state("schema", &env(), "s").expect("world");
        let queued = world.queue_directive("clerk", "mention-the-sale").into_owned();
        assert_eq!(
            queued.npc("clerk").map(|n| n.pending_directives.clone()),
            Some(vec!["mention-the-sale".to_string()])
        );

        let cleared = queued.clear_directives("clerk").into_owned();
        assert!(cleared.npc("clerk").is_some_and(|n| n.pending_directives.is_empty()));

        assert!(matches!(world.clear_directives("clerk"), Cow::Borrowed(_)));
        assert!(matches!(world.queue_directive("ghost", "x"), Cow::Borrowed(_)));
    }

    #[test]
    fn behavior_needs_profile_and_state() {
        let world = create_world_state("schema", &env(), "s").expect("world");
        let modifiers = world.behavior_for("clerk").expect("known npc");
        assert!((3..=15).contains(&modifiers.silence_tolerance_seconds));
        assert!(world.behavior_for("ghost").is_none());
    }
}
