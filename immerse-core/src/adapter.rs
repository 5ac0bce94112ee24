//! Schema Adapter: maps the external environment description onto the
//! engine's own entity shapes.
//!
//! Every function here is pure. Nested data is carried over verbatim; only
//! field names change (and personality scalars are clamped into range).
//!
//! Two placement rules live here because they depend only on declaration
//! order:
//! - an NPC starts in the first location whose residents list it, else in
//!   the first location;
//! - the learner starts in the preferred location if present, else the first
//!   location that is public or has no unlock condition, else the first one.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::mood::Mood;
use crate::schema::{
    AmbientEventSpec, InteractableSpec, LocationSpec, NpcSpec, TimeSlotSpec, TimeSystemSpec,
};
use crate::types::{
    BigFiveProfile, CulturalOverlay, EventId, LocationId, LocationKind, NpcId, TimeOfDay,
};
use crate::world::{
    AmbientEvent, Interactable, Location, NpcPresence, NpcProfile, TimeSlot, TimeSystem,
};

/// Convert a location.
#[must_use]
pub fn location_from_spec(spec: &LocationSpec) -> Location {
    Location {
        id: LocationId::new(&spec.id),
        name: spec.name.clone(),
        description: spec.description.clone(),
        kind: spec.kind,
        connections: spec.connections.iter().map(|c| LocationId::new(c)).collect(),
        npcs: NpcPresence {
            resident: spec.npcs.resident.iter().map(|n| NpcId::new(n)).collect(),
            transient: spec.npcs.transient.iter().map(|n| NpcId::new(n)).collect(),
        },
        interactables: spec.interactables.iter().map(interactable_from_spec).collect(),
        ambient_description: spec.ambience.clone(),
        unlock_condition: spec.unlock_condition.clone(),
    }
}

/// Convert an interactable.
#[must_use]
pub fn interactable_from_spec(spec: &InteractableSpec) -> Interactable {
    Interactable {
        id: spec.id.clone(),
        name: spec.name.clone(),
        kind: spec.kind,
        vocabulary_domain: spec.vocabulary_domain.clone(),
        interaction_prompt: spec.interaction_prompt.clone(),
    }
}

/// Convert an ambient event. Reaction strings become [`Mood`]s, keeping
/// unknown ones as [`Mood::Custom`].
#[must_use]
pub fn ambient_event_from_spec(spec: &AmbientEventSpec) -> AmbientEvent {
    AmbientEvent {
        id: EventId::new(&spec.id),
        name: spec.name.clone(),
        trigger: spec.trigger_type,
        trigger_condition: spec.trigger_condition.clone(),
        description: spec.description.clone(),
        npc_reactions: spec
            .npc_reactions
            .iter()
            .map(|(npc, mood)| (NpcId::new(npc), Mood::from(mood.as_str())))
            .collect(),
        vocabulary_domain: spec.vocabulary_domain.clone(),
        duration: spec.duration,
        ignorable: spec.ignorable,
    }
}

/// Convert a roster entry into its static profile.
#[must_use]
pub fn npc_profile_from_spec(spec: &NpcSpec) -> NpcProfile {
    let p = &spec.personality;
    let c = &spec.cultural_overlay;
    NpcProfile {
        id: NpcId::new(&spec.id),
        name: spec.name.clone(),
        role: spec.role.clone(),
        personality: BigFiveProfile::new(
            p.openness,
            p.conscientiousness,
            p.extraversion,
            p.agreeableness,
            p.neuroticism,
        ),
        cultural_overlay: CulturalOverlay::new(
            c.communicative_directness,
            c.formality_default,
            c.power_distance_sensitivity,
            c.emotional_expressiveness,
        ),
        patience_level: spec.patience_level.clamp(0.0, 1.0),
    }
}

/// Build the world clock.
///
/// A supplied time system is copied but always starts in the morning,
/// whatever start time it names. Without one, the clock is disabled with
/// `default_day_length` minutes and an empty schedule.
#[must_use]
pub fn time_system_from_spec(spec: Option<&TimeSystemSpec>, default_day_length: u32) -> TimeSystem {
    let Some(spec) = spec else {
        return TimeSystem::disabled(default_day_length);
    };

    TimeSystem {
        enabled: spec.enabled,
        day_length_minutes: spec.day_length_minutes,
        current_time_of_day: TimeOfDay::Morning,
        time_affects_npcs: spec.time_affects_npcs,
        time_affects_locations: spec.time_affects_locations,
        schedule: Arc::new(spec.schedule.iter().map(time_slot_from_spec).collect()),
    }
}

fn time_slot_from_spec(spec: &TimeSlotSpec) -> TimeSlot {
    TimeSlot {
        time_of_day: spec.time_of_day,
        npc_availability: spec
            .npc_availability
            .iter()
            .map(|(npc, available)| (NpcId::new(npc), *available))
            .collect::<BTreeMap<_, _>>(),
        location_accessibility: spec
            .location_accessibility
            .iter()
            .map(|(loc, open)| (LocationId::new(loc), *open))
            .collect::<BTreeMap<_, _>>(),
    }
}

/// Where an NPC starts: the first location whose residents include it, else
/// the first location. `None` only when there are no locations.
#[must_use]
pub fn initial_npc_location<'a>(npc_id: &str, locations: &'a [Location]) -> Option<&'a Location> {
    locations
        .iter()
        .find(|loc| loc.npcs.resident.iter().any(|r| r == npc_id))
        .or_else(|| locations.first())
}

/// Where the learner starts.
///
/// Precedence: the location with id `preferred`, then the first location
/// that is public or has no unlock condition, then the first location.
/// `None` only when there are no locations.
#[must_use]
pub fn choose_start_location<'a>(locations: &'a [Location], preferred: &str) -> Option<&'a Location> {
    locations
        .iter()
        .find(|loc| loc.id == *preferred)
        .or_else(|| {
            locations
                .iter()
                .find(|loc| loc.kind == LocationKind::Public || loc.unlock_condition.is_none())
        })
        .or_else(|| locations.first())
}
