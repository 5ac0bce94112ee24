//! Shared fixtures for the immerse benchmark suite.

#![deny(missing_docs)]

use std::collections::BTreeMap;

use immerse_core::schema::{
    AmbientEventSpec, CulturalOverlaySpec, EnvironmentDescription, LocationSpec, NpcPresenceSpec,
    NpcSpec, PersonalitySpec, TimeSlotSpec, TimeSystemSpec,
};
use immerse_core::types::{EventDuration, LocationKind, TimeOfDay, TriggerCategory};

/// Id of the `i`-th generated location.
#[must_use]
pub fn location_id(i: usize) -> String {
    format!("loc-{i}")
}

/// A ring of `locations` locations with `npcs` NPCs spread across them,
/// one scene event per NPC and a four-slot schedule that closes every
/// other location at night.
#[must_use]
pub fn sample_environment(locations: usize, npcs: usize) -> EnvironmentDescription {
    let locations = locations.max(1);
    let npc_id = |i: usize| format!("npc-{i}");

    let location_specs = (0..locations)
        .map(|i| LocationSpec {
            id: location_id(i),
            name: BTreeMap::from([("en".to_string(), format!("Location {i}"))]),
            description: String::new(),
            kind: if i % 2 == 0 { LocationKind::Public } else { LocationKind::Commercial },
            connections: vec![
                location_id((i + 1) % locations),
                location_id((i + locations - 1) % locations),
            ],
            npcs: NpcPresenceSpec {
                resident: (0..npcs).filter(|n| n % locations == i).map(npc_id).collect(),
                transient: Vec::new(),
            },
            interactables: Vec::new(),
            ambience: String::new(),
            unlock_condition: None,
        })
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let trait_value = |i: usize, salt: usize| ((i * 7 + salt * 13) % 11) as f32 / 10.0;

    let npc_specs = (0..npcs)
        .map(|i| NpcSpec {
            id: npc_id(i),
            name: format!("NPC {i}"),
            role: "shopkeeper".to_string(),
            personality: PersonalitySpec {
                openness: trait_value(i, 1),
                conscientiousness: trait_value(i, 2),
                extraversion: trait_value(i, 3),
                agreeableness: trait_value(i, 4),
                neuroticism: trait_value(i, 5),
            },
            cultural_overlay: CulturalOverlaySpec::default(),
            patience_level: trait_value(i, 6),
        })
        .collect();

    let event_specs = (0..npcs)
        .map(|i| AmbientEventSpec {
            id: format!("event-{i}"),
            name: format!("Event {i}"),
            trigger_type: TriggerCategory::Random,
            trigger_condition: String::new(),
            description: String::new(),
            npc_reactions: BTreeMap::from([(npc_id(i), "busy".to_string())]),
            vocabulary_domain: "smalltalk".to_string(),
            duration: EventDuration::Scene,
            ignorable: true,
        })
        .collect();

    let schedule = TimeOfDay::CYCLE
        .into_iter()
        .map(|time_of_day| TimeSlotSpec {
            time_of_day,
            npc_availability: BTreeMap::new(),
            location_accessibility: if time_of_day == TimeOfDay::Night {
                (0..locations).step_by(2).skip(1).map(|i| (location_id(i), false)).collect()
            } else {
                BTreeMap::new()
            },
        })
        .collect();

    EnvironmentDescription {
        locations: location_specs,
        npcs: npc_specs,
        ambient_events: event_specs,
        time_system: Some(TimeSystemSpec {
            enabled: true,
            day_length_minutes: 60,
            start_time: None,
            time_affects_npcs: true,
            time_affects_locations: true,
            schedule,
        }),
    }
}
