//! Locations and the interactables they own.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::{InteractableKind, LocationId, LocationKind, NpcId};

/// A node in the world graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    /// Location id.
    pub id: LocationId,
    /// Localized names, keyed by language code.
    pub name: BTreeMap<String, String>,
    /// Narrative description.
    pub description: String,
    /// Social character of the place.
    pub kind: LocationKind,
    /// Directly reachable locations.
    pub connections: Vec<LocationId>,
    /// NPCs assigned here.
    pub npcs: NpcPresence,
    /// Things the learner can interact with.
    pub interactables: Vec<Interactable>,
    /// Sensory ambience text.
    pub ambient_description: String,
    /// Free-form unlock predicate. Stored only; the engine does not evaluate it.
    pub unlock_condition: Option<String>,
}

impl Location {
    /// Whether `target` is directly reachable from here.
    #[must_use]
    pub fn is_connected_to(&self, target: &str) -> bool {
        self.connections.iter().any(|c| c == target)
    }

    /// Resident NPCs followed by transient ones, without duplicates.
    pub fn present_npc_ids(&self) -> impl Iterator<Item = &NpcId> {
        let mut seen = Vec::new();
        self.npcs
            .resident
            .iter()
            .chain(&self.npcs.transient)
            .filter(move |id| {
                if seen.contains(id) {
                    false
                } else {
                    seen.push(*id);
                    true
                }
            })
    }

    /// Name in `lang`, falling back to the location id.
    #[must_use]
    pub fn display_name(&self, lang: &str) -> &str {
        self.name.get(lang).map_or(self.id.as_str(), String::as_str)
    }
}

/// NPC presence at a location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NpcPresence {
    /// Always assigned here.
    pub resident: Vec<NpcId>,
    /// Appear conditionally.
    pub transient: Vec<NpcId>,
}

/// Something at a location the learner can read, use or ask about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interactable {
    /// Interactable id.
    pub id: String,
    /// Localized names.
    pub name: BTreeMap<String, String>,
    /// Kind of interactable.
    pub kind: InteractableKind,
    /// Vocabulary domain tag.
    pub vocabulary_domain: String,
    /// Prompt shown on interaction.
    pub interaction_prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> Location {
        Location {
            id: "cafe".into(),
            name: BTreeMap::from([("fr".to_string(), "Le Café".to_string())]),
            description: String::new(),
            kind: LocationKind::Commercial,
            connections: vec!["plaza".into(), "kitchen".into()],
            npcs: NpcPresence {
                resident: vec!["barista".into(), "owner".into()],
                transient: vec!["courier".into(), "barista".into()],
            },
            interactables: Vec::new(),
            ambient_description: String::new(),
            unlock_condition: None,
        }
    }

    #[test]
    fn connection_lookup() {
        let loc = location();
        assert!(loc.is_connected_to("plaza"));
        assert!(!loc.is_connected_to("station"));
    }

    #[test]
    fn present_npcs_keep_order_and_dedupe() {
        let loc = location();
        let ids: Vec<&str> = loc.present_npc_ids().map(NpcId::as_str).collect();
        assert_eq!(ids, vec!["barista", "owner", "courier"]);
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let loc = location();
        assert_eq!(loc.display_name("fr"), "Le Café");
        assert_eq!(loc.display_name("de"), "cafe");
    }
}
