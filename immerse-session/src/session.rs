//! The single-learner session driver.
//!
//! A [`Session`] owns the current [`WorldState`] and a bounded history of
//! earlier snapshots. Each [`LearnerAction`] is turned into one world
//! transition; when the transition produces a new snapshot the previous one
//! is pushed onto the history, so `undo` is just a pop.

use std::borrow::Cow;
use std::collections::{BTreeMap, VecDeque};

use immerse_core::behavior::NpcBehaviorModifiers;
use immerse_core::mood::{Mood, compute_mood_shift, should_decay_mood_at_rate};
use immerse_core::schema::EnvironmentDescription;
use immerse_core::types::NpcId;
use immerse_core::world::create_world_state_with;
use immerse_core::{ImmerseConfig, WorldState};
use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::action::{LearnerAction, Outcome};
use crate::error::{Result, SessionError};
use crate::triggers;

/// A committed snapshot together with the per-NPC turn counters that were
/// current alongside it.
#[derive(Debug, Clone)]
struct Checkpoint {
    world: WorldState,
    turns_in_mood: BTreeMap<NpcId, u32>,
}

/// One learner's walk through one environment.
#[derive(Debug)]
pub struct Session {
    config: ImmerseConfig,
    world: WorldState,
    /// Turns each NPC has spent in its current non-neutral mood.
    turns_in_mood: BTreeMap<NpcId, u32>,
    history: VecDeque<Checkpoint>,
}

impl Session {
    /// Build the initial world for `environment` under a fresh session id.
    ///
    /// # Errors
    /// Returns [`SessionError::World`] when the world cannot be built.
    pub fn start(
        config: &ImmerseConfig,
        schema_id: &str,
        environment: &EnvironmentDescription,
    ) -> Result<Self> {
        let session_id = Uuid::new_v4().to_string();
        let world = create_world_state_with(&config.world, schema_id, environment, &session_id)?;
        info!(session = %session_id, schema = schema_id, "Session started");

        Ok(Self {
            config: config.clone(),
            world,
            turns_in_mood: BTreeMap::new(),
            history: VecDeque::with_capacity(config.session.max_history),
        })
    }

    /// The current snapshot.
    #[must_use]
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// This session's id.
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.world.session_id
    }

    /// Configuration the session runs with.
    #[must_use]
    pub fn config(&self) -> &ImmerseConfig {
        &self.config
    }

    /// Number of snapshots `undo` can step back through.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Turns `npc_id` has spent in its current non-neutral mood.
    #[must_use]
    pub fn turns_in_mood(&self, npc_id: &str) -> u32 {
        self.turns_in_mood.get(npc_id).copied().unwrap_or(0)
    }

    /// Behavior modifiers for an NPC in the current snapshot.
    #[must_use]
    pub fn behavior_for(&self, npc_id: &str) -> Option<NpcBehaviorModifiers> {
        self.world.behavior_for(npc_id)
    }

    /// Apply one learner action.
    pub fn apply(&mut self, action: LearnerAction) -> Outcome {
        debug!(session = %self.world.session_id, ?action, "Applying learner action");

        match action {
            LearnerAction::MoveTo { location } => match self.world.navigate_to(&location) {
                Some(next) => self.commit(next),
                None => Outcome::Rejected,
            },
            LearnerAction::AdvanceTime => {
                let Some(advanced) = changed(self.world.advance_time()) else {
                    return Outcome::Unchanged;
                };
                let next = triggers::fire_time_based(&advanced).into_owned();
                self.commit(next)
            }
            LearnerAction::FireEvent { event } => match changed(self.world.fire_ambient_event(&event)) {
                Some(next) => self.commit(next),
                None => Outcome::Unchanged,
            },
            LearnerAction::ClearEvent { event } => match changed(self.world.clear_ambient_event(&event)) {
                Some(next) => self.commit(next),
                None => Outcome::Unchanged,
            },
            LearnerAction::Interact { npc, trigger, reputation_delta } => {
                self.interact(&npc, &trigger, reputation_delta)
            }
            LearnerAction::QueueDirective { npc, directive } => {
                match changed(self.world.queue_directive(&npc, &directive)) {
                    Some(next) => self.commit(next),
                    None => Outcome::Rejected,
                }
            }
            LearnerAction::EndTurn => self.end_turn(),
        }
    }

    /// Roll the catalog's random events against `session.random_event_chance`.
    pub fn roll_random_events<R: Rng>(&mut self, rng: &mut R) -> Outcome {
        let chance = self.config.session.random_event_chance;
        match changed(triggers::roll_random_events(&self.world, chance, rng)) {
            Some(next) => self.commit(next),
            None => Outcome::Unchanged,
        }
    }

    /// Step back to the previous snapshot.
    ///
    /// # Errors
    /// Returns [`SessionError::NothingToUndo`] when the history is empty.
    pub fn undo(&mut self) -> Result<()> {
        let checkpoint = self.history.pop_back().ok_or(SessionError::NothingToUndo)?;
        self.world = checkpoint.world;
        self.turns_in_mood = checkpoint.turns_in_mood;
        debug!(session = %self.world.session_id, remaining = self.history.len(), "Undid last action");
        Ok(())
    }

    fn interact(&mut self, npc_id: &str, trigger: &str, reputation_delta: f32) -> Outcome {
        let (Some(profile), Some(state)) = (self.world.profile(npc_id), self.world.npc(npc_id)) else {
            debug!(session = %self.world.session_id, npc = npc_id, "Interaction with unknown NPC");
            return Outcome::Rejected;
        };

        let mood = compute_mood_shift(&state.current_mood, trigger, &profile.personality);
        let next = {
            let shifted = self.world.with_npc_mood(npc_id, mood);
            shifted.update_reputation(npc_id, reputation_delta).into_owned()
        };

        self.commit(next)
    }

    fn end_turn(&mut self) -> Outcome {
        let rate = self.config.mood.decay_rate_per_turn;
        let mut turns = self.turns_in_mood.clone();
        let mut next = self.world.clone();

        for (npc_id, npc) in &self.world.npc_states {
            if npc.current_mood.is_neutral() {
                turns.remove(npc_id);
                continue;
            }
            let held = turns.entry(npc_id.clone()).or_insert(0);
            *held += 1;
            if should_decay_mood_at_rate(&npc.current_mood, *held, rate) {
                debug!(session = %self.world.session_id, npc = %npc_id, from = %npc.current_mood, turns = *held, "Mood decayed");
                next = next.with_npc_mood(npc_id.as_str(), Mood::Neutral).into_owned();
                turns.remove(npc_id);
            }
        }

        let outcome = self.commit(next);
        self.turns_in_mood = turns;
        outcome
    }

    fn commit(&mut self, next: WorldState) -> Outcome {
        let previous = Checkpoint {
            world: std::mem::replace(&mut self.world, next),
            turns_in_mood: self.turns_in_mood.clone(),
        };
        reset_changed_mood_counters(&mut self.turns_in_mood, &previous.world, &self.world);

        let limit = self.config.session.max_history;
        if limit > 0 {
            if self.history.len() >= limit {
                self.history.pop_front();
            }
            self.history.push_back(previous);
        }
        Outcome::Applied
    }
}

/// Drops the decay counter of every NPC whose mood differs between the two
/// snapshots, whatever moved it.
fn reset_changed_mood_counters(turns: &mut BTreeMap<NpcId, u32>, before: &WorldState, after: &WorldState) {
    turns.retain(|npc_id, _| {
        let id = npc_id.as_str();
        before.npc(id).map(|n| &n.current_mood) == after.npc(id).map(|n| &n.current_mood)
    });
}

fn changed(result: Cow<'_, WorldState>) -> Option<WorldState> {
    match result {
        Cow::Owned(next) => Some(next),
        Cow::Borrowed(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environment() -> EnvironmentDescription {
        EnvironmentDescription::from_json(
            r#"{
                "locations": [
                    { "id": "street", "type": "public", "connections": ["bakery"] },
                    { "id": "bakery", "type": "commercial", "connections": ["street"],
                      "npcs": { "resident": ["baker"] } }
                ],
                "npcs": [{ "id": "baker", "personality": { "agreeableness": 0.9 } }]
            }"#,
        )
        .expect("parses")
    }

    fn session() -> Session {
        Session::start(&ImmerseConfig::default(), "bakery", &environment()).expect("session")
    }

    #[test]
    fn start_assigns_a_uuid() {
        let s = session();
        assert!(Uuid::parse_str(s.session_id()).is_ok());
        assert_eq!(s.world().schema_id, "bakery");
        assert_eq!(s.history_len(), 0);
    }

    #[test]
    fn rejected_moves_leave_no_history() {
        let mut s = session();
        assert_eq!(s.apply(LearnerAction::MoveTo { location: "moon".into() }), Outcome::Rejected);
        assert_eq!(s.history_len(), 0);
    }

    #[test]
    fn disabled_clock_is_unchanged() {
        let mut s = session();
        assert_eq!(s.apply(LearnerAction::AdvanceTime), Outcome::Unchanged);
    }

    #[test]
    fn history_is_bounded() {
        let mut config = ImmerseConfig::default();
        config.session.max_history = 2;
        let mut s = Session::start(&config, "bakery", &environment()).expect("session");
        for _ in 0..5 {
            assert!(s.apply(LearnerAction::EndTurn).is_applied());
        }
        assert_eq!(s.history_len(), 2);
    }

    #[test]
    fn zero_history_disables_undo() {
        let mut config = ImmerseConfig::default();
        config.session.max_history = 0;
        let mut s = Session::start(&config, "bakery", &environment()).expect("session");
        s.apply(LearnerAction::EndTurn);
        assert!(matches!(s.undo(), Err(SessionError::NothingToUndo)));
    }

    #[test]
    fn directive_for_unknown_npc_is_rejected() {
        let mut s = session();
        let outcome = s.apply(LearnerAction::QueueDirective {
            npc: "ghost".into(),
            directive: "wave".into(),
        });
        assert_eq!(outcome, Outcome::Rejected);
    }
}
