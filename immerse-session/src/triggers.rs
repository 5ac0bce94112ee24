//! Ambient trigger issuers.
//!
//! The world engine never decides when an event should fire; it only applies
//! one when asked. These functions are the two issuers the session runs on
//! its own: time-based events keyed on the time of day, and random events
//! rolled against a configured chance.

use std::borrow::Cow;

use immerse_core::types::{TimeOfDay, TriggerCategory};
use immerse_core::world::{AmbientEvent, WorldState};
use rand::Rng;
use tracing::debug;

/// Fire every inactive time-based event whose condition names the world's
/// current time of day.
///
/// A condition matches when it is the time of day itself or carries a
/// `time:` prefix, ignoring case (`"evening"`, `"Time:Evening"`).
#[must_use]
pub fn fire_time_based(world: &WorldState) -> Cow<'_, WorldState> {
    let now = world.time_system.current_time_of_day;
    let due: Vec<&AmbientEvent> = world
        .ambient_events
        .iter()
        .filter(|e| e.trigger == TriggerCategory::TimeBased)
        .filter(|e| names_time_of_day(&e.trigger_condition, now))
        .filter(|e| !world.is_event_active(e.id.as_str()))
        .collect();

    fire_all(world, &due)
}

/// Fire each inactive random event with probability `chance`.
///
/// `chance` is clamped to [0, 1]. Zero (or NaN) never draws from `rng`.
#[must_use]
pub fn roll_random_events<'a, R: Rng>(
    world: &'a WorldState,
    chance: f64,
    rng: &mut R,
) -> Cow<'a, WorldState> {
    if chance.is_nan() || chance <= 0.0 {
        return Cow::Borrowed(world);
    }

    let due: Vec<&AmbientEvent> = world
        .ambient_events
        .iter()
        .filter(|e| e.trigger == TriggerCategory::Random)
        .filter(|e| !world.is_event_active(e.id.as_str()))
        .filter(|_| rng.gen_bool(chance.min(1.0)))
        .collect();

    fire_all(world, &due)
}

fn fire_all<'a>(world: &'a WorldState, due: &[&AmbientEvent]) -> Cow<'a, WorldState> {
    if due.is_empty() {
        return Cow::Borrowed(world);
    }

    let mut next = world.clone();
    for event in due {
        debug!(session = %world.session_id, event = %event.id, trigger = ?event.trigger, "Issuing ambient event");
        next = next.fire_ambient_event(event.id.as_str()).into_owned();
    }
    Cow::Owned(next)
}

fn names_time_of_day(condition: &str, now: TimeOfDay) -> bool {
    let condition = condition.trim();
    let bare = match condition.get(..5) {
        Some(prefix) if prefix.eq_ignore_ascii_case("time:") => &condition[5..],
        _ => condition,
    };
    bare.parse::<TimeOfDay>() == Ok(now)
}
