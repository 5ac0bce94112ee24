//! # Immerse Core Library
//!
//! Deterministic world-state engine for language-immersion scenarios.
//!
//! An environment description (locations, NPC roster, ambient events and an
//! optional clock) is turned into an immutable [`WorldState`] snapshot. Every
//! learner action produces a new snapshot; the previous one is never touched.
//!
//! - **Navigation**: move along the location graph, gated by the clock
//! - **Time**: a four-phase day cycle with per-slot availability
//! - **Ambient events**: fire and clear scene-level events that shift moods
//! - **Reputation**: per-NPC standing with the learner, clamped to [-0.5, 1.0]
//! - **Mood**: trait-driven mood transitions and decay
//! - **Behavior**: a pure function from personality, mood, reputation and
//!   culture to dialogue modifiers
//!
//! ## Performance Contract
//!
//! Everything here is synchronous and allocation-light:
//! - Behavior computation: < 1μs
//! - Navigation / time step (10 locations, 20 NPCs): < 20μs
//! - World construction (10 locations, 20 NPCs): < 100μs

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod adapter;
pub mod behavior;
pub mod config;
pub mod error;
pub mod mood;
pub mod reputation;
pub mod schema;
pub mod types;
pub mod world;

pub use behavior::{NpcBehaviorModifiers, compute_npc_behavior};
pub use config::ImmerseConfig;
pub use error::WorldError;
pub use mood::{Mood, MoodTrigger, compute_mood_shift, should_decay_mood};
pub use reputation::{ReputationTier, reputation_behavior_descriptor};
pub use schema::EnvironmentDescription;
pub use types::*;
pub use world::{WorldState, create_world_state, create_world_state_with};
