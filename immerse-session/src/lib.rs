//! # immerse-session: Session Driver for the Immerse World Engine
//!
//! `immerse-core` is a set of pure snapshot transitions. This crate threads
//! those snapshots for one learner:
//!
//! ```text
//!  LearnerAction ──▶ Session::apply ──▶ WorldState transition ──▶ Outcome
//!                        │                     │
//!                        ▼                     ▼
//!                  undo history        ambient trigger issuers
//!                (bounded, per turn)   (time-based, random)
//! ```
//!
//! ## Modules
//!
//! - `action`: learner actions and their outcomes
//! - `session`: the driver, with undo history and per-turn mood decay
//! - `triggers`: issuers for time-based and random ambient events
//! - `telemetry`: tracing subscriber setup

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod error;
pub mod session;
pub mod telemetry;
pub mod triggers;

pub use action::{LearnerAction, Outcome};
pub use error::SessionError;
pub use session::Session;
pub use telemetry::init_tracing;
