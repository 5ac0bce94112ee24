//! Learner actions a session turns into world transitions.

use serde::{Deserialize, Serialize};

/// Something the learner (or the scenario runner on their behalf) does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LearnerAction {
    /// Walk to a connected location.
    MoveTo {
        /// Target location id.
        location: String,
    },

    /// Move the clock to the next time of day.
    AdvanceTime,

    /// Fire an ambient event from the catalog.
    FireEvent {
        /// Event id.
        event: String,
    },

    /// Clear an active ambient event.
    ClearEvent {
        /// Event id.
        event: String,
    },

    /// An exchange with an NPC finished.
    Interact {
        /// NPC id.
        npc: String,
        /// Mood trigger observed during the exchange
        /// (e.g. `"register-violation"`).
        trigger: String,
        /// Reputation change to apply.
        reputation_delta: f32,
    },

    /// Queue a directive for the NPC's next prompt.
    QueueDirective {
        /// NPC id.
        npc: String,
        /// Directive text.
        directive: String,
    },

    /// The learner's turn ended; moods age by one turn.
    EndTurn,
}

/// What happened to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// A new snapshot was committed.
    Applied,
    /// The action is not possible from here (blocked move, unknown NPC).
    Rejected,
    /// The action was valid but changed nothing.
    Unchanged,
}

impl Outcome {
    /// Whether a new snapshot was committed.
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
