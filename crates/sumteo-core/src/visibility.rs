//! Visibility edge detection.
//!
//! Hosts usually report visibility as a level ("hidden right now?") and
//! may repeat it. The timer only cares about the transition into hidden,
//! so [`VisibilityTracker`] turns levels into edges. Becoming visible is
//! reported for logging but never resumes a session.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityEdge {
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Default)]
pub struct VisibilityTracker {
    hidden: bool,
}

impl VisibilityTracker {
    /// Starts visible.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Feed one sample. Returns an edge only when the level changed.
    pub fn observe(&mut self, hidden: bool) -> Option<VisibilityEdge> {
        if hidden == self.hidden {
            return None;
        }
        self.hidden = hidden;
        let edge = if hidden {
            VisibilityEdge::Hidden
        } else {
            VisibilityEdge::Visible
        };
        debug!(?edge, "visibility changed");
        Some(edge)
    }
}
