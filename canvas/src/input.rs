//! Input model: the drag-session state machine and the UI state it produces.
//!
//! `DragState` is the gesture being tracked between pointer-down and
//! pointer-up. `UiState` is what the renderer and the result area show; it
//! outlives individual gestures so a failed request leaves the last drawing
//! in place.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;

/// Internal state for the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress; waiting for a pointer-down near an edge.
    #[default]
    Idle,
    /// The user is dragging a line out from a snapped start point.
    Dragging {
        /// Snapped start point, fixed for the whole gesture.
        start: Point,
        /// Latest pointer position, snapped when near an edge. `None` until the first move.
        current: Option<Point>,
    },
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Start point of the active gesture, if any.
    #[must_use]
    pub fn start(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Dragging { start, .. } => Some(*start),
        }
    }

    /// Latest tracked point of the active gesture, if any.
    #[must_use]
    pub fn current(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Dragging { current, .. } => *current,
        }
    }
}

/// A line as it should appear on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePreview {
    pub start: Point,
    pub end: Point,
    /// Both endpoints lie on the square's edges.
    pub valid: bool,
}

/// Content of the result area.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultView {
    #[default]
    Empty,
    /// Plain status or error text.
    Message(String),
    /// A scorer response: headline plus explanation.
    Score { message: String, explanation: String },
}

/// Persistent UI state visible to the renderer and the host page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    /// Line drawn over the bare square, if any.
    pub line: Option<LinePreview>,
    pub result: ResultView,
}
