//! Wire types for the scoring service and the pixel-to-logical rescaling.
//!
//! The scorer works in a fixed `LOGICAL_SIZE × LOGICAL_SIZE` grid regardless
//! of the canvas's pixel size. Each axis is rescaled independently and
//! rounded to the nearest integer.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde::{Deserialize, Serialize};

use crate::consts::LOGICAL_SIZE;
use crate::geom::{Bounds, Point};

/// Request body for `POST /api/calculate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePayload {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// Response body from the scoring service.
///
/// Missing fields decode as empty strings; the scorer's text is displayed verbatim.
/// Error replies from the host and the scorer carry only `detail`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreResponse {
    pub message: String,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ScoreResponse {
    /// The line to show in bold: `message`, or `detail` when there is no message.
    #[must_use]
    pub fn headline(&self) -> &str {
        match self.detail.as_deref() {
            Some(detail) if self.message.is_empty() => detail,
            _ => &self.message,
        }
    }
}

/// Why a payload was refused before reaching the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("Coordinates must be between 0 and 2024")]
    OutOfRange,
    #[error("Points must be on the square's perimeter")]
    OffPerimeter,
}

/// Rescale one pixel coordinate into logical space.
///
/// Results are clamped to `[0, LOGICAL_SIZE]` so points dragged past the
/// canvas still produce an in-range payload. A non-positive dimension maps to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_logical(coord: f64, dimension: f64) -> i32 {
    if dimension <= 0.0 || !coord.is_finite() {
        return 0;
    }
    let scaled = (coord / dimension * f64::from(LOGICAL_SIZE)).round();
    scaled.clamp(0.0, f64::from(LOGICAL_SIZE)) as i32
}

/// Whether a logical point lies on the boundary of the logical square.
#[must_use]
pub fn is_logical_perimeter_point(x: i32, y: i32) -> bool {
    let range = 0..=LOGICAL_SIZE;
    ((x == 0 || x == LOGICAL_SIZE) && range.contains(&y)) || ((y == 0 || y == LOGICAL_SIZE) && range.contains(&x))
}

impl LinePayload {
    /// Build the request for a line between two canvas-space points.
    #[must_use]
    pub fn from_line(start: Point, end: Point, bounds: Bounds) -> Self {
        Self {
            x1: to_logical(start.x, bounds.width),
            y1: to_logical(start.y, bounds.height),
            x2: to_logical(end.x, bounds.width),
            y2: to_logical(end.y, bounds.height),
        }
    }

    /// Whether every coordinate lies within `[0, LOGICAL_SIZE]`.
    #[must_use]
    pub fn in_range(&self) -> bool {
        [self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|c| (0..=LOGICAL_SIZE).contains(c))
    }

    /// Whether both endpoints sit on the logical square's perimeter.
    #[must_use]
    pub fn is_on_perimeter(&self) -> bool {
        is_logical_perimeter_point(self.x1, self.y1) && is_logical_perimeter_point(self.x2, self.y2)
    }

    /// Check range first, then perimeter membership.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), PayloadError> {
        if !self.in_range() {
            return Err(PayloadError::OutOfRange);
        }
        if !self.is_on_perimeter() {
            return Err(PayloadError::OffPerimeter);
        }
        Ok(())
    }
}
