//! Shared constants for the editor: geometry, styling, wire space, and DOM contract.

// ── Snapping ────────────────────────────────────────────────────

/// Maximum distance in canvas pixels at which a point snaps to an edge.
pub const SNAP_THRESHOLD_PX: f64 = 20.0;

// ── Logical space ───────────────────────────────────────────────

/// Side length of the square coordinate space the scoring service expects.
pub const LOGICAL_SIZE: i32 = 2024;

// ── Styling ─────────────────────────────────────────────────────

/// Stroke width of the square border and the drawn line.
pub const LINE_WIDTH_PX: f64 = 2.0;

/// Radius of the dots drawn at both ends of the line.
pub const ENDPOINT_RADIUS_PX: f64 = 4.0;

pub const BORDER_COLOR: &str = "black";

/// Translucent band marking the snap zone along every edge.
pub const SNAP_BAND_COLOR: &str = "rgba(0, 100, 255, 0.2)";

pub const VALID_LINE_COLOR: &str = "blue";
pub const INVALID_LINE_COLOR: &str = "red";

// ── User-facing messages ────────────────────────────────────────

/// Shown when a drag is released away from every edge.
pub const INVALID_LINE_MESSAGE: &str = "Line must connect two points on the square edges!";

/// Shown when the scoring request fails for any reason.
pub const REQUEST_FAILED_MESSAGE: &str = "Error calculating result";

// ── DOM contract ────────────────────────────────────────────────

pub const CANVAS_ELEMENT_ID: &str = "squareCanvas";
pub const RESULT_ELEMENT_ID: &str = "result";
