//! Canvas geometry: points, the square's bounds, and edge snapping.
//!
//! Snapping projects a point onto the nearest boundary line of the canvas
//! when it lies within [`SNAP_THRESHOLD_PX`] of that line. The coordinate
//! along the edge is kept as-is; only the coordinate across the edge moves.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use crate::consts::SNAP_THRESHOLD_PX;

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One of the four boundary lines of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// All edges in tie-break order. When two edges are equally near, the
    /// earlier one wins. The order carries no meaning beyond being stable.
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];
}

/// The drawable rectangle `[0, width] × [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Absolute distance from `pt` to the infinite line carrying `edge`.
    #[must_use]
    pub fn distance_to(&self, edge: Edge, pt: Point) -> f64 {
        match edge {
            Edge::Left => pt.x.abs(),
            Edge::Right => (pt.x - self.width).abs(),
            Edge::Top => pt.y.abs(),
            Edge::Bottom => (pt.y - self.height).abs(),
        }
    }

    /// The edge closest to `pt` and its distance, ties resolved by [`Edge::ALL`] order.
    #[must_use]
    pub fn nearest_edge(&self, pt: Point) -> (Edge, f64) {
        let mut best = (Edge::Left, self.distance_to(Edge::Left, pt));
        for edge in &Edge::ALL[1..] {
            let dist = self.distance_to(*edge, pt);
            if dist < best.1 {
                best = (*edge, dist);
            }
        }
        best
    }

    /// Project `pt` onto `edge`, keeping the coordinate that runs along it.
    #[must_use]
    pub fn project(&self, edge: Edge, pt: Point) -> Point {
        match edge {
            Edge::Left => Point::new(0.0, pt.y),
            Edge::Right => Point::new(self.width, pt.y),
            Edge::Top => Point::new(pt.x, 0.0),
            Edge::Bottom => Point::new(pt.x, self.height),
        }
    }

    /// Snap `pt` to the nearest edge using the default threshold.
    ///
    /// Returns `None` when every edge is farther than [`SNAP_THRESHOLD_PX`].
    #[must_use]
    pub fn snap(&self, pt: Point) -> Option<Point> {
        self.snap_within(pt, SNAP_THRESHOLD_PX)
    }

    /// Snap `pt` to the nearest edge if it lies within `threshold` pixels.
    ///
    /// A distance exactly equal to the threshold still snaps. Non-finite
    /// input never snaps.
    #[must_use]
    pub fn snap_within(&self, pt: Point, threshold: f64) -> Option<Point> {
        if !(pt.x.is_finite() && pt.y.is_finite()) {
            return None;
        }
        let (edge, dist) = self.nearest_edge(pt);
        if dist > threshold {
            return None;
        }
        Some(self.project(edge, pt))
    }

    /// The four corners: top-left, top-right, bottom-left, bottom-right.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(self.width, 0.0),
            Point::new(0.0, self.height),
            Point::new(self.width, self.height),
        ]
    }

    /// Whether `pt` sits strictly inside the threshold box around any corner.
    ///
    /// Independent of [`Bounds::snap`]; the editor flow does not consult it.
    #[must_use]
    pub fn is_near_corner(&self, pt: Point) -> bool {
        self.corners()
            .iter()
            .any(|c| (pt.x - c.x).abs() < SNAP_THRESHOLD_PX && (pt.y - c.y).abs() < SNAP_THRESHOLD_PX)
    }
}
