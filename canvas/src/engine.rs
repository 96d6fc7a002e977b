use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{INVALID_LINE_MESSAGE, REQUEST_FAILED_MESSAGE};
use crate::geom::{Bounds, Point};
use crate::input::{DragState, LinePreview, ResultView, UiState};
use crate::payload::{LinePayload, ScoreResponse};
use crate::render;
use crate::submit::SubmitError;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Redraw the canvas from the current `UiState`.
    RenderNeeded,
    /// Replace the result area's content.
    ShowResult(ResultView),
    /// Send `payload` to the scorer, then feed the outcome back through
    /// [`EngineCore::complete_submission`] with the same token.
    Submit { token: RequestToken, payload: LinePayload },
}

/// Monotonic identifier tying a scorer response to the submission that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// The submission whose response is still wanted.
#[derive(Debug, Clone, Copy)]
struct Outstanding {
    token: RequestToken,
    line: LinePreview,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub bounds: Bounds,
    pub input: DragState,
    pub ui: UiState,
    next_token: u64,
    outstanding: Option<Outstanding>,
}

impl EngineCore {
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds, input: DragState::Idle, ui: UiState::default(), next_token: 0, outstanding: None }
    }

    // --- Input events ---

    /// Begin a drag if `pt` snaps to an edge; otherwise stay idle.
    ///
    /// A new drag retires any outstanding submission so its late response
    /// cannot replace the line being drawn.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        let Some(start) = self.bounds.snap(pt) else {
            log::debug!("pointer down at ({}, {}) is away from every edge", pt.x, pt.y);
            return Vec::new();
        };
        if let Some(prev) = self.outstanding.take() {
            log::debug!("abandoning submission {:?}", prev.token);
        }
        self.input = DragState::Dragging { start, current: None };
        Vec::new()
    }

    /// Track the pointer and rebuild the preview line.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let DragState::Dragging { start, current } = &mut self.input else {
            return Vec::new();
        };
        let snapped = self.bounds.snap(pt);
        let end = snapped.unwrap_or(pt);
        *current = Some(end);
        self.ui.line = Some(LinePreview { start: *start, end, valid: snapped.is_some() });
        vec![Action::RenderNeeded]
    }

    /// Finish the drag: submit when the last tracked point is on an edge, else reset.
    ///
    /// The release position itself is not used; the line ends where the last
    /// move left it.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let DragState::Dragging { start, current } = std::mem::take(&mut self.input) else {
            return Vec::new();
        };

        let Some(end) = current.filter(|c| self.bounds.snap(*c).is_some()) else {
            log::debug!("drag released away from the edges");
            self.ui.line = None;
            self.ui.result = ResultView::Message(INVALID_LINE_MESSAGE.to_owned());
            return vec![Action::RenderNeeded, Action::ShowResult(self.ui.result.clone())];
        };

        let token = self.issue_token();
        let payload = LinePayload::from_line(start, end, self.bounds);
        self.outstanding = Some(Outstanding { token, line: LinePreview { start, end, valid: true } });
        log::debug!("submitting {payload:?} as {token:?}");
        vec![Action::Submit { token, payload }]
    }

    // --- Submission results ---

    /// Apply a scorer outcome. Responses for anything but the outstanding
    /// token are dropped.
    pub fn complete_submission(
        &mut self,
        token: RequestToken,
        outcome: Result<ScoreResponse, SubmitError>,
    ) -> Vec<Action> {
        let Some(outstanding) = self.outstanding.filter(|o| o.token == token) else {
            log::debug!("discarding stale response for {token:?}");
            return Vec::new();
        };
        self.outstanding = None;

        match outcome {
            Ok(score) => {
                let message = score.headline().to_owned();
                self.ui.result = ResultView::Score { message, explanation: score.explanation };
                self.ui.line = Some(outstanding.line);
                vec![Action::ShowResult(self.ui.result.clone()), Action::RenderNeeded]
            }
            Err(err) => {
                log::warn!("scoring request failed: {err}");
                self.ui.result = ResultView::Message(REQUEST_FAILED_MESSAGE.to_owned());
                vec![Action::ShowResult(self.ui.result.clone())]
            }
        }
    }

    fn issue_token(&mut self) -> RequestToken {
        self.next_token += 1;
        RequestToken(self.next_token)
    }

    // --- Queries ---

    /// Token of the submission still awaiting a response, if any.
    #[must_use]
    pub fn outstanding(&self) -> Option<RequestToken> {
        self.outstanding.map(|o| o.token)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }
}

/// The full editor engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to `canvas`, sized from its pixel dimensions.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let bounds = Bounds::new(f64::from(canvas.width()), f64::from(canvas.height()));
        Ok(Self { canvas, ctx, core: EngineCore::new(bounds) })
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_down(pt)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn complete_submission(
        &mut self,
        token: RequestToken,
        outcome: Result<ScoreResponse, SubmitError>,
    ) -> Vec<Action> {
        self.core.complete_submission(token, outcome)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.core.ui, self.core.bounds)
    }
}
