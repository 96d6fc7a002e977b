#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{INVALID_LINE_MESSAGE, REQUEST_FAILED_MESSAGE};

// =============================================================
// Helpers
// =============================================================

fn new_core() -> EngineCore {
    EngineCore::new(Bounds::new(400.0, 400.0))
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn score(message: &str, explanation: &str) -> ScoreResponse {
    ScoreResponse { message: message.into(), explanation: explanation.into(), detail: None }
}

fn has_render_needed(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RenderNeeded))
}

/// Drive a full down/move/up gesture and return the submit action, if any.
fn drag(core: &mut EngineCore, from: Point, to: Point) -> Option<(RequestToken, LinePayload)> {
    core.on_pointer_down(from);
    core.on_pointer_move(to);
    core.on_pointer_up().into_iter().find_map(|a| match a {
        Action::Submit { token, payload } => Some((token, payload)),
        _ => None,
    })
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_core_is_idle_and_blank() {
    let core = new_core();
    assert!(!core.is_dragging());
    assert!(core.ui.line.is_none());
    assert_eq!(core.ui.result, ResultView::Empty);
    assert!(core.outstanding().is_none());
}

// =============================================================
// Pointer down
// =============================================================

#[test]
fn pointer_down_near_edge_starts_drag_at_snapped_point() {
    let mut core = new_core();
    let actions = core.on_pointer_down(pt(5.0, 200.0));
    assert!(actions.is_empty());
    assert_eq!(core.input, DragState::Dragging { start: pt(0.0, 200.0), current: None });
}

#[test]
fn pointer_down_in_interior_stays_idle() {
    let mut core = new_core();
    let actions = core.on_pointer_down(pt(200.0, 200.0));
    assert!(actions.is_empty());
    assert_eq!(core.input, DragState::Idle);
}

// =============================================================
// Pointer move
// =============================================================

#[test]
fn pointer_move_while_idle_is_ignored() {
    let mut core = new_core();
    let actions = core.on_pointer_move(pt(395.0, 10.0));
    assert!(actions.is_empty());
    assert!(core.ui.line.is_none());
}

#[test]
fn pointer_move_near_edge_snaps_and_previews_valid() {
    let mut core = new_core();
    core.on_pointer_down(pt(5.0, 200.0));
    let actions = core.on_pointer_move(pt(395.0, 10.0));
    assert!(has_render_needed(&actions));
    assert_eq!(core.input.current(), Some(pt(400.0, 10.0)));
    assert_eq!(core.ui.line, Some(LinePreview { start: pt(0.0, 200.0), end: pt(400.0, 10.0), valid: true }));
}

#[test]
fn pointer_move_in_interior_tracks_raw_point_as_invalid() {
    let mut core = new_core();
    core.on_pointer_down(pt(5.0, 200.0));
    core.on_pointer_move(pt(150.0, 180.0));
    assert_eq!(core.input.current(), Some(pt(150.0, 180.0)));
    let line = core.ui.line.unwrap();
    assert_eq!(line.end, pt(150.0, 180.0));
    assert!(!line.valid);
}

#[test]
fn pointer_move_keeps_start_fixed() {
    let mut core = new_core();
    core.on_pointer_down(pt(200.0, 3.0));
    core.on_pointer_move(pt(100.0, 100.0));
    core.on_pointer_move(pt(398.0, 300.0));
    assert_eq!(core.input.start(), Some(pt(200.0, 0.0)));
    assert_eq!(core.ui.line.unwrap().end, pt(400.0, 300.0));
}

// =============================================================
// Pointer up
// =============================================================

#[test]
fn pointer_up_while_idle_is_ignored() {
    let mut core = new_core();
    assert!(core.on_pointer_up().is_empty());
}

#[test]
fn pointer_up_on_edge_submits_rescaled_payload() {
    let mut core = new_core();
    let (token, payload) = drag(&mut core, pt(5.0, 200.0), pt(395.0, 10.0)).unwrap();
    assert_eq!(payload, LinePayload { x1: 0, y1: 1012, x2: 2024, y2: 51 });
    assert_eq!(core.outstanding(), Some(token));
    assert!(!core.is_dragging());
}

#[test]
fn pointer_up_in_interior_rejects_line() {
    let mut core = new_core();
    core.on_pointer_down(pt(5.0, 200.0));
    core.on_pointer_move(pt(200.0, 200.0));
    let actions = core.on_pointer_up();

    let expected = ResultView::Message(INVALID_LINE_MESSAGE.to_owned());
    assert_eq!(actions, vec![Action::RenderNeeded, Action::ShowResult(expected.clone())]);
    assert!(core.ui.line.is_none());
    assert_eq!(core.ui.result, expected);
    assert!(core.outstanding().is_none());
    assert!(!core.is_dragging());
}

#[test]
fn pointer_up_without_move_rejects_line() {
    let mut core = new_core();
    core.on_pointer_down(pt(5.0, 200.0));
    let actions = core.on_pointer_up();
    assert!(actions.iter().all(|a| !matches!(a, Action::Submit { .. })));
    assert_eq!(core.ui.result, ResultView::Message(INVALID_LINE_MESSAGE.to_owned()));
}

#[test]
fn tokens_increase_per_submission() {
    let mut core = new_core();
    let (first, _) = drag(&mut core, pt(5.0, 200.0), pt(395.0, 10.0)).unwrap();
    let (second, _) = drag(&mut core, pt(200.0, 2.0), pt(200.0, 398.0)).unwrap();
    assert!(second > first);
}

// =============================================================
// Submission outcomes
// =============================================================

#[test]
fn success_shows_score_and_final_valid_line() {
    let mut core = new_core();
    let (token, _) = drag(&mut core, pt(5.0, 200.0), pt(395.0, 10.0)).unwrap();
    let actions = core.complete_submission(token, Ok(score("2 lines", "crosses twice")));

    let expected = ResultView::Score { message: "2 lines".into(), explanation: "crosses twice".into() };
    assert_eq!(actions, vec![Action::ShowResult(expected.clone()), Action::RenderNeeded]);
    assert_eq!(core.ui.result, expected);
    assert_eq!(core.ui.line, Some(LinePreview { start: pt(0.0, 200.0), end: pt(400.0, 10.0), valid: true }));
    assert!(core.outstanding().is_none());
}

#[test]
fn detail_only_reply_shows_detail() {
    let mut core = new_core();
    let (token, _) = drag(&mut core, pt(5.0, 200.0), pt(395.0, 10.0)).unwrap();
    let reply: ScoreResponse = serde_json::from_str(r#"{"detail":"Scoring service not configured"}"#).unwrap();
    core.complete_submission(token, Ok(reply));

    assert_eq!(
        core.ui.result,
        ResultView::Score { message: "Scoring service not configured".into(), explanation: String::new() }
    );
}

#[test]
fn failure_shows_generic_error_and_keeps_drawing() {
    let mut core = new_core();
    let (token, _) = drag(&mut core, pt(5.0, 200.0), pt(395.0, 10.0)).unwrap();
    let before = core.ui.line;
    let actions = core.complete_submission(token, Err(SubmitError::Request("offline".into())));

    let expected = ResultView::Message(REQUEST_FAILED_MESSAGE.to_owned());
    assert_eq!(actions, vec![Action::ShowResult(expected.clone())]);
    assert!(!has_render_needed(&actions));
    assert_eq!(core.ui.result, expected);
    assert_eq!(core.ui.line, before);
}

#[test]
fn decode_failure_uses_same_message() {
    let mut core = new_core();
    let (token, _) = drag(&mut core, pt(5.0, 200.0), pt(395.0, 10.0)).unwrap();
    core.complete_submission(token, Err(SubmitError::Decode("expected value".into())));
    assert_eq!(core.ui.result, ResultView::Message(REQUEST_FAILED_MESSAGE.to_owned()));
}

#[test]
fn response_applies_only_once() {
    let mut core = new_core();
    let (token, _) = drag(&mut core, pt(5.0, 200.0), pt(395.0, 10.0)).unwrap();
    core.complete_submission(token, Ok(score("first", "")));
    let actions = core.complete_submission(token, Ok(score("again", "")));
    assert!(actions.is_empty());
    assert_eq!(core.ui.result, ResultView::Score { message: "first".into(), explanation: String::new() });
}

// =============================================================
// Stale responses
// =============================================================

#[test]
fn superseded_response_is_discarded() {
    let mut core = new_core();
    let (old, _) = drag(&mut core, pt(5.0, 200.0), pt(395.0, 10.0)).unwrap();
    let (new, _) = drag(&mut core, pt(200.0, 2.0), pt(200.0, 398.0)).unwrap();

    assert!(core.complete_submission(old, Ok(score("old", ""))).is_empty());
    assert_eq!(core.ui.result, ResultView::Empty);

    core.complete_submission(new, Ok(score("new", "")));
    assert_eq!(core.ui.result, ResultView::Score { message: "new".into(), explanation: String::new() });
    assert_eq!(core.ui.line.unwrap().start, pt(200.0, 0.0));
}

#[test]
fn new_drag_retires_outstanding_submission() {
    let mut core = new_core();
    let (token, _) = drag(&mut core, pt(5.0, 200.0), pt(395.0, 10.0)).unwrap();

    core.on_pointer_down(pt(200.0, 397.0));
    core.on_pointer_move(pt(150.0, 150.0));
    assert!(core.outstanding().is_none());

    let actions = core.complete_submission(token, Ok(score("late", "")));
    assert!(actions.is_empty());
    assert_eq!(core.ui.line.unwrap().end, pt(150.0, 150.0));
}

#[test]
fn interior_click_does_not_retire_outstanding_submission() {
    let mut core = new_core();
    let (token, _) = drag(&mut core, pt(5.0, 200.0), pt(395.0, 10.0)).unwrap();
    core.on_pointer_down(pt(200.0, 200.0));
    assert_eq!(core.outstanding(), Some(token));
}

#[test]
fn stale_failure_is_discarded() {
    let mut core = new_core();
    let (old, _) = drag(&mut core, pt(5.0, 200.0), pt(395.0, 10.0)).unwrap();
    drag(&mut core, pt(200.0, 2.0), pt(200.0, 398.0)).unwrap();
    let actions = core.complete_submission(old, Err(SubmitError::Request("timeout".into())));
    assert!(actions.is_empty());
    assert_eq!(core.ui.result, ResultView::Empty);
}
