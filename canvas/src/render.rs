//! Rendering: draws the square, its snap band, and the current line to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! Every call is a full redraw from [`UiState`]; nothing is cached between frames.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    BORDER_COLOR, ENDPOINT_RADIUS_PX, INVALID_LINE_COLOR, LINE_WIDTH_PX, SNAP_BAND_COLOR, SNAP_THRESHOLD_PX,
    VALID_LINE_COLOR,
};
use crate::geom::Bounds;
use crate::input::{LinePreview, UiState};

/// Draw the full scene: bare square, then the line if there is one.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, ui: &UiState, bounds: Bounds) -> Result<(), JsValue> {
    draw_square(ctx, bounds);
    if let Some(line) = ui.line {
        draw_line(ctx, line)?;
    }
    Ok(())
}

fn draw_square(ctx: &CanvasRenderingContext2d, bounds: Bounds) {
    ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);

    ctx.set_stroke_style_str(BORDER_COLOR);
    ctx.set_line_width(LINE_WIDTH_PX);
    ctx.stroke_rect(0.0, 0.0, bounds.width, bounds.height);

    // Half the band falls outside the canvas, so the visible part is one threshold wide.
    ctx.set_stroke_style_str(SNAP_BAND_COLOR);
    ctx.set_line_width(SNAP_THRESHOLD_PX * 2.0);
    ctx.stroke_rect(0.0, 0.0, bounds.width, bounds.height);

    ctx.set_line_width(LINE_WIDTH_PX);
}

fn draw_line(ctx: &CanvasRenderingContext2d, line: LinePreview) -> Result<(), JsValue> {
    let color = if line.valid { VALID_LINE_COLOR } else { INVALID_LINE_COLOR };

    ctx.begin_path();
    ctx.move_to(line.start.x, line.start.y);
    ctx.line_to(line.end.x, line.end.y);
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(LINE_WIDTH_PX);
    ctx.stroke();

    ctx.begin_path();
    ctx.arc(line.start.x, line.start.y, ENDPOINT_RADIUS_PX, 0.0, TAU)?;
    ctx.move_to(line.end.x + ENDPOINT_RADIUS_PX, line.end.y);
    ctx.arc(line.end.x, line.end.y, ENDPOINT_RADIUS_PX, 0.0, TAU)?;
    ctx.set_fill_style_str(color);
    ctx.fill();
    Ok(())
}
