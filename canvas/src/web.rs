//! Browser entry point: binds the engine to the page's DOM.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page provides `#squareCanvas` and `#result`. Mouse listeners on the
//! canvas feed [`Engine`] and execute the [`Action`]s it returns: redraws,
//! result-area updates, and scoring requests. Requests run on the browser
//! event loop via `spawn_local`; their outcome is fed back through
//! [`Engine::complete_submission`], which drops responses that arrive late.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, MouseEvent};

use crate::consts::{CANVAS_ELEMENT_ID, RESULT_ELEMENT_ID};
use crate::engine::{Action, Engine};
use crate::geom::Point;
use crate::input::ResultView;
use crate::submit;

struct Host {
    engine: Engine,
    document: Document,
    result: HtmlElement,
}

type SharedHost = Rc<RefCell<Host>>;

/// Attach the editor to the current page and draw the empty square.
///
/// # Errors
///
/// Returns `Err` if the window, document, or either required element is
/// missing, or the canvas cannot be drawn.
#[wasm_bindgen(js_name = startEditor)]
pub fn start_editor() -> Result<(), JsValue> {
    install_logging();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = element_by_id::<HtmlCanvasElement>(&document, CANVAS_ELEMENT_ID)?;
    let result = element_by_id::<HtmlElement>(&document, RESULT_ELEMENT_ID)?;

    let engine = Engine::new(canvas.clone())?;
    engine.render()?;
    log::info!("editor attached to #{CANVAS_ELEMENT_ID} ({}x{})", canvas.width(), canvas.height());

    let host = Rc::new(RefCell::new(Host { engine, document, result }));
    listen(&canvas, "mousedown", &host, |engine, ev| {
        let pt = pointer_point(engine.canvas(), ev);
        engine.on_pointer_down(pt)
    })?;
    listen(&canvas, "mousemove", &host, |engine, ev| {
        let pt = pointer_point(engine.canvas(), ev);
        engine.on_pointer_move(pt)
    })?;
    listen(&canvas, "mouseup", &host, |engine, _ev| engine.on_pointer_up())?;
    Ok(())
}

fn install_logging() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("console logger not installed: {err}")));
    }
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has the wrong type")))
}

/// Mouse position relative to the canvas's top-left corner.
fn pointer_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    Point::new(f64::from(ev.client_x()) - rect.left(), f64::from(ev.client_y()) - rect.top())
}

fn listen<F>(canvas: &HtmlCanvasElement, event: &str, host: &SharedHost, handler: F) -> Result<(), JsValue>
where
    F: Fn(&mut Engine, &MouseEvent) -> Vec<Action> + 'static,
{
    let host = Rc::clone(host);
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
        let actions = handler(&mut host.borrow_mut().engine, &ev);
        dispatch(&host, actions);
    });
    canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn dispatch(host: &SharedHost, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::RenderNeeded => {
                if let Err(err) = host.borrow().engine.render() {
                    log::error!("render failed: {err:?}");
                }
            }
            Action::ShowResult(view) => {
                if let Err(err) = show_result(&host.borrow(), &view) {
                    log::error!("result update failed: {err:?}");
                }
            }
            Action::Submit { token, payload } => {
                let host = Rc::clone(host);
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = submit::submit_line(&payload).await;
                    let actions = host.borrow_mut().engine.complete_submission(token, outcome);
                    dispatch(&host, actions);
                });
            }
        }
    }
}

/// Replace the result area's children. Scorer text is inserted as text nodes, never as markup.
fn show_result(host: &Host, view: &ResultView) -> Result<(), JsValue> {
    match view {
        ResultView::Empty => host.result.set_text_content(None),
        ResultView::Message(text) => host.result.set_text_content(Some(text.as_str())),
        ResultView::Score { message, explanation } => {
            host.result.set_text_content(None);

            let headline = host.document.create_element("p")?;
            let strong = host.document.create_element("strong")?;
            strong.set_text_content(Some(message.as_str()));
            headline.append_child(&strong)?;
            host.result.append_child(&headline)?;

            let body = host.document.create_element("p")?;
            body.set_text_content(Some(explanation.as_str()));
            host.result.append_child(&body)?;
        }
    }
    Ok(())
}
