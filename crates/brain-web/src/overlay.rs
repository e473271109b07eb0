//! Loading screen: percentage readout, fade and removal.

use crate::constants::*;
use crate::css;
use crate::dom;
use brain_core::loading::{DisplayPercent, LoadProgress, DISPLAY_TICK_MS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn set_percent(document: &web::Document, pct: u32) {
    if let Some(el) = document.get_element_by_id(LOADING_PERCENT_ID) {
        el.set_text_content(Some(&format!("{}%", pct)));
    }
}

pub fn fade(document: &web::Document) {
    if let Some(el) = dom::html_element_by_id(document, LOADING_SCREEN_ID) {
        let t = css::transition("opacity", OVERLAY_FADE_MS, "ease", 0);
        dom::set_styles(&el, &[("transition", t.as_str()), ("opacity", "0")]);
    }
}

pub fn hide(document: &web::Document) {
    if let Some(el) = dom::html_element_by_id(document, LOADING_SCREEN_ID) {
        _ = el.class_list().add_1("hidden");
        dom::set_styles(&el, &[("display", "none")]);
    }
}

/// Chase the real load percentage every tick. Once every asset has settled
/// and the readout shows 100, `on_ready` runs and the overlay fades out.
pub fn drive_progress(progress: Rc<RefCell<LoadProgress>>, on_ready: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let display = Rc::new(RefCell::new(DisplayPercent::default()));
    let interval_id: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
    let on_ready = RefCell::new(Some(on_ready));

    let id_inner = interval_id.clone();
    let tick = Closure::wrap(Box::new(move || {
        let Some(document) = dom::window_document() else {
            return;
        };
        let (target, complete) = {
            let p = progress.borrow();
            (p.percent(), p.is_complete())
        };
        let shown = display.borrow_mut().step(target);
        set_percent(&document, shown);
        if !(complete && display.borrow().is_full()) {
            return;
        }
        if let (Some(id), Some(w)) = (id_inner.borrow_mut().take(), web::window()) {
            w.clear_interval_with_handle(id);
        }
        if let Some(f) = on_ready.borrow_mut().take() {
            f();
        }
        dom::set_timeout(OVERLAY_FADE_DELAY_MS, move || {
            if let Some(d) = dom::window_document() {
                fade(&d);
            }
            dom::set_timeout(OVERLAY_HIDE_DELAY_MS, || {
                if let Some(d) = dom::window_document() {
                    hide(&d);
                }
            });
        });
    }) as Box<dyn FnMut()>);

    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        DISPLAY_TICK_MS,
    ) {
        Ok(id) => *interval_id.borrow_mut() = Some(id),
        Err(e) => log::error!("[loader] progress timer failed: {:?}", e),
    }
    tick.forget();
}
