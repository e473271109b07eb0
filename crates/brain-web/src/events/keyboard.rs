use crate::app::App;
use crate::input::{self, KeyAction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &Rc<RefCell<App>>) {
    let Some(action) = input::action_for_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::SkipIntro => {
            let Ok(mut a) = app.try_borrow_mut() else {
                log::debug!("[keys] escape dropped, app is busy");
                return;
            };
            if a.director.phase().is_playing() {
                log::info!("[keys] escape, skipping intro");
                a.skip();
                ev.prevent_default();
            }
        }
    }
}

pub fn wire_global_keydown(app: Rc<RefCell<App>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &app);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
