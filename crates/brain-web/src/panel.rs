//! Control panel DOM: zoom slider, x-ray and brainstorm toggles, reset.
//! Built hidden at startup; the intro reveals it with the bottom nav.

use crate::app::App;
use crate::constants::*;
use crate::css;
use crate::dom;
use brain_core::panel::ZoomRange;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn input_by_id(document: &web::Document, id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

fn create_input(document: &web::Document, id: &str, kind: &str) -> Option<web::HtmlInputElement> {
    let el = document
        .create_element("input")
        .ok()?
        .dyn_into::<web::HtmlInputElement>()
        .ok()?;
    el.set_id(id);
    el.set_type(kind);
    Some(el)
}

fn labelled_row(
    document: &web::Document,
    text: &str,
    control: &web::HtmlElement,
) -> Option<web::HtmlElement> {
    let row = dom::create_div(document, None, "brain-control-row")?;
    let label = dom::create_div(document, None, "brain-control-label")?;
    label.set_text_content(Some(text));
    dom::set_styles(
        &row,
        &[
            ("display", "flex"),
            ("align-items", "center"),
            ("justify-content", "space-between"),
            ("gap", "12px"),
            ("margin", "8px 0"),
        ],
    );
    _ = row.append_child(&label);
    _ = row.append_child(control);
    Some(row)
}

/// Create the panel once. Safe to call again; the existing panel is kept.
pub fn build(document: &web::Document) -> Option<web::HtmlElement> {
    if let Some(panel) = dom::html_element_by_id(document, CONTROL_PANEL_ID) {
        return Some(panel);
    }
    let panel = dom::create_div(document, Some(CONTROL_PANEL_ID), "brain-control-panel")?;
    dom::set_styles(
        &panel,
        &[
            ("position", "fixed"),
            ("right", "20px"),
            ("top", "50%"),
            ("transform", "translateY(-50%)"),
            ("padding", "12px 16px"),
            ("min-width", "200px"),
            ("color", "#fff"),
            ("font-size", "12px"),
            ("letter-spacing", "1px"),
            ("background", "rgba(10, 12, 20, 0.7)"),
            ("border", "1px solid rgba(255, 255, 255, 0.15)"),
            ("opacity", "0"),
            ("visibility", "hidden"),
            ("z-index", "40"),
        ],
    );

    let tab = dom::create_div(document, Some(CONTROL_TAB_ID), "brain-control-tab")?;
    tab.set_text_content(Some("CONTROLS"));
    dom::set_styles(&tab, &[("cursor", "pointer"), ("font-weight", "bold")]);
    _ = panel.append_child(&tab);

    let body = dom::create_div(document, None, "brain-control-body")?;
    dom::set_styles(&body, &[("display", "none")]);

    let slider = create_input(document, ZOOM_SLIDER_ID, "range")?;
    slider.set_step("1");
    if let Some(row) = labelled_row(document, "ZOOM", &slider) {
        _ = body.append_child(&row);
    }
    for (id, text) in [(XRAY_TOGGLE_ID, "X-RAY"), (BRAINSTORM_TOGGLE_ID, "BRAINSTORM")] {
        if let Some(toggle) = create_input(document, id, "checkbox") {
            if let Some(row) = labelled_row(document, text, &toggle) {
                _ = body.append_child(&row);
            }
        }
    }
    let reset = document
        .create_element("button")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    reset.set_id(RESET_BUTTON_ID);
    reset.set_text_content(Some("RESET"));
    _ = body.append_child(&reset);

    _ = panel.append_child(&body);
    dom::append_to_body(document, &panel);
    Some(panel)
}

/// Fade the panel in.
pub fn show(document: &web::Document) {
    let Some(panel) = build(document) else {
        return;
    };
    let t = css::transition("opacity", CHROME_FADE_MS, "ease", 0);
    dom::set_styles(
        &panel,
        &[
            ("transition", t.as_str()),
            ("opacity", "1"),
            ("visibility", "visible"),
        ],
    );
}

/// Push range and value into the zoom slider.
pub fn sync_zoom(document: &web::Document, range: ZoomRange, value: f32) {
    let Some(slider) = input_by_id(document, ZOOM_SLIDER_ID) else {
        return;
    };
    slider.set_min(&format!("{:.0}", range.min));
    slider.set_max(&format!("{:.0}", range.max));
    slider.set_value(&format!("{:.0}", value.clamp(range.min, range.max)));
}

fn set_checked(document: &web::Document, id: &str, checked: bool) {
    if let Some(toggle) = input_by_id(document, id) {
        toggle.set_checked(checked);
    }
}

fn wire_input(
    document: &web::Document,
    id: &str,
    event: &str,
    mut handler: impl FnMut(&web::HtmlInputElement) + 'static,
) {
    let Some(input) = input_by_id(document, id) else {
        return;
    };
    let target = input.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        handler(&target);
    }) as Box<dyn FnMut(web::Event)>);
    _ = input.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Attach the panel controls to the scene.
pub fn wire(document: &web::Document, app: Rc<RefCell<App>>) {
    if build(document).is_none() {
        log::warn!("[panel] could not create control panel");
        return;
    }

    let app_tab = app.clone();
    let doc_tab = document.clone();
    dom::add_click_listener(document, CONTROL_TAB_ID, move || {
        let open = app_tab.borrow_mut().scene.panel.toggle_open();
        if let Ok(Some(body)) = doc_tab.query_selector(".brain-control-body") {
            if let Some(body) = body.dyn_ref::<web::HtmlElement>() {
                dom::set_styles(body, &[("display", if open { "block" } else { "none" })]);
            }
        }
    });

    let app_zoom = app.clone();
    wire_input(document, ZOOM_SLIDER_ID, "input", move |slider| {
        if let Ok(distance) = slider.value().parse::<f32>() {
            app_zoom.borrow_mut().scene.set_zoom(distance);
        }
    });

    let app_xray = app.clone();
    wire_input(document, XRAY_TOGGLE_ID, "change", move |toggle| {
        let mut a = app_xray.borrow_mut();
        let now = a.now();
        a.scene.toggle_xray(toggle.checked(), now);
    });

    let app_storm = app.clone();
    wire_input(document, BRAINSTORM_TOGGLE_ID, "change", move |toggle| {
        let mut a = app_storm.borrow_mut();
        let now = a.now();
        a.scene.toggle_brainstorm(toggle.checked(), now);
    });

    let doc_reset = document.clone();
    dom::add_click_listener(document, RESET_BUTTON_ID, move || {
        let (range, distance) = {
            let mut a = app.borrow_mut();
            let now = a.now();
            let distance = a.scene.reset(now);
            (a.scene.panel.zoom_range(), distance)
        };
        set_checked(&doc_reset, XRAY_TOGGLE_ID, false);
        set_checked(&doc_reset, BRAINSTORM_TOGGLE_ID, false);
        sync_zoom(&doc_reset, range, distance);
        log::info!("[panel] reset to distance {:.1}", distance);
    });
}
