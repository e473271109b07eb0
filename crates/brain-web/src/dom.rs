use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// CSS-pixel size of the viewport.
pub fn viewport_size() -> (f32, f32) {
    web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            (width as f32, height as f32)
        })
        .unwrap_or((1.0, 1.0))
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let Some(w) = web::window() else {
        return;
    };
    let closure = Closure::once(f);
    _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        ms,
    );
    closure.forget();
}

pub fn create_div(document: &web::Document, id: Option<&str>, class: &str) -> Option<web::HtmlElement> {
    let el = document.create_element("div").ok()?;
    if let Some(id) = id {
        el.set_id(id);
    }
    el.set_class_name(class);
    el.dyn_into::<web::HtmlElement>().ok()
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Set several inline style properties; failures are ignored.
pub fn set_styles(el: &web::HtmlElement, props: &[(&str, &str)]) {
    let style = el.style();
    for (k, v) in props {
        _ = style.set_property(k, v);
    }
}

pub fn append_to_body(document: &web::Document, el: &web::HtmlElement) {
    if let Some(body) = document.body() {
        _ = body.append_child(el);
    }
}

/// Drop `skip=true` from the address bar so a reload plays the intro.
pub fn strip_query() {
    let Some(w) = web::window() else {
        return;
    };
    let path = w.location().pathname().unwrap_or_else(|_| "/".to_string());
    if let Ok(history) = w.history() {
        _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
    }
}
