//! Page chrome driven by the intro: tracked labels, the nav bar they merge
//! into, and the bottom navigation.

use crate::constants::*;
use crate::css;
use crate::dom;
use crate::panel;
use brain_core::font::TypefaceFont;
use brain_core::memory::{NavItem, NavTarget, NAV_ITEMS};
use brain_core::{BrainScene, StageCommand};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct TrackedLabel {
    item: usize,
    el: web::HtmlElement,
}

pub struct Chrome {
    document: web::Document,
    labels: Vec<TrackedLabel>,
    font: Option<TypefaceFont>,
}

impl Chrome {
    pub fn new(document: web::Document, font: Option<TypefaceFont>) -> Self {
        Self {
            document,
            labels: Vec::new(),
            font,
        }
    }

    fn font_stack(&self) -> String {
        self.font
            .as_ref()
            .map(|f| f.font_stack())
            .unwrap_or_else(|| "Helvetica, Arial, sans-serif".to_string())
    }

    pub fn apply(&mut self, cmd: StageCommand, scene: &BrainScene) {
        log::debug!("[labels] {:?}", cmd);
        match cmd {
            StageCommand::SparklesOn => {}
            StageCommand::ShowLabels { stagger_ms } => self.show_labels(scene, stagger_ms),
            StageCommand::LabelsToNav { slide_ms } => self.slide_labels_to_nav(slide_ms),
            StageCommand::RevealNav { sweep_ms } => self.reveal_nav(sweep_ms),
            StageCommand::FadeLabels => self.fade_labels(),
            StageCommand::ShowChrome => {
                panel::show(&self.document);
                self.show_bottom_nav();
            }
            StageCommand::RemoveLabels => self.remove_labels(),
            StageCommand::DefaultZoom(distance) => {
                panel::sync_zoom(&self.document, scene.panel.zoom_range(), distance)
            }
        }
    }

    fn labels_layer(&self) -> Option<web::HtmlElement> {
        if let Some(el) = dom::html_element_by_id(&self.document, LABELS_LAYER_ID) {
            return Some(el);
        }
        let layer = dom::create_div(&self.document, Some(LABELS_LAYER_ID), "brain-labels")?;
        dom::set_styles(
            &layer,
            &[
                ("position", "fixed"),
                ("inset", "0"),
                ("pointer-events", "none"),
                ("z-index", "20"),
            ],
        );
        dom::append_to_body(&self.document, &layer);
        Some(layer)
    }

    fn show_labels(&mut self, scene: &BrainScene, stagger_ms: u32) {
        self.remove_labels();
        let Some(layer) = self.labels_layer() else {
            return;
        };
        let font_stack = self.font_stack();
        for (i, anchor) in scene.labels.anchors().iter().enumerate() {
            let Some(item) = NAV_ITEMS.get(anchor.item) else {
                continue;
            };
            let Some(el) = dom::create_div(&self.document, None, "brain-label") else {
                continue;
            };
            el.set_text_content(Some(item.label));
            let delay = css::stagger_delay_ms(i, stagger_ms);
            let fade = css::transition("opacity", LABEL_FADE_IN_MS, "ease", delay);
            let width = self
                .font
                .as_ref()
                .map(|f| {
                    f.text_width(item.label, LABEL_FONT_SIZE_PX)
                        + LABEL_LETTER_SPACING_PX * item.label.len() as f32
                })
                .map(css::px);
            let font_size = css::px(LABEL_FONT_SIZE_PX);
            let spacing = css::px(LABEL_LETTER_SPACING_PX);
            dom::set_styles(
                &el,
                &[
                    ("position", "absolute"),
                    ("left", "0"),
                    ("top", "0"),
                    ("color", "#fff"),
                    ("white-space", "nowrap"),
                    ("font-family", font_stack.as_str()),
                    ("font-size", font_size.as_str()),
                    ("letter-spacing", spacing.as_str()),
                    ("opacity", "0"),
                    ("transition", fade.as_str()),
                ],
            );
            if let Some(w) = width {
                dom::set_styles(&el, &[("min-width", w.as_str()), ("text-align", "center")]);
            }
            _ = layer.append_child(&el);
            self.labels.push(TrackedLabel {
                item: anchor.item,
                el,
            });
        }
        // next frame so the transition sees the 0 -> 1 change
        let els: Vec<_> = self.labels.iter().map(|l| l.el.clone()).collect();
        dom::set_timeout(16, move || {
            for el in els {
                dom::set_styles(&el, &[("opacity", css::opacity(true))]);
            }
        });
        log::info!("[labels] showing {} labels", self.labels.len());
    }

    /// Write projected positions for labels still following the brain.
    pub fn position_labels(&self, positions: &[(usize, Vec2)]) {
        for (item, p) in positions {
            if let Some(label) = self.labels.iter().find(|l| l.item == *item) {
                _ = label
                    .el
                    .style()
                    .set_property("transform", &css::label_translate(p.x, p.y));
            }
        }
    }

    fn slide_labels_to_nav(&mut self, slide_ms: u32) {
        let Some(nav) = ensure_nav(&self.document, &self.font_stack()) else {
            return;
        };
        let links = nav.query_selector_all("a").ok();
        for label in &self.labels {
            let slot = links
                .as_ref()
                .and_then(|l| l.item(label.item as u32))
                .and_then(|n| n.dyn_into::<web::Element>().ok());
            let Some(slot) = slot else {
                log::warn!("[labels] no nav slot for item {}", label.item);
                continue;
            };
            let r = slot.get_bounding_client_rect();
            let (x, y) = css::slot_anchor(
                r.left() as f32,
                r.top() as f32,
                r.width() as f32,
                r.height() as f32,
            );
            let t = css::transitions(&["transform"], slide_ms, LABEL_SLIDE_EASING);
            dom::set_styles(
                &label.el,
                &[("transition", t.as_str()), ("transform", css::label_translate(x, y).as_str())],
            );
        }
    }

    fn reveal_nav(&self, sweep_ms: u32) {
        let Some(nav) = ensure_nav(&self.document, &self.font_stack()) else {
            return;
        };
        let t = css::transition("clip-path", sweep_ms, NAV_SWEEP_EASING, 0);
        dom::set_styles(
            &nav,
            &[
                ("transition", t.as_str()),
                ("clip-path", css::CLIP_FULL),
                ("opacity", "1"),
            ],
        );
        log::info!("[labels] nav revealed ({} ms sweep)", sweep_ms);
    }

    fn fade_labels(&self) {
        let t = css::transition("opacity", LABEL_FADE_OUT_MS, "ease", 0);
        for label in &self.labels {
            dom::set_styles(&label.el, &[("transition", t.as_str()), ("opacity", "0")]);
        }
    }

    fn remove_labels(&mut self) {
        for label in self.labels.drain(..) {
            label.el.remove();
        }
    }

    fn show_bottom_nav(&self) {
        let Some(bar) = ensure_bottom_nav(&self.document) else {
            return;
        };
        let t = css::transition("opacity", CHROME_FADE_MS, "ease", 0);
        dom::set_styles(&bar, &[("transition", t.as_str()), ("opacity", "1"), ("visibility", "visible")]);
    }
}

fn open_link(url: &str) {
    let Some(w) = web::window() else {
        return;
    };
    match NavTarget::classify(url) {
        NavTarget::SameTab(u) => {
            _ = w.location().set_href(u);
        }
        NavTarget::NewTab(u) => {
            _ = w.open_with_url_and_target(u, "_blank");
        }
        NavTarget::Ignored => {}
    }
}

fn nav_link(document: &web::Document, item: &NavItem) -> Option<web::HtmlElement> {
    let a = document
        .create_element("a")
        .ok()?
        .dyn_into::<web::HtmlAnchorElement>()
        .ok()?;
    a.set_href(item.url);
    a.set_text_content(Some(item.label));
    a.set_class_name("brain-nav-link");
    let url = item.url;
    let click = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        open_link(url);
    }) as Box<dyn FnMut(web::Event)>);
    _ = a.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
    click.forget();
    a.dyn_into::<web::HtmlElement>().ok()
}

/// Final nav bar. Created once, hidden behind a clip until revealed.
pub fn ensure_nav(document: &web::Document, font_stack: &str) -> Option<web::HtmlElement> {
    if let Some(nav) = dom::html_element_by_id(document, NAV_ID) {
        return Some(nav);
    }
    let container = dom::create_div(document, Some(NAV_CONTAINER_ID), "brain-navigation-container")?;
    let nav = dom::create_div(document, Some(NAV_ID), "brain-navigation")?;
    dom::set_styles(
        &container,
        &[
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("right", "0"),
            ("display", "flex"),
            ("justify-content", "center"),
            ("padding", "24px 0"),
            ("z-index", "30"),
        ],
    );
    let font_size = css::px(LABEL_FONT_SIZE_PX);
    let spacing = css::px(LABEL_LETTER_SPACING_PX);
    dom::set_styles(
        &nav,
        &[
            ("display", "flex"),
            ("gap", "48px"),
            ("font-family", font_stack),
            ("font-size", font_size.as_str()),
            ("letter-spacing", spacing.as_str()),
            ("clip-path", css::CLIP_HIDDEN),
        ],
    );
    for item in NAV_ITEMS.iter() {
        if let Some(link) = nav_link(document, item) {
            dom::set_styles(&link, &[("color", "#fff"), ("text-decoration", "none")]);
            _ = nav.append_child(&link);
        }
    }
    _ = container.append_child(&nav);
    dom::append_to_body(document, &container);
    Some(nav)
}

pub fn ensure_bottom_nav(document: &web::Document) -> Option<web::HtmlElement> {
    if let Some(bar) = dom::html_element_by_id(document, BOTTOM_NAV_ID) {
        return Some(bar);
    }
    let bar = dom::create_div(document, Some(BOTTOM_NAV_ID), "bottom-navigation")?;
    dom::set_styles(
        &bar,
        &[
            ("position", "fixed"),
            ("bottom", "20px"),
            ("left", "50%"),
            ("transform", "translateX(-50%)"),
            ("display", "flex"),
            ("gap", "28px"),
            ("opacity", "0"),
            ("visibility", "hidden"),
            ("z-index", "30"),
        ],
    );
    for (label, url) in BOTTOM_NAV_LINKS {
        let Ok(a) = document.create_element("a") else {
            continue;
        };
        _ = a.set_attribute("href", url);
        if url.starts_with("http") {
            _ = a.set_attribute("target", "_blank");
            _ = a.set_attribute("rel", "noopener noreferrer");
        }
        a.set_text_content(Some(label));
        _ = a.set_attribute("style", "color:#9aa4b2;text-decoration:none;font-size:12px;");
        _ = bar.append_child(&a);
    }
    dom::append_to_body(document, &bar);
    Some(bar)
}
