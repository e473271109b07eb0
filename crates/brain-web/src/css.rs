//! Inline style strings for the chrome. Pure string building so the values
//! can be checked off-browser.

#[inline]
pub fn px(v: f32) -> String {
    format!("{:.1}px", v)
}

/// Nav bar hidden behind its right edge.
pub const CLIP_HIDDEN: &str = "inset(0 100% 0 0)";
pub const CLIP_FULL: &str = "inset(0 0 0 0)";

pub fn transition(property: &str, ms: u32, easing: &str, delay_ms: u32) -> String {
    if ms == 0 {
        return "none".to_string();
    }
    format!("{} {}ms {} {}ms", property, ms, easing, delay_ms)
}

/// Comma-joined transitions for several properties sharing timing.
pub fn transitions(properties: &[&str], ms: u32, easing: &str) -> String {
    if ms == 0 || properties.is_empty() {
        return "none".to_string();
    }
    properties
        .iter()
        .map(|p| format!("{} {}ms {}", p, ms, easing))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Delay before the `index`-th label starts fading in.
#[inline]
pub fn stagger_delay_ms(index: usize, stagger_ms: u32) -> u32 {
    index as u32 * stagger_ms
}

/// Label anchored by its bottom centre at `(x, y)`.
#[inline]
pub fn label_translate(x: f32, y: f32) -> String {
    format!("translate({:.1}px, {:.1}px) translate(-50%, -100%)", x, y)
}

/// Centre of a nav slot, relative to the viewport, expressed as the label
/// translate that puts the label's bottom centre on the slot's bottom centre.
#[inline]
pub fn slot_anchor(left: f32, top: f32, width: f32, height: f32) -> (f32, f32) {
    (left + width * 0.5, top + height)
}

#[inline]
pub fn opacity(visible: bool) -> &'static str {
    if visible {
        "1"
    } else {
        "0"
    }
}
