use crate::constants::WHEEL_ZOOM_PER_PIXEL;

/// What a key press means for the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    SkipIntro,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "Escape" | "Esc" => Some(KeyAction::SkipIntro),
        _ => None,
    }
}

/// Pointer drag tracking in CSS pixels.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: [f32; 2],
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, x: f32, y: f32) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last = [x, y];
    }

    /// Movement since the previous sample, or None when not dragging with
    /// this pointer.
    pub fn move_to(&mut self, pointer_id: i32, x: f32, y: f32) -> Option<[f32; 2]> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let d = [x - self.last[0], y - self.last[1]];
        self.last = [x, y];
        Some(d)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if pointer_id == self.pointer_id {
            self.active = false;
        }
    }
}

/// Distance after a wheel step; positive `delta_y` zooms out.
#[inline]
pub fn wheel_zoom(distance: f32, delta_y: f32) -> f32 {
    distance * (1.0 + delta_y * WHEEL_ZOOM_PER_PIXEL).max(0.1)
}
