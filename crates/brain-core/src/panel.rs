//! State behind the post-intro control panel.

use crate::camera::intro_end_eye;
use crate::constants::{CAMERA_NEAR, FALLBACK_DEFAULT_DISTANCE, ZOOM_SLIDER_HALF_RANGE};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomRange {
    pub min: f32,
    pub max: f32,
    pub value: f32,
}

#[derive(Clone, Debug, Default)]
pub struct ControlPanel {
    pub open: bool,
    pub xray: bool,
    pub brainstorm: bool,
    default_eye: Option<Vec3>,
    default_distance: Option<f32>,
}

impl ControlPanel {
    /// Remember the settled camera pose as the RESET target.
    pub fn capture_default(&mut self, eye: Vec3, distance: f32) {
        log::info!("[panel] default camera distance {:.2}", distance);
        self.default_eye = Some(eye);
        self.default_distance = Some(distance);
    }

    pub fn default_distance(&self) -> f32 {
        self.default_distance.unwrap_or(FALLBACK_DEFAULT_DISTANCE)
    }

    pub fn default_eye(&self) -> Vec3 {
        self.default_eye.unwrap_or_else(intro_end_eye)
    }

    /// Slider bounds, centred on the default distance.
    pub fn zoom_range(&self) -> ZoomRange {
        let d = self.default_distance();
        ZoomRange {
            min: (d - ZOOM_SLIDER_HALF_RANGE).max(CAMERA_NEAR),
            max: d + ZOOM_SLIDER_HALF_RANGE,
            value: d,
        }
    }

    pub fn toggle_open(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_follows_captured_default() {
        let mut p = ControlPanel::default();
        assert_eq!(
            p.zoom_range(),
            ZoomRange {
                min: 20.0,
                max: 620.0,
                value: 320.0
            }
        );
        p.capture_default(Vec3::new(0.0, 0.0, 250.0), 250.0);
        let r = p.zoom_range();
        assert_eq!((r.min, r.max, r.value), (1.0, 550.0, 250.0));
    }
}
