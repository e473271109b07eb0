//! Camera description and the orbit rig around the brain.
//!
//! The rig is spherical: `distance` from the target, `azimuth` around +Y
//! (0 looks down -Z from the +Z side) and `polar` from +Y. The intro drives
//! the distance directly; pointer orbiting and auto-rotate are only enabled
//! once the rig is released.

use crate::constants::*;
use glam::{Mat4, Vec3};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix (WebGPU depth range).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Scale factor relative to the reference screen, damped and clamped so very
/// large or very small displays do not zoom to extremes.
pub fn viewport_scale(width: f32, height: f32) -> f32 {
    let reference = (REFERENCE_WIDTH * REFERENCE_WIDTH + REFERENCE_HEIGHT * REFERENCE_HEIGHT).sqrt();
    let current = (width * width + height * height).sqrt();
    let raw = current / reference;
    raw.powf(VIEWPORT_SCALE_EXPONENT)
        .clamp(VIEWPORT_SCALE_MIN, VIEWPORT_SCALE_MAX)
}

/// Camera position at the end of the scripted intro. The skip path uses the
/// same value, so both endings agree.
pub fn intro_end_eye() -> Vec3 {
    BRAIN_CENTER + Vec3::new(0.0, 0.0, DOLLY_TO)
}

const POLAR_EPS: f32 = 1.0e-3;

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    distance: f32,
    azimuth: f32,
    polar: f32,
    azimuth_vel: f32,
    polar_vel: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    interactive: bool,
    aspect: f32,
}

impl OrbitCamera {
    pub fn new(viewport_scale: f32, aspect: f32) -> Self {
        Self {
            target: BRAIN_CENTER,
            distance: DOLLY_FROM,
            azimuth: 0.0,
            polar: FRAC_PI_2,
            azimuth_vel: 0.0,
            polar_vel: 0.0,
            min_distance: MIN_DISTANCE_BASE * viewport_scale,
            max_distance: MAX_DISTANCE_BASE * viewport_scale,
            auto_rotate: false,
            auto_rotate_speed: AUTO_ROTATE_SPEED,
            interactive: false,
            aspect,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        self.target + self.distance * Vec3::new(sp * sa, cp, sp * ca)
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn camera(&self) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect: self.aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Rescale distance limits after a resize. The current distance follows
    /// only once the user controls the camera; while scripted it stays put.
    pub fn rescale(&mut self, old_scale: f32, new_scale: f32) {
        if (old_scale - new_scale).abs() <= 0.01 || old_scale <= 0.0 {
            return;
        }
        // a max below the viewport limit is the post-intro cap; keep it
        let capped = self.max_distance < MAX_DISTANCE_BASE * old_scale - 1e-3;
        self.min_distance = MIN_DISTANCE_BASE * new_scale;
        self.max_distance = if capped {
            self.max_distance.max(self.min_distance)
        } else {
            MAX_DISTANCE_BASE * new_scale
        };
        if self.interactive {
            self.distance *= new_scale / old_scale;
        }
    }

    /// Scripted distance change; ignores the user zoom limits.
    pub fn dolly_to(&mut self, distance: f32) {
        self.distance = distance.max(CAMERA_NEAR);
    }

    /// User zoom along the current view direction, clamped to the limits.
    pub fn zoom_to(&mut self, distance: f32) {
        self.distance = distance.clamp(self.min_distance, self.max_distance);
    }

    /// Place the eye at an absolute position, keeping the current target.
    pub fn set_eye(&mut self, eye: Vec3) {
        let offset = eye - self.target;
        let d = offset.length();
        if d <= f32::EPSILON {
            return;
        }
        self.distance = d;
        self.polar = (offset.y / d).clamp(-1.0, 1.0).acos();
        self.azimuth = offset.x.atan2(offset.z);
        self.azimuth_vel = 0.0;
        self.polar_vel = 0.0;
    }

    /// Snap to the scripted end pose and stop any residual motion.
    pub fn place_at_intro_end(&mut self) {
        self.target = BRAIN_CENTER;
        self.set_eye(intro_end_eye());
    }

    /// Hand the rig to the user: pointer orbiting plus slow auto-rotate.
    pub fn release(&mut self) {
        self.interactive = true;
        self.auto_rotate = true;
        self.max_distance = POST_INTRO_MAX_DISTANCE.max(self.min_distance);
    }

    /// Pointer drag in CSS pixels; `height` is the viewport height.
    pub fn drag(&mut self, dx: f32, dy: f32, height: f32) {
        if !self.interactive || height <= 0.0 {
            return;
        }
        let k = TAU / height * ORBIT_ROTATE_SPEED;
        self.azimuth_vel -= dx * k;
        self.polar_vel -= dy * k;
    }

    /// Advance auto-rotation and damped drag motion by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.auto_rotate {
            // one full turn per 60 s at speed 1.0
            self.azimuth += TAU / 60.0 * self.auto_rotate_speed * dt;
        }
        self.azimuth += self.azimuth_vel;
        self.polar = (self.polar + self.polar_vel).clamp(POLAR_EPS, PI - POLAR_EPS);
        let keep = (1.0 - ORBIT_DAMPING).powf(dt * 60.0);
        self.azimuth_vel *= keep;
        self.polar_vel *= keep;
        if self.azimuth > PI {
            self.azimuth -= TAU;
        } else if self.azimuth < -PI {
            self.azimuth += TAU;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_eye_round_trips_through_spherical() {
        let mut cam = OrbitCamera::new(1.0, 1.5);
        let eye = Vec3::new(-120.0, 40.0, 90.0);
        cam.set_eye(eye);
        assert!((cam.eye() - eye).length() < 1e-3);
    }

    #[test]
    fn viewport_scale_is_clamped() {
        assert!((viewport_scale(2560.0, 1440.0) - 1.0).abs() < 1e-5);
        assert_eq!(viewport_scale(100.0, 100.0), VIEWPORT_SCALE_MIN);
        assert_eq!(viewport_scale(20000.0, 20000.0), VIEWPORT_SCALE_MAX);
    }

    #[test]
    fn rescale_keeps_scripted_distance() {
        let mut cam = OrbitCamera::new(0.7, 1.0);
        cam.dolly_to(DOLLY_TO);
        cam.rescale(0.7, 1.0);
        assert_eq!(cam.distance(), DOLLY_TO);
        assert_eq!(cam.min_distance, MIN_DISTANCE_BASE);
        assert_eq!(cam.max_distance, MAX_DISTANCE_BASE);

        cam.release();
        cam.rescale(1.0, 0.7);
        assert!((cam.distance() - DOLLY_TO * 0.7).abs() < 1e-3);
        assert_eq!(cam.max_distance, POST_INTRO_MAX_DISTANCE);
    }

    #[test]
    fn drag_is_ignored_until_released() {
        let mut cam = OrbitCamera::new(1.0, 1.0);
        cam.dolly_to(DOLLY_TO);
        let before = cam.eye();
        cam.drag(200.0, 0.0, 800.0);
        cam.update(1.0 / 60.0);
        assert_eq!(cam.eye(), before);
        cam.release();
        cam.drag(200.0, 0.0, 800.0);
        cam.update(1.0 / 60.0);
        assert!((cam.eye() - before).length() > 1.0);
    }
}
