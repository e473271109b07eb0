//! Everything the render loop reads each frame, in one place.
//!
//! The intro director writes into the scene through [`BrainScene::apply`];
//! after the intro the control panel drives its own tweens through an
//! ambient scheduler owned here.

use crate::camera::{viewport_scale, OrbitCamera};
use crate::constants::*;
use crate::ease::Ease;
use crate::labels::LabelTracker;
use crate::memory::{MemoryRegions, REGION_KEYS};
use crate::mesh::{merge_meshes, SceneNode};
use crate::panel::ControlPanel;
use crate::particles::{ParticleError, ParticleSystem};
use crate::rising::RisingState;
use crate::scheduler::{Channel, Scheduler};
use crate::tween::Tween;
use crate::xray::XRayState;
use glam::Vec2;

pub struct BrainScene {
    pub camera: OrbitCamera,
    pub particles: ParticleSystem,
    pub xray: XRayState,
    pub rising: RisingState,
    pub labels: LabelTracker,
    pub regions: MemoryRegions,
    pub panel: ControlPanel,
    ambient: Scheduler<()>,
    rising_claimed: bool,
    viewport: Vec2,
    scale: f32,
}

impl BrainScene {
    /// Build the scene from parsed model nodes. Fails only when the model
    /// contributes no mesh vertices.
    pub fn new(
        nodes: &[SceneNode],
        seed: u64,
        width: f32,
        height: f32,
    ) -> Result<Self, ParticleError> {
        let merged = merge_meshes(nodes);
        let particles = ParticleSystem::new(&merged, seed)?;
        let regions = MemoryRegions::from_nodes(nodes, &REGION_KEYS);
        log::info!("[particles] {} memory regions", regions.len());
        let scale = viewport_scale(width, height);
        let aspect = if height > 0.0 { width / height } else { 1.0 };
        Ok(Self {
            camera: OrbitCamera::new(scale, aspect),
            particles,
            xray: XRayState::default(),
            rising: RisingState::default(),
            labels: LabelTracker::default(),
            regions,
            panel: ControlPanel::default(),
            ambient: Scheduler::new(),
            rising_claimed: false,
            viewport: Vec2::new(width, height),
            scale,
        })
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let scale = viewport_scale(width, height);
        self.camera.rescale(self.scale, scale);
        self.camera.set_aspect(width / height);
        self.viewport = Vec2::new(width, height);
        self.scale = scale;
    }

    /// Write one tween sample into the property behind `channel`.
    pub fn apply(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::CameraDolly => self.camera.dolly_to(value),
            Channel::ParticleProgress => self.particles.apply_progress(value),
            Channel::Rising => self.rising.set_level(value),
            Channel::XRayPhase => self.xray.apply_phase(value),
        }
    }

    /// Per-frame update outside the intro: panel tweens, orbit motion and
    /// the particle uniforms.
    pub fn tick(&mut self, now: f64, dt: f32) {
        let step = self.ambient.step_tweens(now);
        for (channel, value) in step.samples {
            self.apply(channel, value);
        }
        for done in step.completed {
            if done.channel == Channel::XRayPhase && !done.tween.rising() {
                self.xray.visible = false;
            }
        }
        self.camera.update(dt);
        let eye = self.camera.eye();
        self.particles.update(now as f32, eye, BRAIN_CENTER);
    }

    pub fn set_zoom(&mut self, distance: f32) {
        self.camera.zoom_to(distance);
    }

    pub fn toggle_xray(&mut self, on: bool, now: f64) {
        if self.panel.xray == on {
            return;
        }
        self.panel.xray = on;
        let tween = self.xray.toggle(on, now);
        self.ambient.animate(Channel::XRayPhase, tween);
        log::info!("[panel] x-ray {}", if on { "on" } else { "off" });
    }

    pub fn toggle_brainstorm(&mut self, on: bool, now: f64) {
        if self.panel.brainstorm == on {
            return;
        }
        self.panel.brainstorm = on;
        let from = self.rising.level;
        let tween = if on {
            Tween::new(from, RISING_PEAK, BRAINSTORM_DURATION, Ease::QuintOut, now)
        } else {
            Tween::new(from, 0.0, BRAINSTORM_DURATION, Ease::QuintIn, now)
        };
        self.claim_rising(tween);
        log::info!("[panel] brainstorm {}", if on { "on" } else { "off" });
    }

    fn claim_rising(&mut self, tween: Tween) {
        self.rising_claimed = true;
        self.ambient.animate(Channel::Rising, tween);
    }

    /// True once the control panel has driven the rising level; the intro
    /// leaves it alone from then on.
    pub fn rising_claimed(&self) -> bool {
        self.rising_claimed
    }

    /// Switch both effects off and return the camera to its default pose.
    /// Returns the distance the zoom slider should show.
    pub fn reset(&mut self, now: f64) -> f32 {
        self.toggle_xray(false, now);
        if self.panel.brainstorm {
            self.toggle_brainstorm(false, now);
        } else if self.rising.level > 0.0 {
            let from = self.rising.level;
            self.claim_rising(Tween::new(from, 0.0, BRAINSTORM_DURATION, Ease::QuintIn, now));
        }
        self.camera.target = BRAIN_CENTER;
        self.camera.set_eye(self.panel.default_eye());
        self.panel.default_distance()
    }

    /// Record the current camera pose as the reset target.
    pub fn capture_default(&mut self) -> f32 {
        let distance = self.camera.distance();
        self.panel.capture_default(self.camera.eye(), distance);
        distance
    }

    pub fn pending_ambient_tweens(&self) -> usize {
        self.ambient.pending_tweens()
    }
}
