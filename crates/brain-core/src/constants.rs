use glam::Vec3;

// Shared tuning constants for the brain scene and the intro timeline.
// All times are in seconds unless the name says otherwise.

// Scene layout
pub const BRAIN_CENTER: Vec3 = Vec3::ZERO;
pub const LABEL_ANCHOR_OFFSET: Vec3 = Vec3::new(0.0, 80.0, 0.0); // lift labels above their region

// Camera
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1000.0;
pub const MIN_DISTANCE_BASE: f32 = 50.0; // scaled by viewport_scale
pub const MAX_DISTANCE_BASE: f32 = 2500.0; // scaled by viewport_scale
pub const POST_INTRO_MAX_DISTANCE: f32 = 700.0;
pub const AUTO_ROTATE_SPEED: f32 = 0.15;
pub const ORBIT_DAMPING: f32 = 0.25;
pub const ORBIT_ROTATE_SPEED: f32 = 0.1;
pub const FALLBACK_DEFAULT_DISTANCE: f32 = 320.0;

// Viewport scaling reference (designer's screen)
pub const REFERENCE_WIDTH: f32 = 2560.0;
pub const REFERENCE_HEIGHT: f32 = 1440.0;
pub const VIEWPORT_SCALE_EXPONENT: f32 = 0.6;
pub const VIEWPORT_SCALE_MIN: f32 = 0.7;
pub const VIEWPORT_SCALE_MAX: f32 = 1.3;

// Intro timeline
pub const INTRO_INITIAL_DELAY: f64 = 1.0;
pub const DOLLY_FROM: f32 = 50.0;
pub const DOLLY_TO: f32 = 320.0;
pub const DOLLY_DURATION: f64 = 6.0;
pub const SPARKLES_DELAY: f64 = 2.0;
pub const LABELS_DELAY: f64 = 3.0; // halfway into the dolly
pub const LABEL_STAGGER_MS: u32 = 400;
pub const NAV_TRANSITION_DELAY: f64 = 1.0; // after the dolly completes
pub const LABELS_TO_NAV_DELAY: f64 = 0.2;
pub const LABEL_SLIDE_MS: u32 = 2500;
pub const NAV_REVEAL_DELAY: f64 = 2.4; // after labels start sliding
pub const NAV_SWEEP_MS: u32 = 1500;
pub const LABELS_FADE_DELAY: f64 = 1.0; // after the reveal starts
pub const CHROME_DELAY: f64 = 1.6; // after the reveal starts
pub const LABELS_REMOVE_DELAY: f64 = 4.2; // after labels start sliding
pub const SETTLE_DELAY: f64 = 4.5; // after the nav transition starts

// Rising particles
pub const RISING_PEAK: f32 = 0.6;
pub const RISING_UP_DURATION: f64 = 2.5;
pub const RISING_LINGER: f64 = 2.0;
pub const RISING_FADE_DURATION: f64 = 2.0;
pub const BRAINSTORM_DURATION: f64 = 2.0;
pub const BUBBLE_COUNT: usize = 1200;

// Particle transform
pub const PROGRESS_FORWARD_END: f32 = 1.5;
pub const PROGRESS_FORWARD_DURATION: f64 = 5.9;
pub const PROGRESS_REVERSE_FROM: f32 = 1.0;
pub const PROGRESS_REVERSE_TO: f32 = 0.5;
pub const PROGRESS_REVERSE_DURATION: f64 = 2.0;
pub const PARTICLE_DURATION: f32 = 1.0;
pub const PARTICLE_MAX_DELAY: f32 = 0.3;
pub const PARTICLE_SCALE_MIN: f32 = 200.0;
pub const PARTICLE_SCALE_MAX: f32 = 400.0;
pub const PARTICLE_POINT_SIZE: f32 = 1.9;
pub const PARTICLE_START_JITTER: f32 = 5.0;
pub const PARTICLE_START_Z_MIN: f32 = -80.0;
pub const PARTICLE_START_Z_MAX: f32 = 1500.0;
pub const PARTICLE_SWIRL_ANGLE: f32 = 1.0;

// Loading ring formation
pub const RING_INNER_RADIUS: f32 = 100.0;
pub const RING_OUTER_RADIUS: f32 = 40.0;
pub const RING_THETA_SEGMENTS: u32 = 150;
pub const RING_PHI_SEGMENTS: u32 = 150;
pub const RING_THETA_START: f32 = 20.0;

// X-ray overlay
pub const XRAY_C: f32 = 0.9;
pub const XRAY_C_HIDDEN: f32 = 1.0;
pub const XRAY_P: f32 = 6.7;
pub const XRAY_OFFSET_Y: f32 = 0.3;
pub const XRAY_PHASE_LOW: f32 = 3.0;
pub const XRAY_PHASE_HIGH: f32 = 5.0;
pub const XRAY_TOGGLE_DURATION: f64 = 3.0;
pub const XRAY_WELD_PRECISION: f32 = 1.0e4; // 4 decimal places

// Control panel
pub const ZOOM_SLIDER_HALF_RANGE: f32 = 300.0;
