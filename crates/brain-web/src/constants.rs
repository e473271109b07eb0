// Page wiring: element ids, chrome timings and renderer tuning.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "brain-canvas";
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const LOADING_PERCENT_ID: &str = "loading-percentage";

// Elements created at runtime
pub const LABELS_LAYER_ID: &str = "brain-labels";
pub const NAV_CONTAINER_ID: &str = "brain-navigation-container";
pub const NAV_ID: &str = "brain-navigation";
pub const CONTROL_PANEL_ID: &str = "brain-control-panel";
pub const CONTROL_TAB_ID: &str = "brain-control-tab";
pub const ZOOM_SLIDER_ID: &str = "brain-zoom-slider";
pub const XRAY_TOGGLE_ID: &str = "brain-xray-toggle";
pub const BRAINSTORM_TOGGLE_ID: &str = "brain-brainstorm-toggle";
pub const RESET_BUTTON_ID: &str = "brain-reset";
pub const BOTTOM_NAV_ID: &str = "bottom-navigation";

// Loading overlay
pub const OVERLAY_FADE_DELAY_MS: i32 = 300;
pub const OVERLAY_HIDE_DELAY_MS: i32 = 800;
pub const OVERLAY_FADE_MS: u32 = 800;

// Labels
pub const LABEL_FONT_SIZE_PX: f32 = 14.0;
pub const LABEL_LETTER_SPACING_PX: f32 = 2.0;
pub const LABEL_FADE_IN_MS: u32 = 1500;
pub const LABEL_FADE_OUT_MS: u32 = 600;
pub const LABEL_SLIDE_EASING: &str = "cubic-bezier(0.4, 0.0, 0.2, 1)";
pub const NAV_SWEEP_EASING: &str = "cubic-bezier(0.25, 0.1, 0.25, 1)";
pub const CHROME_FADE_MS: u32 = 800;

pub const BOTTOM_NAV_LINKS: [(&str, &str); 4] = [
    ("LinkedIn", "https://www.linkedin.com/in/alex-speer/"),
    ("GitHub", "https://github.com/alexanderspeer"),
    ("Email", "mailto:your.email@example.com"),
    ("Portfolio", "/portfolio"),
];

// Pointer
pub const WHEEL_ZOOM_PER_PIXEL: f32 = 0.001;

// Renderer
pub const SCENE_SEED: u64 = 0x6272_6169_6e; // "brain"
pub const BLOOM_STRENGTH: f32 = 0.9;
pub const BLOOM_THRESHOLD: f32 = 0.35;
pub const MAX_FRAME_DT: f32 = 0.1;
