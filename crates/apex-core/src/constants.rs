// Shared tuning constants for the landing page effects.

// Counters
pub const COUNTER_DURATION_MS: f64 = 1800.0;

// Viewport triggers
pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";
pub const COUNTER_THRESHOLD: f64 = 0.5;

// Pointer effects
pub const TILT_MAX_Y_DEG: f32 = 14.0; // rotateY per unit of normalized x offset (7deg at an edge)
pub const TILT_MAX_X_DEG: f32 = 10.0; // rotateX per unit of normalized y offset (5deg at an edge)
pub const TILT_PERSPECTIVE_PX: f32 = 800.0;
pub const MAGNETIC_PULL: f32 = 0.25; // fraction of the center offset applied as translation

// Cursor
pub const CURSOR_RING_SMOOTHING: f32 = 0.12; // per frame, not time-normalized
pub const CURSOR_OFFSCREEN: [f32; 2] = [-100.0, -100.0];

// Countdown
pub const COUNTDOWN_DAYS_AHEAD: u64 = 3;
pub const COUNTDOWN_TICK_MS: u32 = 1000;
pub const MS_PER_DAY: i64 = 86_400_000;
pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_SECOND: i64 = 1_000;

// Form submission
pub const SUBMIT_LATENCY_MS: u32 = 1600;
pub const SUCCESS_DISPLAY_MS: u32 = 5000;
pub const SUBMIT_DEFAULT_LABEL: &str = "Submit";
pub const SUBMIT_SENT_LABEL: &str = "Message Sent!";

// Navigation and scroll
pub const NAV_SCROLLED_AFTER_PX: f64 = 60.0;
pub const HERO_PARALLAX_FACTOR: f64 = 0.25;
pub const DEFAULT_PAGE: &str = "index.html";

// Loader
pub const LOADER_HOLD_MS: u32 = 1800;
pub const LOADER_FADE_MS: u32 = 800;

// Plan toggle
pub const PRICE_SWAP_MS: u32 = 200;
pub const PRICE_SLIDE_PX: f32 = -20.0;

// Lightbox
pub const LIGHTBOX_DEFAULT_ICON: &str = "\u{1F3CB}\u{FE0F}";
