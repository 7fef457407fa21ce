// Timing and geometry tuning shared by the page behaviors.

// Header
pub const HEADER_SCROLLED_AFTER_PX: f64 = 50.0; // scrollY beyond which the header is "scrolled"

// Reveal observation
pub const REVEAL_THRESHOLD: f64 = 0.12; // visible fraction that triggers a reveal
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -30px 0px"; // fire slightly before fully on screen
pub const COUNTER_THRESHOLD: f64 = 0.5; // counters wait until substantially visible

// Reveal scheduling (milliseconds)
pub const STAGGER_CHILD_STEP_MS: u32 = 120;
pub const GROUP_CASCADE_STEP_MS: u32 = 80;
pub const GROUP_CASCADE_CYCLE: usize = 6;
pub const EMBLEM_REVEAL_DELAY_MS: u32 = 150;

// Counter tween
pub const COUNTER_DURATION_MS: f64 = 1800.0;

// Gallery
pub const GALLERY_CARD_GAP_PX: f64 = 16.0;
pub const GALLERY_DRAG_FACTOR: f64 = 1.4; // 1px of pointer travel pans the track 1.4px

// Active nav / floating button thresholds
pub const NAV_SECTION_THRESHOLD: f64 = 0.4;
pub const CTA_THRESHOLD: f64 = 0.3;

// Hero particles
pub const PARTICLE_COUNT: usize = 14;
pub const PARTICLE_LEFT_PCT: (f64, f64) = (5.0, 90.0); // (min, span)
pub const PARTICLE_HEIGHT_PX: (f64, f64) = (60.0, 180.0);
pub const PARTICLE_DELAY_SEC: (f64, f64) = (0.0, 7.0);
pub const PARTICLE_DURATION_SEC: (f64, f64) = (7.0, 6.0);
