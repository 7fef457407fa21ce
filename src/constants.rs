/// Markup contract: element ids, selectors and class names the page exposes.
///
/// The stylesheet supplies the states behind these classes; this layer only
/// toggles them.
// Header
pub const HEADER_ID: &str = "header";
pub const HEADER_SCROLLED_CLASS: &str = "scrolled";

// Burger menu
pub const BURGER_ID: &str = "burger";
pub const MOBILE_NAV_ID: &str = "mobileNav";
pub const NAV_OVERLAY_ID: &str = "navOverlay";
pub const MENU_CLOSE_SELECTOR: &str = "[data-close]";
pub const OPEN_CLASS: &str = "open";

// Hero particles
pub const PARTICLES_ID: &str = "particles";
pub const PARTICLE_CLASS: &str = "hero__particle";

// Reveal + counters
pub const VISIBLE_CLASS: &str = "visible";
pub const EMBLEM_SELECTOR: &str = ".emblem";
pub const ANIMATE_SELECTOR: &str = "[data-animate]";
pub const ANIMATE_ATTR: &str = "data-animate";
pub const DELAY_ATTR: &str = "data-delay";
pub const CASCADE_GROUP_SELECTORS: [&str; 2] = [".services-list", ".gallery"];
pub const COUNT_SELECTOR: &str = "[data-count]";
pub const COUNT_ATTR: &str = "data-count";

// Vertical video
pub const VIDEO_VERTICAL_ID: &str = "videoVertical";
pub const VIDEO_OVERLAY_ID: &str = "videoOverlay";
pub const HIDDEN_CLASS: &str = "hidden";

// Gallery
pub const GALLERY_TRACK_ID: &str = "galleryTrack";
pub const GALLERY_CARD_SELECTOR: &str = ".gallery__card";
pub const GALLERY_DOT_SELECTOR: &str = ".gallery__dot";
pub const GALLERY_DOT_ACTIVE_CLASS: &str = "gallery__dot--active";
pub const GALLERY_INDEX_ATTR: &str = "data-index";

// Section lines
pub const SECTION_SELECTOR: &str = ".section";
pub const SECTION_LINE_STYLE: &str = "position: absolute; top: 0; left: 0; right: 0; height: 1px; \
     background: linear-gradient(to right, transparent, rgba(196,145,79,0.25), transparent); \
     pointer-events: none;";

// Active nav
pub const NAV_SECTION_SELECTOR: &str = "section[id]";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_ACTIVE_COLOR: &str = "var(--gold)";

// Floating contact button
pub const WA_FLOAT_SELECTOR: &str = ".wa-float";
pub const CTA_SECTION_ID: &str = "contacto";

// Ping-pong logo
pub const VID_FORWARD_ID: &str = "vidForward";
pub const VID_REVERSE_ID: &str = "vidReverse";
pub const EMBLEM_VIDEO_HIDDEN_CLASS: &str = "emblem__video--hidden";
