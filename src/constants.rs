// Selectors and class names the page markup is expected to use.
//
// Kept free of crate imports so host tests can `include!` this file.

// Cursor
pub const SEL_CURSOR: &str = ".cursor";
pub const SEL_CURSOR_DOT: &str = ".cursor-dot";
pub const SEL_CURSOR_RING: &str = ".cursor-ring";
pub const SEL_CURSOR_HOVER_TARGETS: &str = "a, button, .card, .trainer-card, .program-card, .tilt-card, .gallery-item, .plan-card, .hud-box, .contact-info-item, .perk, .step";
pub const SEL_SPOTLIGHT: &str = ".hud-box";

// Navigation
pub const SEL_NAV: &str = "nav";
pub const SEL_HAMBURGER: &str = ".hamburger";
pub const SEL_MOBILE_MENU: &str = ".mobile-menu";
pub const SEL_NAV_LINKS: &str = ".nav-links a";

// Reveals and counters
pub const SEL_REVEAL: &str = ".reveal";
pub const SEL_COUNTER: &str = "[data-count]";

// Pointer effects
pub const SEL_TILT: &str = ".tilt-card";
pub const SEL_MAGNETIC: &str = ".magnetic";
pub const SEL_PROGRAM_ROW: &str = ".program-row";

// Before/after slider
pub const SEL_BA_CONTAINER: &str = ".ba-container";
pub const SEL_BA_BEFORE: &str = ".ba-before";
pub const SEL_BA_AFTER: &str = ".ba-after";
pub const SEL_BA_HANDLE: &str = ".ba-handle";

// Countdown
pub const SEL_COUNTDOWN: &str = ".countdown";
pub const SEL_COUNTDOWN_NUM: &str = ".cd-num";

// Forms
pub const SEL_FORM: &str = ".apex-form";
pub const SEL_FORM_FIELDS: &str = "input, textarea, select";
pub const SEL_FORM_GROUP: &str = ".form-group";
pub const SEL_FIELD_ERROR: &str = ".field-error";
pub const SEL_SUBMIT: &str = "[type=\"submit\"]";
pub const SEL_FORM_SUCCESS: &str = ".form-success";

// Plan toggle
pub const SEL_PLAN_TOGGLE: &str = ".plan-toggle";
pub const SEL_PLAN_PRICE: &str = ".plan-price-val";
pub const SEL_PLAN_PERIOD: &str = ".plan-period";

// Lightbox and hero
pub const SEL_GALLERY_ITEM: &str = ".gallery-item[data-lightbox]";
pub const ID_LIGHTBOX: &str = "lightbox";
pub const ID_LIGHTBOX_LABEL: &str = "lb-label";
pub const ID_LIGHTBOX_CLOSE: &str = "lb-close";
pub const ID_HERO: &str = "hero";
pub const SEL_HERO_NUMBER: &str = ".hero-number";
pub const ID_LOADER: &str = "loader";

// Classes toggled by the effects
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_CURSOR_HOVER: &str = "cursor-hover";
pub const CLASS_ERROR: &str = "error";
pub const CLASS_FIELD_ERROR: &str = "field-error";
pub const CLASS_LOADING: &str = "loading";
pub const CLASS_DONE: &str = "done";

// Data attributes
pub const ATTR_COUNT: &str = "data-count";
pub const ATTR_MINLENGTH: &str = "data-minlength";
pub const ATTR_LABEL: &str = "data-label";
pub const ATTR_LIGHTBOX: &str = "data-lightbox";
pub const ATTR_EMOJI: &str = "data-emoji";
pub const ATTR_MONTHLY: &str = "data-monthly";
pub const ATTR_ANNUAL: &str = "data-annual";
