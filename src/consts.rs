//! Shared constants for the folio crate.

// ── Scroll-to-top ───────────────────────────────────────────────

/// Vertical scroll offset, in CSS pixels, above which the button is shown.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

/// Selector used to find an existing scroll-to-top button in the markup.
pub const SCROLL_TOP_SELECTOR: &str = ".scroll-to-top";

/// Class name given to a newly created scroll-to-top button.
pub const SCROLL_TOP_CLASS: &str = "scroll-to-top";

/// Class toggled on the button while the page is scrolled past the threshold.
pub const SCROLL_TOP_VISIBLE_CLASS: &str = "show";

/// Icon markup placed inside a newly created button.
pub const SCROLL_TOP_ICON_HTML: &str = r#"<i class="bi bi-arrow-up"></i>"#;

/// Accessible label for the button.
pub const SCROLL_TOP_LABEL: &str = "Back to top";

// ── Anchor navigation ───────────────────────────────────────────

/// Height reserved for the fixed navigation bar.
pub const NAV_OFFSET_PX: f64 = 70.0;

/// Same-page fragment links.
pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

// ── Reveal animation ────────────────────────────────────────────

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer root margin; the negative bottom margin pulls the trigger line up.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Elements watched by the reveal observer.
pub const REVEAL_SELECTOR: &str = ".project-card, .skill-badge";

/// Class applied once an element has been revealed.
pub const REVEAL_CLASS: &str = "fade-in";

// ── Card tilt ───────────────────────────────────────────────────

/// Cards that receive the pointer tilt effect.
pub const CARD_SELECTOR: &str = ".project-card";

/// Maximum rotation on either axis, in degrees.
pub const MAX_TILT_DEG: f64 = 5.0;

/// Upward translation applied while the pointer is over a card.
pub const TILT_LIFT_PX: f64 = 10.0;

/// Perspective distance for the tilt transform.
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;

// ── Theme ───────────────────────────────────────────────────────

/// Storage key for the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class on `<body>` that switches the stylesheet to dark mode.
pub const DARK_THEME_CLASS: &str = "dark-theme";

// ── Counter ─────────────────────────────────────────────────────

/// Counter timer period, roughly one frame at 60 Hz.
pub const COUNTER_TICK_MS: u32 = 16;

/// Default counter animation length.
pub const COUNTER_DEFAULT_DURATION_MS: f64 = 2000.0;

// ── Configuration ───────────────────────────────────────────────

/// `<body>` attribute that may carry a JSON [`crate::config::Config`].
pub const CONFIG_ATTRIBUTE: &str = "data-folio-config";
