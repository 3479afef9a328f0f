/// Selectors, class names and tuning constants for the page enhancements.
///
/// These are the defaults behind `SiteConfig`; the `<html>` element may
/// override the numeric ones through `data-*` attributes.
// Header
pub const HEADER_SELECTOR: &str = ".site-header";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const SCROLLED_THRESHOLD_PX: f64 = 4.0; // strict: scroll_y must exceed this

// Mobile menu
pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const MENU_SELECTOR: &str = "#mainmenu";
pub const MENU_OPEN_CLASS: &str = "open";
pub const ARIA_EXPANDED: &str = "aria-expanded";

// In-page anchors
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const ANCHOR_OFFSET_PX: f64 = 8.0; // gap kept below the sticky header

// Reveal on scroll
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_CLASS: &str = "in";
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";
pub const REVEAL_THRESHOLD: f64 = 0.08;

// Scroll spy
pub const SECTION_SELECTOR: &str = "main section[id]";
pub const NAV_LINK_SELECTOR: &str = ".site-nav .menu a";
pub const ACTIVE_CLASS: &str = "active";
pub const SPY_OFFSET_PX: f64 = 20.0;

// Parallax
pub const ORNAMENT_SELECTOR: &str = ".hero-ornament";
pub const PARALLAX_FACTOR: f64 = 0.15;

// Embedded 3D viewers
pub const EMBED_SELECTOR: &str = ".sketchfab-embed iframe";
pub const EMBED_ROOT_MARGIN: &str = "0px 0px -25% 0px";
pub const AUTOSTART_PARAM: &str = "autostart";

// Media queries
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
