/// How `window.scrollTo` should move to an anchor target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

#[inline]
pub fn header_is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Fragment selector for anchors that should smooth-scroll in-page.
///
/// Bare `#` and `#top` keep the browser's own jump-to-top behavior.
#[inline]
pub fn in_page_target(href: Option<&str>) -> Option<&str> {
    match href {
        None | Some("") | Some("#") | Some("#top") => None,
        Some(h) if h.starts_with('#') => Some(h),
        Some(_) => None,
    }
}

/// Document-space scroll position that lands `target_top` (viewport
/// coordinates) just below a sticky header.
#[inline]
pub fn anchor_scroll_top(target_top: f64, scroll_y: f64, header_height: f64, pad: f64) -> f64 {
    target_top + scroll_y - header_height - pad
}

#[inline]
pub fn scroll_behavior(reduced_motion: bool) -> ScrollMode {
    if reduced_motion {
        ScrollMode::Instant
    } else {
        ScrollMode::Smooth
    }
}

#[inline]
pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y * factor
}

pub fn parallax_transform(offset: f64) -> String {
    // f64 Display never uses an exponent; -0 is folded into 0
    let offset = if offset == 0.0 { 0.0 } else { offset };
    format!("translate3d(0, {}px, 0)", offset)
}
