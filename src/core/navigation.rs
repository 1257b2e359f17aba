//! Navbar behavior shared by the landing page

/// Viewports at or below this width use the mobile layout
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Scroll offset after which the mobile navbar switches to its scrolled style
pub const MOBILE_SCROLL_THRESHOLD: f64 = 50.0;

/// Scroll offset after which the desktop navbar switches to its scrolled style
pub const DESKTOP_SCROLL_THRESHOLD: f64 = 100.0;

pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width <= MOBILE_BREAKPOINT
}

/// Whether the navbar should carry the `scrolled` class
pub fn navbar_scrolled(scroll_y: f64, viewport_width: f64) -> bool {
    let threshold = if is_mobile(viewport_width) {
        MOBILE_SCROLL_THRESHOLD
    } else {
        DESKTOP_SCROLL_THRESHOLD
    };
    scroll_y > threshold
}
