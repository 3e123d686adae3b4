//! Rectangles, viewport classification and the edge-wrap rules shared by the
//! particle engines.

use crate::constants::MOBILE_BREAKPOINT_PX;
use glam::Vec2;

/// Bounding rectangle in viewport (client) coordinates, CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Convert a client coordinate into rect-local space.
    #[inline]
    pub fn to_local(&self, client: Vec2) -> Vec2 {
        client - Vec2::new(self.left, self.top)
    }
}

/// What the engines need to know about the page they run in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub touch_capable: bool,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT_PX || self.touch_capable
    }
}

/// Effective backing-store scale: falls back to 1 for missing/invalid ratios
/// and honours an optional cap.
pub fn effective_pixel_ratio(device_pixel_ratio: f64, cap: Option<f64>) -> f64 {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    match cap {
        Some(max) => dpr.min(max),
        None => dpr,
    }
}

/// Wrap a point that crossed an edge of `[0, bounds]` to the opposite edge.
#[inline]
pub fn wrap_to_opposite_edge(pos: &mut Vec2, bounds: Vec2) {
    if pos.x < 0.0 {
        pos.x = bounds.x;
    }
    if pos.x > bounds.x {
        pos.x = 0.0;
    }
    if pos.y < 0.0 {
        pos.y = bounds.y;
    }
    if pos.y > bounds.y {
        pos.y = 0.0;
    }
}

/// Like [`wrap_to_opposite_edge`] but lets the point travel `margin` past
/// each edge first, so a shape fully leaves before it reappears.
#[inline]
pub fn wrap_with_margin(pos: &mut Vec2, margin: f32, bounds: Vec2) {
    if pos.x < -margin {
        pos.x = bounds.x + margin;
    }
    if pos.x > bounds.x + margin {
        pos.x = -margin;
    }
    if pos.y < -margin {
        pos.y = bounds.y + margin;
    }
    if pos.y > bounds.y + margin {
        pos.y = -margin;
    }
}
