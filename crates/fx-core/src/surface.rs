//! Capabilities the engines draw through. The web front-end implements these
//! over `web-sys`; tests implement them with recording mocks.

use crate::color::{ColorStop, Rgb};
use crate::geometry::{effective_pixel_ratio, Rect};
use glam::Vec2;
use smallvec::SmallVec;

/// Outline of a filled shape, in the local frame of the shape's origin.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    Rect { origin: Vec2, size: Vec2 },
    Polygon(SmallVec<[Vec2; 4]>),
}

/// A 2D drawing surface backed by a resizable pixel buffer.
pub trait Canvas2d {
    /// Displayed size and position in CSS pixels.
    fn bounding_rect(&self) -> Rect;
    /// Resize the backing store. Clears existing pixels and the transform.
    fn set_backing_size(&mut self, width: u32, height: u32);
    fn scale(&mut self, factor: f64);
    fn clear(&mut self, width: f32, height: f32);
    /// Fill a circle with a radial gradient running from the centre outwards.
    fn fill_radial(&mut self, center: Vec2, radius: f32, stops: &[ColorStop]);
    fn stroke_gradient_line(&mut self, from: Vec2, to: Vec2, stops: &[ColorStop], width: f32);
    /// Fill `shape` translated to `origin` and rotated by `rotation` radians.
    fn fill_shape(&mut self, origin: Vec2, rotation: f32, alpha: f32, color: Rgb, shape: &Shape);
}

/// A styled element of the page.
pub trait Element: Clone {
    fn bounding_rect(&self) -> Rect;
    fn set_style(&self, property: &str, value: &str);
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// First descendant matching `selector`.
    fn query(&self, selector: &str) -> Option<Self>;
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_text(&self, text: &str);
}

/// The three nodes that make up the cursor overlay.
#[derive(Clone, Debug)]
pub struct Overlay<N> {
    pub dot: N,
    pub ring: N,
    pub label: N,
}

/// Page-level access used by the cursor follower.
pub trait Document {
    type Node: Element;

    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn append_overlay(&self) -> Option<Overlay<Self::Node>>;
    fn remove_overlay(&self, overlay: &Overlay<Self::Node>);
}

/// Match the backing store to the displayed size times the pixel ratio and
/// scale drawing so callers keep working in CSS pixels.
pub fn sync_backing_surface<C: Canvas2d>(canvas: &mut C, device_pixel_ratio: f64, cap: Option<f64>) {
    let dpr = effective_pixel_ratio(device_pixel_ratio, cap);
    let rect = canvas.bounding_rect();
    let width = (rect.width as f64 * dpr).max(0.0) as u32;
    let height = (rect.height as f64 * dpr).max(0.0) as u32;
    canvas.set_backing_size(width, height);
    canvas.scale(dpr);
}
