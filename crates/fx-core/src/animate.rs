/// Outcome of one display frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRequest {
    /// Schedule another frame.
    Continue,
    /// Nothing left to animate; the driver stops until woken again.
    Idle,
}

/// Implemented by every engine. The host calls `frame` once per display
/// refresh while the previous call returned [`FrameRequest::Continue`], and
/// after any input that may have produced new work.
pub trait Animate {
    fn frame(&mut self) -> FrameRequest;

    /// Whether the engine currently wants frames.
    fn is_animating(&self) -> bool;
}
