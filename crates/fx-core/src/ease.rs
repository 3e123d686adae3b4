use glam::Vec2;

#[inline]
pub fn lerp(start: f32, end: f32, factor: f32) -> f32 {
    start + (end - start) * factor
}

/// A 2D value that moves a fixed fraction of the remaining distance toward
/// its target on every step. With `factor` in `(0, 1]` it never overshoots.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spring2 {
    pub current: Vec2,
    pub target: Vec2,
}

impl Spring2 {
    #[inline]
    pub fn step(&mut self, factor: f32) {
        self.current = Vec2::new(
            lerp(self.current.x, self.target.x, factor),
            lerp(self.current.y, self.target.y, factor),
        );
    }

    /// Both axes within `epsilon` of the target.
    #[inline]
    pub fn is_settled(&self, epsilon: f32) -> bool {
        let gap = (self.target - self.current).abs();
        gap.x <= epsilon && gap.y <= epsilon
    }

    #[inline]
    pub fn snap(&mut self) {
        self.current = self.target;
    }
}

/// What a spring-driven engine is doing between frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Idle,
    /// Following a live pointer-derived target.
    Tracking,
    /// Easing back to rest after the pointer left.
    Returning,
}
