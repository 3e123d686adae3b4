//! Card tilt: rotates an element in 3D toward the pointer, with a shadow
//! and an optional pointer-following glow.

use crate::animate::{Animate, FrameRequest};
use crate::config::TiltConfig;
use crate::constants::{TILT_SHADOW_BASE_BLUR, TILT_SHADOW_BASE_OPACITY};
use crate::ease::{Motion, Spring2};
use crate::error::Result;
use crate::geometry::Rect;
use crate::surface::Element;
use glam::Vec2;

/// Drop shadow implied by a pair of tilt angles (degrees).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltShadow {
    pub offset: Vec2,
    pub blur: f32,
    pub opacity: f32,
}

impl TiltShadow {
    pub fn from_angles(rotate_x: f32, rotate_y: f32) -> Self {
        let spread = rotate_x.abs() + rotate_y.abs();
        Self {
            offset: Vec2::new(rotate_y * 2.0, -rotate_x * 2.0),
            blur: TILT_SHADOW_BASE_BLUR + spread,
            opacity: TILT_SHADOW_BASE_OPACITY + spread / 100.0,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "{}px {}px {}px rgba(0, 0, 0, {})",
            self.offset.x, self.offset.y, self.blur, self.opacity
        )
    }
}

/// Rotation state is kept as a spring over `(rotate_x, rotate_y)`.
pub struct TiltFollower<E: Element> {
    config: TiltConfig,
    element: Option<E>,
    rect: Rect,
    tilt: Spring2,
    motion: Motion,
}

impl<E: Element> TiltFollower<E> {
    pub fn new(config: TiltConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            element: None,
            rect: Rect::default(),
            tilt: Spring2::default(),
            motion: Motion::Idle,
        })
    }

    /// Current `(rotate_x, rotate_y)` in degrees.
    pub fn angles(&self) -> Vec2 {
        self.tilt.current
    }

    pub fn target_angles(&self) -> Vec2 {
        self.tilt.target
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn shadow(&self) -> TiltShadow {
        TiltShadow::from_angles(self.tilt.current.x, self.tilt.current.y)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn init(&mut self, element: E) {
        self.rect = element.bounding_rect();
        element.set_style("will-change", "transform");
        element.set_style("transform-style", "preserve-3d");
        self.element = Some(element);
    }

    pub fn on_pointer_enter(&mut self) {
        if let Some(element) = self.element.as_ref() {
            self.rect = element.bounding_rect();
        }
    }

    pub fn on_pointer_move(&mut self, client: Vec2) {
        let Some(element) = self.element.as_ref() else {
            return;
        };
        let half = self.rect.size() / 2.0;
        let delta = client - self.rect.center();
        let norm = Vec2::new(
            if half.x > 0.0 { delta.x / half.x } else { 0.0 },
            if half.y > 0.0 { delta.y / half.y } else { 0.0 },
        );
        self.tilt.target = Vec2::new(-norm.y, norm.x) * self.config.max_tilt;

        if self.config.enable_glow {
            if let Some(glow) = element.query(&self.config.glow_selector) {
                let local = self.rect.to_local(client);
                glow.set_style("background", &glow_gradient(local));
            }
        }
        self.motion = Motion::Tracking;
    }

    pub fn on_pointer_leave(&mut self) {
        if self.element.is_none() {
            return;
        }
        self.tilt.target = Vec2::ZERO;
        self.motion = Motion::Returning;
    }

    pub fn on_resize(&mut self) {
        if let Some(element) = self.element.as_ref() {
            self.rect = element.bounding_rect();
        }
    }

    pub fn destroy(&mut self) {
        self.motion = Motion::Idle;
        self.element = None;
    }

    fn transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            self.config.perspective, self.tilt.current.x, self.tilt.current.y
        )
    }

    fn set_glow_opacity(&self, element: &E, opacity: &str) {
        if !self.config.enable_glow {
            return;
        }
        if let Some(glow) = element.query(&self.config.glow_selector) {
            glow.set_style("opacity", opacity);
        }
    }
}

fn glow_gradient(local: Vec2) -> String {
    format!(
        "radial-gradient(circle at {}px {}px, rgba(var(--primary-rgb), 0.15) 0%, rgba(var(--accent-rgb), 0.08) 30%, transparent 70%)",
        local.x, local.y
    )
}

impl<E: Element> Animate for TiltFollower<E> {
    fn frame(&mut self) -> FrameRequest {
        let Some(element) = self.element.clone() else {
            self.motion = Motion::Idle;
            return FrameRequest::Idle;
        };
        let eps = self.config.settle_epsilon;
        match self.motion {
            Motion::Idle => FrameRequest::Idle,
            Motion::Tracking => {
                self.tilt.step(self.config.speed);
                element.set_style("transform", &self.transform());
                element.set_style("box-shadow", &self.shadow().css());
                self.set_glow_opacity(&element, "1");
                if self.tilt.is_settled(eps) {
                    self.motion = Motion::Idle;
                    FrameRequest::Idle
                } else {
                    FrameRequest::Continue
                }
            }
            Motion::Returning => {
                self.tilt.step(self.config.return_speed);
                self.set_glow_opacity(&element, "0");
                if self.tilt.is_settled(eps) {
                    self.tilt.snap();
                    element.set_style(
                        "transform",
                        &format!("perspective({}px) rotateX(0) rotateY(0)", self.config.perspective),
                    );
                    element.set_style("box-shadow", &self.shadow().css());
                    self.motion = Motion::Idle;
                    FrameRequest::Idle
                } else {
                    element.set_style("transform", &self.transform());
                    element.set_style("box-shadow", &self.shadow().css());
                    FrameRequest::Continue
                }
            }
        }
    }

    fn is_animating(&self) -> bool {
        self.motion != Motion::Idle
    }
}
