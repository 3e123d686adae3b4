//! Magnetic button: the element is translated toward the pointer by a
//! fraction of the pointer's offset from its centre and springs back when the
//! pointer leaves.

use crate::animate::{Animate, FrameRequest};
use crate::config::MagneticConfig;
use crate::ease::{Motion, Spring2};
use crate::error::Result;
use crate::geometry::Rect;
use crate::surface::Element;
use glam::Vec2;

pub struct SpringFollower<E: Element> {
    config: MagneticConfig,
    element: Option<E>,
    rect: Rect,
    spring: Spring2,
    motion: Motion,
}

impl<E: Element> SpringFollower<E> {
    pub fn new(config: MagneticConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            element: None,
            rect: Rect::default(),
            spring: Spring2::default(),
            motion: Motion::Idle,
        })
    }

    pub fn offset(&self) -> Vec2 {
        self.spring.current
    }

    pub fn target(&self) -> Vec2 {
        self.spring.target
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn init(&mut self, element: E) {
        self.rect = element.bounding_rect();
        element.set_style("will-change", "transform");
        self.element = Some(element);
    }

    /// Re-reads the rect so scrolling or layout shifts since `init` are
    /// picked up.
    pub fn on_pointer_enter(&mut self) {
        if let Some(element) = self.element.as_ref() {
            self.rect = element.bounding_rect();
            element.add_class(&self.config.active_class);
        }
    }

    pub fn on_pointer_move(&mut self, client: Vec2) {
        if self.element.is_none() {
            return;
        }
        self.spring.target = (client - self.rect.center()) * self.config.strength;
        self.motion = Motion::Tracking;
    }

    pub fn on_pointer_leave(&mut self) {
        let Some(element) = self.element.as_ref() else {
            return;
        };
        self.spring.target = Vec2::ZERO;
        element.remove_class(&self.config.active_class);
        self.motion = Motion::Returning;
    }

    pub fn destroy(&mut self) {
        self.motion = Motion::Idle;
        self.element = None;
    }
}

fn translate(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

impl<E: Element> Animate for SpringFollower<E> {
    fn frame(&mut self) -> FrameRequest {
        let Some(element) = self.element.as_ref() else {
            self.motion = Motion::Idle;
            return FrameRequest::Idle;
        };
        let eps = self.config.settle_epsilon;
        match self.motion {
            Motion::Idle => FrameRequest::Idle,
            Motion::Tracking => {
                self.spring.step(self.config.speed);
                element.set_style("transform", &translate(self.spring.current));
                if self.spring.is_settled(eps) {
                    self.motion = Motion::Idle;
                    FrameRequest::Idle
                } else {
                    FrameRequest::Continue
                }
            }
            Motion::Returning => {
                self.spring.step(self.config.return_speed);
                if self.spring.is_settled(eps) {
                    self.spring.snap();
                    element.set_style("transform", "translate(0, 0)");
                    self.motion = Motion::Idle;
                    FrameRequest::Idle
                } else {
                    element.set_style("transform", &translate(self.spring.current));
                    FrameRequest::Continue
                }
            }
        }
    }

    fn is_animating(&self) -> bool {
        self.motion != Motion::Idle
    }
}
