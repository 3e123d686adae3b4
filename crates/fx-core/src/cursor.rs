//! Custom cursor: a dot and a ring that trail the pointer at different rates,
//! plus a text label shown over interactive elements.
//!
//! One instance owns the page overlay. `init` appends it once and `destroy`
//! removes it; the web front-end refuses to mount a second instance.

use crate::animate::{Animate, FrameRequest};
use crate::config::CursorConfig;
use crate::error::Result;
use crate::surface::{Document, Element, Overlay};
use glam::Vec2;

pub struct CursorFollower<D: Document> {
    config: CursorConfig,
    document: Option<D>,
    overlay: Option<Overlay<D::Node>>,
    pointer: Vec2,
    dot: Vec2,
    ring: Vec2,
    hovering: bool,
}

impl<D: Document> CursorFollower<D> {
    pub fn new(config: CursorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            document: None,
            overlay: None,
            pointer: Vec2::ZERO,
            dot: Vec2::ZERO,
            ring: Vec2::ZERO,
            hovering: false,
        })
    }

    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn dot(&self) -> Vec2 {
        self.dot
    }

    pub fn ring(&self) -> Vec2 {
        self.ring
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn is_mounted(&self) -> bool {
        self.overlay.is_some()
    }

    /// Append the overlay and mark the page root. Calling it again while
    /// mounted does nothing.
    pub fn init(&mut self, document: D) {
        if self.overlay.is_some() {
            return;
        }
        let Some(overlay) = document.append_overlay() else {
            log::warn!("[cursor] could not create overlay");
            return;
        };
        document.add_class(&self.config.root_class);
        self.overlay = Some(overlay);
        self.document = Some(document);
        log::debug!("[cursor] overlay mounted");
    }

    /// Elements that currently match the interactive selector.
    pub fn interactive_targets(&self) -> Vec<D::Node> {
        match self.document.as_ref() {
            Some(doc) => doc.query_all(&self.config.interactive_selector),
            None => Vec::new(),
        }
    }

    pub fn on_pointer_move(&mut self, client: Vec2) {
        self.pointer = client;
    }

    /// Pointer came back into the page.
    pub fn on_pointer_enter(&mut self) {
        self.set_visible(true);
    }

    /// Pointer left the page.
    pub fn on_pointer_leave(&mut self) {
        self.set_visible(false);
    }

    pub fn on_hover(&mut self, target: &D::Node) {
        let Some(overlay) = self.overlay.as_ref() else {
            return;
        };
        self.hovering = true;
        overlay.ring.add_class(&self.config.hover_class);
        let text = target
            .attribute(&self.config.text_attribute)
            .filter(|t| !t.trim().is_empty());
        if let Some(text) = text {
            overlay.label.set_text(&text);
            overlay.label.add_class(&self.config.label_visible_class);
        }
    }

    pub fn on_hover_end(&mut self) {
        let Some(overlay) = self.overlay.as_ref() else {
            return;
        };
        self.hovering = false;
        overlay.ring.remove_class(&self.config.hover_class);
        overlay.label.remove_class(&self.config.label_visible_class);
    }

    pub fn destroy(&mut self) {
        self.hovering = false;
        if let (Some(document), Some(overlay)) = (self.document.take(), self.overlay.take()) {
            document.remove_overlay(&overlay);
            document.remove_class(&self.config.root_class);
            log::debug!("[cursor] overlay removed");
        }
    }

    fn set_visible(&self, visible: bool) {
        if let Some(overlay) = self.overlay.as_ref() {
            let opacity = if visible { "1" } else { "0" };
            overlay.dot.set_style("opacity", opacity);
            overlay.ring.set_style("opacity", opacity);
        }
    }
}

fn translate(pos: Vec2) -> String {
    format!("translate({}px, {}px)", pos.x, pos.y)
}

impl<D: Document> Animate for CursorFollower<D> {
    fn frame(&mut self) -> FrameRequest {
        let Some(overlay) = self.overlay.as_ref() else {
            return FrameRequest::Idle;
        };
        self.dot = self.dot.lerp(self.pointer, self.config.dot_ease);
        self.ring = self.ring.lerp(self.pointer, self.config.ring_ease);
        overlay.dot.set_style("transform", &translate(self.dot));
        overlay.ring.set_style("transform", &translate(self.ring));
        FrameRequest::Continue
    }

    fn is_animating(&self) -> bool {
        self.overlay.is_some()
    }
}
