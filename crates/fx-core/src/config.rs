//! Immutable engine configuration. Each engine validates its config once in
//! `new` and never mutates it afterwards.

use crate::color::{Rgb, CONFETTI_PALETTE, CYAN, INDIGO, PINK};
use crate::constants::*;
use crate::error::{FxError, Result};
use std::time::Duration;

fn ensure_positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FxError::config(field, format!("must be > 0, got {value}")))
    }
}

fn ensure_factor(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(FxError::config(field, format!("must be in (0, 1], got {value}")))
    }
}

fn ensure_ordered(field: &'static str, min: f32, max: f32) -> Result<()> {
    if min.is_finite() && max.is_finite() && min >= 0.0 && min <= max {
        Ok(())
    } else {
        Err(FxError::config(field, format!("expected 0 <= min <= max, got {min}..{max}")))
    }
}

/// Tunables for the ambient particle network.
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientConfig {
    pub particle_count: usize,
    /// Pairs closer than this are linked.
    pub connection_distance: f32,
    /// Pointer radius for attraction, highlight and link boosting.
    pub mouse_distance: f32,
    pub max_speed: f32,
    pub base_size: f32,
    pub max_size: f32,
    pub base_alpha: f32,
    /// Alpha particles brighten to while the pointer is near.
    pub max_alpha: f32,
    pub attraction: f32,
    pub alpha_ease: f32,
    /// Minimum spacing between accepted pointer-move events.
    pub throttle: Duration,
    pub max_pixel_ratio: Option<f64>,
    pub primary: Rgb,
    pub accent: Rgb,
    pub secondary: Rgb,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            particle_count: AMBIENT_PARTICLE_COUNT,
            connection_distance: AMBIENT_CONNECTION_DISTANCE,
            mouse_distance: AMBIENT_MOUSE_DISTANCE,
            max_speed: AMBIENT_MAX_SPEED,
            base_size: AMBIENT_BASE_SIZE,
            max_size: AMBIENT_MAX_SIZE,
            base_alpha: AMBIENT_BASE_ALPHA,
            max_alpha: AMBIENT_MAX_ALPHA,
            attraction: AMBIENT_ATTRACTION,
            alpha_ease: AMBIENT_ALPHA_EASE,
            throttle: AMBIENT_POINTER_THROTTLE,
            max_pixel_ratio: None,
            primary: INDIGO,
            accent: PINK,
            secondary: CYAN,
        }
    }
}

impl AmbientConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("connection_distance", self.connection_distance)?;
        ensure_positive("mouse_distance", self.mouse_distance)?;
        ensure_positive("max_speed", self.max_speed)?;
        ensure_ordered("size", self.base_size, self.max_size)?;
        ensure_ordered("alpha", self.base_alpha, self.max_alpha)?;
        if self.max_alpha > 1.0 {
            return Err(FxError::config("alpha", "max_alpha must be <= 1"));
        }
        ensure_positive("attraction", self.attraction)?;
        ensure_factor("alpha_ease", self.alpha_ease)
    }
}

/// Tunables for the confetti field.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiConfig {
    pub particle_count: usize,
    pub min_speed: f32,
    /// Speeds above this decay by `speed_decay` each frame.
    pub max_speed: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub repel_distance: f32,
    pub repel_force: f32,
    pub speed_decay: f32,
    pub min_alpha: f32,
    pub max_alpha: f32,
    /// Degrees per frame; spin is drawn from `[-max_spin, max_spin)`.
    pub max_spin: f32,
    pub max_pixel_ratio: Option<f64>,
    pub colors: Vec<Rgb>,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            particle_count: CONFETTI_PARTICLE_COUNT,
            min_speed: CONFETTI_MIN_SPEED,
            max_speed: CONFETTI_MAX_SPEED,
            min_size: CONFETTI_MIN_SIZE,
            max_size: CONFETTI_MAX_SIZE,
            repel_distance: CONFETTI_REPEL_DISTANCE,
            repel_force: CONFETTI_REPEL_FORCE,
            speed_decay: CONFETTI_SPEED_DECAY,
            min_alpha: CONFETTI_MIN_ALPHA,
            max_alpha: CONFETTI_MAX_ALPHA,
            max_spin: CONFETTI_MAX_SPIN,
            max_pixel_ratio: Some(CONFETTI_MAX_PIXEL_RATIO),
            colors: CONFETTI_PALETTE.to_vec(),
        }
    }
}

impl ConfettiConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_ordered("speed", self.min_speed, self.max_speed)?;
        ensure_positive("max_speed", self.max_speed)?;
        ensure_ordered("size", self.min_size, self.max_size)?;
        ensure_ordered("alpha", self.min_alpha, self.max_alpha)?;
        ensure_positive("repel_distance", self.repel_distance)?;
        ensure_positive("repel_force", self.repel_force)?;
        if !(self.speed_decay > 0.0 && self.speed_decay < 1.0) {
            return Err(FxError::config("speed_decay", "must be in (0, 1)"));
        }
        if !self.max_spin.is_finite() || self.max_spin < 0.0 {
            return Err(FxError::config("max_spin", "must be >= 0"));
        }
        if self.colors.is_empty() {
            return Err(FxError::config("colors", "palette is empty"));
        }
        Ok(())
    }
}

/// Tunables for the magnetic button spring.
#[derive(Clone, Debug, PartialEq)]
pub struct MagneticConfig {
    /// Fraction of the pointer's offset from centre the element moves by.
    pub strength: f32,
    pub speed: f32,
    pub return_speed: f32,
    pub settle_epsilon: f32,
    pub active_class: String,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            strength: MAGNETIC_STRENGTH,
            speed: MAGNETIC_SPEED,
            return_speed: MAGNETIC_RETURN_SPEED,
            settle_epsilon: SETTLE_EPSILON,
            active_class: "magnetic-active".to_string(),
        }
    }
}

impl MagneticConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.strength.is_finite() {
            return Err(FxError::config("strength", "must be finite"));
        }
        ensure_factor("speed", self.speed)?;
        ensure_factor("return_speed", self.return_speed)?;
        ensure_positive("settle_epsilon", self.settle_epsilon)
    }
}

/// Tunables for the card tilt.
#[derive(Clone, Debug, PartialEq)]
pub struct TiltConfig {
    /// Degrees reached with the pointer on an edge.
    pub max_tilt: f32,
    pub perspective: f32,
    pub speed: f32,
    pub return_speed: f32,
    pub settle_epsilon: f32,
    pub enable_glow: bool,
    pub glow_selector: String,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_tilt: TILT_MAX_DEGREES,
            perspective: TILT_PERSPECTIVE_PX,
            speed: TILT_SPEED,
            return_speed: TILT_RETURN_SPEED,
            settle_epsilon: SETTLE_EPSILON,
            enable_glow: true,
            glow_selector: ".tilt-glow".to_string(),
        }
    }
}

impl TiltConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.max_tilt.is_finite() || self.max_tilt < 0.0 {
            return Err(FxError::config("max_tilt", "must be >= 0"));
        }
        ensure_positive("perspective", self.perspective)?;
        ensure_factor("speed", self.speed)?;
        ensure_factor("return_speed", self.return_speed)?;
        ensure_positive("settle_epsilon", self.settle_epsilon)
    }
}

/// Tunables and DOM hooks for the custom cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    pub dot_ease: f32,
    pub ring_ease: f32,
    /// Elements that put the ring into its hover state.
    pub interactive_selector: String,
    /// Added to the page root while the overlay is mounted.
    pub root_class: String,
    pub hover_class: String,
    pub label_visible_class: String,
    /// Attribute holding the label text of an interactive element.
    pub text_attribute: String,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            dot_ease: CURSOR_DOT_EASE,
            ring_ease: CURSOR_RING_EASE,
            interactive_selector:
                "a, button, [data-magnetic], [data-tilt], .project-card, .nav-links button"
                    .to_string(),
            root_class: "custom-cursor-active".to_string(),
            hover_class: "cursor-hover".to_string(),
            label_visible_class: "visible".to_string(),
            text_attribute: "data-cursor-text".to_string(),
        }
    }
}

impl CursorConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_factor("dot_ease", self.dot_ease)?;
        ensure_factor("ring_ease", self.ring_ease)?;
        if self.interactive_selector.trim().is_empty() {
            return Err(FxError::config("interactive_selector", "must not be empty"));
        }
        Ok(())
    }
}
