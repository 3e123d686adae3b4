//! Confetti field: spinning multi-shape particles that drift, wrap at the
//! edges and scatter away from the pointer.

use crate::animate::{Animate, FrameRequest};
use crate::color::Rgb;
use crate::config::ConfettiConfig;
use crate::constants::PARKED_POINTER;
use crate::error::Result;
use crate::geometry::{wrap_with_margin, Viewport};
use crate::surface::{sync_backing_surface, Canvas2d, Shape};
use glam::Vec2;
use rand::prelude::*;
use smallvec::smallvec;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfettiShape {
    Dot,
    Dash,
    Square,
    Triangle,
}

impl ConfettiShape {
    pub const ALL: [ConfettiShape; 4] = [
        ConfettiShape::Dot,
        ConfettiShape::Dash,
        ConfettiShape::Square,
        ConfettiShape::Triangle,
    ];

    /// Outline for a piece of the given size, centred on the origin.
    pub fn outline(self, size: f32) -> Shape {
        let half = size / 2.0;
        match self {
            ConfettiShape::Dot => Shape::Circle { radius: half },
            ConfettiShape::Dash => Shape::Rect {
                origin: Vec2::new(-size * 1.5, -size * 0.3),
                size: Vec2::new(size * 3.0, size * 0.6),
            },
            ConfettiShape::Square => Shape::Rect {
                origin: Vec2::splat(-half),
                size: Vec2::splat(size),
            },
            ConfettiShape::Triangle => Shape::Polygon(smallvec![
                Vec2::new(0.0, -half),
                Vec2::new(-half, half),
                Vec2::new(half, half),
            ]),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    /// Degrees.
    pub rotation: f32,
    /// Degrees per frame.
    pub rotation_speed: f32,
    pub color: Rgb,
    pub alpha: f32,
    pub shape: ConfettiShape,
}

pub struct ConfettiField<C: Canvas2d> {
    config: ConfettiConfig,
    canvas: Option<C>,
    particles: Vec<ConfettiParticle>,
    pointer: Vec2,
    rng: StdRng,
    active: bool,
}

impl<C: Canvas2d> ConfettiField<C> {
    pub fn new(config: ConfettiConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: ConfettiConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: ConfettiConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            canvas: None,
            particles: Vec::new(),
            pointer: Vec2::splat(PARKED_POINTER),
            rng,
            active: false,
        })
    }

    pub fn config(&self) -> &ConfettiConfig {
        &self.config
    }

    pub fn particles(&self) -> &[ConfettiParticle] {
        &self.particles
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn canvas(&self) -> Option<&C> {
        self.canvas.as_ref()
    }

    pub fn init(&mut self, canvas: C, viewport: &Viewport) {
        self.canvas = Some(canvas);
        if viewport.is_mobile() {
            log::info!("[confetti] small or touch viewport, staying idle");
            return;
        }
        self.resize(viewport.device_pixel_ratio);
        self.create_particles();
        self.active = true;
        log::debug!("[confetti] started with {} pieces", self.particles.len());
    }

    /// Rebuild the backing surface; the particle set is untouched.
    pub fn resize(&mut self, device_pixel_ratio: f64) {
        if let Some(canvas) = self.canvas.as_mut() {
            sync_backing_surface(canvas, device_pixel_ratio, self.config.max_pixel_ratio);
        }
    }

    pub fn on_pointer_move(&mut self, client: Vec2) {
        if let Some(canvas) = self.canvas.as_ref() {
            self.pointer = canvas.bounding_rect().to_local(client);
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer = Vec2::splat(PARKED_POINTER);
    }

    pub fn destroy(&mut self) {
        self.active = false;
        self.particles.clear();
        self.canvas = None;
    }

    pub fn create_particles(&mut self) {
        let Some(rect) = self.canvas.as_ref().map(|c| c.bounding_rect()) else {
            return;
        };
        let cfg = &self.config;
        let rng = &mut self.rng;
        self.particles = (0..cfg.particle_count)
            .map(|_| {
                let speed = cfg.min_speed + rng.gen::<f32>() * (cfg.max_speed - cfg.min_speed);
                let angle = rng.gen::<f32>() * TAU;
                ConfettiParticle {
                    position: Vec2::new(rng.gen::<f32>() * rect.width, rng.gen::<f32>() * rect.height),
                    velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
                    size: cfg.min_size + rng.gen::<f32>() * (cfg.max_size - cfg.min_size),
                    rotation: rng.gen::<f32>() * 360.0,
                    rotation_speed: (rng.gen::<f32>() - 0.5) * 2.0 * cfg.max_spin,
                    color: cfg.colors[rng.gen_range(0..cfg.colors.len())],
                    alpha: cfg.min_alpha + rng.gen::<f32>() * (cfg.max_alpha - cfg.min_alpha),
                    shape: ConfettiShape::ALL[rng.gen_range(0..ConfettiShape::ALL.len())],
                }
            })
            .collect();
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Advance every piece by one frame inside `bounds` (CSS pixels).
    pub fn update(&mut self, bounds: Vec2) {
        let cfg = &self.config;
        let pointer = self.pointer;
        for p in &mut self.particles {
            let away = p.position - pointer;
            let distance = away.length();
            if distance < cfg.repel_distance && distance > 0.0 {
                let force = (cfg.repel_distance - distance) / cfg.repel_distance * cfg.repel_force;
                p.velocity += away / distance * force;
            }

            p.position += p.velocity;
            p.rotation += p.rotation_speed;

            // Decay rather than clamp: pieces flung by the pointer coast back.
            if p.velocity.length() > cfg.max_speed {
                p.velocity *= cfg.speed_decay;
            }

            wrap_with_margin(&mut p.position, p.size, bounds);
        }
    }
}

impl<C: Canvas2d> Animate for ConfettiField<C> {
    fn frame(&mut self) -> FrameRequest {
        if !self.active {
            return FrameRequest::Idle;
        }
        let Some(rect) = self.canvas.as_ref().map(|c| c.bounding_rect()) else {
            return FrameRequest::Idle;
        };
        self.update(rect.size());
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.clear(rect.width, rect.height);
            for p in &self.particles {
                canvas.fill_shape(
                    p.position,
                    p.rotation.to_radians(),
                    p.alpha,
                    p.color,
                    &p.shape.outline(p.size),
                );
            }
        }
        FrameRequest::Continue
    }

    fn is_animating(&self) -> bool {
        self.active
    }
}
