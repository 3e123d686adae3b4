//! Ambient particle network: drifting glow nodes linked by gradient lines,
//! pulled toward and brightened by the pointer.

use crate::animate::{Animate, FrameRequest};
use crate::color::ColorStop;
use crate::config::AmbientConfig;
use crate::constants::{LINK_POINTER_FLOOR, LINK_PRIMARY_WEIGHT, LINK_SECONDARY_WEIGHT, LINK_WIDTH, PARKED_POINTER};
use crate::ease::lerp;
use crate::error::Result;
use crate::geometry::{wrap_to_opposite_edge, Viewport};
use crate::surface::{sync_backing_surface, Canvas2d};
use crate::throttle::Throttle;
use glam::Vec2;
use instant::Instant;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub alpha: f32,
    pub target_alpha: f32,
}

pub struct AmbientParticleField<C: Canvas2d> {
    config: AmbientConfig,
    canvas: Option<C>,
    particles: Vec<Particle>,
    pointer: Vec2,
    throttle: Throttle,
    rng: StdRng,
    active: bool,
    mobile: bool,
}

impl<C: Canvas2d> AmbientParticleField<C> {
    pub fn new(config: AmbientConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: AmbientConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: AmbientConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            throttle: Throttle::new(config.throttle),
            config,
            canvas: None,
            particles: Vec::new(),
            pointer: Vec2::splat(PARKED_POINTER),
            rng,
            active: false,
            mobile: false,
        })
    }

    pub fn config(&self) -> &AmbientConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
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
        self.mobile = viewport.is_mobile();
        if self.mobile {
            log::info!("[ambient] small or touch viewport, staying idle");
            self.pause();
            return;
        }
        self.resize(viewport.device_pixel_ratio);
        self.create_particles();
        self.active = true;
        log::debug!("[ambient] started with {} particles", self.particles.len());
    }

    /// Rebuild the backing surface for the current displayed size. Particles
    /// are kept; previously drawn pixels are lost.
    pub fn resize(&mut self, device_pixel_ratio: f64) {
        if let Some(canvas) = self.canvas.as_mut() {
            sync_backing_surface(canvas, device_pixel_ratio, self.config.max_pixel_ratio);
        }
    }

    /// Record the pointer in canvas-local coordinates, at most once per
    /// throttle window.
    pub fn on_pointer_move(&mut self, client: Vec2, now: Instant) {
        let Some(canvas) = self.canvas.as_ref() else {
            return;
        };
        if !self.throttle.ready(now) {
            return;
        }
        self.pointer = canvas.bounding_rect().to_local(client);
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer = Vec2::splat(PARKED_POINTER);
    }

    pub fn pause(&mut self) {
        self.active = false;
    }

    pub fn resume(&mut self) {
        if self.mobile || self.active || self.canvas.is_none() {
            return;
        }
        self.active = true;
    }

    pub fn destroy(&mut self) {
        self.active = false;
        self.particles.clear();
        self.canvas = None;
        self.throttle.reset();
    }

    /// Replace the particle set with a fresh batch spread over the canvas.
    pub fn create_particles(&mut self) {
        let Some(rect) = self.canvas.as_ref().map(|c| c.bounding_rect()) else {
            return;
        };
        let cfg = &self.config;
        let rng = &mut self.rng;
        self.particles = (0..cfg.particle_count)
            .map(|_| Particle {
                position: Vec2::new(rng.gen::<f32>() * rect.width, rng.gen::<f32>() * rect.height),
                velocity: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * cfg.max_speed,
                    (rng.gen::<f32>() - 0.5) * 2.0 * cfg.max_speed,
                ),
                size: cfg.base_size + rng.gen::<f32>() * (cfg.max_size - cfg.base_size),
                alpha: cfg.base_alpha,
                target_alpha: cfg.base_alpha,
            })
            .collect();
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Advance every particle by one frame inside `bounds` (CSS pixels).
    pub fn update(&mut self, bounds: Vec2) {
        let cfg = &self.config;
        let pointer = self.pointer;
        for p in &mut self.particles {
            p.position += p.velocity;

            let to_pointer = pointer - p.position;
            let distance = to_pointer.length();
            if distance < cfg.mouse_distance {
                if distance > 0.0 {
                    let force = (cfg.mouse_distance - distance) / cfg.mouse_distance;
                    p.velocity += to_pointer / distance * force * cfg.attraction;
                }
                p.target_alpha = cfg.max_alpha;
            } else {
                p.target_alpha = cfg.base_alpha;
            }

            let speed = p.velocity.length();
            if speed > cfg.max_speed {
                p.velocity *= cfg.max_speed / speed;
            }

            wrap_to_opposite_edge(&mut p.position, bounds);
            p.alpha = lerp(p.alpha, p.target_alpha, cfg.alpha_ease);
        }
    }
}

impl<C: Canvas2d> Animate for AmbientParticleField<C> {
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
            draw_particles(canvas, &self.particles, &self.config);
            draw_connections(canvas, &self.particles, self.pointer, &self.config);
        }
        FrameRequest::Continue
    }

    fn is_animating(&self) -> bool {
        self.active
    }
}

/// Opacity of a link between two particles `distance` apart whose midpoint
/// is `pointer_distance` from the pointer.
pub fn connection_opacity(distance: f32, pointer_distance: f32, cfg: &AmbientConfig) -> f32 {
    let mut opacity = (cfg.connection_distance - distance) / cfg.connection_distance;
    if pointer_distance < cfg.mouse_distance {
        let influence = 1.0 - pointer_distance / cfg.mouse_distance;
        opacity *= LINK_POINTER_FLOOR + influence * (1.0 - LINK_POINTER_FLOOR);
    }
    opacity
}

fn draw_particles<C: Canvas2d>(canvas: &mut C, particles: &[Particle], cfg: &AmbientConfig) {
    for p in particles {
        let stops = [
            ColorStop::new(0.0, cfg.primary, p.alpha),
            ColorStop::new(0.5, cfg.accent, p.alpha * 0.5),
            ColorStop::transparent(1.0),
        ];
        canvas.fill_radial(p.position, p.size * 2.0, &stops);
    }
}

fn draw_connections<C: Canvas2d>(canvas: &mut C, particles: &[Particle], pointer: Vec2, cfg: &AmbientConfig) {
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let distance = a.position.distance(b.position);
            if distance >= cfg.connection_distance {
                continue;
            }
            let midpoint = (a.position + b.position) * 0.5;
            let opacity = connection_opacity(distance, pointer.distance(midpoint), cfg);
            let stops = [
                ColorStop::new(0.0, cfg.primary, opacity * LINK_PRIMARY_WEIGHT),
                ColorStop::new(1.0, cfg.secondary, opacity * LINK_SECONDARY_WEIGHT),
            ];
            canvas.stroke_gradient_line(a.position, b.position, &stops, LINK_WIDTH);
        }
    }
}
