// Host-side tests for the confetti field.

mod common;

use common::{desktop, phone, MockCanvas};
use fx_core::color::CONFETTI_PALETTE;
use fx_core::{Animate, ConfettiConfig, ConfettiField, ConfettiShape, FrameRequest, Shape};
use glam::Vec2;

fn started(seed: u64) -> ConfettiField<MockCanvas> {
    let mut field = ConfettiField::with_seed(ConfettiConfig::default(), seed).unwrap();
    field.init(MockCanvas::sized(800.0, 600.0), &desktop());
    field
}

fn single_piece() -> ConfettiField<MockCanvas> {
    let cfg = ConfettiConfig {
        particle_count: 1,
        ..ConfettiConfig::default()
    };
    let mut field = ConfettiField::with_seed(cfg, 5).unwrap();
    field.init(MockCanvas::sized(800.0, 600.0), &desktop());
    field
}

#[test]
fn mobile_viewport_stays_idle() {
    let mut field = ConfettiField::with_seed(ConfettiConfig::default(), 1).unwrap();
    field.init(MockCanvas::sized(800.0, 600.0), &phone());
    assert!(field.particles().is_empty());
    assert!(!field.is_animating());
    assert_eq!(field.frame(), FrameRequest::Idle);
}

#[test]
fn creation_respects_configured_ranges() {
    let field = started(3);
    let cfg = field.config();
    assert_eq!(field.particles().len(), 65);
    for p in field.particles() {
        let speed = p.velocity.length();
        assert!(speed >= cfg.min_speed - 1e-5 && speed <= cfg.max_speed + 1e-5);
        assert!(p.size >= cfg.min_size && p.size <= cfg.max_size);
        assert!(p.alpha >= 0.35 && p.alpha <= 0.80);
        assert!(p.rotation >= 0.0 && p.rotation <= 360.0);
        assert!(p.rotation_speed.abs() <= 0.75);
        assert!(CONFETTI_PALETTE.contains(&p.color));
    }
}

#[test]
fn backing_surface_pixel_ratio_is_capped() {
    let mut field = ConfettiField::with_seed(ConfettiConfig::default(), 1).unwrap();
    let mut viewport = desktop();
    viewport.device_pixel_ratio = 3.0;
    field.init(MockCanvas::sized(800.0, 600.0), &viewport);
    assert_eq!(field.canvas().unwrap().backing, (1600, 1200));
    assert_eq!(field.canvas().unwrap().scales, vec![2.0]);
}

#[test]
fn layout_change_resize_follows_new_box_and_keeps_pieces() {
    let (canvas, layout) = MockCanvas::with_layout(800.0, 600.0);
    let mut field = ConfettiField::with_seed(ConfettiConfig::default(), 4).unwrap();
    field.init(canvas, &desktop());
    assert_eq!(field.canvas().unwrap().backing, (1600, 1200));
    let before = field.particles().to_vec();

    // The host section grows while the window stays the same size.
    layout.set(fx_core::Rect::new(0.0, 0.0, 1000.0, 700.0));
    field.resize(2.0);

    let canvas = field.canvas().unwrap();
    assert_eq!(canvas.backing, (2000, 1400));
    assert_eq!(canvas.scales, vec![2.0, 2.0]);
    assert_eq!(field.particles(), before.as_slice());
}

#[test]
fn same_seed_reproduces_particle_set() {
    let a = started(77);
    let b = started(77);
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn every_shape_is_used_over_a_batch() {
    let field = started(8);
    for shape in ConfettiShape::ALL {
        assert!(
            field.particles().iter().any(|p| p.shape == shape),
            "missing {shape:?}"
        );
    }
}

#[test]
fn positions_stay_within_wrap_bounds() {
    let mut field = started(19);
    field.on_pointer_move(Vec2::new(400.0, 300.0));
    let bounds = Vec2::new(800.0, 600.0);
    for _ in 0..3_000 {
        field.update(bounds);
        for p in field.particles() {
            assert!(p.position.x >= -p.size && p.position.x <= bounds.x + p.size);
            assert!(p.position.y >= -p.size && p.position.y <= bounds.y + p.size);
        }
    }
}

#[test]
fn pointer_exactly_on_piece_leaves_velocity_unchanged() {
    let mut field = single_piece();
    let before = field.particles()[0];
    field.on_pointer_move(before.position);
    field.update(Vec2::new(800.0, 600.0));
    let after = field.particles()[0];
    assert!(after.position.is_finite());
    assert_eq!(after.velocity, before.velocity);
}

#[test]
fn nearby_pointer_pushes_piece_away() {
    let mut field = single_piece();
    let before = field.particles()[0];
    let pointer = before.position - Vec2::new(30.0, 0.0);
    field.on_pointer_move(pointer);
    field.update(Vec2::new(800.0, 600.0));
    let after = field.particles()[0];
    assert!(after.velocity.x > before.velocity.x);
}

#[test]
fn excess_speed_decays_instead_of_clamping() {
    let mut field = single_piece();
    let start = field.particles()[0];
    // Hammer the piece from just behind it until it is well above max speed.
    for _ in 0..200 {
        let p = field.particles()[0];
        let behind = p.position - p.velocity.normalize_or_zero() * 5.0;
        field.on_pointer_move(behind);
        field.update(Vec2::new(800.0, 600.0));
    }
    let fast = field.particles()[0].velocity.length();
    assert!(fast > field.config().max_speed, "speed {fast} vs start {}", start.velocity.length());

    field.on_pointer_leave();
    field.update(Vec2::new(800.0, 600.0));
    let one_step = field.particles()[0].velocity.length();
    assert!((one_step - fast * 0.98).abs() < 1e-4);
    assert!(one_step > field.config().max_speed);

    for _ in 0..1_000 {
        field.update(Vec2::new(800.0, 600.0));
    }
    assert!(field.particles()[0].velocity.length() <= field.config().max_speed);
}

#[test]
fn leave_parks_pointer_off_canvas() {
    let mut field = started(1);
    field.on_pointer_move(Vec2::new(10.0, 10.0));
    assert_eq!(field.pointer(), Vec2::new(10.0, 10.0));
    field.on_pointer_leave();
    assert_eq!(field.pointer(), Vec2::splat(-9999.0));
}

#[test]
fn frame_draws_each_piece_with_its_outline() {
    let mut field = started(4);
    assert_eq!(field.frame(), FrameRequest::Continue);
    let canvas = field.canvas().unwrap();
    assert_eq!(canvas.shapes.len(), 65);
    for ((origin, rotation, alpha, color, shape), p) in canvas.shapes.iter().zip(field.particles()) {
        assert_eq!(*origin, p.position);
        assert!((rotation - p.rotation.to_radians()).abs() < 1e-6);
        assert_eq!(*alpha, p.alpha);
        assert_eq!(*color, p.color);
        assert_eq!(*shape, p.shape.outline(p.size));
    }
}

#[test]
fn outlines_match_shape_geometry() {
    assert_eq!(ConfettiShape::Dot.outline(4.0), Shape::Circle { radius: 2.0 });
    assert_eq!(
        ConfettiShape::Dash.outline(2.0),
        Shape::Rect {
            origin: Vec2::new(-3.0, -0.6),
            size: Vec2::new(6.0, 1.2)
        }
    );
    match ConfettiShape::Triangle.outline(4.0) {
        Shape::Polygon(points) => {
            assert_eq!(points.len(), 3);
            assert_eq!(points[0], Vec2::new(0.0, -2.0));
        }
        other => panic!("unexpected outline {other:?}"),
    }
}

#[test]
fn destroy_twice_is_harmless() {
    let mut field = started(2);
    field.destroy();
    field.destroy();
    assert!(field.canvas().is_none());
    assert!(field.particles().is_empty());
    assert_eq!(field.frame(), FrameRequest::Idle);
}

#[test]
fn empty_palette_is_rejected() {
    let cfg = ConfettiConfig {
        colors: Vec::new(),
        ..ConfettiConfig::default()
    };
    assert!(ConfettiField::<MockCanvas>::with_seed(cfg, 1).is_err());
}
