// Host-side tests for the magnetic button spring and the easing helpers.

mod common;

use common::MockElement;
use fx_core::{lerp, Animate, FrameRequest, MagneticConfig, Motion, Rect, Spring2, SpringFollower};
use glam::Vec2;

fn button() -> (SpringFollower<MockElement>, MockElement) {
    let element = MockElement::with_rect(Rect::new(0.0, 0.0, 200.0, 100.0));
    let mut follower = SpringFollower::new(MagneticConfig::default()).unwrap();
    follower.init(element.clone());
    (follower, element)
}

fn run_until_idle<A: Animate>(engine: &mut A, max_frames: usize) -> usize {
    for n in 1..=max_frames {
        if engine.frame() == FrameRequest::Idle {
            return n;
        }
    }
    panic!("did not settle within {max_frames} frames");
}

#[test]
fn lerp_moves_a_fraction_of_the_gap() {
    assert_eq!(lerp(0.0, 8.0, 0.25), 2.0);
    assert_eq!(lerp(10.0, 10.0, 0.3), 10.0);
    assert_eq!(lerp(-4.0, 0.0, 0.5), -2.0);
}

#[test]
fn spring_gap_shrinks_monotonically_without_overshoot() {
    let mut spring = Spring2 {
        current: Vec2::new(-40.0, 25.0),
        target: Vec2::new(30.0, -5.0),
    };
    let mut prev = spring.current.distance(spring.target);
    while !spring.is_settled(0.01) {
        spring.step(0.3);
        let gap = spring.current.distance(spring.target);
        assert!(gap < prev, "gap grew from {prev} to {gap}");
        assert!(spring.current.x <= spring.target.x);
        assert!(spring.current.y >= spring.target.y);
        prev = gap;
    }
}

#[test]
fn init_marks_element_for_transforms() {
    let (_, element) = button();
    assert_eq!(element.style("will-change").as_deref(), Some("transform"));
}

#[test]
fn pointer_offset_scales_by_strength() {
    let (mut follower, _) = button();
    follower.on_pointer_enter();
    follower.on_pointer_move(Vec2::new(200.0, 50.0));
    assert!((follower.target() - Vec2::new(30.0, 0.0)).length() < 1e-4);
    assert_eq!(follower.motion(), Motion::Tracking);
}

#[test]
fn tracking_converges_and_stops() {
    let (mut follower, element) = button();
    follower.on_pointer_move(Vec2::new(200.0, 50.0));
    let target = follower.target();
    let mut prev = (target - follower.offset()).length();
    let mut frames = 0;
    loop {
        frames += 1;
        let request = follower.frame();
        let gap = (target - follower.offset()).length();
        assert!(gap < prev);
        prev = gap;
        if request == FrameRequest::Idle {
            break;
        }
        assert!(frames < 1_000);
    }
    assert!((follower.offset() - target).abs().max_element() <= 0.01);
    assert!(!follower.is_animating());
    assert!(element.style("transform").unwrap().starts_with("translate("));
}

#[test]
fn leave_returns_exactly_to_origin() {
    let (mut follower, element) = button();
    follower.on_pointer_enter();
    assert!(element.has_class("magnetic-active"));
    follower.on_pointer_move(Vec2::new(200.0, 50.0));
    run_until_idle(&mut follower, 1_000);

    follower.on_pointer_leave();
    assert!(!element.has_class("magnetic-active"));
    assert_eq!(follower.motion(), Motion::Returning);
    assert_eq!(follower.target(), Vec2::ZERO);

    run_until_idle(&mut follower, 1_000);
    assert_eq!(follower.offset(), Vec2::ZERO);
    assert_eq!(element.style("transform").as_deref(), Some("translate(0, 0)"));
}

#[test]
fn leave_mid_flight_still_settles_at_origin() {
    let (mut follower, _) = button();
    follower.on_pointer_move(Vec2::new(0.0, 0.0));
    follower.frame();
    follower.frame();
    follower.on_pointer_leave();
    run_until_idle(&mut follower, 1_000);
    assert_eq!(follower.offset(), Vec2::ZERO);
}

#[test]
fn enter_picks_up_layout_shift() {
    let (mut follower, element) = button();
    element.move_to(Rect::new(0.0, 500.0, 200.0, 100.0));
    follower.on_pointer_enter();
    follower.on_pointer_move(Vec2::new(100.0, 550.0));
    assert_eq!(follower.target(), Vec2::ZERO);
}

#[test]
fn destroy_cancels_motion_and_is_idempotent() {
    let (mut follower, element) = button();
    follower.on_pointer_move(Vec2::new(200.0, 50.0));
    follower.destroy();
    follower.destroy();
    let writes = element.style_writes();
    assert_eq!(follower.frame(), FrameRequest::Idle);
    assert_eq!(element.style_writes(), writes);
    assert!(!follower.is_animating());

    follower.on_pointer_move(Vec2::new(10.0, 10.0));
    follower.on_pointer_leave();
    assert!(!follower.is_animating());
}

#[test]
fn out_of_range_speed_is_rejected() {
    let cfg = MagneticConfig {
        speed: 1.5,
        ..MagneticConfig::default()
    };
    assert!(SpringFollower::<MockElement>::new(cfg).is_err());
}
