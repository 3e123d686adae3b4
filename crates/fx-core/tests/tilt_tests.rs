// Host-side tests for the card tilt follower.

mod common;

use common::MockElement;
use fx_core::{Animate, FrameRequest, Motion, Rect, TiltConfig, TiltFollower, TiltShadow};
use glam::Vec2;

fn card() -> (TiltFollower<MockElement>, MockElement, MockElement) {
    let glow = MockElement::default();
    let element =
        MockElement::with_rect(Rect::new(100.0, 100.0, 300.0, 200.0)).with_child(".tilt-glow", glow.clone());
    let mut tilt = TiltFollower::new(TiltConfig::default()).unwrap();
    tilt.init(element.clone());
    tilt.on_pointer_enter();
    (tilt, element, glow)
}

fn run_until_idle(tilt: &mut TiltFollower<MockElement>) {
    for _ in 0..1_000 {
        if tilt.frame() == FrameRequest::Idle {
            return;
        }
    }
    panic!("tilt never settled");
}

#[test]
fn init_prepares_3d_rendering() {
    let (_, element, _) = card();
    assert_eq!(element.style("will-change").as_deref(), Some("transform"));
    assert_eq!(element.style("transform-style").as_deref(), Some("preserve-3d"));
}

#[test]
fn pointer_on_right_edge_tilts_around_y() {
    let (mut tilt, _, _) = card();
    // centre is (250, 200); half extents (150, 100)
    tilt.on_pointer_move(Vec2::new(400.0, 200.0));
    let target = tilt.target_angles();
    assert!((target.x).abs() < 1e-6);
    assert!((target.y - 15.0).abs() < 1e-5);
}

#[test]
fn pointer_below_centre_tilts_x_negative() {
    let (mut tilt, _, _) = card();
    tilt.on_pointer_move(Vec2::new(250.0, 250.0));
    let target = tilt.target_angles();
    assert!((target.x + 7.5).abs() < 1e-5);
    assert!(target.y.abs() < 1e-6);
}

#[test]
fn tracking_applies_transform_shadow_and_glow() {
    let (mut tilt, element, glow) = card();
    tilt.on_pointer_move(Vec2::new(175.0, 150.0));
    assert!(glow.style("background").unwrap().contains("circle at 75px 50px"));

    assert_eq!(tilt.frame(), FrameRequest::Continue);
    let transform = element.style("transform").unwrap();
    assert!(transform.starts_with("perspective(1000px) rotateX("));
    assert_eq!(element.style("box-shadow").unwrap(), tilt.shadow().css());
    assert_eq!(glow.style("opacity").as_deref(), Some("1"));
}

#[test]
fn tilt_gap_shrinks_until_settled() {
    let (mut tilt, _, _) = card();
    tilt.on_pointer_move(Vec2::new(100.0, 300.0));
    let target = tilt.target_angles();
    let mut prev = (target - tilt.angles()).length();
    loop {
        let request = tilt.frame();
        let gap = (target - tilt.angles()).length();
        assert!(gap < prev);
        prev = gap;
        if request == FrameRequest::Idle {
            break;
        }
    }
    assert!((target - tilt.angles()).abs().max_element() <= 0.01);
}

#[test]
fn leave_returns_to_identity_and_hides_glow() {
    let (mut tilt, element, glow) = card();
    tilt.on_pointer_move(Vec2::new(380.0, 120.0));
    run_until_idle(&mut tilt);

    tilt.on_pointer_leave();
    assert_eq!(tilt.motion(), Motion::Returning);
    run_until_idle(&mut tilt);

    assert_eq!(tilt.angles(), Vec2::ZERO);
    assert_eq!(
        element.style("transform").as_deref(),
        Some("perspective(1000px) rotateX(0) rotateY(0)")
    );
    assert_eq!(glow.style("opacity").as_deref(), Some("0"));
    assert_eq!(tilt.shadow(), TiltShadow::from_angles(0.0, 0.0));
}

#[test]
fn shadow_follows_angles() {
    let shadow = TiltShadow::from_angles(10.0, -5.0);
    assert_eq!(shadow.offset, Vec2::new(-10.0, -20.0));
    assert_eq!(shadow.blur, 55.0);
    assert!((shadow.opacity - 0.45).abs() < 1e-6);

    let rest = TiltShadow::from_angles(0.0, 0.0);
    assert_eq!(rest.blur, 40.0);
    assert!(rest.css().ends_with("px 40px rgba(0, 0, 0, 0.3)"));
}

#[test]
fn glow_can_be_disabled() {
    let glow = MockElement::default();
    let element =
        MockElement::with_rect(Rect::new(0.0, 0.0, 100.0, 100.0)).with_child(".tilt-glow", glow.clone());
    let cfg = TiltConfig {
        enable_glow: false,
        ..TiltConfig::default()
    };
    let mut tilt = TiltFollower::new(cfg).unwrap();
    tilt.init(element);
    tilt.on_pointer_move(Vec2::new(10.0, 10.0));
    tilt.frame();
    assert_eq!(glow.style_writes(), 0);
}

#[test]
fn zero_sized_element_does_not_produce_nan() {
    let element = MockElement::with_rect(Rect::new(50.0, 50.0, 0.0, 0.0));
    let mut tilt = TiltFollower::new(TiltConfig::default()).unwrap();
    tilt.init(element);
    tilt.on_pointer_move(Vec2::new(80.0, 20.0));
    assert_eq!(tilt.target_angles(), Vec2::ZERO);
}

#[test]
fn resize_only_recaptures_rect() {
    let (mut tilt, element, _) = card();
    tilt.on_pointer_move(Vec2::new(400.0, 200.0));
    tilt.frame();
    let angles = tilt.angles();
    element.move_to(Rect::new(0.0, 0.0, 50.0, 50.0));
    tilt.on_resize();
    assert_eq!(tilt.rect(), Rect::new(0.0, 0.0, 50.0, 50.0));
    assert_eq!(tilt.angles(), angles);
    assert_eq!(tilt.motion(), Motion::Tracking);
}

#[test]
fn destroy_twice_is_harmless() {
    let (mut tilt, element, _) = card();
    tilt.on_pointer_move(Vec2::new(400.0, 200.0));
    tilt.destroy();
    tilt.destroy();
    let writes = element.style_writes();
    assert_eq!(tilt.frame(), FrameRequest::Idle);
    assert_eq!(element.style_writes(), writes);
    assert!(!tilt.is_animating());
}
