// Host-side tests for pointer mapping, smoothing and the cursor follower.

mod common;

use common::scene::camera::Viewport;
use common::scene::pointer::*;
use glam::Vec2;

fn viewport(w: f32, h: f32) -> Viewport {
    Viewport::new(w, h, 1.0, 2.0)
}

#[test]
fn to_scene_maps_corners_and_center() {
    let vp = viewport(1000.0, 500.0);
    assert_eq!(to_scene(PointerSample::new(0.0, 0.0), &vp), Vec2::new(-10.0, 5.0));
    assert_eq!(to_scene(PointerSample::new(1000.0, 500.0), &vp), Vec2::new(10.0, -5.0));
    assert_eq!(to_scene(PointerSample::new(500.0, 250.0), &vp), Vec2::new(0.0, 0.0));
}

#[test]
fn to_scene_survives_zero_sized_viewport() {
    let vp = viewport(0.0, 0.0);
    let p = to_scene(PointerSample::new(0.0, 0.0), &vp);
    assert!(p.is_finite());
}

#[test]
fn tracker_does_not_jump_to_raw_sample() {
    let vp = viewport(800.0, 600.0);
    let mut tracker = PointerTracker::new(0.05);
    tracker.observe(PointerSample::new(800.0, 0.0), &vp);
    let first = tracker.step();
    assert_eq!(tracker.raw(), Vec2::new(10.0, 5.0));
    assert!((first - Vec2::new(0.5, 0.25)).length() < 1e-5);
}

#[test]
fn tracker_converges_monotonically_without_overshoot() {
    let vp = viewport(800.0, 600.0);
    let mut tracker = PointerTracker::new(0.05);
    tracker.observe(PointerSample::new(200.0, 450.0), &vp);
    let goal = tracker.raw();

    let mut prev_gap = (goal - tracker.target()).length();
    for frame in 0..600 {
        let p = tracker.step();
        let gap = (goal - p).length();
        assert!(gap <= prev_gap, "gap grew at frame {frame}");
        // No overshoot: each component stays between the start (0) and the goal.
        assert!(p.x >= goal.x.min(0.0) && p.x <= goal.x.max(0.0));
        assert!(p.y >= goal.y.min(0.0) && p.y <= goal.y.max(0.0));
        prev_gap = gap;
    }
    assert!(prev_gap < 1e-3, "did not converge: {prev_gap}");
}

#[test]
fn tracker_keeps_last_sample_when_no_new_events() {
    let vp = viewport(800.0, 600.0);
    let mut tracker = PointerTracker::new(0.05);
    tracker.observe(PointerSample::new(400.0, 300.0), &vp);
    tracker.observe(PointerSample::new(800.0, 600.0), &vp);
    assert_eq!(tracker.raw(), Vec2::new(10.0, -5.0));
    for _ in 0..10 {
        tracker.step();
    }
    assert_eq!(tracker.raw(), Vec2::new(10.0, -5.0));
}

#[test]
fn tracker_ignores_non_finite_samples() {
    let vp = viewport(800.0, 600.0);
    let mut tracker = PointerTracker::new(0.05);
    tracker.observe(PointerSample::new(400.0, 300.0), &vp);
    tracker.observe(PointerSample::new(f32::NAN, 10.0), &vp);
    assert!(tracker.raw().is_finite());
}

#[test]
fn cursor_dot_tracks_exactly_and_ring_lags() {
    let mut follower = CursorFollower::new(0.15);
    let (dot, ring) = follower.step(PointerSample::new(100.0, 200.0));
    assert_eq!(dot, Vec2::new(97.0, 197.0));
    assert!((follower.ring() - Vec2::new(15.0, 30.0)).length() < 1e-4);
    assert!((ring - Vec2::new(-5.0, 10.0)).length() < 1e-4);

    for _ in 0..200 {
        follower.step(PointerSample::new(100.0, 200.0));
    }
    assert!((follower.ring() - Vec2::new(100.0, 200.0)).length() < 1e-3);
}
