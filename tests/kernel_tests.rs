// Host-side tests for the displacement kernel.

mod common;

use common::scene::kernel::*;
use glam::{Vec2, Vec3};

const EPS: f32 = 1e-6;

#[test]
fn smoothstep_matches_hermite_ramp() {
    assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < EPS);
    assert!((smoothstep(0.0, 1.0, 0.25) - 0.15625).abs() < EPS);
}

#[test]
fn smoothstep_with_reversed_edges_falls() {
    assert!((smoothstep(3.0, 0.0, 0.0) - 1.0).abs() < EPS);
    assert!(smoothstep(3.0, 0.0, 3.0).abs() < EPS);
    assert!((smoothstep(3.0, 0.0, 1.5) - 0.5).abs() < EPS);
}

#[test]
fn smoothstep_with_equal_edges_is_a_step() {
    assert_eq!(smoothstep(2.0, 2.0, 1.9), 0.0);
    assert_eq!(smoothstep(2.0, 2.0, 2.0), 1.0);
}

#[test]
fn repulsion_is_full_at_pointer_and_zero_at_radius() {
    assert!((repulsion_force(0.0, 3.0) - 1.0).abs() < EPS);
    assert_eq!(repulsion_force(3.0, 3.0), 0.0);
}

#[test]
fn repulsion_stays_clamped_beyond_radius() {
    for d in [3.0001_f32, 3.5, 10.0, 1e6] {
        let f = repulsion_force(d, 3.0);
        assert_eq!(f, 0.0, "force at distance {d} = {f}");
    }
}

#[test]
fn repulsion_decreases_with_distance() {
    let mut prev = repulsion_force(0.0, 3.0);
    for i in 1..=300 {
        let f = repulsion_force(i as f32 * 0.01, 3.0);
        assert!(f <= prev, "force increased at step {i}");
        assert!((0.0..=1.0).contains(&f));
        prev = f;
    }
}

#[test]
fn fade_is_opaque_near_and_transparent_far() {
    for z in [0.0_f32, 2.5, -4.9, 5.0, -5.0] {
        assert_eq!(fade_factor(z, 5.0, 15.0), 1.0, "z = {z}");
    }
    for z in [15.0_f32, -15.0, 20.0, -100.0] {
        assert_eq!(fade_factor(z, 5.0, 15.0), 0.0, "z = {z}");
    }
}

#[test]
fn fade_decreases_monotonically_between_bounds() {
    let mut prev = fade_factor(5.0, 5.0, 15.0);
    for i in 1..=100 {
        let z = 5.0 + i as f32 * 0.1;
        let a = fade_factor(z, 5.0, 15.0);
        assert!(a <= prev, "fade increased at z = {z}");
        prev = a;
    }
    let mid = fade_factor(10.0, 5.0, 15.0);
    assert!(mid > 0.0 && mid < 1.0);
}

#[test]
fn displace_far_from_pointer_is_pure_wave() {
    let params = KernelParams::default();
    let base = Vec3::new(2.0, 1.0, -3.0);
    let t = 4.0;
    let pointer = Vec2::new(-50.0, 50.0);
    let out = displace(&params, base, t, pointer);

    let y = base.y + (base.x * 0.5 + t * 0.5).sin() * 0.5;
    let z = base.z + (y * 0.5 + t * 0.3).cos() * 0.2;
    assert!((out.position.x - base.x).abs() < EPS);
    assert!((out.position.y - y).abs() < 1e-5);
    assert!((out.position.z - z).abs() < 1e-5);
}

#[test]
fn displace_under_pointer_lifts_toward_camera() {
    let params = KernelParams::default();
    // At t = 0 and x = 0 the y wave is zero, so the point stays under the pointer.
    let base = Vec3::new(0.0, 0.0, 0.0);
    let out = displace(&params, base, 0.0, Vec2::ZERO);
    // cos(0) * 0.2 wave plus full lift of 2.0
    assert!((out.position.z - 2.2).abs() < 1e-5);
    assert!(out.position.x.abs() < EPS);
    assert!(out.position.y.abs() < EPS);
}

#[test]
fn displace_pushes_points_away_from_pointer() {
    let params = KernelParams::default();
    let pointer = Vec2::new(0.0, 0.0);
    let base = Vec3::new(1.0, 0.0, 0.0);
    let out = displace(&params, base, 0.0, pointer);
    let wave_y = (0.5_f32).sin() * 0.5;
    let before = Vec2::new(1.0, wave_y).distance(pointer);
    let after = out.position.truncate().distance(pointer);
    assert!(after > before, "expected push: {before} -> {after}");
}

#[test]
fn displace_reports_fade_of_final_depth() {
    let params = KernelParams::default();
    let near = displace(&params, Vec3::new(0.0, 0.0, 1.0), 0.0, Vec2::splat(100.0));
    assert_eq!(near.fade, 1.0);
    let far = displace(&params, Vec3::new(0.0, 0.0, -20.0), 0.0, Vec2::splat(100.0));
    assert_eq!(far.fade, 0.0);
}

#[test]
fn point_size_scales_with_pixel_ratio_and_inverse_depth() {
    let a = point_size_px(1.5, 3.0, 1.0);
    let b = point_size_px(1.5, 3.0, 2.0);
    assert!((b - 2.0 * a).abs() < 1e-5);
    let near = point_size_px(1.0, 3.0, 2.0);
    let far = point_size_px(2.0, 3.0, 2.0);
    assert!((near - 2.0 * far).abs() < 1e-5);
}

#[test]
fn point_size_never_drops_below_one_pixel() {
    assert_eq!(point_size_px(100.0, 3.0, 1.0), 1.0);
    assert!(point_size_px(0.0, 3.0, 1.0).is_finite());
}
