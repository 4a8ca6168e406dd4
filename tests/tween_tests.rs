// Host-side tests for easing curves and the per-property tween.

mod common;

use common::scene::tween::*;

const ALL: [Easing; 4] = [
    Easing::Linear,
    Easing::Power3Out,
    Easing::Power4InOut,
    Easing::ExpoOut,
];

#[test]
fn easings_hit_exact_endpoints() {
    for e in ALL {
        assert_eq!(e.apply(0.0), 0.0, "{e:?} at 0");
        assert_eq!(e.apply(1.0), 1.0, "{e:?} at 1");
    }
}

#[test]
fn easings_clamp_out_of_range_progress() {
    for e in ALL {
        assert_eq!(e.apply(-0.5), 0.0);
        assert_eq!(e.apply(1.5), 1.0);
    }
}

#[test]
fn easings_are_monotonic() {
    for e in ALL {
        let mut prev = e.apply(0.0);
        for i in 1..=200 {
            let v = e.apply(i as f32 / 200.0);
            assert!(v >= prev, "{e:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn power4_in_out_is_symmetric_about_midpoint() {
    let e = Easing::Power4InOut;
    assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
    for t in [0.1_f32, 0.2, 0.3, 0.4] {
        assert!((e.apply(t) + e.apply(1.0 - t) - 1.0).abs() < 1e-5);
    }
}

#[test]
fn ease_out_curves_lead_linear() {
    for t in [0.1_f32, 0.3, 0.6] {
        assert!(Easing::Power3Out.apply(t) > t);
        assert!(Easing::ExpoOut.apply(t) > t);
    }
}

#[test]
fn tween_holds_start_value_during_delay() {
    let mut tw = Tween::new(10.0, 20.0, 1.0, Easing::Linear).with_delay(0.5);
    assert_eq!(tw.advance(0.25), 10.0);
    assert_eq!(tw.advance(0.25), 10.0);
    assert!((tw.advance(0.5) - 15.0).abs() < 1e-5);
    assert!(!tw.is_finished());
}

#[test]
fn tween_finishes_on_target_and_stays_there() {
    let mut tw = Tween::new(1.0, 0.0, 0.3, Easing::Power3Out);
    for _ in 0..10 {
        tw.advance(0.1);
    }
    assert!(tw.is_finished());
    assert_eq!(tw.value(), 0.0);
    assert_eq!(tw.progress(), 1.0);
}

#[test]
fn tween_ignores_negative_and_nan_steps() {
    let mut tw = Tween::new(0.0, 1.0, 1.0, Easing::Linear);
    tw.advance(0.5);
    assert_eq!(tw.advance(-1.0), 0.5);
    assert_eq!(tw.advance(f32::NAN), 0.5);
}

#[test]
fn seek_is_absolute() {
    let mut tw = Tween::new(0.0, 1.0, 2.0, Easing::Linear);
    assert_eq!(tw.seek(1.0), 0.5);
    assert_eq!(tw.seek(0.5), 0.25);
    assert_eq!(tw.seek(100.0), 1.0);
}

#[test]
fn zero_duration_tween_jumps_after_delay() {
    let mut tw = Tween::new(0.0, 1.0, 0.0, Easing::Linear).with_delay(0.2);
    assert_eq!(tw.seek(0.1), 0.0);
    assert_eq!(tw.seek(0.3), 1.0);
}
