use proptest::prelude::*;
use segkit_core::Point;
use segkit_designer::{ScaleDirection, Segment, DEFAULT_SCALE_FACTOR};

const EPS: f64 = 1e-9;

fn close(a: Point, b: Point, tol: f64) -> bool {
    a.distance_to(&b) <= tol
}

fn coord() -> impl Strategy<Value = f64> {
    -1000.0f64..1000.0
}

proptest! {
    #[test]
    fn rotation_preserves_length_and_center(
        x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord(),
        theta in -10.0f64..10.0,
    ) {
        let mut seg = Segment::from_coords(x1, y1, x2, y2);
        let length = seg.length();
        let center = seg.center();

        seg.rotate(theta);

        prop_assert!((seg.length() - length).abs() <= 1e-7 * (1.0 + length));
        prop_assert_eq!(seg.center(), center);
        prop_assert!(close(seg.midpoint(), center, 1e-7));
    }

    #[test]
    fn translation_shifts_everything_exactly(
        x1 in -100i32..100, y1 in -100i32..100, x2 in -100i32..100, y2 in -100i32..100,
        dx in -50i32..50, dy in -50i32..50,
    ) {
        // Integer-valued inputs keep the arithmetic exact.
        let mut seg = Segment::from_coords(x1 as f64, y1 as f64, x2 as f64, y2 as f64);
        let before = seg;
        seg.translate(dx as f64, dy as f64);

        let delta = Point::new(dx as f64, dy as f64);
        prop_assert_eq!(seg.start(), before.start() + delta);
        prop_assert_eq!(seg.end(), before.end() + delta);
        prop_assert_eq!(seg.center(), before.center() + delta);
        prop_assert_eq!(seg.length(), before.length());
        prop_assert_eq!(seg.angle(), before.angle());
    }

    #[test]
    fn scale_restores_point_symmetry(
        x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord(),
        grow in any::<bool>(),
        steps in 1usize..6,
    ) {
        let direction = if grow { ScaleDirection::Grow } else { ScaleDirection::Shrink };
        let mut seg = Segment::from_coords(x1, y1, x2, y2);
        seg.rotate(0.3);
        let center = seg.center();

        for _ in 0..steps {
            seg.scale(direction, DEFAULT_SCALE_FACTOR);
        }

        prop_assert_eq!(seg.center(), center);
        let mirrored = center * 2.0 - seg.start();
        prop_assert!(close(seg.end(), mirrored, 1e-9 * (1.0 + seg.length())));
    }
}

#[test]
fn test_scale_mirror_exact_for_representable_values() {
    let mut seg = Segment::from_coords(0.0, 0.0, 64.0, 32.0);
    seg.scale(ScaleDirection::Shrink, 0.5);
    assert_eq!(seg.start(), Point::new(16.0, 8.0));
    assert_eq!(seg.end(), seg.center() * 2.0 - seg.start());
}

#[test]
fn test_rotate_quarter_turn_about_center() {
    let mut seg = Segment::from_coords(100.0, 10.0, 100.0, 250.0);
    seg.rotate(std::f64::consts::FRAC_PI_2);
    assert!(close(seg.start(), Point::new(220.0, 130.0), EPS));
    assert!(close(seg.end(), Point::new(-20.0, 130.0), EPS));
}

#[test]
fn test_rotate_round_trip() {
    let original = Segment::from_coords(12.0, -4.0, 80.0, 33.0);
    let mut seg = original;
    for _ in 0..10 {
        seg.rotate(0.256);
    }
    for _ in 0..10 {
        seg.rotate(-0.256);
    }
    assert!(close(seg.start(), original.start(), 1e-9));
    assert!(close(seg.end(), original.end(), 1e-9));
}

#[test]
fn test_grow_then_shrink_is_not_identity() {
    // (1 + f)(1 - f) = 1 - f², so a grow/shrink pair loses a little length.
    let mut seg = Segment::from_coords(0.0, 0.0, 100.0, 0.0);
    seg.scale(ScaleDirection::Grow, DEFAULT_SCALE_FACTOR);
    seg.scale(ScaleDirection::Shrink, DEFAULT_SCALE_FACTOR);
    let expected = 100.0 * (1.0 - DEFAULT_SCALE_FACTOR * DEFAULT_SCALE_FACTOR);
    assert!((seg.length() - expected).abs() < EPS);
}
