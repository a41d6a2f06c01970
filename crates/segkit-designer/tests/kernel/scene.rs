use segkit_core::Point;
use segkit_designer::{
    CanvasBounds, KeyBindings, ScaleDirection, Scene, SceneCommand, Segment, SegmentId,
};

fn run_keys(scene: &mut Scene, keys: &str) {
    let bindings = KeyBindings::default();
    for key in keys.chars() {
        if let Some(command) = bindings.map_key(key) {
            scene.apply(&command);
        }
    }
}

#[test]
fn test_keyboard_session_moves_selected_segment() {
    let mut scene = Scene::default();
    run_keys(&mut scene, "ddds");
    let a = scene.segment(SegmentId::A);
    assert_eq!(a.start(), Point::new(130.0, 20.0));
    assert_eq!(a.end(), Point::new(130.0, 260.0));
    assert_eq!(a.center(), Point::new(130.0, 140.0));
}

#[test]
fn test_unbound_keys_change_nothing() {
    let mut scene = Scene::default();
    let before = scene.clone();
    run_keys(&mut scene, "xyz!? QZ");
    assert_eq!(scene, before);
}

#[test]
fn test_rotate_keys_cancel_out() {
    let mut scene = Scene::default();
    let before = *scene.selected();
    run_keys(&mut scene, "1111222");
    run_keys(&mut scene, "2");
    let after = scene.selected();
    assert!(after.start().distance_to(&before.start()) < 1e-9);
    assert!(after.end().distance_to(&before.end()) < 1e-9);
}

#[test]
fn test_switch_selection_then_transform_other() {
    let mut scene = Scene::default();
    assert!(scene.try_select(450, 300));
    run_keys(&mut scene, "+a");

    let b = scene.segment(SegmentId::B);
    assert_eq!(b.center(), Point::new(440.0, 252.5));
    assert!((b.length() - 335.0 * 1.08).abs() < 1e-9);
    assert_eq!(
        *scene.segment(SegmentId::A),
        Segment::from_coords(100.0, 10.0, 100.0, 250.0)
    );
}

#[test]
fn test_custom_scale_factor() {
    let mut scene = Scene::new(
        Segment::from_coords(0.0, 0.0, 100.0, 0.0),
        Segment::from_coords(0.0, 50.0, 100.0, 50.0),
    )
    .with_scale_factor(0.5);
    scene.apply(&SceneCommand::Scale(ScaleDirection::Shrink));
    assert_eq!(scene.selected().start(), Point::new(25.0, 0.0));
    assert_eq!(scene.selected().end(), Point::new(75.0, 0.0));
}

#[test]
fn test_custom_threshold() {
    let mut scene = Scene::default().with_select_threshold(2.0);
    assert!(!scene.try_select(455, 300));
    assert!(scene.try_select(451, 300));
}

#[test]
fn test_default_strokes_fit_canvas() {
    let scene = Scene::default();
    let bounds = CanvasBounds::new(620, 480);
    assert_eq!(scene.stroke(SegmentId::A, bounds).count(), 241);
    assert_eq!(scene.stroke(SegmentId::B, bounds).count(), 336);
}
