use proptest::prelude::*;
use segkit_designer::{
    rasterize, rasterize_clipped, rasterize_segment, CanvasBounds, ScaleDirection, Segment,
};
use std::collections::BTreeSet;

fn pixel_set(pixels: impl Iterator<Item = (i32, i32)>) -> BTreeSet<(i32, i32)> {
    pixels.collect()
}

fn is_eight_connected(pixels: &[(i32, i32)]) -> bool {
    pixels
        .windows(2)
        .all(|w| (w[0].0 - w[1].0).abs() <= 1 && (w[0].1 - w[1].1).abs() <= 1 && w[0] != w[1])
}

#[test]
fn test_horizontal_line() {
    let pixels: Vec<_> = rasterize(0, 0, 5, 0).collect();
    assert_eq!(pixels, vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]);
}

#[test]
fn test_diagonal_line() {
    let pixels: Vec<_> = rasterize(0, 0, 3, 3).collect();
    assert_eq!(pixels.len(), 4);
    assert!(is_eight_connected(&pixels));
    assert!(pixels.windows(2).all(|w| w[1].0 > w[0].0 && w[1].1 > w[0].1));
    assert_eq!(pixels, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
}

#[test]
fn test_steep_descending_line() {
    let pixels: Vec<_> = rasterize(3, 10, 1, 0).collect();
    assert_eq!(pixels.len(), 11);
    assert!(is_eight_connected(&pixels));
    assert_eq!(pixels.first(), Some(&(1, 0)));
    assert_eq!(pixels.last(), Some(&(3, 10)));
    // One pixel per row along the long axis
    let rows: BTreeSet<_> = pixels.iter().map(|p| p.1).collect();
    assert_eq!(rows.len(), 11);
}

#[test]
fn test_restartable() {
    let line = rasterize(-3, 7, 12, -2);
    let first: Vec<_> = line.clone().collect();
    let second: Vec<_> = line.collect();
    assert_eq!(first, second);
}

#[test]
fn test_fully_outside_yields_nothing() {
    let bounds = CanvasBounds::new(620, 480);
    assert_eq!(rasterize_clipped(-50, -50, -10, -5, bounds).count(), 0);
    assert_eq!(rasterize_clipped(700, 10, 900, 400, bounds).count(), 0);
}

#[test]
fn test_clipping_at_canvas_edge() {
    let bounds = CanvasBounds::new(620, 480);
    let pixels: Vec<_> = rasterize_clipped(600, 100, 640, 100, bounds).collect();
    assert_eq!(pixels.len(), 20);
    assert_eq!(pixels.first(), Some(&(600, 100)));
    assert_eq!(pixels.last(), Some(&(619, 100)));
}

#[test]
fn test_row_and_column_zero_are_not_drawn() {
    let bounds = CanvasBounds::new(620, 480);
    assert_eq!(rasterize_clipped(0, 0, 5, 0, bounds).count(), 0);
    assert_eq!(rasterize_clipped(0, 10, 0, 12, bounds).count(), 0);

    let pixels: Vec<_> = rasterize_clipped(0, 10, 3, 10, bounds).collect();
    assert_eq!(pixels, vec![(1, 10), (2, 10), (3, 10)]);
}

#[test]
fn test_grown_segment_walk_is_bounded_by_canvas() {
    let bounds = CanvasBounds::new(620, 480);
    let mut seg = Segment::from_coords(100.0, 10.0, 100.0, 250.0);
    for _ in 0..220 {
        seg.scale(ScaleDirection::Grow, 0.08);
    }
    assert!(seg.length() > 1e9);

    let (s, e) = (seg.start(), seg.end());
    let walk = rasterize(s.x as i32, s.y as i32, e.x as i32, e.y as i32).clipped(bounds);
    assert_eq!(walk.len(), 479);
    assert_eq!(rasterize_segment(&seg, bounds).count(), 479);
}

proptest! {
    #[test]
    fn reversed_endpoints_give_same_pixels(
        x1 in -200i32..200, y1 in -200i32..200, x2 in -200i32..200, y2 in -200i32..200,
    ) {
        let forward = pixel_set(rasterize(x1, y1, x2, y2));
        let backward = pixel_set(rasterize(x2, y2, x1, y1));
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn line_is_connected_with_long_axis_length(
        x1 in -200i32..200, y1 in -200i32..200, x2 in -200i32..200, y2 in -200i32..200,
    ) {
        let pixels: Vec<_> = rasterize(x1, y1, x2, y2).collect();
        let expected = (x2 - x1).abs().max((y2 - y1).abs()) as usize + 1;
        prop_assert_eq!(pixels.len(), expected);
        prop_assert!(is_eight_connected(&pixels));

        let ends = pixel_set([(x1, y1), (x2, y2)].into_iter());
        let all = pixel_set(pixels.iter().copied());
        prop_assert!(ends.is_subset(&all));
    }

    #[test]
    fn clipping_only_removes_out_of_bounds(
        x1 in -100i32..200, y1 in -100i32..200, x2 in -100i32..200, y2 in -100i32..200,
        w in 1u32..150, h in 1u32..150,
    ) {
        let bounds = CanvasBounds::new(w, h);
        let clipped: Vec<_> = rasterize_clipped(x1, y1, x2, y2, bounds).collect();
        let expected: Vec<_> = rasterize(x1, y1, x2, y2)
            .filter(|&(x, y)| bounds.contains(x, y))
            .collect();

        prop_assert!(clipped.iter().all(|&(x, y)| x > 0 && y > 0 && x < w as i32 && y < h as i32));
        prop_assert_eq!(clipped, expected);
    }

    #[test]
    fn clipped_walk_never_exceeds_canvas_span(
        x1 in -100_000i32..100_000, y1 in -100_000i32..100_000,
        x2 in -100_000i32..100_000, y2 in -100_000i32..100_000,
        w in 1u32..300, h in 1u32..300,
    ) {
        let walk = rasterize(x1, y1, x2, y2).clipped(CanvasBounds::new(w, h));
        prop_assert!(walk.len() <= w.max(h) as usize);
    }
}
