// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Rectangle/circle minimum-separation vectors.

use planar_core::math::Vec2;
use planar_geom::{Circle, Rect};
use proptest::prelude::*;

fn unit_box() -> Rect {
    Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0))
}

fn circle(x: f64, y: f64, radius: f64) -> Circle {
    Circle::new(Vec2::new(x, y), radius)
}

#[test]
fn separation_table() {
    let cases = [
        ("no overlap", circle(50.0, 50.0, 1.0), Vec2::ZERO),
        ("circle contains rect", circle(5.0, 5.0, 10.0), Vec2::new(-15.0, 0.0)),
        ("rect contains circle", circle(5.0, 5.0, 1.0), Vec2::new(-6.0, 0.0)),
        ("overlaps bottom-left corner", circle(0.0, 0.0, 1.0), Vec2::new(1.0, 0.0)),
        ("overlaps top-left corner", circle(0.0, 10.0, 1.0), Vec2::new(1.0, 0.0)),
        ("overlaps bottom-right corner", circle(10.0, 0.0, 1.0), Vec2::new(-1.0, 0.0)),
        ("overlaps top-right corner", circle(10.0, 10.0, 1.0), Vec2::new(-1.0, 0.0)),
        ("overlaps two corners", circle(0.0, 5.0, 6.0), Vec2::new(6.0, 0.0)),
        ("overlaps left edge", circle(0.0, 5.0, 1.0), Vec2::new(1.0, 0.0)),
        ("overlaps bottom edge", circle(5.0, 0.0, 1.0), Vec2::new(0.0, 1.0)),
        ("overlaps right edge", circle(10.0, 5.0, 1.0), Vec2::new(-1.0, 0.0)),
        ("overlaps top edge", circle(5.0, 10.0, 1.0), Vec2::new(0.0, -1.0)),
        ("tangent to left side", circle(-1.0, 5.0, 1.0), Vec2::ZERO),
        ("tangent to bottom side", circle(5.0, -1.0, 1.0), Vec2::ZERO),
        ("above rectangle", circle(5.0, 12.0, 1.0), Vec2::ZERO),
        ("below rectangle", circle(5.0, -2.0, 1.0), Vec2::ZERO),
        ("left of rectangle", circle(-1.0, 5.0, 1.0), Vec2::ZERO),
        ("right of rectangle", circle(11.0, 5.0, 1.0), Vec2::ZERO),
    ];
    for (name, c, want) in cases {
        assert_eq!(unit_box().intersect_circle(&c), want, "{name}: {c}");
    }
}

#[test]
fn negative_radius_behaves_like_its_magnitude() {
    let r = unit_box();
    assert_eq!(
        r.intersect_circle(&circle(0.0, 5.0, -1.0)),
        r.intersect_circle(&circle(0.0, 5.0, 1.0))
    );
    assert_eq!(r.intersect_circle(&circle(-1.0, 5.0, -1.0)), Vec2::ZERO);
}

#[test]
fn ties_prefer_left_then_right_then_top() {
    let r = unit_box();
    // Center of a square: all sides equidistant, left wins.
    assert_eq!(r.intersect_circle(&circle(5.0, 5.0, 2.0)), Vec2::new(-7.0, 0.0));
    // Right and top equidistant (2), right wins.
    assert_eq!(r.intersect_circle(&circle(8.0, 8.0, 3.0)), Vec2::new(-1.0, 0.0));
    // Top and bottom equidistant on a wide box, top wins.
    let wide = Rect::from_coords(0.0, 0.0, 20.0, 4.0);
    assert_eq!(wide.intersect_circle(&circle(10.0, 2.0, 3.0)), Vec2::new(0.0, -1.0));
}

#[test]
fn radius_equal_to_nearest_side_pushes_out() {
    // Touching the left side from inside counts as "reaches no side".
    let got = unit_box().intersect_circle(&circle(2.0, 5.0, 2.0));
    assert_eq!(got, Vec2::new(-4.0, 0.0));
}

#[test]
fn radius_equal_to_farthest_side_still_pulls_inward() {
    // Sides: left 5, right 5, top 2, bottom 2; nearest is top, farthest 5.
    let r = Rect::from_coords(0.0, 0.0, 10.0, 4.0);
    assert_eq!(r.intersect_circle(&circle(5.0, 2.0, 5.0)), Vec2::new(0.0, -3.0));
    // Past the farthest side the circle engulfs the box and is pushed out.
    assert_eq!(r.intersect_circle(&circle(5.0, 2.0, 5.5)), Vec2::new(0.0, 7.5));
}

#[test]
fn inward_vectors_carry_no_negative_zero() {
    let r = Rect::from_coords(0.0, 0.0, 10.0, 4.0);
    assert_eq!(r.intersect_circle(&circle(5.0, 2.0, 5.0)).to_string(), "Vec(0, -3)");
    // Left side nearest, partial overlap: pulled right.
    let got = unit_box().intersect_circle(&circle(1.0, 5.0, 2.0));
    assert_eq!(got.to_string(), "Vec(1, 0)");
}

#[test]
fn outside_center_partial_overlap_pushes_away() {
    let r = unit_box();
    // Left of the box, overlapping by half a unit.
    assert_eq!(r.intersect_circle(&circle(-0.5, 5.0, 1.0)), Vec2::new(-0.5, 0.0));
    // Above the box.
    assert_eq!(r.intersect_circle(&circle(5.0, 10.25, 1.0)), Vec2::new(0.0, 0.75));
    // Diagonal from the top-right corner: push along the corner diagonal.
    let c = circle(11.0, 11.0, 2.0);
    let got = r.intersect_circle(&c);
    let dist = core::f64::consts::SQRT_2;
    let expected = Vec2::new(1.0, 1.0).unit().scaled(2.0 - dist);
    assert!((got.x - expected.x).abs() < 1e-12 && (got.y - expected.y).abs() < 1e-12);
    // Applying the vector leaves the circle exactly tangent to the corner.
    let moved = c.moved(got);
    let corner_dist = moved.center.to(&r.max).len();
    assert!((corner_dist - 2.0).abs() < 1e-12, "corner distance {corner_dist}");
}

#[test]
fn outside_corner_tangency_is_not_overlap() {
    let r = unit_box();
    let c = circle(13.0, 14.0, 5.0);
    assert_eq!(r.intersect_circle(&c), Vec2::ZERO);
}

#[test]
fn circle_view_is_negated_rect_view() {
    let r = unit_box();
    for c in [circle(0.0, 5.0, 1.0), circle(5.0, 5.0, 1.0), circle(-0.5, 5.0, 1.0)] {
        assert_eq!(c.intersect_rect(&r), -r.intersect_circle(&c));
    }
}

proptest! {
    #[test]
    fn circles_clear_of_the_box_never_separate(
        angle in -core::f64::consts::PI..core::f64::consts::PI,
        gap in 0.01f64..20.0,
        radius in 0.1f64..5.0,
    ) {
        // Place the circle so its edge stays at least `gap` away from the
        // box's bounding circle.
        let r = unit_box();
        let reach = r.center().to(&r.max).len();
        let center = r.center().add(&Vec2::from_angle(angle).scaled(reach + radius + gap));
        prop_assert_eq!(r.intersect_circle(&Circle::new(center, radius)), Vec2::ZERO);
    }

    #[test]
    fn separation_from_outside_clears_the_box(
        x in -3.0f64..-0.01,
        y in -3.0f64..13.0,
        radius in 0.5f64..4.0,
    ) {
        let r = unit_box();
        let c = Circle::new(Vec2::new(x, y), radius);
        let push = r.intersect_circle(&c);
        let moved = c.moved(push);
        let closest = Vec2::new(
            moved.center.x.clamp(r.min.x, r.max.x),
            moved.center.y.clamp(r.min.y, r.max.y),
        );
        let dist = closest.to(&moved.center).len();
        prop_assert!(dist >= radius - 1e-9, "dist {} radius {}", dist, radius);
    }
}
