use easel::geometry::{Outline, outline_for};
use easel::tool::Tool;
use egui::pos2;

fn polygon(outline: Outline) -> Vec<egui::Pos2> {
    match outline {
        Outline::Polygon(points) => points,
        other => panic!("expected polygon, got {other:?}"),
    }
}

#[test]
fn circle_radius_is_rounded_pointer_distance() {
    let outline = outline_for(Tool::Circle, pos2(0.0, 0.0), pos2(3.0, 4.0)).unwrap();
    assert_eq!(
        outline,
        Outline::Circle {
            center: pos2(0.0, 0.0),
            radius: 5.0,
        }
    );

    let outline = outline_for(Tool::Circle, pos2(0.0, 0.0), pos2(0.0, 0.0)).unwrap();
    assert_eq!(
        outline,
        Outline::Circle {
            center: pos2(0.0, 0.0),
            radius: 0.0,
        }
    );
}

#[test]
fn square_is_equal_sided_and_anchored_at_origin() {
    for (end, side) in [
        (pos2(40.0, 20.0), 30.0),
        (pos2(15.0, 60.0), 50.0),
        (pos2(-30.0, 20.0), 40.0),
    ] {
        let points = polygon(outline_for(Tool::Square, pos2(10.0, 10.0), end).unwrap());
        assert_eq!(
            points,
            vec![
                pos2(10.0, 10.0),
                pos2(10.0 + side, 10.0),
                pos2(10.0 + side, 10.0 + side),
                pos2(10.0, 10.0 + side),
            ],
            "end {end:?}"
        );
    }
}

#[test]
fn rhombus_vertices_for_a_ten_by_ten_drag() {
    let points = polygon(outline_for(Tool::Rhombus, pos2(0.0, 0.0), pos2(10.0, 10.0)).unwrap());
    assert_eq!(
        points,
        vec![
            pos2(5.0, 0.0),
            pos2(10.0, 5.0),
            pos2(5.0, 10.0),
            pos2(0.0, 5.0),
        ]
    );
}

#[test]
fn equilateral_triangle_rises_from_the_baseline() {
    let points = polygon(
        outline_for(Tool::EquilateralTriangle, pos2(0.0, 0.0), pos2(10.0, 0.0)).unwrap(),
    );
    assert_eq!(points.len(), 3);
    assert_eq!(points[0], pos2(0.0, 0.0));
    assert_eq!(points[1], pos2(10.0, 0.0));
    assert_eq!(points[2].x, 5.0);
    assert!((points[2].y - (-8.660254)).abs() < 1e-3);
}

#[test]
fn zero_length_gestures_never_panic() {
    let p = pos2(400.0, 300.0);
    for tool in [
        Tool::Circle,
        Tool::Square,
        Tool::RightTriangle,
        Tool::EquilateralTriangle,
        Tool::Rhombus,
    ] {
        assert!(outline_for(tool, p, p).is_some(), "{tool:?}");
    }
    assert!(outline_for(Tool::Brush, p, p).is_none());
}
