//! Pure construction of shape outlines from a gesture's two anchor
//! points. Nothing here touches the painter or any shared state, so
//! every construction is testable without a graphics context.

use egui::{Pos2, pos2};

use crate::tool::Tool;

/// Outline geometry produced by a shape tool, ready to be stroked.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    Circle { center: Pos2, radius: f32 },
    /// Closed polygon, vertices in drawing order.
    Polygon(Vec<Pos2>),
}

/// Builds the outline for `tool` from the gesture's press position
/// (`origin`) and release position (`end`).
///
/// Returns `None` for [`Tool::Brush`]: freehand strokes are emitted
/// segment by segment while the pointer moves and never pass through
/// here.
pub fn outline_for(tool: Tool, origin: Pos2, end: Pos2) -> Option<Outline> {
    match tool {
        Tool::Brush => None,
        Tool::Circle => Some(circle(origin, end)),
        Tool::Square => Some(square(origin, end)),
        Tool::RightTriangle => Some(right_triangle(origin, end)),
        Tool::EquilateralTriangle => Some(equilateral_triangle(origin, end)),
        Tool::Rhombus => Some(rhombus(origin, end)),
    }
}

/// Circle centered on the press position. The radius is the pointer
/// travel distance, rounded to the nearest whole pixel.
fn circle(origin: Pos2, end: Pos2) -> Outline {
    Outline::Circle {
        center: origin,
        radius: origin.distance(end).round(),
    }
}

/// Axis-aligned square anchored at the press position. The side is the
/// larger pointer delta on either axis, and the square always extends
/// toward +x/+y, whatever direction the pointer was dragged.
fn square(origin: Pos2, end: Pos2) -> Outline {
    let side = (end.x - origin.x).abs().max((end.y - origin.y).abs());
    Outline::Polygon(vec![
        origin,
        pos2(origin.x + side, origin.y),
        pos2(origin.x + side, origin.y + side),
        pos2(origin.x, origin.y + side),
    ])
}

/// Right triangle with the right angle at (origin.x, end.y), so the
/// legs stay axis-aligned however the pointer is dragged.
fn right_triangle(origin: Pos2, end: Pos2) -> Outline {
    Outline::Polygon(vec![origin, pos2(origin.x, end.y), pos2(end.x, end.y)])
}

/// Equilateral triangle on a horizontal baseline starting at the press
/// position. Only the horizontal pointer delta sets the side length;
/// the apex always points up.
fn equilateral_triangle(origin: Pos2, end: Pos2) -> Outline {
    let side = (end.x - origin.x).abs();
    let height = side * 3.0_f32.sqrt() / 2.0;
    Outline::Polygon(vec![
        origin,
        pos2(origin.x + side, origin.y),
        pos2(origin.x + side / 2.0, origin.y - height),
    ])
}

/// Rhombus inscribed in the drag rectangle, one vertex on the middle of
/// each edge. Half-deltas use floor division on whole pixels, so odd
/// negative drags bias the center half a pixel toward -x/-y.
fn rhombus(origin: Pos2, end: Pos2) -> Outline {
    let dx = ((end.x - origin.x) as i32).div_euclid(2) as f32;
    let dy = ((end.y - origin.y) as i32).div_euclid(2) as f32;
    let center = pos2(origin.x + dx, origin.y + dy);
    Outline::Polygon(vec![
        pos2(center.x, origin.y),
        pos2(end.x, center.y),
        pos2(center.x, end.y),
        pos2(origin.x, center.y),
    ])
}
