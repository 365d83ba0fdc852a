use egui::{Color32, Painter, Pos2, Shape, Stroke};

use crate::geometry::Outline;

/// Freehand segments are drawn at this width.
pub const BRUSH_WIDTH: f32 = 4.0;
/// Shape outlines are stroked at this width.
pub const SHAPE_WIDTH: f32 = 2.0;

/// A single committed drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Segment {
        from: Pos2,
        to: Pos2,
        color: Color32,
        width: f32,
    },
    Outline {
        outline: Outline,
        color: Color32,
        width: f32,
    },
}

impl PaintOp {
    pub fn segment(from: Pos2, to: Pos2, color: Color32) -> Self {
        PaintOp::Segment {
            from,
            to,
            color,
            width: BRUSH_WIDTH,
        }
    }

    pub fn outline(outline: Outline, color: Color32) -> Self {
        PaintOp::Outline {
            outline,
            color,
            width: SHAPE_WIDTH,
        }
    }
}

/// The accumulated drawing.
///
/// Operations are append-only and anonymous: once committed they can
/// only be replayed or wiped wholesale, never addressed individually.
/// The drawing exists nowhere else and dies with the window.
#[derive(Debug, Default)]
pub struct Canvas {
    ops: Vec<PaintOp>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commit(&mut self, op: PaintOp) {
        self.ops.push(op);
    }

    /// Discards everything drawn so far. There is no way back.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Replays every committed operation onto `painter`, oldest first.
    pub fn paint(&self, painter: &Painter) {
        for op in &self.ops {
            match op {
                PaintOp::Segment {
                    from,
                    to,
                    color,
                    width,
                } => {
                    painter.line_segment([*from, *to], Stroke::new(*width, *color));
                }
                PaintOp::Outline {
                    outline,
                    color,
                    width,
                } => match outline {
                    Outline::Circle { center, radius } => {
                        painter.circle_stroke(*center, *radius, Stroke::new(*width, *color));
                    }
                    Outline::Polygon(points) => {
                        painter.add(Shape::closed_line(
                            points.clone(),
                            Stroke::new(*width, *color),
                        ));
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn commits_accumulate_in_order() {
        let mut canvas = Canvas::new();
        canvas.commit(PaintOp::segment(pos2(0.0, 0.0), pos2(1.0, 1.0), Color32::BLACK));
        canvas.commit(PaintOp::outline(
            Outline::Circle {
                center: pos2(5.0, 5.0),
                radius: 3.0,
            },
            Color32::RED,
        ));
        assert_eq!(canvas.ops().len(), 2);
        assert!(matches!(canvas.ops()[0], PaintOp::Segment { width, .. } if width == BRUSH_WIDTH));
        assert!(matches!(canvas.ops()[1], PaintOp::Outline { width, .. } if width == SHAPE_WIDTH));
    }

    #[test]
    fn clear_discards_all_ops() {
        let mut canvas = Canvas::new();
        canvas.commit(PaintOp::segment(pos2(0.0, 0.0), pos2(1.0, 1.0), Color32::BLACK));
        canvas.clear();
        assert!(canvas.ops().is_empty());
    }
}
