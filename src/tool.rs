/// The active drawing mode. Brush paints freehand segments while the
/// pointer moves; every other tool commits a single outline when the
/// gesture ends.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Tool {
    #[default]
    Brush,
    Circle,
    Square,
    RightTriangle,
    EquilateralTriangle,
    Rhombus,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Circle => "Circle",
            Tool::Square => "Square",
            Tool::RightTriangle => "R-Tri",
            Tool::EquilateralTriangle => "E-Tri",
            Tool::Rhombus => "Rhombus",
        }
    }
}
