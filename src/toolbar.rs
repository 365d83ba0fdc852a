use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, pos2, vec2};

use crate::command::Command;
use crate::palette::{self, PaletteColor};
use crate::state::AppState;
use crate::tool::Tool;

/// Height of the gray strip the buttons sit on.
pub const STRIP_HEIGHT: f32 = 90.0;

const LABEL_FONT_SIZE: f32 = 16.0;
const LABEL_INSET: f32 = 5.0;

/// One clickable region on the strip. Buttons never change after
/// startup; pressing one applies its command to the shared state.
#[derive(Debug, Clone)]
pub struct ToolbarButton {
    pub rect: Rect,
    pub label: &'static str,
    pub fill: Color32,
    pub command: Command,
}

impl ToolbarButton {
    fn new(x: f32, y: f32, w: f32, h: f32, label: &'static str, fill: Color32, command: Command) -> Self {
        Self {
            rect: Rect::from_min_size(pos2(x, y), vec2(w, h)),
            label,
            fill,
            command,
        }
    }
}

/// The fixed control strip along the top of the window.
#[derive(Debug)]
pub struct Toolbar {
    buttons: Vec<ToolbarButton>,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolbar {
    /// Builds the twelve buttons: the color swatches, Clear and Exit on
    /// the first row, the tool selectors filling the rest.
    pub fn new() -> Self {
        let color_button = |x, color: PaletteColor| {
            ToolbarButton::new(
                x,
                10.0,
                60.0,
                30.0,
                color.name(),
                color.color32(),
                Command::SetColor(color),
            )
        };
        let tool_button = |x, y, tool: Tool| {
            ToolbarButton::new(x, y, 80.0, 30.0, tool.name(), palette::CHROME, Command::SetTool(tool))
        };

        let buttons = vec![
            color_button(10.0, PaletteColor::Black),
            color_button(80.0, PaletteColor::Green),
            color_button(150.0, PaletteColor::Red),
            color_button(220.0, PaletteColor::Blue),
            ToolbarButton::new(290.0, 10.0, 60.0, 30.0, "Clear", palette::CHROME, Command::Clear),
            ToolbarButton::new(360.0, 10.0, 60.0, 30.0, "Exit", palette::CHROME, Command::Exit),
            tool_button(430.0, 10.0, Tool::Brush),
            tool_button(520.0, 10.0, Tool::Circle),
            tool_button(610.0, 10.0, Tool::Square),
            tool_button(700.0, 10.0, Tool::RightTriangle),
            tool_button(10.0, 50.0, Tool::EquilateralTriangle),
            tool_button(100.0, 50.0, Tool::Rhombus),
        ];
        Self { buttons }
    }

    pub fn buttons(&self) -> &[ToolbarButton] {
        &self.buttons
    }

    /// Returns the button containing `pos`, if any. Regions do not
    /// overlap, so the first hit is the only hit.
    pub fn hit_test(&self, pos: Pos2) -> Option<&ToolbarButton> {
        self.buttons.iter().find(|button| button.rect.contains(pos))
    }

    /// Applies the command of the button under `pos`, if there is one.
    pub fn dispatch(&self, pos: Pos2, state: &mut AppState) -> bool {
        match self.hit_test(pos) {
            Some(button) => {
                button.command.apply(state);
                true
            }
            None => false,
        }
    }

    /// Paints the strip and every button over whatever is on the canvas.
    /// Runs every frame; nothing here depends on state changes.
    pub fn paint(&self, painter: &Painter) {
        let clip = painter.clip_rect();
        let strip = Rect::from_min_size(clip.min, vec2(clip.width(), STRIP_HEIGHT));
        painter.rect_filled(strip, 0.0, palette::CHROME);

        for button in &self.buttons {
            painter.rect_filled(button.rect, 0.0, button.fill);
            painter.text(
                button.rect.min + vec2(LABEL_INSET, LABEL_INSET),
                Align2::LEFT_TOP,
                button.label,
                FontId::proportional(LABEL_FONT_SIZE),
                palette::LABEL,
            );
        }
    }
}
