use egui::Pos2;

use crate::palette::PaletteColor;
use crate::tool::Tool;

/// An in-progress pointer interaction.
///
/// `last` tracks the previous pointer position for freehand drawing and
/// is only seeded when the gesture starts with the brush selected.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub enum Gesture {
    #[default]
    Idle,
    Active { origin: Pos2, last: Option<Pos2> },
}

impl Gesture {
    pub fn is_active(self) -> bool {
        matches!(self, Gesture::Active { .. })
    }
}

/// Everything the interaction loop mutates: the current selection and
/// the gesture in flight, plus requests the frame loop drains.
///
/// Toolbar commands are the only writers of the tool and color fields.
#[derive(Debug, Default)]
pub struct AppState {
    tool: Tool,
    color: PaletteColor,
    gesture: Gesture,
    clear_requested: bool,
    exit_requested: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn set_tool(&mut self, tool: Tool) {
        log::info!("tool selected: {}", tool.name());
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: PaletteColor) {
        log::info!("color selected: {}", color.name());
        self.color = color;
    }

    pub fn request_clear(&mut self) {
        self.clear_requested = true;
    }

    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn take_clear_request(&mut self) -> bool {
        std::mem::take(&mut self.clear_requested)
    }

    pub fn take_exit_request(&mut self) -> bool {
        std::mem::take(&mut self.exit_requested)
    }

    /// Starts a gesture at `pos`. The brush needs the previous pointer
    /// position to chain segments, so `last` is seeded only for it.
    pub fn press(&mut self, pos: Pos2) {
        let last = (self.tool == Tool::Brush).then_some(pos);
        self.gesture = Gesture::Active { origin: pos, last };
    }

    /// Advances a freehand stroke to `pos`. Returns the segment to draw,
    /// or `None` when no gesture is active, the brush is not selected,
    /// or the brush has no previous position yet (it then only seeds
    /// `last`, starting the chain on the next motion).
    pub fn advance_brush(&mut self, pos: Pos2) -> Option<(Pos2, Pos2)> {
        if self.tool != Tool::Brush {
            return None;
        }
        let Gesture::Active { last, .. } = &mut self.gesture else {
            return None;
        };
        let segment = last.map(|from| (from, pos));
        *last = Some(pos);
        segment
    }

    /// Ends the gesture, returning its origin if one was active.
    pub fn end_gesture(&mut self) -> Option<Pos2> {
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => None,
            Gesture::Active { origin, .. } => Some(origin),
        }
    }
}
