use crate::palette::PaletteColor;
use crate::state::AppState;
use crate::tool::Tool;

/// Action bound to a toolbar button.
///
/// Buttons carry a plain value instead of a closure so actions can be
/// inspected and applied in tests without a live toolbar.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    SetColor(PaletteColor),
    SetTool(Tool),
    Clear,
    Exit,
}

impl Command {
    pub fn apply(self, state: &mut AppState) {
        match self {
            Command::SetColor(color) => state.set_color(color),
            Command::SetTool(tool) => state.set_tool(tool),
            Command::Clear => {
                log::info!("clearing canvas");
                state.request_clear();
            }
            Command::Exit => {
                log::info!("exit requested");
                state.request_exit();
            }
        }
    }
}
