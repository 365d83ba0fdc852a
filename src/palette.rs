use egui::Color32;

/// Background the canvas is cleared to.
pub const BACKGROUND: Color32 = Color32::WHITE;

/// Fill for the toolbar strip and the tool buttons.
pub const CHROME: Color32 = Color32::from_rgb(200, 200, 200);

/// Button label text.
pub const LABEL: Color32 = Color32::WHITE;

/// The fixed brush palette.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum PaletteColor {
    #[default]
    Black,
    Green,
    Red,
    Blue,
}

impl PaletteColor {
    pub fn color32(self) -> Color32 {
        match self {
            PaletteColor::Black => Color32::BLACK,
            PaletteColor::Green => Color32::from_rgb(0, 255, 0),
            PaletteColor::Red => Color32::RED,
            PaletteColor::Blue => Color32::BLUE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Black => "Black",
            PaletteColor::Green => "Green",
            PaletteColor::Red => "Red",
            PaletteColor::Blue => "Blue",
        }
    }
}
