use egui::PointerButton;

use crate::canvas::{Canvas, PaintOp};
use crate::geometry;
use crate::input::{self, InputEvent};
use crate::palette;
use crate::state::AppState;
use crate::toolbar::Toolbar;

pub const WINDOW_TITLE: &str = "Simple Paint";
pub const WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

/// The application: selection state, the fixed toolbar, and the
/// accumulated canvas, driven by one pointer event at a time.
#[derive(Debug, Default)]
pub struct PaintApp {
    state: AppState,
    toolbar: Toolbar,
    canvas: Canvas,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        log::info!("starting {WINDOW_TITLE}");
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Advances the interaction state by one pointer event.
    ///
    /// Presses go to the toolbar first, whatever the gesture is doing;
    /// a color or tool picked mid-gesture affects the commit at release
    /// because both are read back only then. Only the primary button
    /// arms and ends gestures.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Press { pos, button } => {
                if self.toolbar.dispatch(pos, &mut self.state) && self.state.take_clear_request() {
                    self.canvas.clear();
                }
                if button == PointerButton::Primary {
                    self.state.press(pos);
                }
            }
            InputEvent::Motion { pos } => {
                if let Some((from, to)) = self.state.advance_brush(pos) {
                    self.canvas
                        .commit(PaintOp::segment(from, to, self.state.color().color32()));
                }
            }
            InputEvent::Release { pos, button } => {
                if button != PointerButton::Primary {
                    return;
                }
                if let Some(origin) = self.state.end_gesture() {
                    if let Some(outline) = geometry::outline_for(self.state.tool(), origin, pos) {
                        log::debug!("committing {} outline", self.state.tool().name());
                        self.canvas
                            .commit(PaintOp::outline(outline, self.state.color().color32()));
                    }
                }
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// One loop iteration: drain this frame's pointer events, then
    /// repaint the canvas with the toolbar strip on top. The canvas is
    /// never wiped here; only the Clear button does that.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = ctx.input(|input| input::translate(&input.raw.events));
        for event in events {
            self.handle_event(event);
        }

        if self.state.take_clear_request() {
            self.canvas.clear();
        }
        if self.state.take_exit_request() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let painter = ui.painter();
                painter.rect_filled(ui.max_rect(), 0.0, palette::BACKGROUND);
                self.canvas.paint(painter);
                self.toolbar.paint(painter);
            });
    }
}
