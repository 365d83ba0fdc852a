use egui::{PointerButton, Pos2};

/// Pointer events the interaction loop consumes, in the order egui
/// reported them. Everything else (keys, scroll, window events) is
/// irrelevant here and filtered out during translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Press { pos: Pos2, button: PointerButton },
    Release { pos: Pos2, button: PointerButton },
    Motion { pos: Pos2 },
}

/// Translates the frame's raw egui events into [`InputEvent`]s,
/// preserving their order.
pub fn translate(raw: &[egui::Event]) -> Vec<InputEvent> {
    let mut events = Vec::new();
    for event in raw {
        match event {
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => {
                events.push(if *pressed {
                    InputEvent::Press {
                        pos: *pos,
                        button: *button,
                    }
                } else {
                    InputEvent::Release {
                        pos: *pos,
                        button: *button,
                    }
                });
            }
            egui::Event::PointerMoved(pos) => {
                events.push(InputEvent::Motion { pos: *pos });
            }
            _ => {}
        }
    }
    events
}
