use super::{ViewerNotice, ZoomPanViewer};
use egui::Pos2;

/// What a pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The dimmed area around the image, and nothing on top of it.
    Backdrop,
    Image,
    /// Buttons and other controls drawn over the overlay.
    Control,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Plus,
    Minus,
}

impl ViewerKey {
    pub fn from_egui(key: egui::Key) -> Option<Self> {
        match key {
            egui::Key::Escape => Some(ViewerKey::Escape),
            egui::Key::ArrowLeft => Some(ViewerKey::ArrowLeft),
            egui::Key::ArrowRight => Some(ViewerKey::ArrowRight),
            egui::Key::Plus | egui::Key::Equals => Some(ViewerKey::Plus),
            egui::Key::Minus => Some(ViewerKey::Minus),
            _ => None,
        }
    }
}

/// Discrete input events, applied one at a time in arrival order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerInput {
    Open(usize),
    Close,
    Previous,
    Next,
    ZoomIn,
    ZoomOut,
    /// Negative `delta_y` zooms in, positive zooms out.
    Wheel { delta_y: f32 },
    PointerDown { pos: Pos2, target: PointerTarget },
    PointerMove { pos: Pos2 },
    PointerUp,
    PointerLeave,
    Click { target: PointerTarget },
    Key(ViewerKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputOutcome {
    pub notice: Option<ViewerNotice>,
    /// The viewer owned this input; the host should skip its default handling
    /// (page scroll, global shortcuts).
    pub consumed: bool,
    pub changed: bool,
}

impl ZoomPanViewer {
    pub fn handle(&mut self, input: ViewerInput) -> InputOutcome {
        let before = self.state;
        let was_open = self.is_open();

        let notice = match input {
            ViewerInput::Open(index) => self.open(index),
            ViewerInput::Close => self.close(),
            ViewerInput::Previous => self.previous(),
            ViewerInput::Next => self.next(),
            ViewerInput::ZoomIn => {
                self.zoom_in();
                None
            }
            ViewerInput::ZoomOut => {
                self.zoom_out();
                None
            }
            ViewerInput::Wheel { delta_y } => {
                self.wheel(delta_y);
                None
            }
            ViewerInput::PointerDown { pos, target } => {
                if target == PointerTarget::Image {
                    self.begin_drag(pos);
                }
                None
            }
            ViewerInput::PointerMove { pos } => {
                self.drag_to(pos);
                None
            }
            ViewerInput::PointerUp | ViewerInput::PointerLeave => {
                self.end_drag();
                None
            }
            ViewerInput::Click { target } => match target {
                PointerTarget::Backdrop => self.close(),
                PointerTarget::Image | PointerTarget::Control => None,
            },
            ViewerInput::Key(key) => self.key(key),
        };

        if let Some(notice) = notice {
            tracing::debug!(?notice, "viewer notice");
        }

        InputOutcome {
            notice,
            consumed: was_open || self.is_open(),
            changed: self.state != before,
        }
    }

    fn wheel(&mut self, delta_y: f32) -> bool {
        if !delta_y.is_finite() {
            return false;
        }
        if delta_y < 0.0 {
            self.zoom_in()
        } else if delta_y > 0.0 {
            self.zoom_out()
        } else {
            false
        }
    }

    fn key(&mut self, key: ViewerKey) -> Option<ViewerNotice> {
        if !self.is_open() {
            return None;
        }
        match key {
            ViewerKey::Escape => self.close(),
            ViewerKey::ArrowLeft => self.previous(),
            ViewerKey::ArrowRight => self.next(),
            ViewerKey::Plus => {
                self.zoom_in();
                None
            }
            ViewerKey::Minus => {
                self.zoom_out();
                None
            }
        }
    }
}
