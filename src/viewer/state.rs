use crate::geometry::MIN_ZOOM;
use egui::{Pos2, Vec2};

/// Captured at pointer-down; pan during the drag is computed from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub pointer_start: Pos2,
    pub offset_at_start: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenView {
    pub index: usize,
    pub zoom: f32,
    /// Pixel offset of the image in the viewport; zero whenever zoom is 1.0.
    pub pan: Vec2,
    pub drag: Option<DragAnchor>,
}

impl OpenView {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            zoom: MIN_ZOOM,
            pan: Vec2::ZERO,
            drag: None,
        }
    }

    pub fn cursor(&self) -> CursorStyle {
        if self.zoom <= MIN_ZOOM {
            CursorStyle::Default
        } else if self.drag.is_some() {
            CursorStyle::Grabbing
        } else {
            CursorStyle::Grab
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ViewerState {
    #[default]
    Closed,
    Open(OpenView),
}

/// Notifications for the embedding page (telemetry, analytics).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerNotice {
    Opened(usize),
    Closed,
    Navigated(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    Default,
    Grab,
    Grabbing,
}

impl CursorStyle {
    pub fn to_egui(self) -> egui::CursorIcon {
        match self {
            CursorStyle::Default => egui::CursorIcon::Default,
            CursorStyle::Grab => egui::CursorIcon::Grab,
            CursorStyle::Grabbing => egui::CursorIcon::Grabbing,
        }
    }
}
