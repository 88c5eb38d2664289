use super::ZoomPanViewer;
use crate::geometry::{self, MAX_ZOOM};
use egui::{Pos2, Vec2};

impl ZoomPanViewer {
    // Zoom
    pub fn zoom_in(&mut self) -> bool {
        self.zoom_by(1)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.zoom_by(-1)
    }

    pub fn can_zoom_in(&self) -> bool {
        self.open_view().is_some_and(|view| view.zoom < MAX_ZOOM)
    }

    pub fn can_zoom_out(&self) -> bool {
        self.open_view()
            .is_some_and(|view| !geometry::is_base_zoom(view.zoom))
    }

    fn zoom_by(&mut self, steps: i32) -> bool {
        let Some(view) = self.open_view_mut() else {
            return false;
        };
        let Some(zoom) = geometry::step_zoom(view.zoom, steps) else {
            tracing::trace!(zoom = view.zoom, "non-finite zoom step skipped");
            return false;
        };

        let before = *view;
        view.zoom = zoom;
        if geometry::is_base_zoom(zoom) {
            view.pan = Vec2::ZERO;
            view.drag = None;
        } else {
            // Zooming out shrinks the pan bounds; keep the offset inside them.
            view.pan = geometry::clamp_pan(view.pan, geometry::max_offset(zoom));
        }
        *view != before
    }

    // Pan
    pub fn begin_drag(&mut self, pointer: Pos2) -> bool {
        let Some(view) = self.open_view_mut() else {
            return false;
        };
        if geometry::is_base_zoom(view.zoom) || !pointer.is_finite() {
            return false;
        }
        view.drag = Some(super::DragAnchor {
            pointer_start: pointer,
            offset_at_start: view.pan,
        });
        true
    }

    pub fn drag_to(&mut self, pointer: Pos2) -> bool {
        let Some(view) = self.open_view_mut() else {
            return false;
        };
        let Some(anchor) = view.drag else {
            return false;
        };
        if geometry::is_base_zoom(view.zoom) {
            return false;
        }

        let candidate = anchor.offset_at_start + (pointer - anchor.pointer_start);
        if !candidate.is_finite() {
            tracing::trace!("non-finite pan skipped");
            return false;
        }

        let pan = geometry::clamp_pan(candidate, geometry::max_offset(view.zoom));
        let changed = pan != view.pan;
        view.pan = pan;
        changed
    }

    /// End the drag gesture, keeping the last pan offset.
    pub fn end_drag(&mut self) -> bool {
        self.open_view_mut()
            .is_some_and(|view| view.drag.take().is_some())
    }
}
