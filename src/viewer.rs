//! Zoom-pan lightbox as an explicit state machine.
//!
//! The viewer is either `Closed` or `Open` on one index of the collection.
//! Opening and navigating always start at zoom 1.0 with no pan; zoom moves in
//! fixed steps inside `[1.0, 3.0]`; pan only exists above zoom 1.0 and stays
//! within `max_offset(zoom)` on both axes. The page scroll lock is held for as
//! long as the viewer is open.

mod input;
mod navigation;
mod state;
mod zoom;

pub use input::{InputOutcome, PointerTarget, ViewerInput, ViewerKey};
pub use state::{CursorStyle, DragAnchor, OpenView, ViewerNotice, ViewerState};

use crate::geometry::{self, MIN_ZOOM};
use crate::scroll_lock::{PageScroll, ScrollLockGuard};
use egui::Vec2;

#[derive(Debug)]
pub struct ZoomPanViewer {
    state: ViewerState,
    item_count: usize,
    page: PageScroll,
    scroll_guard: Option<ScrollLockGuard>,
}

impl ZoomPanViewer {
    pub fn new(item_count: usize, page: PageScroll) -> Self {
        Self {
            state: ViewerState::Closed,
            item_count,
            page,
            scroll_guard: None,
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open(_))
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open_view().map(|view| view.index)
    }

    pub fn zoom(&self) -> f32 {
        self.open_view().map_or(MIN_ZOOM, |view| view.zoom)
    }

    pub fn pan(&self) -> Vec2 {
        self.open_view().map_or(Vec2::ZERO, |view| view.pan)
    }

    pub fn is_dragging(&self) -> bool {
        self.open_view().is_some_and(|view| view.drag.is_some())
    }

    pub fn cursor(&self) -> CursorStyle {
        self.open_view()
            .map_or(CursorStyle::Default, OpenView::cursor)
    }

    /// `(translation, scale)` to apply to the image around its center.
    pub fn image_transform(&self) -> Option<(Vec2, f32)> {
        self.open_view().map(|view| (view.pan, view.zoom))
    }

    pub fn zoom_label(&self) -> Option<String> {
        self.open_view()
            .map(|view| geometry::zoom_percent_label(view.zoom))
    }

    /// Open on `index`. Out-of-range requests leave the state untouched.
    pub fn open(&mut self, index: usize) -> Option<ViewerNotice> {
        if index >= self.item_count {
            tracing::trace!(index, count = self.item_count, "open request rejected");
            return None;
        }
        self.state = ViewerState::Open(OpenView::new(index));
        if self.scroll_guard.is_none() {
            self.scroll_guard = Some(self.page.acquire());
        }
        Some(ViewerNotice::Opened(index))
    }

    pub fn close(&mut self) -> Option<ViewerNotice> {
        if !self.is_open() {
            return None;
        }
        self.state = ViewerState::Closed;
        self.scroll_guard = None;
        Some(ViewerNotice::Closed)
    }

    /// The embedding page swapped the collection. An open index that no
    /// longer exists closes the viewer; otherwise zoom and pan reset.
    pub fn replace_collection(&mut self, item_count: usize) -> Option<ViewerNotice> {
        self.item_count = item_count;
        match self.open_index() {
            Some(index) if index >= item_count => self.close(),
            Some(index) => {
                self.state = ViewerState::Open(OpenView::new(index));
                None
            }
            None => None,
        }
    }

    fn open_view(&self) -> Option<&OpenView> {
        match &self.state {
            ViewerState::Open(view) => Some(view),
            ViewerState::Closed => None,
        }
    }

    fn open_view_mut(&mut self) -> Option<&mut OpenView> {
        match &mut self.state {
            ViewerState::Open(view) => Some(view),
            ViewerState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{max_offset, MAX_ZOOM};
    use egui::pos2;

    fn viewer(count: usize) -> (ZoomPanViewer, PageScroll) {
        let page = PageScroll::new();
        (ZoomPanViewer::new(count, page.clone()), page)
    }

    fn zoomed(count: usize, index: usize, steps: usize) -> ZoomPanViewer {
        let (mut v, _) = viewer(count);
        v.open(index);
        for _ in 0..steps {
            v.zoom_in();
        }
        v
    }

    #[test]
    fn test_open_rejects_out_of_range() {
        let (mut v, page) = viewer(3);
        assert_eq!(v.handle(ViewerInput::Open(3)).notice, None);
        assert!(!v.is_open());
        assert!(!page.is_locked());

        v.open(1);
        assert_eq!(v.open(7), None);
        assert_eq!(v.open_index(), Some(1));
    }

    #[test]
    fn test_open_close_toggles_scroll_lock() {
        let (mut v, page) = viewer(3);
        assert_eq!(v.open(0), Some(ViewerNotice::Opened(0)));
        assert!(page.is_locked());
        v.open(2);
        assert_eq!(page.holders(), 1);

        assert_eq!(v.close(), Some(ViewerNotice::Closed));
        assert!(!page.is_locked());
        assert_eq!(v.close(), None);
    }

    #[test]
    fn test_viewer_drop_releases_lock() {
        let (mut v, page) = viewer(2);
        v.open(0);
        drop(v);
        assert!(!page.is_locked());
    }

    #[test]
    fn test_navigation_clamps_and_resets() {
        let mut v = zoomed(3, 1, 5);
        v.begin_drag(pos2(0.0, 0.0));
        v.drag_to(pos2(40.0, 40.0));

        assert_eq!(v.next(), Some(ViewerNotice::Navigated(2)));
        assert_eq!(v.zoom(), 1.0);
        assert_eq!(v.pan(), Vec2::ZERO);
        assert!(!v.is_dragging());

        assert!(!v.can_go_next());
        assert_eq!(v.next(), None);
        assert_eq!(v.open_index(), Some(2));

        v.previous();
        v.previous();
        assert!(!v.can_go_previous());
        assert_eq!(v.previous(), None);
        assert_eq!(v.open_index(), Some(0));
    }

    #[test]
    fn test_navigation_ignored_while_closed() {
        let (mut v, _) = viewer(3);
        assert_eq!(v.next(), None);
        assert_eq!(v.previous(), None);
        assert!(!v.is_open());
    }

    #[test]
    fn test_zoom_bounds() {
        let mut v = zoomed(1, 0, 50);
        assert_eq!(v.zoom(), MAX_ZOOM);
        assert!(!v.can_zoom_in());
        assert!(!v.zoom_in());

        for _ in 0..50 {
            v.zoom_out();
        }
        assert_eq!(v.zoom(), 1.0);
        assert!(!v.can_zoom_out());
    }

    #[test]
    fn test_zoom_ignored_while_closed() {
        let (mut v, _) = viewer(1);
        assert!(!v.zoom_in());
        assert_eq!(v.zoom(), 1.0);
    }

    #[test]
    fn test_pan_resets_at_base_zoom() {
        let mut v = zoomed(1, 0, 2);
        v.begin_drag(pos2(10.0, 10.0));
        v.drag_to(pos2(60.0, -20.0));
        assert_eq!(v.pan(), Vec2::new(50.0, -30.0));

        v.zoom_out();
        assert_ne!(v.pan(), Vec2::ZERO);
        v.zoom_out();
        assert_eq!(v.zoom(), 1.0);
        assert_eq!(v.pan(), Vec2::ZERO);
        assert!(!v.is_dragging());
    }

    #[test]
    fn test_drag_inert_at_base_zoom() {
        let (mut v, _) = viewer(1);
        v.open(0);
        assert!(!v.begin_drag(pos2(0.0, 0.0)));
        assert!(!v.drag_to(pos2(100.0, 100.0)));
        assert_eq!(v.pan(), Vec2::ZERO);
    }

    #[test]
    fn test_drag_clamped_to_max_offset() {
        let mut v = zoomed(1, 0, 10);
        assert_eq!(v.zoom(), 2.0);
        v.begin_drag(pos2(0.0, 0.0));
        v.drag_to(pos2(1000.0, -1000.0));
        assert_eq!(v.pan(), Vec2::new(300.0, -300.0));
    }

    #[test]
    fn test_zoom_out_keeps_pan_in_bounds() {
        let mut v = zoomed(1, 0, 20);
        v.begin_drag(pos2(0.0, 0.0));
        v.drag_to(pos2(600.0, 600.0));
        v.end_drag();
        assert_eq!(v.pan(), Vec2::new(600.0, 600.0));

        v.zoom_out();
        let limit = max_offset(v.zoom());
        assert!(v.pan().x <= limit && v.pan().y <= limit);
    }

    #[test]
    fn test_drag_continues_from_previous_pan() {
        let mut v = zoomed(1, 0, 10);
        v.begin_drag(pos2(0.0, 0.0));
        v.drag_to(pos2(50.0, 0.0));
        v.end_drag();

        v.begin_drag(pos2(200.0, 200.0));
        v.drag_to(pos2(220.0, 210.0));
        assert_eq!(v.pan(), Vec2::new(70.0, 10.0));
    }

    #[test]
    fn test_non_finite_pointer_skipped() {
        let mut v = zoomed(1, 0, 5);
        v.begin_drag(pos2(0.0, 0.0));
        v.drag_to(pos2(30.0, 30.0));
        assert!(!v.drag_to(pos2(f32::NAN, 0.0)));
        assert_eq!(v.pan(), Vec2::new(30.0, 30.0));

        v.end_drag();
        assert!(!v.begin_drag(pos2(f32::INFINITY, 0.0)));
    }

    #[test]
    fn test_cursor_styles() {
        let (mut v, _) = viewer(1);
        assert_eq!(v.cursor(), CursorStyle::Default);
        v.open(0);
        assert_eq!(v.cursor(), CursorStyle::Default);
        v.zoom_in();
        assert_eq!(v.cursor(), CursorStyle::Grab);
        v.begin_drag(pos2(0.0, 0.0));
        assert_eq!(v.cursor(), CursorStyle::Grabbing);
    }

    #[test]
    fn test_replace_collection() {
        let (mut v, page) = viewer(5);
        v.open(3);
        v.zoom_in();

        assert_eq!(v.replace_collection(4), None);
        assert_eq!(v.open_index(), Some(3));
        assert_eq!(v.zoom(), 1.0);

        assert_eq!(v.replace_collection(2), Some(ViewerNotice::Closed));
        assert!(!v.is_open());
        assert!(!page.is_locked());
    }

    #[test]
    fn test_zoom_label() {
        let (mut v, _) = viewer(1);
        assert_eq!(v.zoom_label(), None);
        v.open(0);
        v.zoom_in();
        assert_eq!(v.zoom_label().as_deref(), Some("110%"));
    }
}
