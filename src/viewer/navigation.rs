use super::{OpenView, ViewerNotice, ViewerState, ZoomPanViewer};

impl ZoomPanViewer {
    pub fn can_go_previous(&self) -> bool {
        self.open_index().is_some_and(|i| i > 0)
    }

    pub fn can_go_next(&self) -> bool {
        self.open_index().is_some_and(|i| i + 1 < self.item_count)
    }

    // Navigation clamps at the ends instead of wrapping.
    pub fn previous(&mut self) -> Option<ViewerNotice> {
        if !self.can_go_previous() {
            return None;
        }
        let index = self.open_index()? - 1;
        Some(self.navigate_to(index))
    }

    pub fn next(&mut self) -> Option<ViewerNotice> {
        if !self.can_go_next() {
            return None;
        }
        let index = self.open_index()? + 1;
        Some(self.navigate_to(index))
    }

    fn navigate_to(&mut self, index: usize) -> ViewerNotice {
        self.state = ViewerState::Open(OpenView::new(index));
        ViewerNotice::Navigated(index)
    }
}
