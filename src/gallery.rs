//! Grid overlay listing every image of a collection.

use crate::item::ImageItem;
use crate::scroll_lock::{PageScroll, ScrollLockGuard};
use crate::tower::height_label;

#[derive(Debug)]
pub struct GalleryOverlay {
    pub title: String,
    page: PageScroll,
    guard: Option<ScrollLockGuard>,
}

impl GalleryOverlay {
    pub fn new(title: impl Into<String>, page: PageScroll) -> Self {
        Self {
            title: title.into(),
            page,
            guard: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.guard.is_some()
    }

    pub fn open(&mut self) {
        if self.guard.is_none() {
            self.guard = Some(self.page.acquire());
        }
    }

    /// Returns true if the overlay was open.
    pub fn close(&mut self) -> bool {
        self.guard.take().is_some()
    }

    /// Escape closes the gallery; other keys are left to the page.
    pub fn handle_key(&mut self, key: egui::Key) -> bool {
        key == egui::Key::Escape && self.close()
    }
}

pub fn count_label(count: usize) -> String {
    match count {
        1 => "1 image".to_string(),
        n => format!("{n} images"),
    }
}

/// Secondary lines under each thumbnail.
pub fn meta_lines(item: &ImageItem) -> Vec<String> {
    match item.known_height() {
        Some(h) => vec![format!("Height: {}", height_label(Some(h)))],
        None => Vec::new(),
    }
}
