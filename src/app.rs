//! Host page state: the collection, its tower layout and the overlays on top.

mod events;
mod source;

use crate::gallery::GalleryOverlay;
use crate::item::ItemCollection;
use crate::layout::{self, LayoutEntry};
use crate::scroll_lock::PageScroll;
use crate::settings::Settings;
use crate::telemetry::Telemetry;
use crate::tower::{self, TowerMarker};
use crate::viewer::ZoomPanViewer;

pub const DEFAULT_TITLE: &str = "Antenna plan";

pub struct TowerApp {
    // Settings
    pub settings: Settings,

    // Collection and derived layout
    pub collection: ItemCollection,
    pub layout: Vec<LayoutEntry>,
    pub markers: Vec<TowerMarker>,

    // Overlays
    pub page_scroll: PageScroll,
    pub viewer: ZoomPanViewer,
    pub gallery: GalleryOverlay,

    pub status_message: Option<String>,
    telemetry: Telemetry,
}

impl TowerApp {
    pub fn new(settings: Settings, collection: ItemCollection, telemetry: Telemetry) -> Self {
        let page_scroll = PageScroll::new();
        let mut app = Self {
            settings,
            collection: ItemCollection::default(),
            layout: Vec::new(),
            markers: Vec::new(),
            viewer: ZoomPanViewer::new(0, page_scroll.clone()),
            gallery: GalleryOverlay::new(DEFAULT_TITLE, page_scroll.clone()),
            page_scroll,
            status_message: None,
            telemetry,
        };
        app.set_collection(collection);
        app
    }

    pub fn title(&self) -> &str {
        self.collection.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Swap in a new collection and recompute everything derived from it.
    pub fn set_collection(&mut self, collection: ItemCollection) {
        self.collection = collection;
        self.gallery.title = self.title().to_string();
        self.relayout();
        if let Some(notice) = self.viewer.replace_collection(self.collection.len()) {
            self.telemetry.record(&notice, None);
        }
        tracing::info!(count = self.collection.len(), title = self.title(), "collection loaded");
    }

    pub fn relayout(&mut self) {
        let items = self.collection.items();
        self.layout = if self.settings.estimate_missing_heights {
            layout::normalize(&tower::with_estimated_heights(items, self.settings.tower_span_m))
        } else {
            layout::normalize(items)
        };
        self.markers = tower::place_markers(&self.layout, items);
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn flush(&mut self) {
        self.settings.save();
        self.telemetry.flush();
    }
}
