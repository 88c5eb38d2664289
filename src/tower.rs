//! Schematic tower: marker placement around the mast, decorative crossbars
//! and height estimates for collections without metadata.

use crate::item::ImageItem;
use crate::layout::LayoutEntry;

pub const DEFAULT_TOWER_SPAN_M: f32 = 60.0;
pub const DEFAULT_CROSSBAR_COUNT: usize = 10;
pub const MAX_CROSSBAR_COUNT: usize = 100;
pub const CROSSBAR_TILT_DEGREES: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSide {
    Left,
    Right,
}

impl MarkerSide {
    /// Markers zig-zag: even indices sit right of the mast, odd ones left.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            MarkerSide::Right
        } else {
            MarkerSide::Left
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TowerMarker {
    pub index: usize,
    pub top_percent: f32,
    pub side: MarkerSide,
    pub height_label: String,
    /// The height was filled in rather than read from the item.
    pub estimated: bool,
}

impl TowerMarker {
    pub fn height_caption(&self) -> String {
        if self.estimated {
            format!("Estimated height: {}", self.height_label)
        } else {
            format!("Height: {}", self.height_label)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossbar {
    pub top_percent: f32,
    pub tilt_degrees: f32,
}

/// Heights estimated from position across `span_m`, top item highest.
pub fn estimated_heights(count: usize, span_m: f32) -> Vec<u32> {
    let total = count.saturating_sub(1).max(1) as f32;
    (0..count)
        .map(|i| ((1.0 - i as f32 / total) * span_m).round().max(0.0) as u32)
        .collect()
}

/// Fill only the missing heights with positional estimates, so a collection
/// without metadata is laid out first-at-top.
pub fn with_estimated_heights(items: &[ImageItem], span_m: f32) -> Vec<ImageItem> {
    let estimates = estimated_heights(items.len(), span_m);
    items
        .iter()
        .zip(estimates)
        .map(|(item, estimate)| {
            let mut item = item.clone();
            if item.known_height().is_none() {
                item.height = Some(estimate as f32);
            }
            item
        })
        .collect()
}

pub fn height_label(height: Option<f32>) -> String {
    match height {
        Some(h) if h.is_finite() => format!("{} m", h.round() as i64),
        _ => "—".to_string(),
    }
}

/// Markers for a layout built from `source`. A marker is `estimated` when its
/// height exists in the layout but not on the source item.
pub fn place_markers(layout: &[LayoutEntry], source: &[ImageItem]) -> Vec<TowerMarker> {
    layout
        .iter()
        .map(|entry| {
            let measured = source
                .get(entry.index)
                .and_then(ImageItem::known_height)
                .is_some();
            TowerMarker {
                index: entry.index,
                top_percent: entry.top_percent,
                side: MarkerSide::for_index(entry.index),
                height_label: height_label(entry.height),
                estimated: entry.height.is_some() && !measured,
            }
        })
        .collect()
}

/// Evenly spaced crossbars from the top, alternating tilt. At most
/// [`MAX_CROSSBAR_COUNT`] are produced.
pub fn crossbars(count: usize) -> Vec<Crossbar> {
    let count = count.min(MAX_CROSSBAR_COUNT);
    if count == 0 {
        return Vec::new();
    }
    let step = 100.0 / count as f32;
    (0..count)
        .map(|i| Crossbar {
            top_percent: i as f32 * step,
            tilt_degrees: if i % 2 == 0 {
                CROSSBAR_TILT_DEGREES
            } else {
                -CROSSBAR_TILT_DEGREES
            },
        })
        .collect()
}
