//! Height-based vertical placement of items along the tower.
//!
//! `top_percent` runs from 0 (top, highest) to 100 (bottom, lowest). Missing or
//! degenerate height data never drops entries: the normalizer falls back to
//! even spacing or synthesizes heights from the item's position.

use crate::item::ImageItem;

/// One placed item. Produced fresh by [`normalize`], never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEntry {
    pub index: usize,
    pub item: ImageItem,
    /// Height used for placement: the source height, a synthesized one, or
    /// `None` when the collection carries no usable range.
    pub height: Option<f32>,
    pub top_percent: f32,
}

/// Even-spacing position for index `i` of `count` items.
pub fn even_spacing_percent(i: usize, count: usize) -> f32 {
    if count > 1 {
        (1.0 - i as f32 / (count - 1) as f32) * 100.0
    } else {
        50.0
    }
}

/// Height range over the items that carry a finite height.
pub fn height_range(items: &[ImageItem]) -> Option<(f32, f32)> {
    items
        .iter()
        .filter_map(ImageItem::known_height)
        .fold(None, |range, h| match range {
            None => Some((h, h)),
            Some((min, max)) => Some((min.min(h), max.max(h))),
        })
}

/// Place every item, preserving input order and length.
pub fn normalize(items: &[ImageItem]) -> Vec<LayoutEntry> {
    let count = items.len();

    let Some((min_h, max_h)) = height_range(items) else {
        return even_spacing(items, |_| None);
    };

    let span = max_h - min_h;
    if !span.is_finite() || span == 0.0 {
        return even_spacing(items, ImageItem::known_height);
    }

    let denominator = count.saturating_sub(1).max(1) as f32;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let height = item
                .known_height()
                .unwrap_or_else(|| min_h + span * (i as f32 / denominator));
            let norm = (height - min_h) / span;
            LayoutEntry {
                index: i,
                item: item.clone(),
                height: Some(height),
                top_percent: ((1.0 - norm) * 100.0).clamp(0.0, 100.0),
            }
        })
        .collect()
}

fn even_spacing(items: &[ImageItem], height_of: impl Fn(&ImageItem) -> Option<f32>) -> Vec<LayoutEntry> {
    let count = items.len();
    items
        .iter()
        .enumerate()
        .map(|(i, item)| LayoutEntry {
            index: i,
            item: item.clone(),
            height: height_of(item),
            top_percent: even_spacing_percent(i, count),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(heights: &[Option<f32>]) -> Vec<ImageItem> {
        heights
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let item = ImageItem::new(format!("img-{i}"), format!("file:///{i}.jpg"));
                match h {
                    Some(h) => item.with_height(*h),
                    None => item,
                }
            })
            .collect()
    }

    fn tops(entries: &[LayoutEntry]) -> Vec<f32> {
        entries.iter().map(|e| e.top_percent).collect()
    }

    #[test]
    fn test_empty_collection() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn test_single_item_centered() {
        assert_eq!(tops(&normalize(&items(&[None]))), vec![50.0]);

        let entries = normalize(&items(&[Some(42.0)]));
        assert_eq!(entries[0].top_percent, 50.0);
        assert_eq!(entries[0].height, Some(42.0));
    }

    #[test]
    fn test_no_heights_even_spacing() {
        for count in 2..12 {
            let entries = normalize(&items(&vec![None; count]));
            let t = tops(&entries);
            assert_eq!(t.len(), count);
            assert_eq!(t[0], 100.0);
            assert_eq!(t[count - 1], 0.0);
            assert!(t.windows(2).all(|w| w[0] >= w[1]));
            assert!(entries.iter().all(|e| e.height.is_none()));
        }
    }

    #[test]
    fn test_uniform_heights_match_fallback() {
        let uniform = normalize(&items(&[Some(30.0); 5]));
        let bare = normalize(&items(&[None; 5]));
        assert_eq!(tops(&uniform), tops(&bare));
        assert!(uniform.iter().all(|e| e.height == Some(30.0)));
    }

    #[test]
    fn test_degenerate_keeps_missing_heights_absent() {
        let entries = normalize(&items(&[Some(20.0), None, Some(20.0)]));
        assert_eq!(tops(&entries), vec![100.0, 50.0, 0.0]);
        assert_eq!(entries[0].height, Some(20.0));
        assert_eq!(entries[1].height, None);
    }

    #[test]
    fn test_extremes_pinned() {
        let entries = normalize(&items(&[Some(18.0), Some(58.0), Some(36.0), Some(41.0)]));
        assert_eq!(entries[1].top_percent, 0.0);
        assert_eq!(entries[0].top_percent, 100.0);
        assert!(entries.iter().all(|e| (0.0..=100.0).contains(&e.top_percent)));
    }

    #[test]
    fn test_missing_height_interpolated_by_position() {
        // min 10, max 50 -> index 2 of 5 synthesizes 10 + 40 * 0.5 = 30
        let entries = normalize(&items(&[Some(50.0), Some(40.0), None, Some(20.0), Some(10.0)]));
        assert_eq!(entries[2].height, Some(30.0));
        assert_eq!(entries[2].top_percent, 50.0);
    }

    #[test]
    fn test_non_finite_height_treated_as_missing() {
        let entries = normalize(&items(&[Some(f32::NAN), Some(f32::INFINITY)]));
        assert_eq!(tops(&entries), vec![100.0, 0.0]);
        assert!(entries.iter().all(|e| e.height.is_none()));
    }

    #[test]
    fn test_order_preserved() {
        let input = items(&[Some(5.0), None, Some(15.0)]);
        let entries = normalize(&input);
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.index, i);
            assert_eq!(entry.item, input[i]);
        }
    }
}
