//! Zoom and pan arithmetic shared by the viewer and its renderer.

use egui::Vec2;

pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 3.0;
/// Zoom change per wheel tick, key press or button click.
pub const ZOOM_STEP: f32 = 0.1;

/// Pan limit at low zoom levels, in pixels per axis.
pub const BASE_PAN_LIMIT: f32 = 100.0;
/// Additional pan allowance per unit of zoom above 1.0.
pub const PAN_LIMIT_PER_ZOOM: f32 = 300.0;

/// Round to two decimal digits so repeated steps don't accumulate drift.
pub fn round_hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

pub fn clamp_zoom(zoom: f32) -> f32 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Apply `steps` zoom increments (negative zooms out). Returns `None` when
/// the arithmetic produces a non-finite value.
pub fn step_zoom(current: f32, steps: i32) -> Option<f32> {
    let next = round_hundredths(current + ZOOM_STEP * steps as f32);
    if !next.is_finite() {
        return None;
    }
    Some(clamp_zoom(next))
}

/// Whether the zoom sits at the base level where panning is meaningless.
pub fn is_base_zoom(zoom: f32) -> bool {
    zoom <= MIN_ZOOM
}

/// Maximum permitted pan magnitude per axis at `zoom`.
pub fn max_offset(zoom: f32) -> f32 {
    BASE_PAN_LIMIT.max(PAN_LIMIT_PER_ZOOM * (zoom - 1.0))
}

/// Clamp each axis of `offset` independently to `[-limit, limit]`.
pub fn clamp_pan(offset: Vec2, limit: f32) -> Vec2 {
    Vec2::new(offset.x.clamp(-limit, limit), offset.y.clamp(-limit, limit))
}

/// Human-readable zoom percentage, e.g. `140%`.
pub fn zoom_percent_label(zoom: f32) -> String {
    format!("{}%", (zoom * 100.0).round() as i32)
}
