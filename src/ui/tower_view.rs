use crate::app::TowerApp;
use crate::tower::{self, MarkerSide, TowerMarker};
use crate::viewer::ViewerInput;
use egui::{self, pos2, Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

const MIN_TOWER_HEIGHT: f32 = 420.0;
const TOWER_MARGIN: f32 = 24.0;
const MARKER_SIDE_OFFSET: f32 = 40.0;
const CROSSBAR_HALF_WIDTH: f32 = 32.0;

const MARKER_FILL: Color32 = Color32::from_rgb(37, 99, 235);
const MARKER_HOVER_FILL: Color32 = Color32::from_rgb(29, 78, 216);

impl TowerApp {
    pub(crate) fn render_tower(&mut self, ctx: &egui::Context) {
        let scroll_enabled = !self.page_scroll.is_locked();
        let mut clicked = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.settings.background_color.to_color()))
            .show(ctx, |ui| {
                if self.collection.is_empty() {
                    ui.centered_and_justified(|ui| {
                        ui.label("Open an image folder or a manifest to build the antenna plan");
                    });
                    return;
                }

                egui::ScrollArea::vertical()
                    .enable_scrolling(scroll_enabled)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let height = ui.available_height().max(MIN_TOWER_HEIGHT);
                        let (rect, _) = ui.allocate_exact_size(
                            Vec2::new(ui.available_width(), height),
                            Sense::hover(),
                        );
                        let mast = rect.shrink2(Vec2::new(0.0, TOWER_MARGIN));

                        self.paint_mast(ui.painter(), mast);
                        clicked = self.render_markers(ui, mast);
                    });
            });

        if let Some(index) = clicked {
            self.dispatch(ViewerInput::Open(index));
        }
    }

    fn paint_mast(&self, painter: &Painter, mast: Rect) {
        let x = mast.center().x;
        painter.line_segment(
            [pos2(x, mast.top()), pos2(x, mast.bottom())],
            Stroke::new(6.0, Color32::from_gray(120)),
        );

        for bar in tower::crossbars(self.settings.crossbar_count) {
            let center = pos2(x, percent_to_y(mast, bar.top_percent));
            let half = Vec2::angled(bar.tilt_degrees.to_radians()) * CROSSBAR_HALF_WIDTH;
            painter.line_segment(
                [center - half, center + half],
                Stroke::new(2.0, Color32::from_gray(190)),
            );
        }
    }

    /// Draw the markers; returns the index of a clicked one.
    fn render_markers(&self, ui: &mut egui::Ui, mast: Rect) -> Option<usize> {
        let mut clicked = None;
        let size = self.settings.marker_size;

        for marker in &self.markers {
            let center = marker_center(mast, marker);
            let rect = Rect::from_center_size(center, Vec2::splat(size));
            let response = ui.interact(rect, ui.id().with(("tower_marker", marker.index)), Sense::click());

            let fill = if response.hovered() {
                MARKER_HOVER_FILL
            } else {
                MARKER_FILL
            };
            ui.painter().circle_filled(center, size / 2.0, fill);
            paint_drone_icon(ui.painter(), center, size * 0.5);

            if self.settings.show_height_labels {
                let (anchor, align) = match marker.side {
                    MarkerSide::Right => (center + Vec2::new(size * 0.75, 0.0), Align2::LEFT_CENTER),
                    MarkerSide::Left => (center - Vec2::new(size * 0.75, 0.0), Align2::RIGHT_CENTER),
                };
                ui.painter().text(
                    anchor,
                    align,
                    &marker.height_label,
                    FontId::proportional(12.0),
                    ui.visuals().weak_text_color(),
                );
            }

            let response = match self.collection.get(marker.index) {
                Some(item) if self.settings.show_marker_tooltips => response.on_hover_ui(|ui| {
                    ui.add(
                        egui::Image::new(item.url.as_str())
                            .fit_to_exact_size(Vec2::new(192.0, 112.0))
                            .show_loading_spinner(true),
                    );
                    ui.label(item.caption(marker.index));
                    ui.label(marker.height_caption());
                }),
                _ => response,
            };

            if response.clicked() {
                clicked = Some(marker.index);
            }
        }

        clicked
    }
}

fn percent_to_y(mast: Rect, percent: f32) -> f32 {
    mast.top() + mast.height() * percent / 100.0
}

fn marker_center(mast: Rect, marker: &TowerMarker) -> Pos2 {
    let dx = match marker.side {
        MarkerSide::Right => MARKER_SIDE_OFFSET,
        MarkerSide::Left => -MARKER_SIDE_OFFSET,
    };
    pos2(mast.center().x + dx, percent_to_y(mast, marker.top_percent))
}

/// Quadcopter glyph: hub, cross frame and four rotors.
fn paint_drone_icon(painter: &Painter, center: Pos2, size: f32) {
    let stroke = Stroke::new(1.5, Color32::WHITE);
    let arm = size * 0.35;
    painter.circle_filled(center, size * 0.08, Color32::WHITE);
    painter.line_segment([center - Vec2::X * arm, center + Vec2::X * arm], stroke);
    painter.line_segment([center - Vec2::Y * arm, center + Vec2::Y * arm], stroke);
    for (dx, dy) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
        let rotor = center + Vec2::new(dx, dy) * size * 0.4;
        painter.circle_stroke(rotor, size * 0.14, stroke);
    }
}
