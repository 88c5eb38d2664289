use crate::app::TowerApp;
use crate::tower::height_label;
use crate::viewer::{PointerTarget, ViewerInput};
use egui::{self, Align2, Color32, CornerRadius, FontId, Id, Rect, RichText, Sense, Vec2};

const BACKDROP: Color32 = Color32::from_black_alpha(204);
const NAV_BUTTON_SIZE: Vec2 = Vec2::splat(44.0);
const CONTROL_SIZE: Vec2 = Vec2::splat(32.0);

impl TowerApp {
    pub(crate) fn render_viewer(&mut self, ctx: &egui::Context) {
        let Some(index) = self.viewer.open_index() else {
            return;
        };
        let Some(item) = self.collection.get(index).cloned() else {
            return;
        };
        let height = self
            .layout
            .get(index)
            .and_then(|entry| entry.height)
            .or(item.known_height());

        let screen = ctx.screen_rect();
        let viewport = Rect::from_center_size(
            screen.center(),
            Vec2::new(screen.width() * 0.9, screen.height() * 0.75),
        );
        let (pan, zoom) = self.viewer.image_transform().unwrap_or((Vec2::ZERO, 1.0));
        let zoom_label = self.viewer.zoom_label().unwrap_or_default();
        let can_previous = self.viewer.can_go_previous();
        let can_next = self.viewer.can_go_next();
        let can_zoom_in = self.viewer.can_zoom_in();
        let can_zoom_out = self.viewer.can_zoom_out();
        let dragging = self.viewer.is_dragging();

        let mut inputs: Vec<ViewerInput> = Vec::new();

        egui::Area::new(Id::new("viewer_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                // Backdrop first: anything allocated later sits on top of it,
                // so its click only fires on the bare backdrop.
                let backdrop = ui.interact(screen, Id::new("viewer_backdrop"), Sense::click());
                ui.painter().rect_filled(screen, CornerRadius::ZERO, BACKDROP);

                let image_response =
                    ui.interact(viewport, Id::new("viewer_image"), Sense::click_and_drag());

                let image_rect = Rect::from_center_size(viewport.center() + pan, viewport.size() * zoom);
                let mut canvas = ui.new_child(egui::UiBuilder::new().max_rect(viewport));
                canvas.set_clip_rect(viewport);
                canvas.put(
                    image_rect,
                    egui::Image::new(item.url.as_str())
                        .fit_to_exact_size(image_rect.size())
                        .show_loading_spinner(true),
                );

                // Navigation
                let left = Rect::from_center_size(
                    egui::pos2(screen.left() + 16.0 + NAV_BUTTON_SIZE.x / 2.0, screen.center().y),
                    NAV_BUTTON_SIZE,
                );
                let right = Rect::from_center_size(
                    egui::pos2(screen.right() - 16.0 - NAV_BUTTON_SIZE.x / 2.0, screen.center().y),
                    NAV_BUTTON_SIZE,
                );
                if control_button(ui, left, "◀", can_previous) {
                    inputs.push(ViewerInput::Previous);
                }
                if control_button(ui, right, "▶", can_next) {
                    inputs.push(ViewerInput::Next);
                }

                // Close
                let close = Rect::from_min_size(
                    screen.right_top() + Vec2::new(-16.0 - CONTROL_SIZE.x, 16.0),
                    CONTROL_SIZE,
                );
                if control_button(ui, close, "✕", true) {
                    inputs.push(ViewerInput::Close);
                }

                // Zoom controls in the viewport corner
                let panel = Rect::from_min_size(
                    viewport.right_top() + Vec2::new(-16.0 - 56.0, 16.0),
                    Vec2::new(56.0, 104.0),
                );
                ui.painter()
                    .rect_filled(panel, CornerRadius::same(10), Color32::from_black_alpha(180));
                let zoom_in = Rect::from_center_size(panel.center_top() + Vec2::new(0.0, 22.0), CONTROL_SIZE);
                let zoom_out = Rect::from_center_size(zoom_in.center() + Vec2::new(0.0, 38.0), CONTROL_SIZE);
                if control_button(ui, zoom_in, "+", can_zoom_in) {
                    inputs.push(ViewerInput::ZoomIn);
                }
                if control_button(ui, zoom_out, "−", can_zoom_out) {
                    inputs.push(ViewerInput::ZoomOut);
                }
                ui.painter().text(
                    panel.center_bottom() - Vec2::new(0.0, 10.0),
                    Align2::CENTER_CENTER,
                    &zoom_label,
                    FontId::proportional(11.0),
                    Color32::WHITE,
                );

                // Caption
                let caption_pos = viewport.center_bottom() + Vec2::new(0.0, 12.0);
                ui.painter().text(
                    caption_pos,
                    Align2::CENTER_TOP,
                    item.caption(index),
                    FontId::proportional(14.0),
                    Color32::WHITE,
                );
                ui.painter().text(
                    caption_pos + Vec2::new(0.0, 20.0),
                    Align2::CENTER_TOP,
                    format!("Height: {}", height_label(height)),
                    FontId::proportional(13.0),
                    Color32::from_gray(210),
                );

                // Pointer gestures on the image region
                if image_response.drag_started() {
                    let origin = ui
                        .input(|i| i.pointer.press_origin())
                        .or(image_response.interact_pointer_pos());
                    if let Some(pos) = origin {
                        inputs.push(ViewerInput::PointerDown {
                            pos,
                            target: PointerTarget::Image,
                        });
                    }
                }
                if image_response.dragged() {
                    if let Some(pos) = ui.ctx().pointer_latest_pos() {
                        inputs.push(ViewerInput::PointerMove { pos });
                    }
                }
                if image_response.drag_stopped() {
                    inputs.push(ViewerInput::PointerUp);
                } else if dragging && !image_response.contains_pointer() {
                    inputs.push(ViewerInput::PointerLeave);
                }

                if image_response.hovered() {
                    let scroll = ui.input(|i| i.raw_scroll_delta.y);
                    if scroll != 0.0 {
                        // egui reports wheel-up as positive
                        inputs.push(ViewerInput::Wheel { delta_y: -scroll });
                    }
                }

                if backdrop.clicked() {
                    inputs.push(ViewerInput::Click {
                        target: PointerTarget::Backdrop,
                    });
                }
            });

        for input in inputs {
            if self.dispatch(input).changed {
                ctx.request_repaint();
            }
        }

        if self.viewer.is_open() {
            // The page behind the overlay must not scroll
            ctx.input_mut(|i| {
                i.raw_scroll_delta = Vec2::ZERO;
                i.smooth_scroll_delta = Vec2::ZERO;
            });
            ctx.set_cursor_icon(self.viewer.cursor().to_egui());
        }
    }
}

fn control_button(ui: &mut egui::Ui, rect: Rect, label: &str, enabled: bool) -> bool {
    ui.add_enabled_ui(enabled, |ui| {
        ui.put(rect, egui::Button::new(RichText::new(label).size(18.0)))
    })
    .inner
    .clicked()
}
