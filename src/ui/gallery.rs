use crate::app::TowerApp;
use crate::gallery::{count_label, meta_lines};
use crate::viewer::ViewerInput;
use egui::{self, RichText, Sense, Vec2};

const THUMB_SIZE: f32 = 150.0;

impl TowerApp {
    pub(crate) fn render_gallery(&mut self, ctx: &egui::Context) {
        if !self.gallery.is_open() {
            return;
        }

        let mut open = true;
        let mut clicked = None;
        let title = format!("{} · {}", self.gallery.title, count_label(self.collection.len()));

        egui::Window::new(title)
            .id(egui::Id::new("gallery_overlay"))
            .open(&mut open)
            .collapsible(false)
            .default_size([900.0, 600.0])
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.horizontal_wrapped(|ui| {
                            ui.spacing_mut().item_spacing = Vec2::splat(12.0);

                            for (index, item) in self.collection.items().iter().enumerate() {
                                ui.vertical(|ui| {
                                    ui.set_width(THUMB_SIZE);
                                    let response = ui.add(
                                        egui::Image::new(item.url.as_str())
                                            .fit_to_exact_size(Vec2::splat(THUMB_SIZE))
                                            .show_loading_spinner(true)
                                            .sense(Sense::click()),
                                    );
                                    ui.label(RichText::new(item.caption(index)).small().strong());
                                    for line in meta_lines(item) {
                                        ui.label(RichText::new(line).small().weak());
                                    }
                                    if response.clicked() {
                                        clicked = Some(index);
                                    }
                                });
                            }
                        });
                    });
            });

        if !open {
            self.gallery.close();
        }
        if let Some(index) = clicked {
            self.gallery.close();
            self.dispatch(ViewerInput::Open(index));
        }
    }
}
