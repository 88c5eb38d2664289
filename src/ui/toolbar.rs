use crate::app::TowerApp;
use crate::gallery::count_label;
use egui::{self, Color32, RichText};

impl TowerApp {
    pub(crate) fn render_toolbar(&mut self, ctx: &egui::Context) {
        let mut open_folder = false;
        let mut open_manifest = false;
        let mut toggle_gallery = false;
        let mut relayout = false;
        let title = self.title().to_string();
        let count = count_label(self.collection.len());

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(title).strong().size(16.0));
                ui.label(RichText::new(count).weak());
                ui.separator();

                if ui.button("📁 Open folder…").clicked() {
                    open_folder = true;
                }
                if ui.button("📄 Open manifest…").clicked() {
                    open_manifest = true;
                }
                if ui
                    .add_enabled(!self.collection.is_empty(), egui::Button::new("▦ Gallery"))
                    .clicked()
                {
                    toggle_gallery = true;
                }
                ui.separator();

                if ui
                    .checkbox(&mut self.settings.estimate_missing_heights, "Estimate missing heights")
                    .changed()
                {
                    relayout = true;
                }
                ui.checkbox(&mut self.settings.show_height_labels, "Height labels");
            });

            if let Some(message) = &self.status_message {
                ui.label(RichText::new(message).color(Color32::from_rgb(255, 100, 100)));
            }
        });

        if open_folder {
            self.pick_folder();
        }
        if open_manifest {
            self.pick_manifest();
        }
        if toggle_gallery {
            self.toggle_gallery();
        }
        if relayout {
            self.relayout();
        }
    }
}
