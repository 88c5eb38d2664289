use crate::app::TowerApp;

impl eframe::App for TowerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.settings.theme.visuals());

        // Keyboard first so this frame's rendering sees the new state
        self.handle_keyboard(ctx);

        self.render_toolbar(ctx);

        // Overlays before the central panel: the viewer swallows wheel input
        // the tower scroll area would otherwise see.
        self.render_viewer(ctx);
        self.render_gallery(ctx);

        self.render_tower(ctx);
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        self.flush();
    }
}
