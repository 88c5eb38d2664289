use super::TowerApp;
use crate::viewer::{InputOutcome, ViewerInput, ViewerKey, ViewerNotice};

impl TowerApp {
    /// Apply one viewer input and forward its notice to telemetry.
    pub fn dispatch(&mut self, input: ViewerInput) -> InputOutcome {
        let outcome = self.viewer.handle(input);
        if let Some(notice) = &outcome.notice {
            let item_id = match notice {
                ViewerNotice::Opened(i) | ViewerNotice::Navigated(i) => {
                    self.collection.get(*i).map(|item| item.id.as_str())
                }
                ViewerNotice::Closed => None,
            };
            self.telemetry.record(notice, item_id);
        }
        outcome
    }

    /// Route a pressed key: the viewer first, then the gallery.
    pub fn handle_key(&mut self, key: egui::Key) -> bool {
        if self.viewer.is_open() {
            return match ViewerKey::from_egui(key) {
                Some(key) => self.dispatch(ViewerInput::Key(key)).consumed,
                None => false,
            };
        }
        self.gallery.handle_key(key)
    }

    pub fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let pressed: Vec<egui::Key> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => Some(*key),
                    _ => None,
                })
                .collect()
        });

        for key in pressed {
            if self.handle_key(key) {
                ctx.request_repaint();
            }
        }
    }

    pub fn toggle_gallery(&mut self) {
        if self.gallery.is_open() {
            self.gallery.close();
        } else {
            self.gallery.open();
        }
    }
}
