use super::TowerApp;
use crate::item::ItemCollection;
use std::path::{Path, PathBuf};

impl TowerApp {
    /// Load a folder or manifest. Failures keep the current collection and
    /// surface a message instead.
    pub fn load_source(&mut self, path: &Path) -> bool {
        match ItemCollection::from_path(path) {
            Ok(collection) => {
                self.set_collection(collection);
                self.settings.last_source = Some(path.to_path_buf());
                self.status_message = None;
                true
            }
            Err(e) => {
                e.log();
                self.set_status_message(e.user_message());
                false
            }
        }
    }

    pub fn pick_folder(&mut self) {
        if let Some(folder) = rfd::FileDialog::new()
            .set_directory(self.dialog_start_dir())
            .pick_folder()
        {
            self.load_source(&folder);
        }
    }

    pub fn pick_manifest(&mut self) {
        if let Some(file) = rfd::FileDialog::new()
            .add_filter("Manifest", &["json"])
            .set_directory(self.dialog_start_dir())
            .pick_file()
        {
            self.load_source(&file);
        }
    }

    fn dialog_start_dir(&self) -> PathBuf {
        self.settings
            .last_source
            .as_ref()
            .and_then(|p| if p.is_dir() { Some(p.clone()) } else { p.parent().map(Path::to_path_buf) })
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
