// Rendering layer: turns egui input into viewer inputs and paints the state.
pub mod gallery;
pub mod lightbox;
pub mod main_ui;
pub mod toolbar;
pub mod tower_view;
