//! Antenna tower image viewer: height-based marker layout along a schematic
//! mast and a zoom/pan lightbox driven by an explicit state machine.

pub mod app;
pub mod errors;
pub mod gallery;
pub mod geometry;
pub mod item;
pub mod layout;
pub mod logging;
pub mod scroll_lock;
pub mod settings;
pub mod telemetry;
pub mod tower;
pub mod ui;
pub mod viewer;
