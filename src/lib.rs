//! Media transport sliders for the terminal: a throttled seek bar and a wedge-shaped volume
//! control, plus a small demo host that drives them from a simulated player.

pub mod app;
pub mod data;
pub mod playback;
pub mod render;
pub mod ui;
pub mod utils;
