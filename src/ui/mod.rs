pub mod theme;
pub mod tui;

pub mod components {
    pub mod range_control;
    pub mod seek_slider;
    pub mod sound_slider;
    pub mod tooltip;
}
