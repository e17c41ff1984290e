pub mod color;
pub mod volume_sprite;
