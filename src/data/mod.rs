pub mod config;
pub mod gradient_config;
