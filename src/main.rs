use anyhow::Result;
use media_sliders::app;
use media_sliders::data::config::Config;
use media_sliders::ui::theme::Theme;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::load_or_default();
    let theme = Theme::load(&config.theme);

    let mut app = app::state::AppState::new(config, theme);
    app::event_loop::run(&mut app)
}
