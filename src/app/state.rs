use crate::app::pointer_router::PointerRouter;
use crate::data::config::Config;
use crate::playback::transport::Transport;
use crate::ui::components::range_control::{PointerHandler, RangeControl};
use crate::ui::components::seek_slider::{SeekEvent, SeekSlider};
use crate::ui::components::sound_slider::{SoundSlider, VolumeEvent};
use crate::ui::theme::Theme;
use crate::ui::tui::UiLayout;
use crate::utils::input::{Action, PointerEvent};
use std::time::{Duration, Instant};

const TOAST_TTL: Duration = Duration::from_millis(1500);

pub struct AppState {
    pub config: Config,
    pub theme: Theme,
    pub seek: SeekSlider,
    pub volume: SoundSlider,
    pub transport: Transport,
    pub toast: Option<(String, Instant)>,
    pub should_quit: bool,
    router: PointerRouter,
}

impl AppState {
    pub fn new(config: Config, theme: Theme) -> Self {
        let seek = SeekSlider::new(config.seek.orientation).with_palette(config.seek.palette());
        let mut volume = SoundSlider::new(
            config.volume.step,
            config.volume.extended_range,
            &config.volume.colors,
            config.volume.geometry,
        );
        volume.set_value(config.demo.volume);
        volume.drain_events();

        let mut transport = Transport::new();
        transport.set_volume(volume.value());
        transport.set_muted(config.demo.muted);
        if config.demo.duration_secs > 0 {
            transport.load(Duration::from_secs(config.demo.duration_secs), config.demo.start_playing);
        }

        let mut app = Self {
            config,
            theme,
            seek,
            volume,
            transport,
            toast: None,
            should_quit: false,
            router: PointerRouter::new(),
        };
        app.sync_widgets();
        app
    }

    pub fn set_toast(&mut self, msg: impl Into<String>) {
        self.toast = Some((msg.into(), Instant::now()));
    }

    /// Place the sliders where the last frame drew them, so hit-testing matches the screen.
    pub fn apply_layout(&mut self, layout: &UiLayout) {
        self.seek.set_area(layout.seek);
        self.volume.set_area(layout.volume);
        self.seek.set_frame(layout.full);
        self.volume.set_frame(layout.full);
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.persist();
                self.should_quit = true;
            }
            Action::TogglePlayPause => self.transport.toggle_play(),
            Action::ToggleMute => {
                self.transport.toggle_mute();
                self.set_toast(if self.transport.is_muted() { "Muted" } else { "Unmuted" });
            }
            Action::ToggleMedia => {
                if self.transport.is_loaded() {
                    self.transport.unload();
                    self.set_toast("Media unloaded");
                } else {
                    let secs = self.config.demo.duration_secs.max(1);
                    self.transport.load(Duration::from_secs(secs), true);
                    self.set_toast("Media loaded");
                }
            }
            Action::None => {}
        }
        self.sync_widgets();
    }

    pub fn handle_pointer(&mut self, ev: PointerEvent) {
        let mut widgets: [&mut dyn PointerHandler; 2] = [&mut self.seek, &mut self.volume];
        self.router.dispatch(&mut widgets, &ev);
        self.apply_slider_events();
    }

    pub fn tick(&mut self, now: Instant) {
        self.seek.tick(now);
        self.volume.tick(now);
        self.apply_slider_events();

        self.transport.tick(now);
        self.sync_widgets();

        if let Some((_, at)) = &self.toast {
            if now.saturating_duration_since(*at) >= TOAST_TTL {
                self.toast = None;
            }
        }
    }

    fn apply_slider_events(&mut self) {
        for ev in self.seek.drain_events() {
            match ev {
                SeekEvent::Dragged(pos) => self.transport.seek_fraction(pos),
                SeekEvent::Moved(v) => log::trace!("seek handle at {v}"),
            }
        }
        for ev in self.volume.drain_events() {
            match ev {
                VolumeEvent::Moved(v) | VolumeEvent::ValueChanged(v) => self.transport.set_volume(v),
                VolumeEvent::Pressed => log::debug!("volume drag started"),
                VolumeEvent::Released => log::debug!("volume committed at {}%", self.volume.value()),
            }
        }
    }

    fn sync_widgets(&mut self) {
        self.seek.set_position(
            self.transport.fraction(),
            self.transport.position(),
            self.transport.duration(),
        );
        self.volume.set_muted(self.transport.is_muted());
    }

    fn persist(&mut self) {
        self.config.demo.volume = self.transport.volume();
        self.config.demo.muted = self.transport.is_muted();
        if let Err(e) = self.config.save() {
            log::warn!("could not save config: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{ColorCapability, ThemeName};
    use crate::utils::input::PointerButton;
    use ratatui::layout::Rect;

    fn app() -> AppState {
        let mut config = Config::default();
        config.demo.duration_secs = 200;
        config.demo.start_playing = false;
        let theme = Theme::with_capability(ThemeName::Mocha, ColorCapability::TrueColor);
        let mut app = AppState::new(config, theme);
        app.apply_layout(&UiLayout {
            full: Rect::new(0, 0, 220, 40),
            seek: Rect::new(0, 2, 200, 3),
            volume: Rect::new(0, 6, 26, 3),
            ..UiLayout::default()
        });
        app
    }

    #[test]
    fn starts_from_config() {
        let app = app();
        assert!(app.seek.is_enabled());
        assert_eq!(app.volume.value(), 100);
        assert_eq!(app.transport.volume(), 100);
        assert_eq!(app.transport.duration(), Duration::from_secs(200));
    }

    #[test]
    fn seek_click_moves_transport() {
        let t0 = Instant::now();
        let mut app = app();
        app.handle_pointer(PointerEvent::press(PointerButton::Primary, 100, 3, t0));
        app.handle_pointer(PointerEvent::release(PointerButton::Primary, 100, 3, t0));
        assert_eq!(app.transport.position(), Duration::from_secs(100));
        app.tick(t0);
        assert_eq!(app.seek.value(), 500);
    }

    #[test]
    fn throttled_drag_seeks_on_tick() {
        let t0 = Instant::now();
        let mut app = app();
        app.handle_pointer(PointerEvent::press(PointerButton::Primary, 10, 3, t0));
        app.handle_pointer(PointerEvent::drag(PointerButton::Primary, 50, 3, t0));
        assert_eq!(app.transport.position(), Duration::ZERO);

        app.tick(t0 + Duration::from_millis(200));
        assert_eq!(app.transport.position(), Duration::from_secs(50));
    }

    #[test]
    fn volume_follows_drag_and_revert() {
        let t0 = Instant::now();
        let mut app = app();
        // track starts at column 1, 24 cells for 0..=200
        app.handle_pointer(PointerEvent::press(PointerButton::Primary, 7, 7, t0));
        assert_eq!(app.transport.volume(), 50);
        app.handle_pointer(PointerEvent::drag(PointerButton::Primary, 7, 30, t0));
        assert_eq!(app.transport.volume(), 100);
        app.handle_pointer(PointerEvent::release(PointerButton::Primary, 7, 30, t0));
        assert_eq!(app.volume.value(), 100);
    }

    #[test]
    fn unloading_media_disables_seek() {
        let mut app = app();
        app.handle_action(Action::ToggleMedia);
        assert!(!app.seek.is_enabled());
        app.handle_action(Action::ToggleMedia);
        assert!(app.seek.is_enabled());
    }

    #[test]
    fn mute_reaches_volume_widget() {
        let mut app = app();
        app.handle_action(Action::ToggleMute);
        assert!(app.volume.is_muted());
        assert_eq!(app.toast.as_ref().map(|(m, _)| m.as_str()), Some("Muted"));
    }
}
