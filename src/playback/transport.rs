use std::time::{Duration, Instant};

pub const VOLUME_CEILING: i32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
    Stopped,
}

/// Simulated playback clock standing in for a media player: no decoding, just a position
/// that advances with wall time while playing.
#[derive(Debug, Clone)]
pub struct Transport {
    duration: Option<Duration>,
    position: Duration,
    state: PlaybackState,
    volume: i32,
    muted: bool,
    last_tick: Option<Instant>,
}

impl Default for Transport {
    fn default() -> Self {
        Self {
            duration: None,
            position: Duration::ZERO,
            state: PlaybackState::Stopped,
            volume: 100,
            muted: false,
            last_tick: None,
        }
    }
}

impl Transport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, duration: Duration, play: bool) {
        self.duration = Some(duration);
        self.position = Duration::ZERO;
        self.state = if play { PlaybackState::Playing } else { PlaybackState::Paused };
        self.last_tick = None;
        log::info!("loaded media of {}s", duration.as_secs());
    }

    pub fn unload(&mut self) {
        self.duration = None;
        self.position = Duration::ZERO;
        self.state = PlaybackState::Stopped;
        self.last_tick = None;
        log::info!("media unloaded");
    }

    pub fn is_loaded(&self) -> bool {
        self.duration.is_some()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn position(&self) -> Duration {
        self.position
    }

    pub fn duration(&self) -> Duration {
        self.duration.unwrap_or_default()
    }

    pub fn volume(&self) -> i32 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Position as a fraction of the length, or -1 with nothing loaded.
    pub fn fraction(&self) -> f32 {
        match self.duration {
            None => -1.0,
            Some(d) if d.is_zero() => 0.0,
            Some(d) => (self.position.as_millis() as f64 / d.as_millis() as f64) as f32,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        let last = self.last_tick.replace(now);
        if self.state != PlaybackState::Playing {
            return;
        }
        let (Some(last), Some(duration)) = (last, self.duration) else {
            return;
        };
        self.position = (self.position + now.saturating_duration_since(last)).min(duration);
        if self.position >= duration {
            self.state = PlaybackState::Stopped;
            log::debug!("reached end of media");
        }
    }

    pub fn seek_fraction(&mut self, fraction: f32) {
        let Some(duration) = self.duration else {
            return;
        };
        let f = fraction.clamp(0.0, 1.0) as f64;
        self.position = Duration::from_millis((duration.as_millis() as f64 * f) as u64);
        if self.state == PlaybackState::Stopped && self.position < duration {
            self.state = PlaybackState::Paused;
        }
        log::debug!("seek to {:.3} ({}ms)", f, self.position.as_millis());
    }

    pub fn set_volume(&mut self, percent: i32) {
        self.volume = percent.clamp(0, VOLUME_CEILING);
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn toggle_play(&mut self) {
        let Some(duration) = self.duration else {
            return;
        };
        self.state = match self.state {
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Playing,
            PlaybackState::Stopped => {
                if self.position >= duration {
                    self.position = Duration::ZERO;
                }
                PlaybackState::Playing
            }
        };
        self.last_tick = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_media_reports_negative_fraction() {
        let mut t = Transport::new();
        assert_eq!(t.fraction(), -1.0);
        t.toggle_play();
        assert_eq!(t.state(), PlaybackState::Stopped);
        t.seek_fraction(0.5);
        assert_eq!(t.position(), Duration::ZERO);
    }

    #[test]
    fn clock_advances_only_while_playing() {
        let t0 = Instant::now();
        let mut t = Transport::new();
        t.load(Duration::from_secs(10), true);
        t.tick(t0);
        t.tick(t0 + Duration::from_secs(2));
        assert_eq!(t.position(), Duration::from_secs(2));
        assert_eq!(t.fraction(), 0.2);

        t.toggle_play();
        t.tick(t0 + Duration::from_secs(5));
        assert_eq!(t.position(), Duration::from_secs(2));
    }

    #[test]
    fn stops_at_end_and_restarts() {
        let t0 = Instant::now();
        let mut t = Transport::new();
        t.load(Duration::from_secs(3), true);
        t.tick(t0);
        t.tick(t0 + Duration::from_secs(9));
        assert_eq!(t.position(), Duration::from_secs(3));
        assert_eq!(t.state(), PlaybackState::Stopped);

        t.toggle_play();
        assert_eq!(t.state(), PlaybackState::Playing);
        assert_eq!(t.position(), Duration::ZERO);
    }

    #[test]
    fn seek_is_clamped() {
        let mut t = Transport::new();
        t.load(Duration::from_secs(200), false);
        t.seek_fraction(0.5);
        assert_eq!(t.position(), Duration::from_secs(100));
        t.seek_fraction(3.0);
        assert_eq!(t.position(), Duration::from_secs(200));
        t.seek_fraction(-1.0);
        assert_eq!(t.position(), Duration::ZERO);
    }

    #[test]
    fn volume_and_mute() {
        let mut t = Transport::new();
        t.set_volume(900);
        assert_eq!(t.volume(), VOLUME_CEILING);
        t.set_volume(-3);
        assert_eq!(t.volume(), 0);
        t.toggle_mute();
        assert!(t.is_muted());
    }

    #[test]
    fn unload_clears_media() {
        let mut t = Transport::new();
        t.load(Duration::from_secs(5), true);
        t.unload();
        assert!(!t.is_loaded());
        assert_eq!(t.fraction(), -1.0);
    }
}
