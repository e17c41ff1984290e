use crate::render::color::{LinearGradient, RadialGradient, Rgb};
use crate::ui::components::range_control::{value_from_position, Orientation, PointerHandler, RangeControl};
use crate::ui::components::tooltip::Tooltip;
use crate::ui::theme::Theme;
use crate::utils::input::{PointerButton, PointerEvent};
use crate::utils::timefmt::clock;
use crate::utils::timer::SingleShotTimer;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

pub const RANGE_MIN: i32 = 0;
pub const RANGE_MAX: i32 = 1000;

/// At most one drag emission per window while the handle is being dragged.
pub const SEEK_LIMIT: Duration = Duration::from_millis(150);

// A notch is 120 eighths of a degree; 120 / 12 = 10 steps = 1% of the track.
const WHEEL_DIVISOR: i32 = 12;

// Cross-axis cells the handle gives up to the bar.
const HANDLE_INSET: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekEvent {
    /// Seek the media to this fraction of its length.
    Dragged(f32),
    /// Raw value after a pointer drag step.
    Moved(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekPalette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub highlight: Rgb,
    pub handle_inner: Rgb,
    pub handle_outer: Rgb,
}

impl Default for SeekPalette {
    fn default() -> Self {
        Self {
            background: Rgb(135, 135, 135),
            foreground: Rgb(50, 156, 255),
            highlight: Rgb(230, 230, 230),
            handle_inner: Rgb(0, 0, 0),
            handle_outer: Rgb(80, 80, 80),
        }
    }
}

/// Screen rectangles of every painted part, derived from area, value and hover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekGeometry {
    pub bar: Rect,
    pub highlight: Option<Rect>,
    pub fill: Option<Rect>,
    pub handle: Option<Rect>,
}

#[derive(Debug)]
pub struct SeekSlider {
    orientation: Orientation,
    area: Rect,
    value: i32,
    sliding: bool,
    enabled: bool,
    hovered: bool,
    visible: bool,
    input_length: Duration,
    seek_limit: SingleShotTimer,
    tooltip: Tooltip,
    palette: SeekPalette,
    events: Vec<SeekEvent>,
}

impl SeekSlider {
    pub fn new(orientation: Orientation) -> Self {
        let mut slider = Self {
            orientation,
            area: Rect::default(),
            value: RANGE_MIN,
            sliding: false,
            enabled: true,
            hovered: false,
            visible: true,
            input_length: Duration::ZERO,
            seek_limit: SingleShotTimer::new(SEEK_LIMIT),
            tooltip: Tooltip::new(),
            palette: SeekPalette::default(),
            events: Vec::new(),
        };
        slider.set_position(-1.0, Duration::ZERO, Duration::ZERO);
        slider.tooltip.set_text(clock(Duration::ZERO));
        slider
    }

    pub fn with_palette(mut self, palette: SeekPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Push playback state from the host. A negative `pos` means no media: the control is
    /// disabled and any drag is dropped. While dragging, the pointer owns the value.
    pub fn set_position(&mut self, pos: f32, _elapsed: Duration, length: Duration) {
        if pos < 0.0 {
            self.enabled = false;
            self.sliding = false;
            self.seek_limit.stop();
            self.tooltip.hide();
        } else {
            self.enabled = true;
        }

        if !self.sliding {
            self.set_value((pos * RANGE_MAX as f32) as i32);
        }

        self.input_length = length;
    }

    pub fn fraction(&self) -> f32 {
        self.value as f32 / RANGE_MAX as f32
    }

    pub fn is_sliding(&self) -> bool {
        self.sliding
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.tooltip.hide();
            self.hovered = false;
        }
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn size_hint(&self) -> (u16, u16) {
        match self.orientation {
            Orientation::Horizontal => (20, 1),
            Orientation::Vertical => (1, 10),
        }
    }

    pub fn drain_events(&mut self) -> Vec<SeekEvent> {
        std::mem::take(&mut self.events)
    }

    fn start_seek_timer(&mut self, now: Instant) {
        if self.sliding && !self.seek_limit.is_active() {
            self.seek_limit.start(now);
        }
    }

    fn update_pos(&mut self) {
        let pos = self.fraction();
        self.events.push(SeekEvent::Dragged(pos));
    }

    /// (pointer offset from the left or top edge, track length).
    fn along_track(&self, ev: &PointerEvent) -> (i32, i32) {
        match self.orientation {
            Orientation::Horizontal => (ev.column as i32 - self.area.x as i32, self.area.width as i32),
            Orientation::Vertical => (ev.row as i32 - self.area.y as i32, self.area.height as i32),
        }
    }

    fn value_at(&self, ev: &PointerEvent) -> i32 {
        let (pos, span) = self.along_track(ev);
        let upside_down = self.orientation == Orientation::Vertical;
        value_from_position(RANGE_MIN, RANGE_MAX, pos, span, upside_down)
    }

    fn update_tooltip(&mut self, ev: &PointerEvent) {
        if self.input_length.is_zero() {
            return;
        }
        let (pos, span) = self.along_track(ev);
        if span <= 0 {
            return;
        }
        let clamped = pos.clamp(0, span - 1);
        let shown = match self.orientation {
            Orientation::Horizontal => clamped,
            Orientation::Vertical => span - 1 - clamped,
        };
        let length_ms = self.input_length.as_millis() as u64;
        let at = Duration::from_millis(shown as u64 * length_ms / span as u64);
        self.tooltip.set_text(clock(at));

        match self.orientation {
            Orientation::Horizontal => {
                let x = ev.column as i32 - (pos - clamped) - self.tooltip.width() / 2;
                let y = self.area.y as i32 - self.tooltip.height();
                self.tooltip.move_to(x, y);
            }
            Orientation::Vertical => {
                let x = self.area.x as i32 - self.tooltip.width();
                let y = ev.row as i32 - (pos - clamped);
                self.tooltip.move_to(x, y);
            }
        }
    }

    pub fn geometry(&self) -> SeekGeometry {
        let a = self.area;
        let (length, cross) = match self.orientation {
            Orientation::Horizontal => (a.width as i32, a.height as i32),
            Orientation::Vertical => (a.height as i32, a.width as i32),
        };
        let thick = (cross / 2).max(1).min(cross.max(0));
        let bar_off = (cross - thick) / 2;

        let slider_pos = if self.value != 0 {
            Some(length as f32 * self.value as f32 / RANGE_MAX as f32)
        } else {
            None
        };
        let fill_len = slider_pos
            .filter(|_| self.value > RANGE_MIN && self.value <= RANGE_MAX)
            .map(|p| length.min(p as i32))
            .filter(|&l| l > 0);

        let hs = (cross - HANDLE_INSET).max(1);
        let handle_along = slider_pos.filter(|_| self.hovered && length >= hs).map(|p| {
            let p = p as i32;
            match self.orientation {
                Orientation::Horizontal => (p - hs / 2).max(0).min(length - hs),
                Orientation::Vertical => (length - (p + hs / 2)).max(0).min(length - hs),
            }
        });
        let handle_cross = ((cross - hs) / 2).max(0);

        match self.orientation {
            Orientation::Horizontal => {
                let bar = Rect::new(a.x, a.y + bar_off as u16, a.width, thick as u16);
                let below = bar_off + thick;
                SeekGeometry {
                    bar,
                    highlight: (below < cross).then(|| Rect::new(a.x, a.y + below as u16, a.width, 1)),
                    fill: fill_len.map(|l| Rect::new(bar.x, bar.y, l as u16, bar.height)),
                    handle: handle_along.map(|p| {
                        Rect::new(a.x + p as u16, a.y + handle_cross as u16, hs as u16, (hs.min(cross)) as u16)
                    }),
                }
            }
            Orientation::Vertical => {
                let bar = Rect::new(a.x + bar_off as u16, a.y, thick as u16, a.height);
                let right = bar_off + thick;
                SeekGeometry {
                    bar,
                    highlight: (right < cross).then(|| Rect::new(a.x + right as u16, a.y, 1, a.height)),
                    fill: fill_len.map(|l| {
                        Rect::new(bar.x, a.y + (length - l) as u16, bar.width, l as u16)
                    }),
                    handle: handle_along.map(|p| {
                        Rect::new(a.x + handle_cross as u16, a.y + p as u16, (hs.min(cross)) as u16, hs as u16)
                    }),
                }
            }
        }
    }

    fn paint_bar(&self, buf: &mut Buffer, theme: &Theme, part: Rect, bar: Rect, gradient: &LinearGradient) {
        let base = theme.color_base();
        let cross = match self.orientation {
            Orientation::Horizontal => self.area.height,
            Orientation::Vertical => self.area.width,
        }
        .max(1) as f32;

        for y in part.y..part.y + part.height {
            for x in part.x..part.x + part.width {
                let c = match self.orientation {
                    Orientation::Horizontal => y - self.area.y,
                    Orientation::Vertical => x - self.area.x,
                };
                let color = theme.color(gradient.at((c as f32 + 0.5) / cross));
                let cell = buf.get_mut(x, y);
                let cap = match self.orientation {
                    Orientation::Horizontal if bar.width >= 3 && x == bar.x => Some("▐"),
                    Orientation::Horizontal if bar.width >= 3 && x == bar.x + bar.width - 1 => Some("▌"),
                    Orientation::Vertical if bar.height >= 3 && y == bar.y => Some("▄"),
                    Orientation::Vertical if bar.height >= 3 && y == bar.y + bar.height - 1 => Some("▀"),
                    _ => None,
                };
                match cap {
                    Some(sym) => {
                        cell.set_symbol(sym).set_fg(color).set_bg(base);
                    }
                    None => {
                        cell.set_symbol(" ").set_bg(color);
                    }
                }
            }
        }
    }
}

impl RangeControl for SeekSlider {
    fn value(&self) -> i32 {
        self.value
    }

    fn set_value(&mut self, value: i32) {
        self.value = self.clamp_value(value);
    }

    fn range(&self) -> RangeInclusive<i32> {
        RANGE_MIN..=RANGE_MAX
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl PointerHandler for SeekSlider {
    fn area(&self) -> Rect {
        self.area
    }

    fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    fn set_frame(&mut self, frame: Rect) {
        self.tooltip.set_frame(frame);
    }

    fn on_press(&mut self, ev: &PointerEvent) -> bool {
        if !self.enabled || !self.visible {
            return false;
        }
        match ev.button {
            Some(PointerButton::Primary) | Some(PointerButton::Middle) => {}
            _ => return false,
        }
        self.sliding = true;
        let v = self.value_at(ev);
        self.set_value(v);
        true
    }

    fn on_move(&mut self, ev: &PointerEvent) {
        if !self.enabled {
            return;
        }
        if self.sliding {
            let v = self.value_at(ev);
            self.set_value(v);
            self.events.push(SeekEvent::Moved(self.value));
            self.start_seek_timer(ev.at);
        }
        self.update_tooltip(ev);
    }

    fn on_release(&mut self, _ev: &PointerEvent) {
        // a drag cancelled by the host does not seek
        if !self.enabled || !self.sliding {
            return;
        }
        self.sliding = false;
        // only the final seek on release from here on
        self.seek_limit.stop();
        self.update_pos();
    }

    fn on_wheel(&mut self, _ev: &PointerEvent, delta: i32) {
        if !self.enabled || self.sliding {
            return;
        }
        self.set_value(self.value + delta / WHEEL_DIVISOR);
        self.update_pos();
    }

    fn on_enter(&mut self, ev: &PointerEvent) {
        if !self.enabled || !self.visible {
            return;
        }
        self.hovered = true;
        if !self.input_length.is_zero() {
            self.update_tooltip(ev);
            self.tooltip.show();
        }
    }

    fn on_leave(&mut self, ev: &PointerEvent) {
        self.hovered = false;
        if !self.contains_pointer(ev.column, ev.row) {
            self.tooltip.hide();
        }
    }

    fn tooltip_rect(&self) -> Option<Rect> {
        self.tooltip.is_visible().then(|| self.tooltip.rect())
    }

    fn on_tooltip_event(&mut self, ev: &PointerEvent) {
        if !self.contains_pointer(ev.column, ev.row) {
            self.tooltip.hide();
        }
    }

    fn tick(&mut self, now: Instant) {
        if self.seek_limit.poll(now) {
            self.update_pos();
        }
    }

    fn paint(&self, buf: &mut Buffer, theme: &Theme) {
        let area = self.area.intersection(buf.area);
        if !self.visible || area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(theme.color_base()));
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                buf.get_mut(x, y).set_symbol(" ");
            }
        }

        let g = self.geometry();
        let p = self.palette;

        if let Some(hl) = g.highlight.map(|r| r.intersection(area)) {
            let sym = match self.orientation {
                Orientation::Horizontal => "▔",
                Orientation::Vertical => "▏",
            };
            for y in hl.y..hl.y + hl.height {
                for x in hl.x..hl.x + hl.width {
                    buf.get_mut(x, y).set_symbol(sym).set_fg(theme.color(p.highlight));
                }
            }
        }

        let background = LinearGradient::two_stop(p.background, p.background.lighter(150));
        self.paint_bar(buf, theme, g.bar.intersection(area), g.bar, &background);

        if let Some(fill) = g.fill {
            let foreground = LinearGradient::two_stop(p.foreground, p.foreground.darker(140));
            self.paint_bar(buf, theme, fill.intersection(area), g.bar, &foreground);
        }

        if let Some(h) = g.handle {
            let radial = RadialGradient {
                center: (h.x as f32 + h.width as f32 / 2.0, h.y as f32 + h.height as f32 / 2.0),
                radius: h.width.max(h.height) as f32,
                ramp: LinearGradient::two_stop(p.handle_inner, p.handle_outer),
            };
            let visible = h.intersection(area);
            for y in visible.y..visible.y + visible.height {
                for x in visible.x..visible.x + visible.width {
                    let c = radial.at(x as f32 + 0.5, y as f32 + 0.5);
                    buf.get_mut(x, y).set_symbol("●").set_fg(theme.color(c));
                }
            }
        }
    }

    fn paint_overlay(&self, buf: &mut Buffer, theme: &Theme) {
        if self.visible {
            self.tooltip.paint(buf, theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{ColorCapability, ThemeName};
    use crate::utils::input::WHEEL_NOTCH;
    use pretty_assertions::assert_eq;

    fn slider(width: u16) -> SeekSlider {
        let mut s = SeekSlider::new(Orientation::Horizontal);
        s.set_area(Rect::new(0, 5, width, 3));
        s.set_position(0.0, Duration::ZERO, Duration::from_secs(200));
        s
    }

    fn dragged(events: &[SeekEvent]) -> Vec<f32> {
        events
            .iter()
            .filter_map(|e| match e {
                SeekEvent::Dragged(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn starts_disabled_at_zero() {
        let s = SeekSlider::new(Orientation::Horizontal);
        assert!(!s.is_enabled());
        assert!(!s.is_sliding());
        assert_eq!(s.value(), 0);
    }

    #[test]
    fn click_at_middle_reports_half() {
        let t0 = Instant::now();
        let mut s = slider(200);
        assert!(s.on_press(&PointerEvent::press(PointerButton::Primary, 100, 6, t0)));
        assert_eq!(s.value(), 500);
        s.on_release(&PointerEvent::release(PointerButton::Primary, 100, 6, t0));
        assert_eq!(s.drain_events(), vec![SeekEvent::Dragged(0.5)]);
        assert!(!s.is_sliding());
    }

    #[test]
    fn secondary_button_is_not_taken() {
        let t0 = Instant::now();
        let mut s = slider(200);
        assert!(!s.on_press(&PointerEvent::press(PointerButton::Secondary, 100, 6, t0)));
        assert!(!s.is_sliding());
        assert_eq!(s.value(), 0);
    }

    #[test]
    fn middle_button_seeks_like_primary() {
        let t0 = Instant::now();
        let mut s = slider(200);
        assert!(s.on_press(&PointerEvent::press(PointerButton::Middle, 50, 6, t0)));
        assert_eq!(s.value(), 250);
    }

    #[test]
    fn negative_position_disables_and_ends_drag() {
        let t0 = Instant::now();
        let mut s = slider(200);
        s.on_press(&PointerEvent::press(PointerButton::Primary, 40, 6, t0));
        assert!(s.is_sliding());

        s.set_position(-1.0, Duration::ZERO, Duration::ZERO);
        assert!(!s.is_enabled());
        assert!(!s.is_sliding());
        assert_eq!(s.value(), 0);
        assert!(!s.on_press(&PointerEvent::press(PointerButton::Primary, 40, 6, t0)));

        s.set_position(0.25, Duration::ZERO, Duration::from_secs(10));
        assert!(s.is_enabled());
        assert_eq!(s.value(), 250);
    }

    #[test]
    fn release_after_disable_does_not_seek() {
        let t0 = Instant::now();
        let mut s = slider(200);
        s.on_press(&PointerEvent::press(PointerButton::Primary, 150, 6, t0));
        s.on_move(&PointerEvent::drag(PointerButton::Primary, 160, 6, t0));
        s.drain_events();

        s.set_position(-1.0, Duration::ZERO, Duration::ZERO);
        s.on_release(&PointerEvent::release(PointerButton::Primary, 160, 6, t0));
        s.tick(t0 + Duration::from_secs(1));
        assert!(s.drain_events().is_empty());

        // media comes back while the button is still up: no stale seek either
        s.set_position(0.4, Duration::ZERO, Duration::from_secs(200));
        s.on_release(&PointerEvent::release(PointerButton::Primary, 160, 6, t0));
        assert!(s.drain_events().is_empty());
        assert_eq!(s.value(), 400);
    }

    #[test]
    fn host_position_is_ignored_while_dragging() {
        let t0 = Instant::now();
        let mut s = slider(200);
        s.on_press(&PointerEvent::press(PointerButton::Primary, 150, 6, t0));
        s.set_position(0.1, Duration::from_secs(20), Duration::from_secs(200));
        assert_eq!(s.value(), 750);

        s.on_release(&PointerEvent::release(PointerButton::Primary, 150, 6, t0));
        s.set_position(0.1, Duration::from_secs(20), Duration::from_secs(200));
        assert_eq!(s.value(), 100);
    }

    #[test]
    fn drag_emissions_are_throttled() {
        let t0 = Instant::now();
        let mut s = slider(200);
        s.on_press(&PointerEvent::press(PointerButton::Primary, 10, 6, t0));

        let mut stamped: Vec<(Duration, SeekEvent)> = Vec::new();
        for k in 1..=40u64 {
            let at = t0 + Duration::from_millis(k * 10);
            s.on_move(&PointerEvent::drag(PointerButton::Primary, 10 + k as u16 * 4, 6, at));
            s.tick(at);
            for e in s.drain_events() {
                stamped.push((at - t0, e));
            }
        }

        let drag_times: Vec<Duration> = stamped
            .iter()
            .filter(|(_, e)| matches!(e, SeekEvent::Dragged(_)))
            .map(|(t, _)| *t)
            .collect();
        assert_eq!(drag_times, vec![Duration::from_millis(160), Duration::from_millis(320)]);
        for pair in drag_times.windows(2) {
            assert!(pair[1] - pair[0] >= SEEK_LIMIT);
        }
        let moves = stamped.iter().filter(|(_, e)| matches!(e, SeekEvent::Moved(_))).count();
        assert_eq!(moves, 40);
    }

    #[test]
    fn release_emits_immediately_and_cancels_timer() {
        let t0 = Instant::now();
        let mut s = slider(200);
        s.on_press(&PointerEvent::press(PointerButton::Primary, 10, 6, t0));
        let t1 = t0 + Duration::from_millis(20);
        s.on_move(&PointerEvent::drag(PointerButton::Primary, 60, 6, t1));
        s.on_release(&PointerEvent::release(PointerButton::Primary, 60, 6, t1));
        assert_eq!(dragged(&s.drain_events()), vec![0.3]);

        s.tick(t0 + Duration::from_secs(1));
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn wheel_nudges_one_percent_per_notch() {
        let t0 = Instant::now();
        let mut s = slider(200);
        s.set_position(0.5, Duration::ZERO, Duration::from_secs(200));
        s.on_wheel(&PointerEvent::wheel(WHEEL_NOTCH, 10, 6, t0), WHEEL_NOTCH);
        assert_eq!(s.value(), 510);
        assert_eq!(s.drain_events(), vec![SeekEvent::Dragged(0.51)]);

        s.set_position(0.995, Duration::ZERO, Duration::from_secs(200));
        s.on_wheel(&PointerEvent::wheel(WHEEL_NOTCH, 10, 6, t0), WHEEL_NOTCH);
        assert_eq!(s.value(), RANGE_MAX);
    }

    #[test]
    fn wheel_is_ignored_while_dragging() {
        let t0 = Instant::now();
        let mut s = slider(200);
        s.on_press(&PointerEvent::press(PointerButton::Primary, 100, 6, t0));
        s.on_wheel(&PointerEvent::wheel(-WHEEL_NOTCH, 100, 6, t0), -WHEEL_NOTCH);
        assert_eq!(s.value(), 500);
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn hover_shows_time_preview() {
        let t0 = Instant::now();
        let mut s = slider(200);
        let ev = PointerEvent::hover(50, 6, t0);
        s.on_enter(&ev);
        s.on_move(&ev);
        assert!(s.tooltip().is_visible());
        assert_eq!(s.tooltip().text(), "00:50");
        assert_eq!(s.tooltip().origin(), (50 - 7 / 2, 4));

        s.on_leave(&PointerEvent::hover(50, 2, t0));
        assert!(!s.tooltip().is_visible());
    }

    #[test]
    fn tooltip_clamps_to_track_when_dragged_past_end() {
        let t0 = Instant::now();
        let mut s = slider(200);
        s.on_press(&PointerEvent::press(PointerButton::Primary, 190, 6, t0));
        s.on_move(&PointerEvent::drag(PointerButton::Primary, 250, 6, t0));
        assert_eq!(s.value(), RANGE_MAX);
        // clamped to column 199 of 200
        assert_eq!(s.tooltip().text(), "03:19");
    }

    #[test]
    fn no_tooltip_without_duration() {
        let t0 = Instant::now();
        let mut s = slider(200);
        s.set_position(0.0, Duration::ZERO, Duration::ZERO);
        s.on_enter(&PointerEvent::hover(50, 6, t0));
        assert!(!s.tooltip().is_visible());
    }

    #[test]
    fn tooltip_hides_when_pointer_leaves_through_it() {
        let t0 = Instant::now();
        let mut s = slider(200);
        s.on_enter(&PointerEvent::hover(50, 6, t0));
        s.on_tooltip_event(&PointerEvent::hover(50, 6, t0));
        assert!(s.tooltip().is_visible());
        s.on_tooltip_event(&PointerEvent::hover(50, 4, t0));
        assert!(!s.tooltip().is_visible());
    }

    #[test]
    fn hiding_slider_hides_tooltip() {
        let t0 = Instant::now();
        let mut s = slider(200);
        s.on_enter(&PointerEvent::hover(50, 6, t0));
        s.set_visible(false);
        assert!(!s.tooltip().is_visible());
    }

    #[test]
    fn vertical_maps_from_bottom() {
        let t0 = Instant::now();
        let mut s = SeekSlider::new(Orientation::Vertical);
        s.set_area(Rect::new(4, 0, 3, 10));
        s.set_position(0.0, Duration::ZERO, Duration::from_secs(100));
        s.on_press(&PointerEvent::press(PointerButton::Primary, 5, 0, t0));
        assert_eq!(s.value(), RANGE_MAX);
        s.on_move(&PointerEvent::drag(PointerButton::Primary, 5, 7, t0));
        assert_eq!(s.value(), 300);

        let g = s.geometry();
        assert_eq!(g.bar, Rect::new(5, 0, 1, 10));
        assert_eq!(g.fill, Some(Rect::new(5, 7, 1, 3)));
    }

    #[test]
    fn geometry_tracks_value_and_hover() {
        let t0 = Instant::now();
        let mut s = slider(20);
        s.set_position(0.5, Duration::ZERO, Duration::from_secs(60));
        let g = s.geometry();
        assert_eq!(g.bar, Rect::new(0, 6, 20, 1));
        assert_eq!(g.highlight, Some(Rect::new(0, 7, 20, 1)));
        assert_eq!(g.fill, Some(Rect::new(0, 6, 10, 1)));
        assert_eq!(g.handle, None);

        s.on_enter(&PointerEvent::hover(3, 6, t0));
        assert_eq!(s.geometry().handle, Some(Rect::new(10, 6, 1, 1)));

        s.set_position(1.0, Duration::ZERO, Duration::from_secs(60));
        assert_eq!(s.geometry().handle, Some(Rect::new(19, 6, 1, 1)));

        s.set_position(0.0, Duration::ZERO, Duration::from_secs(60));
        let g = s.geometry();
        assert_eq!(g.fill, None);
        assert_eq!(g.handle, None);
    }

    #[test]
    fn paints_the_visible_part_when_clipped() {
        let theme = Theme::with_capability(ThemeName::Mocha, ColorCapability::TrueColor);
        let mut s = slider(20);
        s.set_position(0.5, Duration::ZERO, Duration::from_secs(60));

        // buffer ends halfway through the track
        let mut buf = Buffer::empty(Rect::new(0, 0, 15, 10));
        s.paint(&mut buf, &theme);

        assert_eq!(buf.get(0, 6).symbol(), "▐");
        assert_eq!(buf.get(5, 7).symbol(), "▔");
        assert_ne!(buf.get(5, 6).bg, buf.get(12, 6).bg);
        assert_eq!(buf.get(14, 6).symbol(), " ");
    }

    #[test]
    fn paints_fill_and_handle() {
        let t0 = Instant::now();
        let theme = Theme::with_capability(ThemeName::Mocha, ColorCapability::TrueColor);
        let mut s = slider(20);
        s.set_position(0.5, Duration::ZERO, Duration::from_secs(60));
        s.on_enter(&PointerEvent::hover(3, 6, t0));

        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 10));
        s.paint(&mut buf, &theme);

        assert_eq!(buf.get(0, 6).symbol(), "▐");
        assert_eq!(buf.get(19, 6).symbol(), "▌");
        assert_eq!(buf.get(10, 6).symbol(), "●");
        assert_eq!(buf.get(5, 7).symbol(), "▔");

        let fill_bg = buf.get(5, 6).bg;
        let track_bg = buf.get(15, 6).bg;
        assert_ne!(fill_bg, track_bg);
    }
}
