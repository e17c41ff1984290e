use crate::data::gradient_config::GradientConfig;
use crate::render::volume_sprite::{SoundGeometry, VolumeSprite};
use crate::ui::components::range_control::{Orientation, PointerHandler, RangeControl};
use crate::ui::components::tooltip::Tooltip;
use crate::ui::theme::Theme;
use crate::utils::input::{PointerEvent, WHEEL_NOTCH};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};
use std::ops::RangeInclusive;

pub const SOUND_MIN: i32 = 0;
pub const SOUND_MAX: i32 = 200;

/// Raw output volume that corresponds to 200%; the configured step is expressed against it.
pub const VOLUME_MAX_RAW: i32 = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeEvent {
    Pressed,
    Moved(i32),
    Released,
    /// The stored value changed, on any path including the out-of-bounds revert.
    ValueChanged(i32),
}

#[derive(Debug)]
pub struct SoundSlider {
    area: Rect,
    value: i32,
    max: i32,
    step: i32,
    sliding: bool,
    mouse_outside: bool,
    old_value: i32,
    muted: bool,
    hovered: bool,
    sprite: VolumeSprite,
    tooltip: Tooltip,
    events: Vec<VolumeEvent>,
}

impl SoundSlider {
    /// `step_source` is the raw wheel step, `extended` doubles the top of the range to 400%,
    /// `colors` is the `r;g;b;...` list for the four gradient stops.
    pub fn new(step_source: i32, extended: bool, colors: &str, geometry: SoundGeometry) -> Self {
        let step = (step_source * 100 / VOLUME_MAX_RAW).max(1);
        let max = if extended { 2 * SOUND_MAX } else { SOUND_MAX };
        let sprite = VolumeSprite::new(geometry, &GradientConfig::from_color_list(colors));
        log::debug!("volume slider: 0..={max}%, wheel step {step}%");

        Self {
            area: Rect::default(),
            value: SOUND_MIN,
            max,
            step,
            sliding: false,
            mouse_outside: false,
            old_value: SOUND_MIN,
            muted: false,
            hovered: false,
            sprite,
            tooltip: Tooltip::new(),
            events: Vec::new(),
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_sliding(&self) -> bool {
        self.sliding
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    pub fn geometry(&self) -> &SoundGeometry {
        self.sprite.geometry()
    }

    pub fn size_hint(&self) -> (u16, u16) {
        self.geometry().size()
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn drain_events(&mut self) -> Vec<VolumeEvent> {
        std::mem::take(&mut self.events)
    }

    fn local(&self, ev: &PointerEvent) -> (i32, i32) {
        (ev.column as i32 - self.area.x as i32, ev.row as i32 - self.area.y as i32)
    }

    fn value_for(&self, track_x: i32) -> i32 {
        let len = self.geometry().track_length.max(1) as i32;
        (track_x * self.max + len / 2) / len
    }

    fn change_value(&mut self, track_x: i32) {
        self.set_value(self.value_for(track_x));
    }

    fn in_hit_rect(&self, x: i32, y: i32) -> bool {
        let g = self.geometry();
        let left = g.padding_left as i32 - g.overshoot_x as i32;
        let right = g.padding_left as i32 + g.track_length as i32 + g.overshoot_x as i32;
        let top = -(g.overshoot_top as i32);
        let bottom = g.height as i32 + g.overshoot_bottom as i32;
        x >= left && x < right && y >= top && y < bottom
    }

    /// Right edge of the filled part of the wedge, in sprite columns.
    pub fn fill_offset(&self) -> u32 {
        let g = self.geometry();
        let len = g.track_length.max(1) as i32;
        ((len * self.value + self.max / 2) / self.max + g.padding_left as i32).max(0) as u32
    }
}

impl RangeControl for SoundSlider {
    fn value(&self) -> i32 {
        self.value
    }

    fn set_value(&mut self, value: i32) {
        let v = self.clamp_value(value);
        if v != self.value {
            self.value = v;
            self.events.push(VolumeEvent::ValueChanged(v));
        }
    }

    fn range(&self) -> RangeInclusive<i32> {
        SOUND_MIN..=self.max
    }

    fn orientation(&self) -> Orientation {
        Orientation::Horizontal
    }
}

impl PointerHandler for SoundSlider {
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
        if ev.is_secondary() {
            return false;
        }
        self.sliding = true;
        self.mouse_outside = false;
        self.old_value = self.value;
        self.tooltip.hide();
        self.events.push(VolumeEvent::Pressed);

        let (x, _) = self.local(ev);
        self.change_value(x - self.geometry().padding_left as i32);
        self.events.push(VolumeEvent::Moved(self.value));
        true
    }

    fn on_move(&mut self, ev: &PointerEvent) {
        let (x, y) = self.local(ev);
        let track_x = x - self.geometry().padding_left as i32;

        if self.sliding {
            if !self.in_hit_rect(x, y) {
                if !self.mouse_outside {
                    self.set_value(self.old_value);
                }
                self.mouse_outside = true;
            } else {
                self.mouse_outside = false;
                self.change_value(track_x);
                self.events.push(VolumeEvent::Moved(self.value));
            }
            return;
        }

        let preview = self.value_for(track_x).clamp(SOUND_MIN, self.max);
        self.tooltip.set_text(format!("{preview}  %"));
        self.tooltip
            .move_to(ev.column as i32 - self.tooltip.width() / 2, self.area.y as i32 - self.tooltip.height());
        if self.hovered {
            self.tooltip.show();
        }
    }

    fn on_release(&mut self, ev: &PointerEvent) {
        if ev.is_secondary() {
            return;
        }
        if !self.mouse_outside && self.value != self.old_value {
            self.events.push(VolumeEvent::Released);
            self.events.push(VolumeEvent::Moved(self.value));
        }
        self.sliding = false;
        self.mouse_outside = false;
    }

    fn on_wheel(&mut self, _ev: &PointerEvent, delta: i32) {
        self.set_value(self.value + delta / WHEEL_NOTCH * self.step);
        self.events.push(VolumeEvent::Released);
        self.events.push(VolumeEvent::Moved(self.value));
    }

    fn on_enter(&mut self, _ev: &PointerEvent) {
        self.hovered = true;
    }

    fn on_leave(&mut self, _ev: &PointerEvent) {
        self.hovered = false;
        self.tooltip.hide();
    }

    fn tooltip_rect(&self) -> Option<Rect> {
        self.tooltip.is_visible().then(|| self.tooltip.rect())
    }

    fn on_tooltip_event(&mut self, ev: &PointerEvent) {
        if !self.contains_pointer(ev.column, ev.row) {
            self.tooltip.hide();
        }
    }

    fn paint(&self, buf: &mut Buffer, theme: &Theme) {
        let (w, h) = self.size_hint();
        let area = Rect::new(self.area.x, self.area.y, w.min(self.area.width), h.min(self.area.height))
            .intersection(buf.area);
        if area.width == 0 || area.height == 0 {
            return;
        }

        // empty track first, so the unfilled cutout shows through the frame
        buf.set_style(area, Style::default().bg(theme.color_surface()));
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                buf.get_mut(x, y).set_symbol(" ");
            }
        }

        let offset = self.fill_offset();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                let sx = (x - self.area.x) as u32;
                let sy = (y - self.area.y) as u32;
                if sx < offset {
                    if let Some(c) = self.sprite.fill_pixel(self.muted, sx, sy) {
                        buf.get_mut(x, y).set_bg(theme.color(c));
                    }
                }
                if !self.sprite.in_cutout(sx, sy) {
                    buf.get_mut(x, y).set_bg(theme.color_base());
                }
            }
        }

        let text_area = Rect::new(area.x, area.y, self.geometry().text_width.min(area.width), 1);
        Paragraph::new(Line::from(format!("{}%", self.value)))
            .style(Style::default().fg(theme.color_subtext()))
            .alignment(Alignment::Right)
            .render(text_area, buf);
    }

    fn paint_overlay(&self, buf: &mut Buffer, theme: &Theme) {
        self.tooltip.paint(buf, theme);
    }
}
