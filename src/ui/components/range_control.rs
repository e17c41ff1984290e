use crate::ui::theme::Theme;
use crate::utils::input::PointerEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use std::ops::RangeInclusive;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// The value side of a slider: an integer clamped to a fixed range.
pub trait RangeControl {
    fn value(&self) -> i32;
    fn set_value(&mut self, value: i32);
    fn range(&self) -> RangeInclusive<i32>;
    fn orientation(&self) -> Orientation;

    fn clamp_value(&self, value: i32) -> i32 {
        let r = self.range();
        value.clamp(*r.start(), *r.end())
    }
}

/// The input and paint side of a slider. Pointer coordinates are screen cells; handlers
/// translate them through `area`.
pub trait PointerHandler {
    fn area(&self) -> Rect;
    fn set_area(&mut self, area: Rect);
    /// Whole screen, for widgets that float parts outside their own area.
    fn set_frame(&mut self, _frame: Rect) {}

    fn contains_pointer(&self, column: u16, row: u16) -> bool {
        contains(self.area(), column, row)
    }

    /// Returns false when the press is not taken, so the router does not grab.
    fn on_press(&mut self, ev: &PointerEvent) -> bool;
    fn on_move(&mut self, ev: &PointerEvent);
    fn on_release(&mut self, ev: &PointerEvent);
    fn on_wheel(&mut self, ev: &PointerEvent, delta: i32);
    fn on_enter(&mut self, _ev: &PointerEvent) {}
    fn on_leave(&mut self, _ev: &PointerEvent) {}

    /// Area of the floating tooltip, when one is showing.
    fn tooltip_rect(&self) -> Option<Rect> {
        None
    }
    /// Motion or leave seen by the tooltip rather than the slider.
    fn on_tooltip_event(&mut self, _ev: &PointerEvent) {}

    fn tick(&mut self, _now: Instant) {}
    fn paint(&self, buf: &mut Buffer, theme: &Theme);
    /// Floating parts drawn after every widget.
    fn paint_overlay(&self, _buf: &mut Buffer, _theme: &Theme) {}
}

pub fn contains(r: Rect, column: u16, row: u16) -> bool {
    column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
}

/// Absolute pixel-to-value mapping: `pos` along a track of length `span`, rounded to the
/// nearest step. With `upside_down` the maximum sits at position 0.
pub fn value_from_position(min: i32, max: i32, pos: i32, span: i32, upside_down: bool) -> i32 {
    if span <= 0 || pos <= 0 {
        return if upside_down { max } else { min };
    }
    if pos >= span {
        return if upside_down { min } else { max };
    }

    let range = (max - min) as i64;
    let pos = pos as i64;
    let span = span as i64;
    let tmp: i64 = if span > range {
        (2 * pos * range + span) / (2 * span)
    } else {
        let div = range / span;
        let modulo = range % span;
        pos * div + (2 * pos * modulo + span) / (2 * span)
    };
    let tmp = tmp as i32;

    if upside_down {
        max - tmp
    } else {
        min + tmp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_midpoint_and_ends() {
        assert_eq!(value_from_position(0, 1000, 100, 200, false), 500);
        assert_eq!(value_from_position(0, 1000, 0, 200, false), 0);
        assert_eq!(value_from_position(0, 1000, -7, 200, false), 0);
        assert_eq!(value_from_position(0, 1000, 200, 200, false), 1000);
        assert_eq!(value_from_position(0, 1000, 999, 200, false), 1000);
    }

    #[test]
    fn short_range_over_long_span_rounds() {
        // 10 values over 40 cells: 3/40 of the way is 0.75 -> 1
        assert_eq!(value_from_position(0, 10, 3, 40, false), 1);
        assert_eq!(value_from_position(0, 10, 1, 40, false), 0);
    }

    #[test]
    fn upside_down_mirrors() {
        assert_eq!(value_from_position(0, 1000, 0, 10, true), 1000);
        assert_eq!(value_from_position(0, 1000, 10, 10, true), 0);
        assert_eq!(value_from_position(0, 1000, 3, 10, true), 700);
    }

    #[test]
    fn mapped_value_never_leaves_range() {
        for span in 1..60 {
            for pos in -5..span + 5 {
                let v = value_from_position(0, 1000, pos, span, false);
                assert!((0..=1000).contains(&v), "pos {pos} span {span} -> {v}");
            }
        }
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(2, 3, 4, 1);
        assert!(contains(r, 2, 3));
        assert!(contains(r, 5, 3));
        assert!(!contains(r, 6, 3));
        assert!(!contains(r, 2, 4));
    }
}
