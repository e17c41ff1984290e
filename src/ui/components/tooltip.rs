use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

/// Floating one-line label owned by a slider. Its origin is in screen cells and may point
/// off-screen; painting pulls it back inside the frame.
#[derive(Debug, Clone, Default)]
pub struct Tooltip {
    text: String,
    origin: (i32, i32),
    visible: bool,
    frame: Option<Rect>,
}

impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.origin = (x, y);
    }

    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }

    /// Screen the label is painted into; hit-testing clamps the same way painting does.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = Some(frame);
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn width(&self) -> i32 {
        self.text.width() as i32 + 2
    }

    pub fn height(&self) -> i32 {
        1
    }

    /// Screen rectangle as painted, for hit-testing.
    pub fn rect(&self) -> Rect {
        match self.frame {
            Some(frame) => self.rect_in(frame),
            None => Rect::new(
                self.origin.0.max(0) as u16,
                self.origin.1.max(0) as u16,
                self.width() as u16,
                self.height() as u16,
            ),
        }
    }

    /// Where the label lands inside `frame`.
    pub fn rect_in(&self, frame: Rect) -> Rect {
        let w = (self.width() as u16).min(frame.width);
        let h = (self.height() as u16).min(frame.height);
        let max_x = (frame.x + frame.width).saturating_sub(w) as i32;
        let max_y = (frame.y + frame.height).saturating_sub(h) as i32;
        let x = self.origin.0.clamp(frame.x as i32, max_x.max(frame.x as i32)) as u16;
        let y = self.origin.1.clamp(frame.y as i32, max_y.max(frame.y as i32)) as u16;
        Rect::new(x, y, w, h)
    }

    pub fn paint(&self, buf: &mut Buffer, theme: &Theme) {
        if !self.visible {
            return;
        }
        let r = self.rect_in(buf.area);
        if r.width == 0 || r.height == 0 {
            return;
        }
        let style = Style::default().fg(theme.color_text()).bg(theme.color_surface());
        buf.set_style(r, style);
        for x in r.x..r.x + r.width {
            buf.get_mut(x, r.y).set_symbol(" ");
        }
        buf.set_stringn(r.x + 1, r.y, &self.text, r.width.saturating_sub(2) as usize, style);
    }
}
