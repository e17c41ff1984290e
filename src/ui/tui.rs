use crate::app::state::AppState;
use crate::data::config::Config;
use crate::playback::transport::PlaybackState;
use crate::ui::components::range_control::{Orientation, PointerHandler, RangeControl};
use crate::utils::timefmt::clock;
use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event, terminal};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Terminal;
use std::io::{self, Stdout};

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 12;
const VERTICAL_SEEK_WIDTH: u16 = 3;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub full: Rect,
    pub title: Rect,
    pub seek: Rect,
    pub volume: Rect,
    pub status: Rect,
    pub footer: Rect,
}

/// Screen placement of every part. With a vertical seek slider the bar runs down the right edge.
pub fn compute_layout(size: Rect, config: &Config) -> UiLayout {
    let inner = size.inner(&Margin { horizontal: 1, vertical: 1 });
    let (vol_w, vol_h) = config.volume.geometry.size();
    let vertical = config.seek.orientation == Orientation::Vertical;
    let seek_rows = if vertical { 0 } else { 3 };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(seek_rows),
            Constraint::Length(1),
            Constraint::Length(vol_h),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let seek = if vertical {
        let top = rows[1].y;
        let bottom = rows[7].y;
        Rect::new(
            (inner.x + inner.width).saturating_sub(VERTICAL_SEEK_WIDTH),
            top,
            VERTICAL_SEEK_WIDTH.min(inner.width),
            bottom.saturating_sub(top),
        )
    } else {
        rows[2]
    };

    UiLayout {
        full: size,
        title: rows[0],
        seek,
        volume: Rect::new(rows[4].x, rows[4].y, vol_w.min(rows[4].width), rows[4].height),
        status: rows[5],
        footer: rows[7],
    }
}

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let stdout = io::stdout();
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn enter(&mut self) -> Result<()> {
        execute!(io::stdout(), EnterAlternateScreen, event::EnableMouseCapture)?;
        terminal::enable_raw_mode()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(io::stdout(), event::DisableMouseCapture, LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    pub fn draw(&mut self, app: &mut AppState) -> Result<UiLayout> {
        let mut layout_out = UiLayout::default();

        self.terminal.draw(|f| {
            let size = f.size();
            let base_style = Style::default().fg(app.theme.color_text()).bg(app.theme.color_base());
            f.render_widget(Clear, size);
            f.render_widget(Block::default().style(base_style), size);

            // small terminal: keep stable, park the sliders off-screen
            if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
                layout_out.full = size;
                app.apply_layout(&layout_out);
                f.render_widget(
                    Paragraph::new("Terminal too small").style(Style::default().fg(app.theme.color_subtext())),
                    size,
                );
                return;
            }

            let l = compute_layout(size, &app.config);
            layout_out = l;
            app.apply_layout(&l);

            f.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("media-sliders", Style::default().fg(app.theme.color_accent()).add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {}", app.theme.name.as_label()), Style::default().fg(app.theme.color_subtext())),
                ])),
                l.title,
            );

            f.render_widget(Paragraph::new(status_line(app)).style(Style::default().fg(app.theme.color_text())), l.status);

            let footer = match &app.toast {
                Some((msg, _)) => Line::styled(msg.clone(), Style::default().fg(app.theme.color_accent())),
                None => Line::styled(
                    "q quit  space play/pause  m mute  n load/unload  drag/wheel the sliders",
                    Style::default().fg(app.theme.color_subtext()),
                ),
            };
            f.render_widget(Paragraph::new(footer), l.footer);

            let buf = f.buffer_mut();
            app.seek.paint(buf, &app.theme);
            app.volume.paint(buf, &app.theme);
            app.seek.paint_overlay(buf, &app.theme);
            app.volume.paint_overlay(buf, &app.theme);
        })?;

        Ok(layout_out)
    }
}

fn status_line(app: &AppState) -> String {
    let t = &app.transport;
    if !t.is_loaded() {
        return format!("no media   vol {}%", app.volume.value());
    }
    let state = match t.state() {
        PlaybackState::Playing => "playing",
        PlaybackState::Paused => "paused",
        PlaybackState::Stopped => "stopped",
    };
    let mute = if t.is_muted() { "  [muted]" } else { "" };
    format!(
        "{} / {}   {}   vol {}%{}",
        clock(t.position()),
        clock(t.duration()),
        state,
        t.volume(),
        mute
    )
}
