use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

/// One wheel notch, in eighths of a degree (15 degrees per notch).
pub const WHEEL_NOTCH: i32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    TogglePlayPause,
    ToggleMute,
    ToggleMedia,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Press,
    Release,
    /// Plain motion when `button` is `None`, a drag otherwise.
    Move,
    Wheel(i32),
}

/// A pointer event in screen cells, stamped with the time it was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub button: Option<PointerButton>,
    pub column: u16,
    pub row: u16,
    pub at: Instant,
}

impl PointerEvent {
    pub fn press(button: PointerButton, column: u16, row: u16, at: Instant) -> Self {
        Self { kind: PointerKind::Press, button: Some(button), column, row, at }
    }

    pub fn release(button: PointerButton, column: u16, row: u16, at: Instant) -> Self {
        Self { kind: PointerKind::Release, button: Some(button), column, row, at }
    }

    pub fn drag(button: PointerButton, column: u16, row: u16, at: Instant) -> Self {
        Self { kind: PointerKind::Move, button: Some(button), column, row, at }
    }

    pub fn hover(column: u16, row: u16, at: Instant) -> Self {
        Self { kind: PointerKind::Move, button: None, column, row, at }
    }

    pub fn wheel(delta: i32, column: u16, row: u16, at: Instant) -> Self {
        Self { kind: PointerKind::Wheel(delta), button: None, column, row, at }
    }

    pub fn is_secondary(&self) -> bool {
        self.button == Some(PointerButton::Secondary)
    }
}

pub fn map_key(ev: KeyEvent) -> Action {
    if ev.modifiers.contains(KeyModifiers::CONTROL) {
        return match ev.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Action::Quit,
            _ => Action::None,
        };
    }

    match ev.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        KeyCode::Esc => Action::Quit,
        KeyCode::Char(' ') => Action::TogglePlayPause,
        KeyCode::Char('m') | KeyCode::Char('M') => Action::ToggleMute,
        KeyCode::Char('n') | KeyCode::Char('N') => Action::ToggleMedia,
        _ => Action::None,
    }
}

pub fn map_mouse(ev: MouseEvent, at: Instant) -> Option<PointerEvent> {
    let (kind, button) = match ev.kind {
        MouseEventKind::Down(b) => (PointerKind::Press, Some(map_button(b))),
        MouseEventKind::Up(b) => (PointerKind::Release, Some(map_button(b))),
        MouseEventKind::Drag(b) => (PointerKind::Move, Some(map_button(b))),
        MouseEventKind::Moved => (PointerKind::Move, None),
        MouseEventKind::ScrollUp => (PointerKind::Wheel(WHEEL_NOTCH), None),
        MouseEventKind::ScrollDown => (PointerKind::Wheel(-WHEEL_NOTCH), None),
        _ => return None,
    };
    Some(PointerEvent {
        kind,
        button,
        column: ev.column,
        row: ev.row,
        at,
    })
}

fn map_button(b: MouseButton) -> PointerButton {
    match b {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Right => PointerButton::Secondary,
    }
}
