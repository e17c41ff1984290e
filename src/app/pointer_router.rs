use crate::ui::components::range_control::{contains, PointerHandler};
use crate::utils::input::{PointerButton, PointerEvent, PointerKind};

/// Delivers pointer events to widgets the way a window system does: the widget that takes
/// a press grabs the pointer until that button is released, and enter/leave follow hover.
#[derive(Debug, Default)]
pub struct PointerRouter {
    grab: Option<(usize, Option<PointerButton>)>,
    hovered: Option<usize>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grabbed(&self) -> Option<usize> {
        self.grab.map(|(i, _)| i)
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn dispatch(&mut self, widgets: &mut [&mut dyn PointerHandler], ev: &PointerEvent) {
        match ev.kind {
            PointerKind::Press => {
                if self.grab.is_some() {
                    return;
                }
                let Some(i) = hit(widgets, ev) else {
                    return;
                };
                if widgets[i].on_press(ev) {
                    self.grab = Some((i, ev.button));
                }
            }
            PointerKind::Release => {
                let Some((i, button)) = self.grab else {
                    return;
                };
                if button != ev.button {
                    return;
                }
                self.grab = None;
                widgets[i].on_release(ev);
                self.update_hover(widgets, ev);
            }
            PointerKind::Move => {
                if let Some((i, _)) = self.grab {
                    widgets[i].on_move(ev);
                    return;
                }
                for w in widgets.iter_mut() {
                    if w.tooltip_rect().is_some_and(|r| contains(r, ev.column, ev.row)) {
                        w.on_tooltip_event(ev);
                    }
                }
                self.update_hover(widgets, ev);
                if let Some(i) = self.hovered {
                    widgets[i].on_move(ev);
                }
            }
            PointerKind::Wheel(delta) => {
                if let Some(i) = self.grabbed().or_else(|| hit(widgets, ev)) {
                    widgets[i].on_wheel(ev, delta);
                }
            }
        }
    }

    fn update_hover(&mut self, widgets: &mut [&mut dyn PointerHandler], ev: &PointerEvent) {
        let now = hit(widgets, ev);
        if now == self.hovered {
            return;
        }
        if let Some(prev) = self.hovered {
            widgets[prev].on_leave(ev);
        }
        if let Some(next) = now {
            widgets[next].on_enter(ev);
        }
        self.hovered = now;
    }
}

fn hit(widgets: &[&mut dyn PointerHandler], ev: &PointerEvent) -> Option<usize> {
    widgets.iter().position(|w| w.contains_pointer(ev.column, ev.row))
}
