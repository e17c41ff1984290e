use crate::app::state::AppState;
use crate::ui::tui::Tui;
use crate::utils::input::{map_key, map_mouse};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};

pub fn run(app: &mut AppState) -> Result<()> {
    let mut tui = Tui::new()?;
    tui.enter()?;

    let res = run_frames(app, &mut tui);

    // restore the terminal even when a frame failed
    tui.exit()?;
    res
}

fn run_frames(app: &mut AppState, tui: &mut Tui) -> Result<()> {
    loop {
        let frame_start = Instant::now();

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(k) if k.kind != KeyEventKind::Release => {
                    app.handle_action(map_key(k));
                }
                Event::Mouse(m) => {
                    if let Some(ev) = map_mouse(m, Instant::now()) {
                        app.handle_pointer(ev);
                    }
                }
                Event::Resize(w, h) => log::debug!("resized to {w}x{h}"),
                _ => {}
            }
        }

        if app.should_quit {
            log::info!("bye");
            return Ok(());
        }

        app.tick(Instant::now());

        // draw
        tui.draw(app)?;

        // frame pacing
        let frame_dt = fps_to_dt(app.config.ui_fps);
        let elapsed = frame_start.elapsed();
        if elapsed < frame_dt {
            std::thread::sleep(frame_dt - elapsed);
        }
    }
}

fn fps_to_dt(fps: u32) -> Duration {
    let fps = fps.clamp(30, 60);
    Duration::from_millis((1000 / fps) as u64)
}
