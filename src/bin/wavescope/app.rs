//! App - owns the scene and connects it to the terminal

use std::{io, time::Duration};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, terminal,
};
use log::{debug, info};
use ratatui::DefaultTerminal;

use wavescope::{
    driver::{Clock, MonotonicClock, RunLoop, StopHandle, Tick},
    render::Raster,
    scene::{PointerButton, PointerClick},
    viewport::{Size, Viewport},
    Scene,
};

use super::ui;

/// Pixel size assumed for one terminal cell when the terminal won't say
const FALLBACK_CELL: Size = Size::new(8, 16);

pub struct App {
    scene: Scene,
    raster: Raster,
    clock: MonotonicClock,
    run_loop: RunLoop,
    viewport: Viewport,
    /// Pixels per terminal cell
    cell: Size,
    /// Raster or layout changed since the terminal was last drawn
    needs_present: bool,
}

impl App {
    pub fn new(scene: Scene, refresh_hz: f64) -> EyreResult<Self> {
        let canvas = scene.config().canvas;
        let mut raster =
            Raster::new(canvas.width, canvas.height).wrap_err("failed to allocate canvas")?;

        // First frame is drawn before the loop starts, at time zero
        scene.render(&mut raster);

        Ok(Self {
            scene,
            raster,
            clock: MonotonicClock::new(),
            run_loop: RunLoop::with_rate(refresh_hz),
            viewport: Viewport::fit(canvas, Size::default(), Size::default()),
            cell: FALLBACK_CELL,
            needs_present: true,
        })
    }

    /// Run the UI loop until quit
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> EyreResult<()> {
        self.refit()?;
        execute!(io::stdout(), EnableMouseCapture).wrap_err("failed to capture mouse")?;

        info!(
            "running {} at {:?} per refresh",
            self.scene.variant().name(),
            self.run_loop.interval()
        );

        let run_loop = self.run_loop.clone();
        let result = run_loop.run(|stop| self.tick(&mut terminal, stop));

        execute!(io::stdout(), DisableMouseCapture).wrap_err("failed to release mouse")?;
        let ticks = result?;
        info!("stopped after {ticks} refreshes");
        Ok(())
    }

    /// One host refresh: input, then time and sampling, then drawing
    fn tick(&mut self, terminal: &mut DefaultTerminal, stop: &StopHandle) -> EyreResult<()> {
        self.drain_events(stop)?;
        if stop.is_stopped() {
            return Ok(());
        }

        match self.scene.frame(self.clock.now_ms()) {
            Tick::Redraw => {
                self.scene.render(&mut self.raster);
                self.needs_present = true;
            }
            Tick::Primed | Tick::Idle => {}
        }

        if self.needs_present {
            terminal.draw(|frame| {
                ui::render(frame, &self.scene, &self.raster, &self.viewport, self.cell)
            })?;
            self.needs_present = false;
        }

        Ok(())
    }

    /// Handle every pending terminal event without blocking
    fn drain_events(&mut self, stop: &StopHandle) -> EyreResult<()> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, stop),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(_, _) => self.refit()?,
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent, stop: &StopHandle) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => stop.stop(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => stop.stop(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(click) = pointer_click(mouse) else {
            return;
        };

        if self.scene.click(click) {
            // Readout shows direction and speed
            self.needs_present = true;
        }
    }

    /// Re-fit the canvas to the current terminal size
    fn refit(&mut self) -> EyreResult<()> {
        let (client, cell) = client_metrics()?;
        let config = self.scene.config();

        self.viewport = Viewport::fit(config.canvas, client, config.margin);
        self.cell = cell;
        self.needs_present = true;

        debug!(
            "viewport refit: client {}x{}px, scale {}",
            client.width, client.height, self.viewport.scale
        );
        Ok(())
    }
}

/// A click completes when its button is released
fn pointer_click(mouse: MouseEvent) -> Option<PointerClick> {
    let MouseEventKind::Up(button) = mouse.kind else {
        return None;
    };

    Some(PointerClick {
        button: match button {
            MouseButton::Left => PointerButton::Left,
            MouseButton::Middle => PointerButton::Middle,
            MouseButton::Right => PointerButton::Right,
        },
        shift: mouse.modifiers.contains(KeyModifiers::SHIFT),
    })
}

/// Terminal size in pixels, and the pixel size of one cell
fn client_metrics() -> EyreResult<(Size, Size)> {
    match terminal::window_size() {
        Ok(size) if size.width > 0 && size.height > 0 && size.columns > 0 && size.rows > 0 => {
            let cell = Size::new(
                u32::from(size.width) / u32::from(size.columns),
                u32::from(size.height) / u32::from(size.rows),
            );
            Ok((Size::new(size.width.into(), size.height.into()), cell))
        }
        _ => {
            let (columns, rows) = terminal::size().wrap_err("failed to read terminal size")?;
            let client = Size::new(
                u32::from(columns) * FALLBACK_CELL.width,
                u32::from(rows) * FALLBACK_CELL.height,
            );
            Ok((client, FALLBACK_CELL))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, modifiers: KeyModifiers) -> MouseEvent {
        MouseEvent {
            kind,
            column: 10,
            row: 5,
            modifiers,
        }
    }

    #[test]
    fn clicks_fire_on_release() {
        let press = mouse(MouseEventKind::Down(MouseButton::Left), KeyModifiers::NONE);
        assert_eq!(pointer_click(press), None);

        let release = mouse(MouseEventKind::Up(MouseButton::Left), KeyModifiers::NONE);
        assert_eq!(pointer_click(release), Some(PointerClick::left()));

        let shifted = mouse(MouseEventKind::Up(MouseButton::Left), KeyModifiers::SHIFT);
        assert_eq!(pointer_click(shifted), Some(PointerClick::shift_left()));
    }

    #[test]
    fn drags_and_scrolls_are_not_clicks() {
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), KeyModifiers::NONE);
        let scroll = mouse(MouseEventKind::ScrollDown, KeyModifiers::NONE);
        assert_eq!(pointer_click(drag), None);
        assert_eq!(pointer_click(scroll), None);
    }
}
