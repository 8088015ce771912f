//! Presentation surfaces for the fire raster
//!
//! The frame driver only talks to the [`Canvas`] trait. Two terminal-backed
//! canvases ship with the binary: an interactive full-screen one and a
//! headless one that prints the last frame.

use crate::fire::{Raster, FRAME_RATE};
use crate::terminal::{rgb, Terminal, HALF_BLOCK};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::debug;

/// Display surface driven by the frame driver
pub trait Canvas {
    fn initialize(&mut self, width: usize, height: usize, title: &str) -> io::Result<()>;

    /// Show a finished frame
    fn present(&mut self, raster: &Raster) -> io::Result<()>;

    /// Whether the user (or the canvas itself) wants to stop
    fn should_close(&mut self) -> io::Result<bool>;

    fn shutdown(&mut self) -> io::Result<()>;
}

/// Scale `raster` into the terminal back buffer, two pixel rows per cell
pub fn blit(raster: &Raster, term: &mut Terminal) {
    let (cols, rows) = term.size();
    let (cols, rows) = (cols as usize, rows as usize);
    if cols == 0 || rows == 0 || raster.width() == 0 || raster.height() == 0 {
        return;
    }

    let pixel_rows = rows * 2;
    for cy in 0..rows {
        let top = (cy * 2) * raster.height() / pixel_rows;
        let bottom = (cy * 2 + 1) * raster.height() / pixel_rows;
        for cx in 0..cols {
            let sx = cx * raster.width() / cols;
            term.set(
                cx as i32,
                cy as i32,
                HALF_BLOCK,
                Some(rgb(raster.get(sx, top))),
                Some(rgb(raster.get(sx, bottom))),
            );
        }
    }
}

fn not_initialized() -> io::Error {
    io::Error::new(io::ErrorKind::NotConnected, "canvas used before initialize")
}

/// Full-screen interactive canvas on the alternate screen
pub struct TerminalCanvas {
    term: Option<Terminal>,
    frame_time: Duration,
    last_present: Option<Instant>,
}

impl TerminalCanvas {
    pub fn new() -> Self {
        Self {
            term: None,
            frame_time: Duration::from_secs(1) / FRAME_RATE,
            last_present: None,
        }
    }
}

impl Default for TerminalCanvas {
    fn default() -> Self {
        Self::new()
    }
}

/// Quit on q, Esc or Ctrl-C
fn is_quit_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

impl Canvas for TerminalCanvas {
    fn initialize(&mut self, width: usize, height: usize, title: &str) -> io::Result<()> {
        let term = Terminal::new(true)?;
        term.set_title(title)?;
        term.clear_screen()?;
        debug!(width, height, cells = ?term.size(), "terminal canvas ready");
        self.term = Some(term);
        Ok(())
    }

    fn present(&mut self, raster: &Raster) -> io::Result<()> {
        let term = self.term.as_mut().ok_or_else(not_initialized)?;
        blit(raster, term);
        term.render()?;

        if let Some(last) = self.last_present {
            let elapsed = last.elapsed();
            if elapsed < self.frame_time {
                term.sleep(self.frame_time - elapsed);
            }
        }
        self.last_present = Some(Instant::now());
        Ok(())
    }

    fn should_close(&mut self) -> io::Result<bool> {
        let term = self.term.as_mut().ok_or_else(not_initialized)?;

        let mut close = false;
        while let Some(event) = term.poll_event()? {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    close |= is_quit_key(key.code, key.modifiers);
                }
                Event::Resize(cols, rows) => {
                    debug!(cols, rows, "terminal resized");
                    term.resize(cols, rows);
                    term.clear_screen()?;
                }
                _ => {}
            }
        }
        Ok(close)
    }

    fn shutdown(&mut self) -> io::Result<()> {
        if let Some(mut term) = self.term.take() {
            term.restore()?;
        }
        Ok(())
    }
}

/// Headless canvas: lets a fixed number of frames burn, then prints the last one
pub struct PrintCanvas<W: Write> {
    out: W,
    term: Terminal,
    frames: u64,
    presented: u64,
}

impl<W: Write> PrintCanvas<W> {
    /// `cols` x `rows` is the size of the printed picture in character cells
    pub fn new(out: W, frames: u64, cols: u16, rows: u16) -> Self {
        Self {
            out,
            term: Terminal::with_size(cols, rows),
            frames,
            presented: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Canvas for PrintCanvas<W> {
    fn initialize(&mut self, width: usize, height: usize, _title: &str) -> io::Result<()> {
        debug!(width, height, frames = self.frames, "print canvas ready");
        Ok(())
    }

    fn present(&mut self, raster: &Raster) -> io::Result<()> {
        self.presented += 1;
        if self.presented >= self.frames {
            blit(raster, &mut self.term);
        }
        Ok(())
    }

    fn should_close(&mut self) -> io::Result<bool> {
        Ok(self.presented >= self.frames)
    }

    fn shutdown(&mut self) -> io::Result<()> {
        if self.presented > 0 {
            self.term.write_ansi(&mut self.out)?;
        }
        Ok(())
    }
}
