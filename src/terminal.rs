use crate::fire::Rgba;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{poll, read, Event},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, BeginSynchronizedUpdate, Clear, ClearType,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use std::io::{self, stdout, Write};
use std::time::Duration;

/// Upper half block: foreground paints the top pixel, background the bottom one
pub const HALF_BLOCK: char = '▀';

/// Terminal abstraction for rendering
pub struct Terminal {
    width: u16,
    height: u16,
    buffer: Vec<Vec<Cell>>,
    alternate_screen: bool,
}

/// A single cell in the terminal buffer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bg: None,
        }
    }
}

impl Terminal {
    /// Initialize the terminal for drawing
    pub fn new(alternate_screen: bool) -> io::Result<Self> {
        let (width, height) = size()?;

        if alternate_screen {
            enable_raw_mode()?;
            execute!(stdout(), EnterAlternateScreen, Hide)?;
        }

        let mut term = Self::with_size(width, height);
        term.alternate_screen = alternate_screen;
        Ok(term)
    }

    /// Off-screen buffer that never touches the tty (print mode)
    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            buffer: vec![vec![Cell::default(); width as usize]; height as usize],
            alternate_screen: false,
        }
    }

    /// Get terminal dimensions
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Reallocate the back buffer for new dimensions
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.buffer = vec![vec![Cell::default(); width as usize]; height as usize];
    }

    /// Clear the actual terminal
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(stdout(), Clear(ClearType::All))?;
        Ok(())
    }

    pub fn set_title(&self, title: &str) -> io::Result<()> {
        execute!(stdout(), SetTitle(title))?;
        Ok(())
    }

    /// Set a character at position with optional colors
    pub fn set(&mut self, x: i32, y: i32, ch: char, fg: Option<Color>, bg: Option<Color>) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.buffer[y as usize][x as usize] = Cell { ch, fg, bg };
        }
    }

    #[allow(dead_code)]
    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.buffer.get(y as usize)?.get(x as usize).copied()
    }

    /// Render the entire buffer to screen
    pub fn render(&self) -> io::Result<()> {
        let mut stdout = stdout().lock();
        queue!(stdout, BeginSynchronizedUpdate)?;

        for (y, row) in self.buffer.iter().enumerate() {
            queue!(stdout, MoveTo(0, y as u16))?;
            self.write_row(&mut stdout, row)?;
        }

        queue!(stdout, ResetColor, EndSynchronizedUpdate)?;
        stdout.flush()?;
        Ok(())
    }

    /// Write the buffer as plain ANSI lines (for print mode)
    pub fn write_ansi<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in &self.buffer {
            self.write_row(out, row)?;
            queue!(out, ResetColor, Print('\n'))?;
        }
        out.flush()
    }

    /// Emit a row, only switching colors when they change
    fn write_row<W: Write>(&self, out: &mut W, row: &[Cell]) -> io::Result<()> {
        let mut fg = None;
        let mut bg = None;

        for cell in row {
            if cell.fg != fg {
                match cell.fg {
                    Some(color) => queue!(out, SetForegroundColor(color))?,
                    None => queue!(out, SetForegroundColor(Color::Reset))?,
                }
                fg = cell.fg;
            }
            if cell.bg != bg {
                match cell.bg {
                    Some(color) => queue!(out, SetBackgroundColor(color))?,
                    None => queue!(out, SetBackgroundColor(Color::Reset))?,
                }
                bg = cell.bg;
            }
            queue!(out, Print(cell.ch))?;
        }
        Ok(())
    }

    /// Check for a terminal event (non-blocking)
    pub fn poll_event(&self) -> io::Result<Option<Event>> {
        if poll(Duration::from_millis(0))? {
            return Ok(Some(read()?));
        }
        Ok(None)
    }

    /// Sleep for specified duration
    pub fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }

    /// Put the tty back the way we found it. Safe to call more than once.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.alternate_screen {
            self.alternate_screen = false;
            execute!(stdout(), ResetColor, Show, LeaveAlternateScreen)?;
            disable_raw_mode()?;
        }
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Helper to create RGB colors
pub fn rgb(color: Rgba) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_ignores_out_of_bounds() {
        let mut term = Terminal::with_size(3, 2);
        term.set(-1, 0, 'x', None, None);
        term.set(3, 0, 'x', None, None);
        term.set(0, 2, 'x', None, None);
        term.set(2, 1, 'x', None, None);

        assert_eq!(term.get(2, 1).map(|c| c.ch), Some('x'));
        assert_eq!(term.get(0, 0), Some(Cell::default()));
        assert_eq!(term.get(3, 0), None);
    }

    #[test]
    fn resize_resets_cells() {
        let mut term = Terminal::with_size(3, 2);
        term.set(1, 1, 'x', None, None);
        term.resize(5, 4);
        assert_eq!(term.size(), (5, 4));
        assert_eq!(term.get(1, 1), Some(Cell::default()));
        assert!(term.get(4, 3).is_some());
    }

    #[test]
    fn ansi_output_has_one_line_per_row_and_truecolor() {
        let mut term = Terminal::with_size(2, 2);
        let red = rgb(Rgba::opaque(255, 0, 0));
        for y in 0..2 {
            for x in 0..2 {
                term.set(x, y, HALF_BLOCK, Some(red), Some(red));
            }
        }

        let mut out = Vec::new();
        term.write_ansi(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches('\n').count(), 2);
        assert_eq!(text.matches(HALF_BLOCK).count(), 4);
        assert!(text.contains("38;2;255;0;0"));
        assert!(text.contains("48;2;255;0;0"));
    }
}
