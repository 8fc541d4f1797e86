//! Crossterm-backed input, renderer and terminal lifetime

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute, queue,
    style::Print,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use game_core::driver::{InputSource, Renderer};
use game_core::{InputSnapshot, Snapshot};

use crate::canvas::Canvas;
use crate::keyboard::KeyTracker;

/// Raw mode plus alternate screen; restored on drop
pub struct TerminalSession {
    keyboard_enhanced: bool,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on, dropping the session undoes whatever succeeded
        let mut session = Self {
            keyboard_enhanced: false,
        };

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;

        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                )
            )?;
            session.keyboard_enhanced = true;
        }
        log::info!(
            "Terminal ready, key release events: {}",
            session.keyboard_enhanced
        );

        Ok(session)
    }

    /// Whether the terminal tells us when keys go up
    pub fn reports_key_release(&self) -> bool {
        self.keyboard_enhanced
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.keyboard_enhanced {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(stdout, LeaveAlternateScreen, Show);
        if let Err(err) = disable_raw_mode() {
            log::warn!("Failed to leave raw mode: {}", err);
        }
    }
}

pub struct TermInput {
    tracker: KeyTracker,
    start: Instant,
}

impl TermInput {
    pub fn new(reports_key_release: bool) -> Self {
        Self {
            tracker: KeyTracker::new(reports_key_release),
            start: Instant::now(),
        }
    }

    fn drain_events(&mut self, now: Duration) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.tracker.handle(&key, now);
            }
        }
        Ok(())
    }
}

impl InputSource for TermInput {
    fn poll(&mut self) -> InputSnapshot {
        let now = self.start.elapsed();
        if let Err(err) = self.drain_events(now) {
            log::error!("Lost terminal input: {}", err);
            self.tracker.request_close();
        }
        self.tracker.snapshot(now)
    }
}

pub struct TermRenderer {
    out: Stdout,
    canvas: Canvas,
}

impl TermRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            canvas: Canvas::new(0, 0),
        }
    }
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TermRenderer {
    type Error = io::Error;

    fn draw(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        // Leave the last column free so the bottom-right cell never scrolls
        let width = cols.saturating_sub(1);
        if width != self.canvas.width() || rows != self.canvas.height() {
            log::debug!("Resizing canvas to {}x{}", width, rows);
            self.canvas = Canvas::new(width, rows);
        }

        self.canvas.draw_snapshot(snapshot);
        for row in 0..self.canvas.height() {
            queue!(self.out, MoveTo(0, row), Print(self.canvas.row(row)))?;
        }
        self.out.flush()
    }
}
