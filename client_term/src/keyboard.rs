//! Keyboard input handling
//!
//! Terminals report key presses, not key state. When the terminal also
//! reports releases the tracker follows press/release exactly; otherwise a
//! key counts as held for `HOLD_WINDOW` after its last press or repeat.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{InputSnapshot, Key};

/// Spans the usual auto-repeat delay, so a held key never stalls between
/// its first press and the first repeat
pub const HOLD_WINDOW: Duration = Duration::from_millis(500);

/// Map a terminal key to a logical match key
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::W),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::S),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Key::R),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

pub struct KeyTracker {
    reports_release: bool,
    last_down: [Option<Duration>; Key::ALL.len()],
    // Pressed since the last snapshot, so a quick tap is never lost
    tapped: InputSnapshot,
    close_requested: bool,
}

impl KeyTracker {
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            last_down: [None; Key::ALL.len()],
            tapped: InputSnapshot::new(),
            close_requested: false,
        }
    }

    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn handle(&mut self, event: &KeyEvent, now: Duration) {
        if event.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(event.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.request_close();
            return;
        }

        let Some(key) = map_key(event.code) else {
            return;
        };

        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_down[key as usize] = Some(now);
                self.tapped.press(key);
            }
            KeyEventKind::Release => self.last_down[key as usize] = None,
        }
    }

    /// Keys held at `now`; clears the taps seen since the previous call
    pub fn snapshot(&mut self, now: Duration) -> InputSnapshot {
        let mut snapshot = std::mem::take(&mut self.tapped);
        snapshot.close_requested = self.close_requested;

        for key in Key::ALL {
            let held = match self.last_down[key as usize] {
                Some(_) if self.reports_release => true,
                Some(at) => now.saturating_sub(at) <= HOLD_WINDOW,
                None => false,
            };
            if held {
                snapshot.press(key);
            }
        }
        snapshot
    }
}
