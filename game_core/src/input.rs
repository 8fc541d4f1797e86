//! Logical keys and the per-frame snapshot of which ones are held

use crate::components::Side;

/// Keys the match reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    W,
    S,
    Enter,
    R,
    Escape,
}

impl Key {
    pub const ALL: [Key; 7] = [
        Key::Up,
        Key::Down,
        Key::W,
        Key::S,
        Key::Enter,
        Key::R,
        Key::Escape,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Which keys are currently held, plus the window-close flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    held: u8,
    pub close_requested: bool,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with the given keys held
    pub fn with_keys(keys: &[Key]) -> Self {
        let mut snapshot = Self::new();
        for &key in keys {
            snapshot.press(key);
        }
        snapshot
    }

    /// Nothing held, window closing
    pub fn closing() -> Self {
        Self {
            close_requested: true,
            ..Self::default()
        }
    }

    pub fn press(&mut self, key: Key) {
        self.held |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.held &= !key.bit();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held & key.bit() != 0
    }

    /// Escape or a close request ends the application from any phase
    pub fn wants_quit(&self) -> bool {
        self.close_requested || self.is_held(Key::Escape)
    }

    /// Paddle direction for a side: 1 = up, -1 = down, 0 when neither or both
    pub fn paddle_dir(&self, side: Side) -> i8 {
        let (up, down) = match side {
            Side::Left => (Key::W, Key::S),
            Side::Right => (Key::Up, Key::Down),
        };
        self.is_held(up) as i8 - self.is_held(down) as i8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputSnapshot::new();
        for key in Key::ALL {
            assert!(!input.is_held(key));
        }
        input.press(Key::Enter);
        assert!(input.is_held(Key::Enter));
        assert!(!input.is_held(Key::R));
        input.release(Key::Enter);
        assert!(!input.is_held(Key::Enter));
    }

    #[test]
    fn test_paddle_bindings_are_independent() {
        let input = InputSnapshot::with_keys(&[Key::W, Key::Down]);
        assert_eq!(input.paddle_dir(Side::Left), 1);
        assert_eq!(input.paddle_dir(Side::Right), -1);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let input = InputSnapshot::with_keys(&[Key::Up, Key::Down]);
        assert_eq!(input.paddle_dir(Side::Right), 0);
        assert_eq!(input.paddle_dir(Side::Left), 0);
    }

    #[test]
    fn test_wants_quit() {
        assert!(!InputSnapshot::new().wants_quit());
        assert!(InputSnapshot::with_keys(&[Key::Escape]).wants_quit());
        assert!(InputSnapshot::closing().wants_quit());
    }
}
