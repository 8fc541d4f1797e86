//! Character-grid rasterizer for match snapshots

use game_core::Snapshot;

pub const BORDER: char = '─';
pub const CENTRE_LINE: char = '┊';
pub const PADDLE: char = '█';
pub const BALL: char = '●';

const HELP: &str = " W/S left  ↑/↓ right  ESC quit ";

/// A `width` x `height` grid of cells covering the whole court
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    #[cfg(test)]
    pub fn get(&self, col: i32, row: i32) -> Option<char> {
        self.index(col, row).map(|i| self.cells[i])
    }

    /// Write a cell; anything off the grid is dropped
    pub fn put(&mut self, col: i32, row: i32, ch: char) {
        if let Some(i) = self.index(col, row) {
            self.cells[i] = ch;
        }
    }

    pub fn row(&self, row: u16) -> String {
        let start = row as usize * self.width as usize;
        self.cells[start..start + self.width as usize].iter().collect()
    }

    /// Column for a court x in [-1, 1]
    pub fn to_col(&self, x: f32) -> i32 {
        ((x + 1.0) / 2.0 * (self.width.max(1) - 1) as f32).round() as i32
    }

    /// Row for a court y in [-1, 1] (y up, rows down)
    pub fn to_row(&self, y: f32) -> i32 {
        ((1.0 - y) / 2.0 * (self.height.max(1) - 1) as f32).round() as i32
    }

    /// Write `text` centred on `row`, truncated to the grid width
    pub fn text_centered(&mut self, row: i32, text: &str) {
        let len = text.chars().count().min(self.width as usize);
        let start = (self.width as usize - len) / 2;
        for (i, ch) in text.chars().take(len).enumerate() {
            self.put((start + i) as i32, row, ch);
        }
    }

    pub fn draw_snapshot(&mut self, snapshot: &Snapshot) {
        self.clear();
        if self.width == 0 || self.height == 0 {
            return;
        }
        self.draw_court();
        self.draw_paddle(-snapshot.paddle_plane_x, -1.0, snapshot.left_paddle_y, snapshot);
        self.draw_paddle(snapshot.paddle_plane_x, 1.0, snapshot.right_paddle_y, snapshot);
        self.put(
            self.to_col(snapshot.ball_pos.x),
            self.to_row(snapshot.ball_pos.y),
            BALL,
        );

        self.text_centered(0, &format!(" {} ", snapshot.score_text));
        if let Some(overlay) = &snapshot.overlay_text {
            self.text_centered(self.height as i32 / 2, &format!(" {} ", overlay));
        }
    }

    fn draw_court(&mut self) {
        let bottom = self.height as i32 - 1;
        for col in 0..self.width as i32 {
            self.put(col, 0, BORDER);
            self.put(col, bottom, BORDER);
        }

        let centre = self.to_col(0.0);
        for row in (1..bottom).step_by(2) {
            self.put(centre, row, CENTRE_LINE);
        }

        if self.width as usize > HELP.chars().count() + 4 {
            self.text_centered(bottom, HELP);
        }
    }

    /// `outward` is -1 for the left paddle, 1 for the right
    fn draw_paddle(&mut self, face_x: f32, outward: f32, y: f32, snapshot: &Snapshot) {
        let col = self.to_col(face_x + outward * snapshot.paddle_width / 2.0);
        let half = snapshot.paddle_height / 2.0;
        let top = self.to_row(y + half);
        let bottom = self.to_row(y - half);
        for row in top..=bottom {
            self.put(col, row, PADDLE);
        }
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Config, GameRng, InputSnapshot, Key, Match, Side};

    fn playing_snapshot() -> Snapshot {
        let mut game = Match::new(Config::new(), GameRng::new(3));
        game.tick(0.0, &InputSnapshot::with_keys(&[Key::Enter]));
        game.snapshot()
    }

    #[test]
    fn test_coordinate_mapping() {
        let canvas = Canvas::new(41, 21);
        assert_eq!(canvas.to_col(-1.0), 0);
        assert_eq!(canvas.to_col(0.0), 20);
        assert_eq!(canvas.to_col(1.0), 40);
        assert_eq!(canvas.to_row(1.0), 0);
        assert_eq!(canvas.to_row(0.0), 10);
        assert_eq!(canvas.to_row(-1.0), 20);
    }

    #[test]
    fn test_put_outside_grid_is_ignored() {
        let mut canvas = Canvas::new(4, 3);
        canvas.put(-1, 0, 'x');
        canvas.put(4, 0, 'x');
        canvas.put(0, 3, 'x');
        assert!((0..3).all(|row| canvas.row(row) == "    "));
    }

    #[test]
    fn test_text_centered_and_truncated() {
        let mut canvas = Canvas::new(9, 1);
        canvas.text_centered(0, "abc");
        assert_eq!(canvas.row(0), "   abc   ");
        canvas.text_centered(0, "0123456789AB");
        assert_eq!(canvas.row(0), "012345678");
    }

    #[test]
    fn test_draws_ball_paddles_and_score() {
        let snapshot = playing_snapshot();
        let mut canvas = Canvas::new(81, 25);

        canvas.draw_snapshot(&snapshot);

        let centre_row = canvas.to_row(0.0);
        assert_eq!(canvas.get(canvas.to_col(0.0), centre_row), Some(BALL));

        let left_col = canvas.to_col(-(snapshot.paddle_plane_x + snapshot.paddle_width / 2.0));
        let right_col = canvas.to_col(snapshot.paddle_plane_x + snapshot.paddle_width / 2.0);
        assert_eq!(canvas.get(left_col, centre_row), Some(PADDLE));
        assert_eq!(canvas.get(right_col, centre_row), Some(PADDLE));

        assert!(canvas.row(0).contains(" 0  0 "), "Score on the top border");
        assert_eq!(canvas.get(5, canvas.height() as i32 - 1), Some(BORDER));
    }

    #[test]
    fn test_paddle_follows_offset() {
        let mut game = Match::new(Config::new(), GameRng::new(3));
        game.place_paddle(Side::Right, 0.5);
        let snapshot = game.snapshot();
        let mut canvas = Canvas::new(81, 25);

        canvas.draw_snapshot(&snapshot);

        let col = canvas.to_col(snapshot.paddle_plane_x + snapshot.paddle_width / 2.0);
        assert_eq!(canvas.get(col, canvas.to_row(0.5)), Some(PADDLE));
        assert_ne!(canvas.get(col, canvas.to_row(0.0)), Some(PADDLE));
    }

    #[test]
    fn test_overlay_in_middle_row() {
        let snapshot = Match::new(Config::new(), GameRng::new(3)).snapshot();
        let mut canvas = Canvas::new(81, 25);

        canvas.draw_snapshot(&snapshot);

        assert!(canvas.row(12).contains("Press ENTER to start"));
    }

    #[test]
    fn test_tiny_canvas_does_not_panic() {
        let snapshot = playing_snapshot();
        for (w, h) in [(0, 0), (1, 1), (2, 1), (1, 3)] {
            let mut canvas = Canvas::new(w, h);
            canvas.draw_snapshot(&snapshot);
        }
    }
}
