use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;

use crate::board::Board;
use crate::cell::Cell;

const LIVE: char = 'O';
const DEAD: char = ' ';

/// Draws boards to a terminal.
///
/// The frame buffer string is kept between frames, so steady-state
/// rendering allocates nothing.
#[derive(Default)]
pub struct Renderer {
    fb: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The board as text: one line per row (`y` outer, `x` inner), one
    /// character per column.
    pub fn render(&mut self, board: &Board) -> &str {
        let size = board.size();

        self.fb.clear();
        self.fb.reserve(size as usize * (size as usize + 1));

        for y in 0..size {
            for x in 0..size {
                let glyph = if board.contains(Cell::new(x, y)) {
                    LIVE
                } else {
                    DEAD
                };

                self.fb.push(glyph);
            }

            self.fb.push('\n');
        }

        &self.fb
    }

    /// Clear the terminal, home the cursor, and draw the board.
    pub fn draw<W: Write>(&mut self, out: &mut W, board: &Board) -> io::Result<()> {
        self.render(board);

        queue!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
            style::Print(&self.fb)
        )?;

        out.flush()
    }
}
