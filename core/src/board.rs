//! The normal Wordfeud board and rendering placed tiles onto it.
//!
//! A rendered board is a 15×15 grid of characters indexed `[y][x]`. Empty
//! squares hold their premium code (`'0'` plain through `'4'` triple word);
//! occupied squares hold the tile's display letter.

use crate::tile::{Tile, BOARD_SIZE};

const SIZE: usize = BOARD_SIZE as usize;

/// A rendered board, rows first.
pub type BoardGrid = [[char; SIZE]; SIZE];

/// Premium squares of the normal board, one string per row.
const NORMAL_LAYOUT: [&str; SIZE] = [
    "200040010040002",
    "010002000200010",
    "003000101000300",
    "000200030002000",
    "400030101030004",
    "020002000200020",
    "001010000010100",
    "100300000003001",
    "001010000010100",
    "020002000200020",
    "400030101030004",
    "000200030002000",
    "003000101000300",
    "010002000200010",
    "200040010040002",
];

/// Bonus attached to a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    Plain,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Square {
    /// Code used for the square in a rendered grid.
    pub fn code(self) -> char {
        match self {
            Square::Plain => '0',
            Square::DoubleLetter => '1',
            Square::TripleLetter => '2',
            Square::DoubleWord => '3',
            Square::TripleWord => '4',
        }
    }

    fn from_code(c: char) -> Self {
        match c {
            '1' => Square::DoubleLetter,
            '2' => Square::TripleLetter,
            '3' => Square::DoubleWord,
            '4' => Square::TripleWord,
            _ => Square::Plain,
        }
    }
}

/// Premium square at column `x`, row `y` of the normal board, or `None` off
/// the board.
pub fn normal_square(x: u8, y: u8) -> Option<Square> {
    let row = NORMAL_LAYOUT.get(usize::from(y))?;
    row.chars().nth(usize::from(x)).map(Square::from_code)
}

/// The empty normal board as premium codes.
pub fn normal_layout() -> BoardGrid {
    let mut grid = [['0'; SIZE]; SIZE];
    for (cells, row) in grid.iter_mut().zip(NORMAL_LAYOUT) {
        for (cell, code) in cells.iter_mut().zip(row.chars()) {
            *cell = code;
        }
    }
    grid
}

/// The normal board with `tiles` placed on it. Wildcards show lowercase.
///
/// A later tile on the same square overwrites an earlier one. Tiles off the
/// board are skipped.
pub fn render_board(tiles: &[Tile]) -> BoardGrid {
    let mut grid = normal_layout();
    for tile in tiles {
        if let Some(cell) = grid
            .get_mut(usize::from(tile.y()))
            .and_then(|row| row.get_mut(usize::from(tile.x())))
        {
            *cell = tile.display_letter();
        }
    }
    grid
}
