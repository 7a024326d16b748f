//! Tiles placed on the board by a move.
//!
//! The API sends each placed tile as an untyped JSON array:
//! `[x, y, "letter", is_wildcard]`. `Tile::from_row` does the positional
//! decode and rejects rows that do not fit that shape.

use serde::Serialize;
use serde_json::Value;

use crate::error::DecodeError;

/// Width and height of a Wordfeud board.
pub const BOARD_SIZE: u8 = 15;

/// A single letter placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    x: u8,
    y: u8,
    letter: char,
    wildcard: bool,
}

/// Board position of a placed letter, column first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinate {
    pub x: u8,
    pub y: u8,
}

impl Tile {
    pub fn new(x: u8, y: u8, letter: char, wildcard: bool) -> Self {
        Self {
            x,
            y,
            letter,
            wildcard,
        }
    }

    /// Decode one row of a move matrix. `row` is the row's index and only
    /// appears in the error.
    ///
    /// Slots past the fourth are ignored.
    pub fn from_row(row: usize, values: &[Value]) -> Result<Self, DecodeError> {
        if values.len() < 4 {
            return Err(DecodeError::malformed_tile(
                row,
                format!("expected at least 4 values, got {}", values.len()),
            ));
        }
        let x = board_index(&values[0]).ok_or_else(|| {
            DecodeError::malformed_tile(row, format!("bad column {}", values[0]))
        })?;
        let y = board_index(&values[1])
            .ok_or_else(|| DecodeError::malformed_tile(row, format!("bad row {}", values[1])))?;
        let letter = values[2]
            .as_str()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| {
                DecodeError::malformed_tile(row, format!("bad letter {}", values[2]))
            })?;
        let wildcard = values[3].as_bool().ok_or_else(|| {
            DecodeError::malformed_tile(row, format!("bad wildcard flag {}", values[3]))
        })?;
        Ok(Self::new(x, y, letter, wildcard))
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    /// The letter as sent by the server.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// Whether the tile is a blank standing in for `letter`.
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            x: self.x,
            y: self.y,
        }
    }

    /// Letter for rendering: lowercase marks a wildcard.
    pub fn display_letter(&self) -> char {
        if self.wildcard {
            self.letter.to_lowercase().next().unwrap_or(self.letter)
        } else {
            self.letter
        }
    }
}

/// Accepts integers and floats inside the board; floats truncate toward zero.
fn board_index(value: &Value) -> Option<u8> {
    let n = match value.as_u64() {
        Some(n) => n,
        None => {
            let f = value.as_f64()?.trunc();
            if f < 0.0 {
                return None;
            }
            f as u64
        }
    };
    u8::try_from(n).ok().filter(|&i| i < BOARD_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(v: Value) -> Vec<Value> {
        v.as_array().unwrap().clone()
    }

    #[test]
    fn decodes_positional_row() {
        let tile = Tile::from_row(0, &row(json!([7, 3, "A", false]))).unwrap();
        assert_eq!(tile, Tile::new(7, 3, 'A', false));
        assert_eq!(tile.coordinate(), Coordinate { x: 7, y: 3 });
    }

    #[test]
    fn accepts_integral_floats_and_extra_slots() {
        let tile = Tile::from_row(0, &row(json!([14.0, 0.0, "Ø", true, "extra"]))).unwrap();
        assert_eq!(tile.x(), 14);
        assert_eq!(tile.y(), 0);
        assert_eq!(tile.letter(), 'Ø');
        assert!(tile.is_wildcard());
    }

    #[test]
    fn fractional_coordinates_truncate() {
        let tile = Tile::from_row(0, &row(json!([1.5, 2.9, "A", false]))).unwrap();
        assert_eq!((tile.x(), tile.y()), (1, 2));
        assert!(Tile::from_row(0, &row(json!([14.99, 0, "A", false]))).is_ok());
        assert!(Tile::from_row(0, &row(json!([15.01, 0, "A", false]))).is_err());
    }

    #[test]
    fn wildcard_renders_lowercase() {
        assert_eq!(Tile::new(0, 0, 'Å', true).display_letter(), 'å');
        assert_eq!(Tile::new(0, 0, 'Å', false).display_letter(), 'Å');
    }

    #[test]
    fn short_row_is_rejected() {
        let err = Tile::from_row(2, &row(json!([1, 2, "B"]))).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedTile { row: 2, .. }));
    }

    #[test]
    fn off_board_coordinate_is_rejected() {
        assert!(Tile::from_row(0, &row(json!([15, 0, "A", false]))).is_err());
        assert!(Tile::from_row(0, &row(json!([-1, 0, "A", false]))).is_err());
    }

    #[test]
    fn wrong_slot_types_are_rejected() {
        assert!(Tile::from_row(0, &row(json!([1, 1, "", false]))).is_err());
        assert!(Tile::from_row(0, &row(json!([1, 1, 65, false]))).is_err());
        assert!(Tile::from_row(0, &row(json!([1, 1, "A", "no"]))).is_err());
        assert!(Tile::from_row(0, &row(json!(["1", 1, "A", false]))).is_err());
    }
}
