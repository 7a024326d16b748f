//! The most recent move of a game.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::de::{null_as_default, object_from_str};
use crate::error::DecodeError;
use crate::tile::{Coordinate, Tile};

/// Wire shape of a last move. `move` is a nullable matrix of untyped rows.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawLastMove {
    #[serde(deserialize_with = "null_as_default")]
    move_type: String,
    #[serde(deserialize_with = "null_as_default")]
    user_id: u64,
    #[serde(rename = "move", deserialize_with = "null_as_default")]
    rows: Vec<Vec<Value>>,
    #[serde(deserialize_with = "null_as_default")]
    main_word: String,
    #[serde(deserialize_with = "null_as_default")]
    points: i32,
}

/// The last move made in a game.
///
/// Only moves that placed letters carry rows; passes, swaps and resignations
/// have none. Rows stay in wire form and `tiles()` decodes them on each call,
/// so a row the decoder does not understand leaves the other fields readable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastMove {
    move_type: String,
    user_id: u64,
    rows: Vec<Vec<Value>>,
    main_word: String,
    points: i32,
}

impl LastMove {
    /// Decode a last move from a JSON object.
    ///
    /// `move` must be `null` or an array of arrays; the rows themselves are
    /// checked by `tiles()`.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        let raw = match object_from_str::<RawLastMove>(json) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(error = %e, "rejected last move payload");
                return Err(e.into());
            }
        };
        debug!(
            move_type = %raw.move_type,
            user_id = raw.user_id,
            rows = raw.rows.len(),
            "decoded last move"
        );
        Ok(Self {
            move_type: raw.move_type,
            user_id: raw.user_id,
            rows: raw.rows,
            main_word: raw.main_word,
            points: raw.points,
        })
    }

    /// Kind of move, e.g. `move`, `pass`, `swap` or `resign`.
    pub fn move_type(&self) -> &str {
        &self.move_type
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// Tiles placed by the move, in payload order. Empty when `move` was
    /// `null` or absent.
    ///
    /// Fails on the first row that is not a tile.
    pub fn tiles(&self) -> Result<Vec<Tile>, DecodeError> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| Tile::from_row(i, row))
            .collect()
    }

    /// Number of rows in the move matrix.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn main_word(&self) -> &str {
        &self.main_word
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    /// Board positions touched by the move.
    pub fn letter_placements(&self) -> Result<Vec<Coordinate>, DecodeError> {
        Ok(self.tiles()?.iter().map(Tile::coordinate).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_move_is_empty() {
        let m = LastMove::from_json(
            r#"{"move_type":"pass","user_id":7,"move":null,"main_word":"","points":0}"#,
        )
        .unwrap();
        assert!(m.tiles().unwrap().is_empty());
        assert_eq!(m.user_id(), 7);
        assert_eq!(m.move_type(), "pass");
        assert_eq!(m.points(), 0);
    }

    #[test]
    fn absent_move_is_empty() {
        let m = LastMove::from_json(r#"{"move_type":"swap","user_id":3}"#).unwrap();
        assert!(m.tiles().unwrap().is_empty());
        assert_eq!(m.main_word(), "");
    }

    #[test]
    fn rows_become_tiles_in_order() {
        let m = LastMove::from_json(
            r#"{"move_type":"move","user_id":11,
                "move":[[7,7,"H",false],[8,7,"E",false],[9,7,"I",true]],
                "main_word":"HEI","points":12}"#,
        )
        .unwrap();
        assert_eq!(
            m.tiles().unwrap(),
            vec![
                Tile::new(7, 7, 'H', false),
                Tile::new(8, 7, 'E', false),
                Tile::new(9, 7, 'I', true),
            ]
        );
        assert_eq!(m.main_word(), "HEI");
        assert_eq!(m.points(), 12);
        assert_eq!(
            m.letter_placements().unwrap(),
            vec![
                Coordinate { x: 7, y: 7 },
                Coordinate { x: 8, y: 7 },
                Coordinate { x: 9, y: 7 },
            ]
        );
    }

    #[test]
    fn null_main_word_is_empty() {
        let m = LastMove::from_json(r#"{"move_type":"resign","main_word":null}"#).unwrap();
        assert_eq!(m.main_word(), "");
    }

    #[test]
    fn malformed_row_fails_only_tile_access() {
        let m = LastMove::from_json(
            r#"{"move_type":"move","user_id":7,"move":[[1,1,"A",false],[2,1,"B"]],"main_word":"AB","points":3}"#,
        )
        .unwrap();
        assert_eq!(m.move_type(), "move");
        assert_eq!(m.user_id(), 7);
        assert_eq!(m.main_word(), "AB");
        assert_eq!(m.points(), 3);
        assert_eq!(m.row_count(), 2);
        assert!(matches!(
            m.tiles().unwrap_err(),
            DecodeError::MalformedTile { row: 1, .. }
        ));
        assert!(m.letter_placements().is_err());
    }

    #[test]
    fn non_array_row_is_a_json_error() {
        let err = LastMove::from_json(r#"{"move":[{"x":1}]}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn truncated_json_is_a_decode_error() {
        assert!(matches!(
            LastMove::from_json("{").unwrap_err(),
            DecodeError::Json(_)
        ));
    }

    #[test]
    fn tile_access_is_repeatable() {
        let m = LastMove::from_json(r#"{"move":[[0,0,"Q",false],[1.5,0,"U",true]]}"#).unwrap();
        let first = m.tiles().unwrap();
        assert_eq!(first, m.tiles().unwrap());
        assert_eq!(first[1], Tile::new(1, 0, 'U', true));
    }
}
