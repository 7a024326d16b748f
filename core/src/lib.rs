//! Domain types for the Wordfeud API.
//!
//! # Overview
//! Decodes the JSON payloads the Wordfeud API returns for invitations and
//! last moves into immutable typed values. Fetching the payloads is the
//! caller's job; this crate performs no I/O.
//!
//! # Design
//! - Each payload type has a fallible `from_json` constructor and read-only
//!   getters. Values are never mutated after decoding.
//! - Decoding is lenient the way the upstream client is: unknown fields are
//!   ignored, missing or `null` fields take their zero value.
//! - Coded fields (ruleset, board type) stay in wire form and are decoded on
//!   access, so an unknown code only fails the caller that asks for it.
//! - Move rows stay in wire form and become tiles on each `tiles()` call,
//!   so a row the decoder does not understand only fails that call.

pub mod board;
mod de;
pub mod error;
pub mod invite;
pub mod last_move;
pub mod ruleset;
pub mod tile;

pub use board::{normal_layout, normal_square, render_board, BoardGrid, Square};
pub use error::DecodeError;
pub use invite::Invite;
pub use last_move::LastMove;
pub use ruleset::{BoardType, RuleSet};
pub use tile::{Coordinate, Tile, BOARD_SIZE};
