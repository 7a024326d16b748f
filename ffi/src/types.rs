//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type with C-compatible fields: `*mut c_char`
//! for strings, a pointer plus `u32` length for tile lists and a `u32` code
//! point for letters. Conversion and release helpers live here so `lib.rs` only
//! holds the `extern "C"` surface.

use std::ffi::{c_void, CString};
use std::os::raw::c_char;

use wordfeud_core::{DecodeError, Invite, LastMove, Tile};

/// Convert to an owned C string, dropping interior NULs.
pub(crate) fn to_c_string(s: &str) -> *mut c_char {
    CString::new(s.replace('\0', ""))
        .unwrap_or_default()
        .into_raw()
}

/// Release a C string from `to_c_string`. Null is ignored.
pub(crate) fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ---------------------------------------------------------------------------
// Payload types
// ---------------------------------------------------------------------------

/// An invite exposed to C.
///
/// `ruleset_known` is false when `ruleset_code` has no named ruleset.
#[repr(C)]
pub struct FfiInvite {
    pub id: u64,
    pub inviter: *mut c_char,
    pub ruleset_code: u8,
    pub ruleset_known: bool,
    pub board_type: *mut c_char,
}

impl FfiInvite {
    fn from_core(invite: &Invite) -> Self {
        FfiInvite {
            id: invite.id(),
            inviter: to_c_string(invite.inviter()),
            ruleset_code: invite.ruleset_code(),
            ruleset_known: invite.ruleset().is_ok(),
            board_type: to_c_string(invite.board_type()),
        }
    }

    fn free_fields(&self) {
        free_c_string(self.inviter);
        free_c_string(self.board_type);
    }
}

/// A placed tile exposed to C. `letter` is a Unicode scalar value.
#[repr(C)]
pub struct FfiTile {
    pub x: u8,
    pub y: u8,
    pub letter: u32,
    pub wildcard: bool,
}

impl From<&Tile> for FfiTile {
    fn from(t: &Tile) -> Self {
        FfiTile {
            x: t.x(),
            y: t.y(),
            letter: u32::from(t.letter()),
            wildcard: t.is_wildcard(),
        }
    }
}

/// A last move exposed to C. `tiles` is null when `tiles_len` is 0.
///
/// `tiles_error` is null unless the move matrix could not be read as tiles,
/// in which case it describes why and `tiles` is empty. The other fields are
/// filled in either way.
#[repr(C)]
pub struct FfiLastMove {
    pub move_type: *mut c_char,
    pub user_id: u64,
    pub main_word: *mut c_char,
    pub points: i32,
    pub tiles: *mut FfiTile,
    pub tiles_len: u32,
    pub tiles_error: *mut c_char,
}

/// Length of a list as seen by C, or `None` if it does not fit in a `u32`.
pub(crate) fn c_len(len: usize) -> Option<u32> {
    u32::try_from(len).ok()
}

impl FfiLastMove {
    fn from_core(m: &LastMove) -> Self {
        let (tiles, tiles_len, tiles_error) = match m.tiles() {
            Ok(tiles) => match c_len(tiles.len()) {
                Some(0) => (std::ptr::null_mut(), 0, std::ptr::null_mut()),
                Some(len) => {
                    let tiles: Box<[FfiTile]> = tiles.iter().map(FfiTile::from).collect();
                    (Box::into_raw(tiles) as *mut FfiTile, len, std::ptr::null_mut())
                }
                None => (
                    std::ptr::null_mut(),
                    0,
                    to_c_string(&format!("too many tiles: {}", tiles.len())),
                ),
            },
            Err(e) => (std::ptr::null_mut(), 0, to_c_string(&e.to_string())),
        };
        FfiLastMove {
            move_type: to_c_string(m.move_type()),
            user_id: m.user_id(),
            main_word: to_c_string(m.main_word()),
            points: m.points(),
            tiles,
            tiles_len,
            tiles_error,
        }
    }

    fn free_fields(&self) {
        free_c_string(self.move_type);
        free_c_string(self.main_word);
        free_c_string(self.tiles_error);
        if !self.tiles.is_null() && self.tiles_len > 0 {
            let slice = std::ptr::slice_from_raw_parts_mut(self.tiles, self.tiles_len as usize);
            drop(unsafe { Box::from_raw(slice) });
        }
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiResult`.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    Json = 1,
    UnknownRuleSet = 2,
    UnknownBoardType = 3,
    MalformedTile = 4,
    Panic = 5,
    NullArg = 6,
    InvalidUtf8 = 7,
}

impl From<&DecodeError> for FfiErrorCode {
    fn from(err: &DecodeError) -> Self {
        match err {
            DecodeError::Json(_) => FfiErrorCode::Json,
            DecodeError::UnknownRuleSet(_) => FfiErrorCode::UnknownRuleSet,
            DecodeError::UnknownBoardType(_) => FfiErrorCode::UnknownBoardType,
            DecodeError::MalformedTile { .. } => FfiErrorCode::MalformedTile,
        }
    }
}

/// Tag that tells `wf_free_result` what `FfiResult::data` points to.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiDataTag {
    None = 0,
    Invite = 1,
    LastMove = 2,
}

/// Result envelope for all parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the payload named by `data_tag`. On failure `data` is null and
/// `error_message` holds a readable description.
#[repr(C)]
pub struct FfiResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub data_tag: FfiDataTag,
    pub data: *mut c_void,
}

impl FfiResult {
    fn boxed(
        error_code: FfiErrorCode,
        error_message: *mut c_char,
        data_tag: FfiDataTag,
        data: *mut c_void,
    ) -> *mut Self {
        Box::into_raw(Box::new(FfiResult {
            error_code,
            error_message,
            data_tag,
            data,
        }))
    }

    pub(crate) fn ok_invite(invite: &Invite) -> *mut Self {
        let data = Box::into_raw(Box::new(FfiInvite::from_core(invite))) as *mut c_void;
        Self::boxed(FfiErrorCode::Ok, std::ptr::null_mut(), FfiDataTag::Invite, data)
    }

    pub(crate) fn ok_last_move(m: &LastMove) -> *mut Self {
        let data = Box::into_raw(Box::new(FfiLastMove::from_core(m))) as *mut c_void;
        Self::boxed(FfiErrorCode::Ok, std::ptr::null_mut(), FfiDataTag::LastMove, data)
    }

    pub(crate) fn from_error(err: &DecodeError) -> *mut Self {
        Self::failure(FfiErrorCode::from(err), &err.to_string())
    }

    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::failure(FfiErrorCode::NullArg, &format!("null argument: {name}"))
    }

    pub(crate) fn failure(code: FfiErrorCode, msg: &str) -> *mut Self {
        Self::boxed(code, to_c_string(msg), FfiDataTag::None, std::ptr::null_mut())
    }

    /// Release the message and payload. The envelope itself is freed by the
    /// caller.
    pub(crate) fn free_fields(&self) {
        free_c_string(self.error_message);
        if self.data.is_null() {
            return;
        }
        match self.data_tag {
            FfiDataTag::Invite => {
                let invite = unsafe { Box::from_raw(self.data as *mut FfiInvite) };
                invite.free_fields();
            }
            FfiDataTag::LastMove => {
                let m = unsafe { Box::from_raw(self.data as *mut FfiLastMove) };
                m.free_fields();
            }
            FfiDataTag::None => {}
        }
    }
}
