//! C-ABI wrapper around `wordfeud-core`.
//!
//! # Overview
//! Lets any language with a C FFI decode Wordfeud API payloads it fetched
//! itself, without linking serde or reimplementing the lenient field rules.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - One `wf_*_parse` function per payload type, mirroring the core's
//!   `from_json` constructors.
//! - A single `FfiResult` envelope with `FfiDataTag` + `void* data` conveys
//!   success payloads and errors uniformly.
//! - The C caller owns all returned pointers and must call `wf_free_result`
//!   or `wf_free_string` to release them.

pub mod types;

use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::catch_unwind;

use tracing::error;
use tracing_subscriber::EnvFilter;
use wordfeud_core::{Invite, LastMove, RuleSet};

use types::*;

const DEFAULT_LOG_FILTER: &str = "wordfeud_core=info,wordfeud_ffi=info";

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Install a `tracing` subscriber writing to stderr, filtered by `RUST_LOG`.
///
/// Returns false if a global subscriber was already installed. Hosts that
/// bring their own subscriber should not call this.
#[unsafe(no_mangle)]
pub extern "C" fn wf_init_logging() -> bool {
    catch_unwind(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok()
    })
    .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Parse functions
// ---------------------------------------------------------------------------

/// Borrow a C string as UTF-8, or build the error result describing why not.
fn read_json<'a>(json: *const c_char) -> Result<&'a str, *mut FfiResult> {
    if json.is_null() {
        return Err(FfiResult::null_arg("json"));
    }
    unsafe { CStr::from_ptr(json) }
        .to_str()
        .map_err(|e| FfiResult::failure(FfiErrorCode::InvalidUtf8, &e.to_string()))
}

/// Decode an invite payload.
///
/// Returns a result with `data_tag = Invite` on success. An unknown ruleset
/// code is not an error here; check `FfiInvite::ruleset_known`.
#[unsafe(no_mangle)]
pub extern "C" fn wf_invite_parse(json: *const c_char) -> *mut FfiResult {
    catch_unwind(|| {
        let text = match read_json(json) {
            Ok(t) => t,
            Err(r) => return r,
        };
        match Invite::from_json(text) {
            Ok(invite) => FfiResult::ok_invite(&invite),
            Err(e) => FfiResult::from_error(&e),
        }
    })
    .unwrap_or_else(|_| {
        error!("panic in wf_invite_parse");
        FfiResult::failure(FfiErrorCode::Panic, "panic in wf_invite_parse")
    })
}

/// Decode a last-move payload.
///
/// Returns a result with `data_tag = LastMove` on success.
#[unsafe(no_mangle)]
pub extern "C" fn wf_last_move_parse(json: *const c_char) -> *mut FfiResult {
    catch_unwind(|| {
        let text = match read_json(json) {
            Ok(t) => t,
            Err(r) => return r,
        };
        match LastMove::from_json(text) {
            Ok(m) => FfiResult::ok_last_move(&m),
            Err(e) => FfiResult::from_error(&e),
        }
    })
    .unwrap_or_else(|_| {
        error!("panic in wf_last_move_parse");
        FfiResult::failure(FfiErrorCode::Panic, "panic in wf_last_move_parse")
    })
}

/// Human-readable name of a ruleset code, or null for an unknown code.
/// The caller must free the returned string with `wf_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn wf_ruleset_name(code: u8) -> *mut c_char {
    catch_unwind(|| match RuleSet::try_from(code) {
        Ok(rs) => to_c_string(&rs.to_string()),
        Err(_) => std::ptr::null_mut(),
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiResult` returned by any `wf_*_parse` function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn wf_free_result(result: *mut FfiResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        result.free_fields();
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn wf_free_string(s: *mut c_char) {
    let _ = catch_unwind(|| free_c_string(s));
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
