//! Pending game invitations.

use serde::Deserialize;
use tracing::debug;

use crate::de::{null_as_default, object_from_str};
use crate::error::DecodeError;
use crate::ruleset::{BoardType, RuleSet};

/// Wire shape of an invite.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawInvite {
    #[serde(deserialize_with = "null_as_default")]
    id: u64,
    #[serde(deserialize_with = "null_as_default")]
    inviter: String,
    #[serde(deserialize_with = "null_as_default")]
    ruleset: u8,
    #[serde(deserialize_with = "null_as_default")]
    board_type: String,
}

/// An invitation to a new game, as listed by the API.
///
/// The ruleset and board type are kept in their wire form; `ruleset()` and
/// `board()` decode them on each call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invite {
    id: u64,
    inviter: String,
    ruleset: u8,
    board_type: String,
}

impl Invite {
    /// Decode an invite from a JSON object.
    ///
    /// Missing fields are left at their zero value.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        match object_from_str::<RawInvite>(json) {
            Ok(raw) => {
                debug!(id = raw.id, inviter = %raw.inviter, "decoded invite");
                Ok(Self {
                    id: raw.id,
                    inviter: raw.inviter,
                    ruleset: raw.ruleset,
                    board_type: raw.board_type,
                })
            }
            Err(e) => {
                debug!(error = %e, "rejected invite payload");
                Err(e.into())
            }
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Display name of the inviting player.
    pub fn inviter(&self) -> &str {
        &self.inviter
    }

    pub fn ruleset(&self) -> Result<RuleSet, DecodeError> {
        RuleSet::try_from(self.ruleset)
    }

    /// The ruleset code as received.
    pub fn ruleset_code(&self) -> u8 {
        self.ruleset
    }

    /// The board type name as received.
    pub fn board_type(&self) -> &str {
        &self.board_type
    }

    pub fn board(&self) -> Result<BoardType, DecodeError> {
        self.board_type.parse()
    }
}
