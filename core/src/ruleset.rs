//! Game variants selected when an invitation is sent.
//!
//! The API encodes the ruleset as a small integer and the board layout as a
//! lowercase name. Both lookups are closed: anything outside the tables is a
//! `DecodeError` rather than a silent fallback.

use std::fmt;

use crate::error::DecodeError;

/// Named ruleset (dictionary and tile distribution) of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleSet {
    American,
    Norwegian,
    Dutch,
    Danish,
    Swedish,
    English,
    Spanish,
    French,
    SwedishStrict,
    German,
    NorwegianNynorsk,
    Finnish,
    Portuguese,
}

impl RuleSet {
    /// Every ruleset, ordered by wire code.
    pub const ALL: [RuleSet; 13] = [
        RuleSet::American,
        RuleSet::Norwegian,
        RuleSet::Dutch,
        RuleSet::Danish,
        RuleSet::Swedish,
        RuleSet::English,
        RuleSet::Spanish,
        RuleSet::French,
        RuleSet::SwedishStrict,
        RuleSet::German,
        RuleSet::NorwegianNynorsk,
        RuleSet::Finnish,
        RuleSet::Portuguese,
    ];

    /// The wire code for this ruleset.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for RuleSet {
    type Error = DecodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        RuleSet::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(DecodeError::UnknownRuleSet(code))
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleSet::American => "English (US)",
            RuleSet::Norwegian => "Norwegian (bokmål)",
            RuleSet::Dutch => "Dutch",
            RuleSet::Danish => "Danish",
            RuleSet::Swedish => "Swedish",
            RuleSet::English => "English (international)",
            RuleSet::Spanish => "Spanish",
            RuleSet::French => "French",
            RuleSet::SwedishStrict => "Swedish (strict)",
            RuleSet::German => "German",
            RuleSet::NorwegianNynorsk => "Norwegian (nynorsk)",
            RuleSet::Finnish => "Finnish",
            RuleSet::Portuguese => "Portuguese",
        };
        f.write_str(name)
    }
}

/// Layout of the premium squares on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardType {
    Normal,
    Random,
}

impl BoardType {
    pub fn as_str(self) -> &'static str {
        match self {
            BoardType::Normal => "normal",
            BoardType::Random => "random",
        }
    }
}

impl std::str::FromStr for BoardType {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(BoardType::Normal),
            "random" => Ok(BoardType::Random),
            other => Err(DecodeError::UnknownBoardType(other.to_string())),
        }
    }
}

impl fmt::Display for BoardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_table_order() {
        for (i, rs) in RuleSet::ALL.iter().enumerate() {
            assert_eq!(usize::from(rs.code()), i);
            assert_eq!(RuleSet::try_from(rs.code()).unwrap(), *rs);
        }
    }

    #[test]
    fn known_codes() {
        assert_eq!(RuleSet::try_from(0).unwrap(), RuleSet::American);
        assert_eq!(RuleSet::try_from(1).unwrap(), RuleSet::Norwegian);
        assert_eq!(RuleSet::try_from(12).unwrap(), RuleSet::Portuguese);
    }

    #[test]
    fn unknown_code_is_an_error() {
        let err = RuleSet::try_from(13).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownRuleSet(13)));
        assert!(matches!(
            RuleSet::try_from(u8::MAX).unwrap_err(),
            DecodeError::UnknownRuleSet(255)
        ));
    }

    #[test]
    fn board_type_parses_known_names() {
        assert_eq!("normal".parse::<BoardType>().unwrap(), BoardType::Normal);
        assert_eq!("random".parse::<BoardType>().unwrap(), BoardType::Random);
        assert_eq!(BoardType::Random.to_string(), "random");
    }

    #[test]
    fn board_type_rejects_unknown_name() {
        let err = "Normal".parse::<BoardType>().unwrap_err();
        assert!(matches!(err, DecodeError::UnknownBoardType(ref s) if s == "Normal"));
    }
}
