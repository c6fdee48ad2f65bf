// This file is part of the chessrules library.
// Copyright (C) 2026 The chessrules developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Custom starting positions.
//!
//! A [`Setup`] is not necessarily playable. It is checked when a game is
//! started from it, see [`GameState::from_setup`](crate::GameState::from_setup).
//!
//! ```
//! use chessrules::{Setup, SetupErrorKinds, Side};
//!
//! let setup: Setup = "4k3/8/8/8/8/8/8/R3K3 l".parse()?;
//! assert_eq!(setup.turn, Side::Light);
//! assert!(setup.validate().is_ok());
//!
//! let setup: Setup = "8/8/8/8/8/8/8/R3K3 d".parse()?;
//! let err = setup.validate().unwrap_err();
//! assert_eq!(err.kinds(), SetupErrorKinds::MISSING_KING);
//! # Ok::<_, chessrules::setup::ParseSetupError>(())
//! ```

use std::{fmt, str::FromStr};

use bitflags::bitflags;
use thiserror::Error;

use crate::{
    board::{Board, ParseBoardError},
    kind::PieceKind,
    side::Side,
};

/// A board and the side to move.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Setup {
    pub board: Board,
    pub turn: Side,
}

impl Setup {
    /// Empty board, Dark to move.
    pub const fn empty() -> Setup {
        Setup {
            board: Board::empty(),
            turn: Side::Dark,
        }
    }

    /// Checks that a game can start from this setup: the board is not
    /// empty, each side has exactly one king, at most 16 pieces and at most
    /// 8 pawns.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] with every problem found.
    pub fn validate(&self) -> Result<(), SetupError> {
        let mut kinds = SetupErrorKinds::empty();

        if self.board.occupied().is_empty() {
            kinds |= SetupErrorKinds::EMPTY_BOARD;
        }

        for side in Side::ALL {
            match self.board.by_piece(PieceKind::King, side).count() {
                0 => kinds |= SetupErrorKinds::MISSING_KING,
                1 => {}
                _ => kinds |= SetupErrorKinds::TOO_MANY_KINGS,
            }
            if self.board.count(side) > 16 {
                kinds |= SetupErrorKinds::TOO_MANY_PIECES;
            }
            if self.board.by_piece(PieceKind::Pawn, side).count() > 8 {
                kinds |= SetupErrorKinds::TOO_MANY_PAWNS;
            }
        }

        if kinds.is_empty() {
            Ok(())
        } else {
            Err(SetupError { kinds })
        }
    }
}

/// Standard initial layout, Dark to move.
impl Default for Setup {
    fn default() -> Setup {
        Setup {
            board: Board::new(),
            ..Setup::empty()
        }
    }
}

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.board, self.turn.char())
    }
}

/// Error when parsing a setup such as
/// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR d`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseSetupError {
    #[error("invalid board part in setup")]
    InvalidBoard(#[from] ParseBoardError),
    #[error("invalid turn part in setup")]
    InvalidTurn,
}

impl FromStr for Setup {
    type Err = ParseSetupError;

    /// Parses the board placement, then optionally `l` or `d` for the side
    /// to move (Dark if omitted).
    fn from_str(s: &str) -> Result<Setup, ParseSetupError> {
        let mut parts = s.split_ascii_whitespace();

        let board = parts.next().unwrap_or_default().parse::<Board>()?;

        let turn = match parts.next() {
            Some(turn) => {
                let mut chars = turn.chars();
                match (chars.next().and_then(Side::from_char), chars.next()) {
                    (Some(side), None) => side,
                    _ => return Err(ParseSetupError::InvalidTurn),
                }
            }
            None => Side::Dark,
        };

        if parts.next().is_some() {
            return Err(ParseSetupError::InvalidTurn);
        }

        Ok(Setup { board, turn })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Setup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Setup {
    fn deserialize<D>(deserializer: D) -> Result<Setup, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SetupVisitor;

        impl serde::de::Visitor<'_> for SetupVisitor {
            type Value = Setup;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("board fen followed by side to move")
            }

            fn visit_str<E>(self, value: &str) -> Result<Setup, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(SetupVisitor)
    }
}

bitflags! {
    /// Reasons for a [`Setup`] to be rejected.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct SetupErrorKinds: u32 {
        /// There are no pieces on the board.
        const EMPTY_BOARD = 1 << 0;
        /// A side has no king.
        const MISSING_KING = 1 << 1;
        /// A side has more than one king.
        const TOO_MANY_KINGS = 1 << 2;
        /// A side has more than 16 pieces.
        const TOO_MANY_PIECES = 1 << 3;
        /// A side has more than 8 pawns.
        const TOO_MANY_PAWNS = 1 << 4;
    }
}

/// Error when a [`Setup`] cannot start a game.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("illegal setup: {}", describe(.kinds))]
pub struct SetupError {
    kinds: SetupErrorKinds,
}

impl SetupError {
    /// Every reason the setup was rejected.
    pub fn kinds(&self) -> SetupErrorKinds {
        self.kinds
    }
}

fn describe(kinds: &SetupErrorKinds) -> String {
    let mut reasons = Vec::new();
    for (kind, reason) in [
        (SetupErrorKinds::EMPTY_BOARD, "empty board"),
        (SetupErrorKinds::MISSING_KING, "king missing"),
        (SetupErrorKinds::TOO_MANY_KINGS, "too many kings"),
        (SetupErrorKinds::TOO_MANY_PIECES, "too many pieces"),
        (SetupErrorKinds::TOO_MANY_PAWNS, "too many pawns"),
    ] {
        if kinds.contains(kind) {
            reasons.push(reason);
        }
    }
    reasons.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let setup = Setup::default();
        assert_eq!(setup.turn, Side::Dark);
        assert_eq!(setup.validate(), Ok(()));
        assert_eq!(
            setup.to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR d"
        );
    }

    #[test]
    fn test_empty_board() {
        let err = Setup::empty().validate().unwrap_err();
        assert_eq!(
            err.kinds(),
            SetupErrorKinds::EMPTY_BOARD | SetupErrorKinds::MISSING_KING
        );
        assert_eq!(err.to_string(), "illegal setup: empty board, king missing");
    }

    #[test]
    fn test_collects_all_problems() {
        let setup: Setup = "kk6/pppppppp/p7/8/8/8/8/4K3".parse().expect("valid setup");
        assert_eq!(
            setup.validate().unwrap_err().kinds(),
            SetupErrorKinds::TOO_MANY_KINGS | SetupErrorKinds::TOO_MANY_PAWNS
        );
    }

    #[test]
    fn test_too_many_pieces() {
        let setup: Setup = "knnnnnnn/nnnnnnnn/n7/8/8/8/8/4K3".parse().expect("valid setup");
        assert_eq!(
            setup.validate().unwrap_err().kinds(),
            SetupErrorKinds::TOO_MANY_PIECES
        );
    }

    #[test]
    fn test_parse_turn() {
        assert_eq!("4k3/8/8/8/8/8/8/4K3".parse::<Setup>().map(|s| s.turn), Ok(Side::Dark));
        assert_eq!("4k3/8/8/8/8/8/8/4K3 l".parse::<Setup>().map(|s| s.turn), Ok(Side::Light));
        assert_eq!(
            "4k3/8/8/8/8/8/8/4K3 w".parse::<Setup>(),
            Err(ParseSetupError::InvalidTurn)
        );
        assert_eq!(
            "4k3/8/8/8/8/8/8/4K3 l x".parse::<Setup>(),
            Err(ParseSetupError::InvalidTurn)
        );
        assert_eq!(
            "4k3/8/8".parse::<Setup>(),
            Err(ParseSetupError::InvalidBoard(ParseBoardError))
        );
    }
}
