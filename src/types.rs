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

use std::fmt;

use crate::{kind::PieceKind, position::Position, side::Side};

/// A piece with [`PieceKind`] and [`Side`], and the cell it stands on.
///
/// Pieces are owned by a [`Board`](crate::Board). The board stamps
/// `position` whenever it places a piece, so for every piece on a board
/// `board.piece_at(piece.position) == Ok(Some(piece))`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub position: Position,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Piece {
        Piece {
            kind,
            side,
            position: Position::new(0, 0),
        }
    }

    /// Copy of this piece standing on `position`.
    #[must_use]
    #[inline]
    pub const fn at(self, position: Position) -> Piece {
        Piece { position, ..self }
    }

    /// FEN letter: upper case for Light, lower case for Dark.
    pub const fn char(self) -> char {
        match self.side {
            Side::Light => self.kind.upper_char(),
            Side::Dark => self.kind.char(),
        }
    }

    pub const fn from_char(ch: char) -> Option<Piece> {
        let Some(kind) = PieceKind::from_char(ch) else {
            return None;
        };
        Some(kind.of(Side::from_light(ch.is_ascii_uppercase())))
    }

    /// Tests if both pieces have the same kind and side, wherever they
    /// stand.
    #[inline]
    pub fn is_same_identity(self, other: Piece) -> bool {
        self.kind == other.kind && self.side == other.side
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.side, self.kind, self.position)
    }
}
