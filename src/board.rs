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

use std::{
    fmt::{self, Write as _},
    str::FromStr,
};

use thiserror::Error;

use crate::{
    bitboard::Bitboard,
    kind::PieceKind,
    position::{OutOfBounds, Position},
    side::Side,
    types::Piece,
};

/// Piece placement of the standard initial layout, row `0` first.
pub const INITIAL_BOARD_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// [`Piece`] positions on an 8x8 grid.
///
/// A cell holds at most one piece. Every piece on the board knows its own
/// cell, see [`Piece::position`].
///
/// # Examples
///
/// ```
/// use chessrules::{Board, Position, Side};
///
/// let board = Board::new();
/// // r n b q k b n r
/// // p p p p p p p p
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . .
/// // P P P P P P P P
/// // R N B Q K B N R
///
/// let e1 = Position::new(4, 7);
/// assert_eq!(board.piece_at(e1)?, Some(Side::Light.king().at(e1)));
/// # Ok::<_, chessrules::OutOfBounds>(())
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Board {
    /// Standard initial layout.
    pub fn new() -> Board {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for side in Side::ALL {
            for (x, kind) in (0..).zip(back_rank) {
                board.put(Position::new(x, side.back_rank()), kind.of(side));
                board.put(Position::new(x, side.pawn_rank()), side.pawn());
            }
        }

        board
    }

    pub const fn empty() -> Board {
        Board { cells: [None; 64] }
    }

    /// Gets the piece on `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `pos` is off the board.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Result<Option<Piece>, OutOfBounds> {
        Ok(self.cells[pos.index()?])
    }

    /// Puts `piece` on `pos`, replacing and returning whatever stood there.
    /// The stored copy has its position set to `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `pos` is off the board.
    pub fn place(&mut self, pos: Position, piece: Piece) -> Result<Option<Piece>, OutOfBounds> {
        let index = pos.index()?;
        Ok(self.cells[index].replace(piece.at(pos)))
    }

    /// Takes the piece off `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `pos` is off the board.
    pub fn remove(&mut self, pos: Position) -> Result<Option<Piece>, OutOfBounds> {
        Ok(self.cells[pos.index()?].take())
    }

    /// Tests if `pos` holds a piece. Off-board positions are never occupied.
    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        matches!(self.piece_at(pos), Ok(Some(_)))
    }

    /// Pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }

    pub fn occupied(&self) -> Bitboard {
        self.pieces().map(|piece| piece.position).collect()
    }

    pub fn by_side(&self, side: Side) -> Bitboard {
        self.pieces()
            .filter(|piece| piece.side == side)
            .map(|piece| piece.position)
            .collect()
    }

    pub fn by_piece(&self, kind: PieceKind, side: Side) -> Bitboard {
        self.pieces()
            .filter(|piece| piece.kind == kind && piece.side == side)
            .map(|piece| piece.position)
            .collect()
    }

    /// The king of `side`, if there is exactly one.
    pub fn king_of(&self, side: Side) -> Option<Piece> {
        let king = self.by_piece(PieceKind::King, side).single()?;
        self.cells[king.index().ok()?]
    }

    pub fn count(&self, side: Side) -> usize {
        self.pieces().filter(|piece| piece.side == side).count()
    }

    /// Moves the piece on `from` to `to`, returning what stood on `to`.
    /// Both positions must be on the board and `from` must be occupied.
    pub(crate) fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        let (Ok(from_index), Ok(to_index)) = (from.index(), to.index()) else {
            debug_assert!(false, "relocate off the board: {from} -> {to}");
            return None;
        };
        let Some(piece) = self.cells[from_index].take() else {
            debug_assert!(false, "relocate from empty cell {from}");
            return None;
        };
        debug_assert_eq!(piece.position, from);
        self.cells[to_index].replace(piece.at(to))
    }

    fn put(&mut self, pos: Position, piece: Piece) {
        if let Ok(index) = pos.index() {
            self.cells[index] = Some(piece.at(pos));
        }
    }

    /// Parses the piece placement field of a FEN, row `0` first.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBoardError`] unless there are exactly 8 rows of
    /// exactly 8 cells each, made up of piece letters and empty-run digits.
    pub fn from_board_fen(board_fen: &[u8]) -> Result<Board, ParseBoardError> {
        let mut board = Board::empty();
        let mut rows = 0;

        for (y, row) in (0..).zip(board_fen.split(|ch| *ch == b'/')) {
            if y >= 8 {
                return Err(ParseBoardError);
            }

            let mut x = 0;
            for &ch in row {
                if (b'1'..=b'8').contains(&ch) {
                    x += i32::from(ch - b'0');
                } else {
                    let piece = Piece::from_char(char::from(ch)).ok_or(ParseBoardError)?;
                    if x >= 8 {
                        return Err(ParseBoardError);
                    }
                    board.put(Position::new(x, y), piece);
                    x += 1;
                }
            }

            if x != 8 {
                return Err(ParseBoardError);
            }
            rows += 1;
        }

        if rows == 8 {
            Ok(board)
        } else {
            Err(ParseBoardError)
        }
    }

    /// Renders the piece placement field of a FEN, row `0` first.
    pub fn board_fen(&self) -> String {
        let mut fen = String::with_capacity(15);

        for y in 0..8 {
            let mut empty = 0;

            for x in 0..8 {
                match self.cells[(y * 8 + x) as usize] {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(piece.char());
                    }
                    None => empty += 1,
                }
            }

            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }

            if y < 7 {
                fen.push('/');
            }
        }

        fen
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..8 {
            for x in 0..8 {
                f.write_char(
                    self.cells[(y * 8 + x) as usize].map_or('.', Piece::char),
                )?;
                f.write_char(if x < 7 { ' ' } else { '\n' })?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.board_fen())
    }
}

/// Error when parsing an invalid board placement.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid board")]
pub struct ParseBoardError;

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Board, ParseBoardError> {
        Board::from_board_fen(s.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.board_fen())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Board, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct BoardVisitor;

        impl serde::de::Visitor<'_> for BoardVisitor {
            type Value = Board;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("board fen")
            }

            fn visit_str<E>(self, value: &str) -> Result<Board, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(BoardVisitor)
    }
}
