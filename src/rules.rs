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

//! Movement rules of each piece kind.
//!
//! There is no notion of check. A king may step next to an enemy piece and
//! the game ends only when a king is actually captured.
//!
//! # Examples
//!
//! ```
//! use chessrules::{rules, Board, Position};
//!
//! let board = Board::new();
//! let g1 = Position::new(6, 7);
//! let knight = board.piece_at(g1)?.expect("knight on g1");
//!
//! let destinations = rules::legal_destinations(&board, &knight);
//! assert_eq!(
//!     destinations.into_iter().map(|pos| pos.to_string()).collect::<Vec<_>>(),
//!     ["f3", "h3"],
//! );
//! # Ok::<_, chessrules::OutOfBounds>(())
//! ```

use crate::{
    bitboard::Bitboard,
    board::Board,
    direction::{is_path_clear, Direction},
    kind::PieceKind,
    position::Position,
    types::Piece,
};

/// Tests if `piece` may move to `target` on `board`.
///
/// Moving onto the own cell, off the board, or onto a piece of the same
/// side is never legal. Otherwise the rule of `piece.kind` decides:
///
/// * Pawns advance one cell towards the enemy back rank onto an empty
///   cell, or two cells from their starting row onto an empty cell. They
///   capture one cell diagonally forward.
/// * Rooks slide along rows and columns, bishops along diagonals, queens
///   along both. Every cell in between must be empty.
/// * Knights jump in an L shape, ignoring what stands in between.
/// * Kings step to any of the eight neighbouring cells.
///
/// The two cell pawn advance only looks at the target cell. The cell it
/// passes over may be occupied.
pub fn is_legal(board: &Board, piece: &Piece, target: Position) -> bool {
    if target == piece.position || !piece.position.is_on_board() {
        return false;
    }

    let occupant = match board.piece_at(target) {
        Ok(occupant) => occupant,
        Err(_) => return false,
    };
    if occupant.is_some_and(|other| other.side == piece.side) {
        return false;
    }

    let (dx, dy) = piece.position.delta(target);

    match piece.kind {
        PieceKind::Pawn => is_pawn_move(piece, occupant.is_some(), dx, dy),
        PieceKind::Knight => matches!((dx.unsigned_abs(), dy.unsigned_abs()), (1, 2) | (2, 1)),
        PieceKind::Bishop => is_slide(board, piece.position, target, Direction::is_diagonal),
        PieceKind::Rook => is_slide(board, piece.position, target, Direction::is_orthogonal),
        PieceKind::Queen => is_slide(board, piece.position, target, |direction| {
            direction.is_orthogonal() || direction.is_diagonal()
        }),
        PieceKind::King => dx.unsigned_abs() <= 1 && dy.unsigned_abs() <= 1,
    }
}

fn is_pawn_move(pawn: &Piece, capture: bool, dx: i32, dy: i32) -> bool {
    let forward = pawn.side.forward();
    if capture {
        dx.unsigned_abs() == 1 && dy == forward
    } else {
        dx == 0
            && (dy == forward
                || (dy == 2 * forward && pawn.position.y() == pawn.side.pawn_rank()))
    }
}

fn is_slide<F>(board: &Board, start: Position, end: Position, allowed: F) -> bool
where
    F: FnOnce(Direction) -> bool,
{
    match Direction::between(start, end) {
        Some(direction) if direction != Direction::Still && allowed(direction) => {
            is_path_clear(board, start, end, direction)
        }
        _ => false,
    }
}

/// All cells `piece` may move to on `board`, in row-major order.
///
/// Never contains a cell held by a piece of the same side.
pub fn legal_destinations(board: &Board, piece: &Piece) -> Bitboard {
    let own = board.by_side(piece.side);
    Position::ALL
        .into_iter()
        .filter(|&target| !own.contains(target) && is_legal(board, piece, target))
        .collect()
}
