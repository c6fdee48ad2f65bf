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

//! Rays and path obstruction.
//!
//! Rooks, bishops and queens slide along one of eight rays. A slide is
//! blocked by any piece standing strictly between its start and end.
//!
//! ```
//! use chessrules::{direction::{is_path_clear, Direction}, Board, Position};
//!
//! let board = Board::new();
//! let a1 = Position::new(0, 7);
//! let a3 = Position::new(0, 5);
//! let a5 = Position::new(0, 3);
//!
//! // The rook on a1 is boxed in by its own pawn on a2.
//! assert_eq!(Direction::between(a1, a3), Some(Direction::Up));
//! assert!(!is_path_clear(&board, a1, a3, Direction::Up));
//!
//! // Nothing stands between a3 and a5.
//! assert!(is_path_clear(&board, a3, a5, Direction::Up));
//! ```

use crate::{board::Board, position::Position};

/// One of the eight rays, or no movement at all.
///
/// `Up` points towards row `0`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    DiagUpLeft,
    DiagUpRight,
    DiagDownLeft,
    DiagDownRight,
    Still,
}

impl Direction {
    /// The direction of the ray from `start` through `end`.
    ///
    /// Returns `Some(Still)` if both are the same cell and `None` if `end`
    /// lies on no ray through `start` (for example a knight jump).
    pub fn between(start: Position, end: Position) -> Option<Direction> {
        let (dx, dy) = start.delta(end);
        if dx != 0 && dy != 0 && dx.unsigned_abs() != dy.unsigned_abs() {
            return None;
        }
        Some(Direction::from_step(dx.signum(), dy.signum()))
    }

    const fn from_step(dx: i32, dy: i32) -> Direction {
        match (dx, dy) {
            (0, -1) => Direction::Up,
            (0, 1) => Direction::Down,
            (-1, 0) => Direction::Left,
            (1, 0) => Direction::Right,
            (-1, -1) => Direction::DiagUpLeft,
            (1, -1) => Direction::DiagUpRight,
            (-1, 1) => Direction::DiagDownLeft,
            (1, 1) => Direction::DiagDownRight,
            _ => Direction::Still,
        }
    }

    /// Unit step `(dx, dy)` along the ray.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::DiagUpLeft => (-1, -1),
            Direction::DiagUpRight => (1, -1),
            Direction::DiagDownLeft => (-1, 1),
            Direction::DiagDownRight => (1, 1),
            Direction::Still => (0, 0),
        }
    }

    /// Rook rays.
    pub const fn is_orthogonal(self) -> bool {
        matches!(
            self,
            Direction::Up | Direction::Down | Direction::Left | Direction::Right
        )
    }

    /// Bishop rays.
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::DiagUpLeft
                | Direction::DiagUpRight
                | Direction::DiagDownLeft
                | Direction::DiagDownRight
        )
    }

    /// The eight rays, without `Still`.
    pub const RAYS: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::DiagUpLeft,
        Direction::DiagUpRight,
        Direction::DiagDownLeft,
        Direction::DiagDownRight,
    ];
}

/// Tests that every cell strictly between `start` and `end` is empty.
///
/// `direction` must be the ray from `start` to `end`, as returned by
/// [`Direction::between`], and must not be `Still`. Both ends must be on
/// the board. Neither end is inspected.
pub fn is_path_clear(board: &Board, start: Position, end: Position, direction: Direction) -> bool {
    debug_assert!(start.is_on_board() && end.is_on_board());
    debug_assert_ne!(direction, Direction::Still);
    debug_assert_eq!(Direction::between(start, end), Some(direction));

    let (dx, dy) = direction.step();
    if (dx, dy) == (0, 0) {
        return true;
    }

    let mut pos = start.offset(dx, dy);
    while pos != end && pos.is_on_board() {
        if board.is_occupied(pos) {
            return false;
        }
        pos = pos.offset(dx, dy);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    #[test]
    fn test_between() {
        let d4 = Position::new(3, 4);
        assert_eq!(Direction::between(d4, d4), Some(Direction::Still));
        assert_eq!(Direction::between(d4, Position::new(3, 0)), Some(Direction::Up));
        assert_eq!(Direction::between(d4, Position::new(3, 7)), Some(Direction::Down));
        assert_eq!(Direction::between(d4, Position::new(0, 4)), Some(Direction::Left));
        assert_eq!(Direction::between(d4, Position::new(7, 4)), Some(Direction::Right));
        assert_eq!(Direction::between(d4, Position::new(0, 1)), Some(Direction::DiagUpLeft));
        assert_eq!(Direction::between(d4, Position::new(6, 1)), Some(Direction::DiagUpRight));
        assert_eq!(Direction::between(d4, Position::new(0, 7)), Some(Direction::DiagDownLeft));
        assert_eq!(Direction::between(d4, Position::new(6, 7)), Some(Direction::DiagDownRight));
        assert_eq!(Direction::between(d4, Position::new(4, 6)), None);
        assert_eq!(Direction::between(d4, Position::new(7, 6)), None);
    }

    #[test]
    fn test_step_agrees_with_between() {
        let d4 = Position::new(3, 4);
        for direction in Direction::RAYS {
            let (dx, dy) = direction.step();
            assert_eq!(Direction::between(d4, d4.offset(dx, dy)), Some(direction));
            assert_ne!(direction.is_orthogonal(), direction.is_diagonal());
        }
    }

    #[test]
    fn test_adjacent_is_always_clear() {
        let board = Board::new();
        let e7 = Position::new(4, 1);
        assert!(is_path_clear(&board, e7, Position::new(4, 0), Direction::Up));
    }

    #[test]
    fn test_blocked_in_every_direction() {
        let center = Position::new(3, 3);
        for direction in Direction::RAYS {
            let (dx, dy) = direction.step();
            let blocker = center.offset(dx, dy);
            let end = center.offset(2 * dx, 2 * dy);

            let mut board = Board::empty();
            assert!(is_path_clear(&board, center, end, direction));

            board.place(blocker, Side::Dark.pawn()).expect("on board");
            assert!(!is_path_clear(&board, center, end, direction));
        }
    }

    #[test]
    fn test_endpoints_ignored() {
        let mut board = Board::empty();
        let start = Position::new(0, 0);
        let end = Position::new(7, 7);
        board.place(start, Side::Light.bishop()).expect("on board");
        board.place(end, Side::Dark.rook()).expect("on board");
        assert!(is_path_clear(&board, start, end, Direction::DiagDownRight));
    }
}
