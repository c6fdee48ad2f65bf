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

//! Sets of board cells.

use std::{
    fmt::{self, Write as _},
    iter::FusedIterator,
    ops,
};

use crate::position::Position;

/// A set of on-board [`Position`]s, one bit per cell.
///
/// Bit `y * 8 + x` stands for `(x, y)`, so iteration is row-major: all of
/// row `0` from left to right, then row `1`, and so on.
///
/// # Examples
///
/// ```
/// use chessrules::{Bitboard, Position};
///
/// let set = Bitboard::EMPTY
///     .with(Position::new(5, 1))
///     .with(Position::new(2, 0));
///
/// assert_eq!(set.count(), 2);
/// assert_eq!(
///     set.into_iter().collect::<Vec<_>>(),
///     [Position::new(2, 0), Position::new(5, 1)],
/// );
/// ```
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const FULL: Bitboard = Bitboard(!0);

    /// Set with the single cell `pos`, or the empty set if `pos` is off the
    /// board.
    #[inline]
    pub const fn from_position(pos: Position) -> Bitboard {
        match pos.index() {
            Ok(index) => Bitboard(1 << index),
            Err(_) => Bitboard::EMPTY,
        }
    }

    /// All cells of row `y`.
    #[inline]
    pub const fn row(y: i32) -> Bitboard {
        if 0 <= y && y < 8 {
            Bitboard(0xff << (8 * y))
        } else {
            Bitboard::EMPTY
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        self.0 & Bitboard::from_position(pos).0 != 0
    }

    #[inline]
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Adds `pos`. Off-board positions are ignored.
    #[inline]
    pub fn add(&mut self, pos: Position) {
        self.0 |= Bitboard::from_position(pos).0;
    }

    #[inline]
    pub fn remove(&mut self, pos: Position) {
        self.0 &= !Bitboard::from_position(pos).0;
    }

    #[must_use]
    #[inline]
    pub const fn with(self, pos: Position) -> Bitboard {
        Bitboard(self.0 | Bitboard::from_position(pos).0)
    }

    #[must_use]
    #[inline]
    pub const fn without(self, pos: Position) -> Bitboard {
        Bitboard(self.0 & !Bitboard::from_position(pos).0)
    }

    /// First cell in row-major order.
    #[inline]
    pub const fn first(self) -> Option<Position> {
        if self.is_empty() {
            None
        } else {
            Some(Position::from_index(self.0.trailing_zeros() as usize))
        }
    }

    /// Last cell in row-major order.
    #[inline]
    pub const fn last(self) -> Option<Position> {
        if self.is_empty() {
            None
        } else {
            Some(Position::from_index(63 - self.0.leading_zeros() as usize))
        }
    }

    /// The only cell of the set, if it has exactly one.
    #[inline]
    pub const fn single(self) -> Option<Position> {
        if self.0 & self.0.wrapping_sub(1) == 0 {
            self.first()
        } else {
            None
        }
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..8 {
            for x in 0..8 {
                f.write_char(if self.contains(Position::new(x, y)) {
                    '1'
                } else {
                    '.'
                })?;
                f.write_char(if x < 7 { ' ' } else { '\n' })?;
            }
        }

        Ok(())
    }
}

impl ops::BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl ops::BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl ops::Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl FromIterator<Position> for Bitboard {
    fn from_iter<T>(iter: T) -> Bitboard
    where
        T: IntoIterator<Item = Position>,
    {
        let mut result = Bitboard::EMPTY;
        for pos in iter {
            result.add(pos);
        }
        result
    }
}

impl Extend<Position> for Bitboard {
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = Position>,
    {
        for pos in iter {
            self.add(pos);
        }
    }
}

impl IntoIterator for Bitboard {
    type Item = Position;
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> IntoIter {
        IntoIter(self)
    }
}

/// Iterator over the cells of a [`Bitboard`], in row-major order.
#[derive(Debug, Clone)]
pub struct IntoIter(Bitboard);

impl Iterator for IntoIter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        let pos = self.0.first();
        self.0 .0 &= self.0 .0.wrapping_sub(1);
        pos
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    #[inline]
    fn last(self) -> Option<Position> {
        self.0.last()
    }
}

impl ExactSizeIterator for IntoIter {
    #[inline]
    fn len(&self) -> usize {
        self.0.count()
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<Position> {
        let pos = self.0.last();
        if let Some(pos) = pos {
            self.0.remove(pos);
        }
        pos
    }
}

impl FusedIterator for IntoIter {}
