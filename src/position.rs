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

use std::{fmt, str::FromStr};

use thiserror::Error;

/// A cell coordinate `(x, y)`.
///
/// `x` is the column and `y` the row, both counted from zero. Row `0` is
/// the back rank of [`Side::Dark`](crate::Side::Dark), row `7` the back
/// rank of [`Side::Light`](crate::Side::Light).
///
/// A `Position` is a plain value and may lie off the board. Every board
/// access checks it and fails with [`OutOfBounds`] instead.
///
/// # Examples
///
/// ```
/// use chessrules::Position;
///
/// let e2 = Position::new(4, 6);
/// assert_eq!(e2.to_string(), "e2");
/// assert_eq!("e2".parse::<Position>(), Ok(e2));
///
/// assert!(!Position::new(8, 0).is_on_board());
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    #[inline]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Tests if both coordinates are in `0..8`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        0 <= self.x && self.x < 8 && 0 <= self.y && self.y < 8
    }

    /// Moves by `(dx, dy)`. The result may be off the board.
    #[must_use]
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Position {
        Position {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// The `(dx, dy)` step from `self` to `target`.
    #[inline]
    pub const fn delta(self, target: Position) -> (i32, i32) {
        (
            target.x.saturating_sub(self.x),
            target.y.saturating_sub(self.y),
        )
    }

    /// Row-major index into a 64 cell array.
    #[inline]
    pub(crate) const fn index(self) -> Result<usize, OutOfBounds> {
        if self.is_on_board() {
            Ok((self.y * 8 + self.x) as usize)
        } else {
            Err(OutOfBounds(self))
        }
    }

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Position {
        debug_assert!(index < 64);
        Position {
            x: (index & 7) as i32,
            y: (index >> 3) as i32,
        }
    }

    /// All 64 cells in row-major order, starting at `(0, 0)`.
    pub const ALL: [Position; 64] = {
        let mut all = [Position::new(0, 0); 64];
        let mut i = 0;
        while i < 64 {
            all[i] = Position::from_index(i);
            i += 1;
        }
        all
    };
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(
                f,
                "{}{}",
                char::from(b'a' + self.x as u8),
                char::from(b'8' - self.y as u8)
            )
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}

/// Error when parsing an invalid algebraic coordinate.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid position")]
pub struct ParsePositionError;

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Position, ParsePositionError> {
        match *s.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => Ok(Position::new(
                i32::from(file - b'a'),
                i32::from(b'8' - rank),
            )),
            _ => Err(ParsePositionError),
        }
    }
}

/// Error when a [`Position`] lies off the board.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("position {0} is off the board")]
pub struct OutOfBounds(pub Position);

#[cfg(feature = "serde")]
impl serde::Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if !self.is_on_board() {
            return Err(serde::ser::Error::custom(OutOfBounds(*self)));
        }
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Position, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct PositionVisitor;

        impl serde::de::Visitor<'_> for PositionVisitor {
            type Value = Position;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("algebraic coordinate")
            }

            fn visit_str<E>(self, value: &str) -> Result<Position, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(PositionVisitor)
    }
}
