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

use std::{fmt, iter::FusedIterator, ops, str::FromStr};

use thiserror::Error;

use crate::{kind::PieceKind, types::Piece};

/// `Light` or `Dark`.
///
/// Dark starts on rows `0` and `1` and moves towards higher rows. Light
/// starts on rows `6` and `7` and moves towards lower rows.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    pub const fn from_char(ch: char) -> Option<Side> {
        match ch {
            'l' => Some(Side::Light),
            'd' => Some(Side::Dark),
            _ => None,
        }
    }

    #[inline]
    pub const fn from_light(light: bool) -> Side {
        if light {
            Side::Light
        } else {
            Side::Dark
        }
    }

    #[inline]
    pub fn fold<T>(self, light: T, dark: T) -> T {
        match self {
            Side::Light => light,
            Side::Dark => dark,
        }
    }

    #[inline]
    pub const fn is_light(self) -> bool {
        matches!(self, Side::Light)
    }

    #[inline]
    pub const fn is_dark(self) -> bool {
        matches!(self, Side::Dark)
    }

    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Row step of a pawn advance: `-1` for Light, `+1` for Dark.
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Side::Light => -1,
            Side::Dark => 1,
        }
    }

    /// Row of the non-pawn pieces in the initial layout.
    #[inline]
    pub const fn back_rank(self) -> i32 {
        match self {
            Side::Light => 7,
            Side::Dark => 0,
        }
    }

    /// Row from which pawns may advance two cells.
    #[inline]
    pub const fn pawn_rank(self) -> i32 {
        match self {
            Side::Light => 6,
            Side::Dark => 1,
        }
    }

    pub const fn char(self) -> char {
        match self {
            Side::Light => 'l',
            Side::Dark => 'd',
        }
    }

    #[inline]
    pub const fn pawn(self) -> Piece {
        PieceKind::Pawn.of(self)
    }
    #[inline]
    pub const fn knight(self) -> Piece {
        PieceKind::Knight.of(self)
    }
    #[inline]
    pub const fn bishop(self) -> Piece {
        PieceKind::Bishop.of(self)
    }
    #[inline]
    pub const fn rook(self) -> Piece {
        PieceKind::Rook.of(self)
    }
    #[inline]
    pub const fn queen(self) -> Piece {
        PieceKind::Queen.of(self)
    }
    #[inline]
    pub const fn king(self) -> Piece {
        PieceKind::King.of(self)
    }

    /// `Light` and `Dark`, in this order.
    pub const ALL: [Side; 2] = [Side::Light, Side::Dark];
}

impl ops::Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.opponent()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fold("light", "dark"))
    }
}

/// Error when parsing an invalid side name.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid side")]
pub struct ParseSideError;

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Side, ParseSideError> {
        Ok(match s {
            "light" => Side::Light,
            "dark" => Side::Dark,
            _ => return Err(ParseSideError),
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Side {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.fold("light", "dark"))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Side {
    fn deserialize<D>(deserializer: D) -> Result<Side, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SideVisitor;

        impl serde::de::Visitor<'_> for SideVisitor {
            type Value = Side;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("\"light\" or \"dark\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<Side, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(SideVisitor)
    }
}

/// Container with values for each [`Side`].
#[derive(Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct BySide<T> {
    pub light: T,
    pub dark: T,
}

impl<T> BySide<T> {
    #[inline]
    pub fn new_with<F>(mut init: F) -> BySide<T>
    where
        F: FnMut(Side) -> T,
    {
        BySide {
            light: init(Side::Light),
            dark: init(Side::Dark),
        }
    }

    #[inline]
    pub const fn get(&self, side: Side) -> &T {
        match side {
            Side::Light => &self.light,
            Side::Dark => &self.dark,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Light => &mut self.light,
            Side::Dark => &mut self.dark,
        }
    }

    #[inline]
    pub fn map<U, F>(self, mut f: F) -> BySide<U>
    where
        F: FnMut(T) -> U,
    {
        BySide {
            light: f(self.light),
            dark: f(self.dark),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> BySide<&T> {
        BySide {
            light: &self.light,
            dark: &self.dark,
        }
    }

    #[inline]
    pub fn find<F>(&self, mut predicate: F) -> Option<Side>
    where
        F: FnMut(&T) -> bool,
    {
        if predicate(&self.light) {
            Some(Side::Light)
        } else if predicate(&self.dark) {
            Some(Side::Dark)
        } else {
            None
        }
    }

    pub fn iter(&self) -> BySideIter<&T> {
        self.as_ref().into_iter()
    }
}

impl<T> IntoIterator for BySide<T> {
    type Item = T;
    type IntoIter = BySideIter<T>;

    fn into_iter(self) -> BySideIter<T> {
        BySideIter {
            inner: self.map(Some),
        }
    }
}

/// Iterator over [`BySide`], `light` first.
#[derive(Debug, Clone)]
pub struct BySideIter<T> {
    inner: BySide<Option<T>>,
}

impl<T> Iterator for BySideIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.light.take().or_else(|| self.inner.dark.take())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for BySideIter<T> {
    fn len(&self) -> usize {
        usize::from(self.inner.light.is_some()) + usize::from(self.inner.dark.is_some())
    }
}

impl<T> FusedIterator for BySideIter<T> {}
