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

use std::{fmt, slice};

use arrayvec::ArrayVec;

use crate::kind::PieceKind;

/// Kinds of the pieces a side has captured, in capture order.
///
/// A side starts with at most 16 pieces, so a score never holds more than
/// 16 entries (the last of which can only be the king).
#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct Score {
    captured: ArrayVec<PieceKind, 16>,
}

impl Score {
    pub const fn new() -> Score {
        Score {
            captured: ArrayVec::new_const(),
        }
    }

    pub(crate) fn push(&mut self, kind: PieceKind) {
        let result = self.captured.try_push(kind);
        debug_assert!(result.is_ok(), "more than 16 captures");
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.captured.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.captured.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[PieceKind] {
        &self.captured
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, PieceKind> {
        self.captured.iter()
    }

    /// Most recent capture.
    #[inline]
    pub fn last(&self) -> Option<PieceKind> {
        self.captured.last().copied()
    }

    /// Number of captured pieces of `kind`.
    pub fn count(&self, kind: PieceKind) -> usize {
        self.iter().filter(|captured| **captured == kind).count()
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Score {
    type Item = &'a PieceKind;
    type IntoIter = slice::Iter<'a, PieceKind>;

    fn into_iter(self) -> slice::Iter<'a, PieceKind> {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Score {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}
