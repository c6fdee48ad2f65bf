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

//! Count move paths.
//!
//! # Examples
//!
//! ```
//! use chessrules::{perft::perft, GameState};
//!
//! let game = GameState::new();
//! assert_eq!(perft(&game, 1), 20);
//! assert_eq!(perft(&game, 2), 400);
//! ```

use tracing::info;

use crate::{
    game::{GameState, MoveOutcome},
    position::Position,
    types::Piece,
};

/// Counts move paths of a given length.
///
/// Every legal destination of every piece of the side to move is a move.
/// A finished game has no moves, so paths ending in a king capture are only
/// counted at the final depth. Useful for comparing, testing and debugging
/// the move rules.
pub fn perft(state: &GameState, depth: u32) -> u64 {
    if depth < 1 {
        return 1;
    }

    state
        .legal_moves()
        .map(|(piece, destinations)| {
            if depth == 1 {
                destinations.count() as u64
            } else {
                destinations
                    .into_iter()
                    .filter_map(|target| play(state, piece, target))
                    .map(|child| perft(&child, depth - 1))
                    .sum()
            }
        })
        .sum()
}

/// Like [`perft()`], but also logs the count below each move.
pub fn debug_perft(state: &GameState, depth: u32) -> u64 {
    if depth < 1 {
        return 1;
    }

    state
        .legal_moves()
        .flat_map(|(piece, destinations)| destinations.into_iter().map(move |target| (piece, target)))
        .filter_map(|(piece, target)| {
            let child = play(state, piece, target)?;
            let nodes = perft(&child, depth - 1);
            info!(from = %piece.position, to = %target, depth = depth - 1, nodes, "perft");
            Some(nodes)
        })
        .sum()
}

fn play(state: &GameState, piece: Piece, target: Position) -> Option<GameState> {
    let mut child = state.clone();
    child.select(piece.position).ok().flatten()?;
    match child.apply_move(target) {
        Ok(MoveOutcome::Applied { .. }) => Some(child),
        _ => {
            debug_assert!(false, "{piece} cannot reach {target}");
            None
        }
    }
}
