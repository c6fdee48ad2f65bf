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

//! The state of a running game.
//!
//! A caller drives a [`GameState`] with positions it has already mapped
//! from its input device: [`select`](GameState::select) picks a piece of
//! the side to move, [`apply_move`](GameState::apply_move) moves it.
//! [`click`](GameState::click) chooses between the two the way a board
//! under a mouse pointer usually does.
//!
//! # Examples
//!
//! ```
//! use chessrules::{GameState, MoveOutcome, Position, Side};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.side_to_move(), Side::Dark);
//!
//! // Pick up the dark pawn on e7 ...
//! let e7 = Position::new(4, 1);
//! assert!(game.select(e7)?.is_some());
//! assert_eq!(game.legal_destinations().count(), 2);
//!
//! // ... and push it two cells.
//! let e5 = Position::new(4, 3);
//! assert_eq!(
//!     game.apply_move(e5)?,
//!     MoveOutcome::Applied { captured: None, game_over: false },
//! );
//! assert_eq!(game.side_to_move(), Side::Light);
//! assert!(game.legal_destinations().is_empty());
//! # Ok::<_, chessrules::OutOfBounds>(())
//! ```

use tracing::{debug, info, instrument, trace};

use crate::{
    bitboard::Bitboard,
    board::Board,
    kind::PieceKind,
    position::{OutOfBounds, Position},
    rules,
    score::Score,
    setup::{Setup, SetupError},
    side::{BySide, Side},
    types::Piece,
};

/// Result of [`GameState::apply_move`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MoveOutcome {
    /// Nothing was selected, the game is over, or the move breaks the
    /// rules. The state is unchanged.
    Rejected,
    /// The move was played.
    Applied {
        /// Kind of the piece taken off the target cell.
        captured: Option<PieceKind>,
        /// The captured piece was a king. The mover has won.
        game_over: bool,
    },
}

impl MoveOutcome {
    pub const fn is_applied(self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }

    pub const fn captured(self) -> Option<PieceKind> {
        match self {
            MoveOutcome::Applied { captured, .. } => captured,
            MoveOutcome::Rejected => None,
        }
    }
}

/// Result of [`GameState::click`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Click {
    /// The click was a selection. Holds the selected piece, if any.
    Selected(Option<Piece>),
    /// The click tried to move the selected piece.
    Moved(MoveOutcome),
}

/// A game in progress, or finished by a king capture.
///
/// The state owns its [`Board`]. It only changes through
/// [`select`](GameState::select), [`apply_move`](GameState::apply_move),
/// [`click`](GameState::click) and [`reset`](GameState::reset). Calls must
/// be serialized by the caller. Every call finishes in time bounded by the
/// size of the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameState {
    board: Board,
    side_to_move: Side,
    selected: Option<Position>,
    destinations: Bitboard,
    scores: BySide<Score>,
    finished: bool,
}

impl GameState {
    /// Standard initial layout with Dark to move.
    pub fn new() -> GameState {
        GameState::from_valid_setup(Setup::default())
    }

    /// Starts a game from a custom position.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if the setup fails [`Setup::validate`].
    #[instrument(level = "debug", skip(setup), fields(setup = %setup))]
    pub fn from_setup(setup: Setup) -> Result<GameState, SetupError> {
        setup.validate()?;
        Ok(GameState::from_valid_setup(setup))
    }

    fn from_valid_setup(setup: Setup) -> GameState {
        GameState {
            board: setup.board,
            side_to_move: setup.turn,
            selected: None,
            destinations: Bitboard::EMPTY,
            scores: BySide::default(),
            finished: false,
        }
    }

    /// Discards the game and starts over from the standard initial layout.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// The selected piece, if any.
    pub fn selected(&self) -> Option<Piece> {
        self.selected
            .and_then(|pos| self.board.piece_at(pos).ok().flatten())
    }

    /// Cells the selected piece may move to, or the empty set if nothing is
    /// selected.
    pub fn legal_destinations(&self) -> Bitboard {
        self.destinations
    }

    /// Cells `piece` may move to on the current board, whether or not it is
    /// selected or its side is to move.
    pub fn destinations_for(&self, piece: &Piece) -> Bitboard {
        rules::legal_destinations(&self.board, piece)
    }

    /// Tests if `piece` may move to `target` on the current board.
    pub fn is_legal(&self, piece: &Piece, target: Position) -> bool {
        rules::is_legal(&self.board, piece, target)
    }

    /// Every piece of the side to move that can move, with its legal
    /// destinations. Empty once the game is finished.
    pub fn legal_moves(&self) -> impl Iterator<Item = (Piece, Bitboard)> + '_ {
        self.board
            .pieces()
            .filter(move |piece| !self.finished && piece.side == self.side_to_move)
            .map(move |piece| (piece, self.destinations_for(&piece)))
            .filter(|(_, destinations)| destinations.any())
    }

    pub fn scores(&self) -> &BySide<Score> {
        &self.scores
    }

    /// Pieces captured by `side`, in capture order.
    pub fn score(&self, side: Side) -> &Score {
        self.scores.get(side)
    }

    /// Tests if a king has been captured.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The side that captured a king. The side to move does not change
    /// after the final capture, so this is the side that made it.
    pub fn winner(&self) -> Option<Side> {
        self.finished.then_some(self.side_to_move)
    }

    /// Selects the piece on `pos` if it belongs to the side to move.
    ///
    /// Any previous selection is dropped first. Empty cells and enemy
    /// pieces leave nothing selected, and so does every cell once the game
    /// is finished. Returns the selected piece.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `pos` is off the board. The state is
    /// unchanged in that case.
    #[instrument(level = "debug", skip(self), fields(pos = %pos, side = %self.side_to_move))]
    pub fn select(&mut self, pos: Position) -> Result<Option<Piece>, OutOfBounds> {
        let occupant = self.board.piece_at(pos)?;
        self.clear_selection();

        match occupant {
            Some(piece) if piece.side == self.side_to_move && !self.finished => {
                self.selected = Some(pos);
                self.destinations = rules::legal_destinations(&self.board, &piece);
                debug!(
                    piece = %piece,
                    destinations = self.destinations.count(),
                    "piece selected"
                );
                Ok(Some(piece))
            }
            _ => {
                trace!(?occupant, finished = self.finished, "selection ignored");
                Ok(None)
            }
        }
    }

    /// Moves the selected piece to `target`.
    ///
    /// The move is checked again against the current board. If it is
    /// rejected nothing changes, including the selection. Otherwise an
    /// enemy piece on `target` is captured and added to the mover's score,
    /// the selection is cleared, and the turn passes to the other side
    /// unless the captured piece was a king.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `target` is off the board. The state is
    /// unchanged in that case.
    #[instrument(level = "debug", skip(self), fields(target = %target, side = %self.side_to_move))]
    pub fn apply_move(&mut self, target: Position) -> Result<MoveOutcome, OutOfBounds> {
        target.index()?;

        let Some(piece) = self.selected() else {
            trace!("no piece selected");
            return Ok(MoveOutcome::Rejected);
        };

        if self.finished || !rules::is_legal(&self.board, &piece, target) {
            trace!(piece = %piece, finished = self.finished, "move rejected");
            return Ok(MoveOutcome::Rejected);
        }

        let captured = self.board.relocate(piece.position, target).map(|captured| {
            debug_assert_ne!(captured.side, piece.side);
            self.scores.get_mut(piece.side).push(captured.kind);
            captured.kind
        });
        let game_over = captured == Some(PieceKind::King);

        self.clear_selection();

        if game_over {
            self.finished = true;
            info!(winner = %self.side_to_move, "king captured, game over");
        } else {
            self.side_to_move = !self.side_to_move;
        }

        debug!(
            from = %piece.position,
            kind = %piece.kind,
            captured = ?captured,
            "move applied"
        );

        Ok(MoveOutcome::Applied {
            captured,
            game_over,
        })
    }

    /// Handles a click on `pos`: selects if nothing is selected yet or if
    /// `pos` holds a piece of the side to move, and otherwise tries to move
    /// the selected piece there.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `pos` is off the board.
    #[instrument(level = "trace", skip(self), fields(pos = %pos))]
    pub fn click(&mut self, pos: Position) -> Result<Click, OutOfBounds> {
        let own = self
            .board
            .piece_at(pos)?
            .is_some_and(|piece| piece.side == self.side_to_move);

        if self.selected.is_none() || own {
            self.select(pos).map(Click::Selected)
        } else {
            self.apply_move(pos).map(Click::Moved)
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.destinations = Bitboard::EMPTY;
    }
}

impl Default for GameState {
    fn default() -> GameState {
        GameState::new()
    }
}
