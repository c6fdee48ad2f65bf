//! A library for the rules of two-player chess: move legality, move
//! application, captures and the end of the game.
//!
//! There is no check, castling, en passant or promotion. A game ends when a
//! king is captured. Dark moves first.
//!
//! # Examples
//!
//! List the cells a piece may move to:
//!
//! ```
//! use chessrules::{rules, Board, Position};
//!
//! let board = Board::new();
//! let knight = board.piece_at(Position::new(1, 0))?.expect("knight on b8");
//! let destinations = rules::legal_destinations(&board, &knight);
//! assert_eq!(destinations.count(), 2);
//! # Ok::<_, chessrules::OutOfBounds>(())
//! ```
//!
//! Play moves:
//!
//! ```
//! use chessrules::{Click, GameState, MoveOutcome, Position, Side};
//!
//! let mut game = GameState::new();
//!
//! // Dark pushes the d-pawn, then Light answers.
//! game.click(Position::new(3, 1))?;
//! assert_eq!(
//!     game.click(Position::new(3, 3))?,
//!     Click::Moved(MoveOutcome::Applied { captured: None, game_over: false }),
//! );
//! assert_eq!(game.side_to_move(), Side::Light);
//! # Ok::<_, chessrules::OutOfBounds>(())
//! ```
//!
//! Detect the end of the game:
//!
//! ```
//! # use chessrules::GameState;
//! # let game = GameState::new();
//! assert!(!game.is_finished());
//! assert_eq!(game.winner(), None); // no winner yet
//! ```
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural representations.

#![doc(html_root_url = "https://docs.rs/chessrules/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod kind;
mod position;
mod score;
mod side;
mod types;

pub mod bitboard;
pub mod board;
pub mod direction;
pub mod game;
pub mod perft;
pub mod rules;
pub mod setup;

pub use bitboard::Bitboard;
pub use board::{Board, ParseBoardError};
pub use direction::Direction;
pub use game::{Click, GameState, MoveOutcome};
pub use kind::PieceKind;
pub use perft::perft;
pub use position::{OutOfBounds, ParsePositionError, Position};
pub use score::Score;
pub use setup::{Setup, SetupError, SetupErrorKinds};
pub use side::{BySide, BySideIter, ParseSideError, Side};
pub use types::Piece;
