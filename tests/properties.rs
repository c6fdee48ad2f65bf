//! Walks every move sequence of a few plies and checks what must hold after
//! each move.

use chessrules::{
    direction::Direction, rules, Bitboard, Board, GameState, MoveOutcome, Piece, PieceKind,
    Position, Setup, Side,
};

fn tally(state: &GameState) -> usize {
    state.scores().iter().map(|score| score.len()).sum()
}

fn check_move(before: &GameState, piece: Piece, target: Position) -> GameState {
    let occupant = before.board().piece_at(target).expect("on board");
    assert_ne!(occupant.map(|p| p.side), Some(piece.side), "{piece} captures own piece");
    assert!(before.is_legal(&piece, target));

    let (dx, dy) = piece.position.delta(target);
    match piece.kind {
        PieceKind::Pawn => {
            let forward = piece.side.forward();
            if occupant.is_some() {
                assert_eq!((dx.abs(), dy), (1, forward), "{piece} to {target}");
            } else {
                assert_eq!(dx, 0, "{piece} to {target}");
                assert!(dy == forward || dy == 2 * forward, "{piece} to {target}");
            }
        }
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            let direction = Direction::between(piece.position, target).expect("on a ray");
            let (sx, sy) = direction.step();
            let mut pos = piece.position.offset(sx, sy);
            while pos != target {
                assert!(!before.board().is_occupied(pos), "{piece} jumps over {pos}");
                pos = pos.offset(sx, sy);
            }
        }
        PieceKind::Knight | PieceKind::King => {}
    }

    let mut after = before.clone();
    assert_eq!(after.select(piece.position), Ok(Some(piece)));
    assert!(after.legal_destinations().contains(target));

    let outcome = after.apply_move(target).expect("on board");
    let captured = occupant.map(|p| p.kind);
    let game_over = captured == Some(PieceKind::King);
    assert_eq!(outcome, MoveOutcome::Applied { captured, game_over });

    assert_eq!(after.board().piece_at(piece.position), Ok(None));
    assert_eq!(after.board().piece_at(target), Ok(Some(piece.at(target))));
    assert_eq!(
        after.board().count(!piece.side),
        before.board().count(!piece.side) - usize::from(occupant.is_some())
    );
    assert_eq!(
        after.score(piece.side).len(),
        before.score(piece.side).len() + usize::from(occupant.is_some())
    );
    assert_eq!(after.score(!piece.side), before.score(!piece.side));
    assert_eq!(
        tally(&after) + after.board().pieces().count(),
        tally(before) + before.board().pieces().count()
    );
    if occupant.is_some() {
        assert_eq!(after.score(piece.side).last(), captured);
    }

    assert_eq!(after.is_finished(), game_over);
    if game_over {
        assert_eq!(after.side_to_move(), piece.side);
        assert_eq!(after.winner(), Some(piece.side));
    } else {
        assert_eq!(after.side_to_move(), !piece.side);
    }
    assert_eq!(after.selected(), None);
    assert_eq!(after.legal_destinations(), Bitboard::EMPTY);

    after
}

fn check_rejections(state: &GameState, piece: Piece, destinations: Bitboard) {
    for target in Position::ALL {
        if destinations.contains(target) {
            continue;
        }
        let mut after = state.clone();
        after.select(piece.position).expect("on board");
        let selected = after.clone();
        assert_eq!(after.apply_move(target), Ok(MoveOutcome::Rejected));
        assert_eq!(after, selected, "{piece} to {target} changed the state");
    }
}

fn walk(state: &GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for (piece, destinations) in state.legal_moves() {
        assert_eq!(piece.side, state.side_to_move());
        assert!((destinations & state.board().by_side(piece.side)).is_empty());
        for target in destinations {
            let child = check_move(state, piece, target);
            nodes += walk(&child, depth - 1);
        }
    }
    nodes
}

fn setup(s: &str) -> GameState {
    GameState::from_setup(s.parse::<Setup>().expect("valid setup")).expect("legal setup")
}

#[test]
fn test_walk_initial() {
    assert_eq!(walk(&GameState::new(), 2), 400);
}

#[test]
fn test_walk_from_start() {
    let mut game = GameState::new();
    for (from, to) in [("e7", "e5"), ("d2", "d4"), ("e5", "d4"), ("d1", "d4")] {
        game.select(from.parse().expect("valid position")).expect("on board");
        let outcome = game
            .apply_move(to.parse().expect("valid position"))
            .expect("on board");
        assert!(outcome.is_applied());
    }
    assert!(walk(&game, 3) > 0);
}

#[test]
fn test_walk_king_in_reach() {
    // Both queens are one move away from taking the enemy king.
    let game = setup("4k3/8/8/q7/Q7/8/8/4K3 d");
    assert!(walk(&game, 3) > 0);
}

#[test]
fn test_rejections_initial() {
    let game = GameState::new();
    for (piece, destinations) in game.legal_moves() {
        check_rejections(&game, piece, destinations);
    }
    for piece in game.board().pieces().filter(|p| p.side == Side::Light) {
        let mut after = game.clone();
        assert_eq!(after.select(piece.position), Ok(None));
        assert_eq!(after, game);
    }
}

#[test]
fn test_rejections_open_position() {
    let game = setup("r3k2r/pp1n1ppp/2p5/3pP3/3Pq3/2N2N2/PPP2PPP/R2QK2R l");
    for (piece, destinations) in game.legal_moves() {
        check_rejections(&game, piece, destinations);
    }
}

#[test]
fn test_blocker_removes_destinations() {
    for (fen, from) in [
        ("4k3/8/8/8/3Q4/8/8/4K3", "d4"),
        ("4k3/8/8/2b5/8/8/8/4K3", "c5"),
        ("4k3/8/8/8/8/8/8/R3K3", "a1"),
    ] {
        let board: Board = fen.parse().expect("valid board");
        let slider = board
            .piece_at(from.parse().expect("valid position"))
            .expect("on board")
            .expect("slider");
        let open = rules::legal_destinations(&board, &slider);

        for target in open {
            let direction = Direction::between(slider.position, target).expect("on a ray");
            let (sx, sy) = direction.step();
            let mut between = slider.position.offset(sx, sy);
            while between != target {
                for blocker in [Side::Light.pawn(), Side::Dark.pawn()] {
                    let mut blocked = board.clone();
                    blocked.place(between, blocker).expect("on board");
                    assert!(
                        !rules::legal_destinations(&blocked, &slider).contains(target),
                        "{slider} reaches {target} over {between}"
                    );
                }
                between = between.offset(sx, sy);
            }
        }
    }
}
