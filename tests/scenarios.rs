use chessrules::{
    rules, Board, Click, GameState, MoveOutcome, OutOfBounds, PieceKind, Position, Setup, Side,
};

fn pos(s: &str) -> Position {
    s.parse().expect("valid position")
}

fn game(setup: &str) -> GameState {
    let setup: Setup = setup.parse().expect("valid setup");
    GameState::from_setup(setup).expect("legal setup")
}

fn play(game: &mut GameState, from: &str, to: &str) -> MoveOutcome {
    game.select(pos(from))
        .expect("on board")
        .expect("piece of the side to move");
    game.apply_move(pos(to)).expect("on board")
}

#[test]
fn test_pawn_double_step_from_start() {
    let mut game = GameState::new();
    assert_eq!(
        play(&mut game, "d7", "d5"),
        MoveOutcome::Applied {
            captured: None,
            game_over: false
        }
    );
    assert_eq!(
        play(&mut game, "e2", "e4"),
        MoveOutcome::Applied {
            captured: None,
            game_over: false
        }
    );

    // The d-pawn has left its starting row.
    assert_eq!(play(&mut game, "d5", "d3"), MoveOutcome::Rejected);
    assert_eq!(game.side_to_move(), Side::Dark);
    assert_eq!(
        game.board().board_fen(),
        "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR"
    );
}

#[test]
fn test_pawn_double_step_over_piece() {
    let mut game = GameState::new();
    play(&mut game, "b8", "c6");
    play(&mut game, "a2", "a3");

    // The knight stands on c6, but only the target cell matters.
    assert_eq!(
        play(&mut game, "c7", "c5"),
        MoveOutcome::Applied {
            captured: None,
            game_over: false
        }
    );
}

#[test]
fn test_pawn_blocked_and_captures() {
    let board: Board = "4k3/8/8/8/3p4/3Pp3/8/4K3".parse().expect("valid board");
    let light = board.piece_at(pos("d3")).expect("on board").expect("pawn");
    assert!(!rules::is_legal(&board, &light, pos("d4")));
    assert!(!rules::is_legal(&board, &light, pos("e3")));
    assert!(rules::legal_destinations(&board, &light).is_empty());

    let dark = board.piece_at(pos("d4")).expect("on board").expect("pawn");
    assert!(!rules::is_legal(&board, &dark, pos("d3")));
    assert!(!rules::is_legal(&board, &dark, pos("e3")));
    assert!(!rules::is_legal(&board, &dark, pos("c5")));
    assert!(!rules::is_legal(&board, &dark, pos("d5")));
}

#[test]
fn test_knight_ignores_blockers() {
    let board = Board::new();
    let knight = board.piece_at(pos("b1")).expect("on board").expect("knight");
    assert!(rules::is_legal(&board, &knight, pos("a3")));
    assert!(rules::is_legal(&board, &knight, pos("c3")));
    assert!(!rules::is_legal(&board, &knight, pos("d2")));
}

#[test]
fn test_sliders_are_blocked() {
    let board = Board::new();
    for from in ["a1", "c1", "d1", "f1", "h1", "a8", "c8", "d8", "f8", "h8"] {
        let piece = board.piece_at(pos(from)).expect("on board").expect("piece");
        assert!(
            rules::legal_destinations(&board, &piece).is_empty(),
            "{piece} should be blocked"
        );
    }
}

#[test]
fn test_rook_captures_king() {
    let mut game = game("4k3/8/8/8/8/8/8/4RK2 l");
    assert_eq!(
        play(&mut game, "e1", "e8"),
        MoveOutcome::Applied {
            captured: Some(PieceKind::King),
            game_over: true
        }
    );
    assert!(game.is_finished());
    assert_eq!(game.winner(), Some(Side::Light));
    assert_eq!(game.side_to_move(), Side::Light);
    assert_eq!(game.score(Side::Light).as_slice(), [PieceKind::King]);
    assert_eq!(game.board().king_of(Side::Dark), None);

    let before = game.clone();
    assert_eq!(game.click(pos("e8")), Ok(Click::Selected(None)));
    assert_eq!(game, before);
}

#[test]
fn test_game_to_capture() {
    let mut game = GameState::new();
    for (from, to) in [("e7", "e5"), ("f2", "f4"), ("e5", "f4"), ("g2", "g4")] {
        assert!(play(&mut game, from, to).is_applied());
    }
    assert_eq!(game.score(Side::Dark).as_slice(), [PieceKind::Pawn]);
    assert!(game.score(Side::Light).is_empty());

    // Fool's mate style, but the king has to be taken.
    assert!(play(&mut game, "d8", "h4").is_applied());
    assert!(play(&mut game, "a2", "a3").is_applied());
    assert_eq!(
        play(&mut game, "h4", "e1"),
        MoveOutcome::Applied {
            captured: Some(PieceKind::King),
            game_over: true
        }
    );
    assert_eq!(game.winner(), Some(Side::Dark));
    assert_eq!(game.score(Side::Dark).as_slice(), [PieceKind::Pawn, PieceKind::King]);

    game.reset();
    assert_eq!(game, GameState::new());
}

#[test]
fn test_out_of_bounds() {
    let mut game = GameState::new();
    for off in [
        Position::new(-1, 0),
        Position::new(8, 3),
        Position::new(2, -1),
        Position::new(2, 8),
    ] {
        assert_eq!(game.select(off), Err(OutOfBounds(off)));
        assert_eq!(game.apply_move(off), Err(OutOfBounds(off)));
        assert_eq!(game.click(off), Err(OutOfBounds(off)));
        assert_eq!(game.board().piece_at(off), Err(OutOfBounds(off)));
    }
    assert_eq!(game, GameState::new());
}

#[test]
fn test_click_sequence() {
    let mut game = GameState::new();
    assert!(matches!(game.click(pos("g8")), Ok(Click::Selected(Some(_)))));
    assert_eq!(
        game.legal_destinations().into_iter().collect::<Vec<_>>(),
        [pos("f6"), pos("h6")]
    );
    assert_eq!(
        game.click(pos("h6")),
        Ok(Click::Moved(MoveOutcome::Applied {
            captured: None,
            game_over: false
        }))
    );
    assert_eq!(game.selected(), None);
    assert!(game.legal_destinations().is_empty());

    // Dark pieces can no longer be selected.
    assert_eq!(game.click(pos("h6")), Ok(Click::Selected(None)));
}

#[test]
fn test_knight_surrounded() {
    let open: Board = "4k3/8/8/8/3N4/8/8/4K3".parse().expect("valid board");
    let crowded: Board = "4k3/8/8/3p4/2pNP3/3P4/8/4K3".parse().expect("valid board");

    let knight = open.piece_at(pos("d4")).expect("on board").expect("knight");
    assert_eq!(
        crowded.piece_at(pos("d4")).expect("on board"),
        Some(knight)
    );

    let destinations = rules::legal_destinations(&open, &knight);
    assert_eq!(destinations.count(), 8);
    assert_eq!(rules::legal_destinations(&crowded, &knight), destinations);
}
