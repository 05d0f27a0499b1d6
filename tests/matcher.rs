use motor_damas::{
    find_move, find_move_text, find_moves_by_fields, generate_forced_captures, parse_path, Move,
    MoveGenerator, NotationError, Piece, Position, PositionError,
};

const KING_CAPTURE: &str = "......xx.....x...x...O....x.......................W";

fn full(moves: &[Move]) -> Vec<String> {
    moves.iter().map(Move::full_notation).collect()
}

#[test]
fn find_move_recovers_the_move_played() {
    let generator = MoveGenerator::default();
    let position: Position = "..............o.o..xx..x..x.o.....................W".parse().unwrap();
    let m = find_move_text(
        &position,
        &generator,
        "..............o....x...x.ox.o.....................B",
    )
    .unwrap()
    .unwrap();
    assert_eq!(m.full_notation(), "17x26");
    assert_eq!(m.captured_fields(), [21]);
}

#[test]
fn find_move_distinguishes_landing_fields() {
    let generator = MoveGenerator::default();
    let position: Position = KING_CAPTURE.parse().unwrap();
    for m in generator.generate_moves(&position) {
        let mut target = position.clone();
        target.apply(&m);
        assert_eq!(find_move(&position, &generator, &target), Some(m));
    }
}

#[test]
fn find_move_without_match() {
    let generator = MoveGenerator::default();
    let position: Position = KING_CAPTURE.parse().unwrap();
    assert_eq!(find_move_text(&position, &generator, KING_CAPTURE), Ok(None));
    assert!(matches!(
        find_move_text(&position, &generator, "xx"),
        Err(PositionError::TooShort { .. })
    ));
}

#[test]
fn moves_by_begin_and_end_field() {
    let generator = MoveGenerator::default();
    let position: Position = KING_CAPTURE.parse().unwrap();
    let moves = find_moves_by_fields(&position, &generator, 22, 5);
    assert_eq!(full(&moves), ["22x13x2x16x32x5"]);
    // Os lances de 22 para 11 são ilegais.
    assert!(find_moves_by_fields(&position, &generator, 22, 11).is_empty());
}

#[test]
fn forced_captures_follow_single_replies() {
    let generator = MoveGenerator::default();
    let position: Position = "..............o.o..xx..x..x.o.....................W".parse().unwrap();
    let forced = generate_forced_captures(&position, &generator);
    assert_eq!(full(&forced), ["17x26", "24x33", "15x24"]);

    let mut end = position.clone();
    for m in &forced {
        end.apply(m);
    }
    assert_eq!(end.to_text(), ".......................o.ox.....x.................B");
}

#[test]
fn forced_captures_stop_at_a_choice() {
    let generator = MoveGenerator::default();
    let position: Position = "...............x....oo...x......o.........o.....o.B".parse().unwrap();
    let forced = generate_forced_captures(&position, &generator);
    assert_eq!(full(&forced), ["26x17x28x39x48"]);
    assert_eq!(forced[0].end_piece(), Piece::BLACK_KING);
}

#[test]
fn equivalent_routes_count_as_one_forced_capture() {
    let generator = MoveGenerator::default();
    let position: Position = "......xx........xx...o....x.......................W".parse().unwrap();
    let forced = generate_forced_captures(&position, &generator);
    assert_eq!(full(&forced), ["22x11x2x13x22x31"]);
}

#[test]
fn move_from_notation_matches_generated_move() {
    let position: Position = KING_CAPTURE.parse().unwrap();
    let path = parse_path("22x13x2x16x32x10").unwrap();
    let m = Move::from_path(&position, &path).unwrap();
    assert_eq!(m.captured_fields(), [18, 8, 7, 27, 14]);
    assert_eq!(m.captured_pieces(), [Piece::BLACK_MAN; 5]);
    assert!(MoveGenerator::default().generate_moves(&position).contains(&m));

    let quiet = Move::from_path(&position, &[22, 17]).unwrap();
    assert!(!quiet.is_capture());
    assert_eq!(quiet.to_string(), "22-17");
}

#[test]
fn move_from_bad_notation() {
    let position: Position = KING_CAPTURE.parse().unwrap();
    assert_eq!(Move::from_path(&position, &[22]), Err(NotationError::TooShort(1)));
    assert_eq!(Move::from_path(&position, &[22, 51]), Err(NotationError::InvalidField(51)));
    assert_eq!(Move::from_path(&position, &[1, 6]), Err(NotationError::EmptyBeginField(1)));
    assert_eq!(Move::from_path(&position, &[7, 12]), Err(NotationError::WrongColor(7)));
    assert_eq!(Move::from_path(&position, &[22, 29]), Err(NotationError::NotAligned(22, 29)));
    assert!(matches!(
        Move::from_path(&position, &[22, 17, 11]),
        Err(NotationError::MissingCapture(_))
    ));
}

// Tabuleiro internacional vazio com as peças dadas, brancas a jogar.
fn board(pieces: &[(usize, char)]) -> Position {
    let mut text = vec!['.'; 50];
    for &(f, ch) in pieces {
        text[f - 1] = ch;
    }
    text.push('W');
    text.into_iter().collect::<String>().parse().unwrap()
}

#[test]
fn move_from_path_checks_the_board() {
    let position: Position = KING_CAPTURE.parse().unwrap();
    assert_eq!(Move::from_path(&position, &[22, 18]), Err(NotationError::OccupiedField(18)));

    let two_in_a_row = board(&[(22, 'O'), (18, 'x'), (13, 'x')]);
    assert_eq!(Move::from_path(&two_in_a_row, &[22, 9]), Err(NotationError::Blocked(22, 9)));

    let own_piece = board(&[(22, 'O'), (18, 'o')]);
    assert_eq!(Move::from_path(&own_piece, &[22, 13]), Err(NotationError::Blocked(22, 13)));

    // A mesma peça não pode ser saltada duas vezes.
    let single = board(&[(22, 'O'), (18, 'x')]);
    assert_eq!(Move::from_path(&single, &[22, 13, 22]), Err(NotationError::Blocked(13, 22)));
}

#[test]
fn man_from_path_moves_one_field_or_jumps_one_piece() {
    let alone = board(&[(32, 'o')]);
    assert_eq!(Move::from_path(&alone, &[32, 21]), Err(NotationError::ManTooFar(32, 21)));
    assert!(Move::from_path(&alone, &[32, 27]).is_ok());

    let with_enemy = board(&[(32, 'o'), (27, 'x')]);
    assert_eq!(Move::from_path(&with_enemy, &[32, 16]), Err(NotationError::ManTooFar(32, 16)));
    let capture = Move::from_path(&with_enemy, &[32, 21]).unwrap();
    assert_eq!(capture.captured_fields(), [27]);
}

#[test]
fn rejected_path_never_reaches_the_position() {
    let position: Position = KING_CAPTURE.parse().unwrap();
    let mut scratch = position.clone();
    if let Ok(m) = Move::from_path(&scratch, &[22, 18]) {
        scratch.apply(&m);
        scratch.undo(&m);
    }
    assert_eq!(scratch, position);
    assert_eq!(scratch.piece(18), Some(Piece::BLACK_MAN));
}
