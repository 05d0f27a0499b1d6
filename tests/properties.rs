use motor_damas::{find_move, GameType, MoveGenerator, Position};

// Todas as posições alcançáveis a partir de `start` em até `depth` lances.
fn reachable(start: &Position, generator: &MoveGenerator, depth: u8) -> Vec<Position> {
    let mut result = vec![start.clone()];
    let mut frontier = vec![start.clone()];
    for _ in 0..depth {
        let mut next = Vec::new();
        for position in &frontier {
            for m in generator.generate_moves(position) {
                let mut child = position.clone();
                child.apply(&m);
                next.push(child);
            }
        }
        result.extend(next.iter().cloned());
        frontier = next;
    }
    result
}

fn sample() -> (MoveGenerator, Vec<Position>) {
    let generator = MoveGenerator::default();
    let start: Position = "..............o.o..xx..x..x.o....o....x.o...o.....W".parse().unwrap();
    let mut positions = reachable(&start, &generator, 3);
    positions.extend(reachable(&Position::initial(GameType::INTERNATIONAL), &generator, 3));
    (generator, positions)
}

#[test]
fn text_round_trip_of_reachable_positions() {
    let (_, positions) = sample();
    for position in positions {
        let text = position.to_text();
        assert_eq!(text.parse::<Position>().unwrap(), position);
        assert_eq!(position.diagram().parse::<Position>().unwrap(), position);
    }
}

#[test]
fn maximum_capture_keeps_only_the_longest_captures() {
    let (generator, positions) = sample();
    for position in positions {
        let generated = generator.generate(&position);
        let all = generated.all_moves();
        let legal = generated.legal_moves();
        assert_eq!(legal.is_empty(), all.is_empty(), "{}", position);

        let max = all.iter().map(|m| m.capture_count()).max().unwrap_or(0);
        assert!(legal.iter().all(|m| m.capture_count() == max), "{}", position);
        if max == 0 {
            assert_eq!(legal, all);
        }
        for m in all {
            if !m.is_capture() {
                assert_eq!(m.field_count(), 2);
            }
            assert!(m.captured_fields().len() < m.field_count());
        }
    }
}

#[test]
fn apply_and_undo_restore_the_position() {
    let (generator, positions) = sample();
    for position in positions {
        let mut scratch = position.clone();
        for m in generator.generate(&position).all_moves() {
            scratch.apply(m);
            scratch.undo(m);
            assert_eq!(scratch, position, "{}", m);
        }
    }
}

#[test]
fn every_legal_move_is_found_from_its_result() {
    let (generator, positions) = sample();
    for position in positions.iter().take(200) {
        for m in generator.generate_moves(position) {
            let mut target = position.clone();
            target.apply(&m);
            let found = find_move(position, &generator, &target).expect("move is found");
            assert!(!found.notation().is_empty());
            assert_eq!(found.end_field(), m.end_field());
        }
    }
}
