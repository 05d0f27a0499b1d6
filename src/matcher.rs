// Ficheiro: src/matcher.rs
// Descrição: Procura de lances a partir do resultado pretendido (a posição
// seguinte ou as casas de partida e de chegada) e sequências de capturas
// forçadas.

use crate::error::PositionError;
use crate::moves::MoveGenerator;
use crate::position::Position;
use crate::types::{Field, Move};

/// Executa as capturas forçadas a partir de `position`: enquanto houver
/// exatamente um lance legal e esse lance for uma captura, executa-o.
/// Devolve os lances executados, pela ordem.
pub fn generate_forced_captures(position: &Position, generator: &MoveGenerator) -> Vec<Move> {
    let mut position = position.clone();
    let mut result = Vec::new();
    loop {
        let moves = generator.generate_moves(&position);
        let [m] = moves.as_slice() else { break };
        if !m.is_capture() {
            break;
        }
        position.apply(m);
        result.push(m.clone());
    }
    log::debug!("{} capturas forçadas a partir de {}", result.len(), position);
    result
}

/// Primeiro lance legal que transforma `position` em `target`.
///
/// As posições são comparadas pelo texto, por isso a orientação e a notação
/// do tipo de jogo não contam.
pub fn find_move(position: &Position, generator: &MoveGenerator, target: &Position) -> Option<Move> {
    let target = target.to_text();
    let mut scratch = position.clone();
    for m in generator.generate_moves(position) {
        scratch.apply(&m);
        let found = scratch.to_text() == target;
        scratch.undo(&m);
        if found {
            return Some(m);
        }
    }
    log::debug!("nenhum lance leva {} a {}", position, target);
    None
}

/// Como `find_move`, com a posição de destino em texto.
pub fn find_move_text(
    position: &Position,
    generator: &MoveGenerator,
    target: &str,
) -> Result<Option<Move>, PositionError> {
    let target = Position::from_text(*position.game_type(), target)?;
    Ok(find_move(position, generator, &target))
}

/// Lances legais que partem de `from` e terminam em `to`. Pode haver mais do
/// que um quando capturas diferentes ligam as mesmas casas.
pub fn find_moves_by_fields(
    position: &Position,
    generator: &MoveGenerator,
    from: Field,
    to: Field,
) -> Vec<Move> {
    generator
        .generate_moves(position)
        .into_iter()
        .filter(|m| m.begin_field() == from && m.end_field() == to)
        .collect()
}
