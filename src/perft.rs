// Ficheiro: src/perft.rs
// Descrição: Contém a lógica para o teste de performance (Perft),
// uma ferramenta para verificar a corretude da geração de lances.

use rayon::prelude::*;
use std::time::{Duration, Instant};

use crate::moves::MoveGenerator;
use crate::position::Position;
use crate::types::Move;

/// Resultado de uma execução do Perft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerftResult {
    pub depth: u8,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Função principal do Perft que inicia o teste.
pub fn run_perft(position: &Position, generator: &MoveGenerator, depth: u8) -> PerftResult {
    log::info!("A executar Perft para profundidade {}", depth);
    let start_time = Instant::now();
    let nodes = perft(position, generator, depth);
    let elapsed = start_time.elapsed();
    log::info!("Nós totais: {} em {:?}", nodes, elapsed);
    PerftResult { depth, nodes, elapsed }
}

/// Conta as folhas da árvore de lances legais com a profundidade dada.
pub fn perft(position: &Position, generator: &MoveGenerator, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generator.generate_moves(position);
    if depth == 1 {
        return moves.len() as u64;
    }

    // Para profundidades maiores que 3, usa paralelização
    if depth > 3 {
        moves
            .into_par_iter()
            .map(|m| {
                let mut next = position.clone();
                next.apply(&m);
                perft(&next, generator, depth - 1)
            })
            .sum()
    } else {
        let mut scratch = position.clone();
        moves
            .iter()
            .map(|m| {
                scratch.apply(m);
                let nodes = perft(&scratch, generator, depth - 1);
                scratch.undo(m);
                nodes
            })
            .sum()
    }
}

/// Perft separado por lance da raiz, pela ordem de geração. A profundidade 0
/// não tem lances de raiz e devolve uma lista vazia.
pub fn perft_divide(position: &Position, generator: &MoveGenerator, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    generator
        .generate_moves(position)
        .into_par_iter()
        .map(|m| {
            let mut next = position.clone();
            next.apply(&m);
            let nodes = perft(&next, generator, depth - 1);
            (m, nodes)
        })
        .collect()
}
