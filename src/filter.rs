// Ficheiro: src/filter.rs
// Descrição: Filtros de legalidade aplicados aos lances gerados. Cada variante
// de damas tem a sua regra para escolher entre capturas.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VariantError;
use crate::types::Move;

/// Separa os lances gerados em legais e ilegais.
///
/// Um filtro é determinístico e não altera os lances: cada lance de entrada
/// aparece exatamente numa das duas listas, pela ordem original.
pub trait MoveFilter: Send + Sync {
    fn filter(&self, moves: &[Move]) -> (Vec<Move>, Vec<Move>);
}

// Reparte os lances conforme o predicado, mantendo a ordem.
fn partition(moves: &[Move], is_legal: impl Fn(&Move) -> bool) -> (Vec<Move>, Vec<Move>) {
    moves.iter().cloned().partition(|m| is_legal(m))
}

fn max_capture_count(moves: &[Move]) -> usize {
    moves.iter().map(Move::capture_count).max().unwrap_or(0)
}

/// Regra internacional: só são legais os lances que capturam o maior número
/// de peças. Sem capturas, todos os lances são legais.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaximumCapture;

impl MoveFilter for MaximumCapture {
    fn filter(&self, moves: &[Move]) -> (Vec<Move>, Vec<Move>) {
        let max_capture = max_capture_count(moves);
        partition(moves, |m| m.capture_count() == max_capture)
    }
}

/// Captura obrigatória, mas de qualquer tamanho (damas inglesas e russas).
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyCapture;

impl MoveFilter for AnyCapture {
    fn filter(&self, moves: &[Move]) -> (Vec<Move>, Vec<Move>) {
        let max_capture = max_capture_count(moves);
        partition(moves, |m| max_capture == 0 || m.is_capture())
    }
}

// Prioridade de uma captura nas damas italianas, comparada
// lexicograficamente pela ordem dos campos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ItalianPriority {
    capture_count: usize,
    is_king_move: bool,
    captured_kings: usize,
    first_captured_is_king: bool,
}

impl ItalianPriority {
    fn of(m: &Move) -> Self {
        ItalianPriority {
            capture_count: m.capture_count(),
            is_king_move: m.is_king_move(),
            captured_kings: m.captured_king_count(),
            first_captured_is_king: m.first_captured_is_king(),
        }
    }
}

/// Regra italiana. Entre as capturas ganha, por esta ordem: mais peças
/// capturadas, captura feita por uma dama, mais damas capturadas, primeira
/// peça capturada ser uma dama. São legais as capturas empatadas com a melhor
/// em todos os critérios.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItalianCapture;

impl MoveFilter for ItalianCapture {
    fn filter(&self, moves: &[Move]) -> (Vec<Move>, Vec<Move>) {
        let best = moves
            .iter()
            .filter(|m| m.is_capture())
            .map(ItalianPriority::of)
            .max();

        match best {
            None => partition(moves, |_| true),
            Some(best) => partition(moves, |m| ItalianPriority::of(m) == best),
        }
    }
}

/// Regra espanhola: o maior número de peças capturadas e, entre essas
/// capturas, o maior número de damas capturadas.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishCapture;

impl MoveFilter for SpanishCapture {
    fn filter(&self, moves: &[Move]) -> (Vec<Move>, Vec<Move>) {
        let max_capture = max_capture_count(moves);
        let max_kings = moves
            .iter()
            .filter(|m| m.capture_count() == max_capture)
            .map(Move::captured_king_count)
            .max()
            .unwrap_or(0);
        partition(moves, |m| {
            m.capture_count() == max_capture && m.captured_king_count() == max_kings
        })
    }
}

/// Nome de um dos filtros incluídos, para configuração e linha de comandos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    #[default]
    MaximumCapture,
    AnyCapture,
    Italian,
    Spanish,
}

impl FilterKind {
    pub fn build(self) -> Box<dyn MoveFilter> {
        match self {
            FilterKind::MaximumCapture => Box::new(MaximumCapture),
            FilterKind::AnyCapture => Box::new(AnyCapture),
            FilterKind::Italian => Box::new(ItalianCapture),
            FilterKind::Spanish => Box::new(SpanishCapture),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FilterKind::MaximumCapture => "maximum-capture",
            FilterKind::AnyCapture => "any-capture",
            FilterKind::Italian => "italian",
            FilterKind::Spanish => "spanish",
        }
    }
}

impl FromStr for FilterKind {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            FilterKind::MaximumCapture,
            FilterKind::AnyCapture,
            FilterKind::Italian,
            FilterKind::Spanish,
        ]
        .into_iter()
        .find(|kind| kind.name() == s)
        .ok_or_else(|| VariantError::UnknownFilter(s.to_string()))
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
