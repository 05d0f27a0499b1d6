// Ficheiro: src/moves/mod.rs
// Descrição: Gerador de lances. Percorre o tabuleiro à procura das peças do
// lado a jogar e, para cada uma, faz uma busca em profundidade com retrocesso
// pelas cadeias de capturas, seguida dos lances simples.

pub mod king;
pub mod man;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::filter::{FilterKind, MoveFilter};
use crate::geometry::GameType;
use crate::position::Position;
use crate::types::*;

/// Regras da variante que mudam a geração de lances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// As damas deslizam por várias casas vazias antes e depois de capturar.
    pub long_moves: bool,
    /// As pedras podem capturar para trás.
    pub backwards_capture: bool,
    /// Uma pedra que chega à linha de promoção a meio de uma captura continua
    /// a capturar já como dama (regra russa).
    pub promote_during_capture: bool,
    /// Capturas ortogonais além das diagonais (damas frísias).
    pub frysian_moves: bool,
    /// Regra que decide quais dos lances gerados são legais.
    pub filter: FilterKind,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            long_moves: true,
            backwards_capture: true,
            promote_during_capture: false,
            frysian_moves: false,
            filter: FilterKind::MaximumCapture,
        }
    }
}

/// Resultado de uma geração: todos os lances encontrados e a sua separação em
/// legais e ilegais pelo filtro.
///
/// `all` guarda cada caminho encontrado, incluindo caminhos equivalentes da
/// mesma captura. Nas listas `legal` e `illegal` esses caminhos aparecem uma
/// só vez.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedMoves {
    all: Vec<Move>,
    legal: Vec<Move>,
    illegal: Vec<Move>,
}

impl GeneratedMoves {
    pub fn all_moves(&self) -> &[Move] {
        &self.all
    }

    pub fn legal_moves(&self) -> &[Move] {
        &self.legal
    }

    pub fn illegal_moves(&self) -> &[Move] {
        &self.illegal
    }

    pub fn into_legal(self) -> Vec<Move> {
        self.legal
    }
}

/// Gerador de lances para uma variante.
///
/// O gerador não guarda estado entre chamadas: cada geração trabalha sobre a
/// sua própria cópia do tabuleiro, por isso a mesma instância pode ser usada
/// por várias threads ao mesmo tempo.
pub struct MoveGenerator {
    config: GeneratorConfig,
    filter: Box<dyn MoveFilter>,
}

impl MoveGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        MoveGenerator {
            config,
            filter: config.filter.build(),
        }
    }

    /// Usa um filtro próprio em vez do indicado em `config.filter`.
    pub fn with_filter(config: GeneratorConfig, filter: Box<dyn MoveFilter>) -> Self {
        MoveGenerator { config, filter }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Gera todos os lances do lado a jogar e separa-os com o filtro.
    /// A posição recebida não é alterada.
    pub fn generate(&self, position: &Position) -> GeneratedMoves {
        let paths = Search::new(position, self.config).run();

        let all: Vec<Move> = paths
            .into_iter()
            .map(|path| Move::annotate(position, path, self.config.promote_during_capture))
            .collect();

        // O filtro vê todos os caminhos: a ordem das peças capturadas conta
        // na regra italiana. Só depois se juntam os caminhos equivalentes.
        let (legal, illegal) = self.filter.filter(&all);
        let legal = without_equivalent_routes(legal);
        let illegal = without_equivalent_routes(illegal);
        log::debug!(
            "{} lances gerados para {:?}: {} legais, {} ilegais",
            all.len(),
            position.side_to_move(),
            legal.len(),
            illegal.len()
        );
        GeneratedMoves { all, legal, illegal }
    }

    /// Devolve apenas os lances legais.
    pub fn generate_moves(&self, position: &Position) -> Vec<Move> {
        self.generate(position).into_legal()
    }
}

// A mesma captura pode ser encontrada por caminhos diferentes (o mesmo anel de
// peças percorrido nos dois sentidos). Fica o primeiro.
fn without_equivalent_routes(moves: Vec<Move>) -> Vec<Move> {
    let mut result: Vec<Move> = Vec::with_capacity(moves.len());
    for m in moves {
        if m.is_capture() && result.iter().any(|other| other.is_equivalent(&m)) {
            continue;
        }
        result.push(m);
    }
    result
}

impl Default for MoveGenerator {
    fn default() -> Self {
        MoveGenerator::new(GeneratorConfig::default())
    }
}

impl fmt::Debug for MoveGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoveGenerator").field("config", &self.config).finish_non_exhaustive()
    }
}

// Estado transitório de uma geração. Vive apenas durante uma chamada a
// `MoveGenerator::generate`.
pub(crate) struct Search {
    config: GeneratorConfig,
    game_type: GameType,
    board: Position,
    color: Color,
    // Casas do caminho da captura em curso.
    path: Vec<Field>,
    // Peças já saltadas na captura em curso, pela ordem.
    captured: Vec<Field>,
    is_captured: Vec<bool>,
    paths: Vec<Vec<Field>>,
}

// O que um `Scope` desfaz quando sai de âmbito.
#[derive(Debug, Clone, Copy)]
enum Undo {
    Path,
    Capture(Field),
    Lift(Field, Piece),
}

// Alteração temporária ao estado da busca, desfeita no drop. Dá acesso à
// busca através de Deref, para que a recursão continue dentro do âmbito.
pub(crate) struct Scope<'s> {
    search: &'s mut Search,
    undo: Undo,
}

impl Deref for Scope<'_> {
    type Target = Search;

    fn deref(&self) -> &Search {
        self.search
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Search {
        self.search
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        match self.undo {
            Undo::Path => {
                self.search.path.pop();
            }
            Undo::Capture(f) => {
                self.search.captured.pop();
                self.search.is_captured[f as usize] = false;
            }
            Undo::Lift(f, piece) => self.search.board.set_piece(f, Some(piece)),
        }
    }
}

impl Search {
    fn new(position: &Position, config: GeneratorConfig) -> Self {
        let game_type = *position.game_type();
        Search {
            config,
            game_type,
            board: position.clone(),
            color: position.side_to_move(),
            path: Vec::new(),
            captured: Vec::new(),
            is_captured: vec![false; game_type.max_field() as usize + 1],
            paths: Vec::with_capacity(32),
        }
    }

    // Percorre as casas por ordem crescente; para cada peça do lado a jogar
    // procura primeiro as capturas e depois os lances simples.
    fn run(mut self) -> Vec<Vec<Field>> {
        for f in 1..=self.game_type.max_field() {
            let Some(piece) = self.board.piece(f) else { continue };
            if piece.color != self.color {
                continue;
            }
            let Some((row, col)) = self.game_type.f2rc(f) else { continue };

            // A casa de partida fica vazia durante a busca de capturas.
            match piece.kind {
                PieceKind::Man => {
                    self.lift(f).man_captures(row, col);
                    self.man_moves(row, col);
                }
                PieceKind::King => {
                    self.lift(f).king_captures(row, col);
                    self.king_moves(row, col);
                }
            }
        }
        self.paths
    }

    pub(crate) fn rc2f(&self, row: i32, col: i32) -> Option<Field> {
        self.game_type.rc2f(row, col)
    }

    pub(crate) fn is_empty(&self, field: Field) -> bool {
        self.board.is_empty(field)
    }

    // Peça adversária que ainda não foi saltada nesta captura.
    pub(crate) fn is_enemy(&self, field: Field) -> bool {
        !self.is_captured[field as usize]
            && self.board.piece(field).is_some_and(|p| p.color != self.color)
    }

    pub(crate) fn visit(&mut self, field: Field) -> Scope<'_> {
        self.path.push(field);
        Scope { search: self, undo: Undo::Path }
    }

    pub(crate) fn capture(&mut self, field: Field) -> Scope<'_> {
        self.captured.push(field);
        self.is_captured[field as usize] = true;
        Scope { search: self, undo: Undo::Capture(field) }
    }

    fn lift(&mut self, field: Field) -> Scope<'_> {
        let undo = match self.board.piece(field) {
            Some(piece) => Undo::Lift(field, piece),
            None => unreachable!("lifting empty field {}", field),
        };
        self.board.set_piece(field, None);
        Scope { search: self, undo }
    }

    // Regista a captura em curso como um lance, se já saltou alguma peça.
    pub(crate) fn finish_capture(&mut self, found_more: bool) {
        if !self.captured.is_empty() && !found_more {
            self.paths.push(self.path.clone());
        }
    }

    pub(crate) fn push_simple(&mut self, from: Field, to: Field) {
        self.paths.push(vec![from, to]);
    }
}
