// Ficheiro: src/types.rs
// Descrição: Módulo para as definições de tipos de dados fundamentais do jogo.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::NotationError;
use crate::geometry::GameType;
use crate::position::Position;

// Número de uma casa jogável, a começar em 1, tal como na notação de damas.
// Tabuleiros até 16x16 cabem num u8.
pub type Field = u8;

// Carácter usado no texto de uma posição para uma casa vazia.
pub const EMPTY_CHAR: char = '.';

// Enum para representar a cor de uma peça ou de um jogador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Color {
    /// Letra usada no fim do texto de uma posição ('W' ou 'B').
    pub fn to_char(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'W' => Some(Color::White),
            'B' => Some(Color::Black),
            _ => None,
        }
    }
}

// Enum para representar o tipo de uma peça de damas: pedra ou dama.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Man,
    King,
}

// Struct para representar uma peça no tabuleiro, combinando o tipo e a cor.
// Uma casa do tabuleiro é um Option<Piece>: None é a casa vazia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const WHITE_MAN: Piece = Piece::new(PieceKind::Man, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);
    pub const BLACK_MAN: Piece = Piece::new(PieceKind::Man, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }

    pub fn is_man(self) -> bool {
        self.kind == PieceKind::Man
    }

    /// Devolve a dama da mesma cor.
    pub fn promoted(self) -> Piece {
        Piece::new(PieceKind::King, self.color)
    }

    pub fn to_char(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Man) => 'o',
            (Color::White, PieceKind::King) => 'O',
            (Color::Black, PieceKind::Man) => 'x',
            (Color::Black, PieceKind::King) => 'X',
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'o' => Some(Piece::WHITE_MAN),
            'O' => Some(Piece::WHITE_KING),
            'x' => Some(Piece::BLACK_MAN),
            'X' => Some(Piece::BLACK_KING),
            _ => None,
        }
    }
}

/// Carácter de uma casa no texto de uma posição.
pub fn square_char(square: Option<Piece>) -> char {
    square.map_or(EMPTY_CHAR, Piece::to_char)
}

/// Um lance de damas: as casas visitadas, as peças capturadas (pela ordem em
/// que são saltadas) e a peça antes e depois do lance.
///
/// Um lance sem capturas tem exatamente duas casas. Depois de construído não
/// volta a ser alterado; os filtros apenas o copiam para a lista certa.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    fields: Vec<Field>,
    captured_fields: Vec<Field>,
    captured_pieces: Vec<Piece>,
    begin_piece: Piece,
    end_piece: Piece,
}

impl Move {
    /// Reconstrói um lance a partir do caminho percorrido, refazendo a geometria
    /// de cada troço sobre a posição de partida para descobrir as peças
    /// capturadas.
    ///
    /// Cada troço tem de cair numa casa vazia (ou na casa de partida, já
    /// desocupada) e passar por cima de no máximo uma peça adversária ainda
    /// não saltada. Um homem só anda uma casa ou salta a peça adjacente.
    ///
    /// A promoção é calculada apenas na casa final. Lances gerados com
    /// promoção durante a captura devem vir do gerador.
    pub fn from_path(position: &Position, fields: &[Field]) -> Result<Move, NotationError> {
        let game_type = position.game_type();
        if fields.len() < 2 {
            return Err(NotationError::TooShort(fields.len()));
        }
        for &f in fields {
            if game_type.f2rc(f).is_none() {
                return Err(NotationError::InvalidField(f));
            }
        }
        let mover = position
            .piece(fields[0])
            .ok_or(NotationError::EmptyBeginField(fields[0]))?;
        if mover.color != position.side_to_move() {
            return Err(NotationError::WrongColor(fields[0]));
        }
        let begin = fields[0];
        let mut jumped: Vec<Field> = Vec::new();
        for pair in fields.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if !segment_is_aligned(position, from, to) {
                return Err(NotationError::NotAligned(from, to));
            }
            if to != begin && position.piece(to).is_some() {
                return Err(NotationError::OccupiedField(to));
            }
            let passed = fields_between(game_type, from, to);
            let mut pieces = passed
                .iter()
                .filter(|&&f| f != begin)
                .filter_map(|&f| position.piece(f).map(|p| (f, p)));
            let jump = pieces.next();
            if pieces.next().is_some() {
                return Err(NotationError::Blocked(from, to));
            }
            if let Some((f, p)) = jump {
                if p.color == mover.color || jumped.contains(&f) {
                    return Err(NotationError::Blocked(from, to));
                }
                jumped.push(f);
            }
            // Um homem anda uma casa ou salta por cima da peça adjacente.
            let steps = passed.len() + 1;
            if mover.is_man() && steps != if jump.is_some() { 2 } else { 1 } {
                return Err(NotationError::ManTooFar(from, to));
            }
        }

        let m = Move::annotate(position, fields.to_vec(), false);
        let jumps = fields.len() - 1;
        if (m.capture_count() == 0 && jumps > 1) || (m.capture_count() > 0 && m.capture_count() != jumps) {
            return Err(NotationError::MissingCapture(m.full_notation()));
        }
        Ok(m)
    }

    /// Anota um caminho gerado pela busca: peças capturadas refeitas a partir
    /// da geometria e peça final com a promoção aplicada.
    pub(crate) fn annotate(position: &Position, fields: Vec<Field>, promote_during_capture: bool) -> Move {
        let game_type = position.game_type();
        let begin_piece = match position.piece(fields[0]) {
            Some(piece) => piece,
            None => panic!("begin field {} of {:?} is empty", fields[0], fields),
        };

        let mut captured_fields = Vec::with_capacity(fields.len() - 1);
        let mut captured_pieces = Vec::with_capacity(fields.len() - 1);

        for pair in fields.windows(2) {
            let enemy = fields_between(game_type, pair[0], pair[1])
                .into_iter()
                .filter_map(|f| position.piece(f).map(|p| (f, p)))
                .find(|(_, p)| p.color != begin_piece.color);
            if let Some((f, p)) = enemy {
                captured_fields.push(f);
                captured_pieces.push(p);
            }
        }

        let end_field = fields[fields.len() - 1];
        let mut end_piece = begin_piece;
        if begin_piece.is_man() {
            let promotes = if promote_during_capture {
                fields[1..].iter().any(|&f| game_type.is_king_field(begin_piece.color, f))
            } else {
                game_type.is_king_field(begin_piece.color, end_field)
            };
            if promotes {
                end_piece = begin_piece.promoted();
            }
        }

        Move {
            fields,
            captured_fields,
            captured_pieces,
            begin_piece,
            end_piece,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, i: usize) -> Field {
        self.fields[i]
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn begin_field(&self) -> Field {
        self.fields[0]
    }

    pub fn end_field(&self) -> Field {
        self.fields[self.fields.len() - 1]
    }

    pub fn captured_fields(&self) -> &[Field] {
        &self.captured_fields
    }

    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured_pieces
    }

    pub fn capture_count(&self) -> usize {
        self.captured_fields.len()
    }

    pub fn is_capture(&self) -> bool {
        !self.captured_fields.is_empty()
    }

    pub fn begin_piece(&self) -> Piece {
        self.begin_piece
    }

    pub fn end_piece(&self) -> Piece {
        self.end_piece
    }

    pub fn color(&self) -> Color {
        self.begin_piece.color
    }

    pub fn is_promotion(&self) -> bool {
        self.begin_piece != self.end_piece
    }

    pub fn is_king_move(&self) -> bool {
        self.begin_piece.is_king()
    }

    pub fn is_man_move(&self) -> bool {
        self.begin_piece.is_man()
    }

    /// Número de damas entre as peças capturadas.
    pub fn captured_king_count(&self) -> usize {
        self.captured_pieces.iter().filter(|p| p.is_king()).count()
    }

    pub fn first_captured_is_king(&self) -> bool {
        self.captured_pieces.first().is_some_and(|p| p.is_king())
    }

    /// Dois lances são equivalentes quando começam e acabam nas mesmas casas e
    /// capturam o mesmo conjunto de peças, qualquer que seja a ordem.
    pub fn is_equivalent(&self, other: &Move) -> bool {
        self.begin_field() == other.begin_field()
            && self.end_field() == other.end_field()
            && self.captured_fields.len() == other.captured_fields.len()
            && self.captured_fields.iter().all(|f| other.captured_fields.contains(f))
    }

    fn separator(&self) -> char {
        if self.is_capture() { 'x' } else { '-' }
    }

    /// Notação curta: casa de partida e casa de chegada ("32-28", "22x31").
    pub fn notation(&self) -> String {
        format!("{}{}{}", self.begin_field(), self.separator(), self.end_field())
    }

    /// Notação completa com todas as casas do caminho ("22x13x2x11").
    pub fn full_notation(&self) -> String {
        let separator = self.separator().to_string();
        self.fields
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(&separator)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_notation())
    }
}

/// Converte a notação completa de um lance ("32-28", "22x13x2") no caminho de
/// casas. A validação contra uma posição é feita por `Move::from_path`.
pub fn parse_path(text: &str) -> Result<Vec<Field>, NotationError> {
    let text = text.trim();
    let separator = if text.contains('x') { 'x' } else { '-' };
    let fields = text
        .split(separator)
        .map(|part| {
            part.trim()
                .parse::<Field>()
                .map_err(|_| NotationError::Malformed(text.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if fields.len() < 2 {
        return Err(NotationError::TooShort(fields.len()));
    }
    Ok(fields)
}

// Direção de um troço do caminho. Os troços horizontais e verticais (lances
// frísios) avançam duas colunas ou duas linhas de cada vez para ficarem nas
// casas escuras.
fn segment_step(rb: i32, cb: i32, re: i32, ce: i32) -> (i32, i32) {
    if re == rb {
        (0, if ce > cb { 2 } else { -2 })
    } else if ce == cb {
        (if re > rb { 2 } else { -2 }, 0)
    } else {
        (if re > rb { 1 } else { -1 }, if ce > cb { 1 } else { -1 })
    }
}

// Casas estritamente entre `from` e `to` ao longo do troço.
fn fields_between(game_type: &GameType, from: Field, to: Field) -> Vec<Field> {
    let mut passed = Vec::new();
    let (Some((rb, cb)), Some((re, ce))) = (game_type.f2rc(from), game_type.f2rc(to)) else {
        return passed;
    };
    let (dr, dc) = segment_step(rb, cb, re, ce);
    let (mut r, mut c) = (rb + dr, cb + dc);
    let on_board = |r: i32, c: i32| r >= 0 && c >= 0 && r < game_type.rows() && c < game_type.columns();
    while (r, c) != (re, ce) && on_board(r, c) {
        if let Some(f) = game_type.rc2f(r, c) {
            passed.push(f);
        }
        r += dr;
        c += dc;
    }
    passed
}

fn segment_is_aligned(position: &Position, from: Field, to: Field) -> bool {
    let game_type = position.game_type();
    match (game_type.f2rc(from), game_type.f2rc(to)) {
        (Some((rb, cb)), Some((re, ce))) => {
            let (dr, dc) = (re - rb, ce - cb);
            if from == to {
                false
            } else if dr == 0 || dc == 0 {
                dr % 2 == 0 && dc % 2 == 0
            } else {
                dr.abs() == dc.abs()
            }
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_not_flips() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn piece_chars() {
        for c in ['o', 'O', 'x', 'X'] {
            assert_eq!(Piece::from_char(c).map(Piece::to_char), Some(c));
        }
        assert_eq!(Piece::from_char('.'), None);
        assert_eq!(square_char(None), '.');
        assert_eq!(Piece::BLACK_MAN.promoted(), Piece::BLACK_KING);
    }

    #[test]
    fn parse_path_accepts_both_separators() {
        assert_eq!(parse_path("32-28").unwrap(), vec![32, 28]);
        assert_eq!(parse_path("22x13x2").unwrap(), vec![22, 13, 2]);
        assert!(matches!(parse_path("22"), Err(NotationError::TooShort(1))));
        assert!(matches!(parse_path("22xab"), Err(NotationError::Malformed(_))));
    }
}
