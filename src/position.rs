// Ficheiro: src/position.rs
// Descrição: Módulo que contém a struct Position (as peças em cada casa jogável
// e o lado a jogar) e a sua representação em texto.

use std::fmt;
use std::str::FromStr;

use crate::error::PositionError;
use crate::geometry::GameType;
use crate::types::*;

/// Posição de damas na forma compacta do motor: uma casa por cada casa
/// jogável, indexada pelo número da casa.
///
/// O texto de uma posição tem um carácter por casa jogável, pela ordem dos
/// números das casas (`.` vazia, `o`/`O` pedra/dama branca, `x`/`X` pedra/dama
/// preta), seguido opcionalmente de `W` ou `B` para o lado a jogar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    game_type: GameType,
    squares: Vec<Option<Piece>>,
    side_to_move: Color,
}

impl Position {
    /// Cria um tabuleiro vazio, com as brancas a jogar.
    pub fn new(game_type: GameType) -> Self {
        Position {
            game_type,
            squares: vec![None; game_type.max_field() as usize],
            side_to_move: Color::White,
        }
    }

    /// Cria a posição inicial: pedras pretas a partir da casa 1, pedras
    /// brancas até à última casa, com o mesmo número de linhas de cada lado.
    pub fn initial(game_type: GameType) -> Self {
        let mut position = Position::new(game_type);
        let n = game_type.max_field();
        let pieces_per_side = (game_type.start_rows() * game_type.half_columns()).max(0) as Field;
        for f in 1..=pieces_per_side {
            position.set_piece(f, Some(Piece::BLACK_MAN));
            position.set_piece(n - f + 1, Some(Piece::WHITE_MAN));
        }
        position.side_to_move = game_type.start_color();
        position
    }

    /// Lê uma posição a partir do texto. Os espaços e mudanças de linha são
    /// ignorados, o que permite escrever a posição como um diagrama.
    pub fn from_text(game_type: GameType, text: &str) -> Result<Self, PositionError> {
        let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        let n = game_type.max_field() as usize;
        if chars.len() < n {
            return Err(PositionError::TooShort { expected: n, actual: chars.len() });
        }

        let mut position = Position::new(game_type);
        for (i, &ch) in chars[..n].iter().enumerate() {
            position.squares[i] = if ch == EMPTY_CHAR {
                None
            } else {
                Some(Piece::from_char(ch).ok_or(PositionError::InvalidPiece { field: i + 1, ch })?)
            };
        }

        position.side_to_move = match &chars[n..] {
            [] => Color::White,
            [c] => Color::from_char(*c).ok_or(PositionError::InvalidSide(*c))?,
            rest => return Err(PositionError::TrailingText(rest.iter().collect())),
        };
        Ok(position)
    }

    /// Texto da posição, sempre com o lado a jogar no fim.
    pub fn to_text(&self) -> String {
        let mut text: String = self.squares.iter().map(|&sq| square_char(sq)).collect();
        text.push(self.side_to_move.to_char());
        text
    }

    /// Diagrama com uma linha do tabuleiro por linha de texto, no mesmo
    /// formato aceite por `from_text`.
    pub fn diagram(&self) -> String {
        let d = self.game_type.half_columns() as usize;
        let mut result = String::new();
        for (row, chunk) in self.squares.chunks(d).enumerate() {
            if row % 2 == 0 {
                result.push_str("  ");
            }
            for &sq in chunk {
                result.push(' ');
                result.push(square_char(sq));
                result.push_str("  ");
            }
            result.push('\n');
        }
        result.push(self.side_to_move.to_char());
        result
    }

    pub fn game_type(&self) -> &GameType {
        &self.game_type
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub fn is_white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    pub fn switch_player(&mut self) {
        self.side_to_move = !self.side_to_move;
    }

    /// Peça numa casa; None para casas vazias ou números fora do tabuleiro.
    pub fn piece(&self, field: Field) -> Option<Piece> {
        match field {
            0 => None,
            f => self.squares.get(f as usize - 1).copied().flatten(),
        }
    }

    pub fn is_empty(&self, field: Field) -> bool {
        self.piece(field).is_none()
    }

    /// Coloca (ou retira, com None) uma peça numa casa.
    ///
    /// # Panics
    /// Se `field` não for uma casa do tabuleiro.
    pub fn set_piece(&mut self, field: Field, piece: Option<Piece>) {
        assert!(
            field >= 1 && field <= self.game_type.max_field(),
            "field {} outside the board",
            field
        );
        self.squares[field as usize - 1] = piece;
    }

    /// Itera sobre as casas ocupadas, por ordem crescente de número.
    pub fn pieces(&self) -> impl Iterator<Item = (Field, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, sq)| sq.map(|p| ((i + 1) as Field, p)))
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }

    /// Executa um lance: esvazia a casa de partida, retira as peças
    /// capturadas, coloca a peça final na casa de chegada e passa a vez.
    pub fn apply(&mut self, m: &Move) {
        self.set_piece(m.begin_field(), None);
        for &f in m.captured_fields() {
            self.set_piece(f, None);
        }
        self.set_piece(m.end_field(), Some(m.end_piece()));
        self.switch_player();
    }

    /// Desfaz um lance executado por `apply`.
    pub fn undo(&mut self, m: &Move) {
        self.set_piece(m.end_field(), None);
        for (&f, &p) in m.captured_fields().iter().zip(m.captured_pieces()) {
            self.set_piece(f, Some(p));
        }
        self.set_piece(m.begin_field(), Some(m.begin_piece()));
        self.switch_player();
    }
}

impl FromStr for Position {
    type Err = PositionError;

    /// Lê uma posição do tabuleiro internacional 10x10.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_text(GameType::default(), s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "xxxxxxxxxxxxxxxxxxxx..........ooooooooooooooooooooW";

    #[test]
    fn initial_position_matches_start_text() {
        let position = Position::initial(GameType::default());
        assert_eq!(position.to_text(), START);
        assert_eq!(position.count(Color::White), 20);
        assert_eq!(position.count(Color::Black), 20);
    }

    #[test]
    fn side_defaults_to_white() {
        let position: Position = START.trim_end_matches('W').parse().unwrap();
        assert_eq!(position.side_to_move(), Color::White);
    }

    #[test]
    fn diagram_reads_back() {
        let position: Position = START.parse().unwrap();
        let again: Position = position.diagram().parse().unwrap();
        assert_eq!(position, again);
    }

    #[test]
    fn bad_text_is_rejected() {
        assert_eq!(
            "xxx".parse::<Position>(),
            Err(PositionError::TooShort { expected: 50, actual: 3 })
        );
        let bad = format!("{}q{}", &START[..10], &START[11..]);
        assert_eq!(
            bad.parse::<Position>(),
            Err(PositionError::InvalidPiece { field: 11, ch: 'q' })
        );
        let side = format!("{}Z", &START[..50]);
        assert_eq!(side.parse::<Position>(), Err(PositionError::InvalidSide('Z')));
        let trailing = format!("{}WW", &START[..50]);
        assert!(matches!(trailing.parse::<Position>(), Err(PositionError::TrailingText(_))));
    }

    #[test]
    fn out_of_board_fields_are_empty() {
        let position: Position = START.parse().unwrap();
        assert_eq!(position.piece(0), None);
        assert_eq!(position.piece(51), None);
        assert_eq!(position.piece(1), Some(Piece::BLACK_MAN));
    }
}
