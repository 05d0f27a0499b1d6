// Ficheiro: src/geometry.rs
// Descrição: Geometria do tabuleiro de damas: numeração das casas jogáveis,
// conversões entre (linha, coluna) e número de casa, e os atributos PDN do
// tipo de jogo.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GameTypeError;
use crate::types::{Color, Field};

const TURKISH: u32 = 30;
const THAI: u32 = 31;

/// Como as casas são etiquetadas na notação (`N`, `A` ou `S` no PDN).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotationType {
    Numeric,
    Algebraic,
    Short,
}

impl NotationType {
    fn to_char(self) -> char {
        match self {
            NotationType::Numeric => 'N',
            NotationType::Algebraic => 'A',
            NotationType::Short => 'S',
        }
    }

    fn from_char(c: &str) -> Option<NotationType> {
        match c {
            "N" => Some(NotationType::Numeric),
            "A" => Some(NotationType::Algebraic),
            "S" => Some(NotationType::Short),
            _ => None,
        }
    }
}

/// Tipo de jogo: as dimensões do tabuleiro e os atributos PDN `GameType`.
///
/// Só `type_number` e as dimensões influenciam a legalidade dos lances; a
/// notação, a inversão e a orientação são apenas apresentação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameType {
    type_number: u32,
    start_color: Color,
    rows: i32,
    columns: i32,
    notation_type: NotationType,
    notation_start: u8,
    invert_flag: bool,
    flipped: bool,
}

impl Default for GameType {
    fn default() -> Self {
        GameType::INTERNATIONAL
    }
}

impl GameType {
    pub const INTERNATIONAL: GameType = GameType::preset(20, Color::White, 10, 10, NotationType::Numeric, 2, false);
    pub const ENGLISH: GameType = GameType::preset(21, Color::Black, 8, 8, NotationType::Numeric, 1, true);
    pub const ITALIAN: GameType = GameType::preset(22, Color::White, 8, 8, NotationType::Numeric, 2, true);
    pub const SPANISH: GameType = GameType::preset(24, Color::White, 8, 8, NotationType::Numeric, 2, true);
    pub const RUSSIAN: GameType = GameType::preset(25, Color::White, 8, 8, NotationType::Algebraic, 0, false);
    pub const BRAZILIAN: GameType = GameType::preset(26, Color::White, 8, 8, NotationType::Algebraic, 0, false);
    pub const CANADIAN: GameType = GameType::preset(27, Color::White, 12, 12, NotationType::Numeric, 2, false);
    pub const TURKISH: GameType = GameType::preset(TURKISH, Color::White, 8, 8, NotationType::Algebraic, 0, false);
    pub const THAI: GameType = GameType::preset(THAI, Color::White, 8, 8, NotationType::Numeric, 2, false);
    pub const FRISIAN: GameType = GameType::preset(40, Color::White, 10, 10, NotationType::Numeric, 2, false);

    // Tipos de jogo conhecidos, pelos atributos por omissão do PDN.
    const KNOWN: [GameType; 10] = [
        GameType::INTERNATIONAL,
        GameType::ENGLISH,
        GameType::ITALIAN,
        GameType::SPANISH,
        GameType::RUSSIAN,
        GameType::BRAZILIAN,
        GameType::CANADIAN,
        GameType::TURKISH,
        GameType::THAI,
        GameType::FRISIAN,
    ];

    const fn preset(
        type_number: u32,
        start_color: Color,
        columns: i32,
        rows: i32,
        notation_type: NotationType,
        notation_start: u8,
        invert_flag: bool,
    ) -> GameType {
        GameType {
            type_number,
            start_color,
            rows,
            columns,
            notation_type,
            notation_start,
            invert_flag,
            flipped: false,
        }
    }

    /// Maior número de linhas ou colunas aceite.
    pub const MAX_SIDE: i32 = 16;

    /// Cria um tipo de jogo com numeração a partir do canto superior esquerdo.
    pub fn new(type_number: u32, rows: i32, columns: i32) -> Result<Self, GameTypeError> {
        if columns % 2 != 0 {
            return Err(GameTypeError::OddColumns(columns));
        }
        if rows < 2 || columns < 2 {
            return Err(GameTypeError::TooSmall { rows, columns });
        }
        // Limita também as letras das coordenadas algébricas ('a' a 'p').
        if rows > Self::MAX_SIDE || columns > Self::MAX_SIDE || rows * columns / 2 > Field::MAX as i32 {
            return Err(GameTypeError::TooLarge { rows, columns });
        }
        Ok(GameType {
            type_number,
            rows,
            columns,
            ..GameType::default()
        })
    }

    /// Atributos por omissão de um tipo de jogo conhecido (20, 21, 22, ...).
    pub fn from_type_number(type_number: u32) -> Result<Self, GameTypeError> {
        GameType::KNOWN
            .iter()
            .find(|gt| gt.type_number == type_number)
            .copied()
            .ok_or(GameTypeError::UnknownTypeNumber(type_number))
    }

    pub fn with_start_color(mut self, color: Color) -> Self {
        self.start_color = color;
        self
    }

    pub fn with_notation(mut self, notation_type: NotationType, notation_start: u8) -> Self {
        self.notation_type = notation_type;
        self.notation_start = notation_start;
        self
    }

    pub fn with_invert_flag(mut self, invert_flag: bool) -> Self {
        self.invert_flag = invert_flag;
        self
    }

    pub fn with_flipped(mut self, flipped: bool) -> Self {
        self.flipped = flipped;
        self
    }

    pub fn type_number(&self) -> u32 {
        self.type_number
    }

    pub fn start_color(&self) -> Color {
        self.start_color
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn notation_type(&self) -> NotationType {
        self.notation_type
    }

    pub fn notation_start(&self) -> u8 {
        self.notation_start
    }

    pub fn invert_flag(&self) -> bool {
        self.invert_flag
    }

    pub fn flipped(&self) -> bool {
        self.flipped
    }

    /// Metade do número de colunas: casas jogáveis por linha.
    pub fn half_columns(&self) -> i32 {
        self.columns / 2
    }

    /// Número da última casa jogável.
    pub fn max_field(&self) -> Field {
        (self.rows * self.columns / 2) as Field
    }

    /// Converte (linha, coluna) no número da casa. Devolve None fora do
    /// tabuleiro e nas casas claras (`row % 2 == col % 2`).
    pub fn rc2f(&self, row: i32, col: i32) -> Option<Field> {
        if row < 0 || col < 0 || row >= self.rows || col >= self.columns {
            return None;
        }
        if row % 2 == col % 2 {
            return None;
        }
        Some((1 + row * self.half_columns() + col / 2) as Field)
    }

    /// Converte o número de uma casa em (linha, coluna).
    pub fn f2rc(&self, field: Field) -> Option<(i32, i32)> {
        Some((self.f2r(field)?, self.f2c(field)?))
    }

    pub fn f2r(&self, field: Field) -> Option<i32> {
        let f = self.field_offset(field)?;
        Some((2 * f) / self.columns)
    }

    pub fn f2c(&self, field: Field) -> Option<i32> {
        let f = self.field_offset(field)?;
        let d = self.half_columns();
        Some(1 - (f / d) % 2 + 2 * (f % d))
    }

    fn field_offset(&self, field: Field) -> Option<i32> {
        if field == 0 || field > self.max_field() {
            None
        } else {
            Some(field as i32 - 1)
        }
    }

    /// Indica se uma casa do tabuleiro visual (linha 0 em baixo) não é jogável.
    /// Nas damas turcas todas as casas são jogáveis.
    pub fn is_non_playing_field(&self, row: i32, col: i32) -> bool {
        if self.type_number == TURKISH {
            return false;
        }
        let light = if self.flipped {
            row % 2 == (self.columns - col) % 2
        } else {
            (self.rows - row) % 2 == col % 2
        };
        !self.invert_flag == light
    }

    /// Índice na lista de casas do tabuleiro visual (por linhas, a linha do
    /// campo 1 é a última) correspondente a um número de casa.
    pub fn field_to_square_index(&self, field: Field) -> Option<usize> {
        let i = self.field_offset(field)?;
        let d = self.half_columns();
        let row = (2 * i) / self.columns;
        let column = 2 * (i % d) + if i % self.columns < d { 1 } else { 0 };
        Some(((self.rows - row - 1) * self.columns + column) as usize)
    }

    /// Inverso de `field_to_square_index`; None para casas claras.
    pub fn square_index_to_field(&self, index: usize) -> Option<Field> {
        let index = index as i32;
        if index >= self.rows * self.columns {
            return None;
        }
        self.rc2f(self.rows - 1 - index / self.columns, index % self.columns)
    }

    /// Etiqueta de uma casa do tabuleiro visual segundo a notação do tipo de
    /// jogo: número da casa ou coordenada algébrica ("a1").
    /// O canto de partida da numeração vem de `notation_start`:
    /// 0 = baixo à esquerda, 1 = baixo à direita, 2 = cima à esquerda,
    /// 3 = cima à direita.
    pub fn square_label(&self, row: i32, col: i32) -> Option<String> {
        if row < 0 || col < 0 || row >= self.rows || col >= self.columns {
            return None;
        }
        let (mut r, mut c) = (row, col);
        if self.flipped {
            r = self.rows - r - 1;
            c = self.columns - c - 1;
        }

        let left = self.notation_start == 0 || self.notation_start == 2;
        let bottom = self.notation_start == 0 || self.notation_start == 1;
        let r = if bottom { self.rows - r - 1 } else { r };
        let c = if left { c } else { self.columns - c - 1 };

        match self.notation_type {
            NotationType::Numeric | NotationType::Short => self.rc2f(r, c).map(|f| f.to_string()),
            NotationType::Algebraic => {
                let file = (b'a' + c as u8) as char;
                Some(format!("{}{}", file, r + 1))
            }
        }
    }

    /// Número de linhas ocupadas por cada lado na posição inicial.
    pub fn start_rows(&self) -> i32 {
        let rows = self.rows / 2 - 1;
        if self.type_number == THAI {
            rows - 1
        } else {
            rows
        }
    }

    /// Casas onde uma pedra desta cor é promovida a dama: a primeira linha
    /// para as brancas, a última para as pretas.
    pub fn is_king_field(&self, color: Color, field: Field) -> bool {
        let d = self.half_columns();
        match color {
            Color::White => (field as i32) <= d,
            Color::Black => (field as i32) >= self.max_field() as i32 - d + 1,
        }
    }
}

impl FromStr for GameType {
    type Err = GameTypeError;

    /// Lê o formato da etiqueta PDN `GameType` ("20,W,10,10,N,2,0"). Um número
    /// sozinho ("20") usa os atributos por omissão desse tipo de jogo.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GameTypeError::Malformed(s.to_string());
        let parts: Vec<&str> = s.trim().split(',').map(str::trim).collect();
        let type_number: u32 = parts[0].parse().map_err(|_| malformed())?;
        if parts.len() == 1 {
            return GameType::from_type_number(type_number);
        }
        if parts.len() != 7 {
            return Err(malformed());
        }

        let start_color = match parts[1] {
            "W" => Color::White,
            "B" => Color::Black,
            _ => return Err(malformed()),
        };
        let columns: i32 = parts[2].parse().map_err(|_| malformed())?;
        let rows: i32 = parts[3].parse().map_err(|_| malformed())?;
        let notation_type = NotationType::from_char(parts[4]).ok_or_else(malformed)?;
        let notation_start: u8 = parts[5].parse().map_err(|_| malformed())?;
        if notation_start > 3 {
            return Err(malformed());
        }
        let invert_flag = match parts[6] {
            "0" => false,
            "1" => true,
            _ => return Err(malformed()),
        };

        Ok(GameType::new(type_number, rows, columns)?
            .with_start_color(start_color)
            .with_notation(notation_type, notation_start)
            .with_invert_flag(invert_flag))
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{}",
            self.type_number,
            self.start_color.to_char(),
            self.columns,
            self.rows,
            self.notation_type.to_char(),
            self.notation_start,
            u8::from(self.invert_flag)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rc2f_and_f2rc_agree_on_every_field() {
        for gt in ["20", "25", "27"] {
            let gt: GameType = gt.parse().unwrap();
            for f in 1..=gt.max_field() {
                let (r, c) = gt.f2rc(f).unwrap();
                assert_eq!(gt.rc2f(r, c), Some(f), "field {} on {}", f, gt);
            }
        }
    }

    #[test]
    fn light_and_outside_squares_are_invalid() {
        let gt = GameType::default();
        assert_eq!(gt.rc2f(0, 0), None);
        assert_eq!(gt.rc2f(-1, 1), None);
        assert_eq!(gt.rc2f(0, 10), None);
        assert_eq!(gt.rc2f(0, 1), Some(1));
        assert_eq!(gt.rc2f(1, 0), Some(6));
        assert_eq!(gt.rc2f(9, 8), Some(50));
        assert_eq!(gt.f2rc(0), None);
        assert_eq!(gt.f2rc(51), None);
    }

    #[test]
    fn odd_columns_are_rejected() {
        assert_eq!(GameType::new(20, 10, 9), Err(GameTypeError::OddColumns(9)));
        assert!(matches!(GameType::new(20, 1, 2), Err(GameTypeError::TooSmall { .. })));
        assert!(matches!(GameType::new(20, 24, 24), Err(GameTypeError::TooLarge { .. })));
    }
}
