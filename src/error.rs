// Ficheiro: src/error.rs
// Descrição: Erros devolvidos pela biblioteca ao ler tipos de jogo, posições,
// variantes e notação de lances.

use crate::types::Field;

/// Erros ao construir ou ler um tipo de jogo (atributos PDN `GameType`).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameTypeError {
    #[error("board must have an even number of columns, got {0}")]
    OddColumns(i32),

    #[error("board of {rows}x{columns} is too small")]
    TooSmall { rows: i32, columns: i32 },

    #[error("board of {rows}x{columns} has more playable fields than supported")]
    TooLarge { rows: i32, columns: i32 },

    #[error("malformed game type '{0}'")]
    Malformed(String),

    #[error("unknown game type number {0}")]
    UnknownTypeNumber(u32),
}

/// Erros ao ler o texto de uma posição.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("position text has {actual} fields, expected {expected}")]
    TooShort { expected: usize, actual: usize },

    #[error("invalid piece character '{ch}' at field {field}")]
    InvalidPiece { field: usize, ch: char },

    #[error("invalid side to move '{0}'")]
    InvalidSide(char),

    #[error("unexpected trailing text '{0}'")]
    TrailingText(String),
}

/// Erros ao ler a notação de um lance ou ao reconstruí-lo sobre uma posição.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("malformed move '{0}'")]
    Malformed(String),

    #[error("a move needs at least two fields, got {0}")]
    TooShort(usize),

    #[error("field {0} is not on the board")]
    InvalidField(Field),

    #[error("no piece on begin field {0}")]
    EmptyBeginField(Field),

    #[error("piece on field {0} does not belong to the side to move")]
    WrongColor(Field),

    #[error("fields {0} and {1} are not on a common line")]
    NotAligned(Field, Field),

    #[error("path {0} does not capture a piece on every step")]
    MissingCapture(String),

    #[error("landing field {0} is occupied")]
    OccupiedField(Field),

    #[error("cannot jump from {0} to {1}")]
    Blocked(Field, Field),

    #[error("a man moves one field at a time, not {0} to {1}")]
    ManTooFar(Field, Field),
}

/// Erros ao escolher uma variante ou um filtro pelo nome.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    #[error("unknown variant '{0}'")]
    UnknownVariant(String),

    #[error("unknown move filter '{0}'")]
    UnknownFilter(String),

    #[error(transparent)]
    Position(#[from] PositionError),
}
