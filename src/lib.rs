// Motor Damas - Draughts Move Generation Library

pub mod error;
pub mod filter;
pub mod geometry;
pub mod matcher;
pub mod moves;
pub mod perft;
pub mod position;
pub mod types;
pub mod variant;

pub use error::{GameTypeError, NotationError, PositionError, VariantError};
pub use filter::{AnyCapture, FilterKind, ItalianCapture, MaximumCapture, MoveFilter, SpanishCapture};
pub use geometry::{GameType, NotationType};
pub use matcher::{find_move, find_move_text, find_moves_by_fields, generate_forced_captures};
pub use moves::{GeneratedMoves, GeneratorConfig, MoveGenerator};
pub use perft::{perft, perft_divide, run_perft, PerftResult};
pub use position::Position;
pub use types::*;
pub use variant::Variant;
