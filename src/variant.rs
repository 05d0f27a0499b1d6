// Ficheiro: src/variant.rs
// Descrição: Variantes de damas conhecidas, cada uma com o seu tipo de jogo e
// as regras do gerador de lances.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::error::VariantError;
use crate::filter::FilterKind;
use crate::geometry::GameType;
use crate::moves::{GeneratorConfig, MoveGenerator};
use crate::position::Position;

/// Uma variante com nome: tabuleiro e regras de geração.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub name: &'static str,
    pub game_type: GameType,
    pub config: GeneratorConfig,
}

const INTERNATIONAL_RULES: GeneratorConfig = GeneratorConfig {
    long_moves: true,
    backwards_capture: true,
    promote_during_capture: false,
    frysian_moves: false,
    filter: FilterKind::MaximumCapture,
};

const fn variant(name: &'static str, game_type: GameType, config: GeneratorConfig) -> Variant {
    Variant { name, game_type, config }
}

lazy_static! {
    static ref VARIANTS: HashMap<&'static str, Variant> = {
        let variants = [
            variant("international", GameType::INTERNATIONAL, INTERNATIONAL_RULES),
            variant("brazilian", GameType::BRAZILIAN, INTERNATIONAL_RULES),
            variant("canadian", GameType::CANADIAN, INTERNATIONAL_RULES),
            variant(
                "english",
                GameType::ENGLISH,
                GeneratorConfig {
                    long_moves: false,
                    backwards_capture: false,
                    filter: FilterKind::AnyCapture,
                    ..INTERNATIONAL_RULES
                },
            ),
            variant(
                "italian",
                GameType::ITALIAN,
                GeneratorConfig {
                    long_moves: false,
                    backwards_capture: false,
                    filter: FilterKind::Italian,
                    ..INTERNATIONAL_RULES
                },
            ),
            variant(
                "spanish",
                GameType::SPANISH,
                GeneratorConfig {
                    backwards_capture: false,
                    filter: FilterKind::Spanish,
                    ..INTERNATIONAL_RULES
                },
            ),
            variant(
                "russian",
                GameType::RUSSIAN,
                GeneratorConfig {
                    promote_during_capture: true,
                    filter: FilterKind::AnyCapture,
                    ..INTERNATIONAL_RULES
                },
            ),
            variant(
                "thai",
                GameType::THAI,
                GeneratorConfig {
                    filter: FilterKind::AnyCapture,
                    ..INTERNATIONAL_RULES
                },
            ),
            variant(
                "frisian",
                GameType::FRISIAN,
                GeneratorConfig {
                    frysian_moves: true,
                    ..INTERNATIONAL_RULES
                },
            ),
        ];
        variants.into_iter().map(|v| (v.name, v)).collect()
    };
}

impl Variant {
    /// Procura uma variante pelo nome ("international", "russian", ...).
    pub fn by_name(name: &str) -> Result<Variant, VariantError> {
        VARIANTS
            .get(name.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| VariantError::UnknownVariant(name.to_string()))
    }

    /// Nomes de todas as variantes, por ordem alfabética.
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = VARIANTS.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn generator(&self) -> MoveGenerator {
        MoveGenerator::new(self.config)
    }

    pub fn initial_position(&self) -> Position {
        Position::initial(self.game_type)
    }

    /// Lê uma posição no tabuleiro desta variante.
    pub fn position(&self, text: &str) -> Result<Position, VariantError> {
        Ok(Position::from_text(self.game_type, text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(Variant::by_name("Russian").unwrap().game_type.type_number(), 25);
        assert_eq!(
            Variant::by_name("checkers"),
            Err(VariantError::UnknownVariant("checkers".to_string()))
        );
    }

    #[test]
    fn every_variant_has_moves_at_the_start() {
        for name in Variant::names() {
            let variant = Variant::by_name(name).unwrap();
            let start = variant.initial_position();
            assert!(!variant.generator().generate_moves(&start).is_empty(), "{}", name);
        }
    }
}
