// Ficheiro: src/moves/man.rs
// Descrição: Lógica para gerar os lances das pedras.

use super::Search;
use crate::types::Color;

// Direções em que cada cor avança. As brancas sobem no tabuleiro (para a
// casa 1), as pretas descem.
const FORWARD_WHITE: [(i32, i32); 2] = [(-1, -1), (-1, 1)];
const FORWARD_BLACK: [(i32, i32); 2] = [(1, -1), (1, 1)];

// Capturas ortogonais das damas frísias: duas colunas ou duas linhas de cada
// vez, para ficar nas casas escuras.
const FRISIAN: [(i32, i32); 4] = [(0, 2), (2, 0), (0, -2), (-2, 0)];

impl Search {
    fn forward(&self) -> &'static [(i32, i32); 2] {
        match self.color {
            Color::White => &FORWARD_WHITE,
            Color::Black => &FORWARD_BLACK,
        }
    }

    /// Procura todas as continuações de captura de uma pedra em (row, col).
    pub(crate) fn man_captures(&mut self, row: i32, col: i32) {
        let Some(f) = self.rc2f(row, col) else { return };
        let mut scope = self.visit(f);
        let mut found = false;

        let white = scope.color == Color::White;
        if scope.config.backwards_capture || white {
            for (dr, dc) in FORWARD_WHITE {
                found |= scope.man_capture_direction(row, col, dr, dc);
            }
        }
        if scope.config.backwards_capture || !white {
            for (dr, dc) in FORWARD_BLACK {
                found |= scope.man_capture_direction(row, col, dr, dc);
            }
        }
        if scope.config.frysian_moves {
            for (dr, dc) in FRISIAN {
                found |= scope.man_capture_direction(row, col, dr, dc);
            }
        }

        scope.finish_capture(found);
    }

    // Salta a peça adjacente na direção (dr, dc), se for adversária e a casa
    // seguinte estiver vazia, e continua a captura a partir daí.
    fn man_capture_direction(&mut self, row: i32, col: i32, dr: i32, dc: i32) -> bool {
        let (r, c) = (row + dr, col + dc);
        let Some(between) = self.rc2f(r, c) else { return false };
        if !self.is_enemy(between) {
            return false;
        }

        let (r, c) = (r + dr, c + dc);
        let Some(landing) = self.rc2f(r, c) else { return false };
        if !self.is_empty(landing) {
            return false;
        }

        let promotes = self.config.promote_during_capture
            && self.game_type.is_king_field(self.color, landing);
        let mut scope = self.capture(between);
        if promotes {
            scope.king_captures(r, c);
        } else {
            scope.man_captures(r, c);
        }
        true
    }

    /// Lances simples de uma casa em frente, na diagonal.
    pub(crate) fn man_moves(&mut self, row: i32, col: i32) {
        let Some(from) = self.rc2f(row, col) else { return };
        for &(dr, dc) in self.forward() {
            if let Some(to) = self.rc2f(row + dr, col + dc) {
                if self.is_empty(to) {
                    self.push_simple(from, to);
                }
            }
        }
    }
}
