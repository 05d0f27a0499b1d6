// Ficheiro: src/moves/king.rs
// Descrição: Lógica para gerar os lances das damas.

use super::Search;

const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const FRISIAN: [(i32, i32); 4] = [(-2, 0), (2, 0), (0, 2), (0, -2)];

impl Search {
    /// Procura todas as continuações de captura de uma dama em (row, col).
    pub(crate) fn king_captures(&mut self, row: i32, col: i32) {
        let Some(f) = self.rc2f(row, col) else { return };
        let mut scope = self.visit(f);
        let mut found = false;

        for (dr, dc) in DIAGONALS {
            found |= scope.king_capture_direction(row, col, dr, dc);
        }
        if scope.config.frysian_moves {
            for (dr, dc) in FRISIAN {
                found |= scope.king_capture_direction(row, col, dr, dc);
            }
        }

        scope.finish_capture(found);
    }

    // Com lances longos a dama desliza pelas casas vazias até à primeira peça
    // e, depois de a saltar, pode parar em qualquer casa vazia a seguir. Cada
    // casa de paragem abre uma continuação independente.
    fn king_capture_direction(&mut self, row: i32, col: i32, dr: i32, dc: i32) -> bool {
        let (mut r, mut c) = (row + dr, col + dc);
        let mut f = self.rc2f(r, c);

        if self.config.long_moves {
            while f.is_some_and(|x| self.is_empty(x)) {
                r += dr;
                c += dc;
                f = self.rc2f(r, c);
            }
        }

        let Some(between) = f else { return false };
        if !self.is_enemy(between) {
            return false;
        }

        let mut found = false;
        r += dr;
        c += dc;
        while let Some(landing) = self.rc2f(r, c) {
            if !self.is_empty(landing) {
                break;
            }
            found = true;
            self.capture(between).king_captures(r, c);
            if !self.config.long_moves {
                break;
            }
            r += dr;
            c += dc;
        }
        found
    }

    /// Lances simples: todas as casas vazias em cada diagonal, ou só a
    /// primeira sem lances longos.
    pub(crate) fn king_moves(&mut self, row: i32, col: i32) {
        let Some(from) = self.rc2f(row, col) else { return };
        for (dr, dc) in DIAGONALS {
            let (mut r, mut c) = (row + dr, col + dc);
            while let Some(to) = self.rc2f(r, c) {
                if !self.is_empty(to) {
                    break;
                }
                self.push_simple(from, to);
                if !self.config.long_moves {
                    break;
                }
                r += dr;
                c += dc;
            }
        }
    }
}
