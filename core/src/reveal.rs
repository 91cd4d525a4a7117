use hashbrown::HashSet;
use std::collections::VecDeque;

use crate::*;

impl Grid {
    /// Places the mines around `origin` and classifies every other cell.
    ///
    /// Only the first call for a game has any effect, returns whether
    /// mines were placed.
    pub fn generate_with<G>(&mut self, origin: CellIndex, generator: &mut G) -> bool
    where
        G: MineLayoutGenerator + ?Sized,
    {
        if self.is_generated() {
            log::warn!("Mines already placed for this game, not regenerating");
            return false;
        }

        generator.generate(self, origin);
        classify_cells(self);
        self.mark_generated();
        true
    }

    /// Reveals `origin`, flooding through zero-count regions.
    ///
    /// The first reveal of a game places the mines. Flagged and already
    /// revealed cells are left alone. Flags also stop the flood.
    pub fn reveal<G>(&mut self, origin: CellIndex, generator: &mut G) -> RevealOutcome
    where
        G: MineLayoutGenerator + ?Sized,
    {
        if !self[origin].is_revealable() {
            return RevealOutcome::Continue;
        }

        if !self.is_generated() {
            self.generate_with(origin, generator);
        }

        if self[origin].is_mine() {
            self[origin].revealed = true;
            log::debug!("Revealed mine at {}", origin);
            return RevealOutcome::GameOver;
        }

        let mut visited = HashSet::new();
        visited.insert(origin);
        let mut to_visit = VecDeque::from([origin]);

        while let Some(index) = to_visit.pop_front() {
            let cell = &mut self[index];
            if cell.flagged {
                continue;
            }
            cell.revealed = true;
            log::trace!("Revealed cell {}, content {:?}", index, cell.content);

            if cell.content == CellContent::Empty {
                for neighbor in self.neighbor_indices(index) {
                    if self[neighbor].is_revealable() && visited.insert(neighbor) {
                        to_visit.push_back(neighbor);
                    }
                }
            }
        }

        if self.all_safe_revealed() {
            RevealOutcome::Win
        } else {
            RevealOutcome::Continue
        }
    }

    /// Whether every cell without a mine has been revealed.
    pub fn all_safe_revealed(&self) -> bool {
        self.cells()
            .iter()
            .all(|cell| cell.is_mine() || cell.revealed)
    }

    /// Exposes the board after a loss and tags cells for end-of-game styling.
    ///
    /// Running it again changes nothing.
    pub fn sweep_after_loss(&mut self, triggered: CellIndex) {
        for index in 0..self.total_cells() {
            let cell = &mut self[index];
            if index == triggered {
                cell.revealed = true;
                cell.flagged = false;
                cell.end_mark = Some(EndMark::TriggeredMine);
                continue;
            }

            match (cell.content, cell.flagged, cell.revealed) {
                (CellContent::Mine, false, _) => {
                    cell.revealed = true;
                    cell.end_mark = Some(EndMark::Mine);
                }
                (CellContent::Mine, true, _) => {}
                (_, true, _) => {
                    cell.end_mark = Some(EndMark::WrongFlag);
                }
                (CellContent::Number(_), false, false) => {
                    cell.revealed = true;
                    cell.end_mark = Some(EndMark::MissedNumber);
                }
                (CellContent::Empty, _, _) | (CellContent::Number(_), _, _) => {}
            }
        }
    }
}
