use alloc::string::{String, ToString};
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cell {
    pub text: String,
    pub checked: bool,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            checked: false,
        }
    }
}

/// Everything that survives a reload. Field names match the JSON blob written by earlier versions of the page, and
/// every field may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardState {
    cells: Vec<Cell>,
    initialized: bool,
    victory_triggered: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToggleOutcome {
    pub index: usize,
    pub checked: bool,
    pub winning: WinningCells,
    pub transition: VictoryTransition,
}

impl ToggleOutcome {
    pub const fn celebrates(&self) -> bool {
        self.transition.celebrates()
    }
}

impl BoardState {
    pub fn initialize_from(phrases: &[String], dealer: impl PhraseDealer) -> Self {
        let cells = dealer.deal(phrases).into_iter().map(Cell::new).collect();
        Self {
            cells,
            initialized: true,
            victory_triggered: false,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn victory_state(&self) -> VictoryState {
        self.victory_triggered.into()
    }

    pub fn checked_grid(&self) -> Array2<bool> {
        let mut grid = Array2::default((SIDE as usize, SIDE as usize));
        for (index, cell) in self.cells.iter().take(CELL_COUNT).enumerate() {
            grid[index_to_coords(index).to_nd_index()] = cell.checked;
        }
        grid
    }

    pub fn winning_cells(&self) -> WinningCells {
        evaluate(&self.checked_grid())
    }

    pub fn validate_index(&self, index: usize) -> Result<usize> {
        if index < self.cells.len() {
            Ok(index)
        } else {
            Err(BoardError::OutOfRange {
                index,
                len: self.cells.len(),
            })
        }
    }

    /// Flips one cell and steps the victory state as a user action.
    pub fn toggle(&mut self, index: usize) -> Result<ToggleOutcome> {
        let index = self.validate_index(index)?;
        let cell = &mut self.cells[index];
        cell.checked = !cell.checked;
        let checked = cell.checked;
        log::debug!("toggle cell {}: checked={}", index, checked);

        let (winning, transition) = self.reconcile_victory(Trigger::UserToggle);
        Ok(ToggleOutcome {
            index,
            checked,
            winning,
            transition,
        })
    }

    /// Re-evaluates the board and updates `victoryTriggered` accordingly.
    pub fn reconcile_victory(&mut self, trigger: Trigger) -> (WinningCells, VictoryTransition) {
        let winning = self.winning_cells();
        let (state, transition) =
            next_victory_state(self.victory_state(), !winning.is_empty(), trigger);
        if transition.has_update() {
            log::debug!("victory {:?} -> {:?} ({:?})", self.victory_state(), state, trigger);
        }
        self.victory_triggered = state.is_shown();
        (winning, transition)
    }

    pub fn from_json(blob: &str) -> Result<Self> {
        serde_json::from_str(blob).map_err(|err| BoardError::CorruptState(err.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| BoardError::Storage(err.to_string()))
    }

    /// Applies the restore rules to a parsed blob: an uninitialized board counts as absent and extra cells are dropped.
    pub fn normalized(mut self) -> Option<Self> {
        if !self.initialized {
            log::warn!("Persisted board was never initialized, discarding it");
            return None;
        }
        if self.cells.len() > CELL_COUNT {
            log::warn!(
                "Persisted board has {} cells, keeping the first {}",
                self.cells.len(),
                CELL_COUNT
            );
            self.cells.truncate(CELL_COUNT);
        }
        Some(self)
    }
}
