use alloc::string::String;

use crate::*;

/// Storage key holding the serialized board.
pub const STORAGE_KEY: &str = "bingo_pepe_state";

/// Keeps a [`BoardState`] in sync with a [`KeyValueStore`]. The board itself is owned by the caller.
#[derive(Debug)]
pub struct BoardManager<S> {
    store: S,
    key: &'static str,
}

impl<S: KeyValueStore> BoardManager<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: &'static str) -> Self {
        Self { store, key }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the persisted board. A blob that cannot be parsed is treated as absent so the caller deals a new one.
    ///
    /// The restored board is re-evaluated without celebrating; a stale `victoryTriggered` is cleared and written back.
    pub fn restore(&mut self) -> Option<(BoardState, WinningCells)> {
        let blob = self.store.get(self.key)?;
        let mut state = match BoardState::from_json(&blob) {
            Ok(state) => state.normalized()?,
            Err(err) => {
                log::warn!("Ignoring persisted board: {}", err);
                return None;
            }
        };

        let (winning, transition) = state.reconcile_victory(Trigger::Restore);
        if transition.has_update() {
            self.persist_or_log(&state);
        }
        log::debug!("restored board with {} cells", state.len());
        Some((state, winning))
    }

    /// Deals a fresh board and persists it.
    pub fn initialize_from(&mut self, phrases: &[String], dealer: impl PhraseDealer) -> BoardState {
        let state = BoardState::initialize_from(phrases, dealer);
        self.persist_or_log(&state);
        state
    }

    pub fn persist(&mut self, state: &BoardState) -> Result<()> {
        let blob = state.to_json()?;
        self.store.set(self.key, &blob)
    }

    /// Flips one cell and persists the result, victory flag included.
    pub fn toggle(&mut self, state: &mut BoardState, index: usize) -> Result<ToggleOutcome> {
        let outcome = state.toggle(index)?;
        self.persist_or_log(state);
        Ok(outcome)
    }

    /// Forgets the persisted board. The caller deals a new one once fresh phrases arrive.
    pub fn reset(&mut self) {
        log::debug!("clearing persisted board");
        self.store.delete(self.key);
    }

    fn persist_or_log(&mut self, state: &BoardState) {
        if let Err(err) = self.persist(state) {
            log::error!("Could not save board: {}", err);
        }
    }
}
