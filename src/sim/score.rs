//! Score ledger: session score plus the persisted best

use crate::consts::SCORE_DIVISOR;
use crate::persistence::ScoreStore;

/// Raw score counters for one session
///
/// Counters advance one raw point per asteroid passed; players see the raw
/// value divided by `SCORE_DIVISOR`.
pub struct ScoreLedger {
    current: u64,
    best: u64,
    store: Box<dyn ScoreStore>,
}

impl ScoreLedger {
    /// Open a ledger, reading the best score from `store`
    pub fn new(mut store: Box<dyn ScoreStore>) -> Self {
        let best = store.load_best_score();
        log::info!("Best score loaded: {}", best / SCORE_DIVISOR);
        Self {
            current: 0,
            best,
            store,
        }
    }

    /// Zero the session score for a new run; the best score carries over
    pub fn start_new_session(&mut self) {
        self.current = 0;
    }

    /// Add one raw point, persisting the best score when it is beaten
    pub fn increase(&mut self) {
        self.current += 1;
        if self.current > self.best {
            self.best = self.current;
            self.store.save_best_score(self.best);
            log::debug!("New best score: {}", self.best);
        }
    }

    /// Raw session score
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Raw best score
    pub fn best(&self) -> u64 {
        self.best
    }

    /// Session score as shown to the player
    pub fn displayed_current(&self) -> u64 {
        self.current / SCORE_DIVISOR
    }

    /// Best score as shown to the player
    pub fn displayed_best(&self) -> u64 {
        self.best / SCORE_DIVISOR
    }
}

impl std::fmt::Debug for ScoreLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreLedger")
            .field("current", &self.current)
            .field("best", &self.best)
            .finish()
    }
}
