//! Platform abstraction layer
//!
//! Handles the edges the simulation does not own:
//! - Time (monotonic milliseconds fed into every tick)
//! - Input (keys mapped to discrete intents)

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use crate::sim::GamePhase;

/// Millisecond time source
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock, measured from creation
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock; clones share the same time
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        let clock = Self::default();
        clock.now.set(start_ms);
        clock
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Discrete player intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Jump,
    Shoot,
    Start,
    Restart,
    Quit,
}

/// Whether the host loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Physical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Enter,
    R,
    Escape,
}

/// Map a key press to an intent for the current phase
pub fn intent_for(phase: GamePhase, key: Key) -> Option<Intent> {
    match (phase, key) {
        (_, Key::Escape) => Some(Intent::Quit),
        (GamePhase::Title, Key::Space) => Some(Intent::Start),
        (GamePhase::Playing, Key::Space) => Some(Intent::Jump),
        (GamePhase::Playing, Key::Enter) => Some(Intent::Shoot),
        (GamePhase::GameOver, Key::R) => Some(Intent::Restart),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared() {
        let clock = ManualClock::new(100);
        let other = clock.clone();
        clock.advance(50);
        assert_eq!(other.now_ms(), 150);
        other.set(10);
        assert_eq!(clock.now_ms(), 10);
    }

    #[test]
    fn test_space_depends_on_phase() {
        assert_eq!(intent_for(GamePhase::Title, Key::Space), Some(Intent::Start));
        assert_eq!(intent_for(GamePhase::Playing, Key::Space), Some(Intent::Jump));
        assert_eq!(intent_for(GamePhase::GameOver, Key::Space), None);
    }

    #[test]
    fn test_escape_always_quits() {
        for phase in [GamePhase::Title, GamePhase::Playing, GamePhase::GameOver] {
            assert_eq!(intent_for(phase, Key::Escape), Some(Intent::Quit));
        }
    }

}
