//! Guided activities on the FINN screen: 4-7-8 breathing and affirmations

use crate::catalog::seed::AFFIRMATIONS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
}

impl BreathPhase {
    /// Phase length in seconds
    pub fn seconds(&self) -> u32 {
        match self {
            BreathPhase::Inhale => 4,
            BreathPhase::Hold => 7,
            BreathPhase::Exhale => 8,
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Breathe in through your nose",
            BreathPhase::Hold => "Hold your breath",
            BreathPhase::Exhale => "Exhale slowly through your mouth",
        }
    }

    fn next(&self) -> BreathPhase {
        match self {
            BreathPhase::Inhale => BreathPhase::Hold,
            BreathPhase::Hold => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Inhale,
        }
    }
}

/// 4-7-8 breathing exercise, advanced one second per `tick`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breathing {
    running: bool,
    phase: BreathPhase,
    remaining: u32,
    cycles: u32,
}

impl Default for Breathing {
    fn default() -> Self {
        Self {
            running: false,
            phase: BreathPhase::Inhale,
            remaining: BreathPhase::Inhale.seconds(),
            cycles: 0,
        }
    }
}

impl Breathing {
    pub fn start(&mut self) {
        *self = Self {
            running: true,
            ..Self::default()
        };
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    /// Seconds left in the current phase
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Completed inhale-hold-exhale cycles
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return;
        }
        if self.phase == BreathPhase::Exhale {
            self.cycles += 1;
        }
        self.phase = self.phase.next();
        self.remaining = self.phase.seconds();
    }
}

/// Cycles through the affirmation list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Affirmations {
    index: usize,
}

impl Affirmations {
    pub fn current(&self) -> &'static str {
        AFFIRMATIONS[self.index % AFFIRMATIONS.len()]
    }

    pub fn advance(&mut self) -> &'static str {
        self.index = (self.index + 1) % AFFIRMATIONS.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle_takes_19_seconds() {
        let mut breathing = Breathing::default();
        breathing.tick();
        assert_eq!(breathing.remaining(), 4, "idle exercise does not advance");

        breathing.start();
        for _ in 0..4 {
            breathing.tick();
        }
        assert_eq!(breathing.phase(), BreathPhase::Hold);
        assert_eq!(breathing.remaining(), 7);

        for _ in 0..15 {
            breathing.tick();
        }
        assert_eq!(breathing.phase(), BreathPhase::Inhale);
        assert_eq!(breathing.cycles(), 1);

        breathing.stop();
        breathing.tick();
        assert_eq!(breathing.remaining(), 4);
    }

    #[test]
    fn test_affirmations_wrap() {
        let mut affirmations = Affirmations::default();
        let first = affirmations.current();
        assert!(first.starts_with("I am growing stronger every day"));
        for _ in 0..AFFIRMATIONS.len() {
            affirmations.advance();
        }
        assert_eq!(affirmations.current(), first);
    }
}
