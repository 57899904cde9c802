//! Countdown timer for a timed game.
//!
//! The countdown holds no clock. Whoever owns it calls `tick()` once per
//! elapsed second.

/// Result of advancing the countdown by one second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The countdown was not running; nothing changed.
    Idle,
    /// Seconds left after this tick.
    Running(u32),
    /// This tick reached zero. The countdown has stopped.
    Expired,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining_secs: u32,
    running: bool,
}

impl Countdown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting down from `secs`.
    pub fn start(&mut self, secs: u32) {
        self.remaining_secs = secs;
        self.running = secs > 0;
    }

    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.running = false;
            Tick::Expired
        } else {
            Tick::Running(self.remaining_secs)
        }
    }

    /// Pause without touching the remaining time.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and zero the remaining time.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_secs = 0;
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}
