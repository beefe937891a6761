//! Cancellable one-shot timer tokens
//!
//! A [`TimerSlot`] hands out a [`TimerToken`] each time it is armed. Only the
//! most recently issued token of an armed slot may fire; cancelling or
//! re-arming the slot turns every outstanding token stale. The owner keeps the
//! slot, the scheduler keeps the token, and the firing side checks back with
//! the owner before acting.

use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    slot: Uuid,
    generation: u64,
    delay: Duration,
}

impl TimerToken {
    /// How long the scheduler should wait before firing
    #[inline]
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[derive(Debug)]
pub struct TimerSlot {
    id: Uuid,
    generation: u64,
    armed: bool,
}

impl TimerSlot {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            generation: 0,
            armed: false,
        }
    }

    /// Arm the slot, invalidating any earlier token
    pub fn arm(&mut self, delay: Duration) -> TimerToken {
        self.generation += 1;
        self.armed = true;
        TimerToken {
            slot: self.id,
            generation: self.generation,
            delay,
        }
    }

    /// Disarm the slot. Returns whether a token was outstanding.
    pub fn cancel(&mut self) -> bool {
        let was_armed = self.armed;
        self.armed = false;
        self.generation += 1;
        was_armed
    }

    #[must_use]
    pub fn is_current(&self, token: &TimerToken) -> bool {
        self.armed && token.slot == self.id && token.generation == self.generation
    }

    /// Consume the slot if `token` is current. A slot fires at most once per arm.
    pub fn fire(&mut self, token: &TimerToken) -> bool {
        if self.is_current(token) {
            self.armed = false;
            true
        } else {
            false
        }
    }

    #[inline]
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

impl Default for TimerSlot {
    fn default() -> Self {
        Self::new()
    }
}
