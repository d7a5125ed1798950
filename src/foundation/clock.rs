use std::{cell::Cell, rc::Rc, time::Instant};

use crate::foundation::core::Millis;

/// Time source for the animator.
///
/// In a browser this is the animation-frame timestamp; tests drive a
/// [`ManualClock`] instead so every frame is deterministic.
pub trait Clock {
    fn now(&self) -> Millis;
}

/// Monotonic wall clock measured from construction.
#[derive(Clone, Copy, Debug)]
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
    fn now(&self) -> Millis {
        let ms = self.origin.elapsed().as_millis();
        Millis(u64::try_from(ms).unwrap_or(u64::MAX))
    }
}

/// Hand-advanced clock. Clones share the same time cell, so a test can keep
/// one copy and hand the other to a [`Stage`](crate::Stage).
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, t: Millis) {
        self.now.set(t.0);
    }

    pub fn advance(&self, by: Millis) {
        self.now.set(self.now.get().saturating_add(by.0));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        Millis(self.now.get())
    }
}
