//! Simulation time model.
//!
//! # Design
//!
//! Time is an absolute minute counter (`Minute`).  Deadlines, order times,
//! ETAs and availability events are all expressed on the same axis, so
//! `540` is 09:00 on the simulated day and `600` is 10:00.  Travel times are
//! plain `u32` minute counts added onto a `Minute`.
//!
//! The virtual clock (`DispatchClock`) is an ordinary value owned by the
//! dispatcher.  It only moves forward, and only when the dispatch loop says
//! so; nothing here reads wall-clock time.

use std::fmt;

// ── Minute ────────────────────────────────────────────────────────────────────

/// An absolute simulation minute.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Minute(pub u32);

impl Minute {
    pub const ZERO: Minute = Minute(0);

    /// Return the minute `n` minutes after `self`, saturating at `u32::MAX`.
    #[inline]
    pub fn offset(self, n: u32) -> Minute {
        Minute(self.0.saturating_add(n))
    }

    /// Minutes elapsed from `earlier` to `self` (zero if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: Minute) -> u32 {
        self.0.saturating_sub(earlier.0)
    }

    /// Split into (day, hour, minute) for human-readable logging.
    pub fn dhm(self) -> (u32, u32, u32) {
        let days = self.0 / 1_440;
        let hours = (self.0 % 1_440) / 60;
        let minutes = self.0 % 60;
        (days, hours, minutes)
    }
}

impl std::ops::Add<u32> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: u32) -> Minute {
        self.offset(rhs)
    }
}

impl std::ops::Sub for Minute {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Minute) -> u32 {
        self.since(rhs)
    }
}

impl From<u32> for Minute {
    fn from(m: u32) -> Self {
        Minute(m)
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── DispatchClock ─────────────────────────────────────────────────────────────

/// The dispatcher's virtual clock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchClock {
    /// Minute at which the run started.
    pub start: Minute,
    /// The current minute.
    pub now: Minute,
}

impl DispatchClock {
    pub fn new(start: Minute) -> Self {
        Self { start, now: start }
    }

    /// Move the clock to `t`.  Never moves backwards: an earlier `t` is
    /// ignored and the clock keeps its current value.
    #[inline]
    pub fn advance_to(&mut self, t: Minute) {
        debug_assert!(t >= self.now, "clock moved backwards: {} -> {}", self.now, t);
        self.now = self.now.max(t);
    }

    /// Simulated minutes since the run started.
    #[inline]
    pub fn elapsed(&self) -> u32 {
        self.now - self.start
    }
}

impl fmt::Display for DispatchClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m) = self.now.dhm();
        write!(f, "{} (day {} {:02}:{:02})", self.now, d, h, m)
    }
}
