//! Dispatch run configuration.

use crate::{CoreError, CoreResult, Minute};

// ── Policy enums ──────────────────────────────────────────────────────────────

/// Order in which the availability scheduler hands back events.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SchedulerOrder {
    /// Earliest event time first; equal times in insertion order.
    #[default]
    TimeOrdered,
    /// Oldest insertion first, whatever its time.  Only correct while
    /// events are enqueued in non-decreasing time order.
    Fifo,
}

/// Home-slot function for the vehicle registry's open-addressing table.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RegistryHash {
    /// Sum of the id's UTF-16 code units modulo the slot count.
    #[default]
    Additive,
    /// `FxHasher` over the id bytes modulo the slot count.
    Fx,
}

// ── DispatchConfig ────────────────────────────────────────────────────────────

/// Top-level configuration for one dispatch run.
///
/// `Default` gives unbounded containers and a time-ordered scheduler.
/// [`DispatchConfig::legacy`] gives the small fixed buffers and FIFO
/// scheduler, for side-by-side runs against fixed-buffer deployments.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispatchConfig {
    /// Clock value when the run begins.  Default: 540 (09:00).
    pub start: Minute,

    /// Maximum pending parcels.  `None` = unbounded.
    pub queue_capacity: Option<usize>,

    /// Fixed registry table size.  Must exceed the vehicle count.  `None`
    /// sizes the table on demand during setup.
    pub registry_slots: Option<usize>,

    pub registry_hash: RegistryHash,

    /// Maximum pending availability events.  `None` = unbounded.
    pub scheduler_capacity: Option<usize>,

    pub scheduler_order: SchedulerOrder,

    /// Maximum decisions kept in the run's log.  Decisions past the limit
    /// are still reported to observers, then dropped and counted.
    pub decision_capacity: Option<usize>,

    /// Maximum failures kept in the failure log.
    pub failure_capacity: Option<usize>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            start:              Minute(540),
            queue_capacity:     None,
            registry_slots:     None,
            registry_hash:      RegistryHash::Additive,
            scheduler_capacity: None,
            scheduler_order:    SchedulerOrder::TimeOrdered,
            decision_capacity:  None,
            failure_capacity:   None,
        }
    }
}

impl DispatchConfig {
    /// Buffers of ten everywhere and a FIFO scheduler.
    pub fn legacy() -> Self {
        Self {
            start:              Minute(540),
            queue_capacity:     Some(10),
            registry_slots:     Some(10),
            registry_hash:      RegistryHash::Additive,
            scheduler_capacity: Some(10),
            scheduler_order:    SchedulerOrder::Fifo,
            decision_capacity:  None,
            failure_capacity:   Some(10),
        }
    }

    pub fn with_start(mut self, start: Minute) -> Self {
        self.start = start;
        self
    }

    /// Reject configurations no run can use.
    pub fn validate(&self) -> CoreResult<()> {
        if self.registry_slots == Some(0) {
            return Err(CoreError::Config("registry_slots must be at least 1".into()));
        }
        if self.scheduler_capacity == Some(0) {
            return Err(CoreError::Config(
                "scheduler_capacity of 0 would strand every assigned vehicle".into(),
            ));
        }
        Ok(())
    }
}
