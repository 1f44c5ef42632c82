//! Punch-in / punch-out state machine.

use crate::core::clock::{Clock, SystemClock};
use crate::errors::AppResult;
use crate::models::punch::PunchRecord;
use crate::models::tracker_state::TrackerState;
use chrono::{DateTime, Duration, Local};

/// What a punch command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PunchOutcome {
    PunchedIn(DateTime<Local>),
    /// Index of the completed record and the record itself.
    PunchedOut(usize, PunchRecord),
    /// Punch-in while already in.
    AlreadyIn(DateTime<Local>),
    /// Punch-out with nothing open.
    NotIn,
}

impl PunchOutcome {
    pub fn applied(&self) -> bool {
        matches!(self, Self::PunchedIn(_) | Self::PunchedOut(..))
    }
}

pub struct TimeTracker<C: Clock = SystemClock> {
    state: TrackerState,
    clock: C,
}

impl TimeTracker<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TimeTracker<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimeTracker<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: TrackerState::default(),
            clock,
        }
    }

    /// Resume from a saved state. Fails with `InvalidState` when the open
    /// punch does not match the records.
    pub fn from_state(state: TrackerState, clock: C) -> AppResult<Self> {
        state.validate()?;
        Ok(Self { state, clock })
    }

    pub fn punch_in(&mut self) -> PunchOutcome {
        if let Some(open) = self.state.open_punch {
            return PunchOutcome::AlreadyIn(open);
        }

        let now = self.clock.now();
        self.state.open_punch = Some(now);
        self.state.records.push(PunchRecord::open(now));
        PunchOutcome::PunchedIn(now)
    }

    pub fn punch_out(&mut self) -> PunchOutcome {
        if self.state.open_punch.is_none() {
            return PunchOutcome::NotIn;
        }
        let idx = self.state.records.len().saturating_sub(1);
        let Some(record) = self.state.records.last_mut().filter(|r| r.is_open()) else {
            return PunchOutcome::NotIn;
        };

        record.complete(self.clock.now());
        let done = record.clone();
        self.state.open_punch = None;
        PunchOutcome::PunchedOut(idx, done)
    }

    /// Records in insertion order, most recent last.
    pub fn records(&self) -> &[PunchRecord] {
        &self.state.records
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn snapshot(&self) -> TrackerState {
        self.state.clone()
    }

    /// Total time of all completed records.
    pub fn worked_duration(&self) -> Duration {
        self.state
            .completed()
            .filter_map(|r| r.duration)
            .fold(Duration::zero(), |acc, d| acc + d)
    }
}
