use super::punch::PunchRecord;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local};

/// Snapshot of the tracker: append-only records plus the open punch, if any.
///
/// `open_punch` is `Some(t)` exactly when the last record is still open and
/// started at `t`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerState {
    pub records: Vec<PunchRecord>,
    pub open_punch: Option<DateTime<Local>>,
}

impl TrackerState {
    /// Rebuild a state from stored records, deriving `open_punch` from the last one.
    ///
    /// Fails when an open record appears anywhere but at the tail.
    pub fn from_records(records: Vec<PunchRecord>) -> AppResult<Self> {
        let open_punch = records.last().filter(|r| r.is_open()).map(|r| r.in_time);
        let state = Self {
            records,
            open_punch,
        };
        state.validate()?;
        Ok(state)
    }

    /// Check that only the last record may be open and that `open_punch`
    /// mirrors it.
    pub fn validate(&self) -> AppResult<()> {
        let last = self.records.len().saturating_sub(1);
        if let Some(pos) = self.records.iter().position(|r| r.is_open())
            && pos != last
        {
            return Err(AppError::InvalidState(format!(
                "record #{} is open but is not the most recent one",
                pos + 1
            )));
        }

        let open_tail = self.records.last().filter(|r| r.is_open());
        match (self.open_punch, open_tail) {
            (None, None) => Ok(()),
            (Some(at), Some(rec)) if at == rec.in_time => Ok(()),
            (Some(at), Some(rec)) => Err(AppError::InvalidState(format!(
                "open punch {} does not match the open record started at {}",
                at.to_rfc3339(),
                rec.in_time.to_rfc3339()
            ))),
            (Some(at), None) => Err(AppError::InvalidState(format!(
                "open punch {} has no open record",
                at.to_rfc3339()
            ))),
            (None, Some(_)) => Err(AppError::InvalidState(
                "last record is open but no punch is open".to_string(),
            )),
        }
    }

    pub fn is_punched_in(&self) -> bool {
        self.open_punch.is_some()
    }

    pub fn completed(&self) -> impl Iterator<Item = &PunchRecord> {
        self.records.iter().filter(|r| !r.is_open())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Local> {
        Local.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn open_tail_sets_open_punch() {
        let mut first = PunchRecord::open(at(0));
        first.complete(at(60));
        let state = TrackerState::from_records(vec![first, PunchRecord::open(at(120))]).unwrap();

        assert_eq!(state.open_punch, Some(at(120)));
        assert_eq!(state.completed().count(), 1);
    }

    #[test]
    fn open_record_in_the_middle_is_rejected() {
        let mut last = PunchRecord::open(at(120));
        last.complete(at(180));
        let err = TrackerState::from_records(vec![PunchRecord::open(at(0)), last]).unwrap_err();

        assert!(matches!(err, AppError::InvalidState(_)));
    }

    #[test]
    fn empty_records_mean_punched_out() {
        let state = TrackerState::from_records(Vec::new()).unwrap();
        assert!(!state.is_punched_in());
        assert_eq!(state, TrackerState::default());
    }

    #[test]
    fn open_punch_must_match_an_open_tail() {
        let mut done = PunchRecord::open(at(0));
        done.complete(at(3600));

        let stray = TrackerState {
            records: vec![done.clone()],
            open_punch: Some(at(0)),
        };
        assert!(matches!(stray.validate(), Err(AppError::InvalidState(_))));

        let nothing_recorded = TrackerState {
            records: Vec::new(),
            open_punch: Some(at(0)),
        };
        assert!(matches!(
            nothing_recorded.validate(),
            Err(AppError::InvalidState(_))
        ));

        let wrong_start = TrackerState {
            records: vec![done.clone(), PunchRecord::open(at(7200))],
            open_punch: Some(at(7300)),
        };
        assert!(matches!(
            wrong_start.validate(),
            Err(AppError::InvalidState(_))
        ));

        let forgotten = TrackerState {
            records: vec![done, PunchRecord::open(at(7200))],
            open_punch: None,
        };
        assert!(matches!(forgotten.validate(), Err(AppError::InvalidState(_))));
    }
}
