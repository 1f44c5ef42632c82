use crate::core::tracker::PunchOutcome;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::punch::PunchRecord;
use crate::models::tracker_state::TrackerState;
use crate::utils::time::{from_storage, to_storage};
use rusqlite::{Connection, Row, params};

/// Raw `punches` row before timestamp decoding.
struct PunchRow {
    in_time: String,
    out_time: Option<String>,
}

fn map_row(row: &Row) -> rusqlite::Result<PunchRow> {
    Ok(PunchRow {
        in_time: row.get("in_time")?,
        out_time: row.get("out_time")?,
    })
}

impl PunchRow {
    /// `duration_ms` is a truncated copy for readers of the raw table. The
    /// duration is rebuilt from the full-precision timestamps.
    fn into_record(self) -> AppResult<PunchRecord> {
        let in_time = from_storage(&self.in_time)?;
        let out_time = self.out_time.as_deref().map(from_storage).transpose()?;
        Ok(PunchRecord {
            in_time,
            out_time,
            duration: out_time.map(|out| out - in_time),
        })
    }
}

pub fn load_records(conn: &Connection) -> AppResult<Vec<PunchRecord>> {
    let mut stmt = conn.prepare("SELECT in_time, out_time FROM punches ORDER BY seq ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?.into_record()?);
    }
    Ok(out)
}

/// Load the stored records and rebuild the tracker state from them.
pub fn load_state(pool: &DbPool) -> AppResult<TrackerState> {
    TrackerState::from_records(load_records(&pool.conn)?)
}

/// Insert or overwrite the record at 0-based position `idx`.
pub fn upsert_record(conn: &Connection, idx: usize, rec: &PunchRecord) -> rusqlite::Result<()> {
    let seq = idx as i64 + 1;
    conn.execute(
        "INSERT INTO punches (seq, in_time, out_time, duration_ms)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(seq) DO UPDATE SET
             in_time = excluded.in_time,
             out_time = excluded.out_time,
             duration_ms = excluded.duration_ms",
        params![
            seq,
            to_storage(&rec.in_time),
            rec.out_time.as_ref().map(to_storage),
            rec.duration.map(|d| d.num_milliseconds()),
        ],
    )?;
    Ok(())
}

/// Write the effect of a punch command. Ignored punches write nothing.
pub fn persist_outcome(
    pool: &mut DbPool,
    outcome: &PunchOutcome,
    state: &TrackerState,
) -> AppResult<()> {
    let (idx, rec) = match outcome {
        PunchOutcome::PunchedIn(_) => match state.records.last() {
            Some(rec) => (state.records.len() - 1, rec.clone()),
            None => return Ok(()),
        },
        PunchOutcome::PunchedOut(idx, rec) => (*idx, rec.clone()),
        PunchOutcome::AlreadyIn(_) | PunchOutcome::NotIn => return Ok(()),
    };

    pool.with_conn(|conn| {
        let tx = conn.transaction()?;
        upsert_record(&tx, idx, &rec)?;
        tx.commit()
    })?;
    Ok(())
}

/// One row of the internal `log` table.
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn load_log(conn: &Connection) -> AppResult<Vec<LogEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::core::tracker::TimeTracker;
    use crate::db::initialize::init_db;
    use chrono::{Duration, Local, TimeZone};

    fn pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        pool
    }

    #[test]
    fn punch_cycle_survives_reload() {
        let mut pool = pool();
        let clock = ManualClock::new(Local.timestamp_opt(1_717_000_000, 0).unwrap());

        let mut tracker = TimeTracker::from_state(load_state(&pool).unwrap(), &clock).unwrap();
        let outcome = tracker.punch_in();
        persist_outcome(&mut pool, &outcome, tracker.state()).unwrap();

        let reloaded = load_state(&pool).unwrap();
        assert_eq!(&reloaded, tracker.state());
        assert!(reloaded.is_punched_in());

        let mut tracker = TimeTracker::from_state(reloaded, &clock).unwrap();
        clock.advance(Duration::seconds(3600));
        let outcome = tracker.punch_out();
        persist_outcome(&mut pool, &outcome, tracker.state()).unwrap();

        let reloaded = load_state(&pool).unwrap();
        assert_eq!(reloaded.records.len(), 1);
        assert_eq!(reloaded.records[0].duration, Some(Duration::seconds(3600)));
        assert!(!reloaded.is_punched_in());
    }

    #[test]
    fn sub_millisecond_durations_survive_reload() {
        let mut pool = pool();
        let clock = ManualClock::new(Local.timestamp_opt(1_717_000_000, 123_456_789).unwrap());
        let mut tracker = TimeTracker::with_clock(&clock);

        let outcome = tracker.punch_in();
        persist_outcome(&mut pool, &outcome, tracker.state()).unwrap();
        clock.advance(Duration::seconds(3600) + Duration::nanoseconds(987_654));
        let outcome = tracker.punch_out();
        persist_outcome(&mut pool, &outcome, tracker.state()).unwrap();

        let reloaded = load_state(&pool).unwrap();
        let rec = &reloaded.records[0];
        assert_eq!(rec, &tracker.records()[0]);
        assert_eq!(rec.duration, rec.out_time.map(|out| out - rec.in_time));
        assert_eq!(
            rec.duration,
            Some(Duration::seconds(3600) + Duration::nanoseconds(987_654))
        );
    }

    #[test]
    fn ignored_punch_writes_nothing() {
        let mut pool = pool();
        let state = TrackerState::default();
        persist_outcome(&mut pool, &PunchOutcome::NotIn, &state).unwrap();
        assert!(load_records(&pool.conn).unwrap().is_empty());
    }

    #[test]
    fn log_rows_are_read_back_in_order() {
        let pool = pool();
        crate::db::log::ttlog(&pool.conn, "in", "punch", "first").unwrap();
        crate::db::log::ttlog(&pool.conn, "out", "", "second").unwrap();

        let entries = load_log(&pool.conn).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, "in");
        assert_eq!(entries[1].message, "second");
    }
}
