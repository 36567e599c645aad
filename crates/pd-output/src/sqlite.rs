//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `dispatch.db` file in the configured output directory
//! with two tables: `decisions` and `run_summary`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::DecisionWriter;
use crate::{DecisionRow, OutputResult, SummaryRow};

/// Writes dispatch output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    seq:      i64,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `dispatch.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("dispatch.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS decisions (
                 seq         INTEGER PRIMARY KEY,
                 kind        TEXT    NOT NULL,
                 time        INTEGER NOT NULL,
                 parcel_id   TEXT,
                 vehicle_id  TEXT,
                 destination INTEGER,
                 eta         INTEGER,
                 deadline    INTEGER,
                 reason      TEXT
             );
             CREATE TABLE IF NOT EXISTS run_summary (
                 start             INTEGER NOT NULL,
                 end_time          INTEGER NOT NULL,
                 iterations        INTEGER NOT NULL,
                 assigned          INTEGER NOT NULL,
                 failed            INTEGER NOT NULL,
                 released          INTEGER NOT NULL,
                 dropped_decisions INTEGER NOT NULL,
                 dropped_failures  INTEGER NOT NULL,
                 stranded          INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, seq: 0, finished: false })
    }
}

impl DecisionWriter for SqliteWriter {
    fn write_decisions(&mut self, rows: &[DecisionRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO decisions \
                 (seq, kind, time, parcel_id, vehicle_id, destination, eta, deadline, reason) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    self.seq,
                    row.kind,
                    row.time,
                    row.parcel_id,
                    row.vehicle_id,
                    row.destination,
                    row.eta,
                    row.deadline,
                    row.reason,
                ])?;
                self.seq += 1;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO run_summary \
             (start, end_time, iterations, assigned, failed, released, \
              dropped_decisions, dropped_failures, stranded) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
                row.start,
                row.end,
                row.iterations as i64,
                row.assigned as i64,
                row.failed as i64,
                row.released as i64,
                row.dropped_decisions as i64,
                row.dropped_failures as i64,
                row.stranded as i64,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
