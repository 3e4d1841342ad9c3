//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `run_stats.csv`
//! - `tick_trace.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RunStatsRow, TickTraceRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    stats: Writer<File>,
    trace: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut stats = Writer::from_path(dir.join("run_stats.csv"))?;
        stats.write_record([
            "strategy",
            "floor_count",
            "lifetime_steps",
            "total_wait",
            "total_ride",
            "population_size",
            "avg_wait",
            "avg_ride",
        ])?;

        let mut trace = Writer::from_path(dir.join("tick_trace.csv"))?;
        trace.write_record(["strategy", "tick", "floor", "direction", "waiting"])?;

        Ok(Self {
            stats,
            trace,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_run_stats(&mut self, row: &RunStatsRow) -> OutputResult<()> {
        self.stats.write_record(&[
            row.strategy.to_string(),
            row.floor_count.to_string(),
            row.lifetime_steps.to_string(),
            row.total_wait.to_string(),
            row.total_ride.to_string(),
            row.population_size.to_string(),
            row.avg_wait.to_string(),
            row.avg_ride.to_string(),
        ])?;
        Ok(())
    }

    fn write_trace(&mut self, rows: &[TickTraceRow]) -> OutputResult<()> {
        for row in rows {
            self.trace.write_record(&[
                row.strategy.to_string(),
                row.tick.to_string(),
                row.floor.to_string(),
                row.direction.to_string(),
                row.waiting.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.stats.flush()?;
        self.trace.flush()?;
        Ok(())
    }
}
