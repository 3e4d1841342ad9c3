//! `lift-output` — simulation output writers for the liftsim simulator.
//!
//! Two CSV files are produced:
//!
//! | File             | Contents                                           |
//! |------------------|----------------------------------------------------|
//! | `run_stats.csv`  | One aggregate row per run (strategy + statistics)  |
//! | `tick_trace.csv` | Per-tick car position/direction/waiting headcount  |
//!
//! The backend sits behind [`OutputWriter`]; the per-tick side is driven by
//! [`TraceObserver`], which implements `lift_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, RunStatsRow, TraceObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut observer = TraceObserver::new(writer, "naive");
//! let report = controller.run(&mut observer);
//! observer.take_error().map(|e| eprintln!("output error: {e}"));
//! let mut writer = observer.into_writer();
//! writer.write_run_stats(&RunStatsRow::new("naive", &stats))?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{RunStatsRow, TickTraceRow};
pub use writer::OutputWriter;
