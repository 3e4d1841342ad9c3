//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, RunStatsRow, TickTraceRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`TraceObserver::take_error`][crate::TraceObserver::take_error].
pub trait OutputWriter {
    /// Write one aggregate-statistics row.
    fn write_run_stats(&mut self, row: &RunStatsRow) -> OutputResult<()>;

    /// Write a batch of per-tick trace rows.
    fn write_trace(&mut self, rows: &[TickTraceRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
