//! `TraceObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_core::Tick;
use lift_sim::{RunOutcome, SimObserver, TickSnapshot};

use crate::OutputError;
use crate::row::TickTraceRow;
use crate::writer::OutputWriter;

/// Trace rows buffered between writes.
const TRACE_BATCH: usize = 256;

/// A [`SimObserver`] that records every tick snapshot as a trace row on any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer callbacks
/// have no return value.  After the run ends, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: OutputWriter> {
    writer: W,
    strategy: &'static str,
    buffer: Vec<TickTraceRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    /// Create an observer backed by `writer`, labeling every row with
    /// `strategy`.
    pub fn new(writer: W, strategy: &'static str) -> Self {
        Self {
            writer,
            strategy,
            buffer: Vec::with_capacity(TRACE_BATCH),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run ends.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to append aggregate rows after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_buffer(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let result = self.writer.write_trace(&self.buffer);
        self.buffer.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TraceObserver<W> {
    fn on_tick(&mut self, snapshot: &TickSnapshot<'_>) {
        self.buffer.push(TickTraceRow {
            strategy: self.strategy,
            tick: snapshot.tick.0,
            floor: snapshot.floor.0,
            direction: snapshot.direction,
            waiting: snapshot.demand.total_waiting(),
        });
        if self.buffer.len() >= TRACE_BATCH {
            self.flush_buffer();
        }
    }

    fn on_run_end(&mut self, _final_tick: Tick, _outcome: RunOutcome) {
        self.flush_buffer();
    }
}
