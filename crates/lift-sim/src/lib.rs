//! `lift-sim` — the dispatch scheduling core.
//!
//! Two controllers drive the same world model through a
//! Waiting → InLift → Arrived passenger lifecycle, one tick at a time:
//!
//! - [`NaiveController`] — the fixed-direction ("pulley") baseline.  Moves
//!   floor by floor and reverses only at the building's extremes; boards
//!   anyone it passes, whatever their desired direction.
//! - [`LookAheadController`] — LOOK-style scheduling.  Boards only riders
//!   heading the car's way, keeps moving while demand or an onboard target
//!   lies ahead, reverses on the spot otherwise, and carries a stall guard
//!   against unreachable demand.
//!
//! Each tick's phases run in a fixed order because later phases depend on
//! capacity and floor state mutated by earlier ones; nothing within a tick
//! may be reordered.  Runs are single-threaded and fully deterministic for
//! a fixed population and floor count.
//!
//! External renderers sample the per-tick [`TickSnapshot`] via a
//! [`SimObserver`]; they never reach into controller internals.

pub mod controller;
pub mod error;
pub mod lookahead;
pub mod naive;
pub mod observer;
pub mod report;

mod run;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use controller::Controller;
pub use error::{SimError, SimResult};
pub use lookahead::{LookAheadController, STALL_REVERSAL_LIMIT};
pub use naive::NaiveController;
pub use observer::{NoopObserver, SimObserver, TickSnapshot};
pub use report::{RunOutcome, RunReport};
