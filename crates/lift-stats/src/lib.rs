//! `lift-stats` — reduces terminal run reports into summary statistics and
//! drives side-by-side strategy comparisons.
//!
//! # Crate layout
//!
//! | Module     | Contents                                         |
//! |------------|--------------------------------------------------|
//! | [`stats`]  | `RunStats` — the seven-field per-run aggregate   |
//! | [`runner`] | `compare_strategies`, `sweep`, `SweepConfig`     |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                          |
//! |------------|-------------------------------------------------|
//! | `parallel` | Runs sweep entries on Rayon's thread pool.      |
//! | `serde`    | Adds `Serialize`/`Deserialize` to `RunStats`.   |

pub mod runner;
pub mod stats;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use runner::{Comparison, SweepConfig, compare_strategies, sweep};
pub use stats::RunStats;
