//! `lift-core` — foundational types for the `liftsim` dispatch simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                     |
//! |---------------|----------------------------------------------|
//! | [`ids`]       | `PassengerId`                                |
//! | [`floor`]     | `Floor` — 1-based, with directional helpers  |
//! | [`direction`] | `Direction` enum                             |
//! | [`tick`]      | `Tick` counter                               |
//! | [`config`]    | `SimConfig` per-run configuration            |
//! | [`rng`]       | `SimRng` (seeded, reproducible)              |
//! | [`error`]     | `CoreError`, `CoreResult`                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod direction;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod tick;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use floor::Floor;
pub use ids::PassengerId;
pub use rng::SimRng;
pub use tick::Tick;
