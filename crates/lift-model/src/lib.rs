//! `lift-model` — the simulated world: passengers, demand, and the car.
//!
//! # Crate layout
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`passenger`]  | `Passenger`, `PassengerState` (Waiting→InLift→Arrived) |
//! | [`population`] | Seeded random population generation                 |
//! | [`demand`]     | `DemandIndex` (floor → waiting headcount)           |
//! | [`car`]        | `LiftCar`, `CAR_CAPACITY`                           |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `serde`   | Adds `Serialize`/`Deserialize` to the passenger types.  |
//! | `fx-hash` | Backs the demand index with `FxHashMap`.                |

pub mod car;
pub mod demand;
pub mod passenger;
pub mod population;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use car::{CAR_CAPACITY, LiftCar};
pub use demand::DemandIndex;
pub use passenger::{Passenger, PassengerState};
pub use population::{generate_population, generate_population_sized};
