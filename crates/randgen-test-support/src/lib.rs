//! Shared test fakes and utilities for the random generator engine.

mod clock;
mod rng;
mod store;

pub use clock::{FixedClock, fixed_time};
pub use rng::{MockRng, SequenceRng};
pub use store::{MemoryStore, UnavailableStore};
