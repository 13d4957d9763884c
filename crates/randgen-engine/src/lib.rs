//! Randgen Engine — random generation.
//!
//! Three generators share one shape: draw `count` independent uniform values
//! from an injected [`DeterministicRng`](randgen_core::rng::DeterministicRng)
//! and wrap them in a result whose aggregates (dice total, coin tally) are
//! derived from the drawn sequence rather than stored beside it.
//!
//! The `application` layer holds what sits between a user interface and the
//! generators: textual input validation, copy feedback and the immutable view
//! state transitions a rendering layer subscribes to.

pub mod application;
pub mod domain;
