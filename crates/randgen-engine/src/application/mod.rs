//! Boundary logic between a user interface and the generators.

pub mod feedback;
pub mod input;
pub mod session;
