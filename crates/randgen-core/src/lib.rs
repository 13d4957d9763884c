//! Randgen Core — shared abstractions.
//!
//! This crate defines the determinism seams (clock, randomness) and the
//! settings store contract that the engine, the widget refresher and the
//! interactive configurator all depend on. It contains no infrastructure code.

pub mod clock;
pub mod error;
pub mod rng;
pub mod settings;
