//! Generation requests, results and the generators themselves.

pub mod generators;
pub mod requests;
pub mod results;
