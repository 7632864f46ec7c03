//! Pure policy evaluation (no IO).
//!
//! Input: a project model constructed elsewhere.
//! Output: violations + verdict + summary data.

#![forbid(unsafe_code)]

pub mod identity;
pub mod model;
pub mod policy;
pub mod report;

mod engine;

pub use engine::{evaluate, evaluate_module};
