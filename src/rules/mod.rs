//! Game rules: what counts as a guess, how it scores, how targets are drawn.
//!
//! These are free functions over core types. The engine calls into them but
//! owns all state.

pub mod scoring;

pub use scoring::{generate_target, score, validate};
