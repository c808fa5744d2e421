//! Platform abstraction layer
//!
//! Maps raw host input onto the semantic keys the simulation reads.

pub mod input;

pub use input::{Key, KeyState};
