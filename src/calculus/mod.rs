//! Calculus routines over polynomial term lists.

pub mod differentiate;

pub use differentiate::{differentiate, differentiate_n};
