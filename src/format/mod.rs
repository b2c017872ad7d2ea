//! Formatting helpers for rendering term lists.

pub mod terms;

pub use terms::pretty;
