//! Core traits and types for ideal thermodynamic cycle models.
//!
//! This crate defines the shared abstractions the cycle crates build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`constraint`]: type-level numeric invariants checked at construction

pub mod constraint;
mod model;

pub use model::{Model, Snapshot};
