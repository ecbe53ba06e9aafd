//! Core traits and types for rodheat.
//!
//! This crate defines the shared abstractions that the rod model, the
//! solvers, and the observers build on:
//!
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`constraint`] — numeric invariants checked once at construction time

pub mod constraint;
mod observer;

pub use observer::Observer;
