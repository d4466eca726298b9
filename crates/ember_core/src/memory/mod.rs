//! # Memory Management
//!
//! Slot pools with generation-checked handles.
//!
//! Storage grows on demand, but freed slots are recycled first so a
//! long-lived pool settles at its high-water mark.

mod pool;

pub use pool::Pool;
