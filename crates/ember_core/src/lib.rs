//! # Ember Core
//!
//! Shared plumbing for the Ember engine.
//!
//! The only structure living here today is the generation-checked
//! [`Pool`], which the UI crate uses as its widget arena:
//!
//! - Slots are reused after removal
//! - Every reuse bumps the slot generation
//! - A [`Handle`] from a previous generation never resolves again
//!
//! ## Example
//!
//! ```rust
//! use ember_core::Pool;
//!
//! let mut pool = Pool::with_capacity(16);
//! let handle = pool.insert("panel");
//! assert_eq!(pool.get(handle), Some(&"panel"));
//!
//! pool.remove(handle);
//! assert!(pool.get(handle).is_none());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod handle;
pub mod memory;

pub use handle::Handle;
pub use memory::Pool;
