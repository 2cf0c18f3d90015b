//! # scrobfm Stats
//!
//! Period-over-period scrobble statistics for scrobfm.
//!
//! This crate is pure computation over an in-memory [`EventLog`]: it
//! ranks artists, albums, and tracks within a date window, resolves
//! week/month/year windows and their predecessors, and composes the
//! current-versus-previous highlight summary. Nothing here performs I/O
//! or holds shared mutable state, so every entry point is safe to call
//! concurrently over a shared log snapshot.
//!
//! [`EventLog`]: scrobfm_common::EventLog

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod analyzer;
pub mod highlights;
pub mod period;
pub mod ranking;

pub use analyzer::*;
pub use highlights::*;
pub use period::*;
pub use ranking::*;
