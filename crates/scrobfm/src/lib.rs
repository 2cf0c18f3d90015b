//! # scrobfm
//!
//! Last.fm scrobble history analyzer with period-over-period highlights.
//!
//! This is the binary crate: it wires configuration, the Last.fm client,
//! and the statistics engine behind a small command-line surface.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;

pub use app::*;
pub use cli::*;
pub use error::*;
