//! # scrobfm Last.fm
//!
//! Last.fm API client for scrobfm.
//!
//! This crate owns everything between the wire and the analyzer: the
//! `user.getrecenttracks` pagination loop, request rate limiting,
//! per-page response caching, timezone adjustment of scrobble
//! timestamps, and normalization into an [`EventLog`].
//!
//! [`EventLog`]: scrobfm_common::EventLog

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod models;
pub mod timezone;

pub use client::*;
pub use models::*;
pub use timezone::*;
