//! # scrobfm Config
//!
//! Type-safe configuration management for scrobfm.
//!
//! This crate provides TOML configuration loading, validation, atomic
//! persistence, and a lock-free cache for shared reads.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod defaults;
pub mod loader;
pub mod overrides;
pub mod schema;
pub mod validator;

pub use cache::*;
pub use loader::*;
pub use overrides::*;
pub use schema::*;
pub use validator::*;
