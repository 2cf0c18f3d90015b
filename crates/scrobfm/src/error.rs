//! Application-level error types for the scrobfm binary.

use scrobfm_common::ScrobError;

/// Errors raised by the binary's own wiring; everything else arrives as
/// a [`ScrobError`] from the workspace crates.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// No Last.fm user given on the CLI, in configuration, or in the
    /// environment.
    #[error("no Last.fm user: pass --user, set [lastfm].user, or export LASTFM_USER")]
    MissingUser,

    /// Domain error from a workspace crate.
    #[error(transparent)]
    Scrob(#[from] ScrobError),
}

/// Result type for the binary.
pub type AppResult<T> = scrobfm_common::Result<T>;
