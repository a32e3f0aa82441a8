//! Failure kinds for the connectivity probe.

use std::path::PathBuf;
use thiserror::Error;

/// Every way the connectivity probe can fail.
///
/// The connection check turns any of these into a failed result; none of
/// them abort the run.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The local response cache directory could not be created.
    #[error("could not enable cache at {path}: {source}")]
    CacheUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("could not initialise HTTP client: {0}")]
    ClientSetup(#[source] reqwest::Error),

    /// The request never produced a response (DNS, refused, timeout, TLS).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus { status: u16, url: String },

    /// The body was not the schedule document we expected.
    #[error("malformed response from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    /// The schedule for the requested round is empty.
    #[error("no event found for {year} round {round}")]
    EventNotFound { year: u16, round: u8 },

    /// The event exists but does not list the requested session.
    #[error("{event} has no {session} session")]
    SessionNotScheduled { event: String, session: String },
}
