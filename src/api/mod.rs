//! Client for the F1 session data service.
//!
//! - [`client`] - Blocking HTTP client for round schedules
//! - [`error`] - [`ConnectionError`], the enumerated probe failures
//! - [`session`] - Session codes, keys and schedule parsing

pub mod client;
pub mod error;
pub mod session;

pub use client::{ScheduleResponse, SessionClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::ConnectionError;
pub use session::{parse_schedule, SessionCode, SessionInfo, SessionKey};
