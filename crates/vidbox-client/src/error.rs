//! Client error taxonomy.
//!
//! Four distinct failure classes with distinct handling:
//! - [`ClientError::Validation`] is local and pre-network; the user fixes
//!   their input and resubmits.
//! - [`ClientError::Submission`] is a network or backend rejection at job
//!   creation.
//! - [`ClientError::Api`] covers non-submission requests (metadata,
//!   artifact fetch).
//! - [`ClientError::PollExhausted`] fires only when a consecutive-failure
//!   cap is configured.
//!
//! A single failed status check is *not* an error value anywhere in the
//! public API: it is logged inside the polling loop and retried on the next
//! tick. A terminal `status = error` job is data, not an `Err`.

use thiserror::Error;
use vidbox_models::ValidationError;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// Rejected before any network call
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Job creation failed; carries the user-facing message
    #[error("{0}")]
    Submission(String),

    /// A non-submission request failed
    #[error("{0}")]
    Api(String),

    /// The configured consecutive-failure cap was reached while polling
    #[error("gave up after {0} consecutive failed status checks")]
    PollExhausted(u32),
}

impl ClientError {
    pub fn submission(msg: impl Into<String>) -> Self {
        Self::Submission(msg.into())
    }

    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
