//! Error handling for cogroup join operations.
//!
//! Construction-time validation (policy length, closure sanity) fails from
//! [`Joiner::join`](super::joiner::Joiner::join); contract violations that
//! are only detectable mid-iteration arrive as `Err` items from the join
//! iterator itself.

use std::fmt;

/// Result type for join operations.
pub type JoinResult<T> = Result<T, JoinError>;

/// Errors surfaced by joiners and the join iterator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinError {
    /// The join-policy vector length disagrees with the closure's stream
    /// count. The policy is never silently truncated or padded.
    ConfigurationMismatch {
        /// Number of per-stream policies the joiner was configured with
        policy_len: usize,
        /// Number of streams the group closure actually exposes
        stream_count: usize,
    },

    /// The group closure violated its contract, e.g. every stream empty for
    /// a claimed group, or a stream iterator that is not restartable.
    ClosureContract {
        /// Description of the violated contract
        message: String,
        /// Offending stream index, if the violation is stream-specific
        stream: Option<usize>,
    },
}

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinError::ConfigurationMismatch {
                policy_len,
                stream_count,
            } => {
                write!(
                    f,
                    "Join configuration mismatch: {} per-stream policies configured but the group closure exposes {} streams",
                    policy_len, stream_count
                )
            }
            JoinError::ClosureContract { message, stream } => {
                if let Some(stream) = stream {
                    write!(
                        f,
                        "Group closure contract violation on stream {}: {}",
                        stream, message
                    )
                } else {
                    write!(f, "Group closure contract violation: {}", message)
                }
            }
        }
    }
}

impl std::error::Error for JoinError {}

impl JoinError {
    /// Helper to create a configuration-mismatch error.
    pub fn configuration_mismatch(policy_len: usize, stream_count: usize) -> Self {
        JoinError::ConfigurationMismatch {
            policy_len,
            stream_count,
        }
    }

    /// Helper to create a closure-contract violation.
    pub fn contract(message: impl Into<String>, stream: Option<usize>) -> Self {
        JoinError::ClosureContract {
            message: message.into(),
            stream,
        }
    }
}
