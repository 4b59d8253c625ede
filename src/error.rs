// Error types for the two Graph API calls. Each variant records which stage
// failed so the front end can print a single consolidated message.

use std::fmt;

/// Which half of the workflow produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Creation,
    Publish,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Creation => f.write_str("creation"),
            Stage::Publish => f.write_str("publish"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// DNS, refused connection, timeout or a broken body stream.
    #[error("connection error during {stage}: {source}")]
    Transport {
        stage: Stage,
        #[source]
        source: reqwest::Error,
    },
    /// The platform answered with a non-2xx status.
    #[error("{stage} request rejected: HTTP {status} - {body}")]
    Rejected { stage: Stage, status: u16, body: String },
    /// Rejected locally, before any request was sent.
    #[error("invalid {stage} input: {reason}")]
    InvalidInput { stage: Stage, reason: &'static str },
    /// A 2xx answer that does not carry a usable `id`.
    #[error("malformed {stage} response, no id returned: {body}")]
    Malformed { stage: Stage, body: String },
}

impl PublishError {
    pub fn stage(&self) -> Stage {
        match self {
            PublishError::Transport { stage, .. }
            | PublishError::Rejected { stage, .. }
            | PublishError::InvalidInput { stage, .. }
            | PublishError::Malformed { stage, .. } => *stage,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, PublishError::Transport { source, .. } if source.is_timeout())
    }
}

pub type Result<T> = std::result::Result<T, PublishError>;
