use serde::Serialize;
use thiserror::Error;

/// Status used for replies synthesized after a transport failure.
pub const SYNTHETIC_FAILURE_STATUS: u16 = 503;

/// Minimal view of an HTTP response, independent of the HTTP client in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerReply {
    pub status: u16,
    pub body: String,
    /// Set when the reply was built locally after the request never reached
    /// the server.
    pub synthetic: bool,
}

/// Body of a synthesized failure reply.
#[derive(Serialize)]
struct SyntheticBody<'a> {
    code: u16,
    message: &'a str,
}

impl ServerReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            synthetic: false,
        }
    }

    /// Replacement reply describing a transport failure, so callers only ever
    /// inspect one reply shape.
    pub fn from_transport_error(err: &TransportError) -> Self {
        let body = serde_json::to_string(&SyntheticBody {
            code: SYNTHETIC_FAILURE_STATUS,
            message: &err.reason,
        })
        .unwrap_or_default();
        Self {
            status: SYNTHETIC_FAILURE_STATUS,
            body,
            synthetic: true,
        }
    }

    /// Reason recorded in a synthesized reply, `None` for real server replies.
    pub fn transport_reason(&self) -> Option<String> {
        if !self.synthetic {
            return None;
        }
        let body: serde_json::Value = serde_json::from_str(&self.body).ok()?;
        body.get("message")?.as_str().map(str::to_string)
    }

    /// `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request could not be completed at the network level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct TransportError {
    pub reason: String,
}

impl TransportError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
