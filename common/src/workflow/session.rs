use log::{debug, warn};

use crate::backend::Backend;
use crate::error::{WorkflowError, WorkflowResult};

/// Holds the one-time upload URL issued by the server.
///
/// Set once per initialization, consumed once per submission: Blobstore URLs
/// accept a single upload, so a second submission needs a fresh URL.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UploadSession {
    url: Option<String>,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, url: String) {
        self.url = Some(url);
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_initialized(&self) -> bool {
        self.url.is_some()
    }

    /// Takes the URL out of the session, leaving it uninitialized.
    pub fn take(&mut self) -> WorkflowResult<String> {
        self.url.take().ok_or(WorkflowError::SessionNotInitialized)
    }
}

/// Asks the server for a fresh upload URL.
///
/// Errors
/// - `RequestFailed` on a non-success status.
/// - `TransportFailed` when the request never reached the server.
/// - `MalformedResponse` when the body is blank.
pub async fn request_upload_url<B: Backend>(backend: &B, endpoint: &str) -> WorkflowResult<String> {
    let reply = backend.get_text(endpoint).await.map_err(|err| {
        warn!("upload URL request to {} failed: {}", endpoint, err);
        WorkflowError::TransportFailed { reason: err.reason }
    })?;

    if !reply.is_success() {
        warn!("{} answered with status {}", endpoint, reply.status);
        return Err(WorkflowError::RequestFailed {
            endpoint: endpoint.to_string(),
            status: reply.status,
        });
    }

    let url = reply.body.trim();
    if url.is_empty() {
        return Err(WorkflowError::MalformedResponse(format!(
            "{} returned an empty upload URL",
            endpoint
        )));
    }
    debug!("issued upload URL {}", url);
    Ok(url.to_string())
}
