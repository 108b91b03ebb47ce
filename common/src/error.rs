use thiserror::Error;

/// Failures of the upload-and-render workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// A GET endpoint (upload URL issuance, history) answered with a non-success status.
    #[error("request to {endpoint} failed with status {status}")]
    RequestFailed { endpoint: String, status: u16 },
    /// The upload never reached the server; reported after normalization into a
    /// synthetic reply.
    #[error("upload could not reach the server: {reason}")]
    TransportFailed { reason: String },
    /// The upload endpoint answered with a non-success status.
    #[error("upload failed with status {status}")]
    ResponseFailed { status: u16, body: String },
    /// A submission was attempted before an upload URL was issued.
    #[error("no upload URL has been issued yet")]
    SessionNotInitialized,
    /// A submission was attempted while another one is still pending.
    #[error("a submission is already in progress")]
    SubmissionInFlight,
    /// The form was submitted without a photo.
    #[error("no photo selected")]
    MissingPhoto,
    /// A success reply whose body is not one of the known shapes.
    #[error("unexpected response body: {0}")]
    MalformedResponse(String),
}

/// Convenient alias for results returned from workflow functions.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

impl WorkflowError {
    /// Message shown to the user in place of the loading status.
    pub fn user_message(&self) -> String {
        match self {
            WorkflowError::RequestFailed { status, .. } => {
                format!("The server could not be reached (status {}). Please try again.", status)
            }
            WorkflowError::TransportFailed { .. } => {
                "Network error while uploading the photo. Please try again.".to_string()
            }
            WorkflowError::ResponseFailed { status, .. } => {
                format!("The photo could not be processed (status {}).", status)
            }
            WorkflowError::SessionNotInitialized => {
                "The upload form is not ready yet. Open it again and retry.".to_string()
            }
            WorkflowError::SubmissionInFlight => {
                "Please wait for the current upload to finish.".to_string()
            }
            WorkflowError::MissingPhoto => "Choose a photo to upload.".to_string(),
            WorkflowError::MalformedResponse(_) => {
                "The server returned results in an unexpected format.".to_string()
            }
        }
    }
}
