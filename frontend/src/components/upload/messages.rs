use snapshop_common::error::WorkflowResult;
use snapshop_common::model::product::ShoppingResponse;
use snapshop_common::workflow::Command;

pub enum Msg {
    /// A user trigger.
    Command(Command),
    /// Outcome of the upload URL request.
    SessionIssued(WorkflowResult<String>),
    /// Outcome of the photo upload.
    SubmissionFinished(WorkflowResult<ShoppingResponse>),
}
