use snapshop_common::config::WorkflowConfig;
use yew::prelude::*;

/// Properties for the `UploadWorkflowComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct UploadProps {
    /// Endpoints and UI strings. Read once when the component is created.
    #[prop_or_default]
    pub config: WorkflowConfig,
}
