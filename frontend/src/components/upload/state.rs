//! Component state for the upload workflow.

use snapshop_common::config::WorkflowConfig;
use snapshop_common::workflow::Workflow;
use yew::prelude::*;

use crate::http::GlooBackend;

/// State container for the `UploadWorkflowComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct UploadWorkflowComponent {
    /// Session, rendered results, status line, modal and form visibility.
    pub workflow: Workflow,

    /// HTTP adapter handed to every spawned request.
    pub backend: GlooBackend,

    /// Reference to the category `<select>`.
    pub category_ref: NodeRef,

    /// Reference to the photo `<input type="file">`.
    pub file_input_ref: NodeRef,
}

impl UploadWorkflowComponent {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            workflow: Workflow::new(config),
            backend: GlooBackend,
            category_ref: Default::default(),
            file_input_ref: Default::default(),
        }
    }
}
