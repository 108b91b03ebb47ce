//! Upload-and-render workflow.
//!
//! `Workflow` owns all shared state of the page: the upload session, the
//! rendered results, the status line, and the visibility of the upload modal
//! and form. Its methods are synchronous state transitions; the network calls
//! live in free async functions (`request_upload_url`, `submit`,
//! `fetch_history`) so a UI can drive them from its own task spawner without
//! holding the state across an await point.
//!
//! Ordering
//! 1. `open_upload_dialog` + `request_upload_url` + `session_issued`
//! 2. `begin_submission` (clears results, hides the form, sets loading)
//! 3. `submit`
//! 4. `finish_submission` (renders exactly once on success)

pub mod history;
pub mod render;
pub mod session;
pub mod submission;

use log::{debug, info, warn};

use crate::backend::Backend;
use crate::config::WorkflowConfig;
use crate::error::{WorkflowError, WorkflowResult};
use crate::model::form::UploadForm;
use crate::model::product::ShoppingResponse;

pub use history::{HistoryEntry, HistoryView, fetch_history, format_timestamp, render_history};
pub use render::{ProductCard, ResultBlock, ResultsView};
pub use session::{UploadSession, request_upload_url};
pub use submission::{interpret_reply, submit};

/// User-visible status line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading(String),
    Failed(String),
}

/// Typed triggers of the workflow, dispatched by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The "Upload" trigger: show the modal and request an upload URL.
    OpenUploadDialog,
    /// The modal's close control.
    CloseUploadDialog,
    /// The form's submit control.
    Submit,
}

#[derive(Debug, Clone)]
pub struct Workflow {
    config: WorkflowConfig,
    session: UploadSession,
    results: ResultsView,
    status: Status,
    modal_open: bool,
    form_revealed: bool,
    in_flight: bool,
}

impl Workflow {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            session: UploadSession::new(),
            results: ResultsView::new(),
            status: Status::Idle,
            modal_open: false,
            form_revealed: false,
            in_flight: false,
        }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn session(&self) -> &UploadSession {
        &self.session
    }

    pub fn results(&self) -> &ResultsView {
        &self.results
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_form_revealed(&self) -> bool {
        self.form_revealed
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Shows the modal. The form stays hidden until a URL is issued.
    ///
    /// Returns `false`, leaving everything as is, while a submission is
    /// pending; the caller must not request a new URL in that case.
    pub fn open_upload_dialog(&mut self) -> bool {
        if self.in_flight {
            debug!("upload dialog ignored while a submission is pending");
            return false;
        }
        self.modal_open = true;
        self.form_revealed = false;
        true
    }

    /// Hides the modal without touching the session.
    pub fn close_upload_dialog(&mut self) {
        self.modal_open = false;
    }

    /// Records the outcome of `request_upload_url`.
    ///
    /// On success the URL is stored and the form revealed. On failure the form
    /// stays hidden, the status shows the error, and the error is returned to
    /// the trigger. A pending submission keeps its loading status either way.
    pub fn session_issued(&mut self, outcome: WorkflowResult<String>) -> WorkflowResult<()> {
        match outcome {
            Ok(url) => {
                self.session.set(url);
                self.form_revealed = true;
                if matches!(self.status, Status::Failed(_)) {
                    self.status = Status::Idle;
                }
                debug!("upload form revealed");
                Ok(())
            }
            Err(err) => {
                warn!("upload session could not be initialized: {}", err);
                self.form_revealed = false;
                if !self.in_flight {
                    self.status = Status::Failed(err.user_message());
                }
                Err(err)
            }
        }
    }

    /// Validates and starts a submission, returning the target URL together
    /// with the form to post there.
    ///
    /// Fails fast, without touching rendered output, when a submission is
    /// already pending, no URL was issued, or no form was filled in (`None`,
    /// typically no photo chosen). Otherwise, in order: clears both result
    /// containers, hides the form and modal, and sets the loading status.
    pub fn begin_submission<T>(&mut self, form: Option<T>) -> WorkflowResult<(String, T)> {
        if self.in_flight {
            return Err(WorkflowError::SubmissionInFlight);
        }
        if !self.session.is_initialized() {
            let err = WorkflowError::SessionNotInitialized;
            self.status = Status::Failed(err.user_message());
            return Err(err);
        }
        let Some(form) = form else {
            let err = WorkflowError::MissingPhoto;
            self.status = Status::Failed(err.user_message());
            return Err(err);
        };

        let url = self.session.take()?;
        self.results.clear();
        self.form_revealed = false;
        self.modal_open = false;
        self.status = Status::Loading(self.config.loading_message.clone());
        self.in_flight = true;
        Ok((url, form))
    }

    /// Records the outcome of `submit`. On success, renders the reply once and
    /// returns the number of product cards appended.
    pub fn finish_submission(
        &mut self,
        outcome: WorkflowResult<ShoppingResponse>,
    ) -> WorkflowResult<usize> {
        self.in_flight = false;
        match outcome {
            Ok(response) => {
                self.status = Status::Idle;
                let before = self.results.card_count();
                self.results.append(&response, self.config.open_links_in_new_tab);
                let appended = self.results.card_count() - before;
                info!("rendered {} product cards", appended);
                Ok(appended)
            }
            Err(err) => {
                warn!("submission failed: {}", err);
                self.status = Status::Failed(err.user_message());
                Err(err)
            }
        }
    }

    /// Opens the dialog and initializes the session in one go.
    pub async fn initialize_with<B: Backend>(&mut self, backend: &B) -> WorkflowResult<()> {
        if !self.open_upload_dialog() {
            return Err(WorkflowError::SubmissionInFlight);
        }
        let endpoint = self.config.upload_url_endpoint.clone();
        let outcome = request_upload_url(backend, &endpoint).await;
        self.session_issued(outcome)
    }

    /// Runs a full submission against `backend`.
    pub async fn submit_with<B: Backend>(
        &mut self,
        backend: &B,
        form: &UploadForm<B::File>,
    ) -> WorkflowResult<usize> {
        let (url, form) = self.begin_submission(Some(form))?;
        let outcome = submit(backend, &url, form).await;
        self.finish_submission(outcome)
    }
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new(WorkflowConfig::default())
    }
}
