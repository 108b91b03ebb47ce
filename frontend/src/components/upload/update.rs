//! Update function for the upload workflow component.
//!
//! Elm-style: each `Msg` mutates the `Workflow` held by the component and
//! returns whether to re-render. Network calls run in `spawn_local` tasks that
//! report back with `Msg::SessionIssued` / `Msg::SubmissionFinished`, so the
//! workflow state is never borrowed across an await point.

use log::{debug, error};
use snapshop_common::model::form::UploadForm;
use snapshop_common::workflow::{request_upload_url, submit, Command};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{reset_file_input, selected_category, selected_photo, show_toast, ToastKind};
use super::messages::Msg;
use super::state::UploadWorkflowComponent;

pub fn update(
    component: &mut UploadWorkflowComponent,
    ctx: &Context<UploadWorkflowComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Command(Command::OpenUploadDialog) => {
            if !component.workflow.open_upload_dialog() {
                return false;
            }

            let backend = component.backend;
            let endpoint = component.workflow.config().upload_url_endpoint.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = request_upload_url(&backend, &endpoint).await;
                link.send_message(Msg::SessionIssued(outcome));
            });
            true
        }
        Msg::Command(Command::CloseUploadDialog) => {
            component.workflow.close_upload_dialog();
            true
        }
        Msg::Command(Command::Submit) => {
            let form = selected_photo(&component.file_input_ref)
                .map(|photo| UploadForm::new(selected_category(&component.category_ref), photo));

            match component.workflow.begin_submission(form) {
                Ok((url, form)) => {
                    reset_file_input(&component.file_input_ref);
                    let backend = component.backend;
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let outcome = submit(&backend, &url, &form).await;
                        link.send_message(Msg::SubmissionFinished(outcome));
                    });
                }
                Err(err) => {
                    debug!("submission rejected: {}", err);
                    show_toast(&err.user_message(), ToastKind::Error);
                }
            }
            true
        }
        Msg::SessionIssued(outcome) => {
            if let Err(err) = component.workflow.session_issued(outcome) {
                error!("upload form unavailable: {}", err);
                show_toast(&err.user_message(), ToastKind::Error);
            }
            true
        }
        Msg::SubmissionFinished(outcome) => {
            match component.workflow.finish_submission(outcome) {
                Ok(0) => show_toast("No products were found for this photo.", ToastKind::Info),
                Ok(_) => {}
                Err(err) => {
                    error!("upload failed: {}", err);
                    show_toast(&err.user_message(), ToastKind::Error);
                }
            }
            true
        }
    }
}
