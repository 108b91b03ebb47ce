//! View rendering for the upload workflow component.
//!
//! Layout: the "Upload" trigger, the modal overlay holding the category/photo
//! form, the status line, then the result containers.

use snapshop_common::model::form::{CATEGORY_FIELD, PHOTO_CATEGORIES, PHOTO_FIELD};
use snapshop_common::workflow::{Command, Status};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::UploadWorkflowComponent;
use crate::components::results::results_view;
use crate::tops_sheet::upload_top_sheet::UploadTopSheet;

pub fn view(component: &UploadWorkflowComponent, ctx: &Context<UploadWorkflowComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="upload-root">
            <button
                class="upload-btn"
                disabled={component.workflow.is_submitting()}
                onclick={link.callback(|_| Msg::Command(Command::OpenUploadDialog))}
            >
                { "Upload" }
            </button>
            <UploadTopSheet
                open={component.workflow.is_modal_open()}
                on_close={link.callback(|_| Msg::Command(Command::CloseUploadDialog))}
            >
                { build_form(component, link) }
            </UploadTopSheet>
            { status_line(component.workflow.status()) }
            { results_view(component.workflow.results()) }
        </div>
    }
}

/// The upload form stays hidden until an upload URL has been issued.
fn build_form(component: &UploadWorkflowComponent, link: &Scope<UploadWorkflowComponent>) -> Html {
    let hidden = !component.workflow.is_form_revealed();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Command(Command::Submit)
    });

    html! {
        <form
            id="upload-barcode-form"
            class={classes!("upload-form", hidden.then_some("hidden"))}
            hidden={hidden}
            {onsubmit}
        >
            <label class="category-label">
                { "Category" }
                <select name={CATEGORY_FIELD} ref={component.category_ref.clone()}>
                    { for PHOTO_CATEGORIES.iter().map(|(value, label)| html! {
                        <option value={*value}>{ *label }</option>
                    }) }
                </select>
            </label>
            <input
                type="file"
                name={PHOTO_FIELD}
                accept="image/*"
                ref={component.file_input_ref.clone()}
            />
            <button type="submit" disabled={component.workflow.is_submitting()}>
                { "Submit" }
            </button>
        </form>
    }
}

fn status_line(status: &Status) -> Html {
    match status {
        Status::Idle => html! {},
        Status::Loading(message) => html! {
            <p class="status loading" role="status">{ message.clone() }</p>
        },
        Status::Failed(message) => html! {
            <p class="status error" role="alert">{ message.clone() }</p>
        },
    }
}
