//! Upload workflow: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! The component is a thin shell around `snapshop_common::workflow::Workflow`:
//! user triggers become `Msg::Command`, network outcomes come back as messages,
//! and the view renders whatever the workflow state holds.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::UploadProps;
pub use state::UploadWorkflowComponent;

impl Component for UploadWorkflowComponent {
    type Message = Msg;
    type Properties = UploadProps;

    fn create(ctx: &Context<Self>) -> Self {
        UploadWorkflowComponent::new(ctx.props().config.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
