use crate::components::history::HistoryComponent;
use crate::components::upload::UploadWorkflowComponent;
use snapshop_common::config::WorkflowConfig;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: WorkflowConfig,
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = ctx.props().config.clone();
        html! {
            <div class="snapshop">
                <UploadWorkflowComponent config={config.clone()} />
                <HistoryComponent config={config} />
            </div>
        }
    }
}
