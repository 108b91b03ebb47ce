//! Upload history: on first render, loads previously uploaded photos and lists
//! them with their upload time in the browser's local timezone.

use log::error;
use snapshop_common::config::WorkflowConfig;
use snapshop_common::error::WorkflowResult;
use snapshop_common::model::history::HistoryImageRecord;
use snapshop_common::workflow::history::THUMBNAIL_SIZE;
use snapshop_common::workflow::{fetch_history, render_history, HistoryEntry, HistoryView};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::http::GlooBackend;

pub enum Msg {
    Loaded(WorkflowResult<Vec<HistoryImageRecord>>),
}

#[derive(Properties, PartialEq)]
pub struct HistoryProps {
    #[prop_or_default]
    pub config: WorkflowConfig,
}

pub struct HistoryComponent {
    view: Option<HistoryView>,
    failure: Option<String>,
    loaded: bool,
}

impl Component for HistoryComponent {
    type Message = Msg;
    type Properties = HistoryProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            view: None,
            failure: None,
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(records)) => {
                self.view = Some(render_history(&records, &ctx.props().config, &chrono::Local));
                self.failure = None;
            }
            Msg::Loaded(Err(err)) => {
                error!("history could not be loaded: {}", err);
                self.failure = Some(err.user_message());
            }
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let body = match (&self.view, &self.failure) {
            (_, Some(failure)) => html! { <p class="status error" role="alert">{ failure.clone() }</p> },
            (None, None) => html! {},
            (Some(HistoryView::Empty(text)), None) => html! {
                <div id="history-images" class="history-empty">{ text.clone() }</div>
            },
            (Some(HistoryView::Entries(entries)), None) => html! {
                <ul id="history-images">
                    { for entries.iter().map(history_item) }
                </ul>
            },
        };

        html! {
            <section class="history">
                <h2>{ "History" }</h2>
                { body }
            </section>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let endpoint = ctx.props().config.history_endpoint.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = fetch_history(&GlooBackend, &endpoint).await;
                link.send_message(Msg::Loaded(outcome));
            });
        }
    }
}

fn history_item(entry: &HistoryEntry) -> Html {
    let size = THUMBNAIL_SIZE.to_string();

    html! {
        <li class="image-element">
            <p class="date">{ format!("🕘{}", entry.captured_at) }</p>
            <a href={entry.image_url.clone()}>
                <img
                    class="image"
                    src={entry.image_url.clone()}
                    width={size.clone()}
                    height={size}
                    alt={entry.image_url.clone()}
                />
            </a>
        </li>
    }
}
