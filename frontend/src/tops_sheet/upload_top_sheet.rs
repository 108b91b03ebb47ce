use yew::{classes, html, Callback, Component, Context, Html, MouseEvent, Properties};

/// Full-screen overlay hosting the upload form.
pub struct UploadTopSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    pub on_close: Callback<MouseEvent>,
}

impl Component for UploadTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let display = if props.open { "flex" } else { "none" };

        html! {
            <div
                class={classes!("bg-model", props.open.then_some("show"))}
                style={format!("position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.7);z-index:9999;display:{};align-items:center;justify-content:center;", display)}
            >
                <div class="modal-contents" style="position:relative;background:#fff;padding:32px;border-radius:4px;min-width:320px;">
                    <button
                        class="close"
                        onclick={props.on_close.clone()}
                        style="position:absolute;top:8px;right:12px;padding:0.25rem 0.5rem;font-size:1.25rem;background:#fff;border:none;cursor:pointer;"
                    >
                        { "✕" }
                    </button>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
