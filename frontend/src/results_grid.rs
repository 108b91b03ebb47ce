use yew::{html, Children, Component, Context, Html, Properties};

/// Fixed-size grid holding product cards.
#[derive(Properties, PartialEq)]
pub struct ResultsGridProps {
    pub columns: usize,
    #[prop_or_default]
    pub class: Option<&'static str>,
    pub children: Children,
}

pub struct ResultsGrid;

impl Component for ResultsGrid {
    type Message = ();
    type Properties = ResultsGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ResultsGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, 220px);
             grid-auto-rows: 360px;
             gap: 16px;
             margin: 16px auto;",
            props.columns.max(1)
        );

        html! {
            <div class={props.class.unwrap_or("results-grid")} style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
