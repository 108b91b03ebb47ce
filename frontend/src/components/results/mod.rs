//! Markup for rendered shopping results.
//!
//! Pure functions over `ResultsView`; the upload component owns the view and
//! decides when it is cleared.

use snapshop_common::workflow::{ProductCard, ResultBlock, ResultsView};
use yew::prelude::*;

use crate::results_grid::ResultsGrid;

/// Cards per row in the flat grid.
const FLAT_COLUMNS: usize = 4;

/// Query display area followed by the results wrapper.
pub fn results_view(results: &ResultsView) -> Html {
    html! {
        <>
            { query_display(&results.query_labels) }
            { results_wrapper(&results.blocks) }
        </>
    }
}

fn query_display(labels: &[String]) -> Html {
    html! {
        <div id="query-display" class="query-display">
            { for labels.iter().map(|label| html! { <h3 class="query-label">{ label.clone() }</h3> }) }
        </div>
    }
}

fn results_wrapper(blocks: &[ResultBlock]) -> Html {
    // A submission renders either flat cards or row-groups, never both.
    let flat: Vec<&ProductCard> = blocks
        .iter()
        .filter_map(|block| match block {
            ResultBlock::Card(card) => Some(card),
            ResultBlock::Row(_) => None,
        })
        .collect();
    let rows = blocks.iter().filter_map(|block| match block {
        ResultBlock::Row(cards) => Some(cards),
        ResultBlock::Card(_) => None,
    });

    html! {
        <div id="results-wrapper" class="results-wrapper">
            {
                if flat.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ResultsGrid columns={FLAT_COLUMNS}>
                            { for flat.into_iter().map(product_card) }
                        </ResultsGrid>
                    }
                }
            }
            { for rows.map(|cards| html! {
                <ResultsGrid columns={cards.len()} class={Some("row-group")}>
                    { for cards.iter().map(product_card) }
                </ResultsGrid>
            }) }
        </div>
    }
}

fn product_card(card: &ProductCard) -> Html {
    let target = if card.open_in_new_tab { "_blank" } else { "_self" };

    html! {
        <div class="product-card">
            <img class="product-image" src={card.image_src.clone()} alt={card.title.clone()} width="150" height="150" />
            <p class="product-title">{ card.title.clone() }</p>
            <p class="product-price">{ card.price_and_seller.clone() }</p>
            <a class="view-btn" href={card.view_href.clone()} target={target} rel="noopener noreferrer">
                { "View" }
            </a>
            <p class="shipping-caption">{ card.shipping_caption.clone() }</p>
        </div>
    }
}
