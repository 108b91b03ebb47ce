//! Result renderer: turns upload replies into view nodes.
//!
//! The renderer only ever appends to a `ResultsView`. Clearing stale output is
//! the submission handler's job (`Workflow::begin_submission`).

use crate::model::product::{ProductRecord, ShoppingResponse, ShoppingResult};

/// Fixed card template for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub image_src: String,
    pub title: String,
    pub price_and_seller: String,
    /// Target of the "View" action.
    pub view_href: String,
    pub shipping_caption: String,
    pub open_in_new_tab: bool,
}

impl ProductCard {
    pub fn from_record(record: &ProductRecord, open_in_new_tab: bool) -> Self {
        Self {
            image_src: record.image_link.clone(),
            title: record.title.clone(),
            price_and_seller: record.price_and_seller.clone(),
            view_href: record.link.clone(),
            shipping_caption: record.shipping_price.clone(),
            open_in_new_tab,
        }
    }
}

/// One node appended to the results wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultBlock {
    /// Grid cell of a flat reply.
    Card(ProductCard),
    /// Row-group holding the products of one query.
    Row(Vec<ProductCard>),
}

/// The two result containers of the page: query display and results wrapper.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub query_labels: Vec<String>,
    pub blocks: Vec<ResultBlock>,
}

impl ResultsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.query_labels.clear();
        self.blocks.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.query_labels.is_empty() && self.blocks.is_empty()
    }

    /// Number of product cards across all blocks.
    pub fn card_count(&self) -> usize {
        self.blocks
            .iter()
            .map(|block| match block {
                ResultBlock::Card(_) => 1,
                ResultBlock::Row(cards) => cards.len(),
            })
            .sum()
    }

    /// Appends a reply, dispatching on its shape.
    pub fn append(&mut self, response: &ShoppingResponse, open_in_new_tab: bool) {
        match response {
            ShoppingResponse::Flat(records) => self.append_flat(records, open_in_new_tab),
            ShoppingResponse::Grouped(groups) => self.append_grouped(groups, open_in_new_tab),
        }
    }

    /// One grid card per record, input order, no deduplication.
    pub fn append_flat(&mut self, records: &[ProductRecord], open_in_new_tab: bool) {
        self.blocks.extend(
            records
                .iter()
                .map(|record| ResultBlock::Card(ProductCard::from_record(record, open_in_new_tab))),
        );
    }

    /// Per group: a query label, then a row of its cards.
    pub fn append_grouped(&mut self, groups: &[ShoppingResult], open_in_new_tab: bool) {
        for group in groups {
            self.query_labels.push(group.query.clone());
            let cards = group
                .products
                .iter()
                .map(|record| ProductCard::from_record(record, open_in_new_tab))
                .collect();
            self.blocks.push(ResultBlock::Row(cards));
        }
    }
}
