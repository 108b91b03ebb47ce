#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use snapshop_common::backend::Backend;
use snapshop_common::model::form::UploadForm;
use snapshop_common::model::reply::{ServerReply, TransportError};

/// A request seen by the fake backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    GetText(String),
    GetJson(String),
    PostForm { url: String, category: String, photo: String },
}

/// Backend double returning queued replies and recording every request.
///
/// The photo file is represented by its name.
#[derive(Default)]
pub struct FakeBackend {
    replies: RefCell<VecDeque<Result<ServerReply, TransportError>>>,
    requests: RefCell<Vec<Recorded>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_reply(&self, status: u16, body: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(ServerReply::new(status, body)));
        self
    }

    pub fn push_transport_error(&self, reason: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Err(TransportError::new(reason)));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.borrow().clone()
    }

    fn next_reply(&self, request: Recorded) -> Result<ServerReply, TransportError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .expect("fake backend ran out of queued replies")
    }
}

impl Backend for FakeBackend {
    type File = String;

    async fn get_text(&self, endpoint: &str) -> Result<ServerReply, TransportError> {
        self.next_reply(Recorded::GetText(endpoint.to_string()))
    }

    async fn get_json(&self, endpoint: &str) -> Result<ServerReply, TransportError> {
        self.next_reply(Recorded::GetJson(endpoint.to_string()))
    }

    async fn post_form(
        &self,
        url: &str,
        form: &UploadForm<String>,
    ) -> Result<ServerReply, TransportError> {
        self.next_reply(Recorded::PostForm {
            url: url.to_string(),
            category: form.category.clone(),
            photo: form.photo.clone(),
        })
    }
}

pub fn product_json(title: &str) -> String {
    format!(
        r#"{{"title":"{t}","imageLink":"https://img/{t}.jpg","priceAndSeller":"$5 from Store","link":"https://store/{t}","shippingPrice":"Free delivery"}}"#,
        t = title
    )
}

pub fn flat_body(titles: &[&str]) -> String {
    let items: Vec<String> = titles.iter().map(|t| product_json(t)).collect();
    format!("[{}]", items.join(","))
}

pub fn grouped_body(groups: &[(&str, Vec<&str>)]) -> String {
    let items: Vec<String> = groups
        .iter()
        .map(|(query, titles)| {
            let products: Vec<String> = titles.iter().map(|t| product_json(t)).collect();
            format!(r#"{{"query":"{}","products":[{}]}}"#, query, products.join(","))
        })
        .collect();
    format!("[{}]", items.join(","))
}
