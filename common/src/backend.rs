//! HTTP port of the workflow.
//!
//! The workflow never talks to an HTTP client directly. The browser build plugs
//! in a gloo-net adapter; tests plug in a recording fake.

use crate::model::form::UploadForm;
use crate::model::reply::{ServerReply, TransportError};

/// The three server interactions the workflow needs.
///
/// Futures are not required to be `Send`: everything runs on the single
/// browser event loop.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// File handle type carried by the upload form.
    type File;

    /// `GET {endpoint}`, body expected as plain text.
    async fn get_text(&self, endpoint: &str) -> Result<ServerReply, TransportError>;

    /// `GET {endpoint}` with JSON `Accept`/`Content-Type` headers.
    async fn get_json(&self, endpoint: &str) -> Result<ServerReply, TransportError>;

    /// `POST {url}` with a multipart body holding exactly the category and
    /// photo fields.
    async fn post_form(
        &self,
        url: &str,
        form: &UploadForm<Self::File>,
    ) -> Result<ServerReply, TransportError>;
}
