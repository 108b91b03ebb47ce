//! gloo-net implementation of the workflow's HTTP port.

use gloo_net::http::{Request, Response};
use snapshop_common::backend::Backend;
use snapshop_common::model::form::{UploadForm, CATEGORY_FIELD, PHOTO_FIELD};
use snapshop_common::model::reply::{ServerReply, TransportError};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

#[derive(Clone, Copy, Default)]
pub struct GlooBackend;

impl Backend for GlooBackend {
    type File = File;

    async fn get_text(&self, endpoint: &str) -> Result<ServerReply, TransportError> {
        let response = Request::get(endpoint)
            .send()
            .await
            .map_err(transport_error)?;
        read_reply(response).await
    }

    async fn get_json(&self, endpoint: &str) -> Result<ServerReply, TransportError> {
        let response = Request::get(endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(transport_error)?;
        read_reply(response).await
    }

    async fn post_form(
        &self,
        url: &str,
        form: &UploadForm<File>,
    ) -> Result<ServerReply, TransportError> {
        // The browser sets the multipart boundary itself; no Content-Type header.
        let data = FormData::new().map_err(js_error)?;
        data.append_with_str(CATEGORY_FIELD, &form.category)
            .map_err(js_error)?;
        data.append_with_blob_and_filename(PHOTO_FIELD, &form.photo, &form.photo.name())
            .map_err(js_error)?;

        let response = Request::post(url)
            .body(data)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        read_reply(response).await
    }
}

async fn read_reply(response: Response) -> Result<ServerReply, TransportError> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    Ok(ServerReply::new(status, body))
}

fn transport_error(err: gloo_net::Error) -> TransportError {
    TransportError::new(err.to_string())
}

fn js_error(value: JsValue) -> TransportError {
    TransportError::new(format!("{:?}", value))
}
