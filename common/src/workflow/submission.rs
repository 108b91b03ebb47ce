use log::{debug, info, warn};

use crate::backend::Backend;
use crate::error::{WorkflowError, WorkflowResult};
use crate::model::form::UploadForm;
use crate::model::product::ShoppingResponse;
use crate::model::reply::ServerReply;

/// Posts the form to the issued upload URL and decodes the reply.
///
/// Transport failures never escape as such: they are turned into a synthetic
/// failed reply first, so `interpret_reply` is the single place that decides
/// what a reply means. No retry and no timeout.
pub async fn submit<B: Backend>(
    backend: &B,
    url: &str,
    form: &UploadForm<B::File>,
) -> WorkflowResult<ShoppingResponse> {
    debug!("posting photo (category {:?}) to {}", form.category, url);
    let reply = match backend.post_form(url, form).await {
        Ok(reply) => reply,
        Err(err) => {
            warn!("upload transport failure: {}", err);
            ServerReply::from_transport_error(&err)
        }
    };
    interpret_reply(reply)
}

/// Maps an upload reply to its decoded body or the matching error.
pub fn interpret_reply(reply: ServerReply) -> WorkflowResult<ShoppingResponse> {
    if !reply.is_success() {
        if let Some(reason) = reply.transport_reason() {
            return Err(WorkflowError::TransportFailed { reason });
        }
        warn!("upload answered with status {}", reply.status);
        return Err(WorkflowError::ResponseFailed {
            status: reply.status,
            body: reply.body,
        });
    }

    let response: ShoppingResponse = serde_json::from_str(&reply.body)
        .map_err(|err| WorkflowError::MalformedResponse(err.to_string()))?;
    info!("upload returned {} products", response.product_count());
    Ok(response)
}
