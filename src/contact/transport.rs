use gloo_net::http::Request;
use thiserror::Error;
use web_sys::{FormData, RequestMode};

use super::inquiry::FormPayload;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("could not build form body: {0}")]
    Body(String),
    #[error("network error: {0}")]
    Network(String),
}

fn form_data(payload: &FormPayload) -> Result<FormData, SubmitError> {
    let form = FormData::new().map_err(|e| SubmitError::Body(format!("{:?}", e)))?;
    for (key, value) in &payload.0 {
        form.append_with_str(key, value)
            .map_err(|e| SubmitError::Body(format!("{:?}", e)))?;
    }
    Ok(form)
}

/// Posts the payload cross-origin in `no-cors` mode. The response is opaque,
/// so a request that does not throw is the only success signal available.
pub async fn post_opaque(action_url: &str, payload: &FormPayload) -> Result<(), SubmitError> {
    let body = form_data(payload)?;
    Request::post(action_url)
        .mode(RequestMode::NoCors)
        .body(body)
        .send()
        .await
        .map(|_| ())
        .map_err(|e| SubmitError::Network(e.to_string()))
}
