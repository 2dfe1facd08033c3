//! REST Client
//!
//! Thin wrappers over `window.fetch` for the TODO endpoints.

mod error;
mod todo;

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

pub use error::ApiError;
pub use todo::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Issue a request and decode a JSON response.
///
/// `body` is sent as `application/json` when present.
async fn request_json<T: DeserializeOwned>(method: Method, url: &str, body: Option<String>) -> Result<T, ApiError> {
    log::debug!("{} {}", method.as_str(), url);
    let text = send(method, url, body).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: serde::Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

async fn send(method: Method, url: &str, body: Option<String>) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method(method.as_str());
    if let Some(body) = body {
        let headers = Headers::new().map_err(ApiError::network)?;
        headers.set("Content-Type", "application/json").map_err(ApiError::network)?;
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::network)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::network)?
        .dyn_into()
        .map_err(ApiError::network)?;

    let text = JsFuture::from(response.text().map_err(ApiError::network)?)
        .await
        .map_err(ApiError::network)?
        .as_string()
        .unwrap_or_default();

    if !response.ok() {
        return Err(ApiError::from_status(response.status(), &response.status_text(), &text));
    }
    Ok(text)
}
