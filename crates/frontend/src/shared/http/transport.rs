use gloo_net::http::{Request, RequestBuilder};
use std::collections::BTreeMap;
use std::future::Future;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use super::request::{FormValue, Method, MultipartForm, RequestBody};

/// Fully resolved request handed to a transport.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: RequestBody,
}

/// Raw answer; the body is left unparsed so the client decides how to
/// tolerate malformed JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    /// fetch() rejected: the server could not be reached.
    #[error("network error: {0}")]
    Network(String),
    #[error("{0}")]
    Other(String),
}

/// Seam between the API client and the network.
pub trait HttpTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>>;
}

/// Browser `fetch` via gloo-net.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl HttpTransport for FetchTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> {
        async move {
            let mut builder: RequestBuilder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            let prepared = match &request.body {
                RequestBody::Empty => builder.build(),
                RequestBody::Json(value) => builder.body(value.to_string()),
                RequestBody::Multipart(form) => builder.body(form_data(form)?),
            }
            .map_err(|e| TransportError::Other(e.to_string()))?;

            // Build errors are handled above; a rejected fetch is a
            // connectivity failure.
            let response = prepared
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;

            let status = response.status();
            let status_text = response.status_text();
            let body = response.text().await.unwrap_or_default();

            Ok(HttpResponse {
                status,
                status_text,
                body,
            })
        }
    }
}

fn js_error(err: JsValue) -> TransportError {
    TransportError::Other(format!("{:?}", err))
}

fn form_data(form: &MultipartForm) -> Result<FormData, TransportError> {
    let data = FormData::new().map_err(js_error)?;
    for (name, value) in form.fields() {
        match value {
            FormValue::Text(text) => data.append_with_str(name, text),
            FormValue::File { file_name, content } => {
                let bytes = js_sys::Uint8Array::from(content.as_slice());
                let parts = js_sys::Array::of1(&bytes);
                let options = BlobPropertyBag::new();
                options.set_type("application/octet-stream");
                let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
                    .map_err(js_error)?;
                data.append_with_blob_and_filename(name, &blob, file_name)
            }
        }
        .map_err(js_error)?;
    }
    Ok(data)
}
