//! HTTP plumbing shared by every API module: request description, transport
//! seam, the client that adds auth, logging and toasts, and its error type.

pub mod client;
pub mod error;
pub mod request;
pub mod transport;

#[cfg(test)]
pub mod testing;

pub use client::ApiClient;
pub use error::ApiError;
pub use request::{ApiRequest, FormValue, Method, MultipartForm, RequestBody};
pub use transport::{FetchTransport, HttpRequest, HttpResponse, HttpTransport, TransportError};

use leptos::prelude::use_context;

/// The app-wide client provided by `App`.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not provided")
}
