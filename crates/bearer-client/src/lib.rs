//! Bearer Client
//!
//! REST client that attaches a bearer token to every non-public request and
//! renews an expired access token at most once per request.
//!
//! Only one refresh cycle is ever in flight. Requests that hit `401` while a
//! refresh is running park on the [`RefreshGate`] and are replayed with the
//! new token, or rejected with [`ClientError::SessionExpired`] when the
//! refresh fails.

mod client;
mod error;
mod gate;
mod request;
mod session;
mod transport;

pub use client::BearerClient;
pub use error::ClientError;
pub use gate::RefreshGate;
pub use request::{ApiRequest, ApiResponse, Body, Multipart, Part, PartValue};
pub use session::{TokenPair, TokenStore};
pub use transport::{ReqwestTransport, Transport};

pub use reqwest::Method;
