//! REST API Wrappers
//!
//! Typed calls to the backend, organized by domain. Every call goes through
//! the shared [`ApiClient`], which handles bearer tokens and token refresh.

mod admin;
mod auth;
mod orders;
mod portal;
mod restaurants;
mod users;

use std::sync::Arc;

use bearer_client::{ApiRequest, BearerClient, ClientError, ReqwestTransport};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::config::AppConfig;
use crate::models::Page;
use crate::store::{AppStore, StoreTokens};

pub type ApiClient = BearerClient<ReqwestTransport>;

pub fn new_client(config: &AppConfig, store: AppStore) -> ApiClient {
    BearerClient::new(
        ReqwestTransport::new(config.api_base_url.clone()),
        Arc::new(StoreTokens::new(store)),
    )
}

/// `{"success": .., "message": ..}` acknowledgement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
}

/// Fetches a paginated listing whose items sit under `key`.
async fn fetch_page<T: DeserializeOwned>(
    api: &ApiClient,
    request: ApiRequest,
    key: &str,
) -> Result<Page<T>, ClientError> {
    let body: Value = api.fetch(request).await?;
    page_from_value(body, key)
}

fn page_from_value<T: DeserializeOwned>(mut body: Value, key: &str) -> Result<Page<T>, ClientError> {
    let items = match body.get_mut(key).map(Value::take) {
        Some(raw) => serde_json::from_value(raw).map_err(|e| ClientError::Decode(e.to_string()))?,
        None => Vec::new(),
    };
    let total_pages = body
        .get("total_pages")
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0);
    Ok(Page { items, total_pages })
}

// Re-export all public items
pub use admin::*;
pub use auth::*;
pub use orders::*;
pub use portal::*;
pub use restaurants::*;
pub use users::*;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_reads_keyed_items() {
        let body = json!({
            "users": [1, 2, 3],
            "total_pages": 4,
            "current_page": 1
        });
        let page: Page<u32> = page_from_value(body, "users").unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 4);
    }

    #[test]
    fn test_page_missing_key_is_empty() {
        let page: Page<u32> = page_from_value(json!({"total_pages": 0}), "applications").unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_page_bad_items_is_decode_error() {
        let err = page_from_value::<u32>(json!({"users": "nope"}), "users").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
