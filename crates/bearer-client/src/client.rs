//! Bearer Client
//!
//! Flow for a protected request:
//! 1. send with the current access token
//! 2. on `401`, obtain a fresh token through the [`RefreshGate`]
//! 3. replay exactly once with that token

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::gate::{RefreshGate, Ticket};
use crate::request::{ApiRequest, ApiResponse};
use crate::session::{TokenPair, TokenStore};
use crate::transport::Transport;
use crate::ClientError;

const REFRESH_PATH: &str = "/auth/refresh";

pub struct BearerClient<T: Transport> {
    transport: T,
    tokens: Arc<dyn TokenStore>,
    gate: RefreshGate,
}

impl<T: Transport> BearerClient<T> {
    pub fn new(transport: T, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            transport,
            tokens,
            gate: RefreshGate::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends the request and returns the successful response.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        if request.public {
            let response = self.transport.execute(&request, None).await?;
            return check(response);
        }

        let token = self.tokens.access_token();
        let response = self.transport.execute(&request, token.as_deref()).await?;
        if response.status != 401 {
            return check(response);
        }

        log::debug!("[API] 401 on {} {}, renewing token", request.method, request.path);
        let fresh = self.renew(token).await?;
        let replay = self.transport.execute(&request, Some(&fresh)).await?;
        check(replay)
    }

    /// Sends the request and decodes a JSON body.
    pub async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ClientError> {
        let response = self.send(request).await?;
        serde_json::from_slice(&response.body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Sends the request, discarding the body.
    pub async fn execute(&self, request: ApiRequest) -> Result<(), ClientError> {
        self.send(request).await.map(|_| ())
    }

    /// Returns a token newer than `stale`, refreshing only when needed.
    async fn renew(&self, stale: Option<String>) -> Result<String, ClientError> {
        // Another request already rotated the token while ours was in flight
        if let Some(current) = self.tokens.access_token() {
            if stale.as_deref() != Some(current.as_str()) && !self.gate.is_refreshing() {
                return Ok(current);
            }
        }

        match self.gate.enter() {
            Ticket::Waiter(rx) => rx.await.unwrap_or(Err(ClientError::SessionExpired)),
            Ticket::Refresher => {
                let outcome = self.refresh().await;
                if outcome.is_err() {
                    self.tokens.expire();
                }
                self.gate.finish(&outcome);
                outcome
            }
        }
    }

    async fn refresh(&self) -> Result<String, ClientError> {
        let Some(refresh_token) = self.tokens.refresh_token() else {
            log::warn!("[API] no refresh token, session expired");
            return Err(ClientError::SessionExpired);
        };

        let request = ApiRequest::post(REFRESH_PATH)
            .public()
            .json(&json!({ "refresh_token": refresh_token }))?;

        let response = match self.transport.execute(&request, None).await {
            Ok(response) if response.is_success() => response,
            Ok(response) => {
                log::warn!("[API] refresh rejected with status {}", response.status);
                return Err(ClientError::SessionExpired);
            }
            Err(e) => {
                log::warn!("[API] refresh failed: {e}");
                return Err(ClientError::SessionExpired);
            }
        };

        let pair: TokenPair = serde_json::from_slice(&response.body).map_err(|e| {
            log::warn!("[API] malformed refresh response: {e}");
            ClientError::SessionExpired
        })?;
        let access = pair.access_token.clone();
        self.tokens.store_tokens(pair);
        log::info!("[API] access token refreshed");
        Ok(access)
    }
}

fn check(response: ApiResponse) -> Result<ApiResponse, ClientError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Api {
            status: response.status,
            message: extract_message(&response.body),
        })
    }
}

/// Pulls `message` (or `error`) out of a JSON error body.
fn extract_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error", "msg"]
                .iter()
                .find_map(|key| value.get(key).and_then(Value::as_str).map(str::to_string))
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryTokens {
        access: Mutex<Option<String>>,
        refresh: Mutex<Option<String>>,
        expired: Mutex<bool>,
    }

    impl MemoryTokens {
        fn with(access: &str, refresh: Option<&str>) -> Arc<Self> {
            Arc::new(Self {
                access: Mutex::new(Some(access.to_string())),
                refresh: Mutex::new(refresh.map(str::to_string)),
                expired: Mutex::new(false),
            })
        }

        fn is_expired(&self) -> bool {
            *self.expired.lock().unwrap()
        }
    }

    impl TokenStore for MemoryTokens {
        fn access_token(&self) -> Option<String> {
            self.access.lock().unwrap().clone()
        }

        fn refresh_token(&self) -> Option<String> {
            self.refresh.lock().unwrap().clone()
        }

        fn store_tokens(&self, tokens: TokenPair) {
            *self.access.lock().unwrap() = Some(tokens.access_token);
            *self.refresh.lock().unwrap() = Some(tokens.refresh_token);
        }

        fn expire(&self) {
            *self.access.lock().unwrap() = None;
            *self.refresh.lock().unwrap() = None;
            *self.expired.lock().unwrap() = true;
        }
    }

    /// Accepts only `valid_token`; answers refresh calls from a script.
    struct ScriptedTransport {
        valid_token: RefCell<String>,
        refresh_replies: RefCell<VecDeque<ApiResponse>>,
        refresh_calls: RefCell<usize>,
        seen: RefCell<Vec<(String, Option<String>)>>,
    }

    impl ScriptedTransport {
        fn new(valid_token: &str) -> Self {
            Self {
                valid_token: RefCell::new(valid_token.to_string()),
                refresh_replies: RefCell::new(VecDeque::new()),
                refresh_calls: RefCell::new(0),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn reply_to_refresh(self, response: ApiResponse) -> Self {
            self.refresh_replies.borrow_mut().push_back(response);
            self
        }
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn execute(
            &self,
            request: &ApiRequest,
            bearer: Option<&str>,
        ) -> Result<ApiResponse, ClientError> {
            self.seen
                .borrow_mut()
                .push((request.path.clone(), bearer.map(str::to_string)));

            if request.path == REFRESH_PATH {
                *self.refresh_calls.borrow_mut() += 1;
                // Yield so concurrent requests observe the refresh in flight
                tokio::task::yield_now().await;
                return Ok(self
                    .refresh_replies
                    .borrow_mut()
                    .pop_front()
                    .unwrap_or_else(|| ApiResponse::new(401, "{}")));
            }
            if request.public {
                return Ok(ApiResponse::new(401, r#"{"message":"Invalid credentials"}"#));
            }
            if bearer == Some(self.valid_token.borrow().as_str()) {
                Ok(ApiResponse::new(200, r#"{"ok":true}"#))
            } else {
                Ok(ApiResponse::new(401, r#"{"message":"Token has expired"}"#))
            }
        }
    }

    fn tokens_body(access: &str, refresh: &str) -> ApiResponse {
        ApiResponse::new(
            200,
            format!(r#"{{"access_token":"{access}","refresh_token":"{refresh}"}}"#),
        )
    }

    #[tokio::test]
    async fn test_concurrent_401s_share_one_refresh() {
        let tokens = MemoryTokens::with("old", Some("r1"));
        let transport = ScriptedTransport::new("new").reply_to_refresh(tokens_body("new", "r2"));
        let client = BearerClient::new(transport, tokens.clone());

        let (a, b) = futures::join!(
            client.send(ApiRequest::get("/orders/")),
            client.send(ApiRequest::get("/users/me")),
        );

        assert!(a.is_ok());
        assert!(b.is_ok());
        assert_eq!(*client.transport().refresh_calls.borrow(), 1);
        assert_eq!(tokens.access_token().as_deref(), Some("new"));
        assert_eq!(tokens.refresh_token().as_deref(), Some("r2"));
    }

    #[tokio::test]
    async fn test_refresh_failure_expires_session() {
        let tokens = MemoryTokens::with("old", Some("r1"));
        let transport = ScriptedTransport::new("new").reply_to_refresh(ApiResponse::new(401, "{}"));
        let client = BearerClient::new(transport, tokens.clone());

        let (a, b) = futures::join!(
            client.send(ApiRequest::get("/orders/")),
            client.send(ApiRequest::get("/addresses")),
        );

        assert_eq!(a.unwrap_err(), ClientError::SessionExpired);
        assert_eq!(b.unwrap_err(), ClientError::SessionExpired);
        assert!(tokens.is_expired());
        assert_eq!(*client.transport().refresh_calls.borrow(), 1);
    }

    #[tokio::test]
    async fn test_missing_refresh_token_expires_session() {
        let tokens = MemoryTokens::with("old", None);
        let client = BearerClient::new(ScriptedTransport::new("new"), tokens.clone());

        let err = client.send(ApiRequest::get("/orders/")).await.unwrap_err();

        assert_eq!(err, ClientError::SessionExpired);
        assert!(tokens.is_expired());
        assert_eq!(*client.transport().refresh_calls.borrow(), 0);
    }

    #[tokio::test]
    async fn test_public_401_is_not_refreshed() {
        let tokens = MemoryTokens::with("old", Some("r1"));
        let client = BearerClient::new(ScriptedTransport::new("old"), tokens.clone());

        let err = client
            .send(ApiRequest::post("/auth/login").public())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ClientError::Api { status: 401, message: "Invalid credentials".into() }
        );
        assert_eq!(*client.transport().refresh_calls.borrow(), 0);
        assert!(!tokens.is_expired());
        let seen = client.transport().seen.borrow();
        assert_eq!(seen[0].1, None);
    }

    #[tokio::test]
    async fn test_rotated_token_replays_without_refresh() {
        let tokens = MemoryTokens::with("old", Some("r1"));
        let client = BearerClient::new(ScriptedTransport::new("new"), tokens.clone());

        // Token rotated by someone else after our request went out
        let fresh = {
            tokens.store_tokens(TokenPair {
                access_token: "new".into(),
                refresh_token: "r2".into(),
            });
            client.renew(Some("old".into())).await.unwrap()
        };

        assert_eq!(fresh, "new");
        assert_eq!(*client.transport().refresh_calls.borrow(), 0);
    }

    #[tokio::test]
    async fn test_replay_is_attempted_once() {
        let tokens = MemoryTokens::with("old", Some("r1"));
        // Refresh hands out a token the server still rejects
        let transport = ScriptedTransport::new("never").reply_to_refresh(tokens_body("new", "r2"));
        let client = BearerClient::new(transport, tokens.clone());

        let err = client.send(ApiRequest::get("/orders/")).await.unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(*client.transport().refresh_calls.borrow(), 1);
        let seen = client.transport().seen.borrow();
        let order_calls = seen.iter().filter(|(path, _)| path == "/orders/").count();
        assert_eq!(order_calls, 2);
    }

    #[tokio::test]
    async fn test_fetch_decodes_body() {
        #[derive(serde::Deserialize)]
        struct Me {
            ok: bool,
        }

        let tokens = MemoryTokens::with("t", Some("r"));
        let client = BearerClient::new(ScriptedTransport::new("t"), tokens);

        let body: Me = client.fetch(ApiRequest::get("/users/me")).await.unwrap();
        assert!(body.ok);
    }

    #[test]
    fn test_extract_message() {
        assert_eq!(extract_message(br#"{"message":"Not found"}"#), "Not found");
        assert_eq!(extract_message(br#"{"error":"Bad input"}"#), "Bad input");
        assert_eq!(extract_message(b"<html>oops</html>"), "");
        assert_eq!(extract_message(b""), "");
    }
}
