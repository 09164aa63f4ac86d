//! Transport seam and the reqwest-backed implementation.
//!
//! On `wasm32` reqwest drives the browser's `fetch`, so futures here are not
//! `Send`.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use url::Url;

use crate::request::{ApiRequest, ApiResponse, Body, Multipart, PartValue};
use crate::ClientError;

#[async_trait(?Send)]
pub trait Transport {
    /// Performs one HTTP exchange. Non-success statuses are *not* errors here.
    async fn execute(
        &self,
        request: &ApiRequest,
        bearer: Option<&str>,
    ) -> Result<ApiResponse, ClientError>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestTransport {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `path` to the base URL, keeping the base's own path prefix.
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        join_path(&self.base_url, path)
    }
}

fn join_path(base: &Url, path: &str) -> Result<Url, ClientError> {
    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| ClientError::InvalidUrl(format!("{joined}: {e}")))
}

fn to_form(form: &Multipart) -> Result<reqwest::multipart::Form, ClientError> {
    let mut out = reqwest::multipart::Form::new();
    for part in form.parts() {
        out = match &part.value {
            PartValue::Text(text) => out.text(part.name.clone(), text.clone()),
            PartValue::File { file_name, mime, bytes } => {
                let mut file = reqwest::multipart::Part::bytes(bytes.clone()).file_name(file_name.clone());
                if let Some(mime) = mime {
                    file = file
                        .mime_str(mime)
                        .map_err(|e| ClientError::Encode(e.to_string()))?;
                }
                out.part(part.name.clone(), file)
            }
        };
    }
    Ok(out)
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn execute(
        &self,
        request: &ApiRequest,
        bearer: Option<&str>,
    ) -> Result<ApiResponse, ClientError> {
        let url = self.endpoint(&request.path)?;
        let mut builder = self.client.request(request.method.clone(), url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = bearer {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        builder = match &request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(value),
            Body::Multipart(form) => builder.multipart(to_form(form)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(ApiResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_keeps_api_prefix() {
        let base = Url::parse("http://localhost:5000/api/v1").unwrap();
        assert_eq!(
            join_path(&base, "/auth/login").unwrap().as_str(),
            "http://localhost:5000/api/v1/auth/login"
        );

        let base = Url::parse("https://example.org/api/v1/").unwrap();
        assert_eq!(
            join_path(&base, "/restaurants/").unwrap().as_str(),
            "https://example.org/api/v1/restaurants/"
        );
    }
}
