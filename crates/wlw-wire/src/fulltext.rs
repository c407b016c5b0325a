// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Full-text reindex client (C9): `PUT {fulltextUrl}/api/v1/reindex`.

use serde::Serialize;
use url::Url;

use crate::error::WireError;

#[derive(Serialize)]
struct ReindexRequest<'a> {
    token: &'a str,
    #[serde(rename = "onlyDrop")]
    only_drop: bool,
}

/// `reqwest`-backed client for the full-text reindex endpoint.
pub struct FulltextClient {
    http: reqwest::Client,
}

impl FulltextClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Request a reindex (or, with `only_drop = true`, just a drop of the
    /// existing index) for the workspace implied by `token`.
    ///
    /// Non-2xx is surfaced to the caller as a [`WireError`]; the caller logs
    /// and swallows it rather than failing the lifecycle event the reindex
    /// was triggered from.
    pub async fn reindex(&self, fulltext_url: &Url, token: &str, only_drop: bool) -> Result<(), WireError> {
        let url = format!("{}/api/v1/reindex", fulltext_url.as_str().trim_end_matches('/'));
        let response = self.http.put(url).json(&ReindexRequest { token, only_drop }).send().await?;
        if !response.status().is_success() {
            return Err(WireError::Status {
                status: response.status().as_u16(),
                endpoint: "fulltext/reindex".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn reindex_puts_token_and_only_drop() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/reindex"))
            .and(body_json(json!({ "token": "tok", "onlyDrop": true })))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = FulltextClient::new(reqwest::Client::new());
        let url = Url::parse(&server.uri()).unwrap();
        client.reindex(&url, "tok", true).await.unwrap();
    }

    #[tokio::test]
    async fn non_success_status_surfaces_as_wire_error() {
        let server = MockServer::start().await;
        Mock::given(method("PUT")).respond_with(ResponseTemplate::new(500)).mount(&server).await;

        let client = FulltextClient::new(reqwest::Client::new());
        let url = Url::parse(&server.uri()).unwrap();
        let err = client.reindex(&url, "tok", false).await.unwrap_err();
        assert!(matches!(err, WireError::Status { status: 500, .. }));
    }
}
