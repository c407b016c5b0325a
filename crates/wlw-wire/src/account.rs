// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Control-plane (account service) client: handshake, job pickup, progress
//! reporting, and transactor endpoint lookup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

use wlw_core::{Operation, Version, WorkspaceInfo};

use crate::error::WireError;
use crate::event::Event;

/// The four control-plane operations the core depends on. Abstracted behind
/// a trait so `wlw-engine` can be exercised against an in-memory fake.
#[async_trait]
pub trait AccountClient: Send + Sync {
    async fn worker_handshake(
        &self,
        token: &str,
        region: &str,
        version: Version,
        operation: Operation,
    ) -> Result<(), WireError>;

    async fn get_pending_workspace(
        &self,
        token: &str,
        region: &str,
        version: Version,
        operation: Operation,
    ) -> Result<Option<WorkspaceInfo>, WireError>;

    async fn update_workspace_info(
        &self,
        token: &str,
        workspace: &str,
        event: Event,
        version: Option<Version>,
        progress: u8,
        message: Option<&str>,
    ) -> Result<(), WireError>;

    async fn get_transactor_endpoint(&self, token: &str) -> Result<Url, WireError>;
}

/// JSON-RPC style envelope used by every account-service call.
#[derive(Serialize)]
struct RpcRequest<'a> {
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: serde_json::Value,
}

/// `reqwest`-backed implementation of [`AccountClient`].
pub struct HttpAccountClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpAccountClient {
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Issue an RPC and deserialize its `result` field as `T`. A `result` of
    /// JSON `null` deserializes successfully whenever `T` itself accepts it
    /// (e.g. `Option<WorkspaceInfo>`), so "no pending workspace" is not
    /// confused with a transport failure.
    async fn call<T: for<'de> Deserialize<'de>>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, WireError> {
        let response = self
            .http
            .post(self.base_url.clone())
            .json(&RpcRequest { method, params })
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WireError::Status { status: status.as_u16(), endpoint: method.to_string() });
        }
        let body: RpcResponse = response.json().await?;
        serde_json::from_value(body.result)
            .map_err(|_| WireError::Status { status: status.as_u16(), endpoint: method.to_string() })
    }

    /// Like [`Self::call`] but for RPCs whose result carries no payload —
    /// success is determined by HTTP status alone, since a `null` JSON
    /// result is indistinguishable from a missing one once deserialized.
    async fn call_unit(&self, method: &str, params: serde_json::Value) -> Result<(), WireError> {
        let response = self
            .http
            .post(self.base_url.clone())
            .json(&RpcRequest { method, params })
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WireError::Status { status: status.as_u16(), endpoint: method.to_string() });
        }
        Ok(())
    }
}

#[async_trait]
impl AccountClient for HttpAccountClient {
    async fn worker_handshake(
        &self,
        token: &str,
        region: &str,
        version: Version,
        operation: Operation,
    ) -> Result<(), WireError> {
        self.call_unit(
            "workerHandshake",
            json!({ "token": token, "region": region, "version": version.to_string(), "operation": operation.as_wire_str() }),
        )
        .await
    }

    async fn get_pending_workspace(
        &self,
        token: &str,
        region: &str,
        version: Version,
        operation: Operation,
    ) -> Result<Option<WorkspaceInfo>, WireError> {
        self.call(
            "getPendingWorkspace",
            json!({ "token": token, "region": region, "version": version.to_string(), "operation": operation.as_wire_str() }),
        )
        .await
    }

    async fn update_workspace_info(
        &self,
        token: &str,
        workspace: &str,
        event: Event,
        version: Option<Version>,
        progress: u8,
        message: Option<&str>,
    ) -> Result<(), WireError> {
        self.call_unit(
            "updateWorkspaceInfo",
            json!({
                "token": token,
                "workspace": workspace,
                "event": event.as_wire_str(),
                "version": version.map(|v| v.to_string()),
                "progress": progress,
                "message": message,
            }),
        )
        .await
    }

    async fn get_transactor_endpoint(&self, token: &str) -> Result<Url, WireError> {
        let raw: String = self.call("getTransactorEndpoint", json!({ "token": token })).await?;
        Url::parse(&raw).map_err(WireError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn handshake_posts_rpc_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": null })))
            .mount(&server)
            .await;

        let client =
            HttpAccountClient::new(reqwest::Client::new(), Url::parse(&server.uri()).unwrap());
        let result = client
            .worker_handshake("tok", "us-east", Version::new(1, 0, 0), Operation::Create)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn non_success_status_surfaces_as_wire_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST")).respond_with(ResponseTemplate::new(503)).mount(&server).await;

        let client =
            HttpAccountClient::new(reqwest::Client::new(), Url::parse(&server.uri()).unwrap());
        let err = client
            .worker_handshake("tok", "us-east", Version::new(1, 0, 0), Operation::Create)
            .await
            .unwrap_err();
        assert!(matches!(err, WireError::Status { status: 503, .. }));
    }
}
