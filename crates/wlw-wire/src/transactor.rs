// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transactor maintenance client (C8): force-close sessions before a
//! destructive phase runs.

use url::Url;

use crate::error::WireError;

/// Rewrite a `ws(s)://` scheme to `http(s)://`. Other schemes are returned
/// unchanged.
pub fn to_http_scheme(endpoint: &Url) -> Result<Url, WireError> {
    let mut endpoint = endpoint.clone();
    let new_scheme = match endpoint.scheme() {
        "ws" => "http",
        "wss" => "https",
        other => other,
    };
    endpoint.set_scheme(new_scheme).map_err(|_| WireError::InvalidUrl(url::ParseError::EmptyHost))?;
    Ok(endpoint)
}

pub struct TransactorClient {
    http: reqwest::Client,
}

impl TransactorClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// `PUT {endpoint}/api/v1/manage?token=…&operation=force-close`.
    ///
    /// Best-effort: the caller logs and discards any error — the transactor
    /// may already be down, and the destructive action is authorised
    /// regardless.
    pub async fn force_close(&self, endpoint: &Url, token: &str) -> Result<(), WireError> {
        let http_endpoint = to_http_scheme(endpoint)?;
        let url = format!("{}/api/v1/manage", http_endpoint.as_str().trim_end_matches('/'));
        let response = self
            .http
            .put(url)
            .query(&[("token", token), ("operation", "force-close")])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(WireError::Status {
                status: response.status().as_u16(),
                endpoint: "transactor/force-close".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_ws_and_wss_schemes() {
        let ws: Url = "ws://transactor.local:3334".parse().unwrap();
        assert_eq!(to_http_scheme(&ws).unwrap().scheme(), "http");
        let wss: Url = "wss://transactor.local:3334".parse().unwrap();
        assert_eq!(to_http_scheme(&wss).unwrap().scheme(), "https");
    }

    #[test]
    fn leaves_other_schemes_untouched() {
        let http: Url = "http://transactor.local:3334".parse().unwrap();
        assert_eq!(to_http_scheme(&http).unwrap().scheme(), "http");
    }
}
