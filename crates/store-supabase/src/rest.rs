//! Thin PostgREST client used by the repositories.
//!
//! # Endpoints
//!
//! - Reads: `GET {base}/rest/v1/{table}?{column}=eq.{value}&select={columns}`
//! - Point reads additionally send `Accept: application/vnd.pgrst.object+json`,
//!   which makes PostgREST answer 406 when the filter matches zero rows.
//! - Updates: `PATCH {base}/rest/v1/{table}?{column}=eq.{value}` with a JSON
//!   body of the changed columns and `Prefer: return=minimal`.
//!
//! Every request carries the project key as both the `apikey` header and a
//! bearer token. Calls have no timeout; a stalled store call suspends the
//! caller until the store responds.

use log::debug;
use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use treem_core::errors::StoreError;

const REST_PATH: &str = "rest/v1";

/// HTTP client for one Supabase project, cheap to clone.
#[derive(Clone)]
pub struct SupabaseRestClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseRestClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}/{}", self.base_url, REST_PATH, table)
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Equality-filtered point read expecting exactly one row.
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        filter_column: &str,
        filter_value: &str,
        columns: &str,
    ) -> Result<T, StoreError> {
        debug!(
            "GET {} where {}={} select {}",
            table, filter_column, filter_value, columns
        );
        let request = self
            .client
            .get(self.table_url(table))
            .query(&[
                (filter_column, format!("eq.{}", filter_value)),
                ("select", columns.to_string()),
            ])
            .header(header::ACCEPT, "application/vnd.pgrst.object+json");
        let response = self
            .authed(request)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if response.status() == StatusCode::NOT_ACCEPTABLE {
            return Err(StoreError::NotFound(format!(
                "{} where {}={}",
                table, filter_column, filter_value
            )));
        }
        if !response.status().is_success() {
            return Err(query_error(table, response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::MalformedResponse(e.to_string()))
    }

    /// Equality-filtered multi-row read. Zero matching rows is an empty list.
    pub async fn select_many<T: DeserializeOwned>(
        &self,
        table: &str,
        filter_column: &str,
        filter_value: &str,
        columns: &str,
    ) -> Result<Vec<T>, StoreError> {
        debug!(
            "GET {} where {}={} select {}",
            table, filter_column, filter_value, columns
        );
        let request = self.client.get(self.table_url(table)).query(&[
            (filter_column, format!("eq.{}", filter_value)),
            ("select", columns.to_string()),
        ]);
        let response = self
            .authed(request)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(query_error(table, response).await);
        }
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| StoreError::MalformedResponse(e.to_string()))
    }

    /// Equality-filtered partial update of the columns present in `patch`.
    pub async fn update(
        &self,
        table: &str,
        filter_column: &str,
        filter_value: &str,
        patch: &Value,
    ) -> Result<(), StoreError> {
        debug!(
            "PATCH {} where {}={}: {}",
            table, filter_column, filter_value, patch
        );
        let request = self
            .client
            .patch(self.table_url(table))
            .query(&[(filter_column, format!("eq.{}", filter_value))])
            .header("Prefer", "return=minimal")
            .json(patch);
        let response = self
            .authed(request)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(query_error(table, response).await);
        }
        Ok(())
    }
}

/// Builds a `QueryFailed` from a non-2xx response, pulling the `message`
/// field out of the PostgREST error body when one is present. The detail is
/// for operator logs only; route handlers never forward it to clients.
async fn query_error(table: &str, response: Response) -> StoreError {
    let status = response.status();
    let detail = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| "no error detail".to_string());
    StoreError::QueryFailed(format!("{}: HTTP {}: {}", table, status, detail))
}
