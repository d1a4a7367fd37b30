//! Remote record store client.
//!
//! The record store is a generic REST table service: named collections
//! with equality-filtered CRUD. The console never assumes strong
//! consistency or multi-row transactions from it, never retries, and
//! treats any failure as terminal for the current user action.

pub mod catalog;
pub mod users;

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::config::ConsoleConfig;

/// Errors that can occur when talking to the record store.
#[derive(Debug, Error)]
pub enum RecordStoreError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// No row matched a single-row query.
    #[error("Record not found in {0}")]
    NotFound(String),

    /// Failed to parse a response or build a request.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Equality filters and ordering for a collection query.
#[derive(Debug, Clone, Default)]
pub struct Query {
    filters: Vec<(String, String)>,
    order: Option<String>,
}

impl Query {
    /// An unfiltered query over the whole collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep rows where `column` equals `value`.
    #[must_use]
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_owned(), value.to_string()));
        self
    }

    /// Order rows by `column`, ascending.
    #[must_use]
    pub fn order_asc(mut self, column: &str) -> Self {
        self.order = Some(format!("{column}.asc"));
        self
    }

    /// Order rows by `column`, descending.
    #[must_use]
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some(format!("{column}.desc"));
        self
    }

    fn apply(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        for (column, value) in &self.filters {
            pairs.append_pair(column, &format!("eq.{value}"));
        }
        if let Some(order) = &self.order {
            pairs.append_pair("order", order);
        }
    }
}

/// Record store API client.
#[derive(Clone)]
pub struct RecordStoreClient {
    client: reqwest::Client,
    base_url: Url,
}

impl RecordStoreClient {
    /// Create a new record store client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build or the API key
    /// is not a valid header value.
    pub fn new(config: &ConsoleConfig) -> Result<Self, RecordStoreError> {
        let key = config.record_store_anon_key.expose_secret();
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(key)
                .map_err(|e| RecordStoreError::Parse(format!("invalid API key format: {e}")))?,
        );
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|e| RecordStoreError::Parse(format!("invalid API key format: {e}")))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.record_store_url.clone(),
        })
    }

    /// Insert `rows` into `collection`, returning the created records.
    ///
    /// # Errors
    ///
    /// Returns `RecordStoreError` if the request fails or the store
    /// rejects the rows.
    pub async fn insert<R: DeserializeOwned>(
        &self,
        collection: &str,
        rows: &impl Serialize,
    ) -> Result<Vec<R>, RecordStoreError> {
        let url = self.collection_url(collection)?;
        let response = self
            .client
            .post(url)
            .header("Prefer", "return=representation")
            .json(rows)
            .send()
            .await?;
        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| RecordStoreError::Parse(e.to_string()))
    }

    /// Select rows from `collection` matching `query`.
    ///
    /// # Errors
    ///
    /// Returns `RecordStoreError` if the request fails.
    pub async fn select<R: DeserializeOwned>(
        &self,
        collection: &str,
        query: &Query,
    ) -> Result<Vec<R>, RecordStoreError> {
        let mut url = self.collection_url(collection)?;
        query.apply(&mut url);
        let response = self.client.get(url).send().await?;
        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| RecordStoreError::Parse(e.to_string()))
    }

    /// Select exactly one row from `collection` matching `query`.
    ///
    /// # Errors
    ///
    /// Returns `RecordStoreError::NotFound` when no row matches.
    pub async fn select_single<R: DeserializeOwned>(
        &self,
        collection: &str,
        query: &Query,
    ) -> Result<R, RecordStoreError> {
        self.select(collection, query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| RecordStoreError::NotFound(collection.to_owned()))
    }

    /// Update rows in `collection` matching `query` with `patch`.
    ///
    /// # Errors
    ///
    /// Returns `RecordStoreError` if the request fails.
    pub async fn update(
        &self,
        collection: &str,
        patch: &impl Serialize,
        query: &Query,
    ) -> Result<(), RecordStoreError> {
        let mut url = self.collection_url(collection)?;
        query.apply(&mut url);
        let response = self.client.patch(url).json(patch).send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// Delete rows in `collection` matching `query`.
    ///
    /// # Errors
    ///
    /// Returns `RecordStoreError` if the request fails.
    pub async fn delete(&self, collection: &str, query: &Query) -> Result<(), RecordStoreError> {
        let mut url = self.collection_url(collection)?;
        query.apply(&mut url);
        let response = self.client.delete(url).send().await?;
        check_status(response).await?;
        Ok(())
    }

    fn collection_url(&self, collection: &str) -> Result<Url, RecordStoreError> {
        self.base_url
            .join(&format!("rest/v1/{collection}"))
            .map_err(|e| RecordStoreError::Parse(format!("invalid collection url: {e}")))
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, RecordStoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(RecordStoreError::Api {
        status: status.as_u16(),
        message,
    })
}
