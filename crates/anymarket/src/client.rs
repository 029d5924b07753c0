//! AnyMarket order API client.
//!
//! Thin typed wrapper over the hub's REST endpoints. Each call issues exactly
//! one request; failures are classified into [`OrderApiError`] and never
//! retried - surfacing errors is the caller's job.
//!
//! # API Reference
//!
//! - Base URL: `https://api.anymarket.com.br/v2`
//! - Authentication: opaque token via the `gumgaToken` header
//! - List envelope: `{ "content": [Order], "page": { "totalElements": n } }`

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use thiserror::Error;
use tracing::instrument;

use vitrine_core::{DateRange, Marketplace, OrderStatus};

use crate::config::AnyMarketConfig;
use crate::types::{Order, OrderListResponse};

/// UTC offset the hub anchors calendar days to.
const DAY_BOUNDARY_OFFSET: &str = "-03:00";

/// Errors that can occur when talking to the order API.
///
/// Exactly one kind is signaled per failed call.
#[derive(Debug, Error)]
pub enum OrderApiError {
    /// The request could not complete (DNS, connect, timeout, body read).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Missing or invalid token (HTTP 401).
    #[error("unauthorized: missing or invalid AnyMarket token")]
    Unauthorized,

    /// Token lacks permission for this resource (HTTP 403).
    #[error("forbidden: token lacks permission for this resource")]
    Forbidden,

    /// Malformed filter or pagination parameters (HTTP 400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Any other non-success status.
    #[error("server error: {status} - {message}")]
    Server { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Optional constraints narrowing an order listing.
///
/// Parameters are appended to the query string only when present.
#[derive(Debug, Clone, Default)]
pub struct OrderFilters {
    /// Restrict to one lifecycle status.
    pub status: Option<OrderStatus>,
    /// Restrict to one marketplace channel.
    pub marketplace: Option<Marketplace>,
    /// Restrict to a creation-date window (already validated).
    pub created: Option<DateRange>,
}

/// One fetched page of the remote order collection.
#[derive(Debug, Clone)]
pub struct OrderPage {
    /// Orders in this page, hub order preserved.
    pub orders: Vec<Order>,
    /// Total matching orders across all pages, as reported by the hub.
    pub total_count: u64,
}

/// AnyMarket order API client.
///
/// Cheap to clone; all clones share one connection pool and token.
#[derive(Clone)]
pub struct AnyMarketClient {
    inner: Arc<AnyMarketClientInner>,
}

struct AnyMarketClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl AnyMarketClient {
    /// Create a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OrderApiError::Parse`] if the token contains bytes that
    /// cannot form a header value, or [`OrderApiError::Network`] if the
    /// HTTP client fails to build.
    pub fn new(config: &AnyMarketConfig) -> Result<Self, OrderApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut token = HeaderValue::from_str(config.token.expose_secret())
            .map_err(|e| OrderApiError::Parse(format!("invalid token format: {e}")))?;
        token.set_sensitive(true);
        headers.insert("gumgaToken", token);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(AnyMarketClientInner {
                client,
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// Fetch one page of the order collection.
    ///
    /// `limit` and `offset` drive the hub's paging; `filters` are appended
    /// only when present, with the date window anchored to local-day
    /// boundaries (`00:00:00` / `23:59:59` at the fixed -03:00 offset).
    ///
    /// An empty `content` array is a legitimate empty page, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`OrderApiError`] classifying the failure; no retries.
    #[instrument(skip(self))]
    pub async fn list_orders(
        &self,
        limit: u32,
        offset: u64,
        filters: &OrderFilters,
    ) -> Result<OrderPage, OrderApiError> {
        let url = format!("{}/orders", self.inner.base_url);
        let query = build_list_query(limit, offset, filters);

        let response = self.inner.client.get(&url).query(&query).send().await?;
        let envelope: OrderListResponse = self.handle_response(response).await?;

        Ok(OrderPage {
            orders: envelope.content,
            total_count: envelope.page.total_elements,
        })
    }

    /// Fetch a single order in full, for the detail view.
    ///
    /// # Errors
    ///
    /// Returns [`OrderApiError`] classifying the failure.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn get_order(&self, id: i64) -> Result<Order, OrderApiError> {
        let url = format!("{}/orders/{id}", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Handle an API response: decode on success, classify on failure.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, OrderApiError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| OrderApiError::Parse(format!("failed to decode response: {e}")));
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());

        Err(classify_status(status, message))
    }
}

impl std::fmt::Debug for AnyMarketClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyMarketClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

/// Map a non-success HTTP status onto the error taxonomy.
fn classify_status(status: StatusCode, message: String) -> OrderApiError {
    match status {
        StatusCode::UNAUTHORIZED => OrderApiError::Unauthorized,
        StatusCode::FORBIDDEN => OrderApiError::Forbidden,
        StatusCode::BAD_REQUEST => OrderApiError::BadRequest(message),
        _ => OrderApiError::Server {
            status: status.as_u16(),
            message,
        },
    }
}

/// Build the query pairs for the listing endpoint.
///
/// Filter parameters are appended only when present.
fn build_list_query(limit: u32, offset: u64, filters: &OrderFilters) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("limit", limit.to_string()),
        ("offset", offset.to_string()),
    ];

    if let Some(status) = &filters.status {
        query.push(("status", status.code().to_string()));
    }
    if let Some(marketplace) = &filters.marketplace {
        query.push(("marketplace", marketplace.code().to_string()));
    }
    if let Some(range) = &filters.created {
        query.push((
            "since",
            format!("{}T00:00:00{DAY_BOUNDARY_OFFSET}", range.start()),
        ));
        query.push((
            "until",
            format!("{}T23:59:59{DAY_BOUNDARY_OFFSET}", range.end()),
        ));
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn test_client() -> AnyMarketClient {
        let config = AnyMarketConfig::new(SecretString::from("test-token"));
        AnyMarketClient::new(&config).expect("client builds")
    }

    fn range(start: &str, end: &str) -> DateRange {
        let today = "2099-12-31".parse().expect("valid date");
        DateRange::new(
            Some(start.parse().expect("valid date")),
            Some(end.parse().expect("valid date")),
            today,
        )
        .expect("valid range")
    }

    #[test]
    fn test_client_debug_omits_token() {
        let client = test_client();
        let debug = format!("{client:?}");
        assert!(debug.contains("base_url"));
        assert!(!debug.contains("test-token"));
    }

    #[test]
    fn test_classify_unauthorized() {
        let err = classify_status(StatusCode::UNAUTHORIZED, String::new());
        assert!(matches!(err, OrderApiError::Unauthorized));
    }

    #[test]
    fn test_classify_forbidden() {
        let err = classify_status(StatusCode::FORBIDDEN, String::new());
        assert!(matches!(err, OrderApiError::Forbidden));
    }

    #[test]
    fn test_classify_bad_request_keeps_message() {
        let err = classify_status(StatusCode::BAD_REQUEST, "offset out of range".to_string());
        assert_eq!(err.to_string(), "bad request: offset out of range");
    }

    #[test]
    fn test_classify_other_status_as_server_error() {
        let err = classify_status(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        match err {
            OrderApiError::Server { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("expected Server, got {other:?}"),
        }
    }

    #[test]
    fn test_query_without_filters() {
        let query = build_list_query(20, 40, &OrderFilters::default());
        assert_eq!(
            query,
            vec![
                ("limit", "20".to_string()),
                ("offset", "40".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_with_all_filters() {
        let filters = OrderFilters {
            status: Some(OrderStatus::Invoiced),
            marketplace: Some(Marketplace::Shopee),
            created: Some(range("2024-03-01", "2024-03-10")),
        };
        let query = build_list_query(10, 0, &filters);

        assert!(query.contains(&("status", "INVOICED".to_string())));
        assert!(query.contains(&("marketplace", "SHOPEE".to_string())));
        assert!(query.contains(&("since", "2024-03-01T00:00:00-03:00".to_string())));
        assert!(query.contains(&("until", "2024-03-10T23:59:59-03:00".to_string())));
    }

    #[test]
    fn test_query_passes_unknown_status_code_verbatim() {
        let filters = OrderFilters {
            status: Some(OrderStatus::Other("WAITING_PICKUP".to_string())),
            ..OrderFilters::default()
        };
        let query = build_list_query(10, 0, &filters);
        assert!(query.contains(&("status", "WAITING_PICKUP".to_string())));
    }
}
