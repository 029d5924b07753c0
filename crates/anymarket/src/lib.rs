//! Vitrine AnyMarket - order API client and list controller.
//!
//! This crate talks to the AnyMarket hub's order REST API and owns the
//! browsing state of the back-office order list: current page, page size,
//! filters, local sort, and derived statistics.
//!
//! # Architecture
//!
//! - [`client::AnyMarketClient`] - thin typed HTTP client, one request per
//!   call, no retries; failures map onto [`client::OrderApiError`]
//! - [`controller::OrderListController`] - owns pagination and sort state,
//!   applies filters, computes statistics; testable without any rendering
//!   surface or live endpoint
//! - [`types`] - serde models for the wire format
//!
//! Rendering is a separate concern: callers read the controller's state
//! (orders, page numbers, fetch state, statistics) and turn it into markup.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_anymarket::{AnyMarketClient, AnyMarketConfig, OrderListController, ListQuery};
//!
//! let config = AnyMarketConfig::from_env()?;
//! let client = AnyMarketClient::new(&config)?;
//! let mut controller = OrderListController::new(client, ListQuery::for_range(range));
//!
//! controller.fetch_page(1).await?;
//! let stats = controller.statistics();
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod config;
pub mod controller;
pub mod types;

pub use client::{AnyMarketClient, OrderApiError, OrderFilters, OrderPage};
pub use config::{AnyMarketConfig, ConfigError};
pub use controller::{
    FetchState, ListQuery, OrderListController, OrderStatistics, PageSize, SortDirection,
    SortField, compute_statistics,
};
pub use types::{Buyer, Order, OrderItem, Payment, ShippingAddress};
