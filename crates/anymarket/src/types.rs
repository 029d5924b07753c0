//! Order domain types for the AnyMarket API.
//!
//! Field names follow the hub's camelCase wire format. Monetary amounts are
//! decimals defaulting to zero when the hub omits them; nested buyer,
//! shipping, and payment records are display-only and carry no derived
//! computation.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use vitrine_core::{Marketplace, OrderStatus};

/// One marketplace order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Hub-assigned order ID, unique within a result set.
    pub id: i64,
    /// Lifecycle status; unrecognized codes are carried verbatim.
    pub status: OrderStatus,
    /// Marketplace the sale came through.
    #[serde(rename = "marketplaceCode")]
    pub marketplace: Marketplace,
    /// Creation timestamp, used for sorting and display.
    pub created_at: DateTime<FixedOffset>,
    /// Order total; zero when the hub omits it.
    #[serde(default)]
    pub total: Decimal,
    /// Line items, in the order the hub reports them.
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Buyer record (display only).
    pub buyer: Option<Buyer>,
    /// Shipping address (display only).
    pub shipping: Option<ShippingAddress>,
    /// Payments (display only).
    #[serde(default)]
    pub payments: Vec<Payment>,
}

/// A line item in an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Hub product ID.
    pub product_id: Option<i64>,
    /// SKU as listed on the marketplace.
    pub sku: Option<String>,
    /// Product title.
    pub title: Option<String>,
    /// Quantity ordered.
    #[serde(default)]
    pub quantity: i64,
    /// Price per unit.
    #[serde(default)]
    pub unit_price: Decimal,
    /// Line total.
    #[serde(default)]
    pub total: Decimal,
    /// Discount applied to the line.
    #[serde(default)]
    pub discount: Decimal,
}

/// Buyer record attached to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    /// Buyer name.
    pub name: Option<String>,
    /// Buyer email.
    pub email: Option<String>,
    /// CPF/CNPJ document number.
    pub document: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
}

/// Shipping address attached to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    /// Street name.
    pub street: Option<String>,
    /// Street number.
    pub number: Option<String>,
    /// Neighborhood.
    pub neighborhood: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State / province code.
    pub state: Option<String>,
    /// Postal code.
    pub zip_code: Option<String>,
}

/// A payment recorded against an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Payment method as reported by the marketplace.
    pub method: Option<String>,
    /// Payment status as reported by the marketplace.
    pub status: Option<String>,
    /// Amount paid.
    #[serde(default)]
    pub value: Decimal,
}

/// Wire envelope for the order-listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderListResponse {
    /// Orders in the requested window.
    #[serde(default)]
    pub content: Vec<Order>,
    /// Paging block.
    pub page: PageMetadata,
}

/// Paging block of the list envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Total matching orders across all pages.
    pub total_elements: u64,
}
