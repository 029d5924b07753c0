//! Order status codes.

use serde::{Deserialize, Serialize};

/// Order lifecycle status as reported by the marketplace hub.
///
/// Hubs occasionally introduce new status codes ahead of our release cycle,
/// so unrecognized codes are carried verbatim in [`OrderStatus::Other`]
/// instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    /// Order placed, payment not yet confirmed.
    Pending,
    /// Payment confirmed.
    Paid,
    /// Payment confirmed, waiting for shipment.
    PaidWaitingShip,
    /// Fiscal invoice issued.
    Invoiced,
    /// Handed to the carrier.
    Shipped,
    /// Delivered and settled.
    Concluded,
    /// Canceled by buyer, seller, or marketplace.
    Canceled,
    /// Status code not known to this release (carried verbatim).
    Other(String),
}

impl OrderStatus {
    /// The wire code for this status.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::PaidWaitingShip => "PAID_WAITING_SHIP",
            Self::Invoiced => "INVOICED",
            Self::Shipped => "SHIPPED",
            Self::Concluded => "CONCLUDED",
            Self::Canceled => "CANCELED",
            Self::Other(code) => code,
        }
    }

    /// Human-readable label for list and detail views.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::PaidWaitingShip => "Paid - awaiting shipment",
            Self::Invoiced => "Invoiced",
            Self::Shipped => "Shipped",
            Self::Concluded => "Concluded",
            Self::Canceled => "Canceled",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "PENDING" => Self::Pending,
            "PAID" => Self::Paid,
            "PAID_WAITING_SHIP" => Self::PaidWaitingShip,
            "INVOICED" => Self::Invoiced,
            "SHIPPED" => Self::Shipped,
            "CONCLUDED" => Self::Concluded,
            "CANCELED" => Self::Canceled,
            _ => Self::Other(code),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.code().to_string()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code_round_trip() {
        let status = OrderStatus::from("PAID_WAITING_SHIP".to_string());
        assert_eq!(status, OrderStatus::PaidWaitingShip);
        assert_eq!(String::from(status), "PAID_WAITING_SHIP");
    }

    #[test]
    fn test_unknown_code_passes_through() {
        let status = OrderStatus::from("WAITING_PICKUP".to_string());
        assert_eq!(status, OrderStatus::Other("WAITING_PICKUP".to_string()));
        assert_eq!(status.code(), "WAITING_PICKUP");
        assert_eq!(status.label(), "WAITING_PICKUP");
    }

    #[test]
    fn test_deserialize_from_json() {
        let status: OrderStatus = serde_json::from_str("\"CANCELED\"").expect("valid json");
        assert_eq!(status, OrderStatus::Canceled);
    }
}
