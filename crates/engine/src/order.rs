//! Demo checkout types.
//!
//! "Confirm order" is a local state transition only: it snapshots the cart
//! into a receipt and clears it. There is no settlement, gateway, or
//! processing state anywhere in this module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use fresh_basket_core::{Email, Price};

use crate::cart::CartLine;

/// Buyer contact info collected by the payment form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub address: String,
}

/// The payment method label chosen on the demo form.
///
/// Labels only; none of these are wired to anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    NetBanking,
    Wallet,
    CashOnDelivery,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card => write!(f, "Card"),
            Self::Upi => write!(f, "UPI"),
            Self::NetBanking => write!(f, "Net Banking"),
            Self::Wallet => write!(f, "Wallet"),
            Self::CashOnDelivery => write!(f, "Cash on Delivery"),
        }
    }
}

/// A placed demo order: the receipt returned by `confirm_order`.
///
/// Carries a snapshot of the cart and total as they were at confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer: CustomerDetails,
    pub payment_method: PaymentMethod,
    pub lines: Vec<CartLine>,
    pub total: Price,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Build a receipt for the given cart snapshot.
    #[must_use]
    pub fn new(
        customer: CustomerDetails,
        payment_method: PaymentMethod,
        lines: Vec<CartLine>,
        total: Price,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer,
            payment_method,
            lines,
            total,
            placed_at: Utc::now(),
        }
    }
}

/// Errors from the demo checkout.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OrderError {
    /// Checkout is only reachable with items in the cart.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_labels() {
        assert_eq!(PaymentMethod::Card.to_string(), "Card");
        assert_eq!(PaymentMethod::Upi.to_string(), "UPI");
        assert_eq!(PaymentMethod::NetBanking.to_string(), "Net Banking");
        assert_eq!(PaymentMethod::CashOnDelivery.to_string(), "Cash on Delivery");
    }
}
