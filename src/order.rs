//! Customer order model.
//!
//! An order is created `open` and becomes `paid` only through a successful
//! checkout.

use crate::money::Money;
use serde::Serialize;
use std::fmt;

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Awaiting payment.
    #[default]
    Open,

    /// Payment accepted by a processor.
    Paid,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Open => f.write_str("open"),
            OrderStatus::Paid => f.write_str("paid"),
        }
    }
}

/// A customer purchase.
///
/// # Invariants
///
/// - `status` starts at [`OrderStatus::Open`]
/// - The only transition is `Open -> Paid`, performed by
///   [`crate::CheckoutService`] after the processor accepts the payment
///
/// Neither `customer_name` nor `total_price` is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Name of the purchasing customer.
    pub customer_name: String,

    /// Total amount to collect.
    pub total_price: Money,

    status: OrderStatus,
}

impl Order {
    /// Creates a new open order.
    pub fn new(customer_name: impl Into<String>, total_price: Money) -> Self {
        Order {
            customer_name: customer_name.into(),
            total_price,
            status: OrderStatus::Open,
        }
    }

    /// Current lifecycle status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns `true` once a checkout has succeeded for this order.
    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    pub(crate) fn mark_paid(&mut self) {
        self.status = OrderStatus::Paid;
    }
}
