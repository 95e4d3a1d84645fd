//! CSV summary of checkout results.

use crate::checkout::CheckoutService;
use crate::error::Result;
use crate::money::Money;
use crate::order::{Order, OrderStatus};
use serde::Serialize;
use std::io::Write;

/// Result of one checkout, as printed in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutOutcome {
    pub customer: String,
    pub total: Money,
    pub method: &'static str,
    pub status: OrderStatus,
    pub success: bool,
}

impl CheckoutOutcome {
    /// Captures the outcome of a checkout that `service` ran on `order`.
    pub fn capture(service: &CheckoutService, order: &Order, success: bool) -> Self {
        CheckoutOutcome {
            customer: order.customer_name.clone(),
            total: order.total_price,
            method: service.payment_method(),
            status: order.status(),
            success,
        }
    }
}

/// Writes outcomes as CSV, in the order given.
pub fn write_summary<W: Write>(outcomes: &[CheckoutOutcome], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for outcome in outcomes {
        csv_writer.serialize(outcome)?;
    }

    csv_writer.flush()?;
    Ok(())
}
