//! Payment processing capability and its built-in methods.

use crate::order::Order;
use log::{debug, info};

/// Attempts to collect payment for an order.
///
/// Implementations must not change the order; marking it paid is the
/// checkout service's job. Faults inside an implementation are logged and
/// reported as a decline (`false`).
pub trait PaymentProcessor: Send + Sync {
    /// Returns `true` if the payment was accepted, `false` if it was declined.
    fn process(&self, order: &Order) -> bool;

    /// Short name of the payment method, used in logs and events.
    fn method(&self) -> &'static str;
}

/// Card payments.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardProcessor;

impl PaymentProcessor for CreditCardProcessor {
    fn process(&self, order: &Order) -> bool {
        info!("Processing credit card payment for {}", order.customer_name);
        debug!(
            "Charging {} to card of {}",
            order.total_price, order.customer_name
        );
        true
    }

    fn method(&self) -> &'static str {
        "credit_card"
    }
}

/// QRIS (Quick Response Code Indonesian Standard) payments.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrisProcessor;

impl PaymentProcessor for QrisProcessor {
    fn process(&self, order: &Order) -> bool {
        info!("Processing QRIS payment for {}", order.customer_name);
        debug!(
            "QRIS charge of {} for {}",
            order.total_price, order.customer_name
        );
        true
    }

    fn method(&self) -> &'static str {
        "qris"
    }
}
