//! Customer notification capability.

use crate::order::Order;
use log::info;

/// Informs a customer about an order.
///
/// Called after the order reflects its final status.
pub trait NotificationService: Send + Sync {
    fn send(&self, order: &Order);

    /// Delivery channel name, used in logs and events.
    fn channel(&self) -> &'static str;
}

/// Confirmation emails. Delivery is a logged no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotifier;

impl NotificationService for EmailNotifier {
    fn send(&self, order: &Order) {
        info!(
            "Sending confirmation email to {} (order {})",
            order.customer_name,
            order.status()
        );
    }

    fn channel(&self) -> &'static str {
        "email"
    }
}
