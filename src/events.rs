//! Checkout progress events and the sinks that observe them.

use crate::money::Money;
use log::{debug, info, warn};
use std::sync::Mutex;

/// One observable stage of a checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutEvent {
    /// Checkout began for an order.
    Started { customer: String, amount: Money },

    /// The processor accepted the payment.
    PaymentAccepted {
        customer: String,
        method: &'static str,
    },

    /// The processor declined the payment.
    PaymentDeclined {
        customer: String,
        method: &'static str,
    },

    /// The notifier is about to be invoked.
    NotificationDispatched {
        customer: String,
        channel: &'static str,
    },

    /// Checkout finished with the order paid.
    Completed { customer: String },

    /// Checkout finished with the order left unchanged.
    Failed { customer: String },
}

/// Receives checkout events.
pub trait EventSink: Send + Sync {
    fn record(&self, event: &CheckoutEvent);
}

/// Forwards events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&self, event: &CheckoutEvent) {
        match event {
            CheckoutEvent::Started { customer, amount } => {
                info!("Starting checkout for {} ({})", customer, amount)
            }
            CheckoutEvent::PaymentAccepted { customer, method } => {
                info!("Payment via {} accepted for {}", method, customer)
            }
            CheckoutEvent::PaymentDeclined { customer, method } => {
                warn!("Payment via {} declined for {}", method, customer)
            }
            CheckoutEvent::NotificationDispatched { customer, channel } => {
                debug!("Dispatching {} notification to {}", channel, customer)
            }
            CheckoutEvent::Completed { customer } => {
                info!("Checkout succeeded for {}", customer)
            }
            CheckoutEvent::Failed { customer } => {
                warn!("Checkout failed for {}", customer)
            }
        }
    }
}

/// Keeps every event in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<CheckoutEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<CheckoutEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl EventSink for RecordingSink {
    fn record(&self, event: &CheckoutEvent) {
        let mut events = self
            .events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        events.push(event.clone());
    }
}

/// Shared sinks, so a caller can keep a handle to a sink it injected.
impl<S: EventSink + ?Sized> EventSink for std::sync::Arc<S> {
    fn record(&self, event: &CheckoutEvent) {
        (**self).record(event)
    }
}
