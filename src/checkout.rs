//! Checkout orchestration.
//!
//! Combines one payment processor and one notifier, both supplied by the
//! caller. Adding a payment method means implementing [`PaymentProcessor`];
//! this module does not change.

use crate::events::{CheckoutEvent, EventSink, LogSink};
use crate::notification::NotificationService;
use crate::order::Order;
use crate::payment::PaymentProcessor;

/// Runs checkouts against injected payment and notification services.
///
/// # Flow
///
/// - Payment accepted: the order becomes `paid`, the notifier is invoked
///   once, and `run_checkout` returns `true`
/// - Payment declined: the order is left untouched, the notifier is not
///   invoked, and `run_checkout` returns `false`
///
/// There are no retries and no rollback.
pub struct CheckoutService {
    processor: Box<dyn PaymentProcessor>,
    notifier: Box<dyn NotificationService>,
    sink: Box<dyn EventSink>,
}

impl CheckoutService {
    /// Creates a service that reports progress through the `log` facade.
    pub fn new(
        processor: Box<dyn PaymentProcessor>,
        notifier: Box<dyn NotificationService>,
    ) -> Self {
        Self::with_sink(processor, notifier, Box::new(LogSink))
    }

    /// Creates a service that reports progress to `sink`.
    pub fn with_sink(
        processor: Box<dyn PaymentProcessor>,
        notifier: Box<dyn NotificationService>,
        sink: Box<dyn EventSink>,
    ) -> Self {
        CheckoutService {
            processor,
            notifier,
            sink,
        }
    }

    /// Payment method of the injected processor.
    pub fn payment_method(&self) -> &'static str {
        self.processor.method()
    }

    /// Runs a checkout for `order`, updating its status in place.
    ///
    /// The order is expected to be open. This is not enforced.
    pub fn run_checkout(&self, order: &mut Order) -> bool {
        let customer = order.customer_name.clone();
        self.sink.record(&CheckoutEvent::Started {
            customer: customer.clone(),
            amount: order.total_price,
        });

        let method = self.processor.method();
        if !self.processor.process(order) {
            self.sink.record(&CheckoutEvent::PaymentDeclined {
                customer: customer.clone(),
                method,
            });
            self.sink.record(&CheckoutEvent::Failed { customer });
            return false;
        }

        self.sink.record(&CheckoutEvent::PaymentAccepted {
            customer: customer.clone(),
            method,
        });

        order.mark_paid();

        self.sink.record(&CheckoutEvent::NotificationDispatched {
            customer: customer.clone(),
            channel: self.notifier.channel(),
        });
        self.notifier.send(order);

        self.sink.record(&CheckoutEvent::Completed { customer });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{capture, RecordingSink};
    use crate::money::Money;
    use crate::notification::EmailNotifier;
    use crate::order::OrderStatus;
    use crate::payment::{CreditCardProcessor, QrisProcessor};
    use log::Level;
    use std::sync::Arc;

    struct Decline;

    impl PaymentProcessor for Decline {
        fn process(&self, _order: &Order) -> bool {
            false
        }

        fn method(&self) -> &'static str {
            "decline"
        }
    }

    fn service_with_recorder(
        processor: Box<dyn PaymentProcessor>,
    ) -> (CheckoutService, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let service =
            CheckoutService::with_sink(processor, Box::new(EmailNotifier), Box::new(sink.clone()));
        (service, sink)
    }

    #[test]
    fn test_success_marks_order_paid() {
        let service = CheckoutService::new(Box::new(CreditCardProcessor), Box::new(EmailNotifier));
        let mut order = Order::new("Andi", Money::from_units(500_000));

        assert!(service.run_checkout(&mut order));
        assert_eq!(order.status(), OrderStatus::Paid);
    }

    #[test]
    fn test_decline_leaves_order_open() {
        let service = CheckoutService::new(Box::new(Decline), Box::new(EmailNotifier));
        let mut order = Order::new("Andi", Money::from_units(500_000));
        let before = order.clone();

        assert!(!service.run_checkout(&mut order));
        assert_eq!(order, before);
    }

    #[test]
    fn test_success_event_sequence() {
        let (service, sink) = service_with_recorder(Box::new(QrisProcessor));
        let mut order = Order::new("Budi", Money::from_units(100_000));
        service.run_checkout(&mut order);

        let customer = "Budi".to_string();
        assert_eq!(
            sink.events(),
            vec![
                CheckoutEvent::Started {
                    customer: customer.clone(),
                    amount: Money::from_units(100_000),
                },
                CheckoutEvent::PaymentAccepted {
                    customer: customer.clone(),
                    method: "qris",
                },
                CheckoutEvent::NotificationDispatched {
                    customer: customer.clone(),
                    channel: "email",
                },
                CheckoutEvent::Completed { customer },
            ]
        );
    }

    #[test]
    fn test_decline_event_sequence() {
        let (service, sink) = service_with_recorder(Box::new(Decline));
        let mut order = Order::new("Citra", Money::from_units(75_000));
        service.run_checkout(&mut order);

        let customer = "Citra".to_string();
        assert_eq!(
            sink.events(),
            vec![
                CheckoutEvent::Started {
                    customer: customer.clone(),
                    amount: Money::from_units(75_000),
                },
                CheckoutEvent::PaymentDeclined {
                    customer: customer.clone(),
                    method: "decline",
                },
                CheckoutEvent::Failed { customer },
            ]
        );
    }

    #[test]
    fn test_already_paid_order_stays_paid() {
        let service = CheckoutService::new(Box::new(CreditCardProcessor), Box::new(EmailNotifier));
        let mut order = Order::new("Andi", Money::from_units(500_000));

        assert!(service.run_checkout(&mut order));
        assert!(service.run_checkout(&mut order));
        assert!(order.is_paid());
    }

    #[test]
    fn test_payment_method_reports_injected_processor() {
        let card = CheckoutService::new(Box::new(CreditCardProcessor), Box::new(EmailNotifier));
        let qris = CheckoutService::new(Box::new(QrisProcessor), Box::new(EmailNotifier));

        assert_eq!(card.payment_method(), "credit_card");
        assert_eq!(qris.payment_method(), "qris");
    }

    #[test]
    fn test_decline_logs_warnings_and_no_notification() {
        let service = CheckoutService::new(Box::new(Decline), Box::new(EmailNotifier));
        let mut order = Order::new("Citra", Money::from_units(75_000));

        let logs = capture::logs_of(|| {
            assert!(!service.run_checkout(&mut order));
        });

        assert_eq!(
            logs,
            vec![
                (Level::Info, "Starting checkout for Citra (75000.00)".to_string()),
                (Level::Warn, "Payment via decline declined for Citra".to_string()),
                (Level::Warn, "Checkout failed for Citra".to_string()),
            ]
        );
    }

    #[test]
    fn test_success_logs_notification_and_completion() {
        let service = CheckoutService::new(Box::new(QrisProcessor), Box::new(EmailNotifier));
        let mut order = Order::new("Budi", Money::from_units(100_000));

        let logs = capture::logs_of(|| {
            assert!(service.run_checkout(&mut order));
        });

        assert!(logs.contains(&(
            Level::Info,
            "Sending confirmation email to Budi (order paid)".to_string()
        )));
        assert_eq!(
            logs.last(),
            Some(&(Level::Info, "Checkout succeeded for Budi".to_string()))
        );
        assert!(logs.iter().all(|(level, _)| *level != Level::Warn));
    }
}
