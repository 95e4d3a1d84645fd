//! # Checkout Demo
//!
//! A small checkout workflow in which payment and notification are
//! capabilities supplied to the checkout service rather than built by it.
//!
//! ## Design Principles
//!
//! - **Injected capabilities**: [`CheckoutService`] receives its
//!   [`PaymentProcessor`] and [`NotificationService`] at construction
//! - **Open for extension**: new payment methods implement a trait; the
//!   service code stays as is
//! - **Two-state orders**: `open -> paid` on success, `open` otherwise
//! - **Observable progress**: each stage is emitted to an [`EventSink`]
//!
//! ## Example
//!
//! ```
//! use checkout_demo::{CheckoutService, CreditCardProcessor, EmailNotifier, Money, Order};
//!
//! let service = CheckoutService::new(Box::new(CreditCardProcessor), Box::new(EmailNotifier));
//! let mut order = Order::new("Andi", Money::from_units(500_000));
//!
//! assert!(service.run_checkout(&mut order));
//! assert!(order.is_paid());
//! ```

pub mod checkout;
pub mod error;
pub mod events;
pub mod money;
pub mod notification;
pub mod order;
pub mod payment;
pub mod report;

pub use checkout::CheckoutService;
pub use error::{CheckoutError, Result};
pub use events::{CheckoutEvent, EventSink, LogSink, RecordingSink};
pub use money::Money;
pub use notification::{EmailNotifier, NotificationService};
pub use order::{Order, OrderStatus};
pub use payment::{CreditCardProcessor, PaymentProcessor, QrisProcessor};
pub use report::{write_summary, CheckoutOutcome};
