//! Checkout Demo CLI
//!
//! Runs two independent checkout scenarios and prints a CSV summary of
//! their outcomes.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Defaults to `info`; set to `debug` to see amounts and
//!   notification dispatch

use checkout_demo::{
    write_summary, CheckoutOutcome, CheckoutService, CreditCardProcessor, EmailNotifier, Money,
    Order, QrisProcessor, Result,
};
use log::{info, warn};
use std::io;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut andi = Order::new("Andi", Money::from_units(500_000));
    let mut budi = Order::new("Budi", Money::from_units(100_000));

    let card_checkout =
        CheckoutService::new(Box::new(CreditCardProcessor), Box::new(EmailNotifier));
    let qris_checkout = CheckoutService::new(Box::new(QrisProcessor), Box::new(EmailNotifier));

    let outcomes = vec![
        checkout(&card_checkout, &mut andi),
        checkout(&qris_checkout, &mut budi),
    ];

    let stdout = io::stdout();
    let handle = stdout.lock();
    write_summary(&outcomes, handle)?;

    Ok(())
}

fn checkout(service: &CheckoutService, order: &mut Order) -> CheckoutOutcome {
    let success = service.run_checkout(order);
    if success {
        info!(
            "{}: order {} via {}",
            order.customer_name,
            order.status(),
            service.payment_method()
        );
    } else {
        warn!(
            "{}: payment via {} declined, order still {}",
            order.customer_name,
            service.payment_method(),
            order.status()
        );
    }
    CheckoutOutcome::capture(service, order, success)
}
