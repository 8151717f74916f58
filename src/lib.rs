#![doc(test(attr(deny(warnings))))]

//! Budget Lines models a small household ledger: signed income and
//! expense entries owned by users, per-user spending limits, and the
//! passes that append validated expenses, annotate entries breaching a
//! limit, and render a short summary of the offenders.

pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Lines tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
