#![doc(test(attr(deny(warnings))))]

//! HemoLink: blood donation dashboard, donor profile, assistant chat, and a
//! five-step appointment booking wizard.
//!
//! The wizard lives in [`booking`] and is usable on its own:
//!
//! ```
//! use hemolink::booking::{start_wizard, WizardStep};
//! use hemolink::domain::sample;
//!
//! let directory = sample::centers();
//! let mut wizard = start_wizard(&directory, |_booking| {}, || {});
//! wizard.set_location("Downtown").unwrap();
//! wizard.next().unwrap();
//! assert_eq!(wizard.step(), WizardStep::CenterSelection);
//! ```

pub mod assistant;
pub mod booking;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!(build = %utils::build_info::current().summary(), "HemoLink tracing initialized");
    });
}
