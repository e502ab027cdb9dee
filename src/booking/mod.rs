//! Appointment booking wizard.
//!
//! The wizard walks a donor through five steps: location search, center
//! selection, date and time, donor details, and confirmation. Forward moves
//! are gated by per-step guards ([`guard`]); backward moves are free except on
//! the first step, where "back" cancels the session. State changes go through
//! the pure [`transition`] function; [`BookingWizard`] adds the session
//! lifecycle and the completion/cancellation callbacks.

mod error;
pub mod guard;
mod machine;
mod step;
mod wizard;

pub use error::WizardError;
pub use guard::can_advance;
pub use machine::{transition, WizardAction, WizardState};
pub use step::WizardStep;
pub use wizard::{start_wizard, start_wizard_for, BookingWizard};
