use thiserror::Error;

use super::WizardStep;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The draft reached a later step without the data its guards require.
    /// Unreachable through the defined transitions.
    #[error("Inconsistent booking state: {0}")]
    InvariantViolation(String),
    #[error("Booking session already closed")]
    Closed,
    #[error("`{action}` is not available on the {step} step")]
    NotAvailable {
        action: &'static str,
        step: WizardStep,
    },
}
