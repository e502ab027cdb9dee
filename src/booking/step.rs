use std::fmt;

use serde::{Deserialize, Serialize};

/// Cursor over the five booking stages, in the order they are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    Location,
    CenterSelection,
    DateTime,
    DonorDetails,
    Confirmation,
}

impl WizardStep {
    /// 1-based position used in "Step n / 5" headers.
    pub fn index(self) -> usize {
        match self {
            WizardStep::Location => 1,
            WizardStep::CenterSelection => 2,
            WizardStep::DateTime => 3,
            WizardStep::DonorDetails => 4,
            WizardStep::Confirmation => 5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Location => "Select Location",
            WizardStep::CenterSelection => "Available Centers",
            WizardStep::DateTime => "Select Date & Time",
            WizardStep::DonorDetails => "Donor Details",
            WizardStep::Confirmation => "Appointment Confirmed!",
        }
    }

    /// Step a "back" action returns to. `None` for Location (which cancels
    /// instead) and for the terminal Confirmation step.
    pub fn previous(self) -> Option<WizardStep> {
        match self {
            WizardStep::Location | WizardStep::Confirmation => None,
            WizardStep::CenterSelection => Some(WizardStep::Location),
            WizardStep::DateTime => Some(WizardStep::CenterSelection),
            WizardStep::DonorDetails => Some(WizardStep::DateTime),
        }
    }

    pub fn is_terminal(self) -> bool {
        self == WizardStep::Confirmation
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WizardStep::Location => "Location",
            WizardStep::CenterSelection => "CenterSelection",
            WizardStep::DateTime => "DateTime",
            WizardStep::DonorDetails => "DonorDetails",
            WizardStep::Confirmation => "Confirmation",
        };
        f.write_str(label)
    }
}
