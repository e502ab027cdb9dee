//! Forward-transition guards, one per step.

use crate::domain::{BookingDraft, Center, CenterDirectory, CompletedBooking};

use super::{WizardError, WizardState};

pub fn location_ready(draft: &BookingDraft) -> bool {
    !draft.location.trim().is_empty()
}

/// Center the draft points at, if it exists in `directory`.
pub fn selected_center<'d>(draft: &BookingDraft, directory: &'d CenterDirectory) -> Option<&'d Center> {
    draft
        .center_id
        .as_deref()
        .and_then(|id| directory.find(id))
}

pub fn date_time_ready(draft: &BookingDraft, directory: &CenterDirectory) -> bool {
    let Some(time) = draft.time.as_deref() else {
        return false;
    };
    draft.date.is_some()
        && selected_center(draft, directory).is_some_and(|center| center.has_slot(time))
}

/// Only emptiness is checked here. A name of `" "` is accepted.
pub fn donor_ready(draft: &BookingDraft) -> bool {
    [&draft.name, &draft.email, &draft.phone]
        .iter()
        .all(|value| !value.is_empty())
}

/// Whether `next` would move the wizard forward from `state`.
///
/// CenterSelection never advances through `next`: picking a center is the
/// advance trigger there.
pub fn can_advance(state: &WizardState, directory: &CenterDirectory) -> bool {
    match state {
        WizardState::Location(draft) => location_ready(draft),
        WizardState::CenterSelection(_) => false,
        WizardState::DateTime(draft) => date_time_ready(draft, directory),
        WizardState::DonorDetails(draft) => donor_ready(draft),
        WizardState::Confirmation(_) => false,
    }
}

/// Checks the data every step after DateTime relies on and pairs the draft
/// with its center.
pub(crate) fn resolve_booking(
    draft: &BookingDraft,
    directory: &CenterDirectory,
) -> Result<CompletedBooking, WizardError> {
    let center_id = draft
        .center_id
        .as_deref()
        .ok_or_else(|| WizardError::InvariantViolation("no center selected".into()))?;
    let center = directory.find(center_id).ok_or_else(|| {
        WizardError::InvariantViolation(format!("center `{center_id}` is not in the directory"))
    })?;
    match draft.time.as_deref() {
        Some(time) if center.has_slot(time) => {}
        Some(time) => {
            return Err(WizardError::InvariantViolation(format!(
                "time `{time}` is not offered by `{}`",
                center.name
            )))
        }
        None => return Err(WizardError::InvariantViolation("no time selected".into())),
    }
    if draft.date.is_none() {
        return Err(WizardError::InvariantViolation("no date selected".into()));
    }
    Ok(CompletedBooking::new(draft.clone(), center.clone()))
}
