//! Pure state machine: `(state, action) -> state`.

use serde::Serialize;
use tracing::{debug, error};

use crate::domain::{BookingDraft, CenterDirectory, CompletedBooking};

use super::{guard, WizardError, WizardStep};

/// User actions the wizard reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    SetLocation(String),
    SelectCenter(String),
    SetDate(String),
    SetTime(String),
    SetName(String),
    SetEmail(String),
    SetPhone(String),
    Next,
    Back,
}

/// Wizard position together with the data collected so far.
///
/// Confirmation carries the finished booking instead of a draft, so a
/// confirmed state without a resolved center cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WizardState {
    Location(BookingDraft),
    CenterSelection(BookingDraft),
    DateTime(BookingDraft),
    DonorDetails(BookingDraft),
    Confirmation(CompletedBooking),
}

impl Default for WizardState {
    fn default() -> Self {
        WizardState::Location(BookingDraft::default())
    }
}

impl WizardState {
    /// Initial state with a pre-populated draft.
    pub fn starting_with(draft: BookingDraft) -> Self {
        WizardState::Location(draft)
    }

    pub fn step(&self) -> WizardStep {
        match self {
            WizardState::Location(_) => WizardStep::Location,
            WizardState::CenterSelection(_) => WizardStep::CenterSelection,
            WizardState::DateTime(_) => WizardStep::DateTime,
            WizardState::DonorDetails(_) => WizardStep::DonorDetails,
            WizardState::Confirmation(_) => WizardStep::Confirmation,
        }
    }

    pub fn draft(&self) -> &BookingDraft {
        match self {
            WizardState::Location(draft)
            | WizardState::CenterSelection(draft)
            | WizardState::DateTime(draft)
            | WizardState::DonorDetails(draft) => draft,
            WizardState::Confirmation(booking) => booking.draft(),
        }
    }

    pub fn completed(&self) -> Option<&CompletedBooking> {
        match self {
            WizardState::Confirmation(booking) => Some(booking),
            _ => None,
        }
    }
}

/// Applies `action` to `state`.
///
/// Actions that do not apply to the current step, and forward moves whose
/// guard fails, return the state unchanged. `Err` only signals a draft that
/// got past DateTime without a valid center and slot.
pub fn transition(
    state: &WizardState,
    directory: &CenterDirectory,
    action: WizardAction,
) -> Result<WizardState, WizardError> {
    use WizardAction as A;
    use WizardState as S;

    let next = match (state, action) {
        (S::Location(draft), A::SetLocation(text)) => S::Location(draft.with_location(text)),
        (S::Location(draft), A::Next) if guard::location_ready(draft) => {
            S::CenterSelection(draft.clone())
        }

        (S::CenterSelection(draft), A::SelectCenter(id)) => match directory.find(id.trim()) {
            Some(center) => S::DateTime(draft.with_center(center)),
            None => {
                debug!(center_id = %id, "unknown center ignored");
                state.clone()
            }
        },
        (S::CenterSelection(draft), A::Back) => S::Location(draft.clone()),

        (S::DateTime(draft), A::SetDate(date)) => S::DateTime(draft.with_date(&date)),
        (S::DateTime(draft), A::SetTime(time)) => choose_slot(state, draft, directory, &time),
        (S::DateTime(draft), A::Next) if guard::date_time_ready(draft, directory) => {
            guard::resolve_booking(draft, directory).map_err(log_violation)?;
            S::DonorDetails(draft.clone())
        }
        (S::DateTime(draft), A::Back) => S::CenterSelection(draft.clone()),

        (S::DonorDetails(draft), A::SetName(name)) => S::DonorDetails(draft.with_name(name)),
        (S::DonorDetails(draft), A::SetEmail(email)) => S::DonorDetails(draft.with_email(email)),
        (S::DonorDetails(draft), A::SetPhone(phone)) => S::DonorDetails(draft.with_phone(phone)),
        (S::DonorDetails(draft), A::Next) if guard::donor_ready(draft) => {
            S::Confirmation(guard::resolve_booking(draft, directory).map_err(log_violation)?)
        }
        (S::DonorDetails(draft), A::Back) => S::DateTime(draft.clone()),

        (_, action) => {
            debug!(step = %state.step(), ?action, "action has no effect on this step");
            state.clone()
        }
    };

    if next.step() != state.step() {
        debug!(from = %state.step(), to = %next.step(), "booking step changed");
    }
    Ok(next)
}

/// Slots are only offered once a date is picked, and only the selected
/// center's slots are accepted. A blank value clears the choice.
fn choose_slot(
    state: &WizardState,
    draft: &BookingDraft,
    directory: &CenterDirectory,
    time: &str,
) -> WizardState {
    let slot = time.trim();
    if slot.is_empty() {
        return WizardState::DateTime(draft.with_time(slot));
    }
    let offered = draft.date.is_some()
        && guard::selected_center(draft, directory).is_some_and(|center| center.has_slot(slot));
    if offered {
        WizardState::DateTime(draft.with_time(slot))
    } else {
        debug!(slot, "time slot not offered by the selected center");
        state.clone()
    }
}

fn log_violation(err: WizardError) -> WizardError {
    error!(%err, "booking invariant violated");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample;

    fn apply(state: WizardState, action: WizardAction) -> WizardState {
        transition(&state, &sample::centers(), action).unwrap()
    }

    fn at_date_time() -> WizardState {
        let state = apply(WizardState::default(), WizardAction::SetLocation("Downtown".into()));
        let state = apply(state, WizardAction::Next);
        apply(state, WizardAction::SelectCenter("1".into()))
    }

    #[test]
    fn location_next_blocked_until_text_entered() {
        let state = apply(WizardState::default(), WizardAction::Next);
        assert_eq!(state.step(), WizardStep::Location);
        let state = apply(state, WizardAction::SetLocation("  ".into()));
        assert_eq!(apply(state, WizardAction::Next).step(), WizardStep::Location);
    }

    #[test]
    fn selecting_center_advances() {
        let state = at_date_time();
        assert_eq!(state.step(), WizardStep::DateTime);
        assert_eq!(state.draft().center_id.as_deref(), Some("1"));
    }

    #[test]
    fn unknown_center_is_ignored() {
        let state = apply(WizardState::default(), WizardAction::SetLocation("x".into()));
        let state = apply(state, WizardAction::Next);
        let after = apply(state.clone(), WizardAction::SelectCenter("42".into()));
        assert_eq!(after, state);
    }

    #[test]
    fn time_requires_a_date_first() {
        let state = apply(at_date_time(), WizardAction::SetTime("10:30".into()));
        assert_eq!(state.draft().time, None);
        let state = apply(state, WizardAction::SetDate("2024-05-01".into()));
        let state = apply(state, WizardAction::SetTime("10:30".into()));
        assert_eq!(state.draft().time.as_deref(), Some("10:30"));
    }

    #[test]
    fn field_edits_outside_their_step_are_ignored() {
        let state = at_date_time();
        let after = apply(state.clone(), WizardAction::SetLocation("Elsewhere".into()));
        assert_eq!(after, state);
        let after = apply(state.clone(), WizardAction::SetName("Someone".into()));
        assert_eq!(after, state);
    }

    #[test]
    fn confirmation_ignores_navigation() {
        let state = at_date_time();
        let state = apply(state, WizardAction::SetDate("2024-05-01".into()));
        let state = apply(state, WizardAction::SetTime("09:00".into()));
        let state = apply(state, WizardAction::Next);
        let state = apply(state, WizardAction::SetName("Jane".into()));
        let state = apply(state, WizardAction::SetEmail("jane@x.com".into()));
        let state = apply(state, WizardAction::SetPhone("555".into()));
        let confirmed = apply(state, WizardAction::Next);
        assert_eq!(confirmed.step(), WizardStep::Confirmation);
        assert_eq!(apply(confirmed.clone(), WizardAction::Back), confirmed);
        assert_eq!(apply(confirmed.clone(), WizardAction::Next), confirmed);
    }

    #[test]
    fn corrupted_draft_is_reported() {
        let mut draft = BookingDraft::for_donor("Jane")
            .with_email("jane@x.com")
            .with_phone("555");
        draft.date = Some("2024-05-01".into());
        draft.time = Some("09:00".into());
        let err = transition(
            &WizardState::DonorDetails(draft),
            &sample::centers(),
            WizardAction::Next,
        )
        .unwrap_err();
        assert!(matches!(err, WizardError::InvariantViolation(_)));
    }
}
