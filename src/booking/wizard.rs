//! Session handle wrapping the pure state machine with the two exit callbacks.

use std::fmt;

use tracing::info;

use crate::domain::{BookingDraft, Center, CenterDirectory, CompletedBooking, DonorProfile};

use super::{guard, transition, WizardAction, WizardError, WizardState, WizardStep};

type CompleteCallback<'d> = Box<dyn FnMut(CompletedBooking) + 'd>;
type CancelCallback<'d> = Box<dyn FnMut() + 'd>;

/// Begins a booking session at [`WizardStep::Location`].
///
/// `on_complete` fires when the donor leaves the confirmation screen,
/// `on_cancel` when they cancel from the first step. Exactly one of them is
/// invoked, at most once, per session.
pub fn start_wizard<'d, C, X>(
    directory: &'d CenterDirectory,
    on_complete: C,
    on_cancel: X,
) -> BookingWizard<'d>
where
    C: FnMut(CompletedBooking) + 'd,
    X: FnMut() + 'd,
{
    BookingWizard::new(directory, BookingDraft::default(), on_complete, on_cancel)
}

/// Like [`start_wizard`] but with the donor name already filled in.
pub fn start_wizard_for<'d, C, X>(
    directory: &'d CenterDirectory,
    donor: &DonorProfile,
    on_complete: C,
    on_cancel: X,
) -> BookingWizard<'d>
where
    C: FnMut(CompletedBooking) + 'd,
    X: FnMut() + 'd,
{
    BookingWizard::new(
        directory,
        BookingDraft::for_donor(donor.name.clone()),
        on_complete,
        on_cancel,
    )
}

pub struct BookingWizard<'d> {
    directory: &'d CenterDirectory,
    state: WizardState,
    on_complete: CompleteCallback<'d>,
    on_cancel: CancelCallback<'d>,
    closed: bool,
}

impl<'d> BookingWizard<'d> {
    fn new<C, X>(
        directory: &'d CenterDirectory,
        draft: BookingDraft,
        on_complete: C,
        on_cancel: X,
    ) -> Self
    where
        C: FnMut(CompletedBooking) + 'd,
        X: FnMut() + 'd,
    {
        info!(centers = directory.len(), "booking session started");
        Self {
            directory,
            state: WizardState::starting_with(draft),
            on_complete: Box::new(on_complete),
            on_cancel: Box::new(on_cancel),
            closed: false,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> WizardStep {
        self.state.step()
    }

    pub fn draft(&self) -> &BookingDraft {
        self.state.draft()
    }

    pub fn selected_center(&self) -> Option<&'d Center> {
        guard::selected_center(self.state.draft(), self.directory)
    }

    /// Whether the forward control is enabled right now.
    pub fn can_advance(&self) -> bool {
        !self.closed && guard::can_advance(&self.state, self.directory)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn apply(&mut self, action: WizardAction) -> Result<&WizardState, WizardError> {
        self.ensure_open()?;
        self.state = transition(&self.state, self.directory, action)?;
        Ok(&self.state)
    }

    pub fn set_location(&mut self, text: impl Into<String>) -> Result<&WizardState, WizardError> {
        self.apply(WizardAction::SetLocation(text.into()))
    }

    pub fn select_center(&mut self, id: impl Into<String>) -> Result<&WizardState, WizardError> {
        self.apply(WizardAction::SelectCenter(id.into()))
    }

    pub fn set_date(&mut self, date: impl Into<String>) -> Result<&WizardState, WizardError> {
        self.apply(WizardAction::SetDate(date.into()))
    }

    pub fn set_time(&mut self, time: impl Into<String>) -> Result<&WizardState, WizardError> {
        self.apply(WizardAction::SetTime(time.into()))
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<&WizardState, WizardError> {
        self.apply(WizardAction::SetName(name.into()))
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<&WizardState, WizardError> {
        self.apply(WizardAction::SetEmail(email.into()))
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) -> Result<&WizardState, WizardError> {
        self.apply(WizardAction::SetPhone(phone.into()))
    }

    pub fn next(&mut self) -> Result<&WizardState, WizardError> {
        self.apply(WizardAction::Next)
    }

    /// Steps back one stage. On the first step this cancels the session.
    pub fn back(&mut self) -> Result<&WizardState, WizardError> {
        if self.step() == WizardStep::Location {
            self.cancel()?;
            return Ok(&self.state);
        }
        self.apply(WizardAction::Back)
    }

    /// Leaves the wizard from the first step.
    pub fn cancel(&mut self) -> Result<(), WizardError> {
        self.ensure_open()?;
        if self.step() != WizardStep::Location {
            return Err(WizardError::NotAvailable {
                action: "cancel",
                step: self.step(),
            });
        }
        self.closed = true;
        info!("booking cancelled");
        (self.on_cancel)();
        Ok(())
    }

    /// Leaves the confirmation screen, handing the booking to the caller.
    pub fn finish(&mut self) -> Result<(), WizardError> {
        self.ensure_open()?;
        let WizardState::Confirmation(booking) = &self.state else {
            return Err(WizardError::NotAvailable {
                action: "finish",
                step: self.step(),
            });
        };
        let booking = booking.clone();
        self.closed = true;
        info!(
            center = booking.center_name(),
            date = booking.date(),
            time = booking.time(),
            "booking completed"
        );
        (self.on_complete)(booking);
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), WizardError> {
        if self.closed {
            Err(WizardError::Closed)
        } else {
            Ok(())
        }
    }
}

impl fmt::Debug for BookingWizard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingWizard")
            .field("state", &self.state)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}
