//! Booking records: the in-progress draft, the finished booking, and the
//! appointment a finished booking turns into.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::center::Center;

/// Form data accumulated across the wizard steps.
///
/// Drafts are values: every `with_*` method returns a new draft and leaves
/// the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub location: String,
    pub center_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl BookingDraft {
    /// Empty draft with the donor name pre-filled.
    pub fn for_donor(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_location(&self, location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..self.clone()
        }
    }

    /// Selects `center`, dropping a previously chosen time the center does not offer.
    pub fn with_center(&self, center: &Center) -> Self {
        let time = self
            .time
            .as_ref()
            .filter(|slot| center.has_slot(slot))
            .cloned();
        Self {
            center_id: Some(center.id.clone()),
            time,
            ..self.clone()
        }
    }

    pub fn with_date(&self, date: &str) -> Self {
        Self {
            date: non_blank(date),
            ..self.clone()
        }
    }

    pub fn with_time(&self, time: &str) -> Self {
        Self {
            time: non_blank(time),
            ..self.clone()
        }
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_email(&self, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..self.clone()
        }
    }

    pub fn with_phone(&self, phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            ..self.clone()
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A draft that passed every step, paired with the center it resolved to.
///
/// Only the booking wizard constructs these; see `crate::booking`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedBooking {
    draft: BookingDraft,
    center: Center,
}

impl CompletedBooking {
    pub(crate) fn new(draft: BookingDraft, center: Center) -> Self {
        Self { draft, center }
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn center(&self) -> &Center {
        &self.center
    }

    pub fn center_name(&self) -> &str {
        &self.center.name
    }

    pub fn date(&self) -> &str {
        self.draft.date.as_deref().unwrap_or_default()
    }

    pub fn time(&self) -> &str {
        self.draft.time.as_deref().unwrap_or_default()
    }

    pub fn donor_name(&self) -> &str {
        &self.draft.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "Upcoming",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

/// Appointment shown in the donor's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub center_id: String,
    pub center_name: String,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booked_at: Option<DateTime<Utc>>,
}

impl Appointment {
    /// Creates an upcoming appointment from a finished booking.
    pub fn from_booking(booking: &CompletedBooking, booked_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            center_id: booking.center().id.clone(),
            center_name: booking.center_name().to_string(),
            date: booking.date().to_string(),
            time: booking.time().to_string(),
            status: AppointmentStatus::Upcoming,
            booked_at: Some(booked_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(id: &str, slots: &[&str]) -> Center {
        Center::new(id, format!("Center {id}")).with_slots(slots.iter().copied())
    }

    #[test]
    fn updates_leave_original_untouched() {
        let base = BookingDraft::for_donor("Jane");
        let next = base.with_location("Downtown");
        assert_eq!(base.location, "");
        assert_eq!(next.location, "Downtown");
        assert_eq!(next.name, "Jane");
    }

    #[test]
    fn switching_center_drops_foreign_time() {
        let a = center("a", &["09:00", "10:30"]);
        let b = center("b", &["11:00"]);
        let draft = BookingDraft::default().with_center(&a).with_time("10:30");
        let switched = draft.with_center(&b);
        assert_eq!(switched.center_id.as_deref(), Some("b"));
        assert_eq!(switched.time, None);
    }

    #[test]
    fn switching_center_keeps_shared_time() {
        let a = center("a", &["09:00"]);
        let b = center("b", &["09:00", "12:00"]);
        let draft = BookingDraft::default().with_center(&a).with_time("09:00");
        assert_eq!(draft.with_center(&b).time.as_deref(), Some("09:00"));
    }

    #[test]
    fn blank_date_clears_value() {
        let draft = BookingDraft::default().with_date("2024-05-01");
        assert_eq!(draft.with_date("   ").date, None);
    }

    #[test]
    fn appointment_copies_booking_details() {
        let c = center("1", &["10:30"]);
        let draft = BookingDraft::for_donor("Jane")
            .with_center(&c)
            .with_date("2024-05-01")
            .with_time("10:30");
        let booking = CompletedBooking::new(draft, c);
        let appointment = Appointment::from_booking(&booking, Utc::now());
        assert_eq!(appointment.center_name, "Center 1");
        assert_eq!(appointment.time, "10:30");
        assert_eq!(appointment.status, AppointmentStatus::Upcoming);
        assert!(Uuid::parse_str(&appointment.id).is_ok());
    }
}
