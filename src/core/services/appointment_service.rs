use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{Appointment, AppointmentStatus, CompletedBooking};

/// In-memory appointment history for the current donor.
///
/// Bookings are kept for the lifetime of the process only.
#[derive(Debug, Clone, Default)]
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
}

impl AppointmentBook {
    pub fn new(history: Vec<Appointment>) -> Self {
        Self {
            appointments: history,
        }
    }

    /// Records a finished booking as an upcoming appointment.
    pub fn record(&mut self, booking: &CompletedBooking, booked_at: DateTime<Utc>) -> &Appointment {
        let appointment = Appointment::from_booking(booking, booked_at);
        info!(
            id = %appointment.id,
            center = %appointment.center_name,
            "appointment recorded"
        );
        let index = self.appointments.len();
        self.appointments.push(appointment);
        &self.appointments[index]
    }

    /// Upcoming appointments, most recently booked first.
    pub fn upcoming(&self) -> Vec<&Appointment> {
        let mut upcoming: Vec<_> = self
            .appointments
            .iter()
            .filter(|appt| appt.status == AppointmentStatus::Upcoming)
            .collect();
        upcoming.sort_by(|a, b| b.booked_at.cmp(&a.booked_at));
        upcoming
    }

    /// Finished or cancelled appointments, newest date first.
    pub fn past(&self) -> Vec<&Appointment> {
        let mut past: Vec<_> = self
            .appointments
            .iter()
            .filter(|appt| appt.status != AppointmentStatus::Upcoming)
            .collect();
        past.sort_by(|a, b| b.date.cmp(&a.date));
        past
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}
