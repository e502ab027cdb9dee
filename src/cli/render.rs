//! Plain-text screens. Lines starting with `# ` are section headers; see
//! [`crate::cli::output::lines`].

use crate::booking::WizardState;
use crate::core::services::{AppointmentBook, DashboardSummary};
use crate::domain::{Appointment, BookingDraft, CenterDirectory, CompletedBooking, DonorProfile};

const BAR_WIDTH: usize = 20;

pub fn header_line(donor: &DonorProfile) -> String {
    format!("HEMOLINK | {} | {} Credits", donor.name, donor.points)
}

pub fn dashboard_lines(summary: &DashboardSummary) -> Vec<String> {
    let mut lines = vec![
        "# Save a Life Today".to_string(),
        "Your contribution makes a difference. Type `book` to schedule your donation.".to_string(),
        "# Urgent Requests".to_string(),
    ];
    for need in &summary.needs {
        lines.push(format!(
            "  {:<5} {:<10} {} ({})",
            need.blood_type,
            need.urgency.to_string(),
            need.location,
            need.requester
        ));
    }
    lines.push("# Local Blood Bank Inventory".to_string());
    for status in &summary.inventory {
        let filled = (usize::from(status.level) * BAR_WIDTH / 100).min(BAR_WIDTH);
        lines.push(format!(
            "  {:<5} {}{} {:>3}%{}",
            status.blood_type,
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH - filled),
            status.level,
            if status.low { "  LOW" } else { "" }
        ));
    }
    lines
}

pub fn profile_lines(donor: &DonorProfile, book: &AppointmentBook) -> Vec<String> {
    let mut lines = vec![
        format!("# {}", donor.name),
        format!("Blood Type: {}", donor.blood_type),
        format!("{} Credit Points", donor.points),
        "# Upcoming Appointments".to_string(),
    ];
    push_appointments(&mut lines, &book.upcoming());
    lines.push("# Past Appointments".to_string());
    push_appointments(&mut lines, &book.past());
    lines.push("# Preferences".to_string());
    lines.push(format!(
        "  Notifications: {}",
        if donor.preferences.notifications {
            "Enabled"
        } else {
            "Disabled"
        }
    ));
    lines.push(format!(
        "  Preferred Center: {}",
        donor.preferred_center().unwrap_or("(none)")
    ));
    lines
}

fn push_appointments(lines: &mut Vec<String>, appointments: &[&Appointment]) {
    if appointments.is_empty() {
        lines.push("  (none)".to_string());
    }
    for appt in appointments {
        lines.push(format!(
            "  {} {}  {}  {}",
            appt.date,
            appt.time,
            appt.center_name,
            appt.status.label()
        ));
    }
}

pub fn center_lines(directory: &CenterDirectory) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, center) in directory.centers().iter().enumerate() {
        lines.push(format!("  [{}] {} (id {})", index + 1, center.name, center.id));
        lines.push(format!(
            "      {} | {} | {}",
            center.address, center.distance, center.hours
        ));
    }
    lines
}

/// Screen for the wizard's current step.
pub fn step_lines(state: &WizardState, directory: &CenterDirectory, can_advance: bool) -> Vec<String> {
    if let WizardState::Confirmation(booking) = state {
        return confirmation_lines(booking);
    }

    let step = state.step();
    let draft = state.draft();
    let mut lines = vec![format!("# Step {}/5: {}", step.index(), step.title())];
    match state {
        WizardState::Location(_) => {
            lines.push(format!("Search City or Zip: {}", or_empty(&draft.location)));
            lines.push("Commands: `location <city or zip>`, `next`, `cancel`".to_string());
        }
        WizardState::CenterSelection(_) => {
            lines.extend(center_lines(directory));
            lines.push("Commands: `center <id or number>`, `back`".to_string());
            return lines;
        }
        WizardState::DateTime(_) => {
            let center = draft.center_id.as_deref().and_then(|id| directory.find(id));
            lines.push(format!(
                "Center: {}",
                center.map(|c| c.name.as_str()).unwrap_or("(none)")
            ));
            lines.push(format!("Date: {}", draft.date.as_deref().unwrap_or("(not set)")));
            if let (Some(center), Some(_)) = (center, draft.date.as_ref()) {
                lines.push(format!("Available Slots: {}", slot_row(draft, &center.available_slots)));
            }
            lines.push("Commands: `date <YYYY-MM-DD>`, `time <slot>`, `next`, `back`".to_string());
        }
        WizardState::DonorDetails(_) => {
            lines.push(format!("Name: {}", or_empty(&draft.name)));
            lines.push(format!("Email: {}", or_empty(&draft.email)));
            lines.push(format!("Phone: {}", or_empty(&draft.phone)));
            lines.push("Commands: `name <text>`, `email <text>`, `phone <text>`, `next`, `back`".to_string());
        }
        WizardState::Confirmation(_) => {}
    }
    lines.push(format!(
        "Continue: {}",
        if can_advance { "enabled" } else { "disabled" }
    ));
    lines
}

fn slot_row(draft: &BookingDraft, slots: &[String]) -> String {
    slots
        .iter()
        .map(|slot| {
            if draft.time.as_deref() == Some(slot.as_str()) {
                format!("[{slot}]*")
            } else {
                format!("[{slot}]")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn or_empty(value: &str) -> &str {
    if value.trim().is_empty() {
        "(empty)"
    } else {
        value
    }
}

pub fn confirmation_lines(booking: &CompletedBooking) -> Vec<String> {
    vec![
        "# Appointment Confirmed!".to_string(),
        format!(
            "Thank you, {}. Your contribution saves lives.",
            booking.donor_name()
        ),
        format!("Center: {}", booking.center_name()),
        format!("Date & Time: {} at {}", booking.date(), booking.time()),
        "Type `done` to return to the dashboard.".to_string(),
    ]
}
