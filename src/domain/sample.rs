//! Built-in data set used when no external directory is configured.

use super::{
    Appointment, AppointmentStatus, BloodNeed, Center, CenterDirectory, DonorProfile,
    InventoryItem, Preferences, Urgency,
};

pub fn centers() -> CenterDirectory {
    CenterDirectory::new(vec![
        Center::new("1", "Metro Blood Center")
            .with_address("123 Main St, Downtown")
            .with_distance("0.8 miles")
            .with_hours("08:00 - 18:00")
            .with_slots(["09:00", "10:30", "14:00"]),
        Center::new("2", "St. Mary's Hospital")
            .with_address("45 River Rd, Northside")
            .with_distance("2.4 miles")
            .with_hours("24/7")
            .with_slots(["11:00", "13:00", "16:30"]),
        Center::new("3", "Community Hall Drive")
            .with_address("88 Oak Ave, West End")
            .with_distance("5.1 miles")
            .with_hours("09:00 - 15:00")
            .with_slots(["09:30", "12:00"]),
    ])
}

pub fn donor() -> DonorProfile {
    DonorProfile {
        name: "Alex Sterling".into(),
        points: 1250,
        blood_type: "O+".into(),
        preferences: Preferences {
            notifications: true,
            preferred_centers: vec!["Downtown Hub".into()],
        },
    }
}

pub fn needs() -> Vec<BloodNeed> {
    let need = |id: &str, blood_type: &str, urgency, location: &str, requester: &str| BloodNeed {
        id: id.into(),
        blood_type: blood_type.into(),
        urgency,
        location: location.into(),
        requester: requester.into(),
    };
    vec![
        need("1", "A-", Urgency::Critical, "General Hospital", "Trauma Unit"),
        need("2", "O+", Urgency::High, "City Clinic", "Surgery Dept"),
        need("3", "B+", Urgency::Moderate, "Children's Center", "Oncology"),
    ]
}

pub fn inventory() -> Vec<InventoryItem> {
    [
        ("A+", 65),
        ("A-", 20),
        ("B+", 80),
        ("B-", 45),
        ("O+", 55),
        ("O-", 15),
        ("AB+", 90),
        ("AB-", 30),
    ]
    .into_iter()
    .map(|(blood_type, level)| InventoryItem::new(blood_type, level))
    .collect()
}

pub fn past_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "a1".into(),
            center_id: "1".into(),
            center_name: "Metro Blood Center".into(),
            date: "2023-10-15".into(),
            time: "10:00".into(),
            status: AppointmentStatus::Completed,
            booked_at: None,
        },
        Appointment {
            id: "a2".into(),
            center_id: "2".into(),
            center_name: "St. Mary's Hospital".into(),
            date: "2023-06-22".into(),
            time: "14:30".into(),
            status: AppointmentStatus::Completed,
            booked_at: None,
        },
    ]
}
