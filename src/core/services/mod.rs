pub mod appointment_service;
pub mod dashboard_service;

pub use appointment_service::AppointmentBook;
pub use dashboard_service::{DashboardService, DashboardSummary, InventoryStatus};
