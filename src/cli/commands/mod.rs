mod booking;
mod home;
mod system;

use crate::cli::registry::CommandRegistry;

pub(crate) use home::show_dashboard;

/// Registers every shell command; `help` lists them in this order.
pub(crate) fn register_all(registry: &mut CommandRegistry) {
    home::register(registry);
    booking::register(registry);
    system::register(registry);
}
