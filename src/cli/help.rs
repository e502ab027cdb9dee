use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Available commands");
    for entry in registry.list() {
        output::print(
            output::MessageKind::Plain,
            format!("  {:<10} {}", entry.name, entry.description),
        );
    }
    output::hint("Use `help <command>` for details. Press Tab to complete command names.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(format!("Help: {}", entry.name));
    output::print(
        output::MessageKind::Plain,
        format!("  Description: {}", entry.description),
    );
    output::print(output::MessageKind::Plain, format!("  Usage: {}", entry.usage));
}
