//! Booking commands. Each one maps onto a single wizard operation and then
//! redraws the current step.

use crate::booking::{BookingWizard, WizardStep};
use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandRegistry;
use crate::cli::render;

use super::home::show_dashboard;

pub(super) fn register(registry: &mut CommandRegistry) {
    registry.register("book", "book", "Start booking a donation", cmd_book);
    registry.register(
        "location",
        "location <city or zip>",
        "Step 1: set the search location",
        cmd_location,
    );
    registry.register(
        "center",
        "center <id or list number>",
        "Step 2: choose a donation center",
        cmd_center,
    );
    registry.register("date", "date <YYYY-MM-DD>", "Step 3: choose a date", cmd_date);
    registry.register("time", "time <slot>", "Step 3: choose a time slot", cmd_time);
    registry.register("name", "name <full name>", "Step 4: donor name", cmd_name);
    registry.register("email", "email <address>", "Step 4: donor email", cmd_email);
    registry.register("phone", "phone <number>", "Step 4: donor phone", cmd_phone);
    registry.register("next", "next", "Continue to the next step", cmd_next);
    registry.register(
        "back",
        "back",
        "Return to the previous step (cancels on step 1)",
        cmd_back,
    );
    registry.register("cancel", "cancel", "Abandon the booking from step 1", cmd_cancel);
    registry.register(
        "done",
        "done",
        "Close the confirmation and save the appointment",
        cmd_done,
    );
    registry.register("status", "status", "Show the current booking step", cmd_status);
}

fn show_step(context: &ShellContext<'_>) {
    if let Some(wizard) = &context.booking {
        output::lines(&render::step_lines(
            wizard.state(),
            context.directory,
            wizard.can_advance(),
        ));
    }
}

/// Warns and returns `false` when `command` does not belong to the current step.
fn on_step(wizard: &BookingWizard<'_>, expected: WizardStep, command: &str) -> bool {
    let step = wizard.step();
    if step == expected {
        return true;
    }
    output::warning(format!(
        "`{}` applies to Step {}/5: {}. You are on Step {}/5: {}.",
        command,
        expected.index(),
        expected.title(),
        step.index(),
        step.title()
    ));
    false
}

fn joined(args: &[&str], usage: &str) -> Result<String, CommandError> {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(format!("usage: {usage}")));
    }
    Ok(args.join(" "))
}

fn cmd_book(context: &mut ShellContext<'_>, _args: &[&str]) -> CommandResult {
    if context.booking.is_some() {
        output::warning("A booking is already in progress.");
    } else {
        context.open_booking();
    }
    show_step(context);
    Ok(())
}

fn cmd_location(context: &mut ShellContext<'_>, args: &[&str]) -> CommandResult {
    let text = joined(args, "location <city or zip>")?;
    let wizard = context.booking_mut()?;
    if on_step(wizard, WizardStep::Location, "location") {
        wizard.set_location(text)?;
        show_step(context);
    }
    Ok(())
}

fn cmd_center(context: &mut ShellContext<'_>, args: &[&str]) -> CommandResult {
    let key = joined(args, "center <id or list number>")?;
    let directory = context.directory;
    let wizard = context.booking_mut()?;
    if !on_step(wizard, WizardStep::CenterSelection, "center") {
        return Ok(());
    }
    let center = directory.resolve(&key).ok_or_else(|| {
        CommandError::InvalidArguments(format!(
            "Unknown center `{key}`. Use `centers` to list them."
        ))
    })?;
    wizard.select_center(center.id.clone())?;
    show_step(context);
    Ok(())
}

fn cmd_date(context: &mut ShellContext<'_>, args: &[&str]) -> CommandResult {
    let date = joined(args, "date <YYYY-MM-DD>")?;
    let wizard = context.booking_mut()?;
    if on_step(wizard, WizardStep::DateTime, "date") {
        wizard.set_date(date)?;
        show_step(context);
    }
    Ok(())
}

fn cmd_time(context: &mut ShellContext<'_>, args: &[&str]) -> CommandResult {
    let slot = joined(args, "time <slot>")?;
    let wizard = context.booking_mut()?;
    if !on_step(wizard, WizardStep::DateTime, "time") {
        return Ok(());
    }
    if wizard.draft().date.is_none() {
        output::warning("Pick a date before choosing a time.");
        return Ok(());
    }
    if let Some(center) = wizard.selected_center() {
        if !center.has_slot(slot.trim()) {
            output::warning(format!(
                "{} has no `{}` slot. Available: {}",
                center.name,
                slot.trim(),
                center.available_slots.join(", ")
            ));
            return Ok(());
        }
    }
    wizard.set_time(slot)?;
    show_step(context);
    Ok(())
}

fn cmd_name(context: &mut ShellContext<'_>, args: &[&str]) -> CommandResult {
    let name = joined(args, "name <full name>")?;
    let wizard = context.booking_mut()?;
    if on_step(wizard, WizardStep::DonorDetails, "name") {
        wizard.set_name(name)?;
        show_step(context);
    }
    Ok(())
}

fn cmd_email(context: &mut ShellContext<'_>, args: &[&str]) -> CommandResult {
    let email = joined(args, "email <address>")?;
    let wizard = context.booking_mut()?;
    if on_step(wizard, WizardStep::DonorDetails, "email") {
        wizard.set_email(email)?;
        show_step(context);
    }
    Ok(())
}

fn cmd_phone(context: &mut ShellContext<'_>, args: &[&str]) -> CommandResult {
    let phone = joined(args, "phone <number>")?;
    let wizard = context.booking_mut()?;
    if on_step(wizard, WizardStep::DonorDetails, "phone") {
        wizard.set_phone(phone)?;
        show_step(context);
    }
    Ok(())
}

/// Explains why the forward control is disabled on `step`.
fn blocked_reason(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Location => "Enter a city or zip code first.",
        WizardStep::CenterSelection => "Choose a center with `center <id>` to continue.",
        WizardStep::DateTime => "Choose a date and one of the listed time slots first.",
        WizardStep::DonorDetails => "Name, email and phone are all required.",
        WizardStep::Confirmation => "The booking is confirmed. Type `done` to finish.",
    }
}

fn cmd_next(context: &mut ShellContext<'_>, _args: &[&str]) -> CommandResult {
    let wizard = context.booking_mut()?;
    if !wizard.can_advance() {
        output::warning(blocked_reason(wizard.step()));
        return Ok(());
    }
    wizard.next()?;
    show_step(context);
    Ok(())
}

fn cmd_back(context: &mut ShellContext<'_>, _args: &[&str]) -> CommandResult {
    let wizard = context.booking_mut()?;
    if wizard.step().is_terminal() {
        output::warning(blocked_reason(WizardStep::Confirmation));
        return Ok(());
    }
    wizard.back()?;
    if context.release_closed_booking() {
        output::info("Booking cancelled.");
    } else {
        show_step(context);
    }
    Ok(())
}

fn cmd_cancel(context: &mut ShellContext<'_>, _args: &[&str]) -> CommandResult {
    context.booking_mut()?.cancel()?;
    context.release_closed_booking();
    output::info("Booking cancelled.");
    Ok(())
}

fn cmd_done(context: &mut ShellContext<'_>, _args: &[&str]) -> CommandResult {
    context.booking_mut()?.finish()?;
    context.release_closed_booking();
    output::success("Appointment saved. See `profile` for your upcoming appointments.");
    show_dashboard(context);
    Ok(())
}

fn cmd_status(context: &mut ShellContext<'_>, _args: &[&str]) -> CommandResult {
    if context.booking.is_none() {
        return Err(CommandError::NoActiveBooking);
    }
    show_step(context);
    Ok(())
}
