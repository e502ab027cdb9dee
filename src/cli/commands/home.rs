use crate::assistant::ChatRole;
use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandRegistry;
use crate::cli::render;
use crate::core::services::DashboardService;

pub(super) fn register(registry: &mut CommandRegistry) {
    registry.register(
        "dashboard",
        "dashboard",
        "Show urgent requests and blood bank inventory",
        cmd_dashboard,
    );
    registry.register(
        "profile",
        "profile",
        "Show donor details and appointment history",
        cmd_profile,
    );
    registry.register("centers", "centers", "List donation centers", cmd_centers);
    registry.register(
        "ask",
        "ask <question>",
        "Ask HemoBot about eligibility or the donation process",
        cmd_ask,
    );
}

pub(crate) fn show_dashboard(context: &ShellContext<'_>) {
    let summary = DashboardService::summarize(
        &context.needs,
        &context.inventory,
        context.config.low_stock_threshold,
    );
    output::print(output::MessageKind::Plain, render::header_line(&context.donor));
    output::lines(&render::dashboard_lines(&summary));
    if !summary.low_stock.is_empty() {
        output::warning(format!("Low stock: {}", summary.low_stock.join(", ")));
    }
}

fn cmd_dashboard(context: &mut ShellContext<'_>, _args: &[&str]) -> CommandResult {
    show_dashboard(context);
    Ok(())
}

fn cmd_profile(context: &mut ShellContext<'_>, _args: &[&str]) -> CommandResult {
    let book = context.appointments.borrow();
    output::lines(&render::profile_lines(&context.donor, &book));
    Ok(())
}

fn cmd_centers(context: &mut ShellContext<'_>, _args: &[&str]) -> CommandResult {
    output::section("Donation Centers");
    output::lines(&render::center_lines(context.directory));
    Ok(())
}

fn cmd_ask(context: &mut ShellContext<'_>, args: &[&str]) -> CommandResult {
    let question = args.join(" ");
    match context.chat.send(&question) {
        Some(reply) if reply.role == ChatRole::Bot => {
            output::print(output::MessageKind::Plain, format!("HemoBot: {}", reply.text));
            Ok(())
        }
        Some(_) => Ok(()),
        None => {
            if let Some(greeting) = context.chat.messages().first() {
                output::print(output::MessageKind::Plain, format!("HemoBot: {}", greeting.text));
            }
            output::hint("usage: ask <question>");
            Ok(())
        }
    }
}
